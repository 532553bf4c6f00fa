//! Applying one transform to many vectors.

use crate::float_types::Real;
use crate::traits::Transform;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Applies `transform` to every vector in `vectors`, preserving order.
///
/// ```
/// use ostomachion::batch::transform_all;
/// use ostomachion::r3::{HomogeneousVector4R3, TranslationTransform4R3};
///
/// let shift = TranslationTransform4R3::new(0.0, 0.0, 1.0);
/// let moved = transform_all(&shift, &[HomogeneousVector4R3::point(1.0, 2.0, 3.0)]);
/// assert_eq!(moved, vec![HomogeneousVector4R3::point(1.0, 2.0, 4.0)]);
/// ```
#[cfg(not(feature = "parallel"))]
pub fn transform_all<T>(transform: &T, vectors: &[T::Domain]) -> Vec<T::Codomain>
where
    T: Transform<Real>,
{
    vectors.iter().map(|&v| transform.apply(v)).collect()
}

/// Applies `transform` to every vector in `vectors`, preserving order.
///
/// The work is split across rayon's thread pool; every transform in this
/// crate is a plain value, so no synchronization is involved.
///
/// ```
/// use ostomachion::batch::transform_all;
/// use ostomachion::r3::{HomogeneousVector4R3, TranslationTransform4R3};
///
/// let shift = TranslationTransform4R3::new(0.0, 0.0, 1.0);
/// let moved = transform_all(&shift, &[HomogeneousVector4R3::point(1.0, 2.0, 3.0)]);
/// assert_eq!(moved, vec![HomogeneousVector4R3::point(1.0, 2.0, 4.0)]);
/// ```
#[cfg(feature = "parallel")]
pub fn transform_all<T>(transform: &T, vectors: &[T::Domain]) -> Vec<T::Codomain>
where
    T: Transform<Real> + Sync,
    T::Domain: Sync,
    T::Codomain: Send,
{
    vectors.par_iter().map(|&v| transform.apply(v)).collect()
}

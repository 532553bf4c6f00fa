//! Capability traits for vectors and transforms, and the marker lattice that
//! classifies transforms by the geometric property they preserve.
//!
//! ```text
//!              Projective
//!                  |
//!                Affine
//!               /      \
//!           Linear   Translation
//!               \      /
//!               Identity
//! ```
//!
//! The markers carry no methods. They exist so a function can ask for
//! "anything line-preserving" (`T: ProjectiveTransform<S>`) or for
//! "something that fixes the origin" (`T: LinearTransform<S>`) and have the
//! compiler reject everything else.
//!
//! ```
//! use ostomachion::float_types::Real;
//! use ostomachion::r3::{IdentityTransform4R3, LinearTransform4R3, TranslationTransform4R3};
//! use ostomachion::traits::AffineTransform;
//!
//! fn keeps_parallels<T: AffineTransform<Real>>(_: &T) {}
//!
//! keeps_parallels(&IdentityTransform4R3);
//! keeps_parallels(&LinearTransform4R3::scaling(2.0, 2.0, 2.0));
//! keeps_parallels(&TranslationTransform4R3::new(1.0, 0.0, 0.0));
//! ```
//!
//! ```compile_fail
//! use ostomachion::float_types::Real;
//! use ostomachion::r3::TranslationTransform4R3;
//! use ostomachion::traits::LinearTransform;
//!
//! fn fixes_origin<T: LinearTransform<Real>>(_: &T) {}
//!
//! fixes_origin(&TranslationTransform4R3::new(1.0, 0.0, 0.0));
//! ```

use core::ops::{Add, Div, Mul, Neg, Sub};

/// A vector over the scalar field `S`.
///
/// Every operator is total. In particular `Div<S>` must be defined for a
/// zero scalar.
pub trait Vector<S>:
    Copy
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<S, Output = Self>
    + Div<S, Output = Self>
{
    /// The zero vector `v` such that `u + v == u`.
    fn additive_identity() -> Self;

    /// The scalar `s` such that `v * s == v`.
    fn multiplicative_identity() -> S;

    /// Unary plus.
    #[inline]
    fn plus(self) -> Self {
        self
    }
}

/// A map from `Self::Domain` to `Self::Codomain` over the scalar field `S`.
///
/// Composition is associative and usually not commutative: `a.compose(&b)`
/// applies `a` first and then `b`, matching `v * a * b`.
pub trait Transform<S>: Copy + PartialEq + Mul<Output = Self> {
    type Domain: Vector<S>;
    type Codomain: Vector<S>;

    /// Returns the transform that applies `self` and then `rhs`.
    fn compose(&self, rhs: &Self) -> Self;

    /// Applies this transform to a vector.
    fn apply(&self, vector: Self::Domain) -> Self::Codomain;
}

/// A transformation that preserves straight lines.
pub trait ProjectiveTransform<S>: Transform<S> {}

/// A transformation that preserves parallelism and ratios of distances.
pub trait AffineTransform<S>: ProjectiveTransform<S> {}

/// A transformation that preserves vector addition and scalar multiplication.
pub trait LinearTransform<S>: AffineTransform<S> {}

/// A transformation that preserves shape, size, and orientation.
pub trait TranslationTransform<S>: AffineTransform<S> {}

/// The identity transformation.
pub trait IdentityTransform<S>: LinearTransform<S> + TranslationTransform<S> {}

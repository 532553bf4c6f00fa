//! Transforms narrower than a general projective map.
//!
//! Each type here implements exactly the markers its geometry allows, so a
//! generic function bounded on [`LinearTransform`] accepts
//! [`LinearTransform4R3`] and [`IdentityTransform4R3`] but not
//! [`TranslationTransform4R3`] or [`AffineTransform4R3`].
//!
//! Linear parts are 3x3 matrices in the same row-vector convention as
//! [`ProjectiveTransform4R3`]: the image of `(x, y, z)` is `(x, y, z) · L`.
//! A translation moves a point by `W * offset`, so directions are unaffected.

use crate::float_types::Real;
use crate::r3::{HomogeneousVector4R3, ProjectiveColumnTransform4R3, ProjectiveTransform4R3};
use crate::traits::{
    AffineTransform, IdentityTransform, LinearTransform, ProjectiveTransform, Transform,
    TranslationTransform,
};
use core::ops::Mul;
use nalgebra::{Matrix3, Matrix4, Rotation3, Unit, Vector3};

/// The identity transformation of R3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdentityTransform4R3;

/// A transformation that fixes the origin: rotations, scalings, shears, reflections.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearTransform4R3 {
    matrix: Matrix3<Real>,
}

/// A rigid shift by a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TranslationTransform4R3 {
    offset: Vector3<Real>,
}

/// A linear transformation followed by a translation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffineTransform4R3 {
    linear: Matrix3<Real>,
    translation: Vector3<Real>,
}

impl IdentityTransform4R3 {
    pub const fn to_projective(&self) -> ProjectiveTransform4R3 {
        ProjectiveTransform4R3::IDENTITY
    }
}

impl LinearTransform4R3 {
    /// Wraps a 3x3 matrix given in row-vector convention.
    pub const fn from_matrix(matrix: Matrix3<Real>) -> Self {
        LinearTransform4R3 { matrix }
    }

    /// Rotation by `angle` radians about `axis`, counter-clockwise when
    /// looking down the axis towards the origin.
    pub fn rotation(axis: &Unit<Vector3<Real>>, angle: Real) -> Self {
        // nalgebra rotates column vectors; row vectors need the transpose
        let rotation = Rotation3::from_axis_angle(axis, angle);
        Self::from_matrix(rotation.matrix().transpose())
    }

    pub fn rotation_z(angle: Real) -> Self {
        Self::rotation(&Vector3::z_axis(), angle)
    }

    /// Scales by `sx`, `sy`, `sz` along the coordinate axes.
    pub fn scaling(sx: Real, sy: Real, sz: Real) -> Self {
        Self::from_matrix(Matrix3::from_diagonal(&Vector3::new(sx, sy, sz)))
    }

    pub const fn matrix(&self) -> &Matrix3<Real> {
        &self.matrix
    }

    pub fn to_projective(&self) -> ProjectiveTransform4R3 {
        let mut m = Matrix4::identity();
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(&self.matrix);
        ProjectiveTransform4R3::from(m)
    }
}

impl TranslationTransform4R3 {
    pub fn new(x: Real, y: Real, z: Real) -> Self {
        Self::from_vector(Vector3::new(x, y, z))
    }

    pub const fn from_vector(offset: Vector3<Real>) -> Self {
        TranslationTransform4R3 { offset }
    }

    pub const fn offset(&self) -> &Vector3<Real> {
        &self.offset
    }

    pub fn to_projective(&self) -> ProjectiveTransform4R3 {
        let mut m = Matrix4::identity();
        m.fixed_view_mut::<1, 3>(3, 0).copy_from(&self.offset.transpose());
        ProjectiveTransform4R3::from(m)
    }
}

impl AffineTransform4R3 {
    /// Applies `linear` first, then `translation`.
    pub fn new(linear: LinearTransform4R3, translation: TranslationTransform4R3) -> Self {
        AffineTransform4R3 {
            linear: linear.matrix,
            translation: translation.offset,
        }
    }

    pub fn linear(&self) -> LinearTransform4R3 {
        LinearTransform4R3::from_matrix(self.linear)
    }

    pub fn translation(&self) -> TranslationTransform4R3 {
        TranslationTransform4R3::from_vector(self.translation)
    }

    pub fn to_projective(&self) -> ProjectiveTransform4R3 {
        let mut m = Matrix4::identity();
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(&self.linear);
        m.fixed_view_mut::<1, 3>(3, 0).copy_from(&self.translation.transpose());
        ProjectiveTransform4R3::from(m)
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Transform
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

impl Transform<Real> for IdentityTransform4R3 {
    type Domain = HomogeneousVector4R3;
    type Codomain = HomogeneousVector4R3;

    #[inline]
    fn compose(&self, _rhs: &Self) -> Self {
        IdentityTransform4R3
    }

    #[inline]
    fn apply(&self, vector: HomogeneousVector4R3) -> HomogeneousVector4R3 {
        vector
    }
}

impl Transform<Real> for LinearTransform4R3 {
    type Domain = HomogeneousVector4R3;
    type Codomain = HomogeneousVector4R3;

    fn compose(&self, rhs: &Self) -> Self {
        Self::from_matrix(self.matrix * rhs.matrix)
    }

    fn apply(&self, vector: HomogeneousVector4R3) -> HomogeneousVector4R3 {
        self.to_projective().apply(vector)
    }
}

impl Transform<Real> for TranslationTransform4R3 {
    type Domain = HomogeneousVector4R3;
    type Codomain = HomogeneousVector4R3;

    fn compose(&self, rhs: &Self) -> Self {
        Self::from_vector(self.offset + rhs.offset)
    }

    fn apply(&self, vector: HomogeneousVector4R3) -> HomogeneousVector4R3 {
        self.to_projective().apply(vector)
    }
}

impl Transform<Real> for AffineTransform4R3 {
    type Domain = HomogeneousVector4R3;
    type Codomain = HomogeneousVector4R3;

    fn compose(&self, rhs: &Self) -> Self {
        // (v·La + ta)·Lb + tb = v·(La·Lb) + (ta·Lb + tb)
        AffineTransform4R3 {
            linear: self.linear * rhs.linear,
            translation: rhs.linear.transpose() * self.translation + rhs.translation,
        }
    }

    fn apply(&self, vector: HomogeneousVector4R3) -> HomogeneousVector4R3 {
        self.to_projective().apply(vector)
    }
}

impl ProjectiveTransform<Real> for IdentityTransform4R3 {}
impl AffineTransform<Real> for IdentityTransform4R3 {}
impl LinearTransform<Real> for IdentityTransform4R3 {}
impl TranslationTransform<Real> for IdentityTransform4R3 {}
impl IdentityTransform<Real> for IdentityTransform4R3 {}

impl ProjectiveTransform<Real> for LinearTransform4R3 {}
impl AffineTransform<Real> for LinearTransform4R3 {}
impl LinearTransform<Real> for LinearTransform4R3 {}

impl ProjectiveTransform<Real> for TranslationTransform4R3 {}
impl AffineTransform<Real> for TranslationTransform4R3 {}
impl TranslationTransform<Real> for TranslationTransform4R3 {}

impl ProjectiveTransform<Real> for AffineTransform4R3 {}
impl AffineTransform<Real> for AffineTransform4R3 {}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Operators
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

macro_rules! impl_transform_mul {
    ($($t:ty),*) => {$(
        impl Mul for $t {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                self.compose(&rhs)
            }
        }

        impl Mul<$t> for HomogeneousVector4R3 {
            type Output = HomogeneousVector4R3;

            fn mul(self, rhs: $t) -> HomogeneousVector4R3 {
                rhs.apply(self)
            }
        }

        impl Mul<&$t> for HomogeneousVector4R3 {
            type Output = HomogeneousVector4R3;

            fn mul(self, rhs: &$t) -> HomogeneousVector4R3 {
                rhs.apply(self)
            }
        }
    )*};
}

impl_transform_mul!(
    IdentityTransform4R3,
    LinearTransform4R3,
    TranslationTransform4R3,
    AffineTransform4R3
);

/// Rotate/scale first, then shift.
impl Mul<TranslationTransform4R3> for LinearTransform4R3 {
    type Output = AffineTransform4R3;

    fn mul(self, rhs: TranslationTransform4R3) -> AffineTransform4R3 {
        AffineTransform4R3::new(self, rhs)
    }
}

/// Shift first, then rotate/scale; the offset is carried through the linear part.
impl Mul<LinearTransform4R3> for TranslationTransform4R3 {
    type Output = AffineTransform4R3;

    fn mul(self, rhs: LinearTransform4R3) -> AffineTransform4R3 {
        AffineTransform4R3 {
            linear: rhs.matrix,
            translation: rhs.matrix.transpose() * self.offset,
        }
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Widening conversions
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

impl From<IdentityTransform4R3> for LinearTransform4R3 {
    fn from(_: IdentityTransform4R3) -> Self {
        Self::from_matrix(Matrix3::identity())
    }
}

impl From<IdentityTransform4R3> for TranslationTransform4R3 {
    fn from(_: IdentityTransform4R3) -> Self {
        Self::from_vector(Vector3::zeros())
    }
}

impl From<IdentityTransform4R3> for AffineTransform4R3 {
    fn from(identity: IdentityTransform4R3) -> Self {
        Self::new(identity.into(), identity.into())
    }
}

impl From<LinearTransform4R3> for AffineTransform4R3 {
    fn from(linear: LinearTransform4R3) -> Self {
        Self::new(linear, IdentityTransform4R3.into())
    }
}

impl From<TranslationTransform4R3> for AffineTransform4R3 {
    fn from(translation: TranslationTransform4R3) -> Self {
        Self::new(IdentityTransform4R3.into(), translation)
    }
}

macro_rules! impl_into_projective {
    ($($t:ty),*) => {$(
        impl From<$t> for ProjectiveTransform4R3 {
            fn from(t: $t) -> Self {
                t.to_projective()
            }
        }

        impl From<$t> for ProjectiveColumnTransform4R3 {
            fn from(t: $t) -> Self {
                t.to_projective().to_column_form()
            }
        }
    )*};
}

impl_into_projective!(
    IdentityTransform4R3,
    LinearTransform4R3,
    TranslationTransform4R3,
    AffineTransform4R3
);

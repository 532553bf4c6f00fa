//! `ProjectiveTransform4R3`: a 4x4 projective transformation stored by rows.

use crate::errors::ProjectiveError;
use crate::float_types::Real;
use crate::numerics;
use crate::r3::{HomogeneousVector4R3, ProjectiveColumnTransform4R3};
use crate::traits::{ProjectiveTransform, Transform};
use core::ops::Mul;
use nalgebra::Matrix4;
use tracing::debug;

/// A projective (line-preserving) transformation of R3 in homogeneous coordinates.
///
/// The four fields are the **rows** of a 4x4 real matrix `M`, and vectors are
/// transformed as row vectors: `v * t` computes `v · M`. Consequently `a * b`
/// is the transform that applies `a` first and `b` second.
///
/// Equality is structural: two transforms are equal when every stored
/// component is identical. Unlike [`HomogeneousVector4R3`], a transform is not
/// considered equal to a nonzero multiple of itself.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectiveTransform4R3 {
    /// The first row of the transformation matrix.
    pub x: HomogeneousVector4R3,
    /// The second row of the transformation matrix.
    pub y: HomogeneousVector4R3,
    /// The third row of the transformation matrix.
    pub z: HomogeneousVector4R3,
    /// The fourth row of the transformation matrix.
    pub w: HomogeneousVector4R3,
}

impl ProjectiveTransform4R3 {
    pub const IDENTITY: Self = Self::from_rows(
        HomogeneousVector4R3::new(1.0, 0.0, 0.0, 0.0),
        HomogeneousVector4R3::new(0.0, 1.0, 0.0, 0.0),
        HomogeneousVector4R3::new(0.0, 0.0, 1.0, 0.0),
        HomogeneousVector4R3::new(0.0, 0.0, 0.0, 1.0),
    );

    pub const fn from_rows(
        x: HomogeneousVector4R3,
        y: HomogeneousVector4R3,
        z: HomogeneousVector4R3,
        w: HomogeneousVector4R3,
    ) -> Self {
        ProjectiveTransform4R3 { x, y, z, w }
    }

    pub const fn rows(&self) -> [HomogeneousVector4R3; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// The raw matrix entries, row by row.
    pub const fn to_array(&self) -> [[Real; 4]; 4] {
        [
            self.x.to_array(),
            self.y.to_array(),
            self.z.to_array(),
            self.w.to_array(),
        ]
    }

    pub fn to_matrix(&self) -> Matrix4<Real> {
        Matrix4::from(*self)
    }

    /// Swaps rows and columns of the underlying matrix.
    pub fn transpose(&self) -> Self {
        Self::from(self.to_matrix().transpose())
    }

    /// The same transformation stored column by column.
    ///
    /// The rows of `M` become the columns of `N = Mᵀ`, so the four fields are
    /// carried over unchanged.
    pub const fn to_column_form(&self) -> ProjectiveColumnTransform4R3 {
        ProjectiveColumnTransform4R3::from_columns(self.x, self.y, self.z, self.w)
    }

    /// Returns the transform that undoes this one.
    pub fn try_inverse(&self) -> Result<Self, ProjectiveError> {
        match self.to_matrix().try_inverse() {
            Some(inverse) => Ok(Self::from(inverse)),
            None => {
                debug!(transform = ?self, "projective transform is singular");
                Err(ProjectiveError::SingularTransform)
            },
        }
    }
}

impl Default for ProjectiveTransform4R3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for ProjectiveTransform4R3 {
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl Transform<Real> for ProjectiveTransform4R3 {
    type Domain = HomogeneousVector4R3;
    type Codomain = HomogeneousVector4R3;

    fn compose(&self, rhs: &Self) -> Self {
        Self::from(numerics::multiply(&self.to_matrix(), &rhs.to_matrix()))
    }

    fn apply(&self, vector: HomogeneousVector4R3) -> HomogeneousVector4R3 {
        HomogeneousVector4R3::from(numerics::transform(&vector.into(), &self.to_matrix()))
    }
}

impl ProjectiveTransform<Real> for ProjectiveTransform4R3 {}

impl Mul for ProjectiveTransform4R3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl Mul<ProjectiveTransform4R3> for HomogeneousVector4R3 {
    type Output = HomogeneousVector4R3;

    fn mul(self, rhs: ProjectiveTransform4R3) -> HomogeneousVector4R3 {
        rhs.apply(self)
    }
}

impl Mul<&ProjectiveTransform4R3> for HomogeneousVector4R3 {
    type Output = HomogeneousVector4R3;

    fn mul(self, rhs: &ProjectiveTransform4R3) -> HomogeneousVector4R3 {
        rhs.apply(self)
    }
}

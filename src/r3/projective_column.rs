//! `ProjectiveColumnTransform4R3`: a 4x4 projective transformation stored by columns.

use crate::errors::ProjectiveError;
use crate::float_types::Real;
use crate::numerics;
use crate::r3::{HomogeneousVector4R3, ProjectiveTransform4R3};
use crate::traits::{ProjectiveTransform, Transform};
use core::ops::Mul;
use nalgebra::Matrix4;
use tracing::debug;

/// A projective (line-preserving) transformation of R3 stored column by column.
///
/// The four fields are the **columns** of the 4x4 matrix `N`, and vectors are
/// treated as column vectors: `v * t` is `N · v`. Since `N · v` equals
/// `v · Nᵀ`, a column form and a [`ProjectiveTransform4R3`] holding the same
/// four vectors apply the same map, and `to_matrix()` of one is the transpose
/// of `to_matrix()` of the other. `N` follows nalgebra's own convention, so
/// `t.to_matrix() * v` agrees with `v * t` as well.
///
/// ```
/// use ostomachion::{HomogeneousVector4R3, ProjectiveColumnTransform4R3, ProjectiveTransform4R3};
///
/// let (x, y, z, w) = (
///     HomogeneousVector4R3::new(1.0, 2.0, 0.0, 0.0),
///     HomogeneousVector4R3::new(0.0, 1.0, 0.0, 0.0),
///     HomogeneousVector4R3::new(0.0, 0.0, 1.0, 0.0),
///     HomogeneousVector4R3::new(5.0, 0.0, 0.0, 1.0),
/// );
/// let row = ProjectiveTransform4R3::from_rows(x, y, z, w);
/// let column = ProjectiveColumnTransform4R3::from_columns(x, y, z, w);
///
/// let v = HomogeneousVector4R3::new(1.0, 1.0, 0.0, 1.0);
/// assert_eq!((v * column).to_array(), (v * row).to_array());
/// ```
///
/// Equality is structural, as for the row form.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectiveColumnTransform4R3 {
    /// The first column of the transformation matrix.
    pub x: HomogeneousVector4R3,
    /// The second column of the transformation matrix.
    pub y: HomogeneousVector4R3,
    /// The third column of the transformation matrix.
    pub z: HomogeneousVector4R3,
    /// The fourth column of the transformation matrix.
    pub w: HomogeneousVector4R3,
}

impl ProjectiveColumnTransform4R3 {
    pub const IDENTITY: Self = Self::from_columns(
        HomogeneousVector4R3::new(1.0, 0.0, 0.0, 0.0),
        HomogeneousVector4R3::new(0.0, 1.0, 0.0, 0.0),
        HomogeneousVector4R3::new(0.0, 0.0, 1.0, 0.0),
        HomogeneousVector4R3::new(0.0, 0.0, 0.0, 1.0),
    );

    pub const fn from_columns(
        x: HomogeneousVector4R3,
        y: HomogeneousVector4R3,
        z: HomogeneousVector4R3,
        w: HomogeneousVector4R3,
    ) -> Self {
        ProjectiveColumnTransform4R3 { x, y, z, w }
    }

    pub const fn columns(&self) -> [HomogeneousVector4R3; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// The raw matrix entries, column by column.
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

    pub fn transpose(&self) -> Self {
        Self::from(self.to_matrix().transpose())
    }

    /// The same transformation stored row by row, as `M = Nᵀ`.
    pub const fn to_row_form(&self) -> ProjectiveTransform4R3 {
        ProjectiveTransform4R3::from_rows(self.x, self.y, self.z, self.w)
    }

    pub fn try_inverse(&self) -> Result<Self, ProjectiveError> {
        match self.to_matrix().try_inverse() {
            Some(inverse) => Ok(Self::from(inverse)),
            None => {
                debug!(transform = ?self, "projective column transform is singular");
                Err(ProjectiveError::SingularTransform)
            },
        }
    }
}

impl Default for ProjectiveColumnTransform4R3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for ProjectiveColumnTransform4R3 {
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl Transform<Real> for ProjectiveColumnTransform4R3 {
    type Domain = HomogeneousVector4R3;
    type Codomain = HomogeneousVector4R3;

    // Applying `self` then `rhs` is `N_rhs · N_self · v`.
    fn compose(&self, rhs: &Self) -> Self {
        Self::from(numerics::multiply(&rhs.to_matrix(), &self.to_matrix()))
    }

    fn apply(&self, vector: HomogeneousVector4R3) -> HomogeneousVector4R3 {
        let rows = self.to_matrix().transpose();
        HomogeneousVector4R3::from(numerics::transform(&vector.into(), &rows))
    }
}

impl ProjectiveTransform<Real> for ProjectiveColumnTransform4R3 {}

impl Mul for ProjectiveColumnTransform4R3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl Mul<ProjectiveColumnTransform4R3> for HomogeneousVector4R3 {
    type Output = HomogeneousVector4R3;

    fn mul(self, rhs: ProjectiveColumnTransform4R3) -> HomogeneousVector4R3 {
        rhs.apply(self)
    }
}

impl Mul<&ProjectiveColumnTransform4R3> for HomogeneousVector4R3 {
    type Output = HomogeneousVector4R3;

    fn mul(self, rhs: &ProjectiveColumnTransform4R3) -> HomogeneousVector4R3 {
        rhs.apply(self)
    }
}

impl From<ProjectiveColumnTransform4R3> for ProjectiveTransform4R3 {
    fn from(t: ProjectiveColumnTransform4R3) -> Self {
        t.to_row_form()
    }
}

impl From<ProjectiveTransform4R3> for ProjectiveColumnTransform4R3 {
    fn from(t: ProjectiveTransform4R3) -> Self {
        t.to_column_form()
    }
}

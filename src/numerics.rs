//! Bridge between the homogeneous types and nalgebra's dense `Vector4` / `Matrix4`.
//!
//! All arithmetic on transforms is delegated to nalgebra. The row form treats
//! vectors as **row vectors**: applying a matrix is `v · M`, so composing `A`
//! then `B` is the product `A · B`. The column form stores `N = Mᵀ` and treats
//! vectors as column vectors: applying it is `N · v`, which is the same
//! `v · Nᵀ`, and composing `A` then `B` is `N_B · N_A`.
//!
//! The homogeneous types are `#[repr(C)]` groups of four `f32`s in
//! `(X, Y, Z, W)` order, the same layout as nalgebra's storage, but the
//! conversions here copy the scalars rather than reinterpret memory.

use crate::float_types::Real;
use crate::r3::{HomogeneousVector4R3, ProjectiveColumnTransform4R3, ProjectiveTransform4R3};
use nalgebra::{Matrix4, RowVector4, Vector4};

/// The matrix product `left · right`.
#[inline]
pub fn multiply(left: &Matrix4<Real>, right: &Matrix4<Real>) -> Matrix4<Real> {
    left * right
}

/// Applies `matrix` to the row vector `vector`, i.e. `vector · matrix`.
#[inline]
pub fn transform(vector: &Vector4<Real>, matrix: &Matrix4<Real>) -> Vector4<Real> {
    (vector.transpose() * matrix).transpose()
}

impl From<HomogeneousVector4R3> for Vector4<Real> {
    #[inline]
    fn from(v: HomogeneousVector4R3) -> Self {
        Vector4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vector4<Real>> for HomogeneousVector4R3 {
    #[inline]
    fn from(v: Vector4<Real>) -> Self {
        HomogeneousVector4R3::new(v.x, v.y, v.z, v.w)
    }
}

impl From<HomogeneousVector4R3> for RowVector4<Real> {
    #[inline]
    fn from(v: HomogeneousVector4R3) -> Self {
        RowVector4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<ProjectiveTransform4R3> for Matrix4<Real> {
    fn from(t: ProjectiveTransform4R3) -> Self {
        Matrix4::from_rows(&[
            RowVector4::from(t.x),
            RowVector4::from(t.y),
            RowVector4::from(t.z),
            RowVector4::from(t.w),
        ])
    }
}

impl From<Matrix4<Real>> for ProjectiveTransform4R3 {
    fn from(m: Matrix4<Real>) -> Self {
        let row = |i: usize| HomogeneousVector4R3::from(m.row(i).transpose());
        ProjectiveTransform4R3::from_rows(row(0), row(1), row(2), row(3))
    }
}

impl From<ProjectiveColumnTransform4R3> for Matrix4<Real> {
    fn from(t: ProjectiveColumnTransform4R3) -> Self {
        Matrix4::from_columns(&[
            Vector4::from(t.x),
            Vector4::from(t.y),
            Vector4::from(t.z),
            Vector4::from(t.w),
        ])
    }
}

impl From<Matrix4<Real>> for ProjectiveColumnTransform4R3 {
    fn from(m: Matrix4<Real>) -> Self {
        let column = |j: usize| HomogeneousVector4R3::from(m.column(j).into_owned());
        ProjectiveColumnTransform4R3::from_columns(column(0), column(1), column(2), column(3))
    }
}

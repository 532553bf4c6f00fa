//! Test support library
//! Sample values shared by the integration tests.

#![allow(dead_code)]

use ostomachion::{
    float_types::Real,
    r3::{HomogeneousVector4R3, ProjectiveTransform4R3},
};

/// Shorthand for a raw homogeneous tuple.
pub fn h(x: Real, y: Real, z: Real, w: Real) -> HomogeneousVector4R3 {
    HomogeneousVector4R3::new(x, y, z, w)
}

/// One vector from every canonicalization case, plus negative and fractional entries.
pub fn sample_vectors() -> Vec<HomogeneousVector4R3> {
    vec![
        HomogeneousVector4R3::UNDEFINED,
        HomogeneousVector4R3::ADDITIVE_IDENTITY,
        h(3.0, 0.0, 0.0, 0.0),
        h(-3.0, 5.0, 0.0, 0.0),
        h(1.0, -2.0, 7.0, 0.0),
        h(1.0, 2.0, 3.0, 1.0),
        h(2.0, 4.0, 6.0, 2.0),
        h(1.0, 2.0, 3.0, 3.0),
        h(-0.5, 0.25, 10.0, -4.0),
        h(0.0, 0.0, 0.0, -2.0),
    ]
}

/// Vectors that name affine points (`W != 0`).
pub fn sample_points() -> Vec<HomogeneousVector4R3> {
    sample_vectors()
        .into_iter()
        .filter(HomogeneousVector4R3::is_finite_point)
        .collect()
}

/// Nonzero scalars whose products with the samples are exact.
///
/// Canonical forms are compared exactly, so scaling by something like `0.1`
/// can round differently and break equality.
pub fn exact_scalars() -> Vec<Real> {
    vec![1.0, -1.0, 2.0, -2.0, 0.5, 8.0, -0.25]
}

/// Small integer matrices; their products are exact in `f32`.
pub fn sample_matrices() -> Vec<ProjectiveTransform4R3> {
    vec![
        ProjectiveTransform4R3::IDENTITY,
        ProjectiveTransform4R3::from_rows(
            h(1.0, 2.0, 0.0, 0.0),
            h(0.0, 1.0, 0.0, 0.0),
            h(0.0, 0.0, 1.0, 0.0),
            h(5.0, 0.0, 0.0, 1.0),
        ),
        ProjectiveTransform4R3::from_rows(
            h(0.0, 1.0, 0.0, 0.0),
            h(-1.0, 0.0, 0.0, 0.0),
            h(0.0, 0.0, 1.0, 0.0),
            h(0.0, 0.0, 0.0, 1.0),
        ),
        ProjectiveTransform4R3::from_rows(
            h(2.0, 0.0, 0.0, 1.0),
            h(0.0, 3.0, 0.0, 0.0),
            h(1.0, 0.0, -1.0, 0.0),
            h(0.0, 4.0, 0.0, 2.0),
        ),
        ProjectiveTransform4R3::from_rows(
            h(1.0, 2.0, 3.0, 4.0),
            h(5.0, 6.0, 7.0, 8.0),
            h(9.0, 10.0, 11.0, 12.0),
            h(13.0, 14.0, 15.0, 16.0),
        ),
    ]
}

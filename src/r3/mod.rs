//! Homogeneous coordinates and projective transformations of three-dimensional
//! Euclidean space.

pub mod affine;
pub mod homogeneous;
pub mod projective;
pub mod projective_column;

pub use affine::{AffineTransform4R3, IdentityTransform4R3, LinearTransform4R3, TranslationTransform4R3};
pub use homogeneous::HomogeneousVector4R3;
pub use projective::ProjectiveTransform4R3;
pub use projective_column::ProjectiveColumnTransform4R3;

//! A small algebra of **homogeneous coordinates** and **projective transformations**
//! of three-dimensional Euclidean space, meant as the numeric core of paper
//! folding and cutting tools.
//!
//! - [`HomogeneousVector4R3`] is a point or direction `[X : Y : Z : W]`. Equality
//!   and hashing respect projective equivalence: `[2 : 4 : 6 : 2] == [1 : 2 : 3 : 1]`.
//! - [`ProjectiveTransform4R3`] and [`ProjectiveColumnTransform4R3`] are 4x4
//!   matrices stored by rows or by columns. `v * t` applies a transform and
//!   `a * b` composes two (apply `a`, then `b`).
//! - The [`traits`] module classifies transforms by what they preserve
//!   (projective, affine, linear, translation, identity) so APIs can ask for
//!   exactly the class they need.
//!
//! ```
//! use ostomachion::r3::{HomogeneousVector4R3, LinearTransform4R3, TranslationTransform4R3};
//! use nalgebra::Matrix3;
//!
//! let quarter_turn = LinearTransform4R3::from_matrix(Matrix3::new(
//!     0.0, 1.0, 0.0,
//!     -1.0, 0.0, 0.0,
//!     0.0, 0.0, 1.0,
//! ));
//! let shift = TranslationTransform4R3::new(1.0, 0.0, 0.0);
//!
//! let moved = HomogeneousVector4R3::point(1.0, 0.0, 0.0) * (quarter_turn * shift);
//! assert_eq!(moved, HomogeneousVector4R3::point(1.0, 1.0, 0.0));
//! ```
//!
//! # Features
//! #### Optional
//! - **parallel**: use rayon in [`batch::transform_all`]
//! - **serde**: `Serialize`/`Deserialize` for every value type

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod batch;
pub mod errors;
pub mod float_types;
pub mod numerics;
pub mod r3;
pub mod traits;

pub use errors::ProjectiveError;
pub use r3::{HomogeneousVector4R3, ProjectiveColumnTransform4R3, ProjectiveTransform4R3};

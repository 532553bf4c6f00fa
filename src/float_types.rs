//! Scalar type shared by the R3 algebra.

/// The scalar field of every R3 type in this crate.
///
/// Homogeneous coordinates are stored in single precision so that a
/// [`HomogeneousVector4R3`](crate::r3::HomogeneousVector4R3) has the same
/// layout as a packed `[f32; 4]`.
pub type Real = f32;

// Pi
/// Archimedes' constant (π)
pub const PI: Real = core::f32::consts::PI;

// Frac Pi 2
/// π/2
pub const FRAC_PI_2: Real = core::f32::consts::FRAC_PI_2;

// Tau
/// The full circle constant (τ)
pub const TAU: Real = core::f32::consts::TAU;

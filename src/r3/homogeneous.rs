//! `HomogeneousVector4R3`: points and directions of real projective 3-space.

use crate::errors::ProjectiveError;
use crate::float_types::Real;
use crate::traits::Vector;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Div, Mul, Neg, Sub};
use nalgebra::{Point3, Vector3};
use std::fmt::Display;
use tracing::{debug, trace};

/// A point or direction in R3 written in homogeneous coordinates `[X : Y : Z : W]`.
///
/// When `W != 0` the vector names the affine point `(X/W, Y/W, Z/W)`; when
/// `W == 0` it names a direction (a point at infinity). Any nonzero multiple
/// of the four components names the same entity, so equality and hashing
/// work on the [canonical form](HomogeneousVector4R3::canonicalize).
///
/// The arithmetic treats `(X, Y, Z)` as the numerator of a fraction over `W`:
/// adding two points with `W = 1` is ordinary component-wise addition, and
/// dividing by a scalar multiplies `W` instead of dividing the numerator, so
/// division by zero yields a point at infinity rather than infinities.
///
/// The all-zero tuple is [`UNDEFINED`](HomogeneousVector4R3::UNDEFINED). It is
/// equal only to itself.
///
/// `Debug` prints the raw components, `Display` prints the canonical form.
///
/// # NaN components
///
/// The type implements `Eq` and `Hash` so it can key hash maps, which is only
/// sound when every component is a number. A vector with a NaN component is
/// not equal to itself, and as a map key it can never be found again. Callers
/// must keep NaN out of any vector they compare or hash; [`is_nan`] checks.
///
/// [`is_nan`]: HomogeneousVector4R3::is_nan
#[repr(C)]
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HomogeneousVector4R3 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
    pub w: Real,
}

impl HomogeneousVector4R3 {
    /// `[0 : 0 : 0 : 0]`, which represents no geometric entity.
    pub const UNDEFINED: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// `[0 : 0 : 0 : 1]`, the affine origin.
    pub const ADDITIVE_IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(x: Real, y: Real, z: Real, w: Real) -> Self {
        HomogeneousVector4R3 { x, y, z, w }
    }

    /// The affine point `(x, y, z)`, stored with `W = 1`.
    pub const fn point(x: Real, y: Real, z: Real) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// The direction `(x, y, z)`, stored with `W = 0`.
    pub const fn direction(x: Real, y: Real, z: Real) -> Self {
        Self::new(x, y, z, 0.0)
    }

    pub const fn to_array(self) -> [Real; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// True for the all-zero tuple.
    pub fn is_undefined(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0 && self.w == 0.0
    }

    /// True when any component is NaN. Such a vector is not equal to itself.
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan() || self.w.is_nan()
    }

    /// True for directions, i.e. `W == 0` on anything other than [`Self::UNDEFINED`].
    pub fn is_at_infinity(&self) -> bool {
        self.w == 0.0 && !self.is_undefined()
    }

    /// True when the vector names an affine point (`W != 0`).
    pub fn is_finite_point(&self) -> bool {
        self.w != 0.0
    }

    /// Returns the unique representative of this vector's equivalence class.
    ///
    /// The last nonzero coordinate, scanning `W`, then `Z`, then `Y`, is scaled
    /// to one and everything after it is zero:
    ///
    /// | input              | canonical form             |
    /// |--------------------|----------------------------|
    /// | `W != 0`           | `[X/W : Y/W : Z/W : 1]`    |
    /// | `W = 0, Z != 0`    | `[X/Z : Y/Z : 1 : 0]`      |
    /// | `W = Z = 0, Y != 0`| `[X/Y : 1 : 0 : 0]`        |
    /// | only `X != 0`      | `[1 : 0 : 0 : 0]`          |
    /// | all zero           | unchanged                  |
    ///
    /// Negative zeros in the result are replaced by positive ones, so equal
    /// vectors have bit-identical canonical forms.
    pub fn canonicalize(&self) -> Self {
        let Self { x, y, z, w } = *self;
        if w != 0.0 {
            Self::new(unsigned(x / w), unsigned(y / w), unsigned(z / w), 1.0)
        } else if z != 0.0 {
            Self::new(unsigned(x / z), unsigned(y / z), 1.0, 0.0)
        } else if y != 0.0 {
            Self::new(unsigned(x / y), 1.0, 0.0, 0.0)
        } else if x != 0.0 {
            Self::new(1.0, 0.0, 0.0, 0.0)
        } else {
            trace!("canonicalizing the undefined homogeneous vector");
            Self::UNDEFINED
        }
    }

    /// Reads this vector back as an affine point.
    ///
    /// Fails for [`Self::UNDEFINED`] and for directions.
    pub fn to_point(&self) -> Result<Point3<Real>, ProjectiveError> {
        if self.is_undefined() {
            debug!("no affine point for the undefined homogeneous vector");
            return Err(ProjectiveError::Undefined);
        }
        if self.w == 0.0 {
            debug!(vector = %self, "no affine point for a point at infinity");
            return Err(ProjectiveError::AtInfinity(*self));
        }
        Ok(Point3::new(self.x / self.w, self.y / self.w, self.z / self.w))
    }

    /// Reads this vector back as a Euclidean vector.
    ///
    /// Directions return their `(X, Y, Z)` part verbatim, points return their
    /// position vector. Only [`Self::UNDEFINED`] fails.
    pub fn to_direction(&self) -> Result<Vector3<Real>, ProjectiveError> {
        if self.is_undefined() {
            debug!("no direction for the undefined homogeneous vector");
            return Err(ProjectiveError::Undefined);
        }
        if self.w == 0.0 {
            Ok(Vector3::new(self.x, self.y, self.z))
        } else {
            Ok(Vector3::new(self.x / self.w, self.y / self.w, self.z / self.w))
        }
    }
}

#[inline]
fn unsigned(value: Real) -> Real {
    if value == 0.0 { 0.0 } else { value }
}

impl Vector<Real> for HomogeneousVector4R3 {
    #[inline]
    fn additive_identity() -> Self {
        Self::ADDITIVE_IDENTITY
    }

    #[inline]
    fn multiplicative_identity() -> Real {
        1.0
    }
}

impl Add for HomogeneousVector4R3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x * rhs.w + rhs.x * self.w,
            self.y * rhs.w + rhs.y * self.w,
            self.z * rhs.w + rhs.z * self.w,
            self.w * rhs.w,
        )
    }
}

impl Sub for HomogeneousVector4R3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x * rhs.w - rhs.x * self.w,
            self.y * rhs.w - rhs.y * self.w,
            self.z * rhs.w - rhs.z * self.w,
            self.w * rhs.w,
        )
    }
}

/// Flips the sign of `W` only.
impl Neg for HomogeneousVector4R3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.x, self.y, self.z, -self.w)
    }
}

impl Mul<Real> for HomogeneousVector4R3 {
    type Output = Self;

    fn mul(self, rhs: Real) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w)
    }
}

impl Mul<HomogeneousVector4R3> for Real {
    type Output = HomogeneousVector4R3;

    fn mul(self, rhs: HomogeneousVector4R3) -> HomogeneousVector4R3 {
        rhs * self
    }
}

/// Scales the denominator. Dividing by zero gives a point at infinity.
impl Div<Real> for HomogeneousVector4R3 {
    type Output = Self;

    fn div(self, rhs: Real) -> Self {
        if rhs == 0.0 {
            trace!(vector = ?self, "division by zero sends the vector to infinity");
        }
        Self::new(self.x, self.y, self.z, self.w * rhs)
    }
}

impl PartialEq for HomogeneousVector4R3 {
    fn eq(&self, other: &Self) -> bool {
        self.canonicalize().to_array() == other.canonicalize().to_array()
    }
}

// Reflexive only for vectors without NaN components; see the type docs.
impl Eq for HomogeneousVector4R3 {}

impl Hash for HomogeneousVector4R3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for component in self.canonicalize().to_array() {
            component.to_bits().hash(state);
        }
    }
}

impl Display for HomogeneousVector4R3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = self.canonicalize();
        write!(f, "[{} : {} : {} : {}]", c.x, c.y, c.z, c.w)
    }
}

impl From<[Real; 4]> for HomogeneousVector4R3 {
    fn from([x, y, z, w]: [Real; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<HomogeneousVector4R3> for [Real; 4] {
    fn from(vector: HomogeneousVector4R3) -> Self {
        vector.to_array()
    }
}

/// Embeds a Euclidean vector as the point it points to (`W = 1`).
impl From<Vector3<Real>> for HomogeneousVector4R3 {
    fn from(vector: Vector3<Real>) -> Self {
        Self::point(vector.x, vector.y, vector.z)
    }
}

impl From<Point3<Real>> for HomogeneousVector4R3 {
    fn from(point: Point3<Real>) -> Self {
        Self::point(point.x, point.y, point.z)
    }
}

impl TryFrom<HomogeneousVector4R3> for Point3<Real> {
    type Error = ProjectiveError;

    fn try_from(vector: HomogeneousVector4R3) -> Result<Self, Self::Error> {
        vector.to_point()
    }
}

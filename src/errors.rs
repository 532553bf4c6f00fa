//! Errors for conversions out of projective space

use crate::r3::HomogeneousVector4R3;
use std::fmt::Display;

/// Reasons a projective value has no affine counterpart.
///
/// The algebra itself never fails; these only arise when reading a
/// homogeneous value back as an affine point, or when inverting a matrix.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ProjectiveError {
    /// (Undefined) The all-zero tuple names no geometric entity
    Undefined,
    /// (AtInfinity) W is zero, so the value is a direction and not a point
    AtInfinity(HomogeneousVector4R3),
    /// (SingularTransform) The 4x4 matrix has no inverse
    SingularTransform,
}

impl Display for ProjectiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectiveError::Undefined => write!(f, "(Undefined) The homogeneous vector [0 : 0 : 0 : 0] names no point or direction"),
            ProjectiveError::AtInfinity(vector) => write!(f, "(AtInfinity) {} lies at infinity and has no affine point", vector),
            ProjectiveError::SingularTransform => write!(f, "(SingularTransform) The transformation matrix is not invertible"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_uses_canonical_form() {
        let err = ProjectiveError::AtInfinity(HomogeneousVector4R3::direction(2.0, 0.0, 0.0));
        assert_eq!(
            err.to_string(),
            "(AtInfinity) [1 : 0 : 0 : 0] lies at infinity and has no affine point"
        );
    }
}

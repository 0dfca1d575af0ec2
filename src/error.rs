//! Error taxonomy of the bake.
//!
//! `InvalidJoint` and `DegenerateQuad` are recovered per region by the
//! builder; `NoTrackedUser` means there is nothing to bake this frame;
//! `DimensionMismatch` is a caller contract violation.
use crate::skeleton::JointName;

#[derive(Clone, Debug, PartialEq)]
pub enum BakeError {
    InvalidJoint {
        joint: JointName,
    },
    DegenerateQuad,
    NoTrackedUser,
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}

impl std::fmt::Display for BakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BakeError::InvalidJoint { joint } => {
                write!(f, "joint {} is not resolved this frame", joint.as_str())
            }
            BakeError::DegenerateQuad => write!(f, "source quad is degenerate"),
            BakeError::NoTrackedUser => write!(f, "no user is currently tracked"),
            BakeError::DimensionMismatch {
                what,
                expected,
                found,
            } => write!(f, "{what} mismatch (expected {expected}, found {found})"),
        }
    }
}

impl std::error::Error for BakeError {}

impl BakeError {
    /// Errors the builder absorbs by leaving the region untouched.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BakeError::InvalidJoint { .. } | BakeError::DegenerateQuad
        )
    }
}

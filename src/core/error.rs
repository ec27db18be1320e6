//! # Errors
//!
//! One error kind per operation family, mirroring where each can arise:
//!
//! - [`AxisError`] - construction rejected a name or value
//! - [`AccessError`] - mutation of an existing point was refused
//! - [`AxesError`] - two points from different spaces were combined
//!
//! Every error is returned synchronously by the call that triggered it.
//! Operations are atomic: on failure, no partially-built or partially-mutated
//! point is observable.

use thiserror::Error;

/// Errors raised while validating axis names and values at construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AxisError {
    /// The name is not a non-empty identifier.
    #[error("invalid axis name {0:?}: must be a non-empty identifier")]
    InvalidName(String),

    /// The name collides with a read-only point attribute.
    #[error("axis name {0:?} is reserved")]
    ReservedName(String),

    /// The value is NaN.
    #[error("axis {axis:?} rejected: NaN is not a coordinate")]
    NotANumber { axis: String },
}

/// Errors raised when setting an attribute on an existing point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccessError {
    /// Assignment targeted a reserved, read-only attribute.
    #[error("attribute {0:?} is read-only")]
    ReadOnly(String),

    /// The point has no axis under this name. The axis set is fixed at
    /// construction; widen a space through `Point::derive` instead.
    #[error("point has no axis {0:?}")]
    UnknownAxis(String),

    /// The value is NaN.
    #[error("axis {axis:?} rejected: NaN is not a coordinate")]
    NotANumber { axis: String },
}

/// Two points occupy different spaces (their axis-name sets differ).
///
/// Raised by arithmetic and distance operations. Carries both axis lists for
/// diagnosis - the values played no part in the refusal.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("points occupy different spaces: [{}] vs [{}]", .left.join(", "), .right.join(", "))]
pub struct AxesError {
    /// Axes of the left operand, sorted.
    pub left: Vec<String>,
    /// Axes of the right operand, sorted.
    pub right: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_error_messages() {
        let err = AxisError::InvalidName(" ".to_string());
        assert!(err.to_string().contains("invalid axis name"));

        let err = AxisError::ReservedName("dimensions".to_string());
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn test_access_error_messages() {
        let err = AccessError::ReadOnly("axes".to_string());
        assert!(err.to_string().contains("read-only"));

        let err = AccessError::UnknownAxis("z".to_string());
        assert!(err.to_string().contains("no axis"));
    }

    #[test]
    fn test_axes_error_message_lists_both_spaces() {
        let err = AxesError {
            left: vec!["x".to_string(), "y".to_string()],
            right: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "points occupy different spaces: [x, y] vs [a, b]"
        );
    }
}

//! # Axis Name Rules
//!
//! What may name an axis, and what may not.
//!
//! Axis names are user-chosen identifiers. Two names are off limits because
//! the `Point` API already speaks them: `axes` and `dimensions`. The check is
//! a plain membership test against a fixed set.

use super::error::AxisError;

/// Names that can never be used as axis names.
///
/// These are the read-only accessors every point carries.
pub const RESERVED_NAMES: [&str; 2] = ["axes", "dimensions"];

/// Check whether a name is reserved.
///
/// ```
/// use axispace::is_reserved;
/// assert!(is_reserved("dimensions"));
/// assert!(!is_reserved("x"));
/// ```
pub fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

/// Check whether a name is a valid axis name (an identifier).
///
/// A valid name is non-empty, starts with a letter or underscore, and
/// continues with letters, digits, or underscores. Reservation is a separate
/// question - see [`is_reserved`].
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Validate a name for use as an axis: identifier shape, then reservation.
pub(crate) fn validate_name(name: &str) -> Result<(), AxisError> {
    if !is_valid_name(name) {
        return Err(AxisError::InvalidName(name.to_string()));
    }
    if is_reserved(name) {
        return Err(AxisError::ReservedName(name.to_string()));
    }
    Ok(())
}

/// Validate a coordinate value. NaN is the one f64 that is not a number.
pub(crate) fn validate_value(name: &str, value: f64) -> Result<(), AxisError> {
    if value.is_nan() {
        return Err(AxisError::NotANumber {
            axis: name.to_string(),
        });
    }
    Ok(())
}

//! # Core Domain
//!
//! Pure math, no I/O. The whole of axispace lives here.
//!
//! This module contains the fundamental types and operations:
//! - `Point` - A position in a named-axis space
//! - `PointBuilder` - Staged construction and copy-with-override
//! - axis name rules - identifier validation, reserved names
//! - `AxisError` / `AccessError` / `AxesError` - one error kind per
//!   operation family
//!
//! ## Design Principles
//!
//! - All functions are pure (deterministic, no side effects)
//! - No I/O operations
//! - No external dependencies beyond std and the error derive
//! - Fully testable in isolation

mod axis;
mod builder;
mod error;
mod point;

// Re-exports
pub use axis::{is_reserved, is_valid_name, RESERVED_NAMES};
pub use builder::PointBuilder;
pub use error::{AccessError, AxesError, AxisError};
pub use point::Point;

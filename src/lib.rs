//! # axispace - Named-Axis Coordinate Spaces
//!
//! > "A dimension you can name is a dimension you can reason about"
//!
//! axispace is a small value-type library for points in arbitrary-dimensional
//! coordinate spaces where every dimension ("axis") is identified by a
//! user-chosen name rather than a fixed index.
//!
//! ## Philosophy
//!
//! - **Names over indices** - `point.axis("elevation")`, not `dims[7]`
//! - **Same space or no deal** - Arithmetic is gated on identical axis sets
//! - **Fixed shape, fluid values** - Axes are set at construction; only
//!   coordinates change afterwards
//! - **Pure core, no I/O** - Plain in-memory values, fully testable in isolation
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        axispace                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure math, no I/O)                                   │
//! │    Point, PointBuilder                                       │
//! │    axis name rules (identifiers, reserved set)               │
//! │    AxisError, AccessError, AxesError                         │
//! │                                                              │
//! │  SUGAR                                                       │
//! │    point! macro - keyword-style construction                 │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use axispace::{point, Point};
//!
//! // Build a point from named coordinates
//! let a = point! { x: 2, y: 4 };
//!
//! // Derive a copy with one axis overridden
//! let b = a.derive().axis("x", 4.0).build().unwrap();
//!
//! // Same axis set, so distance is defined
//! assert_eq!(b.distance_to(&a).unwrap(), 2.0);
//!
//! // Different axis sets refuse to mix
//! let c = Point::new([("t", 0.0)]).unwrap();
//! assert!(a.try_add(&c).is_err());
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure math, no I/O
/// Contains: Point, PointBuilder, axis name rules, error types
pub mod core;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

pub use crate::core::{AccessError, AxesError, AxisError};
pub use crate::core::{Point, PointBuilder};
pub use crate::core::{is_reserved, is_valid_name, RESERVED_NAMES};

// ============================================================================
// MACROS
// ============================================================================

/// Build a [`Point`] from keyword-style axis assignments.
///
/// Axis names become string keys; values are anything `f64` converts from,
/// so integer literals work. Panics on a reserved name, the only way an
/// identifier written in source can fail validation.
///
/// ```
/// use axispace::point;
///
/// let p = point! { x: 1, y: 2.5 };
/// assert_eq!(p.axis("x"), Some(1.0));
/// assert_eq!(p.axis("y"), Some(2.5));
/// ```
#[macro_export]
macro_rules! point {
    () => {
        $crate::Point::new(::std::iter::empty::<(&str, f64)>())
            .expect("empty point is always valid")
    };
    ($($axis:ident : $value:expr),+ $(,)?) => {
        $crate::Point::new([$((stringify!($axis), f64::from($value))),+])
            .expect("identifier axis names are valid unless reserved")
    };
}

#[cfg(test)]
mod tests {
    use crate::Point;

    #[test]
    fn test_point_macro() {
        let p = point! { x: 1, y: 2 };
        assert_eq!(p.dimensions(), 2);
        assert_eq!(p.axis("x"), Some(1.0));
        assert_eq!(p.axis("y"), Some(2.0));
    }

    #[test]
    fn test_point_macro_empty() {
        let p = point! {};
        assert_eq!(p.dimensions(), 0);
        assert_eq!(p, Point::new([] as [(&str, f64); 0]).unwrap());
    }

    #[test]
    fn test_point_macro_trailing_comma() {
        let p = point! { x: 3.0, y: 4.0, };
        assert_eq!(p.magnitude(), 5.0);
    }

    #[test]
    #[should_panic(expected = "reserved")]
    fn test_point_macro_reserved_name_panics() {
        let _ = point! { dimensions: 4 };
    }
}

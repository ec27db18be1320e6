//! # PointBuilder
//!
//! Staged construction for points: the variable-arity, copy-with-override
//! entry into a space.
//!
//! A builder collects `(name, value)` pairs without judging them; all
//! validation happens once, at `build()`. Seed a builder from an existing
//! point to override or extend its axes - the built point is always an
//! independent value, never a view onto its source.

use super::error::AxisError;
use super::point::Point;

/// Staged pairs for a [`Point`] under construction.
///
/// Later pairs for the same name win, so overrides are just appends.
#[derive(Clone, Debug, Default)]
pub struct PointBuilder {
    staged: Vec<(String, f64)>,
}

impl PointBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self { staged: Vec::new() }
    }

    /// Create a builder pre-loaded with a point's axes and values.
    pub(crate) fn from_point(point: &Point) -> Self {
        Self {
            staged: point
                .coordinates()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }

    /// Stage an axis. Overrides any earlier pair with the same name,
    /// including pairs inherited from a source point.
    pub fn axis(mut self, name: impl Into<String>, value: f64) -> Self {
        self.staged.push((name.into(), value));
        self
    }

    /// Validate every staged pair and produce the point.
    ///
    /// Any invalid name or NaN value fails the whole build; no point is
    /// produced.
    ///
    /// # Example
    /// ```
    /// use axispace::Point;
    /// let p = Point::builder().axis("x", 1.0).axis("y", 2.0).build().unwrap();
    /// assert_eq!(p.dimensions(), 2);
    /// ```
    pub fn build(self) -> Result<Point, AxisError> {
        Point::new(self.staged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AxisError;

    #[test]
    fn test_build_from_scratch() {
        let p = PointBuilder::new()
            .axis("x", 1.0)
            .axis("y", 2.0)
            .build()
            .unwrap();
        assert_eq!(p.axis("x"), Some(1.0));
        assert_eq!(p.axis("y"), Some(2.0));
    }

    #[test]
    fn test_copy_creation_is_independent() {
        let p1 = Point::new([("x", 1.0)]).unwrap();
        let mut p2 = p1.derive().build().unwrap();
        p2.set_axis("x", 4.0).unwrap();
        assert_eq!(p1.axis("x"), Some(1.0));
        assert_eq!(p2.axis("x"), Some(4.0));
    }

    #[test]
    fn test_creation_with_override() {
        let p1 = Point::new([("x", 1.0), ("y", 1.0)]).unwrap();
        let p2 = p1.derive().axis("y", 2.0).build().unwrap();
        assert_eq!(p1.axis("y"), Some(1.0));
        assert_eq!(p2.axis("y"), Some(2.0));
    }

    #[test]
    fn test_creation_with_extension() {
        let p1 = Point::new([("x", 1.0)]).unwrap();
        let p2 = p1.derive().axis("z", 3.0).build().unwrap();
        assert_eq!(p2.dimensions(), 2);
        assert_eq!(p2.axis("z"), Some(3.0));
        // source shape unchanged
        assert_eq!(p1.dimensions(), 1);
    }

    #[test]
    fn test_last_staged_pair_wins() {
        let p = PointBuilder::new()
            .axis("x", 1.0)
            .axis("x", 9.0)
            .build()
            .unwrap();
        assert_eq!(p.axis("x"), Some(9.0));
    }

    #[test]
    fn test_build_validates_names() {
        let err = PointBuilder::new().axis(" ", 23.0).build().unwrap_err();
        assert_eq!(err, AxisError::InvalidName(" ".to_string()));

        let err = PointBuilder::new()
            .axis("dimensions", 4.0)
            .build()
            .unwrap_err();
        assert_eq!(err, AxisError::ReservedName("dimensions".to_string()));
    }

    #[test]
    fn test_build_validates_values() {
        let err = PointBuilder::new()
            .axis("x", f64::NAN)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            AxisError::NotANumber {
                axis: "x".to_string()
            }
        );
    }

    #[test]
    fn test_empty_build() {
        let p = PointBuilder::new().build().unwrap();
        assert_eq!(p.dimensions(), 0);
    }
}

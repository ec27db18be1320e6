//! # Point
//!
//! A position in a named-axis space. The fundamental primitive.
//!
//! Dimensionality is NOT fixed - a point carries exactly the axes it was
//! built with, and each axis answers to a name, not an index.
//!
//! The axis set is the point's shape, and the shape is fixed for its
//! lifetime. Coordinates may change; axes may not.

use std::collections::BTreeMap;
use std::fmt;

use super::axis;
use super::builder::PointBuilder;
use super::error::{AccessError, AxesError, AxisError};

/// A point in a named-axis coordinate space.
///
/// Axes are kept sorted by name, so two points built from the same pairs in
/// different orders are indistinguishable. Equality compares axis sets and
/// coordinates; see [`Point::is_same_space`] for the names-only comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    axes: BTreeMap<String, f64>,
}

impl Point {
    /// Create a new point from `(name, value)` pairs.
    ///
    /// Every name must be a non-reserved identifier and every value a
    /// non-NaN `f64`. A later pair for an already-seen name overwrites the
    /// earlier value. No pairs at all is fine - the empty point is valid.
    ///
    /// # Example
    /// ```
    /// use axispace::Point;
    /// let p = Point::new([("x", 1.0), ("y", 2.0)]).unwrap();
    /// assert_eq!(p.dimensions(), 2);
    /// assert_eq!(p.axis("x"), Some(1.0));
    /// ```
    pub fn new<S, I>(pairs: I) -> Result<Self, AxisError>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, f64)>,
    {
        let mut axes = BTreeMap::new();
        for (name, value) in pairs {
            let name = name.into();
            axis::validate_name(&name)?;
            axis::validate_value(&name, value)?;
            axes.insert(name, value);
        }
        Ok(Self { axes })
    }

    /// Start building a point from nothing.
    pub fn builder() -> PointBuilder {
        PointBuilder::new()
    }

    /// Start building a point from this one's axes and values.
    ///
    /// The builder stages overrides for existing axes and additions of new
    /// ones; building produces an independent copy, never a view.
    ///
    /// # Example
    /// ```
    /// use axispace::Point;
    /// let a = Point::new([("x", 1.0), ("y", 1.0)]).unwrap();
    /// let b = a.derive().axis("y", 2.0).build().unwrap();
    /// assert_eq!(a.axis("y"), Some(1.0));
    /// assert_eq!(b.axis("y"), Some(2.0));
    /// ```
    pub fn derive(&self) -> PointBuilder {
        PointBuilder::from_point(self)
    }

    /// Read the coordinate for an axis. `None` if the axis does not exist.
    pub fn axis(&self, name: &str) -> Option<f64> {
        self.axes.get(name).copied()
    }

    /// Overwrite the coordinate of an existing axis.
    ///
    /// Fails with [`AccessError::ReadOnly`] for `axes`/`dimensions`, with
    /// [`AccessError::UnknownAxis`] for a name the point does not carry
    /// (the axis set never grows through mutation), and with
    /// [`AccessError::NotANumber`] for NaN.
    pub fn set_axis(&mut self, name: &str, value: f64) -> Result<(), AccessError> {
        if axis::is_reserved(name) {
            return Err(AccessError::ReadOnly(name.to_string()));
        }
        if value.is_nan() {
            return Err(AccessError::NotANumber {
                axis: name.to_string(),
            });
        }
        match self.axes.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(AccessError::UnknownAxis(name.to_string())),
        }
    }

    /// Axis names, sorted lexicographically.
    pub fn axes(&self) -> impl Iterator<Item = &str> {
        self.axes.keys().map(String::as_str)
    }

    /// `(name, value)` pairs, sorted by name.
    pub fn coordinates(&self) -> impl Iterator<Item = (&str, f64)> {
        self.axes.iter().map(|(name, &value)| (name.as_str(), value))
    }

    /// Number of axes.
    pub fn dimensions(&self) -> usize {
        self.axes.len()
    }

    /// True iff both points carry exactly the same axis names.
    ///
    /// Values play no part; this is the compatibility gate for arithmetic
    /// and distance.
    ///
    /// # Example
    /// ```
    /// use axispace::Point;
    /// let a = Point::new([("x", 1.0), ("y", 2.0)]).unwrap();
    /// let b = a.origin();
    /// assert!(a.is_same_space(&b));
    /// ```
    pub fn is_same_space(&self, other: &Point) -> bool {
        self.axes.len() == other.axes.len()
            && self.axes.keys().zip(other.axes.keys()).all(|(a, b)| a == b)
    }

    /// Elementwise sum of two points from the same space.
    ///
    /// Operands are left untouched; the result is a fresh point.
    ///
    /// # Example
    /// ```
    /// use axispace::Point;
    /// let p = Point::new([("x", 1.0), ("y", 2.0)]).unwrap();
    /// let d = p.try_add(&p).unwrap();
    /// assert_eq!(d.axis("x"), Some(2.0));
    /// assert_eq!(d.axis("y"), Some(4.0));
    /// ```
    pub fn try_add(&self, other: &Point) -> Result<Point, AxesError> {
        self.elementwise(other, |a, b| a + b)
    }

    /// Elementwise difference `self - other` of two points from the same
    /// space. Operands are left untouched.
    pub fn try_sub(&self, other: &Point) -> Result<Point, AxesError> {
        self.elementwise(other, |a, b| a - b)
    }

    /// Euclidean distance to another point in the same space.
    ///
    /// # Example
    /// ```
    /// use axispace::Point;
    /// let a = Point::new([("x", 2.0), ("y", 4.0)]).unwrap();
    /// let b = a.derive().axis("x", 4.0).build().unwrap();
    /// assert_eq!(b.distance_to(&a).unwrap(), 2.0);
    /// ```
    pub fn distance_to(&self, other: &Point) -> Result<f64, AxesError> {
        self.require_same_space(other)?;
        let dist_sq: f64 = self
            .axes
            .iter()
            .map(|(name, &a)| (a - other.axes[name]).powi(2))
            .sum();
        Ok(dist_sq.sqrt())
    }

    /// Magnitude (Euclidean norm) of this point, its distance to the origin
    /// of its own space.
    ///
    /// # Example
    /// ```
    /// use axispace::Point;
    /// let p = Point::new([("x", 3.0), ("y", 4.0)]).unwrap();
    /// assert_eq!(p.magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        self.axes
            .values()
            .map(|&v| v * v)
            .sum::<f64>()
            .sqrt()
    }

    /// The origin of this point's space: same axes, every coordinate zero.
    /// Does not mutate `self`.
    pub fn origin(&self) -> Point {
        Self {
            axes: self.axes.keys().map(|name| (name.clone(), 0.0)).collect(),
        }
    }

    /// Scalar multiple of this point over the same axis set.
    pub fn scale(&self, factor: f64) -> Point {
        Self {
            axes: self
                .axes
                .iter()
                .map(|(name, &v)| (name.clone(), v * factor))
                .collect(),
        }
    }

    fn require_same_space(&self, other: &Point) -> Result<(), AxesError> {
        if self.is_same_space(other) {
            Ok(())
        } else {
            Err(AxesError {
                left: self.axes.keys().cloned().collect(),
                right: other.axes.keys().cloned().collect(),
            })
        }
    }

    fn elementwise(&self, other: &Point, op: impl Fn(f64, f64) -> f64) -> Result<Point, AxesError> {
        self.require_same_space(other)?;
        Ok(Self {
            axes: self
                .axes
                .iter()
                .map(|(name, &a)| (name.clone(), op(a, other.axes[name])))
                .collect(),
        })
    }
}

impl fmt::Display for Point {
    /// `Point(x: 1, y: 2)` with axes in sorted order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point(")?;
        for (i, (name, value)) in self.axes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        write!(f, ")")
    }
}

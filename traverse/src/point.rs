//! Planar coordinates of the boundary vertices and the offsets between them.

use std::{
    fmt,
    ops::{Add, AddAssign, Neg, Sub},
};

use num_traits::Zero;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The vertex of a parcel boundary in planar coordinates.
///
/// No projection is assumed: the northing is the `y` axis
/// and the easting is the `x` axis of whatever system the origin is given in.
/// The same type represents the displacement between two vertices.
pub struct Point {
    /// The coordinate along the north axis (`y`)
    pub northing: f64,
    /// The coordinate along the east axis (`x`)
    pub easting: f64,
}

impl Point {
    /// Construct a point from the named coordinates
    pub const fn new(northing: f64, easting: f64) -> Self {
        Self { northing, easting }
    }

    /// Construct a point from the map-style `(x, y)` pair
    pub const fn from_xy(x: f64, y: f64) -> Self {
        Self {
            northing: y,
            easting: x,
        }
    }

    /// The map-style `(x, y)` pair
    pub const fn xy(self) -> (f64, f64) {
        (self.easting, self.northing)
    }

    /// Length of the vector from the coordinate system origin
    pub fn magnitude(self) -> f64 {
        self.northing.hypot(self.easting)
    }

    /// Straight-line distance between the two points
    pub fn distance_to(self, other: Self) -> f64 {
        (other - self).magnitude()
    }

    /// Are the points the same up to the given absolute tolerance on every axis?
    pub fn abs_diff_eq(self, other: Self, tolerance: f64) -> bool {
        (self.northing - other.northing).abs() <= tolerance
            && (self.easting - other.easting).abs() <= tolerance
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            northing: self.northing + rhs.northing,
            easting: self.easting + rhs.easting,
        }
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            northing: self.northing - rhs.northing,
            easting: self.easting - rhs.easting,
        }
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            northing: -self.northing,
            easting: -self.easting,
        }
    }
}

impl Zero for Point {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.northing.is_zero() && self.easting.is_zero()
    }
}

impl From<(f64, f64)> for Point {
    /// The pair is `(northing, easting)`
    fn from((northing, easting): (f64, f64)) -> Self {
        Self { northing, easting }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{:.2}\t{:.2}", self.northing, self.easting)
        } else {
            write!(f, "(N {}, E {})", self.northing, self.easting)
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn origin_is_zero() {
        assert!(Point::zero().is_zero());
        assert_eq!(Point::default(), Point::new(0.0, 0.0));
        assert!(!Point::new(0.0, 1e-12).is_zero());
    }

    #[test]
    fn arithmetic() {
        let a = Point::new(10.0, -3.0);
        let b = Point::new(2.5, 4.0);
        assert_eq!(a + b, Point::new(12.5, 1.0));
        assert_eq!(a - b, Point::new(7.5, -7.0));
        assert_eq!(-a, Point::new(-10.0, 3.0));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
    }

    #[test]
    fn axis_order() {
        let p = Point::from_xy(1.0, 2.0);
        assert_eq!(p.northing, 2.0);
        assert_eq!(p.easting, 1.0);
        assert_eq!(p.xy(), (1.0, 2.0));
        assert_eq!(Point::from((2.0, 1.0)), p);
    }

    #[test]
    fn distance() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        assert_abs_diff_eq!(a.distance_to(b), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(b.distance_to(a), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!((b - a).magnitude(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn tolerance() {
        let a = Point::new(1.0, 1.0);
        assert!(a.abs_diff_eq(Point::new(1.0 + 1e-10, 1.0 - 1e-10), 1e-9));
        assert!(!a.abs_diff_eq(Point::new(1.0, 1.1), 1e-9));
    }

    #[test]
    fn display() {
        let p = Point::new(1234.5678, -0.126);
        assert_eq!(format!("{}", p), "(N 1234.5678, E -0.126)");
        assert_eq!(format!("{:#}", p), "1234.57\t-0.13");
    }
}

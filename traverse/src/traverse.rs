//! Resolving the courses into the chain of boundary vertices.

use std::{fmt, iter, slice};

use num_traits::Zero;
#[cfg(feature = "serde")]
use serde::Serialize;
use tracing::debug;

use crate::{course::Course, point::Point};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
/// The ordered vertices of a parcel boundary.
///
/// The first point is the origin, every next one is the end point
/// of the corresponding course, so there is always at least one point.
pub struct Traverse {
    points: Vec<Point>,
}

/// Walk the courses one after another starting from the origin.
///
/// The result has exactly one point more than the number of courses.
/// Zero-length courses produce duplicate points which are kept as is.
pub fn resolve<'c, I>(origin: Point, courses: I) -> Traverse
where
    I: IntoIterator<Item = &'c Course>,
{
    let ends = courses
        .into_iter()
        .enumerate()
        .scan(origin, |current, (i, course)| {
            let begin = *current;
            let end = course.apply(begin);
            debug!(course = i + 1, %begin, %end, "resolved course");
            *current = end;
            Some(end)
        });

    let points: Vec<_> = iter::once(origin).chain(ends).collect();
    debug!(vertices = points.len(), "traverse resolved");
    Traverse { points }
}

/// The vector from the first to the last point of the traverse.
/// See [`Traverse::closure_error`].
pub fn closure_error(traverse: &Traverse) -> Point {
    traverse.closure_error()
}

impl Traverse {
    /// All the vertices, starting with the origin
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The number of vertices (always positive)
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true: the origin is always present.
    /// Provided for the symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The starting point
    pub fn origin(&self) -> Point {
        self.points.first().copied().unwrap_or_default()
    }

    /// The end point of the last course
    pub fn end(&self) -> Point {
        self.points.last().copied().unwrap_or_default()
    }

    /// The pairs of the begin and end point of every course
    pub fn legs(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// The sum of the lengths of all the courses
    pub fn perimeter(&self) -> f64 {
        self.legs().map(|(begin, end)| begin.distance_to(end)).sum()
    }

    /// The vector `end - origin`.
    /// Zero for a mathematically closed parcel.
    pub fn closure_error(&self) -> Point {
        self.end() - self.origin()
    }

    /// The length of the closure error vector (linear misclosure)
    pub fn misclosure(&self) -> f64 {
        self.closure_error().magnitude()
    }

    /// The ratio of the perimeter to the misclosure
    /// (e.g. `10_000.0` is usually written as `1:10000`).
    ///
    /// Returns `None` for the exactly closed traverse.
    pub fn precision_ratio(&self) -> Option<f64> {
        let misclosure = self.misclosure();
        if misclosure.is_zero() {
            None
        } else {
            Some(self.perimeter() / misclosure)
        }
    }

    /// Does the traverse return to its origin within the tolerance?
    pub fn is_closed(&self, tolerance: f64) -> bool {
        self.misclosure() <= tolerance
    }

    /// The area enclosed by the boundary (shoelace formula).
    ///
    /// The last point is connected back to the origin,
    /// so an unclosed traverse is measured as if the gap was a straight course.
    pub fn area(&self) -> f64 {
        let ring = self.points.iter().zip(self.points.iter().cycle().skip(1));
        let twice_area: f64 = ring
            .map(|(a, b)| a.easting * b.northing - b.easting * a.northing)
            .sum();
        twice_area.abs() / 2.0
    }

    /// Consume the traverse, returning its vertices
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl AsRef<[Point]> for Traverse {
    fn as_ref(&self) -> &[Point] {
        &self.points
    }
}

impl IntoIterator for Traverse {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Traverse {
    type Item = &'a Point;
    type IntoIter = slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl fmt::Display for Traverse {
    /// The table of the begin and end coordinates of every course
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Northing\tEasting\t\tNorthing\tEasting")?;
        for (i, (begin, end)) in self.legs().enumerate() {
            writeln!(f, "Course {}:\t{:#}\t\t{:#}", i + 1, begin, end)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use crate::{bearing::Bearing, quadrant::Quadrant};

    use super::*;

    fn course(quadrant: Quadrant, deg: u16, min: u8, sec: u8, distance: f64) -> Course {
        Course::new(quadrant, Bearing::with_dms(deg, min, sec).unwrap(), distance).unwrap()
    }

    fn square() -> Vec<Course> {
        vec![
            course(Quadrant::NE, 0, 0, 0, 100.0),
            course(Quadrant::SE, 90, 0, 0, 100.0),
            course(Quadrant::SW, 0, 0, 0, 100.0),
            course(Quadrant::NW, 90, 0, 0, 100.0),
        ]
    }

    #[test]
    fn no_courses() {
        let origin = Point::new(12.5, -7.25);
        let t = resolve(origin, &[]);
        assert_eq!(t.points(), [origin]);
        assert_eq!(t.len(), 1);
        assert!(!t.is_empty());
        assert!(t.closure_error().is_zero());
        assert_eq!(t.perimeter(), 0.0);
        assert_eq!(t.area(), 0.0);
        assert_eq!(t.legs().count(), 0);
    }

    #[test]
    fn quadrant_signs_along_meridian() {
        for q in Quadrant::ALL {
            let t = resolve(Point::default(), &[course(q, 0, 0, 0, 7.0)]);
            assert_abs_diff_eq!(t.end().northing, q.sign_north() * 7.0, epsilon = 1e-12);
            assert_abs_diff_eq!(t.end().easting, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn quadrant_signs_across_meridian() {
        for q in Quadrant::ALL {
            let t = resolve(Point::default(), &[course(q, 90, 0, 0, 7.0)]);
            assert_abs_diff_eq!(t.end().northing, 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(t.end().easting, q.sign_east() * 7.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn diagonal() {
        let t = resolve(
            Point::default(),
            &[course(Quadrant::NE, 45, 0, 0, 2.0_f64.sqrt())],
        );
        assert_abs_diff_eq!(t.end().northing, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(t.end().easting, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn closed_square() {
        let t = resolve(Point::default(), &square());
        assert_eq!(t.len(), 5);

        let expected = [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0), (0.0, 0.0)];
        for (p, (n, e)) in t.points().iter().zip(expected) {
            assert_abs_diff_eq!(p.northing, n, epsilon = 1e-6);
            assert_abs_diff_eq!(p.easting, e, epsilon = 1e-6);
        }

        let error = closure_error(&t);
        assert_abs_diff_eq!(error.northing, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(error.easting, 0.0, epsilon = 1e-6);
        assert!(t.is_closed(1e-6));

        assert_abs_diff_eq!(t.perimeter(), 400.0, epsilon = 1e-6);
        assert_abs_diff_eq!(t.area(), 10_000.0, epsilon = 1e-6);
    }

    #[test]
    fn square_from_offset_origin() {
        let origin = Point::new(4_000_000.0, 500_000.0);
        let t = resolve(origin, &square());
        assert_abs_diff_eq!(t.end().northing, origin.northing, epsilon = 1e-6);
        assert_abs_diff_eq!(t.end().easting, origin.easting, epsilon = 1e-6);
        assert_eq!(t.origin(), origin);
    }

    #[test]
    fn open_traverse() {
        let courses = [
            course(Quadrant::NE, 0, 0, 0, 30.0),
            course(Quadrant::SE, 90, 0, 0, 40.0),
        ];
        let t = resolve(Point::default(), &courses);

        let error = t.closure_error();
        assert_abs_diff_eq!(error.northing, 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(error.easting, 40.0, epsilon = 1e-9);
        assert_abs_diff_eq!(t.misclosure(), 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(t.precision_ratio().unwrap(), 70.0 / 50.0, epsilon = 1e-9);
        assert!(!t.is_closed(1.0));

        // the gap closes the right triangle
        assert_abs_diff_eq!(t.area(), 600.0, epsilon = 1e-9);
    }

    #[test]
    fn exactly_closed_has_no_ratio() {
        let t = resolve(Point::default(), &[]);
        assert!(t.precision_ratio().is_none());
    }

    #[test]
    fn zero_length_course_duplicates_point() {
        let courses = [
            course(Quadrant::NE, 10, 0, 0, 5.0),
            course(Quadrant::SW, 20, 0, 0, 0.0),
        ];
        let t = resolve(Point::default(), &courses);
        assert_eq!(t.len(), 3);
        assert_eq!(t.points()[1], t.points()[2]);
    }

    #[test]
    fn legs() {
        let t = resolve(Point::default(), &square());
        let legs: Vec<_> = t.legs().collect();
        assert_eq!(legs.len(), 4);
        assert_eq!(legs[0].0, t.origin());
        for ((_, end), (begin, _)) in legs.iter().zip(legs.iter().skip(1)) {
            assert_eq!(end, begin);
        }
    }

    #[test]
    fn iterate() {
        let t = resolve(Point::default(), &square());
        assert_eq!((&t).into_iter().count(), 5);
        assert_eq!(t.as_ref().len(), 5);
        let points: Vec<Point> = t.clone().into_iter().collect();
        assert_eq!(points, t.into_points());
    }

    #[test]
    fn display_table() {
        let t = resolve(
            Point::new(1000.0, 2000.0),
            &[course(Quadrant::NE, 0, 0, 0, 10.126)],
        );
        assert_eq!(
            t.to_string(),
            "Northing\tEasting\t\tNorthing\tEasting\n\
             Course 1:\t1000.00\t2000.00\t\t1010.13\t2000.00\n"
        );
    }

    fn any_course() -> impl Strategy<Value = Course> {
        (0_usize..4, 0_u16..90, 0_u8..60, 0_u8..60, 0.0..10_000.0_f64).prop_map(
            |(q, deg, min, sec, distance)| course(Quadrant::ALL[q], deg, min, sec, distance),
        )
    }

    proptest! {
        #[test]
        fn prop_length(courses in prop::collection::vec(any_course(), 0..32)) {
            let t = resolve(Point::default(), &courses);
            prop_assert_eq!(t.len(), courses.len() + 1);
        }

        #[test]
        fn prop_chaining(
            courses in prop::collection::vec(any_course(), 1..32),
            northing in -1e6..1e6_f64,
            easting in -1e6..1e6_f64,
        ) {
            let origin = Point::new(northing, easting);
            let t = resolve(origin, &courses);
            prop_assert_eq!(t.origin(), origin);

            for (course, (begin, end)) in courses.iter().zip(t.legs()) {
                let delta = course.delta();
                prop_assert!((end.northing - (begin.northing + delta.northing)).abs() < 1e-9);
                prop_assert!((end.easting - (begin.easting + delta.easting)).abs() < 1e-9);
            }
        }

        #[test]
        fn prop_reversed_courses_close(courses in prop::collection::vec(any_course(), 1..16)) {
            let back: Vec<_> = courses.iter().rev().map(Course::reversed).collect();
            let all: Vec<_> = courses.iter().chain(&back).copied().collect();
            let t = resolve(Point::default(), &all);
            prop_assert!(t.is_closed(1e-6));
        }
    }
}

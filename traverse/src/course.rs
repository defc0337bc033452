//! A single leg of a surveyed boundary and its parsing from the deed's records.

use std::{
    error::Error,
    fmt,
    num::{ParseFloatError, ParseIntError},
    str::FromStr,
};

use lazy_static::lazy_static;
use regex::{Captures, Regex};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    bearing::{Bearing, ParseBearingError},
    enum_trivial_from_impl,
    point::Point,
    quadrant::{ParseQuadrantError, Quadrant},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// The distance of a course cannot be accepted
pub enum DistanceError {
    /// Not a number at all
    Float(ParseFloatError),
    /// The distance is less than zero
    Negative,
    /// Infinite or not-a-number
    NotFinite,
}

enum_trivial_from_impl!(ParseFloatError => DistanceError:Float);

impl fmt::Display for DistanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(inner) => write!(f, "{inner}"),
            Self::Negative => write!(f, "the distance should not be negative"),
            Self::NotFinite => write!(f, "the distance should be a finite number"),
        }
    }
}

impl Error for DistanceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Float(inner) => Some(inner),
            Self::Negative | Self::NotFinite => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The course record cannot be turned into a `Course`
pub enum ParseCourseError {
    /// The quadrant code is not one of `1`, `2`, `3`, `4`
    InvalidQuadrant(ParseQuadrantError),
    /// Degrees, minutes or seconds are not integers or out of their ranges
    InvalidBearing(ParseBearingError),
    /// The distance is not a finite non-negative number
    InvalidDistance(DistanceError),
    /// The record does not consist of exactly five fields
    MalformedRecord {
        /// The number of fields actually present
        found: usize,
    },
    /// The text does not follow the `N 12°34′56″ E 100.0` notation
    Notation,
}

enum_trivial_from_impl!(ParseQuadrantError => ParseCourseError:InvalidQuadrant);
enum_trivial_from_impl!(ParseBearingError => ParseCourseError:InvalidBearing);
enum_trivial_from_impl!(DistanceError => ParseCourseError:InvalidDistance);

impl From<ParseIntError> for ParseCourseError {
    fn from(err: ParseIntError) -> Self {
        Self::InvalidBearing(err.into())
    }
}

impl fmt::Display for ParseCourseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid course: ")?;
        match self {
            Self::InvalidQuadrant(inner) => write!(f, "{inner}"),
            Self::InvalidBearing(inner) => write!(f, "{inner}"),
            Self::InvalidDistance(inner) => write!(f, "cannot parse distance: {inner}"),
            Self::MalformedRecord { found } => write!(
                f,
                "expected {} fields (quadrant, degrees, minutes, seconds, distance), found {found}",
                Course::RECORD_FIELDS
            ),
            Self::Notation => write!(f, "not a quadrant bearing notation"),
        }
    }
}

impl Error for ParseCourseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidQuadrant(inner) => Some(inner),
            Self::InvalidBearing(inner) => Some(inner),
            Self::InvalidDistance(inner) => Some(inner),
            Self::MalformedRecord { .. } | Self::Notation => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CourseParts"))]
/// One leg of a boundary: the quadrant, the bearing inside it and the distance to walk.
///
/// The value is validated on construction and never changes afterwards.
pub struct Course {
    quadrant: Quadrant,
    bearing: Bearing,
    distance: f64,
}

impl Course {
    /// The number of fields in a course record:
    /// quadrant code, degrees, minutes, seconds, distance
    pub const RECORD_FIELDS: usize = 5;

    /// Construct a course from its already typed parts.
    ///
    /// # Errors
    /// The distance should be finite and non-negative.
    pub fn new(quadrant: Quadrant, bearing: Bearing, distance: f64) -> Result<Self, DistanceError> {
        Ok(Self {
            quadrant,
            bearing,
            distance: check_distance(distance)?,
        })
    }

    /// Construct a course from the raw record of five fields:
    /// quadrant code (`1 => NE`, `2 => SE`, `3 => SW`, `4 => NW`),
    /// integer degrees, minutes, seconds, and the distance.
    /// Whitespace around every field is ignored.
    ///
    /// # Errors
    /// - `MalformedRecord` when the number of fields is not five;
    /// - `InvalidQuadrant` for the unknown quadrant code;
    /// - `InvalidBearing` for the non-integer or out-of-range bearing parts;
    /// - `InvalidDistance` for non-numeric, negative or infinite distance.
    pub fn from_record<S: AsRef<str>>(fields: &[S]) -> Result<Self, ParseCourseError> {
        let [quadrant, deg, min, sec, distance] = fields else {
            return Err(ParseCourseError::MalformedRecord {
                found: fields.len(),
            });
        };

        let quadrant = Quadrant::from_code(quadrant.as_ref())?;

        let deg = deg.as_ref().trim().parse()?;
        let min = min.as_ref().trim().parse()?;
        let sec = sec.as_ref().trim().parse()?;
        let bearing = Bearing::with_dms(deg, min, sec).map_err(ParseBearingError::from)?;

        let distance = parse_distance(distance.as_ref())?;
        Ok(Self {
            quadrant,
            bearing,
            distance,
        })
    }

    /// The quadrant of the course
    pub const fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    /// The bearing inside the quadrant
    pub const fn bearing(&self) -> Bearing {
        self.bearing
    }

    /// The length of the course
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// The change of the coordinates made by walking the course:
    /// the latitude (northing delta) and the departure (easting delta).
    pub fn delta(&self) -> Point {
        let angle = self.bearing.to_radians();
        let (sin, cos) = angle.sin_cos();

        Point {
            northing: self.quadrant.sign_north() * self.distance * cos,
            easting: self.quadrant.sign_east() * self.distance * sin,
        }
    }

    /// The end point of the course started at the given point
    pub fn apply(&self, start: Point) -> Point {
        start + self.delta()
    }

    /// The whole-circle bearing (azimuth) clockwise from the north
    /// in decimal degrees, in range `[0, 360)`.
    pub fn azimuth(&self) -> f64 {
        let bearing = self.bearing.decimal_degrees();
        let azimuth = match self.quadrant {
            Quadrant::NE => bearing,
            Quadrant::SE => 180.0 - bearing,
            Quadrant::SW => 180.0 + bearing,
            Quadrant::NW => 360.0 - bearing,
        };

        if azimuth >= 360.0 {
            azimuth - 360.0
        } else {
            azimuth
        }
    }

    /// The same line walked in the opposite direction
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            quadrant: self.quadrant.opposite(),
            ..*self
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Debug, Deserialize)]
/// The unchecked parts of a course, validated on the way into `Course`
pub struct CourseParts {
    quadrant: Quadrant,
    bearing: Bearing,
    distance: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<CourseParts> for Course {
    type Error = DistanceError;

    fn try_from(parts: CourseParts) -> Result<Self, Self::Error> {
        Self::new(parts.quadrant, parts.bearing, parts.distance)
    }
}

fn check_distance(distance: f64) -> Result<f64, DistanceError> {
    if !distance.is_finite() {
        return Err(DistanceError::NotFinite);
    }

    if distance < 0.0 {
        return Err(DistanceError::Negative);
    }

    // `-0.0` passes the check above
    Ok(distance + 0.0)
}

fn parse_distance(s: &str) -> Result<f64, DistanceError> {
    let distance: f64 = s.trim().parse()?;
    check_distance(distance)
}

lazy_static! {
    static ref RE_NOTATION: Regex = Regex::new(
        r"(?x)
        ^
        (?P<meridian>\S)            # N or S
        \s*
        (?P<bearing>.*?)            # DMS bearing
        \s*
        (?P<departure>\S)           # E or W
        \s+
        (?P<distance>\S+)
        $
        "
    )
    .expect("Quadrant bearing regex is valid");
}

impl FromStr for Course {
    type Err = ParseCourseError;

    /// Parse the surveyor's quadrant bearing notation
    /// followed by the distance, e.g. `N 45°30′15″ E 100.5` or `S12*30'W 43.2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = RE_NOTATION
            .captures(s.trim())
            .ok_or(ParseCourseError::Notation)?;

        let letters = format!(
            "{}{}",
            group(&captures, "meridian"),
            group(&captures, "departure")
        );
        let quadrant = letters.parse()?;
        let bearing = group(&captures, "bearing").parse()?;
        let distance = parse_distance(group(&captures, "distance"))?;
        Ok(Self {
            quadrant,
            bearing,
            distance,
        })
    }
}

fn group<'h>(captures: &Captures<'h>, name: &str) -> &'h str {
    captures.name(name).map_or("", |m| m.as_str())
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.quadrant.meridian(),
            self.bearing,
            self.quadrant.departure(),
            self.distance
        )
    }
}

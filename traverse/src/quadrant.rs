//! Compass quadrants and the sign conventions they impose on a course.

use std::{error::Error, fmt, ops::Neg, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{bool_enum, utils::SplitChar};

bool_enum!(
    /// The reference meridian a bearing is measured from
    Meridian: North and South; parse from 'N':'S' with ParseMeridianError
);

bool_enum!(
    /// The side of the meridian a course turns to
    Departure: East and West; parse from 'E':'W' with ParseDepartureError
);

/// One of the four compass quadrants determining the signs
/// of the northing and easting projections of a course.
///
/// The numeric codes used by the course schedules are
/// `1 => NE`, `2 => SE`, `3 => SW`, `4 => NW`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Quadrant {
    /// North-East
    NE,
    /// South-East
    SE,
    /// South-West
    SW,
    /// North-West
    NW,
}

impl Quadrant {
    /// All the quadrants in the order of their numeric codes
    pub const ALL: [Self; 4] = [Self::NE, Self::SE, Self::SW, Self::NW];

    /// Combine the meridian and the departure into a quadrant
    pub const fn new(meridian: Meridian, departure: Departure) -> Self {
        match (meridian, departure) {
            (Meridian::North, Departure::East) => Self::NE,
            (Meridian::South, Departure::East) => Self::SE,
            (Meridian::South, Departure::West) => Self::SW,
            (Meridian::North, Departure::West) => Self::NW,
        }
    }

    /// The meridian the bearing is measured from
    pub const fn meridian(self) -> Meridian {
        match self {
            Self::NE | Self::NW => Meridian::North,
            Self::SE | Self::SW => Meridian::South,
        }
    }

    /// The direction the bearing turns to
    pub const fn departure(self) -> Departure {
        match self {
            Self::NE | Self::SE => Departure::East,
            Self::SW | Self::NW => Departure::West,
        }
    }

    /// Multiplier for the northing projection (latitude) of a course
    pub const fn sign_north(self) -> f64 {
        self.meridian().sign()
    }

    /// Multiplier for the easting projection (departure) of a course
    pub const fn sign_east(self) -> f64 {
        self.departure().sign()
    }

    /// The numeric code of the quadrant in a course schedule
    pub const fn code(self) -> u8 {
        match self {
            Self::NE => 1,
            Self::SE => 2,
            Self::SW => 3,
            Self::NW => 4,
        }
    }

    /// Find the quadrant by its numeric code in a course schedule.
    ///
    /// # Errors
    /// Only the codes `1`, `2`, `3` and `4` are accepted.
    pub fn from_code(code: &str) -> Result<Self, ParseQuadrantError> {
        match code.trim() {
            "1" => Ok(Self::NE),
            "2" => Ok(Self::SE),
            "3" => Ok(Self::SW),
            "4" => Ok(Self::NW),
            other => Err(ParseQuadrantError {
                failed: other.to_string(),
            }),
        }
    }

    /// The quadrant on the opposite side of both axes
    /// (the direction of the same line walked backwards)
    pub const fn opposite(self) -> Self {
        match self {
            Self::NE => Self::SW,
            Self::SE => Self::NW,
            Self::SW => Self::NE,
            Self::NW => Self::SE,
        }
    }
}

impl Neg for Quadrant {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The value does not denote a quadrant
pub struct ParseQuadrantError {
    failed: String,
}

impl ParseQuadrantError {
    /// The rejected input
    pub fn failed(&self) -> &str {
        &self.failed
    }
}

impl fmt::Display for ParseQuadrantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse Quadrant from {:?}", self.failed)
    }
}

impl Error for ParseQuadrantError {}

impl TryFrom<u8> for Quadrant {
    type Error = ParseQuadrantError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|q| q.code() == code)
            .ok_or_else(|| ParseQuadrantError {
                failed: code.to_string(),
            })
    }
}

impl FromStr for Quadrant {
    type Err = ParseQuadrantError;

    /// Parse the two-letters form, e.g. `NE` or `sw`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let failed = || ParseQuadrantError {
            failed: s.to_string(),
        };

        let (first, rest) = s.trim().split_first_char().ok_or_else(failed)?;
        let (second, rest) = rest.split_first_char().ok_or_else(failed)?;
        if !rest.is_empty() {
            return Err(failed());
        }

        let meridian = Meridian::try_from(first).map_err(|_| failed())?;
        let departure = Departure::try_from(second).map_err(|_| failed())?;
        Ok(Self::new(meridian, departure))
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.meridian(), self.departure())
    }
}

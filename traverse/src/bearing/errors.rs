use std::{error::Error, fmt, num::ParseIntError};

use crate::enum_trivial_from_impl;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Some part of the bearing is out of its valid range
pub enum BearingNotInRange {
    /// deg > 90 (or exactly 90 with non-zero minutes/seconds)
    ObtuseAngle,
    /// min >= 60
    ArcMinutes,
    /// sec >= 60
    ArcSeconds,
}

impl fmt::Display for BearingNotInRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::ObtuseAngle => {
                "Only right angles or less (<=90) are allowed for a quadrant bearing, but obtuse one provided"
            }
            Self::ArcMinutes => "Bearing's arc minute value not in range [0..60)",
            Self::ArcSeconds => "Bearing's arc second value not in range [0..60)",
        };

        write!(f, "{msg}")
    }
}

impl Error for BearingNotInRange {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The bearing cannot be constructed from its textual representation
pub enum ParseBearingError {
    /// The parts are numbers, but some of them is too big
    Range(BearingNotInRange),
    /// The part is not an integer
    Int(ParseIntError),
    /// The string does not follow the Degree-Minute-Second notation
    DmsNotation,
}

enum_trivial_from_impl!(BearingNotInRange => ParseBearingError:Range);
enum_trivial_from_impl!(ParseIntError => ParseBearingError:Int);

impl fmt::Display for ParseBearingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse bearing: ")?;
        match self {
            Self::Range(inner) => write!(f, "{inner}"),
            Self::Int(inner) => write!(f, "{inner}"),
            Self::DmsNotation => write!(f, "not a Degree-Minute-Second notation"),
        }
    }
}

impl Error for ParseBearingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Range(inner) => Some(inner),
            Self::Int(inner) => Some(inner),
            Self::DmsNotation => None,
        }
    }
}

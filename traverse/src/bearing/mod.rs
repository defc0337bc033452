//! The quadrant bearing: an angle in range `[0°, 90°]` measured
//! from the north or south meridian towards the east or west.
//!
//! The angle is stored exactly, as a whole number of arc seconds,
//! so the Degree-Minute-Second parts given in a deed never lose precision.
//! Only the conversion to radians produces a floating number.

use std::{fmt, str::FromStr};

use lazy_static::lazy_static;
use regex::{Captures, Regex};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::div_mod;

use self::consts::{
    ARC_MINUTE_SIGN, ARC_SECOND_SIGN, DEGREE_SIGN, MINUTES_IN_DEGREE, QUARTER_TURN_DEG,
    SECONDS_IN_MINUTE,
};

mod consts;
mod errors;

pub use errors::{BearingNotInRange, ParseBearingError};

/// The angle between the reference meridian and the course line.
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Default, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Bearing {
    arc_seconds: u32,
}

impl Bearing {
    const fn seconds_in_deg() -> u32 {
        let sec_in_min = SECONDS_IN_MINUTE as u32;
        let min_in_deg = MINUTES_IN_DEGREE as u32;
        sec_in_min * min_in_deg
    }

    const fn max_arc_seconds() -> u32 {
        Self::seconds_in_deg() * (QUARTER_TURN_DEG as u32)
    }

    /// The bearing along the meridian itself
    pub const fn zero() -> Self {
        Self { arc_seconds: 0 }
    }

    /// The bearing perpendicular to the meridian (due east or due west)
    pub const fn right() -> Self {
        Self {
            arc_seconds: Self::max_arc_seconds(),
        }
    }

    /// Degree, minute, second.
    ///
    /// [Read more](https://en.wikipedia.org/wiki/Minute_and_second_of_arc)
    ///
    /// # Errors
    /// When some part of the angle is out of scope
    /// (e.g. minutes >= 60 or the whole angle > 90 degrees),
    /// the `BearingNotInRange` returned.
    pub fn with_dms(degree: u16, minutes: u8, seconds: u8) -> Result<Self, BearingNotInRange> {
        Self::check_dms(degree, minutes, seconds)?;

        let sec_in_min = u32::from(SECONDS_IN_MINUTE);
        let min_in_deg = u32::from(MINUTES_IN_DEGREE);

        let total_minutes = u32::from(degree) * min_in_deg + u32::from(minutes);
        let arc_seconds = total_minutes * sec_in_min + u32::from(seconds);
        Ok(Self { arc_seconds })
    }

    fn check_dms(degree: u16, minutes: u8, seconds: u8) -> Result<(), BearingNotInRange> {
        let valid_degrees = 0..=QUARTER_TURN_DEG;
        if !valid_degrees.contains(&degree) {
            return Err(BearingNotInRange::ObtuseAngle);
        }

        if !(0..MINUTES_IN_DEGREE).contains(&minutes) {
            return Err(BearingNotInRange::ArcMinutes);
        }

        if !(0..SECONDS_IN_MINUTE).contains(&seconds) {
            return Err(BearingNotInRange::ArcSeconds);
        }

        // the quadrant already encodes the octant, so nothing beyond the right angle
        if degree == QUARTER_TURN_DEG && (minutes > 0 || seconds > 0) {
            return Err(BearingNotInRange::ObtuseAngle);
        }

        Ok(())
    }

    fn dms_parts(self) -> (u16, u8, u8) {
        let sec_in_min = u32::from(SECONDS_IN_MINUTE);
        let min_in_deg = u32::from(MINUTES_IN_DEGREE);

        let (total_minutes, sec) = div_mod(self.arc_seconds, sec_in_min);
        let (deg, minutes) = div_mod(total_minutes, min_in_deg);

        let deg = deg.try_into().expect("Overflow in degrees");
        let minutes = minutes.try_into().expect("Overflow in minutes");
        let sec = sec.try_into().expect("Overflow in seconds");
        (deg, minutes, sec)
    }

    /// The whole number of degrees in the bearing
    pub fn degrees(self) -> u16 {
        self.dms_parts().0
    }

    /// The arc minutes component of the bearing.
    pub fn arc_minutes(self) -> u8 {
        self.dms_parts().1
    }

    /// The arc seconds component of the bearing.
    pub fn arc_seconds(self) -> u8 {
        self.dms_parts().2
    }

    /// Parts of the bearing as in the DMS scheme.
    pub fn deg_min_sec(self) -> (u16, u8, u8) {
        self.dms_parts()
    }

    /// The bearing in decimal degrees: `deg + min / 60 + sec / 3600`
    pub fn decimal_degrees(self) -> f64 {
        let (deg, min, sec) = self.dms_parts();
        f64::from(deg)
            + f64::from(min) / f64::from(MINUTES_IN_DEGREE)
            + f64::from(sec) / f64::from(Self::seconds_in_deg())
    }

    /// The bearing in radians, ready for the trigonometry
    pub fn to_radians(self) -> f64 {
        self.decimal_degrees().to_radians()
    }

    /// No deviation from the meridian
    pub fn is_zero(self) -> bool {
        self == Self::zero()
    }

    /// Is the course perpendicular to the meridian?
    pub fn is_right(self) -> bool {
        self == Self::right()
    }

    /// Adjacent bearing which sum to a right angle,
    /// i.e. the same line measured from the east-west axis
    pub fn complement(self) -> Self {
        Self {
            arc_seconds: Self::max_arc_seconds() - self.arc_seconds,
        }
    }

    fn from_captures(captures: &Captures<'_>) -> Result<Self, ParseBearingError> {
        let deg = captures
            .name("deg")
            .ok_or(ParseBearingError::DmsNotation)?
            .as_str()
            .parse()?;
        let min = captures
            .name("min")
            .map_or(Ok(0), |m| m.as_str().parse())?;
        let sec = captures
            .name("sec")
            .map_or(Ok(0), |m| m.as_str().parse())?;

        Ok(Self::with_dms(deg, min, sec)?)
    }

    fn parse_dms(s: &str) -> Result<Self, ParseBearingError> {
        RE_UNICODE
            .captures(s)
            .or_else(|| RE_ASCII.captures(s))
            .ok_or(ParseBearingError::DmsNotation)
            .and_then(|captures| Self::from_captures(&captures))
    }
}

/// Construct regular expression to parse Degree-Minute-Second representation of a bearing
fn parse_dms_re(is_ascii: bool) -> String {
    let (deg, min, sec) = if is_ascii {
        ("[*°]?", "'", "\"")
    } else {
        ("°", "′", "″")
    };

    format!(
        r"(?x)                                 # enables verbose mode (to allow these comments)
        ^                                           # match the whole line from the start
        (?P<deg>\d{{1,3}})                              # mandatory degree VALUE (0..=999) - requires more validation!
        {deg}                                           # degree sign (can be mandatory or optional)
        (?:\x20?                                        # minutes and seconds group optionally started with the space
            (?P<min>[0-5]?\d)                               # minutes VALUE (0..=59)
            {min}                                           # arcminute sign
            (?:\x20?                                        # seconds group optionally started with the space
                (?P<sec>[0-5]?\d)                               # whole seconds VALUE (0..=59)
                {sec}                                           # arcsecond sign
            )?                                              # seconds are optional
        )?                                              # minutes and seconds are optional
        $                                           # match the whole line till the end
        "
    )
}

lazy_static! {
    static ref RE_UNICODE: Regex = Regex::new(&parse_dms_re(false)).expect("Unicode regex is valid");
    static ref RE_ASCII: Regex = Regex::new(&parse_dms_re(true)).expect("ASCII regex is valid");
}

impl FromStr for Bearing {
    type Err = ParseBearingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_dms(s.trim())
    }
}

impl TryFrom<String> for Bearing {
    type Error = ParseBearingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Bearing> for String {
    fn from(bearing: Bearing) -> Self {
        bearing.to_string()
    }
}

impl TryFrom<(u16, u8, u8)> for Bearing {
    type Error = BearingNotInRange;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        let (deg, min, sec) = value;
        Self::with_dms(deg, min, sec)
    }
}

impl TryFrom<(u16, u8)> for Bearing {
    type Error = BearingNotInRange;

    fn try_from(value: (u16, u8)) -> Result<Self, Self::Error> {
        let (deg, min) = value;
        Self::with_dms(deg, min, 0)
    }
}

impl TryFrom<u16> for Bearing {
    type Error = BearingNotInRange;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::with_dms(value, 0, 0)
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (deg, min, sec) = self.dms_parts();
        write!(f, "{deg}{DEGREE_SIGN}")?;

        if min > 0 || sec > 0 {
            write!(f, "{min}{ARC_MINUTE_SIGN}")?;
        }

        if sec > 0 {
            write!(f, "{sec}{ARC_SECOND_SIGN}")?;
        }

        Ok(())
    }
}

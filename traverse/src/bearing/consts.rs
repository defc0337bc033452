pub(crate) const QUARTER_TURN_DEG: u16 = 90;
pub(crate) const MINUTES_IN_DEGREE: u8 = 60;
pub(crate) const SECONDS_IN_MINUTE: u8 = 60;

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '′';
pub(crate) const ARC_SECOND_SIGN: char = '″';

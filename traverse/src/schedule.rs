//! Parsing the whole course schedule of a deed.
//!
//! Every record gets the 1-based index of its course, so the failure
//! can be reported against the line of the schedule it came from.

use std::{error::Error, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::course::{Course, ParseCourseError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// The record of the course with the given index cannot be parsed
pub struct RecordError {
    /// 1-based position of the course in the schedule
    pub index: usize,
    /// What is wrong with the record
    pub error: ParseCourseError,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Course {}: {}", self.index, self.error)
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

fn parse_indexed<R, S>(records: R) -> impl Iterator<Item = (usize, Result<Course, ParseCourseError>)>
where
    R: IntoIterator,
    R::Item: AsRef<[S]>,
    S: AsRef<str>,
{
    records.into_iter().enumerate().map(|(i, record)| {
        let index = i + 1;
        let course = Course::from_record(record.as_ref());
        trace!(index, ?course, "parsed course record");
        (index, course)
    })
}

/// Parse all the records, stopping at the first invalid one.
///
/// # Errors
/// The first record which cannot be parsed, along with its 1-based index.
pub fn parse_all<R, S>(records: R) -> Result<Vec<Course>, RecordError>
where
    R: IntoIterator,
    R::Item: AsRef<[S]>,
    S: AsRef<str>,
{
    parse_indexed(records)
        .map(|(index, course)| course.map_err(|error| RecordError { index, error }))
        .collect()
}

/// Parse all the records, skipping the invalid ones.
///
/// Returns the successfully parsed courses in their original order
/// and the list of `(1-based index, error)` pairs for the rejected records.
pub fn parse_all_collecting_errors<R, S>(
    records: R,
) -> (Vec<Course>, Vec<(usize, ParseCourseError)>)
where
    R: IntoIterator,
    R::Item: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut courses = Vec::new();
    let mut errors = Vec::new();

    for (index, course) in parse_indexed(records) {
        match course {
            Ok(course) => courses.push(course),
            Err(error) => {
                warn!(index, %error, "skipping invalid course record");
                errors.push((index, error));
            }
        }
    }

    (courses, errors)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
/// The layout of a textual course schedule:
/// one `quadrant, degrees, minutes, seconds, distance` record per line.
pub struct ScheduleFormat {
    /// Separator between the fields of a record
    pub delimiter: char,
    /// Ignore the lines consisting only of whitespace
    pub skip_blank_lines: bool,
    /// Ignore the lines starting with this character
    pub comment_prefix: Option<char>,
}

impl Default for ScheduleFormat {
    fn default() -> Self {
        Self {
            delimiter: ',',
            skip_blank_lines: true,
            comment_prefix: Some('#'),
        }
    }
}

impl ScheduleFormat {
    /// The format with the given delimiter and the default rest of the options
    pub fn with_delimiter(delimiter: char) -> Self {
        Self {
            delimiter,
            ..Self::default()
        }
    }

    fn is_skipped(&self, line: &str) -> bool {
        let line = line.trim();
        if self.skip_blank_lines && line.is_empty() {
            return true;
        }

        self.comment_prefix
            .map_or(false, |prefix| line.starts_with(prefix))
    }

    /// Split the schedule text into the records of raw fields
    pub fn split_records<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Vec<&'a str>> + 'a {
        text.lines()
            .filter(move |line| !self.is_skipped(line))
            .map(move |line| line.split(self.delimiter).collect())
    }
}

/// Parse the textual course schedule, stopping at the first invalid record.
///
/// # Errors
/// The first record which cannot be parsed, along with its 1-based course index.
/// Skipped (blank or comment) lines do not count.
pub fn parse_schedule(text: &str, format: &ScheduleFormat) -> Result<Vec<Course>, RecordError> {
    parse_all(format.split_records(text))
}

/// Parse the textual course schedule, skipping the invalid records.
/// See [`parse_all_collecting_errors`].
pub fn parse_schedule_collecting_errors(
    text: &str,
    format: &ScheduleFormat,
) -> (Vec<Course>, Vec<(usize, ParseCourseError)>) {
    parse_all_collecting_errors(format.split_records(text))
}

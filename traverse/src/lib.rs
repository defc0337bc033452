//! Deed traverse resolution
//!
//! Turns the courses of a surveyed parcel (quadrant, bearing and distance)
//! into the chain of northing/easting coordinates of the boundary vertices.
//!
//! ```
//! use deed_traverse::{parse_all, resolve, Point};
//!
//! let records = [
//!     ["1", "0", "0", "0", "100"],
//!     ["2", "90", "0", "0", "100"],
//!     ["3", "0", "0", "0", "100"],
//!     ["4", "90", "0", "0", "100"],
//! ];
//! let courses = parse_all(&records).unwrap();
//! let traverse = resolve(Point::default(), &courses);
//!
//! assert_eq!(traverse.len(), 5);
//! assert!(traverse.is_closed(1e-6));
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use bearing::{Bearing, BearingNotInRange, ParseBearingError};
pub use course::{Course, DistanceError, ParseCourseError};
pub use point::Point;
pub use quadrant::{
    Departure, Meridian, ParseDepartureError, ParseMeridianError, ParseQuadrantError, Quadrant,
};
pub use schedule::{
    parse_all, parse_all_collecting_errors, parse_schedule, parse_schedule_collecting_errors,
    RecordError, ScheduleFormat,
};
pub use traverse::{closure_error, resolve, Traverse};

mod bearing;
mod course;
mod point;
mod quadrant;
mod schedule;
mod traverse;
mod utils;

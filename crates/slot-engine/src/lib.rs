//! # slot-engine
//!
//! Parsing and conflict detection for compact course schedule-strings such as
//! `"MWF 09:00-09:50"` or `"TTH 14:00-15:15"`.
//!
//! A schedule-string is a block of day-codes (`M`, `T`, `W`, `TH`, `F`), one
//! space, and a 24-hour `HH:MM-HH:MM` range. The engine decodes it into a
//! [`TimeSlot`], renders the range on a 12-hour clock, and decides whether two
//! slots collide on a shared weekday.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_engine::{check_time_conflict, format_time_range, parse_time_slots, Day};
//!
//! let slot = parse_time_slots("TTH 14:00-15:15").unwrap();
//! assert_eq!(slot.days, vec![Day::Tuesday, Day::Thursday]);
//! assert_eq!(slot.start_time(), 14.0);
//!
//! assert_eq!(format_time_range("MWF 09:00-09:50").unwrap(), "9:00 AM - 9:50 AM");
//!
//! // Touching endpoints are not a conflict.
//! assert!(!check_time_conflict("MWF 09:00-09:50", "MWF 09:50-10:40").unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`day`]: Day-code table and the longest-first day tokenizer
//! - [`slot`]: Schedule-string → [`TimeSlot`]
//! - [`format`]: 12-hour rendering of a schedule-string's time range
//! - [`conflict`]: Pairwise overlap test between two slots
//! - [`catalog`]: Course records and catalog search
//! - [`schedule`]: A student's selected courses and their conflicts
//! - [`freebusy`]: Free windows left on a weekday
//! - [`recurrence`]: Weekly meetings of a slot across a teaching term
//! - [`gpa`]: Letter grades and credit-weighted GPA
//! - [`ids`]: Injected identifier sources
//! - [`config`]: TOML configuration
//! - [`error`]: Error types

pub mod catalog;
pub mod config;
pub mod conflict;
pub mod day;
pub mod error;
pub mod format;
pub mod freebusy;
pub mod gpa;
pub mod ids;
pub mod recurrence;
pub mod schedule;
pub mod slot;

pub use catalog::{Catalog, Course, SearchFilter};
pub use config::SlotsConfig;
pub use conflict::check_time_conflict;
pub use day::Day;
pub use error::SlotError;
pub use format::format_time_range;
pub use freebusy::{free_windows, DayWindow, FreeWindow};
pub use gpa::{compute_gpa, Grade, GradeEntry, GradeSheet};
pub use ids::{IdSource, SequenceIds};
pub use recurrence::{expand_meetings, Meeting, Term};
pub use schedule::{Schedule, ScheduleConflict, ScheduledCourse};
pub use slot::{parse_time_slots, ClockTime, TimeSlot};

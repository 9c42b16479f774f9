//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    /// The input does not have the `<day-codes> <HH:MM>-<HH:MM>` shape.
    #[error("Invalid schedule format '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },

    /// A character in the day block matched no day-code.
    /// `position` is the byte offset inside the day block.
    #[error("Invalid day code '{found}' at position {position} in '{input}'")]
    InvalidDayCode {
        input: String,
        position: usize,
        found: char,
    },

    #[error("Parse error: invalid time token '{token}'")]
    InvalidTime { token: String },

    #[error("Unknown day: {0}")]
    UnknownDay(String),

    #[error("Unknown grade: {0}")]
    UnknownGrade(String),

    #[error("Course {0} is already on the schedule")]
    DuplicateCourse(String),

    #[error("Invalid RRULE: {0}")]
    InvalidRule(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Term spans {0} days, more than one expansion can return")]
    TermTooLong(i64),

    #[error("Catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("Grade sheet parse error: {0}")]
    GradeSheet(serde_json::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Convenience alias used throughout slot-engine.
pub type Result<T> = std::result::Result<T, SlotError>;

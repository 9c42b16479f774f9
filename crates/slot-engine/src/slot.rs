//! Schedule-string parsing -- converts `"MWF 09:00-09:50"` into a [`TimeSlot`].
//!
//! Grammar:
//!
//! ```text
//! schedule-string  := day-codes SP time-range
//! day-codes        := (day-code)+
//! day-code         := "M" | "T" | "W" | "F" | "TH"
//! time-range       := HH:MM "-" HH:MM
//! ```
//!
//! Parsing is strict: unknown day-codes and malformed time tokens are errors,
//! never placeholder values. An interval whose end is not after its start is
//! still accepted; see [`TimeSlot::is_inverted`].

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::day::{tokenize_days, Day};
use crate::error::{Result, SlotError};

/// A wall-clock time of day on a 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Build a clock time, or `None` when out of range.
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Parse an `HH:MM` token. The hour may be one or two digits; minutes are
    /// always two.
    pub fn parse(token: &str) -> Result<Self> {
        let invalid = || SlotError::InvalidTime {
            token: token.to_string(),
        };

        let (hours, minutes) = token.split_once(':').ok_or_else(invalid)?;
        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

        if !all_digits(hours) || hours.len() > 2 || !all_digits(minutes) || minutes.len() != 2 {
            return Err(invalid());
        }

        let hour: u8 = hours.parse().map_err(|_| invalid())?;
        let minute: u8 = minutes.parse().map_err(|_| invalid())?;

        Self::new(hour, minute).ok_or_else(invalid)
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    pub fn minutes_since_midnight(self) -> i64 {
        i64::from(self.hour) * 60 + i64::from(self.minute)
    }

    /// `hours + minutes / 60`, e.g. 9.5 for 09:30.
    pub fn fractional_hours(self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0
    }

    /// Inverse of [`ClockTime::minutes_since_midnight`] for values within a day.
    pub(crate) fn from_minutes(minutes: i64) -> Option<Self> {
        if !(0..24 * 60).contains(&minutes) {
            return None;
        }
        Self::new((minutes / 60) as u8, (minutes % 60) as u8)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = SlotError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

/// The raw pieces of a schedule-string, before any token is interpreted.
///
/// [`parse_time_slots`] is the only caller that interprets these pieces; the
/// range formatter renders parsed slots, so the two never disagree on the
/// grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleParts<'a> {
    pub day_codes: &'a str,
    pub start: &'a str,
    pub end: &'a str,
}

/// Split a schedule-string on its first space and its time range on `-`.
pub fn split_schedule(input: &str) -> Result<ScheduleParts<'_>> {
    let malformed = |reason: &str| SlotError::InvalidFormat {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let (day_codes, time_range) = input
        .split_once(' ')
        .ok_or_else(|| malformed("expected '<day-codes> <HH:MM>-<HH:MM>'"))?;

    if day_codes.is_empty() {
        return Err(malformed("empty day-code block"));
    }

    let mut bounds = time_range.split('-');
    match (bounds.next(), bounds.next(), bounds.next()) {
        (Some(start), Some(end), None) => Ok(ScheduleParts {
            day_codes,
            start,
            end,
        }),
        _ => Err(malformed("time range must be '<HH:MM>-<HH:MM>'")),
    }
}

/// The weekly meeting pattern decoded from one schedule-string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeSlot {
    /// Days in order of appearance in the day block. Not deduplicated.
    pub days: Vec<Day>,
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeSlot {
    /// Start as fractional hours (`9.5` for 09:30).
    pub fn start_time(&self) -> f64 {
        self.start.fractional_hours()
    }

    /// End as fractional hours.
    pub fn end_time(&self) -> f64 {
        self.end.fractional_hours()
    }

    /// Length of one meeting; zero or negative for inverted slots.
    pub fn duration_minutes(&self) -> i64 {
        self.end.minutes_since_midnight() - self.start.minutes_since_midnight()
    }

    pub fn meets_on(&self, day: Day) -> bool {
        self.days.contains(&day)
    }

    /// True when the end is not after the start.
    pub fn is_inverted(&self) -> bool {
        self.start >= self.end
    }
}

impl FromStr for TimeSlot {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        parse_time_slots(s)
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TimeSlot", 3)?;
        state.serialize_field("days", &self.days)?;
        state.serialize_field("startTime", &self.start_time())?;
        state.serialize_field("endTime", &self.end_time())?;
        state.end()
    }
}

/// Parse a schedule-string into a [`TimeSlot`].
///
/// # Errors
/// Returns `SlotError::InvalidFormat` if the string is not shaped like
/// `"<day-codes> <HH:MM>-<HH:MM>"`, `SlotError::InvalidDayCode` for a day
/// character outside `M`, `T`, `W`, `TH`, `F`, and `SlotError::InvalidTime`
/// naming the first bad time token.
pub fn parse_time_slots(schedule: &str) -> Result<TimeSlot> {
    let parts = split_schedule(schedule)?;
    let days = tokenize_days(parts.day_codes)?;
    let start = ClockTime::parse(parts.start)?;
    let end = ClockTime::parse(parts.end)?;

    let slot = TimeSlot { days, start, end };
    tracing::debug!(schedule, days = slot.days.len(), %start, %end, "parsed time slot");
    Ok(slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_time_accepts_single_digit_hour() {
        let t = ClockTime::parse("9:05").unwrap();
        assert_eq!((t.hour(), t.minute()), (9, 5));
        assert_eq!(t.to_string(), "09:05");
    }

    #[test]
    fn clock_time_rejects_out_of_range() {
        for token in ["24:00", "12:60", "123:00", "12:5", "ab:cd", "12", "", "-1:00", "+9:00"] {
            assert!(ClockTime::parse(token).is_err(), "{:?} should fail", token);
        }
    }

    #[test]
    fn from_minutes_bounds() {
        assert_eq!(ClockTime::from_minutes(0), ClockTime::new(0, 0));
        assert_eq!(ClockTime::from_minutes(23 * 60 + 59), ClockTime::new(23, 59));
        assert_eq!(ClockTime::from_minutes(24 * 60), None);
        assert_eq!(ClockTime::from_minutes(-1), None);
    }

    #[test]
    fn split_keeps_raw_tokens() {
        let parts = split_schedule("TTH 14:00-15:15").unwrap();
        assert_eq!(parts.day_codes, "TTH");
        assert_eq!(parts.start, "14:00");
        assert_eq!(parts.end, "15:15");
    }
}

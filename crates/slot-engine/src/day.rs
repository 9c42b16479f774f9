//! Day-codes and the day-block tokenizer.
//!
//! The day block of a schedule-string is a run of day-codes with no separator,
//! e.g. `MWF` or `TTH`. Codes are matched against [`DAY_CODES`] in table order,
//! and the table lists longer codes first, so `TH` always wins over `T`
//! followed by `H`.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// A teaching weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

/// Day-code matchers, tried in order. Longer codes must precede any code
/// that is a prefix of them.
pub const DAY_CODES: &[(&str, Day)] = &[
    ("TH", Day::Thursday),
    ("M", Day::Monday),
    ("T", Day::Tuesday),
    ("W", Day::Wednesday),
    ("F", Day::Friday),
];

impl Day {
    /// All days in weekday order.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Full English name, e.g. `"Thursday"`.
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }

    /// The schedule-string code for this day.
    pub fn code(self) -> &'static str {
        match self {
            Day::Monday => "M",
            Day::Tuesday => "T",
            Day::Wednesday => "W",
            Day::Thursday => "TH",
            Day::Friday => "F",
        }
    }

    /// RFC 5545 BYDAY code.
    pub fn rrule_code(self) -> &'static str {
        match self {
            Day::Monday => "MO",
            Day::Tuesday => "TU",
            Day::Wednesday => "WE",
            Day::Thursday => "TH",
            Day::Friday => "FR",
        }
    }

    pub fn weekday(self) -> Weekday {
        match self {
            Day::Monday => Weekday::Mon,
            Day::Tuesday => Weekday::Tue,
            Day::Wednesday => Weekday::Wed,
            Day::Thursday => Weekday::Thu,
            Day::Friday => Weekday::Fri,
        }
    }

    /// Inverse of [`Day::weekday`]; weekends have no teaching day.
    pub fn from_weekday(weekday: Weekday) -> Option<Day> {
        match weekday {
            Weekday::Mon => Some(Day::Monday),
            Weekday::Tue => Some(Day::Tuesday),
            Weekday::Wed => Some(Day::Wednesday),
            Weekday::Thu => Some(Day::Thursday),
            Weekday::Fri => Some(Day::Friday),
            Weekday::Sat | Weekday::Sun => None,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = SlotError;

    /// Accepts a full day name or a day-code, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Day::ALL
            .into_iter()
            .find(|day| {
                day.name().eq_ignore_ascii_case(trimmed) || day.code().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| SlotError::UnknownDay(s.to_string()))
    }
}

/// Decode a day block into days, in order of appearance.
///
/// Duplicates are kept (`"MM"` yields two Mondays). Any character that starts
/// no day-code is rejected with [`SlotError::InvalidDayCode`].
pub fn tokenize_days(codes: &str) -> Result<Vec<Day>> {
    if codes.is_empty() {
        return Err(SlotError::InvalidFormat {
            input: codes.to_string(),
            reason: "empty day-code block".to_string(),
        });
    }

    let mut days = Vec::with_capacity(codes.len());
    let mut pos = 0;

    while pos < codes.len() {
        let rest = &codes[pos..];
        match DAY_CODES.iter().find(|(code, _)| rest.starts_with(code)) {
            Some((code, day)) => {
                days.push(*day);
                pos += code.len();
            }
            None => {
                // `rest` is non-empty here.
                let found = rest.chars().next().unwrap_or_default();
                return Err(SlotError::InvalidDayCode {
                    input: codes.to_string(),
                    position: pos,
                    found,
                });
            }
        }
    }

    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_longer_codes_before_their_prefixes() {
        for (i, (code, _)) in DAY_CODES.iter().enumerate() {
            for (later, _) in &DAY_CODES[i + 1..] {
                assert!(
                    !later.starts_with(code) || later.len() <= code.len(),
                    "'{}' is shadowed by earlier prefix '{}'",
                    later,
                    code
                );
            }
        }
    }

    #[test]
    fn every_day_has_exactly_one_code() {
        for day in Day::ALL {
            let matches = DAY_CODES.iter().filter(|(_, d)| *d == day).count();
            assert_eq!(matches, 1, "{} should have one code", day);
            assert_eq!(tokenize_days(day.code()).unwrap(), vec![day]);
        }
    }

    #[test]
    fn weekday_roundtrip() {
        for day in Day::ALL {
            assert_eq!(Day::from_weekday(day.weekday()), Some(day));
        }
        assert_eq!(Day::from_weekday(Weekday::Sat), None);
    }
}

//! 12-hour rendering of a schedule-string's time range.

use crate::error::Result;
use crate::slot::{parse_time_slots, ClockTime, TimeSlot};

impl ClockTime {
    /// Render on a 12-hour clock without a leading zero: `"9:05 AM"`.
    ///
    /// Hour 0 is `12 AM` and hour 12 is `12 PM`.
    pub fn to_twelve_hour(self) -> String {
        let hour = self.hour();
        let period = if hour < 12 { "AM" } else { "PM" };
        let display_hour = match hour {
            0 => 12,
            13..=23 => hour - 12,
            _ => hour,
        };
        format!("{}:{:02} {}", display_hour, self.minute(), period)
    }
}

impl TimeSlot {
    /// `"9:00 AM - 9:50 AM"` for a 09:00-09:50 slot.
    pub fn format_range(&self) -> String {
        format!(
            "{} - {}",
            self.start.to_twelve_hour(),
            self.end.to_twelve_hour()
        )
    }
}

/// Render the time range of a schedule-string, e.g. `"MWF 09:00-09:50"` becomes
/// `"9:00 AM - 9:50 AM"`.
///
/// The day block is validated the same way [`parse_time_slots`] validates it,
/// so a string this function accepts always parses.
pub fn format_time_range(schedule: &str) -> Result<String> {
    Ok(parse_time_slots(schedule)?.format_range())
}

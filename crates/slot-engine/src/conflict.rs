//! Detect overlapping weekly time slots.
//!
//! Two slots conflict when they share at least one day and their intervals
//! overlap. Adjacent slots (where one ends exactly when another starts) are
//! NOT conflicts.

use crate::day::Day;
use crate::error::Result;
use crate::slot::{parse_time_slots, TimeSlot};

impl TimeSlot {
    /// Days present in both slots, in `self`'s order, without repeats.
    pub fn common_days(&self, other: &TimeSlot) -> Vec<Day> {
        let mut common = Vec::new();
        for day in &self.days {
            if other.days.contains(day) && !common.contains(day) {
                common.push(*day);
            }
        }
        common
    }

    /// Minutes of overlap between the two intervals, if they overlap at all.
    ///
    /// Ignores days. Two intervals overlap iff `a.start < b.end && b.start < a.end`,
    /// which excludes the adjacent case where `a.end == b.start`.
    pub fn overlap_minutes(&self, other: &TimeSlot) -> Option<i64> {
        if self.start < other.end && other.start < self.end {
            let overlap_start = self.start.max(other.start);
            let overlap_end = self.end.min(other.end);
            Some(overlap_end.minutes_since_midnight() - overlap_start.minutes_since_midnight())
        } else {
            None
        }
    }

    /// True iff the slots share a day and their intervals overlap.
    pub fn conflicts_with(&self, other: &TimeSlot) -> bool {
        if !self.days.iter().any(|day| other.days.contains(day)) {
            return false;
        }
        !(self.end <= other.start || other.end <= self.start)
    }
}

/// Decide whether two schedule-strings occupy overlapping time on a common day.
///
/// # Errors
/// Propagates the parse error of whichever input is malformed first.
pub fn check_time_conflict(schedule_a: &str, schedule_b: &str) -> Result<bool> {
    let a = parse_time_slots(schedule_a)?;
    let b = parse_time_slots(schedule_b)?;

    let conflict = a.conflicts_with(&b);
    tracing::debug!(schedule_a, schedule_b, conflict, "checked time conflict");
    Ok(conflict)
}

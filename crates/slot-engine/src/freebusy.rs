//! Free windows left on a weekday once a set of slots is placed.
//!
//! Sorts the day's busy intervals by start, merges overlapping or touching
//! ones, then reports the gaps inside a visible day window.

use serde::{Deserialize, Serialize};

use crate::day::Day;
use crate::slot::{ClockTime, TimeSlot};

/// The part of the day free time is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    pub start: ClockTime,
    pub end: ClockTime,
}

const DEFAULT_START: ClockTime = match ClockTime::new(8, 0) {
    Some(t) => t,
    None => panic!("invalid default window start"),
};

const DEFAULT_END: ClockTime = match ClockTime::new(22, 0) {
    Some(t) => t,
    None => panic!("invalid default window end"),
};

impl Default for DayWindow {
    /// 08:00 to 22:00.
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
        }
    }
}

/// A free gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeWindow {
    pub start: ClockTime,
    pub end: ClockTime,
    pub duration_minutes: i64,
}

/// Merge the busy intervals of slots meeting on `day`, clipped to the window.
///
/// Returns a sorted, non-overlapping list of `(start, end)` minute offsets.
fn merge_busy_periods(slots: &[TimeSlot], day: Day, window: &DayWindow) -> Vec<(i64, i64)> {
    let window_start = window.start.minutes_since_midnight();
    let window_end = window.end.minutes_since_midnight();

    let mut intervals: Vec<(i64, i64)> = slots
        .iter()
        .filter(|s| s.meets_on(day) && !s.is_inverted())
        .map(|s| {
            (
                s.start.minutes_since_midnight(),
                s.end.minutes_since_midnight(),
            )
        })
        .filter(|&(start, end)| start < window_end && end > window_start)
        .map(|(start, end)| (start.max(window_start), end.min(window_end)))
        .collect();

    intervals.sort_unstable();

    let mut merged: Vec<(i64, i64)> = Vec::new();
    for (start, end) in intervals {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
}

/// Free windows on `day` within `window`, sorted by start.
///
/// An inverted or empty window has no free time.
pub fn free_windows(slots: &[TimeSlot], day: Day, window: &DayWindow) -> Vec<FreeWindow> {
    if window.start >= window.end {
        return Vec::new();
    }

    let mut gaps = Vec::new();
    let mut cursor = window.start.minutes_since_midnight();

    for (busy_start, busy_end) in merge_busy_periods(slots, day, window) {
        if cursor < busy_start {
            gaps.push((cursor, busy_start));
        }
        cursor = cursor.max(busy_end);
    }

    let window_end = window.end.minutes_since_midnight();
    if cursor < window_end {
        gaps.push((cursor, window_end));
    }

    gaps.into_iter()
        .filter_map(|(start, end)| {
            Some(FreeWindow {
                start: ClockTime::from_minutes(start)?,
                end: ClockTime::from_minutes(end)?,
                duration_minutes: end - start,
            })
        })
        .collect()
}

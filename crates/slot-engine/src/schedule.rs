//! A student's selected courses and the conflicts between them.
//!
//! The conflict core only compares two slots. This module runs that comparison
//! pairwise across everything on a schedule.

use serde::Serialize;

use crate::catalog::Course;
use crate::day::Day;
use crate::error::{Result, SlotError};
use crate::freebusy::{self, DayWindow, FreeWindow};
use crate::ids::{IdSource, SequenceIds};
use crate::slot::TimeSlot;

/// A course on a schedule, with its parsed slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledCourse {
    pub id: u64,
    pub course: Course,
    pub slot: TimeSlot,
}

/// Two scheduled courses that collide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConflict {
    /// CRN of the course added earlier.
    pub first: String,
    /// CRN of the course added later.
    pub second: String,
    /// Days on which both meet.
    pub days: Vec<Day>,
    /// Overlap per shared day.
    pub overlap_minutes: i64,
}

#[derive(Debug, Clone)]
pub struct Schedule<I: IdSource = SequenceIds> {
    ids: I,
    entries: Vec<ScheduledCourse>,
}

impl Schedule<SequenceIds> {
    pub fn new() -> Self {
        Self::with_ids(SequenceIds::new())
    }
}

impl Default for Schedule<SequenceIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> Schedule<I> {
    pub fn with_ids(ids: I) -> Self {
        Self {
            ids,
            entries: Vec::new(),
        }
    }

    /// Add a course and return its schedule id.
    ///
    /// Conflicting courses are accepted; use [`Schedule::conflicts_with`] first
    /// to refuse them.
    ///
    /// # Errors
    /// Returns the parse error of a malformed `time`, or
    /// `SlotError::DuplicateCourse` if the CRN is already scheduled.
    pub fn add(&mut self, course: Course) -> Result<u64> {
        if self.entries.iter().any(|e| e.course.crn == course.crn) {
            return Err(SlotError::DuplicateCourse(course.crn));
        }
        let slot = course.time_slot()?;
        let id = self.ids.next_id();
        tracing::debug!(id, crn = %course.crn, "added course to schedule");
        self.entries.push(ScheduledCourse { id, course, slot });
        Ok(id)
    }

    /// Remove a course by schedule id.
    pub fn remove(&mut self, id: u64) -> Option<Course> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index).course)
    }

    pub fn courses(&self) -> &[ScheduledCourse] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_credits(&self) -> u32 {
        self.entries.iter().map(|e| e.course.credits).sum()
    }

    /// Every conflicting pair, ordered by the earlier course then the later.
    pub fn conflicts(&self) -> Vec<ScheduleConflict> {
        let mut conflicts = Vec::new();
        for (i, a) in self.entries.iter().enumerate() {
            for b in &self.entries[i + 1..] {
                if let Some(conflict) = describe_conflict(a, b) {
                    conflicts.push(conflict);
                }
            }
        }
        conflicts
    }

    /// Scheduled courses a candidate would collide with.
    pub fn conflicts_with(&self, candidate: &Course) -> Result<Vec<&ScheduledCourse>> {
        let slot = candidate.time_slot()?;
        Ok(self
            .entries
            .iter()
            .filter(|e| e.slot.conflicts_with(&slot))
            .collect())
    }

    /// Free windows on `day` within `window`.
    pub fn free_windows(&self, day: Day, window: &DayWindow) -> Vec<FreeWindow> {
        let slots: Vec<TimeSlot> = self.entries.iter().map(|e| e.slot.clone()).collect();
        freebusy::free_windows(&slots, day, window)
    }
}

fn describe_conflict(a: &ScheduledCourse, b: &ScheduledCourse) -> Option<ScheduleConflict> {
    if !a.slot.conflicts_with(&b.slot) {
        return None;
    }
    let overlap_minutes = a.slot.overlap_minutes(&b.slot)?;
    Some(ScheduleConflict {
        first: a.course.crn.clone(),
        second: b.course.crn.clone(),
        days: a.slot.common_days(&b.slot),
        overlap_minutes,
    })
}

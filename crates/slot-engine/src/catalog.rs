//! Course records and catalog search.
//!
//! A catalog is a JSON array of course objects using camelCase field names.
//! Every course carries a schedule-string in its `time` field; the catalog
//! does not validate it up front, but filters that need the parsed slot skip
//! courses whose `time` is malformed.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::slot::{parse_time_slots, TimeSlot};

/// One offering from the course catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    pub crn: String,
    pub professor: String,
    #[serde(default)]
    pub description: String,
    pub credits: u32,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub corequisites: Vec<String>,
    /// Schedule-string, e.g. `"MWF 09:00-09:50"`.
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub seats_total: u32,
    #[serde(default)]
    pub seats_available: u32,
    #[serde(default)]
    pub waitlist_count: u32,
    /// 1 (easiest) to 5.
    #[serde(default = "default_difficulty")]
    pub difficulty: u8,
}

fn default_difficulty() -> u8 {
    3
}

impl Course {
    /// Subject prefix of the CRN: everything before the first digit
    /// (`"CS"` for `"CS101"`).
    pub fn subject(&self) -> &str {
        let end = self
            .crn
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(self.crn.len());
        &self.crn[..end]
    }

    /// Parse this course's schedule-string.
    pub fn time_slot(&self) -> Result<TimeSlot> {
        parse_time_slots(&self.time)
    }
}

/// Part of the day a course starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBand {
    /// Starts 08:00-11:59.
    Morning,
    /// Starts 12:00-15:59.
    Afternoon,
    /// Starts 16:00-19:59.
    Evening,
}

impl TimeBand {
    /// Whether a start hour falls in this band (start inclusive, end exclusive).
    pub fn contains_hour(self, hour: u8) -> bool {
        let (from, to) = match self {
            TimeBand::Morning => (8, 12),
            TimeBand::Afternoon => (12, 16),
            TimeBand::Evening => (16, 20),
        };
        (from..to).contains(&hour)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    /// At least one open seat.
    Open,
    /// Someone is on the waitlist.
    Waitlisted,
}

/// Criteria for [`Catalog::search`]. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    /// Case-insensitive substring of the name, professor or CRN.
    pub query: Option<String>,
    /// CRN prefix, e.g. `"MATH"`.
    pub subject: Option<String>,
    pub band: Option<TimeBand>,
    pub credits: Option<u32>,
    pub availability: Option<Availability>,
}

impl SearchFilter {
    pub fn matches(&self, course: &Course) -> bool {
        if let Some(query) = self.query.as_deref().filter(|q| !q.is_empty()) {
            let needle = query.to_lowercase();
            let hit = [&course.name, &course.professor, &course.crn]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if let Some(subject) = &self.subject {
            if !course.crn.starts_with(subject.as_str()) {
                return false;
            }
        }

        if let Some(band) = self.band {
            match course.time_slot() {
                Ok(slot) if band.contains_hour(slot.start.hour()) => {}
                Ok(_) => return false,
                Err(e) => {
                    tracing::warn!(crn = %course.crn, error = %e, "skipping course with malformed time");
                    return false;
                }
            }
        }

        if let Some(credits) = self.credits {
            if course.credits != credits {
                return false;
            }
        }

        match self.availability {
            Some(Availability::Open) => course.seats_available > 0,
            Some(Availability::Waitlisted) => course.waitlist_count > 0,
            None => true,
        }
    }
}

/// A static list of course offerings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Load a catalog from a JSON array of course objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let courses: Vec<Course> = serde_json::from_str(json)?;
        tracing::debug!(courses = courses.len(), "loaded catalog");
        Ok(Self { courses })
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn find_by_crn(&self, crn: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.crn.eq_ignore_ascii_case(crn))
    }

    /// Distinct subject prefixes, sorted.
    pub fn subjects(&self) -> Vec<&str> {
        let mut subjects: Vec<&str> = self.courses.iter().map(Course::subject).collect();
        subjects.sort_unstable();
        subjects.dedup();
        subjects
    }

    /// Courses matching every criterion of `filter`, in catalog order.
    pub fn search(&self, filter: &SearchFilter) -> Vec<&Course> {
        self.courses.iter().filter(|c| filter.matches(c)).collect()
    }
}

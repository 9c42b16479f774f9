//! Weekly recurrence -- turns a [`TimeSlot`] into concrete meetings across a term.
//!
//! Builds an RFC 5545 weekly rule from the slot's days and expands it with the
//! `rrule` crate, using `chrono-tz` so meetings keep their wall-clock time
//! across DST transitions.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use rrule::RRuleSet;
use serde::{Deserialize, Serialize};

use crate::day::Day;
use crate::error::{Result, SlotError};
use crate::slot::TimeSlot;

/// A teaching term: the inclusive date range meetings happen in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// IANA timezone the schedule's wall-clock times are in.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

/// One concrete class meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meeting {
    pub day: Day,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeSlot {
    /// Weekly RRULE for this slot, e.g. `"FREQ=WEEKLY;BYDAY=MO,WE,FR"`.
    ///
    /// Days are listed once each, in weekday order.
    pub fn to_rrule(&self) -> String {
        let byday: Vec<&str> = Day::ALL
            .into_iter()
            .filter(|d| self.meets_on(*d))
            .map(Day::rrule_code)
            .collect();
        format!("FREQ=WEEKLY;BYDAY={}", byday.join(","))
    }
}

/// Expand a slot into every meeting inside the term, sorted by start.
///
/// The first meeting is on the earliest term date that is one of the slot's
/// days. Each meeting lasts the slot's duration.
///
/// # Errors
/// Returns `SlotError::InvalidTimezone` if the term's timezone is not a valid
/// IANA identifier, `SlotError::TermTooLong` if the term has more days than
/// one expansion can return, and `SlotError::InvalidRule` if the rule is
/// rejected.
pub fn expand_meetings(slot: &TimeSlot, term: &Term) -> Result<Vec<Meeting>> {
    let tz: chrono_tz::Tz = term
        .timezone
        .parse()
        .map_err(|_| SlotError::InvalidTimezone(term.timezone.clone()))?;

    if slot.days.is_empty() || slot.is_inverted() {
        return Ok(Vec::new());
    }

    // Anchor DTSTART on a meeting day so it is itself an instance.
    let Some(first_date) = term
        .start
        .iter_days()
        .take_while(|d| *d <= term.end)
        .find(|d| Day::from_weekday(d.weekday()).is_some_and(|day| slot.meets_on(day)))
    else {
        return Ok(Vec::new());
    };

    let dtstart_ical = format!(
        "{}T{:02}{:02}00",
        first_date.format("%Y%m%d"),
        slot.start.hour(),
        slot.start.minute()
    );

    // A slot meets at most once a day, so the day count bounds the instances.
    let span_days = (term.end - first_date).num_days() + 1;
    let limit = u16::try_from(span_days).map_err(|_| SlotError::TermTooLong(span_days))?;

    // UNTIL must be UTC when DTSTART carries a TZID.
    let last_moment = term
        .end
        .and_hms_opt(23, 59, 59)
        .and_then(|local| tz.from_local_datetime(&local).latest())
        .ok_or_else(|| {
            SlotError::InvalidRule(format!("no local end of day for {} in {}", term.end, tz))
        })?;
    let until_ical = last_moment
        .with_timezone(&Utc)
        .format("%Y%m%dT%H%M%SZ")
        .to_string();

    let rrule_text = format!(
        "DTSTART;TZID={}:{}\nRRULE:{};UNTIL={}",
        term.timezone,
        dtstart_ical,
        slot.to_rrule(),
        until_ical
    );

    let rrule_set: RRuleSet = rrule_text
        .parse()
        .map_err(|e| SlotError::InvalidRule(format!("{}", e)))?;

    let duration = Duration::minutes(slot.duration_minutes());

    let meetings: Vec<Meeting> = rrule_set
        .all(limit)
        .dates
        .into_iter()
        .filter_map(|dt| {
            let day = Day::from_weekday(dt.weekday())?;
            let start: DateTime<Utc> = dt.with_timezone(&Utc);
            Some(Meeting {
                day,
                start,
                end: start + duration,
            })
        })
        .collect();

    tracing::debug!(
        rrule = %slot.to_rrule(),
        timezone = %term.timezone,
        meetings = meetings.len(),
        "expanded weekly meetings"
    );

    Ok(meetings)
}

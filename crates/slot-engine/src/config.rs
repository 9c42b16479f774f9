//! TOML configuration for callers of the engine.
//!
//! ```toml
//! [calendar]
//! start_time = "08:00"
//! end_time = "22:00"
//!
//! [term]
//! start = "2026-01-12"
//! end = "2026-05-01"
//! timezone = "America/New_York"
//! ```
//!
//! Every section is optional. The calendar window defaults to 08:00-22:00 and
//! there is no default term.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::freebusy::DayWindow;
use crate::recurrence::Term;
use crate::slot::ClockTime;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlotsConfig {
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub term: Option<Term>,
}

/// Visible hours of a schedule day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        let window = DayWindow::default();
        Self {
            start_time: window.start,
            end_time: window.end,
        }
    }
}

impl CalendarConfig {
    pub fn window(&self) -> DayWindow {
        DayWindow {
            start: self.start_time,
            end: self.end_time,
        }
    }
}

impl SlotsConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

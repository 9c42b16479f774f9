//! WASM bindings for slot-engine.
//!
//! Exposes schedule-string parsing, range formatting, conflict detection, and
//! GPA computation to JavaScript via `wasm-bindgen`. Complex values cross the
//! boundary as JSON strings; errors become string `JsValue`s.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use serde::Serialize;
use slot_engine::{Course, GradeSheet, Schedule, ScheduleConflict};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Conflicts between all courses in a JSON array of catalog course objects.
fn schedule_conflicts(courses_json: &str) -> Result<Vec<ScheduleConflict>, String> {
    let courses: Vec<Course> =
        serde_json::from_str(courses_json).map_err(|e| format!("Invalid courses JSON: {}", e))?;

    let mut schedule = Schedule::new();
    for course in courses {
        schedule.add(course).map_err(|e| e.to_string())?;
    }
    Ok(schedule.conflicts())
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Parse a schedule-string such as `"MWF 09:00-09:50"`.
///
/// Returns a JSON string `{"days": [...], "startTime": f64, "endTime": f64}`.
#[wasm_bindgen(js_name = "parseTimeSlots")]
pub fn parse_time_slots(schedule: &str) -> Result<String, JsValue> {
    let slot = slot_engine::parse_time_slots(schedule).map_err(to_js_error)?;
    to_json(&slot)
}

/// Render a schedule-string's range, e.g. `"9:00 AM - 9:50 AM"`.
#[wasm_bindgen(js_name = "formatTimeRange")]
pub fn format_time_range(schedule: &str) -> Result<String, JsValue> {
    slot_engine::format_time_range(schedule).map_err(to_js_error)
}

/// True when the two schedule-strings overlap on a shared day.
#[wasm_bindgen(js_name = "checkTimeConflict")]
pub fn check_time_conflict(schedule_a: &str, schedule_b: &str) -> Result<bool, JsValue> {
    slot_engine::check_time_conflict(schedule_a, schedule_b).map_err(to_js_error)
}

/// Pairwise conflicts between courses.
///
/// `courses_json` is a JSON array of catalog course objects. Returns a JSON
/// array of `{first, second, days, overlapMinutes}` objects.
#[wasm_bindgen(js_name = "findScheduleConflicts")]
pub fn find_schedule_conflicts(courses_json: &str) -> Result<String, JsValue> {
    let conflicts = schedule_conflicts(courses_json).map_err(to_js_error)?;
    to_json(&conflicts)
}

/// Credit-weighted GPA of a JSON array of `{courseId, credits, grade}` entries.
#[wasm_bindgen(js_name = "computeGpa")]
pub fn compute_gpa(entries_json: &str) -> Result<f64, JsValue> {
    let sheet = GradeSheet::from_json(entries_json).map_err(to_js_error)?;
    Ok(sheet.gpa())
}

//! Tests for free window computation.

use slot_engine::{free_windows, parse_time_slots, ClockTime, Day, DayWindow, TimeSlot};

fn slots(inputs: &[&str]) -> Vec<TimeSlot> {
    inputs.iter().map(|s| parse_time_slots(s).unwrap()).collect()
}

fn t(hour: u8, minute: u8) -> ClockTime {
    ClockTime::new(hour, minute).unwrap()
}

fn window(start: (u8, u8), end: (u8, u8)) -> DayWindow {
    DayWindow {
        start: t(start.0, start.1),
        end: t(end.0, end.1),
    }
}

#[test]
fn default_window_is_eight_to_ten() {
    let w = DayWindow::default();
    assert_eq!(w.start, t(8, 0));
    assert_eq!(w.end, t(22, 0));
}

#[test]
fn single_class_produces_two_windows() {
    // Window: 08:00-17:00, class: 10:00-11:00
    let free = free_windows(
        &slots(&["MWF 10:00-11:00"]),
        Day::Monday,
        &window((8, 0), (17, 0)),
    );

    assert_eq!(free.len(), 2);
    assert_eq!((free[0].start, free[0].end), (t(8, 0), t(10, 0)));
    assert_eq!(free[0].duration_minutes, 120);
    assert_eq!((free[1].start, free[1].end), (t(11, 0), t(17, 0)));
    assert_eq!(free[1].duration_minutes, 360);
}

#[test]
fn other_days_are_ignored() {
    let free = free_windows(
        &slots(&["TTH 10:00-11:00"]),
        Day::Monday,
        &window((8, 0), (17, 0)),
    );
    assert_eq!(free.len(), 1);
    assert_eq!(free[0].duration_minutes, 540);
}

#[test]
fn overlapping_and_touching_classes_merge() {
    let free = free_windows(
        &slots(&["M 09:00-10:00", "MW 09:30-10:30", "M 10:30-11:00"]),
        Day::Monday,
        &window((8, 0), (12, 0)),
    );

    assert_eq!(free.len(), 2);
    assert_eq!((free[0].start, free[0].end), (t(8, 0), t(9, 0)));
    assert_eq!((free[1].start, free[1].end), (t(11, 0), t(12, 0)));
}

#[test]
fn classes_are_clipped_to_window() {
    let free = free_windows(
        &slots(&["F 07:00-09:00", "F 16:00-23:00"]),
        Day::Friday,
        &window((8, 0), (22, 0)),
    );
    assert_eq!(free.len(), 1);
    assert_eq!((free[0].start, free[0].end), (t(9, 0), t(16, 0)));
}

#[test]
fn fully_booked_day_has_no_windows() {
    let free = free_windows(
        &slots(&["W 08:00-22:00"]),
        Day::Wednesday,
        &DayWindow::default(),
    );
    assert!(free.is_empty());
}

#[test]
fn inverted_slots_and_windows_contribute_nothing() {
    let free = free_windows(
        &slots(&["M 12:00-10:00"]),
        Day::Monday,
        &window((8, 0), (14, 0)),
    );
    assert_eq!(free.len(), 1);
    assert_eq!(free[0].duration_minutes, 360);

    assert!(free_windows(&[], Day::Monday, &window((14, 0), (8, 0))).is_empty());
}

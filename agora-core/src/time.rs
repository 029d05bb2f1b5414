//! Parsing of the date and wall-clock strings carried by events.
//!
//! Upstream producers disagree on clock format: the demo data set and CSV
//! imports use 12-hour strings ("9:00 AM"), calendar exports use 24-hour ones
//! ("09:00" or "09:00:00"). Both map onto `NaiveTime` within one reference day.

use chrono::{NaiveDate, NaiveTime};

/// Accepted wall-clock formats, tried in order.
const CLOCK_FORMATS: &[&str] = &[
    "%H:%M",
    "%H:%M:%S",
    "%I:%M %p",
    "%I:%M%p",
    "%I:%M:%S %p",
];

/// Parse a wall-clock time. Returns `None` if no accepted format matches.
pub fn parse_clock_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    CLOCK_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
}

/// Parse an ISO `YYYY-MM-DD` event date.
pub fn parse_event_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Whole minutes from `earlier` to `later` (negative if `later` comes first).
pub fn minutes_between(earlier: NaiveTime, later: NaiveTime) -> i64 {
    (later - earlier).num_minutes()
}

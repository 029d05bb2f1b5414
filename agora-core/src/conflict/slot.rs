//! An event resolved onto its date and wall-clock interval.

use chrono::{NaiveDate, NaiveTime};

use crate::conflict::{DetectionWarning, WarningKind};
use crate::event::Event;
use crate::time::{minutes_between, parse_clock_time, parse_event_date};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Slot<'a> {
    pub event: &'a Event,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl<'a> Slot<'a> {
    pub fn resolve(event: &'a Event) -> Result<Self, DetectionWarning> {
        let date = parse_event_date(&event.date)
            .ok_or_else(|| DetectionWarning::new(event, WarningKind::InvalidDate, &event.date))?;
        let start = parse_clock_time(&event.start_time).ok_or_else(|| {
            DetectionWarning::new(event, WarningKind::InvalidStartTime, &event.start_time)
        })?;
        let end = parse_clock_time(&event.end_time).ok_or_else(|| {
            DetectionWarning::new(event, WarningKind::InvalidEndTime, &event.end_time)
        })?;

        if end <= start {
            return Err(DetectionWarning::new(
                event,
                WarningKind::EndNotAfterStart,
                format!("{} - {}", event.start_time, event.end_time),
            ));
        }

        Ok(Slot {
            event,
            date,
            start,
            end,
        })
    }

    /// Minutes both intervals share, if any.
    pub fn overlap_minutes(&self, other: &Slot) -> Option<i64> {
        let overlap_start = self.start.max(other.start);
        let overlap_end = self.end.min(other.end);

        (overlap_start < overlap_end).then(|| minutes_between(overlap_start, overlap_end))
    }

    /// Minutes between whichever event ends first and the other's start.
    /// `None` when the intervals overlap.
    pub fn gap_minutes(&self, other: &Slot) -> Option<i64> {
        if self.end <= other.start {
            Some(minutes_between(self.end, other.start))
        } else if other.end <= self.start {
            Some(minutes_between(other.end, self.start))
        } else {
            None
        }
    }
}

//! Date window for narrowing an event set before detection.

use chrono::NaiveDate;

use crate::error::{AgoraError, AgoraResult};
use crate::event::Event;
use crate::time::parse_event_date;

/// Inclusive date window.
/// None values mean unbounded in that direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Unbounded in both directions.
    pub fn all() -> Self {
        DateRange::default()
    }

    /// Parse optional `YYYY-MM-DD` bounds, as given on the command line.
    pub fn from_args(from: Option<&str>, to: Option<&str>) -> AgoraResult<Self> {
        let from = from.map(parse_bound).transpose()?;
        let to = to.map(parse_bound).transpose()?;

        if let (Some(from), Some(to)) = (from, to)
            && from > to
        {
            return Err(AgoraError::Config(format!(
                "Date range starts after it ends ({} > {})",
                from, to
            )));
        }

        Ok(DateRange { from, to })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }

    /// Keep events inside the window.
    ///
    /// Events whose date does not parse are kept so the detector can report them.
    pub fn filter<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        events
            .iter()
            .filter(|e| parse_event_date(&e.date).is_none_or(|d| self.contains(d)))
            .collect()
    }
}

fn parse_bound(s: &str) -> AgoraResult<NaiveDate> {
    parse_event_date(s).ok_or_else(|| AgoraError::InvalidDate(s.to_string()))
}

//! Scheduling-conflict detection.
//!
//! The free functions use the default thresholds. Build a
//! [`ConflictDetector`] from [`crate::config::ConflictThresholds`] to use
//! configured ones.

mod detector;
mod kind;
mod record;
mod report;
mod slot;
mod warning;

pub use detector::ConflictDetector;
pub use kind::{ConflictType, Severity};
pub use record::Conflict;
pub use report::{ConflictReport, ConflictSummary, TypeCounts};
pub use warning::{DetectionWarning, WarningKind};

use crate::event::Event;

/// Detect conflicts across `events`, optionally restricted to one user's events.
pub fn detect_conflicts<'a, I>(events: I, user: Option<&str>) -> ConflictReport
where
    I: IntoIterator<Item = &'a Event>,
{
    ConflictDetector::default().detect(events, user)
}

/// Conflict counts by severity and type.
pub fn conflict_summary<'a, I>(events: I, user: Option<&str>) -> ConflictSummary
where
    I: IntoIterator<Item = &'a Event>,
{
    ConflictDetector::default().summarize(events, user)
}

/// Conflicts between one event and the rest of the set.
pub fn event_conflicts<'a, I>(event: &Event, all_events: I) -> ConflictReport
where
    I: IntoIterator<Item = &'a Event>,
{
    ConflictDetector::default().event_conflicts(event, all_events)
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Why an event was left out of conflict evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    InvalidDate,
    InvalidStartTime,
    InvalidEndTime,
    /// End at or before start. Also covers events running past midnight,
    /// which are not supported.
    EndNotAfterStart,
    /// Snapshot record missing a required field or carrying the wrong type
    InvalidRecord,
    /// Snapshot record reusing an id taken by an earlier record
    DuplicateId,
}

/// An event the detector could not evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionWarning {
    pub event_id: String,
    pub event_title: String,
    pub kind: WarningKind,
    /// The offending input, e.g. the unparseable time string
    pub value: String,
}

impl DetectionWarning {
    pub fn new(event: &Event, kind: WarningKind, value: impl Into<String>) -> Self {
        DetectionWarning {
            event_id: event.id.clone(),
            event_title: event.title.clone(),
            kind,
            value: value.into(),
        }
    }

    /// A snapshot record that never became an `Event`.
    ///
    /// `id` and `title` come from the raw record when present; otherwise the
    /// record is named by its 1-based position in the file.
    pub fn invalid_record(
        index: usize,
        id: Option<&str>,
        title: Option<&str>,
        reason: impl Into<String>,
    ) -> Self {
        DetectionWarning {
            event_id: id.map_or_else(|| format!("#{}", index + 1), str::to_string),
            event_title: title.unwrap_or("Unreadable record").to_string(),
            kind: WarningKind::InvalidRecord,
            value: reason.into(),
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::InvalidDate => write!(f, "invalid date"),
            WarningKind::InvalidStartTime => write!(f, "invalid start time"),
            WarningKind::InvalidEndTime => write!(f, "invalid end time"),
            WarningKind::EndNotAfterStart => write!(f, "ends before it starts"),
            WarningKind::InvalidRecord => write!(f, "invalid record"),
            WarningKind::DuplicateId => write!(f, "duplicate id"),
        }
    }
}

impl fmt::Display for DetectionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]: {} '{}'",
            self.event_title, self.event_id, self.kind, self.value
        )
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::conflict::{ConflictType, Severity};

/// One finding between two events on the same date.
///
/// `event_*` is the first side of the pair, `conflicting_event_*` the second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub event_id: String,
    pub event_title: String,
    pub conflicting_event_id: String,
    pub conflicting_event_title: String,
    pub conflict_type: ConflictType,
    pub severity: Severity,
    pub description: String,
    /// Date both events fall on
    pub date: NaiveDate,
}

impl Conflict {
    pub fn involves(&self, event_id: &str) -> bool {
        self.event_id == event_id || self.conflicting_event_id == event_id
    }
}

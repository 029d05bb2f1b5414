use serde::{Deserialize, Serialize};

use crate::conflict::{Conflict, ConflictType, DetectionWarning, Severity};

/// Result of one detection run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictReport {
    pub has_conflicts: bool,
    /// In discovery order
    pub conflicts: Vec<Conflict>,
    pub total_conflicts: usize,
    /// Events left out of the comparison
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<DetectionWarning>,
}

impl ConflictReport {
    pub fn new(conflicts: Vec<Conflict>, warnings: Vec<DetectionWarning>) -> Self {
        ConflictReport {
            has_conflicts: !conflicts.is_empty(),
            total_conflicts: conflicts.len(),
            conflicts,
            warnings,
        }
    }

    /// Put load-time diagnostics (e.g. [`EventSnapshot::rejected`]) ahead of
    /// the detector's own warnings.
    ///
    /// [`EventSnapshot::rejected`]: crate::snapshot::EventSnapshot::rejected
    pub fn with_rejected(mut self, rejected: &[DetectionWarning]) -> Self {
        self.warnings.splice(0..0, rejected.iter().cloned());
        self
    }

    /// Conflicts where `event_id` is on either side.
    pub fn involving<'a>(&'a self, event_id: &'a str) -> impl Iterator<Item = &'a Conflict> {
        self.conflicts.iter().filter(move |c| c.involves(event_id))
    }

    pub fn count_severity(&self, severity: Severity) -> usize {
        self.conflicts
            .iter()
            .filter(|c| c.severity == severity)
            .count()
    }

    pub fn count_type(&self, conflict_type: ConflictType) -> usize {
        self.conflicts
            .iter()
            .filter(|c| c.conflict_type == conflict_type)
            .count()
    }
}

/// Conflict counts for dashboards and analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictSummary {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub has_conflicts: bool,
    pub by_type: TypeCounts,
    /// Events left out because of bad records, dates or times
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCounts {
    pub overlap: usize,
    pub adjacent: usize,
    pub travel_time: usize,
}

impl From<&ConflictReport> for ConflictSummary {
    fn from(report: &ConflictReport) -> Self {
        ConflictSummary {
            total: report.total_conflicts,
            high: report.count_severity(Severity::High),
            medium: report.count_severity(Severity::Medium),
            low: report.count_severity(Severity::Low),
            has_conflicts: report.has_conflicts,
            by_type: TypeCounts {
                overlap: report.count_type(ConflictType::Overlap),
                adjacent: report.count_type(ConflictType::Adjacent),
                travel_time: report.count_type(ConflictType::TravelTime),
            },
            skipped: report.warnings.len(),
        }
    }
}

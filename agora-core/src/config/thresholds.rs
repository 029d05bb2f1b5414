//! Conflict thresholds shared by every detection call site.

use serde::{Deserialize, Serialize};

use crate::error::{AgoraError, AgoraResult};

pub const DEFAULT_VIRTUAL_LOCATION: &str = "Virtual";

/// Minute thresholds that decide whether a pair of events conflicts and how
/// badly. The `[conflicts]` table of the config file maps onto this struct;
/// every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConflictThresholds {
    /// Overlap strictly longer than this is high severity
    pub overlap_high_minutes: i64,
    /// Overlap at least this long is medium severity
    pub overlap_medium_minutes: i64,
    /// Gaps strictly shorter than this are adjacency conflicts
    pub adjacent_gap_minutes: i64,
    /// Adjacent gaps strictly shorter than this are high severity
    pub adjacent_high_minutes: i64,
    /// Gaps strictly shorter than this between two venues are travel-time conflicts
    pub travel_buffer_minutes: i64,
    /// Location that never needs travel (exact, case-sensitive match)
    pub virtual_location: String,
}

impl Default for ConflictThresholds {
    fn default() -> Self {
        ConflictThresholds {
            overlap_high_minutes: 60,
            overlap_medium_minutes: 30,
            adjacent_gap_minutes: 30,
            adjacent_high_minutes: 15,
            travel_buffer_minutes: 60,
            virtual_location: DEFAULT_VIRTUAL_LOCATION.to_string(),
        }
    }
}

impl ConflictThresholds {
    pub fn validate(&self) -> AgoraResult<()> {
        let minutes = [
            ("overlap_high_minutes", self.overlap_high_minutes),
            ("overlap_medium_minutes", self.overlap_medium_minutes),
            ("adjacent_gap_minutes", self.adjacent_gap_minutes),
            ("adjacent_high_minutes", self.adjacent_high_minutes),
            ("travel_buffer_minutes", self.travel_buffer_minutes),
        ];
        if let Some((key, value)) = minutes.iter().find(|(_, v)| *v < 0) {
            return Err(AgoraError::InvalidThresholds(format!(
                "{} must not be negative (got {})",
                key, value
            )));
        }

        if self.overlap_medium_minutes > self.overlap_high_minutes {
            return Err(AgoraError::InvalidThresholds(format!(
                "overlap_medium_minutes ({}) exceeds overlap_high_minutes ({})",
                self.overlap_medium_minutes, self.overlap_high_minutes
            )));
        }

        if self.adjacent_high_minutes > self.adjacent_gap_minutes {
            return Err(AgoraError::InvalidThresholds(format!(
                "adjacent_high_minutes ({}) exceeds adjacent_gap_minutes ({})",
                self.adjacent_high_minutes, self.adjacent_gap_minutes
            )));
        }

        Ok(())
    }

    pub fn is_virtual(&self, location: &str) -> bool {
        location == self.virtual_location
    }
}

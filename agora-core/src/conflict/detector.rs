//! Pairwise conflict detection over an event snapshot.

use crate::config::ConflictThresholds;
use crate::conflict::slot::Slot;
use crate::conflict::{
    Conflict, ConflictReport, ConflictSummary, ConflictType, DetectionWarning, Severity,
};
use crate::event::Event;

/// Finds overlapping, adjacent and travel-constrained event pairs.
///
/// Holds only its thresholds; every call works on the borrowed events it is
/// given and keeps no state between calls.
#[derive(Debug, Clone, Default)]
pub struct ConflictDetector {
    thresholds: ConflictThresholds,
}

impl ConflictDetector {
    pub fn new(thresholds: ConflictThresholds) -> Self {
        ConflictDetector { thresholds }
    }

    pub fn thresholds(&self) -> &ConflictThresholds {
        &self.thresholds
    }

    /// Compare every pair of same-date events.
    ///
    /// With `user`, only events the user has an RSVP entry for are compared.
    /// Events are ordered by `(date, start)` first, and that order decides
    /// which event of a pair is reported first. Events with unusable dates or
    /// times are skipped and listed in the report's warnings.
    pub fn detect<'a, I>(&self, events: I, user: Option<&str>) -> ConflictReport
    where
        I: IntoIterator<Item = &'a Event>,
    {
        let universe = events
            .into_iter()
            .filter(|e| user.is_none_or(|u| e.involves(u)));
        let (mut slots, warnings) = resolve_all(universe);

        // Stable, so events starting together keep their input order
        slots.sort_by_key(|s| (s.date, s.start));

        let mut conflicts = Vec::new();
        for (i, a) in slots.iter().enumerate() {
            for b in slots[i + 1..].iter().take_while(|b| b.date == a.date) {
                self.compare(a, b, &mut conflicts);
            }
        }

        tracing::debug!(
            compared = slots.len(),
            conflicts = conflicts.len(),
            skipped = warnings.len(),
            user = user.unwrap_or("-"),
            "conflict detection finished"
        );

        ConflictReport::new(conflicts, warnings)
    }

    /// Severity counts for [`ConflictDetector::detect`].
    pub fn summarize<'a, I>(&self, events: I, user: Option<&str>) -> ConflictSummary
    where
        I: IntoIterator<Item = &'a Event>,
    {
        ConflictSummary::from(&self.detect(events, user))
    }

    /// Conflicts between `event` and every other event in `all_events`.
    ///
    /// `event` is always reported as the first side of each pair, whatever
    /// its position in `all_events`. Entries sharing its id are skipped.
    pub fn event_conflicts<'a, I>(&self, event: &Event, all_events: I) -> ConflictReport
    where
        I: IntoIterator<Item = &'a Event>,
    {
        let focus = match Slot::resolve(event) {
            Ok(slot) => slot,
            Err(warning) => {
                log_skipped(&warning);
                return ConflictReport::new(Vec::new(), vec![warning]);
            }
        };

        let others = all_events.into_iter().filter(|e| e.id != event.id);
        let (slots, warnings) = resolve_all(others);

        let mut conflicts = Vec::new();
        for other in slots.iter().filter(|s| s.date == focus.date) {
            self.compare(&focus, other, &mut conflicts);
        }

        ConflictReport::new(conflicts, warnings)
    }

    /// Run the overlap, adjacency and travel checks on one same-date pair.
    fn compare(&self, a: &Slot, b: &Slot, out: &mut Vec<Conflict>) {
        let t = &self.thresholds;
        let gap = a.gap_minutes(b);

        if let Some(minutes) = a.overlap_minutes(b) {
            // Tenths of an hour, half rounded up (15 min is 0.3, not 0.2)
            let hours = (minutes as f64 / 6.0).round() / 10.0;
            out.push(record(
                a,
                b,
                ConflictType::Overlap,
                self.overlap_severity(minutes),
                format!("Events overlap by {:.1} hours", hours),
            ));
        }

        if let Some(gap) = gap
            && gap > 0
            && gap < t.adjacent_gap_minutes
        {
            out.push(record(
                a,
                b,
                ConflictType::Adjacent,
                self.adjacent_severity(gap),
                format!("Events are {} minutes apart", gap),
            ));
        }

        let (here, there) = (&a.event.location, &b.event.location);
        if here != there && !t.is_virtual(here) && !t.is_virtual(there) {
            // Overlapping events at two venues have no travel window at all
            if gap.is_none_or(|gap| gap < t.travel_buffer_minutes) {
                out.push(record(
                    a,
                    b,
                    ConflictType::TravelTime,
                    Severity::Medium,
                    format!("Insufficient travel time between {} and {}", here, there),
                ));
            }
        }
    }

    fn overlap_severity(&self, minutes: i64) -> Severity {
        if minutes > self.thresholds.overlap_high_minutes {
            Severity::High
        } else if minutes >= self.thresholds.overlap_medium_minutes {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    fn adjacent_severity(&self, gap: i64) -> Severity {
        if gap < self.thresholds.adjacent_high_minutes {
            Severity::High
        } else {
            Severity::Medium
        }
    }
}

fn resolve_all<'a>(events: impl Iterator<Item = &'a Event>) -> (Vec<Slot<'a>>, Vec<DetectionWarning>) {
    let mut slots = Vec::new();
    let mut warnings = Vec::new();

    for event in events {
        match Slot::resolve(event) {
            Ok(slot) => slots.push(slot),
            Err(warning) => {
                log_skipped(&warning);
                warnings.push(warning);
            }
        }
    }

    (slots, warnings)
}

fn log_skipped(warning: &DetectionWarning) {
    tracing::warn!(
        event_id = %warning.event_id,
        reason = %warning.kind,
        value = %warning.value,
        "skipping event in conflict detection"
    );
}

fn record(
    a: &Slot,
    b: &Slot,
    conflict_type: ConflictType,
    severity: Severity,
    description: String,
) -> Conflict {
    Conflict {
        event_id: a.event.id.clone(),
        event_title: a.event.title.clone(),
        conflicting_event_id: b.event.id.clone(),
        conflicting_event_title: b.event.title.clone(),
        conflict_type,
        severity,
        description,
        date: a.date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    fn meeting(id: &str, start: &str, end: &str, location: &str) -> Event {
        Event::new(id, format!("Meeting {}", id), "Acme", EventKind::Meeting)
            .scheduled("2025-07-15", start, end)
            .at(location)
    }

    fn overlap_severity_for(end_of_first: &str) -> Severity {
        let events = [
            meeting("a", "09:00", end_of_first, "Room 1"),
            meeting("b", "09:00", "12:00", "Room 1"),
        ];
        let report = ConflictDetector::default().detect(&events, None);
        assert_eq!(report.total_conflicts, 1);
        report.conflicts[0].severity
    }

    #[test]
    fn test_overlap_severity_boundaries() {
        assert_eq!(overlap_severity_for("09:29"), Severity::Low);
        assert_eq!(overlap_severity_for("09:30"), Severity::Medium);
        assert_eq!(overlap_severity_for("10:00"), Severity::Medium);
        assert_eq!(overlap_severity_for("10:01"), Severity::High);
    }

    #[test]
    fn test_adjacent_severity_boundaries() {
        let detector = ConflictDetector::default();
        let gap = |start: &str| {
            let events = [
                meeting("a", "09:00", "10:00", "Virtual"),
                meeting("b", start, "11:00", "Virtual"),
            ];
            detector
                .detect(&events, None)
                .conflicts
                .first()
                .map(|c| (c.conflict_type, c.severity))
        };

        assert_eq!(gap("10:00"), None);
        assert_eq!(gap("10:14"), Some((ConflictType::Adjacent, Severity::High)));
        assert_eq!(gap("10:15"), Some((ConflictType::Adjacent, Severity::Medium)));
        assert_eq!(gap("10:29"), Some((ConflictType::Adjacent, Severity::Medium)));
        assert_eq!(gap("10:30"), None);
    }

    #[test]
    fn test_travel_buffer_boundary() {
        let detector = ConflictDetector::default();
        let travel = |start: &str| {
            let events = [
                meeting("a", "09:00", "10:00", "Boston, MA"),
                meeting("b", start, "12:00", "New York, NY"),
            ];
            detector
                .detect(&events, None)
                .count_type(ConflictType::TravelTime)
        };

        assert_eq!(travel("10:00"), 1);
        assert_eq!(travel("10:59"), 1);
        assert_eq!(travel("11:00"), 0);
    }

    #[test]
    fn test_overlapping_events_at_two_venues_need_travel() {
        let events = [
            meeting("a", "09:00", "10:00", "Boston, MA"),
            meeting("b", "09:30", "10:30", "New York, NY"),
        ];
        let report = ConflictDetector::default().detect(&events, None);

        let types: Vec<_> = report.conflicts.iter().map(|c| c.conflict_type).collect();
        assert_eq!(types, vec![ConflictType::Overlap, ConflictType::TravelTime]);
    }

    #[test]
    fn test_configured_thresholds_apply() {
        let detector = ConflictDetector::new(ConflictThresholds {
            adjacent_gap_minutes: 45,
            travel_buffer_minutes: 30,
            virtual_location: "Remote".to_string(),
            ..Default::default()
        });
        let events = [
            meeting("a", "09:00", "10:00", "Remote"),
            meeting("b", "10:40", "11:00", "Virtual"),
            meeting("c", "11:20", "12:00", "Paris"),
        ];

        let report = detector.detect(&events, None);

        // a-b: 40 min gap, adjacent under the widened threshold
        // b-c: 20 min gap, adjacent, and "Virtual" is an ordinary venue here
        // a-c: "Remote" is exempt from travel
        let found: Vec<_> = report
            .conflicts
            .iter()
            .map(|c| (c.event_id.as_str(), c.conflicting_event_id.as_str(), c.conflict_type))
            .collect();
        assert_eq!(
            found,
            vec![
                ("a", "b", ConflictType::Adjacent),
                ("b", "c", ConflictType::Adjacent),
                ("b", "c", ConflictType::TravelTime),
            ]
        );
    }

    #[test]
    fn test_descriptions_carry_quantities() {
        let events = [
            meeting("a", "09:00", "10:30", "Boston, MA"),
            meeting("b", "09:18", "11:00", "Boston, MA"),
            meeting("c", "11:10", "12:00", "New York, NY"),
        ];
        let report = ConflictDetector::default().detect(&events, None);
        let descriptions: Vec<_> = report.conflicts.iter().map(|c| c.description.as_str()).collect();

        assert!(descriptions.contains(&"Events overlap by 1.2 hours"));
        assert!(descriptions.contains(&"Events are 10 minutes apart"));
        assert!(descriptions.contains(&"Insufficient travel time between Boston, MA and New York, NY"));
    }

    #[test]
    fn test_quarter_hour_overlaps_round_up() {
        let quarter = [
            meeting("a", "09:00", "10:00", "Room 1"),
            meeting("b", "09:45", "11:00", "Room 1"),
        ];
        let report = ConflictDetector::default().detect(&quarter, None);
        assert_eq!(report.conflicts[0].description, "Events overlap by 0.3 hours");

        let hour_and_quarter = [
            meeting("a", "09:00", "11:00", "Room 1"),
            meeting("b", "09:45", "12:00", "Room 1"),
        ];
        let report = ConflictDetector::default().detect(&hour_and_quarter, None);
        assert_eq!(report.conflicts[0].description, "Events overlap by 1.3 hours");
    }
}

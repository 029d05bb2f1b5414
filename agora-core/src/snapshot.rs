//! Loading event snapshots exported by the calendar application.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::conflict::{DetectionWarning, WarningKind};
use crate::error::{AgoraError, AgoraResult};
use crate::event::Event;

/// An immutable set of events to check for conflicts.
///
/// Records that could not be loaded are kept aside as diagnostics so the
/// rest of the batch is still evaluated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventSnapshot {
    events: Vec<Event>,
    rejected: Vec<DetectionWarning>,
    ids: HashSet<String>,
}

impl EventSnapshot {
    /// Build a snapshot. An event reusing an earlier id is rejected.
    pub fn new(events: Vec<Event>) -> Self {
        let mut snapshot = EventSnapshot::default();
        for event in events {
            snapshot.push(event);
        }
        snapshot
    }

    /// Read a JSON array of events from `path`.
    pub fn load(path: &Path) -> AgoraResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AgoraError::Snapshot(format!("Could not read {}: {}", path.display(), e))
        })?;

        let snapshot = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            events = snapshot.len(),
            rejected = snapshot.rejected.len(),
            "loaded event snapshot"
        );
        Ok(snapshot)
    }

    /// Parse a JSON array of events.
    ///
    /// Only malformed JSON or a non-array document fails. Each element is
    /// converted on its own and bad ones end up in [`rejected`](Self::rejected).
    pub fn from_json(content: &str) -> AgoraResult<Self> {
        let records: Vec<Value> = serde_json::from_str(content)?;

        let mut snapshot = EventSnapshot::default();
        for (index, record) in records.iter().enumerate() {
            match Event::deserialize(record) {
                Ok(event) => snapshot.push(event),
                Err(e) => snapshot.reject(DetectionWarning::invalid_record(
                    index,
                    record.get("id").and_then(Value::as_str),
                    record.get("title").and_then(Value::as_str),
                    e.to_string(),
                )),
            }
        }

        Ok(snapshot)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Records left out at load time, in file order.
    pub fn rejected(&self) -> &[DetectionWarning] {
        &self.rejected
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn push(&mut self, event: Event) {
        if self.ids.contains(&event.id) {
            let warning = DetectionWarning::new(&event, WarningKind::DuplicateId, &event.id);
            self.reject(warning);
            return;
        }

        self.ids.insert(event.id.clone());
        self.events.push(event);
    }

    fn reject(&mut self, warning: DetectionWarning) {
        tracing::warn!(
            event = %warning.event_id,
            reason = %warning.value,
            "rejected snapshot record: {}",
            warning.kind
        );
        self.rejected.push(warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict::{ConflictDetector, ConflictType};

    const TWO_EVENTS: &str = r#"[
        {"id":"1","title":"Q2 Earnings Call","company":"Apple Inc.","type":"earnings",
         "date":"2025-07-15","startTime":"10:00 AM","endTime":"11:00 AM","location":"Virtual"},
        {"id":"2","title":"Analyst Meeting","company":"Microsoft Corp.","type":"meeting",
         "date":"2025-07-15","startTime":"10:30 AM","endTime":"11:30 AM","location":"Seattle, WA"}
    ]"#;

    #[test]
    fn test_from_json() {
        let snapshot = EventSnapshot::from_json(TWO_EVENTS).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("2").unwrap().company, "Microsoft Corp.");
        assert!(snapshot.get("3").is_none());
        assert!(snapshot.rejected().is_empty());
    }

    #[test]
    fn test_bad_record_does_not_hide_the_rest() {
        let json = r#"[
            {"id":"1","title":"Q2 Earnings Call","company":"Apple Inc.","type":"earnings",
             "date":"2025-07-15","startTime":"10:00 AM","endTime":"11:00 AM","location":"Virtual"},
            {"id":"2","title":"Analyst Meeting","company":"Microsoft Corp.","type":"meeting",
             "date":"2025-07-15","startTime":"10:30 AM","endTime":"11:30 AM","location":"Seattle, WA"},
            {"id":"3","title":"Investor Webinar","type":"webinar",
             "date":"2025-07-15","startTime":"10:00 AM","endTime":"11:00 AM","location":"Virtual"}
        ]"#;

        let snapshot = EventSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.len(), 2);

        let rejected = snapshot.rejected();
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].event_id, "3");
        assert_eq!(rejected[0].event_title, "Investor Webinar");
        assert_eq!(rejected[0].kind, WarningKind::InvalidRecord);
        assert!(rejected[0].value.contains("company"));

        let report = ConflictDetector::default().detect(snapshot.events(), None);
        assert_eq!(report.total_conflicts, 1);
        assert_eq!(report.conflicts[0].event_id, "1");
        assert_eq!(report.conflicts[0].conflicting_event_id, "2");
        assert_eq!(report.conflicts[0].conflict_type, ConflictType::Overlap);
    }

    #[test]
    fn test_record_without_id_is_named_by_position() {
        let json = r#"[{"title":"No id","company":"Acme","type":"meeting"}, 42]"#;

        let snapshot = EventSnapshot::from_json(json).unwrap();
        assert!(snapshot.is_empty());

        let ids: Vec<_> = snapshot.rejected().iter().map(|w| w.event_id.as_str()).collect();
        assert_eq!(ids, vec!["#1", "#2"]);
        assert_eq!(snapshot.rejected()[0].event_title, "No id");
    }

    #[test]
    fn test_unknown_event_type_is_loaded() {
        let json = r#"[{"id":"1","title":"Party","company":"Acme","type":"party",
            "date":"2025-07-15","startTime":"10:00","endTime":"11:00","location":"HQ"}]"#;

        let snapshot = EventSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.rejected().is_empty());
    }

    #[test]
    fn test_duplicate_id_keeps_first_record() {
        let json = TWO_EVENTS.replace("\"id\":\"2\"", "\"id\":\"1\"");

        let snapshot = EventSnapshot::from_json(&json).unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.get("1").unwrap().title, "Q2 Earnings Call");

        let rejected = &snapshot.rejected()[0];
        assert_eq!(rejected.kind, WarningKind::DuplicateId);
        assert_eq!(rejected.event_title, "Analyst Meeting");
        assert_eq!(rejected.to_string(), "Analyst Meeting [1]: duplicate id '1'");
    }

    #[test]
    fn test_non_array_document_is_an_error() {
        assert!(matches!(
            EventSnapshot::from_json(r#"{"id":"1"}"#),
            Err(AgoraError::Json(_))
        ));
        assert!(EventSnapshot::from_json("[{").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, TWO_EVENTS).unwrap();

        let snapshot = EventSnapshot::load(&path).unwrap();
        assert_eq!(snapshot.events()[0].title, "Q2 Earnings Call");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = EventSnapshot::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, AgoraError::Snapshot(_)));
    }
}

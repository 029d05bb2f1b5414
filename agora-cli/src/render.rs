//! TUI rendering traits for agora types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to agora-core types using owo_colors.

use agora_core::conflict::{
    Conflict, ConflictReport, ConflictSummary, ConflictType, DetectionWarning, Severity,
};
use agora_core::event::Event;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Severity {
    fn render(&self) -> String {
        let label = format!("{:<6}", self.to_string());
        match self {
            Severity::High => label.red().bold().to_string(),
            Severity::Medium => label.yellow().to_string(),
            Severity::Low => label.dimmed().to_string(),
        }
    }
}

impl Render for ConflictType {
    fn render(&self) -> String {
        let symbol = match self {
            ConflictType::Overlap => "⨯",
            ConflictType::Adjacent => "↔",
            ConflictType::TravelTime => "✈",
        };
        format!("{} {:<11}", symbol, self.to_string())
    }
}

impl Render for Conflict {
    fn render(&self) -> String {
        format!(
            "{} {} {} ↔ {} {}",
            self.severity.render(),
            self.conflict_type.render(),
            self.event_title,
            self.conflicting_event_title,
            format!("({})", self.description).dimmed()
        )
    }
}

impl Render for DetectionWarning {
    fn render(&self) -> String {
        format!("{} skipped {}", "!".yellow(), self.to_string().yellow())
    }
}

impl Render for Event {
    fn render(&self) -> String {
        format!("📅 {} {}", self.to_string().bold(), format!("[{}]", self.kind).dimmed())
    }
}

impl Render for ConflictSummary {
    fn render(&self) -> String {
        if !self.has_conflicts {
            let mut line = "   No conflicts".green().to_string();
            if self.skipped > 0 {
                line.push_str(&skipped_note(self.skipped));
            }
            return line;
        }

        let mut lines = vec![
            format!(
                "   {} {}",
                self.total.bold(),
                pluralize("conflict", self.total)
            ),
            format!("   {} {}", Severity::High.render(), self.high),
            format!("   {} {}", Severity::Medium.render(), self.medium),
            format!("   {} {}", Severity::Low.render(), self.low),
            String::new(),
            format!("   {} {}", ConflictType::Overlap.render(), self.by_type.overlap),
            format!("   {} {}", ConflictType::Adjacent.render(), self.by_type.adjacent),
            format!(
                "   {} {}",
                ConflictType::TravelTime.render(),
                self.by_type.travel_time
            ),
        ];
        if self.skipped > 0 {
            lines.push(skipped_note(self.skipped));
        }

        lines.join("\n")
    }
}

/// Days with more conflicts than this collapse into counts unless showing all
const COMPACT_THRESHOLD: usize = 5;

/// Rendering for a whole report, grouped by date
pub trait ReportRender {
    fn render(&self, show_all: bool) -> String;
}

impl ReportRender for ConflictReport {
    fn render(&self, show_all: bool) -> String {
        let mut lines = Vec::new();

        if self.has_conflicts {
            let mut current: Option<NaiveDate> = None;
            let mut day: Vec<&Conflict> = Vec::new();

            for conflict in &self.conflicts {
                if current.is_some_and(|d| d != conflict.date) {
                    render_day(&day, show_all, &mut lines);
                    lines.push(String::new());
                    day.clear();
                }
                if current != Some(conflict.date) {
                    lines.push(conflict.date.format("%a %b %-d, %Y").to_string().bold().to_string());
                    current = Some(conflict.date);
                }
                day.push(conflict);
            }
            render_day(&day, show_all, &mut lines);
        } else {
            lines.push("   No conflicts".green().to_string());
        }

        if !self.warnings.is_empty() {
            lines.push(String::new());
            lines.extend(self.warnings.iter().map(|w| format!("   {}", w.render())));
        }

        lines.join("\n")
    }
}

fn render_day(conflicts: &[&Conflict], show_all: bool, lines: &mut Vec<String>) {
    if show_all || conflicts.len() <= COMPACT_THRESHOLD {
        lines.extend(conflicts.iter().map(|c| format!("   {}", c.render())));
        return;
    }

    // Compact view: counts by severity
    for severity in [Severity::High, Severity::Medium, Severity::Low] {
        let count = conflicts.iter().filter(|c| c.severity == severity).count();
        if count > 0 {
            lines.push(format!(
                "   {} ({} {})",
                severity.render(),
                count,
                pluralize("conflict", count)
            ));
        }
    }
}

fn skipped_note(count: usize) -> String {
    format!(
        "\n   {}",
        format!("({} {} skipped, see `agora conflicts`)", count, pluralize("event", count)).dimmed()
    )
}

/// Simple pluralization helper
fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 {
        word
    } else {
        match word {
            "event" => "events",
            "conflict" => "conflicts",
            _ => word,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_core::{Event, EventKind, detect_conflicts};

    fn busy_day() -> ConflictReport {
        // Seven overlapping events in one room: 21 overlap conflicts on one date
        let events: Vec<Event> = (0..7)
            .map(|i| {
                Event::new(i.to_string(), format!("Meeting {}", i), "Acme", EventKind::Meeting)
                    .scheduled("2025-07-15", format!("09:{:02}", i * 5), "11:00")
                    .at("Room 1")
            })
            .collect();
        detect_conflicts(&events, None)
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("conflict", 1), "conflict");
        assert_eq!(pluralize("conflict", 2), "conflicts");
        assert_eq!(pluralize("event", 0), "events");
    }

    #[test]
    fn test_busy_day_is_compacted() {
        let report = busy_day();
        assert_eq!(report.total_conflicts, 21);

        let compact = report.render(false);
        let full = report.render(true);

        // date header + one line per severity present
        assert!(compact.lines().count() <= 4);
        assert_eq!(full.lines().count(), 1 + 21);
    }

    #[test]
    fn test_empty_report() {
        let report = ConflictReport::new(Vec::new(), Vec::new());
        assert!(report.render(false).contains("No conflicts"));
    }
}

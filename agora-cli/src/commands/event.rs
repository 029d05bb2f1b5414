use agora_core::conflict::ConflictDetector;
use agora_core::snapshot::EventSnapshot;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::{Render, ReportRender};

pub fn run(detector: &ConflictDetector, snapshot: &EventSnapshot, id: &str, json: bool) -> Result<()> {
    let Some(event) = snapshot.get(id) else {
        anyhow::bail!("Event '{}' not found in snapshot", id);
    };

    let report = detector
        .event_conflicts(event, snapshot.events())
        .with_rejected(snapshot.rejected());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", event.render());
    println!(
        "   {} {} - {} {}",
        event.date,
        event.start_time,
        event.end_time,
        format!("@ {}", event.location).dimmed()
    );
    println!();
    println!("{}", report.render(true));

    Ok(())
}

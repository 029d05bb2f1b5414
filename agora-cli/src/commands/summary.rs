use agora_core::conflict::{ConflictDetector, ConflictSummary};
use agora_core::date_range::DateRange;
use agora_core::snapshot::EventSnapshot;
use anyhow::Result;

use crate::render::Render;

pub fn run(
    detector: &ConflictDetector,
    snapshot: &EventSnapshot,
    range: DateRange,
    user: Option<&str>,
    json: bool,
) -> Result<()> {
    let events = range.filter(snapshot.events());
    let report = detector.detect(events, user).with_rejected(snapshot.rejected());
    let summary = ConflictSummary::from(&report);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary.render());
    }

    Ok(())
}

use agora_core::conflict::ConflictDetector;
use agora_core::date_range::DateRange;
use agora_core::snapshot::EventSnapshot;
use anyhow::Result;

use crate::render::ReportRender;

pub fn run(
    detector: &ConflictDetector,
    snapshot: &EventSnapshot,
    range: DateRange,
    user: Option<&str>,
    show_all: bool,
    json: bool,
) -> Result<()> {
    let events = range.filter(snapshot.events());
    let report = detector.detect(events, user).with_rejected(snapshot.rejected());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render(show_all));
    }

    Ok(())
}

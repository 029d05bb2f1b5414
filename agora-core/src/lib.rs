//! Core types for agora.
//!
//! This crate provides:
//! - `Event` and related types for investor-relations events
//! - `conflict` module for detecting overlapping, adjacent and
//!   travel-constrained events
//! - `config` and `snapshot` modules for loading thresholds and event sets

pub mod config;
pub mod conflict;
pub mod date_range;
pub mod error;
pub mod event;
pub mod snapshot;
pub mod time;

pub use conflict::{
    Conflict, ConflictDetector, ConflictReport, ConflictSummary, ConflictType, Severity,
    conflict_summary, detect_conflicts, event_conflicts,
};
pub use error::{AgoraError, AgoraResult};
pub use event::{Event, EventKind, RsvpResponse};

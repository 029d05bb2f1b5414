//! Configuration types for agora.

mod agora_config;
mod thresholds;

pub use agora_config::AgoraConfig;
pub use thresholds::ConflictThresholds;

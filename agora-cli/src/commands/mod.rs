pub mod config;
pub mod conflicts;
pub mod event;
pub mod summary;

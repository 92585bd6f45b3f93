// LoadSleuth - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library plus regex/serde/csv/serde_json.
// Must NOT depend on: platform, app, or open files directly.

pub mod export;
pub mod extractor;
pub mod lines;
pub mod model;
pub mod report;

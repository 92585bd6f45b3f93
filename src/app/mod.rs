// LoadSleuth - app/mod.rs
//
// Application layer: orchestration of inputs, extraction, and output.
// Dependencies: core and platform layers.

pub mod run;

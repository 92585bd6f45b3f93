// LoadSleuth - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: standard library, directories crate.
// Must NOT depend on: app. Uses core only for shared vocabulary types.

pub mod config;
pub mod fs;

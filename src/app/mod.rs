// Corpus Cleaner - app/mod.rs
//
// Application layer: orchestration, state management, filesystem-backed
// operations.
// Dependencies: core, platform, util.

pub mod actions;
pub mod commit;
pub mod counter;
pub mod navigator;
pub mod state;

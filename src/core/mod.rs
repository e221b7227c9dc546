// Corpus Cleaner - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, regex, chrono, unicode-normalization.
// Must NOT depend on: ui, platform, app, or perform I/O directly.

pub mod logbook;
pub mod model;
pub mod natural_sort;
pub mod occurrence;
pub mod pattern;
pub mod preview;
pub mod transform;

// Corpus Cleaner - ui/panels/mod.rs

pub mod commit;
pub mod dialogs;
pub mod navigator;
pub mod occurrences;
pub mod preview;

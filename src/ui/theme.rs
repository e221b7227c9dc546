// Corpus Cleaner - ui/theme.rs
//
// Highlight colours and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Background behind find matches in the "before" preview.
pub const MATCH_BG: Color32 = Color32::from_rgb(185, 28, 28); // Red 800

/// Background behind inserted replacements in the "after" preview.
pub const REPLACEMENT_BG: Color32 = Color32::from_rgb(21, 128, 61); // Green 700

/// Text colour on top of either highlight.
pub const HIGHLIGHT_TEXT: Color32 = Color32::WHITE;

/// Pattern error message colour.
pub const ERROR_TEXT: Color32 = Color32::from_rgb(248, 113, 113); // Red 400

/// Secondary text (counts, paths).
pub const MUTED_TEXT: Color32 = Color32::from_rgb(156, 163, 175); // Gray 400

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 260.0;
pub const RIGHT_PANEL_WIDTH: f32 = 300.0;
pub const PREVIEW_HEIGHT: f32 = 220.0;
pub const LIST_HEIGHT: f32 = 220.0;
pub const DIALOG_WIDTH: f32 = 420.0;

//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(244, 238, 224);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 62, 66);

// Marks
pub const X_COLOR: Color32 = Color32::from_rgb(214, 69, 65);
pub const O_COLOR: Color32 = Color32::from_rgb(52, 104, 192);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 180, 50);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 90);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 40)
}

// Panel colors - dark theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_ERROR: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const GRID_LINE_WIDTH: f32 = 4.0;
pub const MARK_RATIO: f32 = 0.32;
pub const MARK_WIDTH: f32 = 8.0;
pub const WIN_LINE_WIDTH: f32 = 10.0;

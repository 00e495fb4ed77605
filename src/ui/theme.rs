//! Theme constants for the Color Wars GUI

use egui::Color32;

use crate::Color;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(36, 38, 44);
pub const CELL_BG: Color32 = Color32::from_rgb(58, 61, 70);
pub const CELL_BORDER: Color32 = Color32::from_rgb(80, 84, 95);

// Piece colors
pub const RED_PIECE: Color32 = Color32::from_rgb(226, 76, 76);
pub const RED_PIECE_DARK: Color32 = Color32::from_rgb(150, 40, 45);
pub const BLUE_PIECE: Color32 = Color32::from_rgb(70, 130, 230);
pub const BLUE_PIECE_DARK: Color32 = Color32::from_rgb(35, 75, 150);
pub const DOT: Color32 = Color32::from_rgb(250, 250, 252);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 210, 80);
pub const READY_RING: Color32 = Color32::from_rgb(255, 170, 60);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 40)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 60)
}

/// Tint for cells the side to move may play
pub fn playable_tint(color: Color) -> Color32 {
    match color {
        Color::Red => Color32::from_rgba_unmultiplied(226, 76, 76, 30),
        Color::Blue => Color32::from_rgba_unmultiplied(70, 130, 230, 30),
    }
}

/// Main and shaded fill for a color
pub fn piece_colors(color: Color) -> (Color32, Color32) {
    match color {
        Color::Red => (RED_PIECE, RED_PIECE_DARK),
        Color::Blue => (BLUE_PIECE, BLUE_PIECE_DARK),
    }
}

// Panel colors - dark modern theme
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Thinking timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const CELL_GAP: f32 = 6.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.40;
pub const DOT_RADIUS_RATIO: f32 = 0.07;
pub const LAST_MOVE_MARKER_WIDTH: f32 = 3.0;

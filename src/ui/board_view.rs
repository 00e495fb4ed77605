//! Board rendering for the Color Wars GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use crate::board::Cell;
use crate::rules::is_legal_move;
use crate::{Board, Color, Pos, BOARD_SIZE};

use super::theme::*;

/// Dot offsets inside a piece, as fractions of the piece radius
const DOT_LAYOUTS: [&[(f32, f32)]; 4] = [
    &[(0.0, 0.0)],
    &[(-0.35, 0.0), (0.35, 0.0)],
    &[(0.0, -0.38), (-0.35, 0.25), (0.35, 0.25)],
    &[(-0.35, -0.35), (0.35, -0.35), (-0.35, 0.35), (0.35, 0.35)],
];

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 80.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any.
    ///
    /// Clicks are reported only when `interactive` and the cell is legal
    /// for `current_turn`.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Color,
        last_move: Option<Pos>,
        interactive: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(200.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);

        for (pos, cell) in board.iter() {
            let playable = interactive && is_legal_move(board, pos, current_turn);
            self.draw_cell(&painter, pos, cell, playable.then_some(current_turn));
        }

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if !interactive {
            return None;
        }

        // Handle hover preview and click
        let pointer_pos = response.hover_pos()?;
        let board_pos = self.screen_to_board(pointer_pos)?;
        let is_valid = is_legal_move(board, board_pos, current_turn);

        let hover_color = if is_valid { hover_valid() } else { hover_invalid() };
        painter.rect_filled(self.cell_rect(board_pos), CornerRadius::same(6), hover_color);

        (response.clicked() && is_valid).then_some(board_pos)
    }

    /// Draw one cell: background, optional playable tint, piece and dots
    fn draw_cell(&self, painter: &Painter, pos: Pos, cell: Cell, playable: Option<Color>) {
        let rect = self.cell_rect(pos);
        painter.rect(
            rect,
            CornerRadius::same(6),
            CELL_BG,
            Stroke::new(1.0, CELL_BORDER),
            StrokeKind::Inside,
        );
        if let Some(color) = playable {
            painter.rect_filled(rect, CornerRadius::same(6), playable_tint(color));
        }

        let Some(color) = cell.color() else {
            return;
        };
        let center = rect.center();
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        let (main, dark) = piece_colors(color);

        // Shadow, body, rim
        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );
        painter.circle_filled(center, radius, main);
        painter.circle_stroke(center, radius, Stroke::new(2.0, dark));

        if cell.is_ready() {
            painter.circle_stroke(center, radius + 4.0, Stroke::new(2.0, READY_RING));
        }

        self.draw_dots(painter, center, radius, cell.dots());
    }

    fn draw_dots(&self, painter: &Painter, center: Pos2, radius: f32, dots: u8) {
        let Some(layout) = DOT_LAYOUTS.get(usize::from(dots).wrapping_sub(1)) else {
            return;
        };
        let dot_radius = self.cell_size * DOT_RADIUS_RATIO;
        for &(dx, dy) in layout.iter() {
            painter.circle_filled(center + Vec2::new(dx, dy) * radius, dot_radius, DOT);
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.rect_stroke(
            self.cell_rect(pos).shrink(2.0),
            CornerRadius::same(6),
            Stroke::new(LAST_MOVE_MARKER_WIDTH, LAST_MOVE_MARKER),
            StrokeKind::Inside,
        );
    }

    /// Screen rectangle of a cell, inset by the cell gap
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + f32::from(pos.col) * self.cell_size,
                BOARD_MARGIN + f32::from(pos.row) * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size)).shrink(CELL_GAP / 2.0)
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        Pos::is_valid(row, col).then(|| Pos::new(row as u8, col as u8))
    }
}

//! Terminal detection for Color Wars
//!
//! A game ends once both colors have made their first placement and one of
//! them has no pieces left. The `piece_total > 1` guard keeps the opening
//! position (a single placed piece) from reading as a win.

use crate::board::{Board, Color};

/// Check whether the position is decided
#[inline]
pub fn is_terminal(board: &Board) -> bool {
    if !board.both_moved() {
        return false;
    }
    let red = board.piece_count(Color::Red);
    let blue = board.piece_count(Color::Blue);
    (red == 0 || blue == 0) && red + blue > 1
}

/// Winner of a decided position, `None` while the game is still running
pub fn winner(board: &Board) -> Option<Color> {
    if !is_terminal(board) {
        return None;
    }
    if board.piece_count(Color::Blue) == 0 {
        Some(Color::Red)
    } else {
        Some(Color::Blue)
    }
}

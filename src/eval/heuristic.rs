//! Heuristic evaluation function for Color Wars positions
//!
//! This module provides the static evaluation used at search leaves.
//! It scores positions based on:
//! - Elimination detection
//! - Material (pieces, dots, explosion-ready pieces)
//! - Chain potential and opponent chain threats
//! - Positional terms (center proximity, surrounded pieces)

use crate::board::{Board, Cell, Color, Pos};
use crate::rules::winner;

use super::weights::{Weights, MAX_CENTER_DIST};

/// Evaluate the board from the perspective of the given color.
///
/// Returns a score where:
/// - Positive values indicate advantage for `color`
/// - `Weights::WIN` means the opponent has been eliminated
/// - `-Weights::WIN` means `color` has been eliminated
///
/// Non-terminal scores are antisymmetric:
/// `evaluate(b, c) == -evaluate(b, c.opponent())`.
#[must_use]
pub fn evaluate(board: &Board, color: Color) -> i32 {
    if let Some(won) = winner(board) {
        return if won == color { Weights::WIN } else { -Weights::WIN };
    }

    side_score(board, color) - side_score(board, color.opponent())
}

/// Feature breakdown for one color. Useful for debugging and the UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideFeatures {
    pub pieces: i32,
    pub dots: i32,
    pub ready: i32,
    pub chain_links: i32,
    pub attack_surface: i32,
    /// Opponent ready pieces touching our pieces, counted per contact
    pub threats: i32,
    pub center: i32,
    pub surrounded: i32,
}

impl SideFeatures {
    /// Scan the board for `color`'s features
    pub fn collect(board: &Board, color: Color) -> Self {
        let opponent = color.opponent();
        let mut f = SideFeatures::default();

        for (pos, cell) in board.iter() {
            if !cell.is_owned_by(color) {
                continue;
            }

            f.pieces += 1;
            f.dots += i32::from(cell.dots());
            if cell.is_ready() {
                f.ready += 1;
            }
            f.center += MAX_CENTER_DIST - i32::from(pos.manhattan(Pos::center()));

            let mut in_bounds = 0;
            let mut hostile = 0;
            for n in pos.neighbors() {
                let neighbor = board.get(n);
                in_bounds += 1;

                if neighbor.is_owned_by(opponent) {
                    hostile += 1;
                    if neighbor.is_ready() {
                        f.threats += 1;
                    }
                }

                if is_loaded(cell) {
                    if neighbor.is_owned_by(color) && is_loaded(neighbor) {
                        f.chain_links += 1;
                    } else if neighbor.is_owned_by(opponent) {
                        f.attack_surface += 1;
                    }
                }
            }

            if hostile * 2 > in_bounds {
                f.surrounded += 1;
            }
        }

        f
    }

    /// Weighted sum of the features
    pub fn score(&self) -> i32 {
        self.pieces * Weights::PIECE
            + self.dots * Weights::DOT
            + self.ready * Weights::READY
            + self.chain_links * Weights::CHAIN_LINK
            + self.attack_surface * Weights::ATTACK_SURFACE
            - self.threats * Weights::THREAT
            + self.center * Weights::CENTER
            - self.surrounded * Weights::SURROUNDED
    }
}

/// Piece with at least two dots
#[inline]
fn is_loaded(cell: Cell) -> bool {
    cell.dots() >= 2
}

#[inline]
fn side_score(board: &Board, color: Color) -> i32 {
    SideFeatures::collect(board, color).score()
}

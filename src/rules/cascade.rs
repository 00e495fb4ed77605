//! Move application and explosion cascades
//!
//! Rules:
//! - First move of a color: place 3 dots on any empty cell
//! - Later moves: add one dot to a cell you own
//! - A cell reaching 4 dots explodes: it empties and every orthogonal
//!   neighbor gains a dot and switches to the exploding color
//! - Neighbors that reach 4 explode in the next layer, until quiescent
//!
//! Everything here is synchronous and deterministic; the search replays it
//! thousands of times per decision.

use crate::board::{Board, Cell, Color, Pos, CRITICAL_DOTS, FIRST_MOVE_DOTS, TOTAL_CELLS};
use crate::error::{EngineError, EngineResult};

/// Summary of what a move did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Move was a first placement
    pub placed: bool,
    /// Total cells that exploded
    pub explosions: u32,
    /// Number of cascade layers resolved
    pub layers: u32,
}

impl MoveOutcome {
    #[inline]
    pub fn exploded(&self) -> bool {
        self.explosions > 0
    }
}

/// Check whether `color` may play at `pos`.
///
/// Before its first placement a color may only target empty cells;
/// afterwards only cells it owns.
#[inline]
pub fn is_legal_move(board: &Board, pos: Pos, color: Color) -> bool {
    let cell = board.get(pos);
    if board.has_moved(color) {
        cell.is_owned_by(color)
    } else {
        cell.is_empty()
    }
}

/// Apply a move in place.
///
/// The move must satisfy [`is_legal_move`]; candidates drawn from the move
/// generator always do. The turn passes to the opponent once the cascade
/// has fully resolved.
pub fn apply_move(board: &mut Board, pos: Pos, color: Color) -> MoveOutcome {
    debug_assert!(
        is_legal_move(board, pos, color),
        "illegal move {pos} for {color:?} on\n{board}"
    );

    let cell = board.get(pos);
    let mut outcome = MoveOutcome::default();

    if cell.is_empty() {
        board.set(pos, Cell::owned(color, FIRST_MOVE_DOTS));
        board.set_moved(color);
        outcome.placed = true;
    } else {
        let dots = cell.dots() + 1;
        board.set(pos, Cell::owned(color, dots));
        if dots >= CRITICAL_DOTS {
            resolve_cascade(board, pos, color, &mut outcome);
        }
    }

    board.set_side_to_move(color.opponent());
    outcome
}

/// Checked variant of [`apply_move`] for callers holding untrusted input.
pub fn try_apply_move(board: &mut Board, pos: Pos, color: Color) -> EngineResult<MoveOutcome> {
    if !is_legal_move(board, pos, color) {
        return Err(EngineError::IllegalMove { pos, color });
    }
    Ok(apply_move(board, pos, color))
}

/// Copy-and-apply: returns the successor position, leaving `board` untouched.
#[inline]
pub fn applied(board: &Board, pos: Pos, color: Color) -> Board {
    let mut next = *board;
    apply_move(&mut next, pos, color);
    next
}

/// Breadth-first, layer-synchronous explosion propagation starting at `origin`.
///
/// A cell already waiting to explode absorbs further hits and is queued only
/// once. Dots leave the system only through the board edge and absorption,
/// so the process always terminates.
fn resolve_cascade(board: &mut Board, origin: Pos, color: Color, outcome: &mut MoveOutcome) {
    let mut layer: Vec<Pos> = Vec::with_capacity(TOTAL_CELLS);
    let mut next: Vec<Pos> = Vec::with_capacity(TOTAL_CELLS);
    layer.push(origin);

    while !layer.is_empty() {
        outcome.layers += 1;

        for &pos in &layer {
            board.set(pos, Cell::EMPTY);
            outcome.explosions += 1;

            for neighbor in pos.neighbors() {
                let cell = board.get(neighbor);
                if cell.is_critical() {
                    // Already queued; the extra dot is absorbed
                    board.set(neighbor, Cell::owned(color, CRITICAL_DOTS));
                    continue;
                }

                let dots = cell.dots() + 1;
                board.set(neighbor, Cell::owned(color, dots));
                if dots >= CRITICAL_DOTS {
                    next.push(neighbor);
                }
            }
        }

        layer.clear();
        std::mem::swap(&mut layer, &mut next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::MAX_DOTS;

    fn board(layout: &str) -> Board {
        layout.parse().expect("valid layout")
    }

    #[test]
    fn test_first_move_places_three() {
        let mut b = Board::new();
        let outcome = apply_move(&mut b, Pos::center(), Color::Red);

        assert!(outcome.placed);
        assert!(!outcome.exploded());
        assert_eq!(b.get(Pos::center()), Cell::owned(Color::Red, 3));
        assert!(b.red_moved);
        assert!(!b.blue_moved);
        assert_eq!(b.side_to_move(), Color::Blue);
    }

    #[test]
    fn test_growth_adds_one_dot() {
        let mut b = board(
            "r1 .  .  .  .
             .  .  .  .  .
             .  .  .  .  .
             .  .  .  .  .
             .  .  .  .  b2",
        );
        apply_move(&mut b, Pos::new(0, 0), Color::Red);
        assert_eq!(b.get(Pos::new(0, 0)), Cell::owned(Color::Red, 2));
        assert_eq!(b.side_to_move(), Color::Blue);

        apply_move(&mut b, Pos::new(4, 4), Color::Blue);
        assert_eq!(b.get(Pos::new(4, 4)), Cell::owned(Color::Blue, 3));
        assert_eq!(b.side_to_move(), Color::Red);
    }

    #[test]
    fn test_center_explosion() {
        let mut b = board(
            ".  .  .  .  .
             .  .  .  .  .
             .  .  r3 .  .
             .  .  .  .  .
             .  .  .  .  b3",
        );
        let outcome = apply_move(&mut b, Pos::center(), Color::Red);

        assert_eq!(outcome.explosions, 1);
        assert_eq!(outcome.layers, 1);
        assert!(b.is_empty(Pos::center()));
        for n in Pos::center().neighbors() {
            assert_eq!(b.get(n), Cell::owned(Color::Red, 1));
        }
        assert_eq!(b.piece_count(Color::Red), 4);
        assert_eq!(b.get(Pos::new(4, 4)), Cell::owned(Color::Blue, 3));
    }

    #[test]
    fn test_explosion_converts_opponent() {
        let mut b = board(
            ".  .  .  .  .
             .  .  b2 .  .
             .  b1 r3 .  .
             .  .  .  .  .
             .  .  .  .  .",
        );
        apply_move(&mut b, Pos::center(), Color::Red);

        assert_eq!(b.get(Pos::new(1, 2)), Cell::owned(Color::Red, 3));
        assert_eq!(b.get(Pos::new(2, 1)), Cell::owned(Color::Red, 2));
        assert_eq!(b.piece_count(Color::Blue), 0);
    }

    #[test]
    fn test_chain_reaction_layers() {
        // Corner explosion hits a ready neighbor, which explodes next layer
        let mut b = board(
            "r3 r3 .  .  .
             .  .  .  .  .
             .  .  .  .  .
             .  .  .  .  .
             .  .  .  .  b1",
        );
        let outcome = apply_move(&mut b, Pos::new(0, 0), Color::Red);

        assert_eq!(outcome.layers, 2);
        assert_eq!(outcome.explosions, 2);
        // (0,1) exploded: (0,0) refilled with 1, (0,2) and (1,1) gained 1
        assert_eq!(b.get(Pos::new(0, 0)), Cell::owned(Color::Red, 1));
        assert!(b.is_empty(Pos::new(0, 1)));
        assert_eq!(b.get(Pos::new(0, 2)), Cell::owned(Color::Red, 1));
        assert_eq!(b.get(Pos::new(1, 1)), Cell::owned(Color::Red, 1));
        assert_eq!(b.get(Pos::new(1, 0)), Cell::owned(Color::Red, 1));
    }

    #[test]
    fn test_opponent_flip_can_chain() {
        // Captured blue 3 becomes red 4 and explodes for red
        let mut b = board(
            ".  .  .  .  .
             .  .  .  .  .
             .  .  r3 b3 .
             .  .  .  .  .
             .  .  .  .  .",
        );
        let outcome = apply_move(&mut b, Pos::center(), Color::Red);

        assert_eq!(outcome.explosions, 2);
        assert_eq!(b.piece_count(Color::Blue), 0);
        assert_eq!(b.get(Pos::new(2, 4)), Cell::owned(Color::Red, 1));
        // Center gets refilled by the second explosion
        assert_eq!(b.get(Pos::center()), Cell::owned(Color::Red, 1));
    }

    #[test]
    fn test_pending_cell_absorbs_second_hit() {
        // (1,2) and (2,1) explode in the same layer and both hit (1,1).
        // The first hit queues it; the second is absorbed, so it explodes once.
        let mut b = board(
            ".  .  .  .  .
             .  r3 r3 .  .
             .  r3 r3 .  .
             .  .  .  .  .
             .  .  .  b1 .",
        );
        let outcome = apply_move(&mut b, Pos::center(), Color::Red);

        assert_eq!(outcome.explosions, 4);
        assert_eq!(outcome.layers, 3);
        assert!(b.is_empty(Pos::new(1, 1)));
        // Refilled by both second-layer explosions
        assert_eq!(b.get(Pos::center()), Cell::owned(Color::Red, 2));
        // Refilled once by the (1,1) explosion
        assert_eq!(b.get(Pos::new(1, 2)), Cell::owned(Color::Red, 1));
        assert_eq!(b.get(Pos::new(2, 1)), Cell::owned(Color::Red, 1));
        assert_eq!(b.get(Pos::new(0, 1)), Cell::owned(Color::Red, 1));
        assert_eq!(b.get(Pos::new(1, 0)), Cell::owned(Color::Red, 1));
        assert_eq!(b.piece_count(Color::Red), 11);
        assert_eq!(b.get(Pos::new(4, 3)), Cell::owned(Color::Blue, 1));
    }

    #[test]
    fn test_full_board_cascade_settles() {
        let mut b: Board = "r3 ".repeat(25).parse().unwrap();
        apply_move(&mut b, Pos::center(), Color::Red);

        for (_, cell) in b.iter() {
            assert!(cell.dots() <= MAX_DOTS);
        }
    }

    #[test]
    fn test_try_apply_rejects_illegal() {
        let mut b = board(
            "r1 .  .  .  .
             .  .  .  .  .
             .  .  .  .  .
             .  .  .  .  .
             .  .  .  .  b1",
        );
        let before = b;
        // Both colors have moved: empty cells and enemy cells are illegal
        assert_eq!(
            try_apply_move(&mut b, Pos::center(), Color::Red),
            Err(EngineError::IllegalMove { pos: Pos::center(), color: Color::Red })
        );
        assert!(try_apply_move(&mut b, Pos::new(4, 4), Color::Red).is_err());
        assert_eq!(b, before);

        assert!(try_apply_move(&mut b, Pos::new(0, 0), Color::Red).is_ok());
    }

    #[test]
    fn test_first_move_cannot_grow() {
        let b = Board::new();
        let b = applied(&b, Pos::center(), Color::Red);
        assert!(!is_legal_move(&b, Pos::center(), Color::Blue));
        assert!(is_legal_move(&b, Pos::new(0, 0), Color::Blue));
        assert!(is_legal_move(&b, Pos::center(), Color::Red));
        assert!(!is_legal_move(&b, Pos::new(0, 0), Color::Red));
    }

    #[test]
    fn test_applied_leaves_source_untouched() {
        let b = Board::new();
        let next = applied(&b, Pos::center(), Color::Red);
        assert!(b.is_board_empty());
        assert_eq!(next.piece_total(), 1);
    }
}

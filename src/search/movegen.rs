//! Candidate move generation
//!
//! Produces the ordered candidate list for one color. Ordering matters for
//! pruning: explosion-ready cells come first, then heavier cells.

use crate::board::{Board, Color, Pos};
use crate::config::MovePolicy;

/// Opening placements this close to the center are tried first
const NEAR_CENTER_RADIUS: u8 = 2;

/// Generate legal moves for `color` in search order.
///
/// Empty only when `color` has no legal action (eliminated, or a first
/// placement with no empty cell left).
pub fn legal_moves(board: &Board, color: Color, policy: MovePolicy) -> Vec<Pos> {
    if !board.has_moved(color) {
        return opening_moves(board);
    }

    let mut moves: Vec<Pos> = board
        .iter()
        .filter(|(_, cell)| cell.is_owned_by(color))
        .map(|(pos, _)| pos)
        .collect();

    // Stable: row-major within each dot count, ready cells first
    moves.sort_by_key(|&pos| std::cmp::Reverse(board.get(pos).dots()));

    if policy == MovePolicy::ExplosiveOnly {
        let ready = moves.iter().take_while(|&&pos| board.get(pos).is_ready()).count();
        if ready > 0 {
            moves.truncate(ready);
        }
    }

    moves
}

/// First-placement candidates: every empty cell, near-center cells first
fn opening_moves(board: &Board) -> Vec<Pos> {
    let center = Pos::center();
    let (mut near, far): (Vec<Pos>, Vec<Pos>) = board
        .iter()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(pos, _)| pos)
        .partition(|pos| pos.manhattan(center) <= NEAR_CENTER_RADIUS);
    near.extend(far);
    near
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TOTAL_CELLS;
    use crate::rules::{apply_move, is_legal_move};

    #[test]
    fn test_opening_covers_board() {
        let board = Board::new();
        let moves = legal_moves(&board, Color::Red, MovePolicy::Complete);
        assert_eq!(moves.len(), TOTAL_CELLS);

        // 13 cells within distance 2 of the center come first
        assert!(moves[..13].iter().all(|p| p.manhattan(Pos::center()) <= 2));
        assert!(moves[13..].iter().all(|p| p.manhattan(Pos::center()) > 2));
        // Row-major within the near group
        assert_eq!(moves[0], Pos::new(0, 2));
        assert_eq!(moves[13], Pos::new(0, 0));
    }

    #[test]
    fn test_second_color_opening_skips_occupied() {
        let mut board = Board::new();
        apply_move(&mut board, Pos::center(), Color::Red);
        let moves = legal_moves(&board, Color::Blue, MovePolicy::Complete);
        assert_eq!(moves.len(), TOTAL_CELLS - 1);
        assert!(!moves.contains(&Pos::center()));
    }

    #[test]
    fn test_growth_ordering() {
        let board: Board = "
            r1 .  .  .  r3
            .  r2 .  .  .
            .  .  b3 .  .
            .  .  .  r3 .
            r2 .  .  .  .
        "
        .parse()
        .unwrap();

        let moves = legal_moves(&board, Color::Red, MovePolicy::Complete);
        assert_eq!(
            moves,
            vec![
                Pos::new(0, 4),
                Pos::new(3, 3),
                Pos::new(1, 1),
                Pos::new(4, 0),
                Pos::new(0, 0),
            ]
        );
        assert!(moves.iter().all(|&p| is_legal_move(&board, p, Color::Red)));

        let explosive = legal_moves(&board, Color::Red, MovePolicy::ExplosiveOnly);
        assert_eq!(explosive, vec![Pos::new(0, 4), Pos::new(3, 3)]);
    }

    #[test]
    fn test_explosive_only_falls_back_to_all() {
        let board: Board = "
            r1 .  .  .  .
            .  r2 .  .  .
            .  .  .  .  .
            .  .  .  .  .
            .  .  .  .  b1
        "
        .parse()
        .unwrap();
        let moves = legal_moves(&board, Color::Red, MovePolicy::ExplosiveOnly);
        assert_eq!(moves, vec![Pos::new(1, 1), Pos::new(0, 0)]);
    }

    #[test]
    fn test_eliminated_color_has_no_moves() {
        let board: Board = "
            r1 .  .  .  .
            .  r2 .  .  .
            .  .  .  .  .
            .  .  .  .  .
            .  .  .  .  b1
        "
        .parse()
        .unwrap();
        assert!(legal_moves(&board, Color::Blue, MovePolicy::Complete).len() == 1);

        let mut wiped = board;
        wiped.set(Pos::new(4, 4), crate::board::Cell::EMPTY);
        assert!(legal_moves(&wiped, Color::Blue, MovePolicy::Complete).is_empty());
    }
}

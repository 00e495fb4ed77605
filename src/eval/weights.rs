//! Evaluation weights for Color Wars
//!
//! Fixed constants; the evaluator is a linear combination of board features
//! scaled by these values.

/// Scoring weights for evaluation
pub struct Weights;

impl Weights {
    /// Decided position (opponent eliminated)
    pub const WIN: i32 = 100_000;

    // Material
    /// Per piece owned
    pub const PIECE: i32 = 15;
    /// Per dot owned
    pub const DOT: i32 = 10;
    /// Per piece one dot away from exploding
    pub const READY: i32 = 25;

    // Chain potential of pieces with 2+ dots
    /// Per own 2+ dot neighbor: adjacent loaded pieces feed each other's cascades
    pub const CHAIN_LINK: i32 = 10;
    /// Per adjacent opponent piece: what an explosion here would convert
    pub const ATTACK_SURFACE: i32 = 5;

    /// Per (opponent ready piece, own neighbor) pair
    pub const THREAT: i32 = 15;

    /// Per step closer to the center than the farthest corner
    pub const CENTER: i32 = 2;

    /// Own piece with most of its neighbors held by the opponent
    pub const SURROUNDED: i32 = 20;
}

/// Largest Manhattan distance from the center on the board
pub const MAX_CENTER_DIST: i32 = 2 * (crate::board::BOARD_SIZE as i32 / 2);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_dominates_material() {
        // A full board of ready pieces with every bonus is still far from a win
        let per_cell = Weights::PIECE
            + 3 * Weights::DOT
            + Weights::READY
            + 4 * (Weights::CHAIN_LINK + Weights::ATTACK_SURFACE)
            + MAX_CENTER_DIST * Weights::CENTER;
        assert!(per_cell * 25 * 2 < Weights::WIN);
    }

    #[test]
    fn test_max_center_dist() {
        assert_eq!(MAX_CENTER_DIST, 4);
    }
}

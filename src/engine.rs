//! Main AI Engine integrating all search components
//!
//! This module provides the decision engine that turns a board snapshot and
//! an acting color into one move. The search follows a priority system:
//!
//! 1. **Immediate win**: any move that eliminates the opponent outright
//! 2. **Opening variety**: optional random placement early in the game
//! 3. **Alpha-Beta**: budget-aware minimax, degrading to the quick-best move
//!
//! # Example
//!
//! ```
//! use color_wars::{AIEngine, Board, Color, EngineConfig, Pos};
//!
//! // Use smaller depth for faster example
//! let mut engine = AIEngine::with_config(EngineConfig { max_depth: 2, ..Default::default() });
//! let mut board = Board::new();
//! color_wars::rules::apply_move(&mut board, Pos::center(), Color::Red);
//!
//! // Get best move for Blue
//! let result = engine.get_move_with_stats(&board, Color::Blue);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Color, Pos};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::eval::Weights;
use crate::rules::{applied, is_terminal, winner};
use crate::search::{legal_moves, SearchLimits, SearchOutcome, SearchResult, Searcher};

/// Openings are randomized only while fewer pieces than this are on the board
const OPENING_PIECE_LIMIT: u32 = 6;

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Found a move that eliminates the opponent
    ImmediateWin,
    /// Random opening placement
    Opening,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// Budget ran out before any root move finished; best one-ply move
    QuickBest,
    /// Search produced nothing; first legal move
    Fallback,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` only when no legal move exists
    pub best_move: Option<Pos>,
    /// Evaluation score from the acting color's perspective
    pub score: i32,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Whether the search ran to completion
    pub outcome: SearchOutcome,
}

impl MoveResult {
    #[inline]
    fn immediate_win(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: Weights::WIN,
            search_type: SearchType::ImmediateWin,
            time_ms,
            nodes: 0,
            outcome: SearchOutcome::Completed,
        }
    }

    #[inline]
    fn opening(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            search_type: SearchType::Opening,
            time_ms,
            nodes: 0,
            outcome: SearchOutcome::Completed,
        }
    }

    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type: SearchType::Fallback,
            time_ms,
            nodes: 0,
            outcome: SearchOutcome::Completed,
        }
    }

    /// Create a result from alpha-beta search
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        let search_type = if result.best_move.is_none() {
            SearchType::Fallback
        } else if !result.outcome.is_complete() && result.stats.root_moves_completed == 0 {
            SearchType::QuickBest
        } else {
            SearchType::AlphaBeta
        };
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type,
            time_ms,
            nodes: result.nodes,
            outcome: result.outcome,
        }
    }
}

/// Main AI Engine for Color Wars.
///
/// Owns a searcher and the configuration it was built from. Each call is
/// independent: no search state carries over between decisions.
///
/// # Example
///
/// ```
/// use color_wars::{AIEngine, Board, Color, Pos};
///
/// let mut engine = AIEngine::new();
/// let mut board = Board::new();
/// color_wars::rules::apply_move(&mut board, Pos::center(), Color::Red);
/// if let Some(best_move) = engine.get_move(&board, Color::Blue) {
///     println!("Play at ({}, {})", best_move.row, best_move.col);
/// }
/// ```
pub struct AIEngine {
    config: EngineConfig,
    searcher: Searcher,
    rng: StdRng,
}

impl AIEngine {
    /// Create a new AI engine with default settings.
    ///
    /// Default configuration:
    /// - Depth 3
    /// - 2000ms time limit, no node budget
    /// - Deterministic play (no opening randomness)
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an AI engine with custom configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Engine with a fixed random seed, for reproducible games.
    #[must_use]
    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: EngineConfig, rng: StdRng) -> Self {
        Self {
            searcher: Searcher::from_config(&config),
            config,
            rng,
        }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the best move for the given position.
    ///
    /// Convenience wrapper over [`AIEngine::get_move_with_stats`].
    #[must_use]
    pub fn get_move(&mut self, board: &Board, color: Color) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Pick a move for `color` under explicit budgets.
    ///
    /// Budgets override the configured ones for this call only.
    pub fn find_best_move(
        &mut self,
        board: &Board,
        color: Color,
        time_limit: Duration,
        node_budget: Option<u64>,
    ) -> EngineResult<Pos> {
        if is_terminal(board) {
            return Err(EngineError::GameOver);
        }

        let configured = self.searcher.limits();
        self.searcher.set_limits(SearchLimits {
            time_limit,
            node_budget,
            ..configured
        });
        let result = self.get_move_with_stats(board, color);
        self.searcher.set_limits(configured);

        result.best_move.ok_or(EngineError::NoLegalMove(color))
    }

    /// Get the best move with detailed search statistics.
    ///
    /// # Search Priority
    ///
    /// 1. Immediate winning move
    /// 2. Random opening placement (when enabled)
    /// 3. Alpha-beta search, falling back to the first legal move
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, color: Color) -> MoveResult {
        let start = Instant::now();

        let mut board = *board;
        if board.side_to_move() != color {
            tracing::warn!(
                expected = ?board.side_to_move(),
                acting = ?color,
                "side to move differs from acting color; searching for acting color"
            );
            board.set_side_to_move(color);
        }

        let moves = legal_moves(&board, color, self.config.move_policy);
        if moves.is_empty() || is_terminal(&board) {
            tracing::debug!(?color, "no legal move");
            return MoveResult::no_move(elapsed_ms(start));
        }

        // 1. A move that ends the game
        if let Some(win_move) = find_immediate_win(&board, color, &moves) {
            tracing::debug!(?color, %win_move, "immediate win");
            return MoveResult::immediate_win(win_move, elapsed_ms(start));
        }

        // 2. Opening variety
        if let Some(opening_move) = self.random_opening_move(&board, &moves) {
            tracing::debug!(?color, %opening_move, "random opening move");
            return MoveResult::opening(opening_move, elapsed_ms(start));
        }

        // 3. Alpha-beta search
        let result = self.searcher.search(&board, color);
        tracing::debug!(
            ?color,
            depth = result.depth,
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            outcome = ?result.outcome,
            elapsed_ms = result.elapsed.as_millis() as u64,
            cutoff_rate = result.stats.first_move_rate(),
            "search finished"
        );

        let mut move_result = MoveResult::from_search(result, elapsed_ms(start));
        if move_result.best_move.is_none() {
            move_result.best_move = moves.first().copied();
        }
        move_result
    }

    fn random_opening_move(&mut self, board: &Board, moves: &[Pos]) -> Option<Pos> {
        let p = self.config.opening_randomness;
        if p <= 0.0 || board.piece_total() >= OPENING_PIECE_LIMIT {
            return None;
        }
        if !self.rng.random_bool(p.min(1.0)) {
            return None;
        }
        Some(moves[self.rng.random_range(0..moves.len())])
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// First candidate that eliminates the opponent.
pub fn find_immediate_win(board: &Board, color: Color, moves: &[Pos]) -> Option<Pos> {
    moves
        .iter()
        .copied()
        .find(|&mov| winner(&applied(board, mov, color)) == Some(color))
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

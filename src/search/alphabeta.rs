//! Budget-aware minimax search with alpha-beta pruning
//!
//! This module implements the core search algorithm for the Color Wars AI.
//! It runs fixed-depth minimax from the root color's perspective with
//! fail-soft alpha-beta pruning.
//!
//! # Features
//!
//! - Wall-clock deadline and optional node budget, checked at every node
//! - Anytime result: best fully searched move, else the best one-ply move
//! - One-ply root ordering so the strongest candidates are searched first
//!
//! # Example
//!
//! ```
//! use color_wars::board::{Board, Color, Pos};
//! use color_wars::config::EngineConfig;
//! use color_wars::search::Searcher;
//!
//! let mut board = Board::new();
//! color_wars::rules::apply_move(&mut board, Pos::center(), Color::Red);
//!
//! let config = EngineConfig { max_depth: 2, ..EngineConfig::default() };
//! let mut searcher = Searcher::from_config(&config);
//! let result = searcher.search(&board, Color::Blue);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use std::time::{Duration, Instant};

use crate::board::{Board, Color, Pos};
use crate::config::{EngineConfig, MovePolicy};
use crate::eval::{evaluate, Weights};
use crate::rules::{applied, is_terminal};

use super::movegen::legal_moves;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = Weights::WIN + 1;

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every root move was searched to full depth
    Completed,
    /// Deadline passed mid-search
    TimedOut,
    /// Node counter exceeded the budget
    NodeBudget,
}

impl SearchOutcome {
    #[inline]
    pub fn is_complete(self) -> bool {
        self == SearchOutcome::Completed
    }
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Total alpha-beta cutoffs
    pub cutoffs: u64,
    /// Cutoffs on the first move tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
    /// Root moves searched to full depth
    pub root_moves_completed: u32,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.cutoffs as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` only when the color has no legal move
    pub best_move: Option<Pos>,
    /// Score of the best move from the searching color's perspective
    pub score: i32,
    /// Depth the search was configured for
    pub depth: u8,
    /// Minimax invocations
    pub nodes: u64,
    pub outcome: SearchOutcome,
    pub elapsed: Duration,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Budgets for one decision. Depth, time and node limits are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_depth: u8,
    pub time_limit: Duration,
    pub node_budget: Option<u64>,
}

impl SearchLimits {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            time_limit: config.time_limit(),
            node_budget: config.node_budget,
        }
    }

    /// Depth-only limits, for analysis and tests
    pub fn depth_only(max_depth: u8) -> Self {
        Self {
            max_depth,
            time_limit: Duration::MAX,
            node_budget: None,
        }
    }
}

/// Single-threaded minimax searcher.
///
/// Holds only per-search state: node counter, start time and stop reason.
/// Nothing survives between calls to [`Searcher::search`].
pub struct Searcher {
    policy: MovePolicy,
    limits: SearchLimits,
    nodes: u64,
    start: Instant,
    stopped: Option<SearchOutcome>,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new(policy: MovePolicy, limits: SearchLimits) -> Self {
        Self {
            policy,
            limits,
            nodes: 0,
            start: Instant::now(),
            stopped: None,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.move_policy, SearchLimits::from_config(config))
    }

    pub fn set_limits(&mut self, limits: SearchLimits) {
        self.limits = limits;
    }

    #[inline]
    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Search for the best move for `color` on a snapshot of `board`.
    ///
    /// Never fails on budget exhaustion: a cut-off search still returns the
    /// best fully searched move, or the best move by one-ply evaluation.
    #[must_use]
    pub fn search(&mut self, board: &Board, color: Color) -> SearchResult {
        self.nodes = 0;
        self.start = Instant::now();
        self.stopped = None;
        self.stats = SearchStats::default();

        let depth = self.limits.max_depth.max(1);
        let root = *board;

        if is_terminal(&root) {
            return self.finish(None, evaluate(&root, color), depth);
        }

        let ordered = ordered_root_moves(&root, color, self.policy);
        let Some(&(quick_best, quick_score)) = ordered.first() else {
            return self.finish(None, evaluate(&root, color), depth);
        };

        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;

        for &(mov, _) in &ordered {
            let child = applied(&root, mov, color);
            let score = self.minimax(&child, color, depth - 1, alpha, INF, false);

            // A subtree cut short by the budget is not a real score
            if self.stopped.is_some() {
                break;
            }
            self.stats.root_moves_completed += 1;

            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
            alpha = alpha.max(score);
        }

        match best_move {
            Some(mov) => self.finish(Some(mov), best_score, depth),
            None => {
                tracing::warn!(
                    ?quick_best,
                    nodes = self.nodes,
                    "search cut off before any root move completed"
                );
                self.finish(Some(quick_best), quick_score, depth)
            }
        }
    }

    fn finish(&self, best_move: Option<Pos>, score: i32, depth: u8) -> SearchResult {
        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            outcome: self.stopped.unwrap_or(SearchOutcome::Completed),
            elapsed: self.start.elapsed(),
            stats: self.stats.clone(),
        }
    }

    /// Check budgets and latch the stop reason.
    #[inline]
    fn check_budget(&mut self) -> bool {
        if self.stopped.is_some() {
            return true;
        }
        if self.limits.node_budget.is_some_and(|budget| self.nodes > budget) {
            self.stopped = Some(SearchOutcome::NodeBudget);
        } else if self.start.elapsed() >= self.limits.time_limit {
            self.stopped = Some(SearchOutcome::TimedOut);
        }
        self.stopped.is_some()
    }

    /// Fail-soft minimax scored from `root_color`'s perspective.
    ///
    /// `maximizing` is true when `root_color` is to move at this node.
    fn minimax(
        &mut self,
        board: &Board,
        root_color: Color,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if self.check_budget() || depth == 0 || is_terminal(board) {
            return evaluate(board, root_color);
        }

        let mover = if maximizing { root_color } else { root_color.opponent() };
        let moves = legal_moves(board, mover, self.policy);
        if moves.is_empty() {
            return evaluate(board, root_color);
        }

        let mut best = if maximizing { -INF } else { INF };
        for (i, &mov) in moves.iter().enumerate() {
            let child = applied(board, mov, mover);
            let score = self.minimax(&child, root_color, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                if i == 0 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
            if self.stopped.is_some() {
                break;
            }
        }

        best
    }
}

/// Root candidates scored one ply deep, best first.
///
/// The sort is stable, so ties keep generator order. The head of the list
/// is the quick-best fallback.
pub(crate) fn ordered_root_moves(board: &Board, color: Color, policy: MovePolicy) -> Vec<(Pos, i32)> {
    let mut scored: Vec<(Pos, i32)> = legal_moves(board, color, policy)
        .into_iter()
        .map(|mov| (mov, evaluate(&applied(board, mov, color), color)))
        .collect();
    scored.sort_by_key(|&(_, score)| std::cmp::Reverse(score));
    scored
}

//! Game session state for the Color Wars GUI
//!
//! Owns the live board and runs AI turns on a worker thread. The worker gets
//! a board snapshot and reports back over a channel; its answer is checked
//! against the live board before it is applied.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::config::{EngineConfig, MovePolicy};
use crate::error::EngineError;
use crate::rules::{is_legal_move, try_apply_move, winner, MoveOutcome};
use crate::search::legal_moves;
use crate::{AIEngine, Board, Color, MoveResult, Pos};

/// Reasons a human move is refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("game is over")]
    GameOver,
    #[error("AI is thinking")]
    AiThinking,
    #[error("not your turn")]
    NotYourTurn,
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Color },
    /// Player vs Player (hotseat)
    PvP,
    /// AI plays both colors
    AiVsAi,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human_color: Color::Red }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Wins per color across rounds of one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundTally {
    pub red_wins: u32,
    pub blue_wins: u32,
}

impl RoundTally {
    fn record(&mut self, winner: Color) {
        match winner {
            Color::Red => self.red_wins += 1,
            Color::Blue => self.blue_wins += 1,
        }
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub game_over: Option<Color>,
    pub last_move: Option<Pos>,
    pub last_outcome: Option<MoveOutcome>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub tally: RoundTally,
    pub message: Option<String>,
    config: EngineConfig,
    rng: StdRng,
}

impl GameState {
    pub fn new(mode: GameMode, config: EngineConfig) -> Self {
        Self::with_rng(mode, config, StdRng::from_os_rng())
    }

    /// Session with a fixed seed for the fallback move picker.
    pub fn with_seed(mode: GameMode, config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(mode, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mode: GameMode, config: EngineConfig, rng: StdRng) -> Self {
        Self {
            board: Board::new(),
            mode,
            game_over: None,
            last_move: None,
            last_outcome: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            tally: RoundTally::default(),
            message: None,
            config,
            rng,
        }
    }

    /// Start a new round. Round tallies are kept.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.game_over = None;
        self.last_move = None;
        self.last_outcome = None;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.board.side_to_move()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn() == human_color,
            GameMode::PvP => true,
            GameMode::AiVsAi => false,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.game_over.is_none() && !self.is_human_turn()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Pieces on the board as `(red, blue)`
    pub fn piece_counts(&self) -> (u32, u32) {
        (
            self.board.piece_count(Color::Red),
            self.board.piece_count(Color::Blue),
        )
    }

    /// Attempt a human move at the given position
    pub fn try_play(&mut self, pos: Pos) -> Result<MoveOutcome, GameError> {
        if self.game_over.is_some() {
            return Err(GameError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(GameError::AiThinking);
        }
        if !self.is_human_turn() {
            return Err(GameError::NotYourTurn);
        }

        Ok(self.execute_move(pos)?)
    }

    /// Play `pos` for the side to move (for both human and AI).
    /// The board is untouched when the move is illegal.
    fn execute_move(&mut self, pos: Pos) -> Result<MoveOutcome, EngineError> {
        let color = self.current_turn();
        let outcome = try_apply_move(&mut self.board, pos, color)?;

        self.last_move = Some(pos);
        self.last_outcome = Some(outcome);
        self.message = None;

        if outcome.exploded() {
            tracing::debug!(
                ?color,
                %pos,
                explosions = outcome.explosions,
                layers = outcome.layers,
                "cascade resolved"
            );
        }

        if let Some(won) = winner(&self.board) {
            tracing::info!(winner = ?won, "game over");
            self.game_over = Some(won);
            self.tally.record(won);
        }

        Ok(outcome)
    }

    /// Spawn the AI worker for the side to move. No-op while a search is
    /// already in flight or when it is not the AI's turn.
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let board = self.board;
        let color = self.current_turn();
        let config = self.config.clone();
        let (tx, rx) = channel();

        thread::spawn(move || {
            thread::sleep(config.think_delay());
            let mut engine = AIEngine::with_config(config);
            let result = engine.get_move_with_stats(&board, color);
            // Receiver is gone after a reset
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Poll the AI worker. Returns the move played, if any.
    ///
    /// A missing or illegal answer, or a worker that died, is replaced by a
    /// random legal move on the live board.
    pub fn check_ai_result(&mut self) -> Option<Pos> {
        let received = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => Some(Some(result)),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => Some(None),
            },
            AiState::Idle => None,
        }?;

        self.ai_state = AiState::Idle;
        let color = self.current_turn();

        let proposed = match received {
            Some(result) => {
                let best = result.best_move;
                tracing::info!(
                    ?color,
                    best_move = ?best,
                    search_type = ?result.search_type,
                    score = result.score,
                    nodes = result.nodes,
                    time_ms = result.time_ms,
                    "AI move"
                );
                self.last_ai_result = Some(result);
                best
            }
            None => {
                tracing::warn!(?color, "AI worker disconnected without a result");
                None
            }
        };

        let pos = match proposed {
            Some(pos) if is_legal_move(&self.board, pos, color) => pos,
            other => {
                if let Some(pos) = other {
                    tracing::warn!(?color, %pos, "AI proposed an illegal move");
                }
                let Some(fallback) = self.random_legal_move() else {
                    self.message = Some(format!("{} has no legal move", color.name()));
                    return None;
                };
                tracing::warn!(?color, %fallback, "playing random legal move instead");
                fallback
            }
        };

        match self.execute_move(pos) {
            Ok(_) => Some(pos),
            Err(err) => {
                tracing::warn!(?color, %pos, %err, "AI move rejected");
                None
            }
        }
    }

    /// Uniformly random legal move for the side to move
    pub fn random_legal_move(&mut self) -> Option<Pos> {
        let moves = legal_moves(&self.board, self.current_turn(), MovePolicy::Complete);
        if moves.is_empty() {
            return None;
        }
        Some(moves[self.rng.random_range(0..moves.len())])
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SearchType;
    use crate::search::SearchOutcome;

    fn fast_config() -> EngineConfig {
        EngineConfig {
            max_depth: 1,
            think_delay_ms: 0,
            ..EngineConfig::default()
        }
    }

    fn fake_result(best_move: Option<Pos>) -> MoveResult {
        MoveResult {
            best_move,
            score: 0,
            search_type: SearchType::AlphaBeta,
            time_ms: 0,
            nodes: 0,
            outcome: SearchOutcome::Completed,
        }
    }

    fn wait_for_ai(state: &mut GameState) -> Option<Pos> {
        let deadline = Instant::now() + Duration::from_secs(10);
        while Instant::now() < deadline {
            if let Some(pos) = state.check_ai_result() {
                return Some(pos);
            }
            if !state.is_ai_thinking() {
                return None;
            }
            thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn test_pvp_alternates() {
        let mut state = GameState::new(GameMode::PvP, fast_config());
        assert!(state.try_play(Pos::center()).unwrap().placed);
        assert_eq!(state.current_turn(), Color::Blue);

        // Occupied cell is not a legal first move for Blue
        assert_eq!(
            state.try_play(Pos::center()),
            Err(GameError::Engine(EngineError::IllegalMove {
                pos: Pos::center(),
                color: Color::Blue
            }))
        );

        state.try_play(Pos::new(0, 0)).unwrap();
        assert_eq!(state.piece_counts(), (1, 1));
        assert_eq!(state.last_move, Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_illegal_move_leaves_session_untouched() {
        let mut state = GameState::new(GameMode::PvP, fast_config());
        state.try_play(Pos::center()).unwrap();
        state.try_play(Pos::new(0, 0)).unwrap();
        let before = state.board;

        // Red may only grow its own cells now
        assert_eq!(
            state.try_play(Pos::new(0, 0)),
            Err(GameError::Engine(EngineError::IllegalMove {
                pos: Pos::new(0, 0),
                color: Color::Red
            }))
        );
        assert_eq!(state.board, before);
        assert_eq!(state.last_move, Some(Pos::new(0, 0)));
        assert_eq!(state.current_turn(), Color::Red);

        // Growing the 3-dot center sets off an explosion
        let outcome = state.try_play(Pos::center()).unwrap();
        assert!(!outcome.placed);
        assert_eq!(outcome.explosions, 1);
        assert_eq!(state.last_outcome, Some(outcome));
        assert_eq!(state.piece_counts(), (4, 1));
    }

    #[test]
    fn test_pve_rejects_ai_turn() {
        let mut state = GameState::new(GameMode::PvE { human_color: Color::Blue }, fast_config());
        assert_eq!(state.try_play(Pos::center()), Err(GameError::NotYourTurn));
        assert!(state.is_ai_turn());
    }

    #[test]
    fn test_ai_move_applied() {
        let mut state = GameState::new(GameMode::PvE { human_color: Color::Blue }, fast_config());
        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        assert_eq!(state.try_play(Pos::center()), Err(GameError::AiThinking));

        let played = wait_for_ai(&mut state).expect("AI move");
        assert_eq!(state.board.get(played).dots(), 3);
        assert_eq!(state.current_turn(), Color::Blue);
        assert!(state.last_ai_result.is_some());
    }

    #[test]
    fn test_illegal_ai_answer_replaced() {
        let mut state =
            GameState::with_seed(GameMode::PvE { human_color: Color::Blue }, fast_config(), 1);
        state.board.set(Pos::center(), crate::board::Cell::owned(Color::Blue, 2));
        state.board.set_moved(Color::Blue);

        let (tx, rx) = channel();
        tx.send(fake_result(Some(Pos::center()))).unwrap();
        state.ai_state = AiState::Thinking { receiver: rx, start_time: Instant::now() };

        let played = state.check_ai_result().expect("fallback move");
        assert_ne!(played, Pos::center());
        assert!(state.board.get(played).is_owned_by(Color::Red));
        assert!(!state.is_ai_thinking());
    }

    #[test]
    fn test_disconnected_worker_replaced() {
        let mut state = GameState::with_seed(GameMode::AiVsAi, fast_config(), 2);
        let (tx, rx) = channel::<MoveResult>();
        drop(tx);
        state.ai_state = AiState::Thinking { receiver: rx, start_time: Instant::now() };

        assert!(state.check_ai_result().is_some());
        assert_eq!(state.piece_counts(), (1, 0));
    }

    #[test]
    fn test_missing_answer_replaced() {
        let mut state = GameState::with_seed(GameMode::AiVsAi, fast_config(), 3);
        let (tx, rx) = channel();
        tx.send(fake_result(None)).unwrap();
        state.ai_state = AiState::Thinking { receiver: rx, start_time: Instant::now() };
        assert!(state.check_ai_result().is_some());
    }

    #[test]
    fn test_game_over_and_tally() {
        let mut state = GameState::new(GameMode::PvP, fast_config());
        state.board = "
            .  .  .  .  .
            .  .  .  .  .
            .  .  r3 b1 .
            .  .  .  .  .
            .  .  .  .  .
        "
        .parse()
        .unwrap();

        state.try_play(Pos::center()).unwrap();
        assert_eq!(state.game_over, Some(Color::Red));
        assert_eq!(state.tally.red_wins, 1);
        assert_eq!(state.try_play(Pos::new(0, 0)), Err(GameError::GameOver));
        assert!(!state.is_ai_turn());

        state.reset();
        assert_eq!(state.game_over, None);
        assert!(state.board.is_board_empty());
        assert_eq!(state.tally.red_wins, 1);
    }

    #[test]
    fn test_ai_vs_ai_plays_out() {
        let mut state = GameState::new(GameMode::AiVsAi, fast_config());
        for _ in 0..6 {
            state.start_ai_thinking();
            if wait_for_ai(&mut state).is_none() {
                break;
            }
        }
        assert!(state.board.red_moved && state.board.blue_moved);
    }
}

//! End-to-end scenarios through the public engine API

use std::time::Duration;

use color_wars::engine::SearchType;
use color_wars::rules::{apply_move, is_legal_move, is_terminal, winner};
use color_wars::search::SearchOutcome;
use color_wars::{AIEngine, Board, Cell, Color, EngineConfig, EngineError, MovePolicy, Pos};

fn board(layout: &str) -> Board {
    layout.parse().expect("valid layout")
}

#[test]
fn opening_and_first_explosion() {
    let mut b = Board::new();

    apply_move(&mut b, Pos::center(), Color::Red);
    assert_eq!(b.get(Pos::center()), Cell::owned(Color::Red, 3));
    assert_eq!(b.piece_total(), 1);
    assert!(b.red_moved);
    assert_eq!(b.side_to_move(), Color::Blue);

    apply_move(&mut b, Pos::new(4, 4), Color::Blue);
    assert_eq!(b.get(Pos::new(4, 4)), Cell::owned(Color::Blue, 3));
    assert_eq!(b.piece_count(Color::Blue), 1);

    let outcome = apply_move(&mut b, Pos::center(), Color::Red);
    assert_eq!(outcome.explosions, 1);
    assert!(b.is_empty(Pos::center()));
    for n in [Pos::new(1, 2), Pos::new(3, 2), Pos::new(2, 1), Pos::new(2, 3)] {
        assert_eq!(b.get(n), Cell::owned(Color::Red, 1));
    }
    assert_eq!(b.piece_count(Color::Red), 4);
    assert!(!is_terminal(&b));
}

#[test]
fn search_prefers_explosive_move() {
    // Exploding (2,2) converts both blue pieces; growing (0,0) does nothing
    let b = board(
        "r1 .  .  .  .
         .  .  b2 .  .
         .  .  r3 b2 .
         .  .  .  .  .
         .  .  .  .  b1",
    );
    let mut engine = AIEngine::with_config(EngineConfig {
        max_depth: 2,
        ..EngineConfig::default()
    });
    let result = engine.get_move_with_stats(&b, Color::Red);
    assert_eq!(result.best_move, Some(Pos::center()));
    assert!(result.score > 0);
}

#[test]
fn engine_plays_a_full_game() {
    let config = EngineConfig {
        max_depth: 2,
        time_limit_ms: 500,
        ..EngineConfig::default()
    };
    let mut red = AIEngine::with_seed(config.clone(), 1);
    let mut blue = AIEngine::with_seed(config, 2);

    let mut b = Board::new();
    let mut color = Color::Red;
    for _ in 0..200 {
        if is_terminal(&b) {
            break;
        }
        let engine = if color == Color::Red { &mut red } else { &mut blue };
        let mov = engine
            .find_best_move(&b, color, Duration::from_millis(500), None)
            .expect("move while game is running");
        assert!(is_legal_move(&b, mov, color));
        apply_move(&mut b, mov, color);
        color = color.opponent();
    }

    if let Some(won) = winner(&b) {
        assert_eq!(b.piece_count(won.opponent()), 0);
        assert_eq!(
            red.find_best_move(&b, Color::Red, Duration::from_millis(10), None),
            Err(EngineError::GameOver)
        );
    }
}

#[test]
fn node_budget_degrades_gracefully() {
    let b = board(
        "r2 r1 .  b3 .
         .  r3 .  b2 .
         r2 .  b1 .  .
         .  r3 .  b2 b1
         r1 .  .  .  b2",
    );
    let mut engine = AIEngine::with_config(EngineConfig {
        max_depth: 6,
        node_budget: Some(10),
        ..EngineConfig::default()
    });
    let result = engine.get_move_with_stats(&b, Color::Blue);

    assert_eq!(result.outcome, SearchOutcome::NodeBudget);
    assert!(matches!(result.search_type, SearchType::QuickBest | SearchType::AlphaBeta));
    assert!(is_legal_move(&b, result.best_move.unwrap(), Color::Blue));
}

#[test]
fn explosive_only_policy_plays_ready_cells() {
    let b = board(
        "r1 .  .  .  .
         .  r2 .  .  .
         .  .  .  .  r3
         .  .  .  .  .
         b1 .  .  .  b2",
    );
    let mut engine = AIEngine::with_config(EngineConfig {
        max_depth: 2,
        move_policy: MovePolicy::ExplosiveOnly,
        ..EngineConfig::default()
    });
    assert_eq!(engine.get_move(&b, Color::Red), Some(Pos::new(2, 4)));
}

#[test]
fn config_file_round_trip() {
    let dir = std::env::temp_dir().join(format!("color_wars_cfg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("engine.json");
    std::fs::write(&path, r#"{ "max_depth": 4, "time_limit_ms": 750, "move_policy": "explosive_only" }"#)
        .unwrap();

    let config = EngineConfig::from_json_file(&path).unwrap();
    assert_eq!(config.max_depth, 4);
    assert_eq!(config.time_limit(), Duration::from_millis(750));
    assert_eq!(config.move_policy, MovePolicy::ExplosiveOnly);

    std::fs::remove_dir_all(&dir).unwrap();
}

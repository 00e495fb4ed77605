//! Color Wars GUI
//!
//! A graphical interface for playing Color Wars against the AI or another player.

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use color_wars::ui::{ColorWarsApp, GameMode};
use color_wars::{Color, EngineConfig};

/// Which colors the AI plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AiSide {
    Red,
    Blue,
    None,
    Both,
}

impl AiSide {
    fn game_mode(self) -> GameMode {
        match self {
            AiSide::Red => GameMode::PvE { human_color: Color::Blue },
            AiSide::Blue => GameMode::PvE { human_color: Color::Red },
            AiSide::None => GameMode::PvP,
            AiSide::Both => GameMode::AiVsAi,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "color-wars", version, about = "Color Wars with an alpha-beta AI")]
struct Args {
    /// Side played by the AI
    #[arg(long, value_enum, default_value_t = AiSide::Blue)]
    ai: AiSide,

    /// Engine configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search depth in plies
    #[arg(long)]
    depth: Option<u8>,

    /// Time limit per AI move in milliseconds
    #[arg(long)]
    time_ms: Option<u64>,

    /// Node budget per AI move
    #[arg(long)]
    nodes: Option<u64>,
}

impl Args {
    fn engine_config(&self) -> anyhow::Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => EngineConfig::default(),
        };

        if let Some(depth) = self.depth {
            config.max_depth = depth;
        }
        if let Some(time_ms) = self.time_ms {
            config.time_limit_ms = time_ms;
        }
        if self.nodes.is_some() {
            config.node_budget = self.nodes;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("color_wars=info")),
        )
        .init();

    let args = Args::parse();
    let config = args.engine_config()?;
    let mode = args.ai.game_mode();
    tracing::info!(?mode, ?config, "starting Color Wars");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Color Wars"),
        ..Default::default()
    };

    eframe::run_native(
        "Color Wars",
        options,
        Box::new(move |cc| Ok(Box::new(ColorWarsApp::new(cc, mode, config)))),
    )
    .map_err(|err| anyhow!("GUI error: {err}"))
}

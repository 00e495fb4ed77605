//! Main application for the Color Wars GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::{GameMode, GameState};
use super::theme::*;
use crate::config::EngineConfig;
use crate::Color;

/// Main Color Wars application
pub struct ColorWarsApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl ColorWarsApp {
    /// Create a new app with the given mode and engine configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, mode: GameMode, config: EngineConfig) -> Self {
        Self {
            state: GameState::new(mode, config),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    /// Start a fresh round in `mode`, keeping the tallies when the mode is unchanged
    fn new_game(&mut self, mode: GameMode) {
        if self.state.mode == mode {
            self.state.reset();
        } else {
            self.state = GameState::new(mode, self.state.config().clone());
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Red)").clicked() {
                        self.new_game(GameMode::PvE { human_color: Color::Red });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - Blue)").clicked() {
                        self.new_game(GameMode::PvE { human_color: Color::Blue });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    if ui.button("New Game (AI vs AI)").clicked() {
                        self.new_game(GameMode::AiVsAi);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human_color } => format!("PvE - You: {}", human_color.name()),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                        GameMode::AiVsAi => "AI vs AI".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("COLOR WARS").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_pieces_card(ui);
                ui.add_space(10.0);

                self.render_tally_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(winner) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, winner);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn();
            let (main, _) = piece_colors(turn);

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, main);

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(turn.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.game_over.is_some() {
                        ("Game over".to_string(), TEXT_SECONDARY)
                    } else if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                        let secs = elapsed.as_secs_f32();
                        let limit = self.state.config().time_limit().as_secs_f32();
                        let color = if secs < limit * 0.5 {
                            TIMER_NORMAL
                        } else if secs < limit {
                            TIMER_WARNING
                        } else {
                            TIMER_CRITICAL
                        };
                        (format!("AI thinking... {secs:.2}s"), color)
                    } else if self.state.is_human_turn() {
                        ("Your turn".to_string(), TIMER_NORMAL)
                    } else {
                        ("Waiting for AI".to_string(), TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render piece counts
    fn render_pieces_card(&self, ui: &mut egui::Ui) {
        let (red, blue) = self.state.piece_counts();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("PIECES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            Self::render_count_row(ui, Color::Red, red);
            Self::render_count_row(ui, Color::Blue, blue);
        });
    }

    /// Render round tallies
    fn render_tally_card(&self, ui: &mut egui::Ui) {
        let tally = self.state.tally;
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ROUNDS WON").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            Self::render_count_row(ui, Color::Red, tally.red_wins);
            Self::render_count_row(ui, Color::Blue, tally.blue_wins);
        });
    }

    fn render_count_row(ui: &mut egui::Ui, color: Color, count: u32) {
        let (main, _) = piece_colors(color);
        ui.horizontal(|ui| {
            ui.label(RichText::new("●").size(16.0).color(main));
            ui.label(RichText::new(color.name()).size(13.0).color(TEXT_SECONDARY));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(count.to_string()).size(14.0).strong().color(TEXT_PRIMARY));
            });
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                let Some(result) = &self.state.last_ai_result else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                    return;
                };

                ui.label(
                    RichText::new(format!("{:?} ({:?})", result.search_type, result.outcome))
                        .size(11.0)
                        .strong()
                        .color(TIMER_NORMAL),
                );
                ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                ui.label(
                    RichText::new(format!("{}ms, {} nodes", result.time_ms, result.nodes))
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
                if let Some(pos) = result.best_move {
                    ui.label(RichText::new(format!("→ {pos}")).size(12.0).strong().color(TEXT_PRIMARY));
                }
                if let Some(outcome) = self.state.last_outcome.filter(|o| o.exploded()) {
                    ui.label(
                        RichText::new(format!(
                            "Last cascade: {} explosions, {} layers",
                            outcome.explosions, outcome.layers
                        ))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                    );
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, winner: Color) {
        let (main, _) = piece_colors(winner);
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!("{} WINS!", winner.name().to_uppercase()))
                            .size(18.0)
                            .strong()
                            .color(main),
                    );
                    ui.add_space(12.0);
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let interactive = self.state.game_over.is_none()
                && self.state.is_human_turn()
                && !self.state.is_ai_thinking();

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.current_turn(),
                self.state.last_move,
                interactive,
            );

            if let Some(pos) = clicked {
                if let Err(err) = self.state.try_play(pos) {
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, toggle_debug) =
            ctx.input(|i| (i.key_pressed(egui::Key::N), i.key_pressed(egui::Key::D)));

        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if new_game {
            self.state.reset();
        }
    }
}

impl eframe::App for ColorWarsApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        self.state.start_ai_thinking();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}

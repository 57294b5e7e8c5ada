//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::{GameConfig, Player, SearchType};

use super::board_view::BoardView;
use super::game_state::{GameResult, GameState};
use super::theme::*;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameConfig::default()),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn new_game(&mut self, config: GameConfig) {
        self.state = GameState::new(config);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    let config = self.state.config;
                    if ui.button("New Game (Play X)").clicked() {
                        self.new_game(config.with_human(Player::X));
                        ui.close_menu();
                    }
                    if ui.button("New Game (Play O)").clicked() {
                        self.new_game(config.with_human(Player::O));
                        ui.close_menu();
                    }
                    let mut ai_first = !config.human_first;
                    if ui.checkbox(&mut ai_first, "AI moves first").changed() {
                        self.new_game(config.with_human_first(!ai_first));
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Search", |ui| {
                    let search_type = &mut self.state.config.search_type;
                    ui.radio_value(search_type, SearchType::Minimax, "Minimax");
                    ui.radio_value(search_type, SearchType::AlphaBeta, "Alpha-Beta");
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let config = &self.state.config;
                    ui.label(format!("You: {} - AI: {} ({})", config.human, config.ai(), config.search_type));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("TIC-TAC-TOE").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_turn_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::card_frame().show(ui, |ui| {
                        ui.label(RichText::new(msg).size(12.0).color(STATUS_ERROR));
                    });
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TURN").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(
                RichText::new(self.state.current_turn.to_string())
                    .size(28.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );

            let status = if self.state.game_over.is_some() {
                ("Game over".to_string(), TEXT_SECONDARY)
            } else if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                (format!("AI thinking... {:.2}s", elapsed.as_secs_f32()), STATUS_BUSY)
            } else if self.state.is_human_turn() {
                ("Your turn".to_string(), STATUS_OK)
            } else {
                ("AI to move".to_string(), STATUS_BUSY)
            };
            ui.label(RichText::new(status.0).size(12.0).color(status.1));
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(result) = &self.state.last_ai_result {
                let outlook = match result.value {
                    1 => "forced win",
                    -1 => "forced loss",
                    _ => "draw",
                };
                ui.label(RichText::new(result.search_type.to_string()).size(11.0).strong().color(STATUS_OK));
                ui.label(RichText::new(format!("Cell {} ({outlook})", result.best_move + 1)).size(11.0).color(TEXT_PRIMARY));
                ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_SECONDARY));
                ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
            } else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &GameResult) {
        let headline = match result.winner {
            Some(winner) if winner == self.state.config.human => "You win!".to_string(),
            Some(winner) => format!("AI wins as {winner}!"),
            None => "It's a draw!".to_string(),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let accepts_input = self.state.game_over.is_none()
                && self.state.is_human_turn()
                && !self.state.is_ai_thinking();
            let winning_line = self.state.game_over.and_then(|r| r.winning_line);

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.current_turn,
                self.state.last_move,
                winning_line,
                accepts_input,
            );

            if let Some(idx) = clicked {
                if let Err(err) = self.state.try_place(idx) {
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}

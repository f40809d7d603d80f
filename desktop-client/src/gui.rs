use crate::headless::HeadlessGameView;
use crate::view::{attach_view, status_message, CellState, GameView};
use crate::view_config::{parse_color, ViewConfig};
use common::{log, GameSnapshot, TicTacToeGame};
use eframe::egui;
use egui::{Color32, RichText};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// Click reported by the widget tree, dispatched to the engine by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    CellClicked(usize),
    ResetClicked,
}

/// `GameView` backed by the immediate-mode widget tree: it keeps the
/// latest snapshot and draws title, status, board grid and reset button
/// from it every frame.
pub struct WidgetGameView {
    snapshot: Option<GameSnapshot>,
    status_text: String,
    config: ViewConfig,
}

impl WidgetGameView {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            snapshot: None,
            status_text: String::new(),
            config,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> Option<ViewEvent> {
        let layout = &self.config.layout;
        let text = &self.config.text;
        let colors = &self.config.colors;
        let mut event = None;

        ui.vertical_centered(|ui| {
            ui.add_space(layout.title_padding);
            ui.label(themed(
                RichText::new(&text.title)
                    .size(layout.title_font_size)
                    .strong(),
                &colors.title_text,
            ));
            ui.add_space(layout.status_padding);
            ui.label(themed(
                RichText::new(&self.status_text).size(layout.status_font_size),
                &colors.status_text,
            ));
            ui.add_space(layout.board_padding);

            let mut board_frame = egui::Frame::default();
            if let Some(color) = color32(&colors.board_background) {
                board_frame = board_frame.fill(color);
            }
            board_frame.show(ui, |ui| {
                if let Some(color) = color32(&colors.cell_hover) {
                    ui.style_mut().visuals.widgets.hovered.weak_bg_fill = color;
                }
                egui::Grid::new("board")
                    .spacing([layout.cell_spacing, layout.cell_spacing])
                    .show(ui, |ui| {
                        for row in 0..3 {
                            for column in 0..3 {
                                let position = row * 3 + column;
                                let label = themed(
                                    RichText::new(self.cell_text(position))
                                        .size(layout.cell_font_size)
                                        .strong(),
                                    &colors.cell_text,
                                );
                                let mut button = egui::Button::new(label)
                                    .min_size(egui::vec2(layout.cell_size, layout.cell_size));
                                if let Some(color) = color32(&colors.cell_fg) {
                                    button = button.fill(color);
                                }
                                let enabled = self.cell_state(position) == CellState::Normal;
                                if ui.add_enabled(enabled, button).clicked() {
                                    event = Some(ViewEvent::CellClicked(position));
                                }
                            }
                            ui.end_row();
                        }
                    });
            });

            ui.add_space(layout.reset_padding);
            let mut reset =
                egui::Button::new(RichText::new(&text.reset_button).size(layout.reset_font_size));
            if let Some(color) = color32(&colors.reset_fg) {
                reset = reset.fill(color);
            }
            if ui.add(reset).clicked() {
                event = Some(ViewEvent::ResetClicked);
            }
        });

        event
    }
}

impl GameView for WidgetGameView {
    fn render(&mut self, snapshot: &GameSnapshot) {
        self.status_text = status_message(&self.config.text, snapshot);
        self.snapshot = Some(snapshot.clone());
    }

    fn cell_text(&self, position: usize) -> String {
        match &self.snapshot {
            Some(snapshot) => snapshot.board[position]
                .map(|mark| mark.to_string())
                .unwrap_or_default(),
            None => String::new(),
        }
    }

    fn cell_state(&self, position: usize) -> CellState {
        let occupied = self
            .snapshot
            .as_ref()
            .is_some_and(|snapshot| snapshot.board[position].is_some());
        if occupied {
            CellState::Disabled
        } else {
            CellState::Normal
        }
    }

    fn status_text(&self) -> String {
        self.status_text.clone()
    }

    fn reset_label(&self) -> String {
        self.config.text.reset_button.clone()
    }
}

struct TicTacToeApp {
    game: TicTacToeGame,
    view: Rc<RefCell<WidgetGameView>>,
}

impl TicTacToeApp {
    fn new(config: ViewConfig) -> Self {
        let mut game = TicTacToeGame::new();
        let view = Rc::new(RefCell::new(WidgetGameView::new(config)));
        attach_view(&mut game, &view);
        Self { game, view }
    }

    fn dispatch(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::CellClicked(position) => {
                if !self.game.make_move(position) {
                    log!("Move at cell {} rejected", position);
                }
            }
            ViewEvent::ResetClicked => self.game.reset(),
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let event = egui::CentralPanel::default()
            .show(ctx, |ui| self.view.borrow().show(ui))
            .inner;

        if let Some(event) = event {
            self.dispatch(event);
        }
    }
}

pub fn run_gui(config: ViewConfig) -> Result<(), String> {
    let window = config.window.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window.title.clone())
            .with_inner_size([window.width, window.height])
            .with_resizable(window.resizable)
            .with_icon(Arc::new(window_icon())),
        ..Default::default()
    };

    log!("Starting GUI frontend");
    eframe::run_native(
        "tictactoe",
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(config)))),
    )
    .map_err(|e| format!("Failed to start GUI: {}", e))
}

/// Runs the GUI wiring against the headless view: builds the engine,
/// attaches the view, logs the rendered state and returns. Used to
/// validate the render path on machines without a display.
pub fn run_headless(config: ViewConfig) -> Result<(), String> {
    let mut game = TicTacToeGame::new();
    let view = Rc::new(RefCell::new(HeadlessGameView::new(&config)));
    attach_view(&mut game, &view);

    let view = view.borrow();
    log!("Headless view ready: {}", view.status_text());
    log!("Reset control labeled '{}'", view.reset_label());
    Ok(())
}

fn color32(value: &Option<String>) -> Option<Color32> {
    value
        .as_deref()
        .and_then(parse_color)
        .map(|(red, green, blue)| Color32::from_rgb(red, green, blue))
}

fn themed(label: RichText, color: &Option<String>) -> RichText {
    match color32(color) {
        Some(color) => label.color(color),
        None => label,
    }
}

/// 32x32 RGBA board glyph used as the window icon; synthesized here so
/// the binary carries no asset files.
fn window_icon() -> egui::IconData {
    const SIZE: usize = 32;
    const BACKGROUND: [u8; 4] = [245, 245, 245, 255];
    const LINE: [u8; 4] = [30, 60, 120, 255];

    let mut rgba = Vec::with_capacity(SIZE * SIZE * 4);
    for y in 0..SIZE {
        for x in 0..SIZE {
            // Two vertical and two horizontal grid lines at the thirds.
            let on_line = [10, 11, 20, 21].contains(&x) || [10, 11, 20, 21].contains(&y);
            let pixel = if on_line { LINE } else { BACKGROUND };
            rgba.extend_from_slice(&pixel);
        }
    }

    egui::IconData {
        rgba,
        width: SIZE as u32,
        height: SIZE as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_view(moves: &[usize]) -> (TicTacToeGame, Rc<RefCell<WidgetGameView>>) {
        let mut game = TicTacToeGame::new();
        let view = Rc::new(RefCell::new(WidgetGameView::new(ViewConfig::default())));
        attach_view(&mut game, &view);
        for &position in moves {
            assert!(game.make_move(position));
        }
        (game, view)
    }

    #[test]
    fn test_unrendered_view_is_blank() {
        let view = WidgetGameView::new(ViewConfig::default());
        assert_eq!(view.cell_text(0), "");
        assert_eq!(view.cell_state(0), CellState::Normal);
        assert_eq!(view.status_text(), "");
    }

    #[test]
    fn test_occupied_cells_are_disabled() {
        let (_game, view) = rendered_view(&[4, 0]);
        let view = view.borrow();
        assert_eq!(view.cell_text(4), "X");
        assert_eq!(view.cell_state(4), CellState::Disabled);
        assert_eq!(view.cell_text(0), "O");
        assert_eq!(view.cell_state(0), CellState::Disabled);
        assert_eq!(view.cell_text(8), "");
        assert_eq!(view.cell_state(8), CellState::Normal);
    }

    #[test]
    fn test_status_follows_the_game() {
        let (mut game, view) = rendered_view(&[0, 3, 1, 4]);
        assert_eq!(view.borrow().status_text(), "Player X's turn");
        game.make_move(2);
        assert_eq!(view.borrow().status_text(), "Player X wins!");
    }

    #[test]
    fn test_empty_cells_stay_enabled_after_game_over() {
        // The engine rejects clicks once the game ends; the board itself
        // keeps empty cells clickable, matching the desktop behavior.
        let (_game, view) = rendered_view(&[0, 3, 1, 4, 2]);
        let view = view.borrow();
        assert_eq!(view.cell_state(8), CellState::Normal);
        assert_eq!(view.cell_state(2), CellState::Disabled);
    }

    #[test]
    fn test_configured_colors_resolve_to_color32() {
        assert_eq!(
            color32(&Some("#336699".to_string())),
            Some(Color32::from_rgb(51, 102, 153))
        );
        assert_eq!(color32(&None), None);
    }

    #[test]
    fn test_window_icon_dimensions_match_buffer() {
        let icon = window_icon();
        assert_eq!(icon.rgba.len(), (icon.width * icon.height * 4) as usize);
    }
}

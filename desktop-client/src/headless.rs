use crate::view::{status_message, CellState, GameView};
use crate::view_config::{TextConfig, ViewConfig};
use common::GameSnapshot;

#[derive(Debug, Clone)]
struct HeadlessCell {
    text: String,
    state: CellState,
}

impl HeadlessCell {
    fn empty() -> Self {
        Self {
            text: String::new(),
            state: CellState::Normal,
        }
    }
}

/// In-memory `GameView` that mirrors the egui frontend's rendering rules
/// without a windowing system; used by tests and the `headless` frontend.
pub struct HeadlessGameView {
    cells: Vec<HeadlessCell>,
    status_text: String,
    reset_label: String,
    text: TextConfig,
}

impl HeadlessGameView {
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            cells: (0..9).map(|_| HeadlessCell::empty()).collect(),
            status_text: String::new(),
            reset_label: config.text.reset_button.clone(),
            text: config.text.clone(),
        }
    }
}

impl GameView for HeadlessGameView {
    fn render(&mut self, snapshot: &GameSnapshot) {
        for (position, cell) in snapshot.board.iter().enumerate() {
            self.cells[position] = match cell {
                Some(mark) => HeadlessCell {
                    text: mark.to_string(),
                    state: CellState::Disabled,
                },
                None => HeadlessCell::empty(),
            };
        }
        self.status_text = status_message(&self.text, snapshot);
    }

    fn cell_text(&self, position: usize) -> String {
        self.cells[position].text.clone()
    }

    fn cell_state(&self, position: usize) -> CellState {
        self.cells[position].state
    }

    fn status_text(&self) -> String {
        self.status_text.clone()
    }

    fn reset_label(&self) -> String {
        self.reset_label.clone()
    }
}

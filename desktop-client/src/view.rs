use crate::view_config::TextConfig;
use common::{GameSnapshot, GameStatus, ListenerId, TicTacToeGame};
use std::cell::RefCell;
use std::rc::Rc;

/// Interactivity of a board cell: empty cells accept clicks, occupied
/// cells do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Normal,
    Disabled,
}

/// Render surface shared by the egui and headless frontends. Everything
/// a frontend shows is derivable from the latest snapshot plus the
/// configured texts, so tests can inspect any implementation the same way.
pub trait GameView {
    fn render(&mut self, snapshot: &GameSnapshot);
    fn cell_text(&self, position: usize) -> String;
    fn cell_state(&self, position: usize) -> CellState;
    fn status_text(&self) -> String;
    fn reset_label(&self) -> String;
}

/// Renders the current snapshot into the view and subscribes it to every
/// future engine mutation.
pub fn attach_view<V>(game: &mut TicTacToeGame, view: &Rc<RefCell<V>>) -> ListenerId
where
    V: GameView + 'static,
{
    view.borrow_mut().render(&game.snapshot());
    let listener_view = Rc::clone(view);
    game.add_listener(move |snapshot| listener_view.borrow_mut().render(snapshot))
}

pub fn status_message(text: &TextConfig, snapshot: &GameSnapshot) -> String {
    match snapshot.status {
        GameStatus::InProgress => text
            .turn_message_template
            .replace("{player}", &snapshot.current_mark.to_string()),
        GameStatus::Draw => text.draw_message.clone(),
        GameStatus::XWon | GameStatus::OWon => {
            let winner = snapshot
                .winner
                .map(|mark| mark.to_string())
                .unwrap_or_else(|| "?".to_string());
            text.win_message_template.replace("{winner}", &winner)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Mark;

    fn snapshot_with(status: GameStatus, current_mark: Mark, winner: Option<Mark>) -> GameSnapshot {
        GameSnapshot {
            board: [None; 9],
            current_mark,
            status,
            winner,
        }
    }

    #[test]
    fn test_turn_message_uses_current_mark() {
        let text = TextConfig::default();
        let snapshot = snapshot_with(GameStatus::InProgress, Mark::O, None);
        assert_eq!(status_message(&text, &snapshot), "Player O's turn");
    }

    #[test]
    fn test_draw_message() {
        let text = TextConfig::default();
        let snapshot = snapshot_with(GameStatus::Draw, Mark::X, None);
        assert_eq!(status_message(&text, &snapshot), "It's a draw!");
    }

    #[test]
    fn test_win_message_names_winner() {
        let text = TextConfig::default();
        let snapshot = snapshot_with(GameStatus::XWon, Mark::X, Some(Mark::X));
        assert_eq!(status_message(&text, &snapshot), "Player X wins!");
    }

    #[test]
    fn test_custom_templates_apply() {
        let text = TextConfig {
            turn_message_template: "{player} to move".to_string(),
            win_message_template: "{winner} takes the board".to_string(),
            ..TextConfig::default()
        };
        let turn = snapshot_with(GameStatus::InProgress, Mark::X, None);
        assert_eq!(status_message(&text, &turn), "X to move");
        let win = snapshot_with(GameStatus::OWon, Mark::O, Some(Mark::O));
        assert_eq!(status_message(&text, &win), "O takes the board");
    }
}

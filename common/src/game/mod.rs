mod game_state;
mod types;
mod win_detector;

pub use game_state::TicTacToeGame;
pub use types::{Board, Cell, GameSnapshot, GameStatus, ListenerId, Mark, BOARD_CELLS};
pub use win_detector::check_win;

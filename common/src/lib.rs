pub mod config;
pub mod game;
pub mod logger;

pub use game::{Board, Cell, GameSnapshot, GameStatus, ListenerId, Mark, TicTacToeGame};

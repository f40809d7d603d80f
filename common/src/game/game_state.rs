use super::types::{Board, GameSnapshot, GameStatus, ListenerId, Mark, BOARD_CELLS};
use super::win_detector::check_win;

type Listener = Box<dyn FnMut(&GameSnapshot)>;

/// The game engine: board, turn and status, plus a list of observers
/// notified after every mutation.
///
/// Single-threaded by design. `make_move` and `reset` run to completion
/// including listener notification before returning; callers that need
/// parallelism must serialize access externally.
pub struct TicTacToeGame {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl TicTacToeGame {
    pub fn new() -> Self {
        Self {
            board: [None; BOARD_CELLS],
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The winning mark, derived from status only.
    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            current_mark: self.current_mark,
            status: self.status,
            winner: self.winner(),
        }
    }

    /// Places the current player's mark at `position` (0-8, row-major).
    ///
    /// Returns `false` without mutating or notifying when the position is
    /// out of range, the cell is occupied, or the game is already over.
    /// On success the turn flips only if the game is still in progress,
    /// and every listener receives the new snapshot.
    pub fn make_move(&mut self, position: usize) -> bool {
        if self.status != GameStatus::InProgress {
            return false;
        }

        if position >= BOARD_CELLS {
            return false;
        }

        if self.board[position].is_some() {
            return false;
        }

        self.board[position] = Some(self.current_mark);
        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.current_mark = self.current_mark.opponent();
        }

        self.notify_listeners();

        true
    }

    /// Returns the game to its initial state without dropping listeners.
    /// Always notifies, even when nothing had been played yet.
    pub fn reset(&mut self) {
        self.board = [None; BOARD_CELLS];
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.notify_listeners();
    }

    /// Registers an observer invoked with a snapshot after every
    /// successful `make_move` and every `reset`, in registration order.
    /// Each call creates an independent subscription, so registering the
    /// same logical callback twice doubles its notifications.
    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&GameSnapshot) + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes the subscription with the given handle. Unknown handles
    /// are ignored.
    pub fn remove_listener(&mut self, id: ListenerId) {
        if let Some(index) = self.listeners.iter().position(|(entry, _)| *entry == id) {
            self.listeners.remove(index);
        }
    }

    fn check_game_over(&mut self) {
        if let Some(winner_mark) = check_win(&self.board) {
            self.status = match winner_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
            };
            return;
        }

        if self.board.iter().all(|cell| cell.is_some()) {
            self.status = GameStatus::Draw;
        }
    }

    fn notify_listeners(&mut self) {
        if self.listeners.is_empty() {
            return;
        }

        let snapshot = self.snapshot();
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }
}

impl Default for TicTacToeGame {
    fn default() -> Self {
        Self::new()
    }
}

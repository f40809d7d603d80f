use super::types::{Board, Mark};

const ROWS: [[usize; 3]; 3] = [[0, 1, 2], [3, 4, 5], [6, 7, 8]];
const COLUMNS: [[usize; 3]; 3] = [[0, 3, 6], [1, 4, 7], [2, 5, 8]];
const DIAGONALS: [[usize; 3]; 2] = [[0, 4, 8], [2, 4, 6]];

/// Returns the mark holding a complete line, if any. Rows are checked
/// first, then columns, then diagonals; after a legal move at most one
/// line can be complete, but the function tolerates arbitrary boards.
pub fn check_win(board: &Board) -> Option<Mark> {
    check_lines(board, &ROWS)
        .or_else(|| check_lines(board, &COLUMNS))
        .or_else(|| check_lines(board, &DIAGONALS))
}

fn check_lines(board: &Board, lines: &[[usize; 3]]) -> Option<Mark> {
    for line in lines {
        if let Some(mark) = board[line[0]]
            && board[line[1]] == Some(mark)
            && board[line[2]] == Some(mark)
        {
            return Some(mark);
        }
    }
    None
}

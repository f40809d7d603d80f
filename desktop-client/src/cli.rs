use common::{GameSnapshot, GameStatus, TicTacToeGame};
use std::io::{self, BufRead, Write};

const QUIT_COMMANDS: [&str; 3] = ["q", "quit", "exit"];

/// Runs the console frontend: scripted when `script` is given, otherwise
/// an interactive prompt loop. Script errors are fatal for the caller.
pub fn run(script: Option<&str>, quiet: bool) -> Result<(), String> {
    let mut game = TicTacToeGame::new();
    match script {
        Some(script) => run_script(&mut game, script, quiet),
        None => {
            interactive_session(&mut game);
            Ok(())
        }
    }
}

fn run_script(game: &mut TicTacToeGame, script: &str, quiet: bool) -> Result<(), String> {
    let moves = parse_script(script)?;
    for position in moves {
        if !game.make_move(position) {
            return Err(format!(
                "Move {} is invalid for the current board state.",
                position
            ));
        }
    }
    if !quiet {
        print_snapshot(&game.snapshot());
    }
    Ok(())
}

fn parse_script(script: &str) -> Result<Vec<usize>, String> {
    let tokens: Vec<&str> = script
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err("Script must contain at least one move.".to_string());
    }

    tokens
        .iter()
        .map(|token| match token.parse::<i64>() {
            Ok(value) if (0..=8).contains(&value) => Ok(value as usize),
            Ok(_) => Err("Moves must be between 0 and 8.".to_string()),
            Err(_) => Err(format!("Invalid move token '{}'.", token)),
        })
        .collect()
}

fn interactive_session(game: &mut TicTacToeGame) {
    println!("Press Q to quit at any time.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while game.status() == GameStatus::InProgress {
        print_snapshot(&game.snapshot());
        print!("Player {}, choose a cell (0-8): ", game.current_mark());
        let _ = io::stdout().flush();

        let Some(Ok(line)) = lines.next() else {
            // Stdin closed; treat like a quit.
            println!();
            return;
        };
        let input = line.trim();

        if QUIT_COMMANDS.contains(&input.to_lowercase().as_str()) {
            println!("Exiting CLI - goodbye!");
            return;
        }

        let Ok(position) = input.parse::<i64>() else {
            println!("Please enter a number between 0 and 8, or Q to quit.");
            continue;
        };

        if !apply_move(game, position) {
            println!("Move rejected - cell occupied or out of range. Try again.");
        }
    }

    print_snapshot(&game.snapshot());
}

/// Plays a signed position so negative input gets the same rejection as
/// any other illegal move.
fn apply_move(game: &mut TicTacToeGame, position: i64) -> bool {
    usize::try_from(position).is_ok_and(|position| game.make_move(position))
}

fn print_snapshot(snapshot: &GameSnapshot) {
    println!("{}", format_board(snapshot));
    println!("{}", format_state_line(snapshot));
}

/// Three rows of "mark-or-index" cells joined by dashes, e.g.
/// `X | 1 | O`.
fn format_board(snapshot: &GameSnapshot) -> String {
    let mut rows = Vec::with_capacity(3);
    for base in [0, 3, 6] {
        let cells: Vec<String> = (base..base + 3)
            .map(|index| match snapshot.board[index] {
                Some(mark) => mark.to_string(),
                None => index.to_string(),
            })
            .collect();
        rows.push(cells.join(" | "));
    }
    rows.join("\n---------\n")
}

fn format_state_line(snapshot: &GameSnapshot) -> String {
    match snapshot.status {
        GameStatus::InProgress => format!("Next player: {}", snapshot.current_mark),
        GameStatus::Draw => "Result: draw.".to_string(),
        GameStatus::XWon | GameStatus::OWon => {
            let winner = snapshot
                .winner
                .map(|mark| mark.to_string())
                .unwrap_or_else(|| "?".to_string());
            format!("Winner: {}", winner)
        }
    }
}

//! Plain-text board rendering for the terminal.

use veiled_tictactoe::{BOARD_SIZE, Board, EvalResult, Line, Mark, Square, is_outer_zone};

/// Renders the board with row and column numbers.
///
/// Until the outer grid is revealed, empty outer cells are left blank so
/// only the middle 3x3 reads as the playing field.
pub fn render_board(board: &Board, revealed: bool) -> String {
    let mut out = String::from("   ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!(" {col}"));
    }
    out.push('\n');

    for row in 0..BOARD_SIZE {
        out.push_str(&format!(" {row} "));
        for col in 0..BOARD_SIZE {
            let index = row * BOARD_SIZE + col;
            let symbol = match board.get(index) {
                Some(Square::Occupied(mark)) => mark.to_string(),
                _ if !revealed && is_outer_zone(index) => " ".to_string(),
                _ => ".".to_string(),
            };
            out.push(' ');
            out.push_str(&symbol);
        }
        out.push('\n');
    }
    out
}

/// Describes how a finished game ended from the human's point of view.
pub fn result_message(status: &EvalResult, human_mark: Mark) -> String {
    match status {
        EvalResult::Won { mark, line } if *mark == human_mark => {
            format!("You win! {}", describe_line(line))
        }
        EvalResult::Won { line, .. } => format!("CPU wins! {}", describe_line(line)),
        EvalResult::Draw => "Draw!".to_string(),
        EvalResult::Ongoing => "Game in progress".to_string(),
    }
}

fn describe_line(line: &Line) -> String {
    let cells: Vec<String> = line
        .cells()
        .iter()
        .map(|&i| format!("({}, {})", i / BOARD_SIZE, i % BOARD_SIZE))
        .collect();
    format!("Line: {}", cells.join(" "))
}

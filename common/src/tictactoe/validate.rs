use super::board::{Board, count_marks, empty_board};
use super::game_state::GameState;
use super::types::{BOARD_CELLS, Mark, Side};
use super::win_detector::{check_win, has_line};

/// Parses a row-major position such as `XX.OO....` into a game state.
///
/// Empty cells may be written as `.`, `-`, `_` or a space. The winner is
/// recomputed from the whole board.
pub fn parse_board(text: &str) -> Result<GameState, String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != BOARD_CELLS {
        return Err(format!(
            "Board must have exactly {} cells, got {}",
            BOARD_CELLS,
            chars.len()
        ));
    }

    let mut board = empty_board();
    for (square, ch) in chars.into_iter().enumerate() {
        board[square] = match ch {
            'X' | 'x' => Mark::X,
            'O' | 'o' => Mark::O,
            '.' | '-' | '_' | ' ' => Mark::Empty,
            other => return Err(format!("Unexpected character '{}' at square {}", other, square)),
        };
    }

    validate_position(&board)?;

    Ok(GameState::from_parts(board, check_win(&board)))
}

pub fn validate_position(board: &Board) -> Result<(), String> {
    let x_count = count_marks(board, Mark::X);
    let o_count = count_marks(board, Mark::O);
    if x_count.abs_diff(o_count) > 1 {
        return Err(format!(
            "Mark counts are unbalanced: {} X and {} O",
            x_count, o_count
        ));
    }
    if has_line(board, Mark::X) && has_line(board, Mark::O) {
        return Err("Both players have three in a row".to_string());
    }
    Ok(())
}

/// Side to move in a parsed position. X moves first unless O is already ahead.
pub fn infer_side_to_move(board: &Board) -> Side {
    if count_marks(board, Mark::X) > count_marks(board, Mark::O) {
        Side::Minimizer
    } else {
        Side::Maximizer
    }
}

use super::board::Board;
use super::types::{BOARD_WIDTH, Mark, Move};

pub const WINNING_LINES: [[Move; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

const MAIN_DIAGONAL: [Move; 3] = [0, 4, 8];
const ANTI_DIAGONAL: [Move; 3] = [2, 4, 6];

/// Checks whether the mark just placed at `square` completed a line.
///
/// Only the lines through `square` are inspected. Diagonals are tested for
/// even squares only: on a 3x3 row-major board every diagonal cell has an even
/// index. That holds only because this runs after every single placement; it is
/// not a general diagonal test.
pub fn check_win_at(board: &Board, square: Move, mark: Mark) -> bool {
    let row = square / BOARD_WIDTH;
    let row_start = row * BOARD_WIDTH;
    if board[row_start..row_start + BOARD_WIDTH]
        .iter()
        .all(|&cell| cell == mark)
    {
        return true;
    }

    let col = square % BOARD_WIDTH;
    if (0..BOARD_WIDTH).all(|i| board[col + i * BOARD_WIDTH] == mark) {
        return true;
    }

    if square % 2 == 0 {
        if line_is(board, &MAIN_DIAGONAL, mark) {
            return true;
        }
        if line_is(board, &ANTI_DIAGONAL, mark) {
            return true;
        }
    }

    false
}

/// Full scan over all eight lines. Used for positions that were not built move by move.
pub fn check_win(board: &Board) -> Option<Mark> {
    for mark in [Mark::X, Mark::O] {
        if WINNING_LINES.iter().any(|line| line_is(board, line, mark)) {
            return Some(mark);
        }
    }
    None
}

pub fn has_line(board: &Board, mark: Mark) -> bool {
    WINNING_LINES.iter().any(|line| line_is(board, line, mark))
}

fn line_is(board: &Board, line: &[Move; 3], mark: Mark) -> bool {
    line.iter().all(|&square| board[square] == mark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::board::empty_board;

    fn board_with(marks: &[(Move, Mark)]) -> Board {
        let mut board = empty_board();
        for &(square, mark) in marks {
            board[square] = mark;
        }
        board
    }

    #[test]
    fn test_row_win_detected_from_any_cell_of_row() {
        let board = board_with(&[(3, Mark::O), (4, Mark::O), (5, Mark::O)]);
        for square in [3, 4, 5] {
            assert!(check_win_at(&board, square, Mark::O));
        }
        assert!(!check_win_at(&board, 0, Mark::O));
    }

    #[test]
    fn test_column_win_detected() {
        let board = board_with(&[(1, Mark::X), (4, Mark::X), (7, Mark::X)]);
        assert!(check_win_at(&board, 7, Mark::X));
        assert!(!check_win_at(&board, 7, Mark::O));
    }

    #[test]
    fn test_diagonals_only_checked_for_even_squares() {
        let board = board_with(&[(0, Mark::X), (4, Mark::X), (8, Mark::X)]);
        assert!(check_win_at(&board, 8, Mark::X));
        assert!(check_win_at(&board, 0, Mark::X));
        // Square 1 shares no line with the diagonal and is odd, so it never looks there.
        assert!(!check_win_at(&board, 1, Mark::X));

        let board = board_with(&[(2, Mark::O), (4, Mark::O), (6, Mark::O)]);
        assert!(check_win_at(&board, 6, Mark::O));
        assert!(!check_win_at(&board, 5, Mark::O));
    }

    #[test]
    fn test_full_scan_matches_lines() {
        assert_eq!(check_win(&empty_board()), None);
        for line in WINNING_LINES {
            let board = board_with(&[(line[0], Mark::O), (line[1], Mark::O), (line[2], Mark::O)]);
            assert_eq!(check_win(&board), Some(Mark::O));
            assert!(has_line(&board, Mark::O));
            assert!(!has_line(&board, Mark::X));
        }
    }

    #[test]
    fn test_every_line_detected_from_each_of_its_cells() {
        for line in WINNING_LINES {
            let board = board_with(&[(line[0], Mark::X), (line[1], Mark::X), (line[2], Mark::X)]);
            for square in line {
                assert!(check_win_at(&board, square, Mark::X), "line {:?} from {}", line, square);
            }
        }
    }
}

use super::types::{BOARD_CELLS, BOARD_WIDTH, Mark, Move};

pub type Board = [Mark; BOARD_CELLS];

pub fn empty_board() -> Board {
    [Mark::Empty; BOARD_CELLS]
}

/// Empty cells in ascending index order. Search tie-breaking depends on this order.
pub fn get_available_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(BOARD_CELLS);
    for (square, &cell) in board.iter().enumerate() {
        if cell == Mark::Empty {
            moves.push(square);
        }
    }
    moves
}

pub fn count_marks(board: &Board, mark: Mark) -> usize {
    board.iter().filter(|&&cell| cell == mark).count()
}

pub fn is_board_full(board: &Board) -> bool {
    board.iter().all(|&cell| cell != Mark::Empty)
}

pub fn board_rows(board: &Board) -> impl Iterator<Item = &[Mark]> {
    board.chunks(BOARD_WIDTH)
}

/// Compact row-major form, `.` for empty cells, e.g. `XX.OO....`.
pub fn format_board(board: &Board) -> String {
    board
        .iter()
        .map(|&cell| match cell {
            Mark::Empty => '.',
            mark => mark.to_char(),
        })
        .collect()
}

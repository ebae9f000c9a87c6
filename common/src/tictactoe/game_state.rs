use super::board::{Board, count_marks, empty_board, get_available_moves, is_board_full};
use super::types::{BOARD_CELLS, GameStatus, Mark, Move};
use super::win_detector::check_win_at;

/// Board plus the winner of the game, if any.
///
/// The search mutates this in place and undoes every placement before it
/// returns, so a state handed to it comes back unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) winner: Option<Mark>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: empty_board(),
            winner: None,
        }
    }

    pub(crate) fn from_parts(board: Board, winner: Option<Mark>) -> Self {
        Self { board, winner }
    }

    pub fn reset(&mut self) {
        self.board = empty_board();
        self.winner = None;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, square: Move) -> Option<Mark> {
        self.board.get(square).copied()
    }

    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    pub fn available_moves(&self) -> Vec<Move> {
        get_available_moves(&self.board)
    }

    pub fn is_full(&self) -> bool {
        is_board_full(&self.board)
    }

    pub fn has_empty_squares(&self) -> bool {
        !self.is_full()
    }

    pub fn num_empty_squares(&self) -> usize {
        count_marks(&self.board, Mark::Empty)
    }

    pub fn occupied_squares(&self) -> usize {
        BOARD_CELLS - self.num_empty_squares()
    }

    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(Mark::X) => GameStatus::XWon,
            Some(Mark::O) => GameStatus::OWon,
            _ if self.is_full() => GameStatus::Draw,
            _ => GameStatus::InProgress,
        }
    }

    /// Places `mark` at `square` if that cell is empty and records a winner if
    /// the placement completed a line. Returns `false` and leaves the state
    /// untouched when the cell is occupied or `square` is off the board.
    pub fn apply_move(&mut self, square: Move, mark: Mark) -> bool {
        if mark == Mark::Empty {
            return false;
        }
        match self.board.get(square) {
            Some(Mark::Empty) => {}
            _ => return false,
        }

        self.board[square] = mark;
        if check_win_at(&self.board, square, mark) {
            self.winner = Some(mark);
        }
        true
    }

    /// Clears `square` and the winner. Only for undoing this caller's own
    /// `apply_move`, in reverse order of application.
    pub fn undo_move(&mut self, square: Move) {
        self.board[square] = Mark::Empty;
        self.winner = None;
    }
}

mod board;
mod bot_controller;
mod game_state;
mod self_play;
mod session;
mod settings;
mod types;
mod validate;
mod win_detector;

pub use board::{
    Board, board_rows, count_marks, empty_board, format_board, get_available_moves, is_board_full,
};
pub use bot_controller::{
    Pruning, SearchStats, best_move, best_move_for, best_move_with_stats, evaluate_terminal,
    minimax, move_scores, move_scores_with, search_with,
};
pub use game_state::GameState;
pub use self_play::{SelfPlayRecord, self_play};
pub use session::{AiMove, TicTacToeSession};
pub use settings::{FirstPlayerMode, TicTacToeSessionSettings};
pub use types::{BOARD_CELLS, BOARD_WIDTH, GameStatus, Mark, Move, Score, Side};
pub use validate::{infer_side_to_move, parse_board, validate_position};
pub use win_detector::{WINNING_LINES, check_win, check_win_at, has_line};

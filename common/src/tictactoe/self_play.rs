use super::bot_controller::{SearchStats, best_move_with_stats};
use super::game_state::GameState;
use super::types::{GameStatus, Move, Side};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelfPlayRecord {
    pub moves: Vec<(Side, Move)>,
    pub status: GameStatus,
    pub stats: SearchStats,
}

/// Plays optimal against optimal from `state` with `side` to move until the game ends.
pub fn self_play(mut state: GameState, mut side: Side) -> SelfPlayRecord {
    let mut moves = Vec::new();
    let mut stats = SearchStats::default();

    while !state.status().is_over() {
        let Some((square, _)) = best_move_with_stats(&mut state, side, &mut stats) else {
            break;
        };
        state.apply_move(square, side.mark());
        moves.push((side, square));
        side = side.opponent();
    }

    SelfPlayRecord {
        moves,
        status: state.status(),
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::bot_controller::minimax;
    use crate::tictactoe::types::{Mark, Score};
    use crate::tictactoe::validate::parse_board;

    #[test]
    fn test_optimal_play_from_empty_board_is_draw() {
        for first in [Side::Maximizer, Side::Minimizer] {
            let record = self_play(GameState::new(), first);
            assert_eq!(record.status, GameStatus::Draw);
            assert_eq!(record.moves.len(), 9);
            assert_eq!(record.moves[0], (first, 0));
        }
    }

    #[test]
    fn test_optimal_play_after_every_opening_is_draw() {
        for opening in 0..9 {
            let mut state = GameState::new();
            state.apply_move(opening, Mark::X);
            let record = self_play(state, Side::Minimizer);
            assert_eq!(record.status, GameStatus::Draw, "opening {}", opening);
        }
    }

    #[test]
    fn test_self_play_outcome_matches_position_value() {
        for position in ["X.O......", "XO.......", "X...O...X", "XX.OO....", ".X.OX...."] {
            let mut state = parse_board(position).unwrap();
            let side = crate::tictactoe::validate::infer_side_to_move(state.board());
            let value = minimax(&mut state, side, Score::MIN, Score::MAX);
            let record = self_play(state, side);
            assert_eq!(record.status.score(), Some(value), "position {}", position);
        }
    }

    #[test]
    fn test_self_play_on_finished_game_makes_no_moves() {
        let state = parse_board("XXXOO....").unwrap();
        let record = self_play(state, Side::Minimizer);
        assert!(record.moves.is_empty());
        assert_eq!(record.status, GameStatus::XWon);
    }
}

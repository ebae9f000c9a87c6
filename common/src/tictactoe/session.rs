use super::bot_controller::{SearchStats, best_move_with_stats};
use super::game_state::GameState;
use super::settings::{FirstPlayerMode, TicTacToeSessionSettings};
use super::types::{BOARD_CELLS, GameStatus, Move, Score, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AiMove {
    pub square: Move,
    pub score: Score,
    pub stats: SearchStats,
}

/// One game between the AI and a human: turn order, validated placements and
/// the move history.
#[derive(Debug)]
pub struct TicTacToeSession {
    state: GameState,
    ai_side: Side,
    first_player_mode: FirstPlayerMode,
    first_side: Side,
    current_side: Side,
    history: Vec<(Side, Move)>,
}

impl TicTacToeSession {
    pub fn new(settings: &TicTacToeSessionSettings) -> Self {
        let first_side = settings.first_player_mode.resolve(settings.ai_side);
        Self {
            state: GameState::new(),
            ai_side: settings.ai_side,
            first_player_mode: settings.first_player_mode,
            first_side,
            current_side: first_side,
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn ai_side(&self) -> Side {
        self.ai_side
    }

    pub fn human_side(&self) -> Side {
        self.ai_side.opponent()
    }

    pub fn first_side(&self) -> Side {
        self.first_side
    }

    pub fn current_side(&self) -> Side {
        self.current_side
    }

    pub fn is_ai_turn(&self) -> bool {
        self.current_side == self.ai_side
    }

    pub fn history(&self) -> &[(Side, Move)] {
        &self.history
    }

    pub fn place_mark(&mut self, side: Side, square: Move) -> Result<(), String> {
        if self.status().is_over() {
            return Err("Game is already over".to_string());
        }

        if side != self.current_side {
            return Err("Not your turn".to_string());
        }

        if square >= BOARD_CELLS {
            return Err("Position out of bounds".to_string());
        }

        if !self.state.apply_move(square, side.mark()) {
            return Err("Cell is already marked".to_string());
        }

        self.history.push((side, square));

        if !self.status().is_over() {
            self.current_side = side.opponent();
        }

        Ok(())
    }

    pub fn play_ai_turn(&mut self) -> Result<AiMove, String> {
        if !self.is_ai_turn() {
            return Err("Not the AI's turn".to_string());
        }
        if self.status().is_over() {
            return Err("Game is already over".to_string());
        }

        let mut stats = SearchStats::default();
        let (square, score) = best_move_with_stats(&mut self.state, self.ai_side, &mut stats)
            .ok_or_else(|| "No moves available".to_string())?;

        self.place_mark(self.ai_side, square)?;

        Ok(AiMove {
            square,
            score,
            stats,
        })
    }

    /// Starts a fresh game with the same sides. A random first player is drawn again.
    pub fn reset(&mut self) {
        self.state.reset();
        self.first_side = self.first_player_mode.resolve(self.ai_side);
        self.current_side = self.first_side;
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::types::Mark;

    fn session(mode: FirstPlayerMode) -> TicTacToeSession {
        TicTacToeSession::new(&TicTacToeSessionSettings::from(mode))
    }

    #[test]
    fn test_ai_opens_in_corner() {
        let mut session = session(FirstPlayerMode::Ai);
        assert!(session.is_ai_turn());
        let ai_move = session.play_ai_turn().unwrap();
        assert_eq!(ai_move.square, 0);
        assert_eq!(ai_move.score, 0);
        assert!(ai_move.stats.nodes > 0);
        assert_eq!(session.state().cell(0), Some(Mark::X));
        assert_eq!(session.current_side(), Side::Minimizer);
    }

    #[test]
    fn test_place_mark_rejects_wrong_turn() {
        let mut session = session(FirstPlayerMode::Ai);
        let err = session.place_mark(Side::Minimizer, 4).unwrap_err();
        assert_eq!(err, "Not your turn");
    }

    #[test]
    fn test_place_mark_rejects_occupied_and_out_of_bounds() {
        let mut session = session(FirstPlayerMode::Human);
        session.place_mark(Side::Minimizer, 4).unwrap();
        session.play_ai_turn().unwrap();
        assert_eq!(
            session.place_mark(Side::Minimizer, 4).unwrap_err(),
            "Cell is already marked"
        );
        assert_eq!(
            session.place_mark(Side::Minimizer, 9).unwrap_err(),
            "Position out of bounds"
        );
        assert_eq!(session.current_side(), Side::Minimizer);
    }

    #[test]
    fn test_ai_punishes_mistake() {
        let mut session = session(FirstPlayerMode::Ai);
        // X takes 0; O answers on an edge, which loses.
        session.play_ai_turn().unwrap();
        session.place_mark(Side::Minimizer, 1).unwrap();
        while !session.status().is_over() {
            if session.is_ai_turn() {
                session.play_ai_turn().unwrap();
            } else {
                let square = session.state().available_moves()[0];
                session.place_mark(Side::Minimizer, square).unwrap();
            }
        }
        assert_eq!(session.status(), GameStatus::XWon);
        assert!(session.place_mark(session.current_side(), 8).is_err());
    }

    #[test]
    fn test_play_ai_turn_rejected_on_human_turn() {
        let mut session = session(FirstPlayerMode::Human);
        assert!(session.play_ai_turn().is_err());
    }

    #[test]
    fn test_reset_keeps_first_player() {
        let mut session = session(FirstPlayerMode::Human);
        session.place_mark(Side::Minimizer, 0).unwrap();
        session.reset();
        assert_eq!(session.state(), &GameState::new());
        assert_eq!(session.current_side(), Side::Minimizer);
        assert!(session.history().is_empty());
    }
}

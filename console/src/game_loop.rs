use std::io::{BufRead, Write};
use tictactoe_common::log;
use tictactoe_common::tictactoe::{GameStatus, Side, TicTacToeSession};

use crate::input::parse_square;
use crate::render::{render_board, render_square_numbers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    AiWon,
    HumanWon,
    Tie,
    /// Input ended before the game did.
    Abandoned,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub ai_wins: u32,
    pub human_wins: u32,
    pub ties: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::AiWon => self.ai_wins += 1,
            GameOutcome::HumanWon => self.human_wins += 1,
            GameOutcome::Tie => self.ties += 1,
            GameOutcome::Abandoned => {}
        }
    }
}

pub struct GameLoopOptions {
    pub show_search_stats: bool,
}

fn io_err(e: std::io::Error) -> String {
    format!("Console I/O failed: {}", e)
}

fn outcome_for(status: GameStatus, ai_side: Side) -> Option<GameOutcome> {
    let winner = match status {
        GameStatus::InProgress => return None,
        GameStatus::Draw => return Some(GameOutcome::Tie),
        GameStatus::XWon => Side::Maximizer,
        GameStatus::OWon => Side::Minimizer,
    };
    if winner == ai_side {
        Some(GameOutcome::AiWon)
    } else {
        Some(GameOutcome::HumanWon)
    }
}

/// Plays one game on `session`, reading the human's squares from `input`.
pub fn run_game<R: BufRead, W: Write>(
    session: &mut TicTacToeSession,
    input: &mut R,
    output: &mut W,
    options: &GameLoopOptions,
) -> Result<GameOutcome, String> {
    writeln!(output, "Squares are numbered:").map_err(io_err)?;
    write!(output, "{}", render_square_numbers()).map_err(io_err)?;
    writeln!(
        output,
        "You play {}, the AI plays {}.",
        session.human_side().mark(),
        session.ai_side().mark()
    )
    .map_err(io_err)?;

    loop {
        if let Some(outcome) = outcome_for(session.status(), session.ai_side()) {
            let announcement = match outcome {
                GameOutcome::AiWon => "AI wins!",
                GameOutcome::HumanWon => "You win!",
                _ => "Tie game!",
            };
            writeln!(output, "{}", announcement).map_err(io_err)?;
            return Ok(outcome);
        }

        if session.is_ai_turn() {
            let ai_move = session.play_ai_turn()?;
            writeln!(output, "AI moved to square {}", ai_move.square).map_err(io_err)?;
            if options.show_search_stats {
                log!(
                    "AI chose square {} with score {} ({} nodes, {} cutoffs)",
                    ai_move.square,
                    ai_move.score,
                    ai_move.stats.nodes,
                    ai_move.stats.cutoffs
                );
            }
        } else {
            let Some(square) = read_human_move(session, input, output)? else {
                writeln!(output).map_err(io_err)?;
                return Ok(GameOutcome::Abandoned);
            };
            session.place_mark(session.human_side(), square)?;
        }

        write!(output, "{}", render_board(session.state().board())).map_err(io_err)?;
    }
}

/// Prompts until a legal square is entered. `None` on end of input.
fn read_human_move<R: BufRead, W: Write>(
    session: &TicTacToeSession,
    input: &mut R,
    output: &mut W,
) -> Result<Option<usize>, String> {
    loop {
        write!(output, "Enter your move (0-8): ").map_err(io_err)?;
        output.flush().map_err(io_err)?;

        let mut line = String::new();
        if input.read_line(&mut line).map_err(io_err)? == 0 {
            return Ok(None);
        }

        match parse_square(&line, session.state()) {
            Ok(square) => return Ok(Some(square)),
            Err(_) => writeln!(output, "Invalid square. Try again.").map_err(io_err)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_common::tictactoe::{FirstPlayerMode, TicTacToeSessionSettings};

    fn play(mode: FirstPlayerMode, typed: &str) -> (GameOutcome, String, TicTacToeSession) {
        let mut session = TicTacToeSession::new(&TicTacToeSessionSettings::from(mode));
        let mut input = Cursor::new(typed.as_bytes().to_vec());
        let mut output = Vec::new();
        let options = GameLoopOptions {
            show_search_stats: false,
        };
        let outcome = run_game(&mut session, &mut input, &mut output, &options).unwrap();
        (outcome, String::from_utf8(output).unwrap(), session)
    }

    #[test]
    fn test_ai_wins_against_weak_play() {
        // AI opens at 0; the human plays 1 then 2, AI wins along the first column.
        let (outcome, output, session) = play(FirstPlayerMode::Ai, "1\n2\n5\n7\n");
        assert_eq!(outcome, GameOutcome::AiWon);
        assert!(output.contains("AI moved to square 0"));
        assert!(output.ends_with("AI wins!\n"));
        assert_eq!(session.status(), GameStatus::XWon);
    }

    #[test]
    fn test_invalid_input_is_retried() {
        let (outcome, output, _) = play(FirstPlayerMode::Ai, "abc\n0\n42\n4\n");
        assert_eq!(outcome, GameOutcome::Abandoned);
        assert_eq!(output.matches("Invalid square. Try again.").count(), 3);
        assert!(output.contains("| X |   |   |\n|   | O |   |"));
    }

    #[test]
    fn test_end_of_input_abandons_game() {
        let (outcome, _, session) = play(FirstPlayerMode::Human, "");
        assert_eq!(outcome, GameOutcome::Abandoned);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_optimal_human_gets_a_tie() {
        // Human opens in the centre and follows the drawing line against the AI's replies.
        let mut session =
            TicTacToeSession::new(&TicTacToeSessionSettings::from(FirstPlayerMode::Human));
        let mut output = Vec::new();
        let options = GameLoopOptions {
            show_search_stats: false,
        };
        let mut typed = String::new();
        let mut shadow = session.state().clone();
        let mut side = session.first_side();
        // Precompute an optimal human line by letting the engine play both sides.
        while !shadow.status().is_over() {
            let square = tictactoe_common::tictactoe::best_move_for(&mut shadow, side)
                .expect("game in progress");
            shadow.apply_move(square, side.mark());
            if side == session.human_side() {
                typed.push_str(&format!("{}\n", square));
            }
            side = side.opponent();
        }
        let mut input = Cursor::new(typed.into_bytes());
        let outcome = run_game(&mut session, &mut input, &mut output, &options).unwrap();
        assert_eq!(outcome, GameOutcome::Tie);
        assert!(String::from_utf8(output).unwrap().ends_with("Tie game!\n"));
    }

    #[test]
    fn test_tally_records_outcomes() {
        let mut tally = Tally::default();
        tally.record(GameOutcome::AiWon);
        tally.record(GameOutcome::Tie);
        tally.record(GameOutcome::Abandoned);
        assert_eq!(
            tally,
            Tally {
                ai_wins: 1,
                human_wins: 0,
                ties: 1
            }
        );
    }
}

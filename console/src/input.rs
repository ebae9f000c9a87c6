use tictactoe_common::tictactoe::{GameState, Move};

/// Parses a line typed by the human into an available square.
pub fn parse_square(line: &str, state: &GameState) -> Result<Move, String> {
    let trimmed = line.trim();
    let square: Move = trimmed
        .parse()
        .map_err(|_| format!("'{}' is not a square number", trimmed))?;

    if !state.available_moves().contains(&square) {
        return Err(format!("Square {} is not available", square));
    }

    Ok(square)
}

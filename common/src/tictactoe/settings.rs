use serde::{Deserialize, Serialize};

use super::types::Side;

/// Who opens the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    #[default]
    Ai,
    Human,
    Random,
}

impl FirstPlayerMode {
    pub fn resolve(&self, ai_side: Side) -> Side {
        match self {
            FirstPlayerMode::Ai => ai_side,
            FirstPlayerMode::Human => ai_side.opponent(),
            FirstPlayerMode::Random => {
                if rand::random::<bool>() {
                    ai_side
                } else {
                    ai_side.opponent()
                }
            }
        }
    }
}

pub struct TicTacToeSessionSettings {
    pub ai_side: Side,
    pub first_player_mode: FirstPlayerMode,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            ai_side: Side::Maximizer,
            first_player_mode: FirstPlayerMode::default(),
        }
    }
}

impl From<FirstPlayerMode> for TicTacToeSessionSettings {
    fn from(first_player_mode: FirstPlayerMode) -> Self {
        Self {
            first_player_mode,
            ..Self::default()
        }
    }
}

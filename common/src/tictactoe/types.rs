use std::fmt;

pub const BOARD_WIDTH: usize = 3;
pub const BOARD_CELLS: usize = BOARD_WIDTH * BOARD_WIDTH;

/// Cell index in row-major order, `0..BOARD_CELLS`.
pub type Move = usize;

pub type Score = i32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn to_char(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The player about to move, in the search's scoring convention.
///
/// The maximizer always places X and the minimizer always places O, so a
/// score of +1 means X won no matter which side the AI is playing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Maximizer,
    Minimizer,
}

impl Side {
    pub fn mark(&self) -> Mark {
        match self {
            Side::Maximizer => Mark::X,
            Side::Minimizer => Mark::O,
        }
    }

    pub fn sign(&self) -> Score {
        match self {
            Side::Maximizer => 1,
            Side::Minimizer => -1,
        }
    }

    pub fn opponent(&self) -> Side {
        match self {
            Side::Maximizer => Side::Minimizer,
            Side::Minimizer => Side::Maximizer,
        }
    }

    pub fn from_mark(mark: Mark) -> Option<Side> {
        match mark {
            Mark::X => Some(Side::Maximizer),
            Mark::O => Some(Side::Minimizer),
            Mark::Empty => None,
        }
    }

    /// True when `candidate` is strictly better than `best` for this side.
    pub fn prefers(&self, candidate: Score, best: Score) -> bool {
        match self {
            Side::Maximizer => candidate > best,
            Side::Minimizer => candidate < best,
        }
    }

    /// The score this side starts from before any move has been examined.
    pub fn worst_score(&self) -> Score {
        match self {
            Side::Maximizer => Score::MIN,
            Side::Minimizer => Score::MAX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }

    pub fn score(&self) -> Option<Score> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::XWon => Some(1),
            GameStatus::OWon => Some(-1),
            GameStatus::Draw => Some(0),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::InProgress => "in progress",
            GameStatus::XWon => "X won",
            GameStatus::OWon => "O won",
            GameStatus::Draw => "draw",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_maps_to_mark_and_sign() {
        assert_eq!(Side::Maximizer.mark(), Mark::X);
        assert_eq!(Side::Minimizer.mark(), Mark::O);
        assert_eq!(Side::Maximizer.sign(), 1);
        assert_eq!(Side::Minimizer.sign(), -1);
        assert_eq!(Side::Maximizer.opponent(), Side::Minimizer);
        assert_eq!(Side::from_mark(Mark::O), Some(Side::Minimizer));
        assert_eq!(Side::from_mark(Mark::Empty), None);
    }

    #[test]
    fn test_prefers_is_strict() {
        assert!(Side::Maximizer.prefers(1, 0));
        assert!(!Side::Maximizer.prefers(0, 0));
        assert!(Side::Minimizer.prefers(-1, 0));
        assert!(!Side::Minimizer.prefers(0, 0));
        assert!(Side::Maximizer.prefers(-1, Side::Maximizer.worst_score()));
        assert!(Side::Minimizer.prefers(1, Side::Minimizer.worst_score()));
    }
}

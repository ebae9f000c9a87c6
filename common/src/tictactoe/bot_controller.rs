use super::game_state::GameState;
use super::types::{Move, Score, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pruning {
    Enabled,
    Disabled,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// +1 when X has won, -1 when O has won, 0 for a full board without a line.
pub fn evaluate_terminal(state: &GameState) -> Option<Score> {
    if let Some(side) = state.winner().and_then(Side::from_mark) {
        return Some(side.sign());
    }
    if state.is_full() { Some(0) } else { None }
}

/// Exact minimax value of `state` with `side` to move, searched with alpha-beta pruning.
pub fn minimax(state: &mut GameState, side: Side, alpha: Score, beta: Score) -> Score {
    let mut stats = SearchStats::default();
    search_with(state, side, alpha, beta, Pruning::Enabled, &mut stats)
}

pub fn search_with(
    state: &mut GameState,
    side: Side,
    mut alpha: Score,
    mut beta: Score,
    pruning: Pruning,
    stats: &mut SearchStats,
) -> Score {
    stats.nodes += 1;

    if let Some(score) = evaluate_terminal(state) {
        return score;
    }

    let mark = side.mark();
    let mut best = side.worst_score();

    for square in state.available_moves() {
        state.apply_move(square, mark);
        let eval = search_with(state, side.opponent(), alpha, beta, pruning, stats);
        state.undo_move(square);

        match side {
            Side::Maximizer => {
                best = best.max(eval);
                alpha = alpha.max(best);
            }
            Side::Minimizer => {
                best = best.min(eval);
                beta = beta.min(best);
            }
        }

        if pruning == Pruning::Enabled && beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    best
}

/// Root score of every legal move for `side`, in ascending move order. Empty
/// once the game is over.
pub fn move_scores(state: &mut GameState, side: Side) -> Vec<(Move, Score)> {
    let mut stats = SearchStats::default();
    move_scores_with(state, side, Pruning::Enabled, &mut stats)
}

pub fn move_scores_with(
    state: &mut GameState,
    side: Side,
    pruning: Pruning,
    stats: &mut SearchStats,
) -> Vec<(Move, Score)> {
    // Undoing a move clears the winner, so a finished game must not be touched.
    if evaluate_terminal(state).is_some() {
        return Vec::new();
    }

    let mark = side.mark();
    let mut scores = Vec::new();

    for square in state.available_moves() {
        state.apply_move(square, mark);
        let score = search_with(
            state,
            side.opponent(),
            Score::MIN,
            Score::MAX,
            pruning,
            stats,
        );
        state.undo_move(square);
        scores.push((square, score));
    }

    scores
}

/// Best move for X, the maximizing side. `None` once the game is over.
pub fn best_move(state: &mut GameState) -> Option<Move> {
    best_move_for(state, Side::Maximizer)
}

pub fn best_move_for(state: &mut GameState, side: Side) -> Option<Move> {
    let mut stats = SearchStats::default();
    best_move_with_stats(state, side, &mut stats).map(|(square, _)| square)
}

/// Picks the move with the strictly best root score for `side`; the lowest
/// index wins ties.
pub fn best_move_with_stats(
    state: &mut GameState,
    side: Side,
    stats: &mut SearchStats,
) -> Option<(Move, Score)> {
    let mut best: Option<(Move, Score)> = None;
    let mut best_score = side.worst_score();

    for (square, score) in move_scores_with(state, side, Pruning::Enabled, stats) {
        if best.is_none() || side.prefers(score, best_score) {
            best_score = score;
            best = Some((square, score));
        }
    }

    best
}

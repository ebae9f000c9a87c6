use std::io::Write;
use tictactoe_common::log;
use tictactoe_common::tictactoe::{
    GameState, Mark, Pruning, SearchStats, Side, best_move_with_stats, format_board,
    infer_side_to_move, move_scores_with, parse_board, self_play,
};

use crate::config::AnalysisConfig;
use crate::render::render_board;

fn io_err(e: std::io::Error) -> String {
    format!("Console I/O failed: {}", e)
}

fn starting_positions(
    from: Option<&str>,
    all_openings: bool,
) -> Result<Vec<(GameState, Side)>, String> {
    if let Some(text) = from {
        let state = parse_board(text)?;
        let side = infer_side_to_move(state.board());
        return Ok(vec![(state, side)]);
    }

    if all_openings {
        return Ok((0..9)
            .map(|square| {
                let mut state = GameState::new();
                state.apply_move(square, Mark::X);
                (state, Side::Minimizer)
            })
            .collect());
    }

    Ok(vec![(GameState::new(), Side::Maximizer)])
}

/// Optimal against optimal from one or more starting positions.
pub fn run_self_play<W: Write>(
    from: Option<&str>,
    all_openings: bool,
    output: &mut W,
) -> Result<(), String> {
    let positions = starting_positions(from, all_openings)?;
    let mut draws = 0;

    for (state, side) in positions {
        let start = format_board(state.board());
        let record = self_play(state, side);
        let moves: Vec<String> = record
            .moves
            .iter()
            .map(|(side, square)| format!("{}{}", side.mark(), square))
            .collect();

        writeln!(output, "{} -> {} [{}]", start, record.status, moves.join(" ")).map_err(io_err)?;
        log!(
            "Self-play from {} finished as {} after {} nodes",
            start,
            record.status,
            record.stats.nodes
        );

        if record.status.score() == Some(0) {
            draws += 1;
        }
    }

    writeln!(output, "{} game(s) drawn", draws).map_err(io_err)?;
    Ok(())
}

/// Scores every legal move of a position for the side to move.
pub fn run_analyze<W: Write>(
    board_text: &str,
    config: &AnalysisConfig,
    output: &mut W,
) -> Result<(), String> {
    let mut state = parse_board(board_text)?;
    write!(output, "{}", render_board(state.board())).map_err(io_err)?;

    if state.status().is_over() {
        writeln!(output, "Game is over: {}", state.status()).map_err(io_err)?;
        return Ok(());
    }

    let side = infer_side_to_move(state.board());
    writeln!(output, "{} to move", side.mark()).map_err(io_err)?;

    let mut pruned_stats = SearchStats::default();
    let scores = move_scores_with(&mut state, side, Pruning::Enabled, &mut pruned_stats);
    for (square, score) in scores {
        writeln!(output, "  square {}: {:+}", square, score).map_err(io_err)?;
    }

    let mut best_stats = SearchStats::default();
    if let Some((square, score)) = best_move_with_stats(&mut state, side, &mut best_stats) {
        writeln!(output, "Best move: {} (score {:+})", square, score).map_err(io_err)?;
    }

    if config.compare_unpruned {
        let mut full_stats = SearchStats::default();
        move_scores_with(&mut state, side, Pruning::Disabled, &mut full_stats);
        writeln!(
            output,
            "Nodes searched: {} with pruning, {} without",
            pruned_stats.nodes, full_stats.nodes
        )
        .map_err(io_err)?;
    }

    Ok(())
}

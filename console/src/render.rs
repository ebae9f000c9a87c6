use tictactoe_common::tictactoe::{Board, board_rows};

/// Three pipe-delimited rows, e.g. `| X | O |   |`.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in board_rows(board) {
        let cells: Vec<String> = row.iter().map(|mark| mark.to_string()).collect();
        out.push_str("| ");
        out.push_str(&cells.join(" | "));
        out.push_str(" |\n");
    }
    out
}

/// Square numbers laid out like the board, shown before the first prompt.
pub fn render_square_numbers() -> String {
    let mut out = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3).map(|col| (row * 3 + col).to_string()).collect();
        out.push_str("| ");
        out.push_str(&cells.join(" | "));
        out.push_str(" |\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::tictactoe::parse_board;

    #[test]
    fn test_render_board() {
        let state = parse_board("XO.......").unwrap();
        assert_eq!(
            render_board(state.board()),
            "| X | O |   |\n|   |   |   |\n|   |   |   |\n"
        );
    }

    #[test]
    fn test_render_square_numbers() {
        assert_eq!(
            render_square_numbers(),
            "| 0 | 1 | 2 |\n| 3 | 4 | 5 |\n| 6 | 7 | 8 |\n"
        );
    }
}

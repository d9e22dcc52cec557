// TicTacToe - core/rules.rs
//
// Win detection. Pure function over the nine cells, no side effects.

use crate::core::model::{Cell, Cells, Win, LINES};

/// Find the first completed line on the board.
///
/// Lines are checked rows first, then columns, then diagonals; the first
/// triple whose three cells hold the same mark wins. Returns `None` when no
/// line is complete.
pub fn find_winner(cells: &Cells) -> Option<Win> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line.cells();
        match cells[a] {
            Cell::Taken(player) if cells[b] == cells[a] && cells[c] == cells[a] => {
                Some(Win { player, line })
            }
            _ => None,
        }
    })
}

/// True when every cell holds a mark.
pub fn is_full(cells: &Cells) -> bool {
    cells.iter().all(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Player, WinningLine, CELL_COUNT};

    /// Build a board from a 9-char pattern: 'X', 'O', anything else empty.
    fn board(pattern: &str) -> Cells {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, ch) in pattern.chars().take(CELL_COUNT).enumerate() {
            cells[i] = match ch {
                'X' => Cell::Taken(Player::X),
                'O' => Cell::Taken(Player::O),
                _ => Cell::Empty,
            };
        }
        cells
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(find_winner(&board(".........")), None);
    }

    #[test]
    fn test_each_line_is_detected() {
        for line in LINES {
            let mut cells = [Cell::Empty; CELL_COUNT];
            for i in line.cells() {
                cells[i] = Cell::Taken(Player::O);
            }
            let win = find_winner(&cells).expect("line should win");
            assert_eq!(win.player, Player::O);
            assert_eq!(win.line, line);
        }
    }

    #[test]
    fn test_left_column_win() {
        let win = find_winner(&board("XOOX..X..")).unwrap();
        assert_eq!(win.player, Player::X);
        assert_eq!(win.line, WinningLine([0, 3, 6]));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let win = find_winner(&board("XXO.O.O.X")).unwrap();
        assert_eq!(win.player, Player::O);
        assert_eq!(win.line, WinningLine([2, 4, 6]));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(find_winner(&board("XXO......")), None);
        assert_eq!(find_winner(&board("XOXXOOOXX")), None);
    }

    #[test]
    fn test_first_line_in_order_is_reported() {
        // Top row and left column both complete: rows are checked first.
        let win = find_winner(&board("XXXX..X..")).unwrap();
        assert_eq!(win.line, WinningLine([0, 1, 2]));
    }

    /// Exhaustive check over all 3^9 boards: the reported winner (if any)
    /// must agree with checking the eight lines independently.
    #[test]
    fn test_agrees_with_independent_line_check() {
        for code in 0..3usize.pow(CELL_COUNT as u32) {
            let mut cells = [Cell::Empty; CELL_COUNT];
            let mut n = code;
            for cell in cells.iter_mut() {
                *cell = match n % 3 {
                    1 => Cell::Taken(Player::X),
                    2 => Cell::Taken(Player::O),
                    _ => Cell::Empty,
                };
                n /= 3;
            }

            let complete: Vec<_> = LINES
                .iter()
                .filter(|l| {
                    let [a, b, c] = l.cells();
                    !cells[a].is_empty() && cells[a] == cells[b] && cells[a] == cells[c]
                })
                .collect();

            match find_winner(&cells) {
                None => assert!(complete.is_empty()),
                Some(win) => {
                    assert_eq!(Some(&&win.line), complete.first());
                    assert_eq!(cells[win.line.cells()[0]], Cell::Taken(win.player));
                }
            }
        }
    }

    #[test]
    fn test_is_full() {
        assert!(!is_full(&board("XOXOXOXO.")));
        assert!(is_full(&board("XOXOXOOXO")));
    }
}

//! Outcome evaluation: wins, draws, and games still in progress.
//!
//! A board where both players hold a line cannot come out of alternating
//! play. Nothing here defends against it; `outcome` reports the computer
//! first only because that is the order it checks in.

use crate::board::{Board, Cell, Player};
use crate::constants::WIN_LINES;

/// State of a game as read off the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won(Player),
    Draw,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

/// True iff `player` holds all three cells of any winning line.
pub fn has_won(board: &Board, player: Player) -> bool {
    let mark = Cell::Marked(player);
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.get(i) == mark))
}

/// True iff the board is full and neither player has won.
pub fn is_draw(board: &Board) -> bool {
    board.empty_cells().is_empty()
        && !has_won(board, Player::Computer)
        && !has_won(board, Player::Human)
}

/// Classify the board: computer win, human win, draw, or still going.
pub fn outcome(board: &Board) -> Outcome {
    if has_won(board, Player::Computer) {
        Outcome::Won(Player::Computer)
    } else if has_won(board, Player::Human) {
        Outcome::Won(Player::Human)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[usize], player: Player) -> Board {
        let mut board = Board::new();
        for &i in cells {
            board.place(i, player);
        }
        board
    }

    #[test]
    fn test_every_line_wins() {
        for line in WIN_LINES {
            for player in [Player::Human, Player::Computer] {
                let board = board_with(&line, player);
                assert!(has_won(&board, player), "{line:?} should win for {player}");
                assert!(!has_won(&board, player.opponent()));
                assert_eq!(outcome(&board), Outcome::Won(player));
            }
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!has_won(&board, Player::Computer));
        assert!(!has_won(&board, Player::Human));
        assert!(!is_draw(&board));
        assert_eq!(outcome(&board), Outcome::InProgress);
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        let board = Board::parse("XXO......").unwrap();
        assert!(!has_won(&board, Player::Computer));
        assert!(!has_won(&board, Player::Human));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X
        // X O O
        // O X X
        let board = Board::parse("XOX/XOO/OXX").unwrap();
        assert!(is_draw(&board));
        assert_eq!(outcome(&board), Outcome::Draw);
        assert!(outcome(&board).is_over());
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        // X X X
        // O O X
        // X O O
        let board = Board::parse("XXX/OOX/XOO").unwrap();
        assert!(!is_draw(&board));
        assert_eq!(outcome(&board), Outcome::Won(Player::Computer));
    }
}

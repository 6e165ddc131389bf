//! Regression positions for the search engine.
//!
//! Each test sets up a position from a board string and checks the move and
//! score `select_move` returns. Boards read row by row, `X` for the engine,
//! `O` for the human, `.` for empty:
//!
//! ```text
//! a b c
//! d e f
//! g h i
//! ```

use xoxoxo::board::{Board, Player};
use xoxoxo::constants::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
use xoxoxo::search::{Move, select_move};

// =============================================================================
// Helper functions
// =============================================================================

/// Run `select_move` on `board` and compare against the expected answer.
fn check(board: &str, to_move: Player, index: usize, score: i32) {
    let b = Board::parse(board).unwrap_or_else(|e| panic!("bad board {board}: {e}"));
    let got = select_move(&b, to_move);
    assert_eq!(
        got,
        Move { index, score },
        "{to_move} to move on\n{b}\nexpected index {index} score {score}"
    );
}

// =============================================================================
// Opening moves
// =============================================================================

#[test]
fn test_opening_empty_board() {
    check(".../.../...", Player::Computer, 4, DRAW_SCORE);
}

#[test]
fn test_opening_after_corner() {
    check("O../.../...", Player::Computer, 4, DRAW_SCORE);
}

#[test]
fn test_opening_after_center() {
    check(".../.O./...", Player::Computer, 0, DRAW_SCORE);
}

// =============================================================================
// Completing a line
// =============================================================================

#[test]
fn test_complete_top_row() {
    // X X .
    // . O .
    // . . O
    check("XX./.O./..O", Player::Computer, 2, WIN_SCORE);
}

#[test]
fn test_win_before_block() {
    // X X .
    // . . .
    // O O .
    check("XX./.../OO.", Player::Computer, 2, WIN_SCORE);
}

// =============================================================================
// Blocking
// =============================================================================

#[test]
fn test_block_bottom_row() {
    // . . .
    // . X .
    // O O .
    check(".../.X./OO.", Player::Computer, 8, DRAW_SCORE);
}

#[test]
fn test_block_anti_diagonal() {
    // X . O
    // . O .
    // . . .
    check("X.O/.O./...", Player::Computer, 6, DRAW_SCORE);
}

#[test]
fn test_human_blocks_diagonal() {
    // O O X
    // . X .
    // . . .
    check("OOX/.X./...", Player::Human, 6, DRAW_SCORE);
}

// =============================================================================
// Forks
// =============================================================================

#[test]
fn test_computer_forks() {
    // X O .
    // . X .
    // . . O
    // c only threatens g and is answered; d threatens f and g at once.
    check("XO./.X./..O", Player::Computer, 3, WIN_SCORE);
}

#[test]
fn test_human_block_creates_fork() {
    // X X .
    // . O .
    // . . O
    // Blocking at c also threatens g and f.
    check("XX./.O./..O", Player::Human, 2, LOSS_SCORE);
}

#[test]
fn test_avoid_opposite_corner_trap() {
    // O . .
    // . X .
    // . . O
    // A corner reply lets O fork; the edge at b forces a draw.
    check("O../.X./..O", Player::Computer, 1, DRAW_SCORE);
}

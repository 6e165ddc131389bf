//! Exhaustive minimax search.
//!
//! This module implements plain minimax with:
//! - Terminal scoring from the computer's point of view (+10 / -10 / 0, no depth discount)
//! - In-place simulation on a working board, undone after every trial move
//! - First-best tie breaking in ascending cell order
//! - A fixed opening move in place of a full-tree search on the first turn
//!
//! The computer maximizes and the human minimizes. There is no pruning and no
//! caching; tic-tac-toe is small enough to search to the end every time.

use tracing::{debug, instrument};

use crate::board::{Board, Player};
use crate::constants::{
    CELLS, CENTER, DRAW_SCORE, FALLBACK_CORNER, LOSS_SCORE, MAX_SENTINEL, MIN_SENTINEL,
    OPENING_EMPTY_THRESHOLD, WIN_SCORE,
};
use crate::rules::has_won;

/// A cell choice and the score it leads to under optimal play.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub index: usize,
    pub score: i32,
}

/// Counters collected during one search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions scored, including the terminal ones
    pub nodes: u64,
    /// Positions that ended the game
    pub leaves: u64,
}

/// Every root candidate of a full search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
    pub to_move: Player,
    /// One entry per empty cell, in ascending index order
    pub candidates: Vec<Move>,
    pub best: Move,
    pub stats: SearchStats,
}

/// Score a finished game, or `None` if play continues.
///
/// Wins are checked before fullness, so a full board with a line on it
/// counts as a win.
pub fn terminal_score(board: &Board) -> Option<i32> {
    if has_won(board, Player::Computer) {
        Some(WIN_SCORE)
    } else if has_won(board, Player::Human) {
        Some(LOSS_SCORE)
    } else if board.empty_count() == 0 {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

/// The fixed move used while more than [`OPENING_EMPTY_THRESHOLD`] cells are
/// empty: the center if free, otherwise the top-left corner.
pub fn opening_move(board: &Board) -> Option<usize> {
    if board.empty_count() <= OPENING_EMPTY_THRESHOLD {
        return None;
    }
    if board.is_empty(CENTER) {
        Some(CENTER)
    } else {
        Some(FALLBACK_CORNER)
    }
}

/// Choose a move for `to_move`.
///
/// On the opening turn this returns the fixed opening move with a draw score
/// instead of searching. Otherwise it runs a full minimax search on a private
/// copy of `board`.
///
/// # Panics
///
/// Panics if the game on `board` is already over.
#[instrument(level = "debug", skip(board), fields(empty = board.empty_count()))]
pub fn select_move(board: &Board, to_move: Player) -> Move {
    assert!(
        terminal_score(board).is_none(),
        "select_move called on a finished game"
    );

    if let Some(index) = opening_move(board) {
        debug!(index, "opening move");
        return Move {
            index,
            score: DRAW_SCORE,
        };
    }

    let mut working = *board;
    minimax(&mut working, to_move)
}

/// Full minimax search from `board` with `to_move` to play.
///
/// `board` is used as the working copy: every trial move is placed, searched
/// and cleared again, so it is back in its original state on return.
///
/// # Panics
///
/// Panics if the game on `board` is already over.
pub fn minimax(board: &mut Board, to_move: Player) -> Move {
    assert!(
        terminal_score(board).is_none(),
        "minimax called on a finished game"
    );

    let mut stats = SearchStats::default();
    let candidates = expand(board, to_move, &mut stats);
    let best = pick(&candidates, to_move).expect("non-terminal board has an empty cell");
    debug!(
        index = best.index,
        score = best.score,
        nodes = stats.nodes,
        leaves = stats.leaves,
        "search complete"
    );
    best
}

/// Full search reporting the score of every root candidate.
///
/// Never uses the opening shortcut, so on an empty board this walks the
/// whole game tree.
///
/// # Panics
///
/// Panics if the game on `board` is already over.
pub fn analyze(board: &Board, to_move: Player) -> Analysis {
    assert!(
        terminal_score(board).is_none(),
        "analyze called on a finished game"
    );

    let mut working = *board;
    let mut stats = SearchStats::default();
    let candidates = expand(&mut working, to_move, &mut stats);
    let best = pick(&candidates, to_move).expect("non-terminal board has an empty cell");
    debug!(?best, nodes = stats.nodes, "analysis complete");

    Analysis {
        to_move,
        candidates,
        best,
        stats,
    }
}

/// Score every empty cell for `to_move`, in ascending index order.
fn expand(board: &mut Board, to_move: Player, stats: &mut SearchStats) -> Vec<Move> {
    let mut candidates = Vec::with_capacity(CELLS);
    for index in board.empty_cells() {
        board.place(index, to_move);
        let score = score_position(board, to_move.opponent(), stats);
        board.clear(index);
        candidates.push(Move { index, score });
    }
    candidates
}

/// Minimax value of `board` with `to_move` to play.
fn score_position(board: &mut Board, to_move: Player, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;
    if let Some(score) = terminal_score(board) {
        stats.leaves += 1;
        return score;
    }
    let candidates = expand(board, to_move, stats);
    pick(&candidates, to_move)
        .expect("non-terminal board has an empty cell")
        .score
}

/// Best candidate for `to_move`. A later candidate only replaces the current
/// best on a strict improvement, so ties go to the lowest index.
fn pick(candidates: &[Move], to_move: Player) -> Option<Move> {
    let mut best = None;
    match to_move {
        Player::Computer => {
            let mut high = MAX_SENTINEL;
            for &mv in candidates {
                if mv.score > high {
                    high = mv.score;
                    best = Some(mv);
                }
            }
        }
        Player::Human => {
            let mut low = MIN_SENTINEL;
            for &mv in candidates {
                if mv.score < low {
                    low = mv.score;
                    best = Some(mv);
                }
            }
        }
    }
    best
}

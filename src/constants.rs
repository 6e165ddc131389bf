//! Constants for board geometry, marks, scores, and search parameters.
//!
//! The board is a flat array of 9 cells laid out row by row:
//!
//! ```text
//!  0 | 1 | 2     a | b | c
//! ---+---+---   ---+---+---
//!  3 | 4 | 5     d | e | f
//! ---+---+---   ---+---+---
//!  6 | 7 | 8     g | h | i
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Width of one row.
pub const ROW: usize = 3;

/// Label letter shown for each empty cell. Also the accepted input for a move.
pub const CELL_LABELS: [char; CELLS] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i'];

/// The 8 winning triples: rows, columns, then diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

// =============================================================================
// Marks
// =============================================================================

/// Mark placed by the engine.
pub const COMPUTER_MARK: char = 'X';

/// Mark placed by the human player.
pub const HUMAN_MARK: char = 'O';

// =============================================================================
// Scores
// =============================================================================

/// Score of a board the computer has won.
pub const WIN_SCORE: i32 = 10;

/// Score of a board the human has won.
pub const LOSS_SCORE: i32 = -10;

/// Score of a full board with no winner.
pub const DRAW_SCORE: i32 = 0;

/// Starting best score when maximizing. Below every reachable score.
pub const MAX_SENTINEL: i32 = -100;

/// Starting best score when minimizing. Above every reachable score.
pub const MIN_SENTINEL: i32 = 100;

// =============================================================================
// Opening Heuristic
// =============================================================================

/// Full search is skipped while more than this many cells are empty.
pub const OPENING_EMPTY_THRESHOLD: usize = 7;

/// Preferred opening cell.
pub const CENTER: usize = 4;

/// Opening cell used when the center is taken.
pub const FALLBACK_CORNER: usize = 0;

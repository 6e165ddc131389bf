//! xoxoxo: tic-tac-toe against an exhaustive minimax engine.
//!
//! The engine searches every continuation to the end of the game and never
//! loses. On its first turn it skips the search and takes the center, or the
//! top-left corner if the center is gone.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, marks, scores, and the opening threshold
//! - [`board`] - Cells, players, and the board itself
//! - [`rules`] - Win and draw detection
//! - [`search`] - Minimax search and the opening move
//! - [`game`] - Turn loop state owning the live board
//! - [`console`] - Text front end for interactive play
//! - [`selfplay`] - Seeded games against a random opponent
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use xoxoxo::board::{Board, Player};
//! use xoxoxo::search::select_move;
//!
//! // X holds a and b, O holds e and i: X completes the top row
//! let board = Board::parse("XX./.O./..O").unwrap();
//! let best = select_move(&board, Player::Computer);
//! assert_eq!(best.index, 2);
//! assert_eq!(best.score, 10);
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod error;
pub mod game;
pub mod rules;
pub mod search;
pub mod selfplay;

pub use error::{Error, Result};

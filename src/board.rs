//! Board model: nine cells, two players, and the text forms used to talk
//! about them.
//!
//! Every empty cell holds its own label letter (`a` through `i`), so an empty
//! cell is never confused with a mark and always renders as the key a player
//! types to claim it.

use std::fmt;
use std::str::FromStr;

use crate::constants::{CELL_LABELS, CELLS, COMPUTER_MARK, HUMAN_MARK, ROW};
use crate::error::{Error, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// The mark this player puts on the board.
    pub fn mark(self) -> char {
        match self {
            Player::Human => HUMAN_MARK,
            Player::Computer => COMPUTER_MARK,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// Contents of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Unclaimed; carries the label of the position it sits at.
    Empty(char),
    Marked(Player),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty(label) => write!(f, "{label}"),
            Cell::Marked(player) => write!(f, "{}", player.mark()),
        }
    }
}

/// A 3x3 board stored row-major as a flat array.
///
/// Indices outside `0..9` are caller bugs: every method indexing a cell
/// panics on them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The canonical empty board.
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|i| Cell::Empty(CELL_LABELS[i])),
        }
    }

    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// True iff the cell at `index` still holds its empty sentinel.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.cells[index], Cell::Empty(_))
    }

    /// Indices of all empty cells, in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELLS).filter(|&i| self.is_empty(i)).collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, Cell::Empty(_)))
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Put `player`'s mark on an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is already marked; marks are never overwritten.
    pub fn place(&mut self, index: usize, player: Player) {
        assert!(
            self.is_empty(index),
            "cell {index} is already marked with {}",
            self.cells[index]
        );
        self.cells[index] = Cell::Marked(player);
    }

    /// Restore the cell at `index` to its empty sentinel.
    pub fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty(CELL_LABELS[index]);
    }

    /// Parse a board from 9 cell symbols.
    ///
    /// `X`/`x` is the computer, `O`/`o` the human, and `.`, `-`, `_` or the
    /// cell's own label letter is empty. Whitespace, `|` and `/` are skipped,
    /// so `"XO./.X./..O"` and `"X O c | d X f | g h O"` both work.
    pub fn parse(text: &str) -> Result<Board> {
        let symbols: Vec<char> = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();

        if symbols.len() != CELLS {
            return Err(Error::InvalidBoardLength {
                expected: CELLS,
                got: symbols.len(),
                context: text.to_string(),
            });
        }

        let mut board = Board::new();
        for (position, &character) in symbols.iter().enumerate() {
            match character {
                'X' | 'x' => board.place(position, Player::Computer),
                'O' | 'o' => board.place(position, Player::Human),
                '.' | '-' | '_' => {}
                c if c == CELL_LABELS[position] => {}
                _ => {
                    return Err(Error::InvalidCellCharacter {
                        character,
                        position,
                        context: text.to_string(),
                    });
                }
            }
        }
        Ok(board)
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Board::parse(s)
    }
}

/// Parse a player's cell choice: a label letter `a`-`i` (any case) or an
/// index digit `0`-`8`.
pub fn parse_cell(input: &str) -> Option<usize> {
    let mut chars = input.trim().chars();
    let c = chars.next()?.to_ascii_lowercase();
    if chars.next().is_some() {
        return None;
    }
    CELL_LABELS.iter().position(|&label| label == c).or_else(|| {
        c.to_digit(10)
            .map(|d| d as usize)
            .filter(|&index| index < CELLS)
    })
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(ROW).enumerate() {
            if r > 0 {
                writeln!(f)?;
                writeln!(f, "---+---+---")?;
            }
            write!(f, " {} | {} | {}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

//! Turn-loop state: the live board, whose turn it is, and the running tally.
//!
//! `Game` is the only place a confirmed move touches the live board. The
//! search always works on its own copy.

use std::fmt;

use tracing::debug;

use crate::board::{Board, Player, parse_cell};
use crate::constants::CELLS;
use crate::error::{Error, Result};
use crate::rules::{self, Outcome};
use crate::search::{Move, select_move};

/// One round of play between the human and the engine.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Player,
    /// Who moves first after a reset
    opener: Player,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::Human)
    }
}

impl Game {
    pub fn new(opener: Player) -> Self {
        Self {
            board: Board::new(),
            turn: opener,
            opener,
        }
    }

    /// Snapshot of the live board, for display.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn opener(&self) -> Player {
        self.opener
    }

    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }

    /// Confirm a move for `player` at `index`.
    ///
    /// The move is rejected if the round is over, it is not `player`'s turn,
    /// or the cell is off the board or taken. The turn passes to the
    /// opponent only while the round continues.
    pub fn play(&mut self, player: Player, index: usize) -> Result<Outcome> {
        if self.outcome().is_over() {
            return Err(Error::GameOver);
        }
        if player != self.turn {
            return Err(Error::OutOfTurn { player });
        }
        if index >= CELLS {
            return Err(Error::OutOfRange { index });
        }
        if !self.board.is_empty(index) {
            return Err(Error::Occupied { index });
        }

        self.board.place(index, player);
        let outcome = self.outcome();
        debug!(%player, index, ?outcome, "move confirmed");

        if !outcome.is_over() {
            self.turn = player.opponent();
        }
        Ok(outcome)
    }

    /// Play the human's move from raw input (`a`-`i` or `0`-`8`).
    pub fn play_human(&mut self, input: &str) -> Result<Outcome> {
        let index = parse_cell(input).ok_or_else(|| Error::InvalidCell {
            input: input.trim().to_string(),
        })?;
        self.play(Player::Human, index)
    }

    /// Let the engine choose and play its move.
    pub fn play_computer(&mut self) -> Result<(Move, Outcome)> {
        if self.outcome().is_over() {
            return Err(Error::GameOver);
        }
        if self.turn != Player::Computer {
            return Err(Error::OutOfTurn {
                player: Player::Computer,
            });
        }
        let mv = select_move(&self.board, Player::Computer);
        let outcome = self.play(Player::Computer, mv.index)?;
        Ok((mv, outcome))
    }

    /// Clear the board for a new round; the opener moves first again.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = self.opener;
    }
}

/// Results of finished rounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub computer: u32,
    pub human: u32,
    pub draws: u32,
}

impl Tally {
    /// Count a finished round. Rounds still in progress are ignored.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Player::Computer) => self.computer += 1,
            Outcome::Won(Player::Human) => self.human += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    pub fn games(&self) -> u32 {
        self.computer + self.human + self.draws
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}  {}: {}  ties: {}",
            Player::Computer,
            self.computer,
            Player::Human,
            self.human,
            self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_opens_by_default() {
        let game = Game::default();
        assert_eq!(game.turn(), Player::Human);
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(Player::Human);
        assert_eq!(game.play_human("a").unwrap(), Outcome::InProgress);
        assert_eq!(game.turn(), Player::Computer);

        let (mv, outcome) = game.play_computer().unwrap();
        // 8 empty cells: the opening move takes the center
        assert_eq!(mv.index, 4);
        assert_eq!(outcome, Outcome::InProgress);
        assert_eq!(game.turn(), Player::Human);
    }

    #[test]
    fn test_rejects_out_of_turn() {
        let mut game = Game::new(Player::Computer);
        assert!(matches!(
            game.play_human("a"),
            Err(Error::OutOfTurn {
                player: Player::Human
            })
        ));
    }

    #[test]
    fn test_rejects_bad_cells() {
        let mut game = Game::new(Player::Human);
        assert!(matches!(
            game.play_human("z"),
            Err(Error::InvalidCell { .. })
        ));
        assert!(matches!(
            game.play(Player::Human, 9),
            Err(Error::OutOfRange { index: 9 })
        ));

        game.play_human("e").unwrap();
        game.play_computer().unwrap();
        // Computer took the fallback corner
        assert!(matches!(
            game.play_human("a"),
            Err(Error::Occupied { index: 0 })
        ));
        assert_eq!(game.turn(), Player::Human);
    }

    #[test]
    fn test_turn_stays_after_game_over() {
        let mut game = Game::new(Player::Human);
        for (human, computer) in [(0, 3), (1, 4)] {
            game.play(Player::Human, human).unwrap();
            game.play(Player::Computer, computer).unwrap();
        }
        let outcome = game.play(Player::Human, 2).unwrap();
        assert_eq!(outcome, Outcome::Won(Player::Human));
        assert_eq!(game.turn(), Player::Human);
        assert!(matches!(game.play_computer(), Err(Error::GameOver)));
    }

    #[test]
    fn test_reset_restores_opener() {
        let mut game = Game::new(Player::Computer);
        game.play_computer().unwrap();
        game.reset();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.turn(), Player::Computer);
    }

    #[test]
    fn test_tally() {
        let mut tally = Tally::default();
        tally.record(Outcome::Won(Player::Computer));
        tally.record(Outcome::Draw);
        tally.record(Outcome::Draw);
        tally.record(Outcome::InProgress);
        assert_eq!(tally.games(), 3);
        assert_eq!(tally.to_string(), "X: 1  O: 0  ties: 2");
    }
}

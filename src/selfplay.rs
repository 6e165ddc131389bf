//! Engine against a random opponent.
//!
//! The opponent takes the human's side and picks uniformly among the empty
//! cells. Play is seeded, so a given configuration always produces the same
//! tally. Against perfect play the engine should never lose a round.

use fastrand::Rng;
use tracing::{debug, info};

use crate::board::Player;
use crate::error::Result;
use crate::game::{Game, Tally};
use crate::rules::Outcome;

/// Self-play settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SelfPlayConfig {
    /// Number of rounds to play
    pub games: u32,
    /// Seed for the random opponent
    pub seed: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: 42,
        }
    }
}

/// Play `config.games` rounds. The human side opens even rounds, the
/// engine odd ones.
pub fn run(config: &SelfPlayConfig) -> Result<Tally> {
    let mut rng = Rng::with_seed(config.seed);
    let mut tally = Tally::default();

    for round in 0..config.games {
        let opener = if round % 2 == 0 {
            Player::Human
        } else {
            Player::Computer
        };
        let outcome = play_round(opener, &mut rng)?;
        debug!(round, ?opener, ?outcome, "self-play round finished");
        tally.record(outcome);
    }

    info!(
        games = tally.games(),
        computer = tally.computer,
        human = tally.human,
        draws = tally.draws,
        seed = config.seed,
        "self-play complete"
    );
    Ok(tally)
}

/// Play one round to the end and return how it finished.
pub fn play_round(opener: Player, rng: &mut Rng) -> Result<Outcome> {
    let mut game = Game::new(opener);
    loop {
        let outcome = match game.turn() {
            Player::Human => {
                let cells = game.board().empty_cells();
                let index = cells[rng.usize(..cells.len())];
                game.play(Player::Human, index)?
            }
            Player::Computer => game.play_computer()?.1,
        };
        if outcome.is_over() {
            return Ok(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_never_loses() {
        let tally = run(&SelfPlayConfig {
            games: 40,
            seed: 7,
        })
        .unwrap();
        assert_eq!(tally.games(), 40);
        assert_eq!(tally.human, 0);
    }

    #[test]
    fn test_same_seed_same_tally() {
        let config = SelfPlayConfig {
            games: 10,
            seed: 1234,
        };
        assert_eq!(run(&config).unwrap(), run(&config).unwrap());
    }

    #[test]
    fn test_round_finishes() {
        let mut rng = Rng::with_seed(3);
        let outcome = play_round(Player::Computer, &mut rng).unwrap();
        assert!(outcome.is_over());
        assert_ne!(outcome, Outcome::Won(Player::Human));
    }
}

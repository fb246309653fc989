//! Auto-playing Snakes and Ladders simulator.
//!
//! Generates a board with randomly placed snakes and ladders, then plays
//! the game to completion with simulated dice rolls, tracking per-player
//! statistics. Presentation is behind the [`report::Reporter`] trait; the
//! core never prints.

pub mod config;
pub mod error;
pub mod game;
pub mod report;

use config::Config;
use error::GameError;
use game::{Board, RandomSource, SeededRandom, ThreadRandom};

/// Builds a board from configuration, seeded when the config asks for
/// reproducibility.
pub fn create_board(config: &Config) -> Result<Board, GameError> {
    let rng: Box<dyn RandomSource> = match config.game.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom::new()),
    };
    Board::new(config.game.settings(), rng)
}

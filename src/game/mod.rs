pub mod board;
pub mod dice;
pub mod player;
pub mod rng;
pub mod rotation;
pub mod types;


pub use board::{Board, GameSettings};
pub use dice::Dice;
pub use player::Player;
pub use rng::{RandomSource, SeededRandom, ThreadRandom};
pub use rotation::PlayerRotation;
pub use types::{BoardComponent, ComponentKind, GameStatus, MoveCause, PlayerSummary};

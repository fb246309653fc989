use std::collections::HashSet;

use crate::error::GameError;
use crate::game::player::Player;

/// Cyclic turn order over the players, in the order they were given.
/// Duplicate names are rejected outright rather than collapsed.
#[derive(Debug)]
pub struct PlayerRotation {
    players: Vec<Player>,
    turn_counter: usize,
}

impl PlayerRotation {
    pub fn new<I, S>(names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut players = Vec::new();
        for name in names {
            let name = name.into();
            if !seen.insert(name.clone()) {
                return Err(GameError::DuplicatePlayer(name));
            }
            players.push(Player::new(name));
        }
        if players.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "at least one player is required".to_string(),
            ));
        }
        Ok(Self {
            players,
            turn_counter: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_mut(&mut self, index: usize) -> &mut Player {
        &mut self.players[index]
    }

    /// Returns the index of the next player to act. The same player recurs
    /// every `len()` calls.
    pub fn advance(&mut self) -> usize {
        let index = self.turn_counter % self.players.len();
        self.turn_counter += 1;
        index
    }

    pub fn initialize_all(&mut self, start_position: usize) {
        for player in &mut self.players {
            player.set_position(start_position);
        }
    }
}

use crate::game::types::{MoveCause, PlayerSummary};

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    position: usize,
    snake_hits: u32,
    snake_distance: i64,
    ladder_hits: u32,
    ladder_distance: i64,
    regular_moves: i64,
    turns_taken: u32,
    has_won: bool,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: 0,
            snake_hits: 0,
            snake_distance: 0,
            ladder_hits: 0,
            ladder_distance: 0,
            regular_moves: 0,
            turns_taken: 0,
            has_won: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn has_won(&self) -> bool {
        self.has_won
    }

    pub(crate) fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Moves the player and charges the counter pair matching `cause`.
    /// Bounds checking is the board's job; the delta may be negative.
    #[tracing::instrument(skip(self), fields(player = %self.name))]
    pub fn move_to(&mut self, destination: usize, cause: MoveCause) {
        let delta = destination as i64 - self.position as i64;
        self.position = destination;
        match cause {
            MoveCause::Snake => {
                self.snake_hits += 1;
                self.snake_distance += delta;
            }
            MoveCause::Ladder => {
                self.ladder_hits += 1;
                self.ladder_distance += delta;
            }
            MoveCause::Regular => {
                self.regular_moves += delta;
                self.turns_taken += 1;
            }
        }
    }

    /// Idempotent: the turn loop cannot reach a won player again, but a
    /// second call is a no-op rather than an error.
    pub fn mark_won(&mut self) {
        if self.has_won {
            return;
        }
        self.has_won = true;
        tracing::info!(player = %self.name, "player has won");
    }

    pub fn summary(&self) -> PlayerSummary {
        PlayerSummary {
            name: self.name.clone(),
            has_won: self.has_won,
            ladder_hits: self.ladder_hits,
            ladder_distance: self.ladder_distance,
            snake_hits: self.snake_hits,
            snake_distance: self.snake_distance,
            regular_moves: self.regular_moves,
            turns_taken: self.turns_taken,
        }
    }
}

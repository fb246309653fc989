use std::fmt;

use crate::error::GameError;
use crate::game::dice::{Dice, DEFAULT_FACES};
use crate::game::rng::RandomSource;
use crate::game::rotation::PlayerRotation;
use crate::game::types::{BoardComponent, GameStatus, MoveCause, PlayerSummary};
use crate::report::Reporter;

#[derive(Debug, Clone)]
pub struct GameSettings {
    pub players: Vec<String>,
    pub board_length: usize,
    pub num_snakes: usize,
    pub num_ladders: usize,
    pub dice_faces: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            board_length: 50,
            num_snakes: 5,
            num_ladders: 5,
            dice_faces: DEFAULT_FACES,
        }
    }
}

pub struct Board {
    length: usize,
    positions: Vec<Option<BoardComponent>>,
    // Bookkeeping for reporting; `positions` is authoritative for lookup.
    snakes: Vec<(usize, usize)>,
    ladders: Vec<(usize, usize)>,
    dice: Dice,
    players: PlayerRotation,
    rng: Box<dyn RandomSource>,
    status: GameStatus,
}

// Manual impl: the boxed RandomSource has no Debug and is omitted.
impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("length", &self.length)
            .field("snakes", &self.snakes)
            .field("ladders", &self.ladders)
            .field("dice", &self.dice)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl Board {
    #[tracing::instrument(skip(settings, rng), fields(length = settings.board_length))]
    pub fn new(settings: GameSettings, rng: Box<dyn RandomSource>) -> Result<Self, GameError> {
        if settings.board_length < 1 {
            return Err(GameError::InvalidConfiguration(
                "board length must be positive".to_string(),
            ));
        }
        let players = PlayerRotation::new(settings.players)?;

        let mut board = Self {
            length: settings.board_length,
            positions: vec![None; settings.board_length],
            snakes: Vec::new(),
            ladders: Vec::new(),
            dice: Dice::new(settings.dice_faces)?,
            players,
            rng,
            status: GameStatus::InProgress,
        };
        board.generate(settings.num_ladders, settings.num_snakes)?;
        tracing::debug!(
            length = board.length,
            snakes = board.snakes.len(),
            ladders = board.ladders.len(),
            "board constructed"
        );
        Ok(board)
    }

    /// Places ladders then snakes. Ladder order first is deliberate: it
    /// keeps the draw sequence stable for a fixed seed.
    fn generate(&mut self, num_ladders: usize, num_snakes: usize) -> Result<(), GameError> {
        let requested = num_ladders + num_snakes;

        // Ladder feet stay out of the first and last 5% of the board.
        let ladder_low = (self.length * 5).div_ceil(100);
        let ladder_high = self.length * 95 / 100;
        if num_ladders > 0 && ladder_low > ladder_high {
            return Err(GameError::BoardTooSmall {
                length: self.length,
                requested,
            });
        }
        for _ in 0..num_ladders {
            let trigger = self.draw_free_position(ladder_low, ladder_high, requested)?;
            let destination = self.rng.uniform(trigger, self.length - 1)?;
            self.positions[trigger] = Some(BoardComponent::Ladder { destination });
            self.ladders.push((trigger, destination));
            tracing::debug!(trigger, destination, "placed ladder");
        }

        // Snake heads stay out of the first 10%.
        let snake_low = (self.length * 10).div_ceil(100);
        let snake_high = self.length - 1;
        if num_snakes > 0 && snake_low > snake_high {
            return Err(GameError::BoardTooSmall {
                length: self.length,
                requested,
            });
        }
        for _ in 0..num_snakes {
            let trigger = self.draw_free_position(snake_low, snake_high, requested)?;
            let destination = self.rng.uniform(0, trigger)?;
            self.positions[trigger] = Some(BoardComponent::Snake { destination });
            self.snakes.push((trigger, destination));
            tracing::debug!(trigger, destination, "placed snake");
        }

        self.players.initialize_all(0);
        Ok(())
    }

    /// Uniform draw over the still-free cells in `[low, high]`. A pool over
    /// free cells terminates where naive resample-on-collision could spin
    /// forever on a dense board.
    fn draw_free_position(
        &mut self,
        low: usize,
        high: usize,
        requested: usize,
    ) -> Result<usize, GameError> {
        let pool: Vec<usize> = (low..=high)
            .filter(|&pos| self.positions[pos].is_none())
            .collect();
        if pool.is_empty() {
            return Err(GameError::BoardTooSmall {
                length: self.length,
                requested,
            });
        }
        let index = self.rng.uniform(0, pool.len() - 1)?;
        Ok(pool[index])
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn component_at(&self, position: usize) -> Option<&BoardComponent> {
        self.positions[position].as_ref()
    }

    pub fn snakes(&self) -> &[(usize, usize)] {
        &self.snakes
    }

    pub fn ladders(&self) -> &[(usize, usize)] {
        &self.ladders
    }

    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    pub fn players(&self) -> &PlayerRotation {
        &self.players
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    fn announce_layout(&self, reporter: &mut dyn Reporter) {
        for (trigger, component) in self
            .positions
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_ref().map(|c| (i, c)))
        {
            reporter.announce_component(component.kind(), trigger, component.destination());
        }
    }

    /// Runs the game to completion: one roll per turn, components resolved
    /// where the roll lands, rotation advancing until somebody crosses the
    /// end of the board. Returns the final summaries in rotation order.
    #[tracing::instrument(skip(self, reporter))]
    pub fn play_auto(&mut self, reporter: &mut dyn Reporter) -> Result<Vec<PlayerSummary>, GameError> {
        self.announce_layout(reporter);

        let mut index = self.players.advance();
        loop {
            let roll = self.dice.roll(&mut *self.rng)?;
            let (name, position) = {
                let player = &self.players.players()[index];
                (player.name().to_string(), player.position())
            };
            reporter.announce_roll(&name, position, roll);

            let candidate = position + roll;
            if candidate >= self.length {
                // Crossing the end wins outright; no move is recorded.
                self.players.player_mut(index).mark_won();
                self.status = GameStatus::Complete {
                    winner: name.clone(),
                };
                reporter.announce_win(&name);
                break;
            }

            match self.positions[candidate] {
                None => {
                    self.players.player_mut(index).move_to(candidate, MoveCause::Regular);
                    reporter.announce_move(&name, position, candidate, MoveCause::Regular);
                }
                Some(BoardComponent::Snake { destination }) => {
                    // The roll carries the player to the trigger cell first;
                    // only the slide itself is charged to the snake counters.
                    let player = self.players.player_mut(index);
                    player.set_position(candidate);
                    player.move_to(destination, MoveCause::Snake);
                    reporter.announce_move(&name, candidate, destination, MoveCause::Snake);
                }
                Some(BoardComponent::Ladder { destination }) => {
                    let player = self.players.player_mut(index);
                    player.set_position(candidate);
                    player.move_to(destination, MoveCause::Ladder);
                    reporter.announce_move(&name, candidate, destination, MoveCause::Ladder);
                    // Unreachable with generated boards (ladder destinations
                    // stay below `length`), but a ladder may win the game.
                    if self.players.players()[index].position() >= self.length {
                        self.players.player_mut(index).mark_won();
                        self.status = GameStatus::Complete {
                            winner: name.clone(),
                        };
                        reporter.announce_win(&name);
                        break;
                    }
                }
            }

            index = self.players.advance();
        }

        let summaries: Vec<PlayerSummary> =
            self.players.players().iter().map(|p| p.summary()).collect();
        for summary in &summaries {
            reporter.announce_summary(summary);
        }
        Ok(summaries)
    }
}

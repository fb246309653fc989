use crate::error::GameError;
use crate::game::rng::RandomSource;

pub const DEFAULT_FACES: usize = 6;

/// A die with a configurable face count that remembers every roll.
#[derive(Debug)]
pub struct Dice {
    faces: usize,
    history: Vec<usize>,
}

impl Dice {
    pub fn new(faces: usize) -> Result<Self, GameError> {
        if faces < 1 {
            return Err(GameError::InvalidConfiguration(
                "dice must have at least one face".to_string(),
            ));
        }
        Ok(Self {
            faces,
            history: Vec::new(),
        })
    }

    pub fn faces(&self) -> usize {
        self.faces
    }

    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn roll(&mut self, rng: &mut dyn RandomSource) -> Result<usize, GameError> {
        let roll = rng.uniform(1, self.faces)?;
        self.history.push(roll);
        Ok(roll)
    }
}

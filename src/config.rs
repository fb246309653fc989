use serde::Deserialize;
use std::env;

use crate::game::GameSettings;

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub players: Vec<String>,
    pub board_length: usize,
    pub num_snakes: usize,
    pub num_ladders: usize,
    pub dice_faces: usize,
    /// When set, the game is fully reproducible.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let env = env::var("RUN_ENV").unwrap_or_else(|_| "local".into());

        let builder = ::config::Config::builder()
            .add_source(config::File::with_name("config/default.toml"))
            .add_source(
                config::File::with_name(&format!("config/{}", env))
                    .required(false),
            )
            .add_source(config::File::with_name("config/local.toml").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        builder.build()?.try_deserialize()
    }
}

impl GameConfig {
    pub fn settings(&self) -> GameSettings {
        GameSettings {
            players: self.players.clone(),
            board_length: self.board_length,
            num_snakes: self.num_snakes,
            num_ladders: self.num_ladders,
            dice_faces: self.dice_faces,
        }
    }
}

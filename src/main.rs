use snakes_ladders::{config::Config, create_board, report::ConsoleReporter};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let env: String = env::var("RUN_ENV").unwrap_or_else(|_| "default".into());
    let config: Config = Config::load().expect("Failed to load config.");

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    tracing::info!(run_env = %env, "Starting Snakes and Ladders simulation...");

    let mut board = create_board(&config).expect("Failed to construct board.");
    tracing::info!(
        length = board.length(),
        snakes = board.snakes().len(),
        ladders = board.ladders().len(),
        players = board.players().len(),
        "Board constructed"
    );

    let mut reporter = ConsoleReporter;
    if let Err(e) = board.play_auto(&mut reporter) {
        tracing::error!("simulation error: {}", e);
    }
}

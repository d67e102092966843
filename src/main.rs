//! Player events entry point.
//!
//! Runs a small scenario showing the observer pattern applied to game
//! events:
//!
//! 1. Load `config.ini` (or the file given with `--config`), falling back to
//!    defaults
//! 2. Create a UI and an achievement tracker and register both with a player
//! 3. Deal two hits; the UI reports health after each, the achievement
//!    unlocks on the first
//! 4. Unregister the UI, the achievement tracker, then the UI again (which
//!    logs a warning)
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --health 50
//! ```

use clap::Parser;
use player_events::game;
use player_events::resources::gameconfig::GameConfig;
use std::path::PathBuf;

/// Observer pattern demo: a player broadcasting game events.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Starting health, overriding the configuration file.
    #[arg(long, allow_negative_numbers = true)]
    health: Option<i32>,

    /// Starting coins, overriding the configuration file.
    #[arg(long, allow_negative_numbers = true)]
    coins: Option<i32>,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config);
    if let Err(e) = config.load_from_file() {
        log::info!("{}, using defaults", e);
    }
    if let Some(health) = cli.health {
        config.health = health;
    }
    if let Some(coins) = cli.coins {
        config.coins = coins;
    }

    // Early-exit: persist the effective configuration and quit
    if cli.write_config {
        match config.save_to_file() {
            Ok(()) => println!("Config written to {}", config.config_path.display()),
            Err(e) => log::error!("{}", e),
        }
        return;
    }

    let report = game::run(&config);
    log::debug!("Demo finished: {:?}", report);
}

//! Game configuration resource.
//!
//! Settings are read from an INI file. Every field has a safe default, so a
//! missing file or a missing key leaves the default in place.
//!
//! # Configuration File Format
//!
//! ```ini
//! [player]
//! health = 100
//! coins = 0
//!
//! [demo]
//! first_hit = 5
//! second_hit = 3
//! ```

use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

/// Starting player state and demo hit sizes used when the file omits them
const DEFAULT_HEALTH: i32 = 100;
const DEFAULT_COINS: i32 = 0;
const DEFAULT_FIRST_HIT: i32 = 5;
const DEFAULT_SECOND_HIT: i32 = 3;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration.
///
/// Holds the player's starting state and the damage applied by the demo
/// scenario in [`crate::game::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Starting health of the player.
    pub health: i32,
    /// Starting coins of the player.
    pub coins: i32,
    /// Damage dealt by the first hit of the demo.
    pub first_hit: i32,
    /// Damage dealt by the second hit of the demo.
    pub second_hit: i32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            health: DEFAULT_HEALTH,
            coins: DEFAULT_COINS,
            first_hit: DEFAULT_FIRST_HIT,
            second_hit: DEFAULT_SECOND_HIT,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Values that are
    /// present but not integers are ignored with a warning.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [player] section
        read_int(&config, "player", "health", &mut self.health);
        read_int(&config, "player", "coins", &mut self.coins);

        // [demo] section
        read_int(&config, "demo", "first_hit", &mut self.first_hit);
        read_int(&config, "demo", "second_hit", &mut self.second_hit);

        info!(
            "Loaded config: health={}, coins={}, hits={}/{}",
            self.health, self.coins, self.first_hit, self.second_hit
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [player] section
        config.set("player", "health", Some(self.health.to_string()));
        config.set("player", "coins", Some(self.coins.to_string()));

        // [demo] section
        config.set("demo", "first_hit", Some(self.first_hit.to_string()));
        config.set("demo", "second_hit", Some(self.second_hit.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

fn read_int(config: &Ini, section: &str, key: &str, slot: &mut i32) {
    match config.getint(section, key) {
        Ok(Some(value)) => match i32::try_from(value) {
            Ok(value) => *slot = value,
            Err(_) => warn!(
                "[{}] {} = {} is out of range, keeping {}",
                section, key, value, slot
            ),
        },
        Ok(None) => {}
        Err(e) => warn!("[{}] {}: {}, keeping {}", section, key, e, slot),
    }
}

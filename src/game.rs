//! Demo scenario wiring a player to its observers.
//!
//! [`run`] is the composition root: it owns the observers, registers them
//! with a [`Player`], deals two hits and then unregisters everything,
//! including one removal of an observer that is no longer registered.

use crate::observers::achievement::Achievements;
use crate::observers::observer_ref;
use crate::observers::ui::Ui;
use crate::player::Player;
use crate::resources::gameconfig::GameConfig;
use crate::subject::Subject;
use log::info;

/// Outcome of a demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// Player health after both hits.
    pub final_health: i32,
    /// Pop-ups shown by the UI, oldest first.
    pub ui_popups: Vec<String>,
    /// Achievement unlock messages, oldest first.
    pub achievements: Vec<String>,
    /// Results of removing the UI, the achievements, then the UI again.
    pub removals: [bool; 3],
    /// Observers still registered once the demo is over.
    pub remaining_observers: usize,
}

/// Run the demo scenario with the settings in `config`.
pub fn run(config: &GameConfig) -> DemoReport {
    let ui = observer_ref(Ui::new());
    let achievements = observer_ref(Achievements::new());

    let mut player = Player::from_config(config);
    info!(
        "Player spawned with {} health and {} coins",
        player.health, player.coins
    );
    player.add_observer(ui.clone());
    player.add_observer(achievements.clone());

    player.damage(config.first_hit);
    player.damage(config.second_hit);

    let removals = [
        player.remove_observer(&ui),
        player.remove_observer(&achievements),
        player.remove_observer(&ui),
    ];

    let ui_popups = ui.borrow().popups().to_vec();
    let unlocked = achievements.borrow().unlocked().to_vec();
    DemoReport {
        final_health: player.health,
        ui_popups,
        achievements: unlocked,
        removals,
        remaining_observers: player.registry().len(),
    }
}

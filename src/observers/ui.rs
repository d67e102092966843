//! UI pop-up observer.

use super::Observer;
use crate::events::GameEvent;

/// Prints a pop-up whenever the player's health or coins change.
///
/// Every pop-up line is also kept in [`Ui::popups`].
#[derive(Debug, Default, Clone)]
pub struct Ui {
    popups: Vec<String>,
}

impl Ui {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop-ups shown so far, oldest first.
    pub fn popups(&self) -> &[String] {
        &self.popups
    }

    fn health_popup(&mut self, health: i32) {
        self.show(format!("[UI]: You have {} health!", health));
    }

    fn coin_popup(&mut self, amount: i32) {
        self.show(format!("[UI]: You got {} coins!", amount));
    }

    fn show(&mut self, line: String) {
        println!("{}", line);
        self.popups.push(line);
    }
}

impl Observer for Ui {
    fn on_notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::PlayerDamage(damage) => self.health_popup(damage.health),
            GameEvent::CoinCollect(collect) => self.coin_popup(collect.coins),
        }
    }

    fn name(&self) -> &str {
        "ui"
    }
}

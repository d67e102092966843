//! Achievement tracking observer.
//!
//! Achievements unlock once and stay unlocked for the lifetime of the
//! tracker. Only the existence of an event matters; payloads are not read.

use super::Observer;
use crate::events::GameEvent;
use log::debug;

/// Message printed when the "Take damage" achievement unlocks.
pub const TAKE_DAMAGE_UNLOCKED: &str =
    "[ACHIEVEMENT]: You unlocked the 'Take damage' achievement!";

/// Tracks which achievements the player has unlocked.
#[derive(Debug, Default, Clone)]
pub struct Achievements {
    took_damage: bool,
    unlocked: Vec<String>,
}

impl Achievements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the "Take damage" achievement has been unlocked.
    pub fn took_damage(&self) -> bool {
        self.took_damage
    }

    /// Unlock messages shown so far, oldest first.
    pub fn unlocked(&self) -> &[String] {
        &self.unlocked
    }

    fn unlock_took_damage(&mut self) {
        if self.took_damage {
            debug!("'Take damage' achievement already unlocked");
            return;
        }
        println!("{}", TAKE_DAMAGE_UNLOCKED);
        self.unlocked.push(TAKE_DAMAGE_UNLOCKED.to_string());
        self.took_damage = true;
    }
}

impl Observer for Achievements {
    fn on_notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::PlayerDamage(_) => self.unlock_took_damage(),
            GameEvent::CoinCollect(_) => {}
        }
    }

    fn name(&self) -> &str {
        "achievements"
    }
}

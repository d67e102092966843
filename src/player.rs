//! The player: a subject whose state changes are broadcast as events.

use crate::events::{CoinCollectEvent, GameEvent, PlayerDamageEvent};
use crate::resources::gameconfig::GameConfig;
use crate::subject::{ObserverRegistry, Subject};
use log::{debug, warn};

/// Player state plus the observers interested in it.
///
/// Health and coins are not clamped; health may go negative.
#[derive(Debug)]
pub struct Player {
    pub health: i32,
    pub coins: i32,
    observers: ObserverRegistry,
}

impl Default for Player {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl Player {
    /// Create a player with no observers registered.
    pub fn new(health: i32, coins: i32) -> Self {
        Self {
            health,
            coins,
            observers: ObserverRegistry::new(),
        }
    }

    /// Create a player with the starting state from `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.health, config.coins)
    }

    /// Apply `amount` damage, then broadcast a [`PlayerDamageEvent`] carrying
    /// the health left and the damage applied.
    ///
    /// Health saturates at the `i32` bounds, with a warning when pinned.
    pub fn damage(&mut self, amount: i32) {
        self.health = match self.health.checked_sub(amount) {
            Some(health) => health,
            None => {
                let pinned = self.health.saturating_sub(amount);
                warn!("Health overflowed applying {} damage, pinned at {}", amount, pinned);
                pinned
            }
        };
        debug!("Player took {} damage, health={}", amount, self.health);
        self.notify(&GameEvent::from(PlayerDamageEvent::new(self.health, amount)));
    }

    /// Add `amount` coins, then broadcast a [`CoinCollectEvent`] carrying the
    /// amount collected.
    ///
    /// Coins saturate at the `i32` bounds, with a warning when pinned.
    pub fn collect_coins(&mut self, amount: i32) {
        self.coins = match self.coins.checked_add(amount) {
            Some(coins) => coins,
            None => {
                let pinned = self.coins.saturating_add(amount);
                warn!("Coins overflowed collecting {}, pinned at {}", amount, pinned);
                pinned
            }
        };
        debug!("Player collected {} coins, coins={}", amount, self.coins);
        self.notify(&GameEvent::from(CoinCollectEvent::new(amount)));
    }
}

impl Subject for Player {
    fn registry(&self) -> &ObserverRegistry {
        &self.observers
    }

    fn registry_mut(&mut self) -> &mut ObserverRegistry {
        &mut self.observers
    }
}

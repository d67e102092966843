//! Payloads emitted by the player when its state changes.

use super::{EventKind, EventPayload, GameEvent};

/// The player took damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerDamageEvent {
    /// Health remaining after the damage was applied.
    pub health: i32,
    /// Amount of damage applied.
    pub damage: i32,
}

impl PlayerDamageEvent {
    pub fn new(health: i32, damage: i32) -> Self {
        Self { health, damage }
    }
}

impl EventPayload for PlayerDamageEvent {
    const KIND: EventKind = EventKind::PlayerDamage;

    fn from_event(event: &GameEvent) -> Option<&Self> {
        match event {
            GameEvent::PlayerDamage(payload) => Some(payload),
            _ => None,
        }
    }
}

impl From<PlayerDamageEvent> for GameEvent {
    fn from(payload: PlayerDamageEvent) -> Self {
        GameEvent::PlayerDamage(payload)
    }
}

/// The player picked up coins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinCollectEvent {
    /// Coins collected in this pickup (not the running total).
    pub coins: i32,
}

impl CoinCollectEvent {
    pub fn new(coins: i32) -> Self {
        Self { coins }
    }
}

impl EventPayload for CoinCollectEvent {
    const KIND: EventKind = EventKind::CoinCollect;

    fn from_event(event: &GameEvent) -> Option<&Self> {
        match event {
            GameEvent::CoinCollect(payload) => Some(payload),
            _ => None,
        }
    }
}

impl From<CoinCollectEvent> for GameEvent {
    fn from(payload: CoinCollectEvent) -> Self {
        GameEvent::CoinCollect(payload)
    }
}

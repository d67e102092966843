//! Event types broadcast by subjects to their observers.
//!
//! The set of events is closed: every kind is a variant of [`GameEvent`] and
//! carries exactly the payload relevant to it. Adding a new kind means adding
//! a payload struct, an [`EventKind`] entry and a [`GameEvent`] variant.
//!
//! Submodules:
//! - [`player`] – payloads emitted by the [`Player`](crate::player::Player)
//!
//! Events are built right before dispatch and handed to observers by shared
//! reference; nothing keeps them after [`notify`](crate::subject::Subject::notify)
//! returns.
pub mod player;

use std::fmt;

pub use player::{CoinCollectEvent, PlayerDamageEvent};

/// Discriminant identifying the concrete shape of a [`GameEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PlayerDamage,
    CoinCollect,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::PlayerDamage => write!(f, "PLAYER_DAMAGE_EVENT"),
            EventKind::CoinCollect => write!(f, "COIN_COLLECT_EVENT"),
        }
    }
}

/// Something that happened in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PlayerDamage(PlayerDamageEvent),
    CoinCollect(CoinCollectEvent),
}

impl GameEvent {
    /// The discriminant of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::PlayerDamage(_) => EventKind::PlayerDamage,
            GameEvent::CoinCollect(_) => EventKind::CoinCollect,
        }
    }
}

/// A concrete payload type that can be extracted from a [`GameEvent`].
///
/// Used by [`event_cast`](crate::observers::event_cast) for checked typed
/// access to an event's payload.
pub trait EventPayload: Sized {
    /// The kind of event carrying this payload.
    const KIND: EventKind;

    /// Borrow the payload if `event` carries this type, `None` otherwise.
    fn from_event(event: &GameEvent) -> Option<&Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        let dmg = GameEvent::from(PlayerDamageEvent::new(95, 5));
        let coins = GameEvent::from(CoinCollectEvent::new(10));
        assert_eq!(dmg.kind(), EventKind::PlayerDamage);
        assert_eq!(coins.kind(), EventKind::CoinCollect);
    }

    #[test]
    fn test_kind_display_names() {
        assert_eq!(EventKind::PlayerDamage.to_string(), "PLAYER_DAMAGE_EVENT");
        assert_eq!(EventKind::CoinCollect.to_string(), "COIN_COLLECT_EVENT");
    }

    #[test]
    fn test_payload_kind_constants() {
        assert_eq!(PlayerDamageEvent::KIND, EventKind::PlayerDamage);
        assert_eq!(CoinCollectEvent::KIND, EventKind::CoinCollect);
    }
}

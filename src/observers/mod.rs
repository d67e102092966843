//! Observer capability and the concrete observers shipped with the game.
//!
//! An observer registers with a [`Subject`](crate::subject::Subject) and is
//! called back synchronously for every event the subject broadcasts. Each
//! observer matches on the [`GameEvent`] variants it cares about and silently
//! ignores the rest.
//!
//! Submodules:
//! - [`achievement`] – unlocks one-shot achievements from player events
//! - [`ui`] – prints pop-up messages for health and coin changes
//!
//! Observers are owned by the caller through an [`ObserverRef`]; subjects only
//! keep weak handles to them.
pub mod achievement;
pub mod ui;

use crate::events::{EventPayload, GameEvent};
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;

/// Something that reacts to [`GameEvent`]s broadcast by a subject.
pub trait Observer {
    /// Handle one event. Called once per registration, in registration order.
    fn on_notify(&mut self, event: &GameEvent);

    /// Short name used in diagnostics.
    fn name(&self) -> &str {
        "observer"
    }
}

/// Shared, caller-owned handle to an observer.
///
/// Subjects downgrade this to a weak reference when the observer is added, so
/// dropping the last `ObserverRef` releases the observer even while it is
/// still registered.
pub type ObserverRef = Rc<RefCell<dyn Observer>>;

/// Wrap a concrete observer in a shared handle.
///
/// Returns the concrete type so the caller can still inspect the observer's
/// state; it coerces to [`ObserverRef`] when registered.
pub fn observer_ref<O: Observer + 'static>(observer: O) -> Rc<RefCell<O>> {
    Rc::new(RefCell::new(observer))
}

/// Checked typed access to an event's payload.
///
/// Returns the payload when `event` carries a `T`. On a mismatch logs a
/// warning and returns `None`; the caller must skip whatever it meant to do
/// with the payload.
pub fn event_cast<T: EventPayload>(event: &GameEvent) -> Option<&T> {
    let payload = T::from_event(event);
    if payload.is_none() {
        warn!(
            "Event cast failed for event: expected {}, got {}",
            T::KIND,
            event.kind()
        );
    }
    payload
}

//! Subject capability: an ordered registry of observers and broadcast.
//!
//! A domain object becomes a subject by owning an [`ObserverRegistry`] and
//! implementing [`Subject`], which provides registration and broadcast on top
//! of it.
//!
//! The registry never owns its observers. It keeps [`Weak`] handles, so an
//! observer whose owner has dropped it is detected at broadcast time and
//! skipped instead of being called.
//!
//! # Example
//!
//! ```
//! use player_events::observers::observer_ref;
//! use player_events::observers::ui::Ui;
//! use player_events::player::Player;
//! use player_events::subject::Subject;
//!
//! let ui = observer_ref(Ui::new());
//! let mut player = Player::new(10, 0);
//! player.add_observer(ui.clone());
//! player.damage(4);
//! assert_eq!(ui.borrow().popups(), ["[UI]: You have 6 health!"]);
//! assert!(player.remove_observer(&ui));
//! ```

use crate::events::GameEvent;
use crate::observers::{Observer, ObserverRef};
use log::{debug, info, warn};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Ordered, non-owning list of registered observers.
///
/// Insertion order is preserved and duplicates are allowed: an observer added
/// twice is notified twice per broadcast.
#[derive(Default)]
pub struct ObserverRegistry {
    entries: Vec<Weak<RefCell<dyn Observer>>>,
}

impl ObserverRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registrations, including released observers not yet pruned.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of registrations whose observer has already been dropped.
    pub fn released_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.strong_count() == 0)
            .count()
    }

    /// Whether `observer` is registered at least once.
    pub fn contains<O: Observer + ?Sized>(&self, observer: &Rc<RefCell<O>>) -> bool {
        self.position_of(observer).is_some()
    }

    /// Append `observer` to the end of the registry.
    pub fn add(&mut self, observer: ObserverRef) {
        self.entries.push(Rc::downgrade(&observer));
        debug!("Added an observer ({} registered)", self.entries.len());
    }

    /// Remove the first registration of `observer`.
    ///
    /// Returns `false` and leaves the registry unchanged when `observer` is
    /// not registered.
    pub fn remove<O: Observer + ?Sized>(&mut self, observer: &Rc<RefCell<O>>) -> bool {
        match self.position_of(observer) {
            Some(index) => {
                self.entries.remove(index);
                let name = observer
                    .try_borrow()
                    .map(|observer| observer.name().to_owned())
                    .unwrap_or_default();
                info!("Removed an observer '{}'", name);
                true
            }
            None => {
                warn!("Cannot find observer to remove!");
                false
            }
        }
    }

    /// Drop registrations whose observer has been released. Returns how many
    /// were removed.
    pub fn prune_released(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.strong_count() > 0);
        let pruned = before - self.entries.len();
        if pruned > 0 {
            debug!("Pruned {} released observer(s)", pruned);
        }
        pruned
    }

    /// Deliver `event` to every registered observer, in registration order.
    ///
    /// Returns once every observer has handled the event. Released observers
    /// and observers already handling an event further up the call stack are
    /// skipped with a warning. Returns the number of deliveries made.
    pub fn notify(&self, event: &GameEvent) -> usize {
        let mut delivered = 0;
        for (index, entry) in self.entries.iter().enumerate() {
            let Some(observer) = entry.upgrade() else {
                warn!(
                    "Skipping released observer at slot {} for {}",
                    index,
                    event.kind()
                );
                continue;
            };
            match observer.try_borrow_mut() {
                Ok(mut observer) => {
                    observer.on_notify(event);
                    delivered += 1;
                }
                Err(_) => {
                    warn!(
                        "Observer at slot {} is busy, skipping re-entrant {}",
                        index,
                        event.kind()
                    );
                }
            }
        }
        delivered
    }

    fn position_of<O: Observer + ?Sized>(&self, observer: &Rc<RefCell<O>>) -> Option<usize> {
        let target = Rc::as_ptr(observer);
        self.entries
            .iter()
            .position(|entry| std::ptr::addr_eq(entry.as_ptr(), target))
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("len", &self.len())
            .field("released", &self.released_count())
            .finish()
    }
}

/// Capability of broadcasting [`GameEvent`]s to registered observers.
///
/// Implementors only expose their [`ObserverRegistry`]; registration and
/// broadcast are provided.
pub trait Subject {
    fn registry(&self) -> &ObserverRegistry;

    fn registry_mut(&mut self) -> &mut ObserverRegistry;

    /// Register `observer`. The same observer may be registered more than once.
    fn add_observer(&mut self, observer: ObserverRef) {
        self.registry_mut().add(observer);
    }

    /// Remove the first registration of `observer`. See [`ObserverRegistry::remove`].
    fn remove_observer<O: Observer + ?Sized>(&mut self, observer: &Rc<RefCell<O>>) -> bool {
        self.registry_mut().remove(observer)
    }

    /// Broadcast `event` synchronously. See [`ObserverRegistry::notify`].
    fn notify(&self, event: &GameEvent) -> usize {
        self.registry().notify(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{CoinCollectEvent, PlayerDamageEvent};
    use crate::observers::observer_ref;

    /// Appends its tag to a shared log on every notification.
    struct Recorder {
        tag: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Observer for Recorder {
        fn on_notify(&mut self, _event: &GameEvent) {
            self.log.borrow_mut().push(self.tag);
        }
    }

    fn recorder(
        tag: &'static str,
        log: &Rc<RefCell<Vec<&'static str>>>,
    ) -> Rc<RefCell<Recorder>> {
        observer_ref(Recorder {
            tag,
            log: Rc::clone(log),
        })
    }

    fn damage() -> GameEvent {
        PlayerDamageEvent::new(95, 5).into()
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = ObserverRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.notify(&damage()), 0);
    }

    #[test]
    fn test_notify_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = recorder("a", &log);
        let b = recorder("b", &log);
        let c = recorder("c", &log);
        let mut registry = ObserverRegistry::new();
        registry.add(a.clone());
        registry.add(b.clone());
        registry.add(c.clone());

        assert_eq!(registry.notify(&damage()), 3);
        assert_eq!(*log.borrow(), ["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_registration_notified_twice() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = recorder("a", &log);
        let b = recorder("b", &log);
        let mut registry = ObserverRegistry::new();
        registry.add(a.clone());
        registry.add(b.clone());
        registry.add(a.clone());

        registry.notify(&CoinCollectEvent::new(1).into());
        assert_eq!(*log.borrow(), ["a", "b", "a"]);

        assert!(registry.remove(&a));
        assert_eq!(registry.len(), 2);
        log.borrow_mut().clear();
        registry.notify(&damage());
        assert_eq!(*log.borrow(), ["b", "a"]);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = recorder("a", &log);
        let b = recorder("b", &log);
        let c = recorder("c", &log);
        let mut registry = ObserverRegistry::new();
        registry.add(a.clone());
        registry.add(b.clone());
        registry.add(c.clone());

        assert!(registry.remove(&b));
        assert_eq!(registry.len(), 2);
        assert!(!registry.contains(&b));
        registry.notify(&damage());
        assert_eq!(*log.borrow(), ["a", "c"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = recorder("a", &log);
        let stranger = recorder("x", &log);
        let mut registry = ObserverRegistry::new();
        registry.add(a.clone());

        assert!(!registry.remove(&stranger));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(&a));
    }

    #[test]
    fn test_remove_through_dyn_handle() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let a: ObserverRef = recorder("a", &log);
        let mut registry = ObserverRegistry::new();
        registry.add(a.clone());
        assert!(registry.contains(&a));
        assert!(registry.remove(&a));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_released_observer_is_skipped() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = recorder("a", &log);
        let b = recorder("b", &log);
        let mut registry = ObserverRegistry::new();
        registry.add(a.clone());
        registry.add(b.clone());
        drop(a);

        assert_eq!(registry.released_count(), 1);
        assert_eq!(registry.notify(&damage()), 1);
        assert_eq!(*log.borrow(), ["b"]);

        assert_eq!(registry.prune_released(), 1);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.released_count(), 0);
    }

    #[test]
    fn test_busy_observer_is_skipped() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = recorder("a", &log);
        let b = recorder("b", &log);
        let mut registry = ObserverRegistry::new();
        registry.add(a.clone());
        registry.add(b.clone());

        let _held = a.borrow_mut();
        assert_eq!(registry.notify(&damage()), 1);
        assert_eq!(*log.borrow(), ["b"]);
    }
}

//! Fight lifecycle events and the observer dispatcher.
//!
//! Dispatch is synchronous: [`EventDispatcher::publish`] returns only after
//! every subscribed observer has handled the event, in subscription order.
//! Nothing is buffered.
//!
//! The dispatcher borrows its observers for `'o` and never owns them. The
//! borrow checker enforces the lifetime contract: an observer cannot be
//! dropped or inspected while it is still subscribed, and a callback cannot
//! reach back into the subscriber list.
//!
//! # Example
//!
//! ```
//! use arena_core::events::{EventDispatcher, FightEvent, FightObserver};
//!
//! #[derive(Default)]
//! struct RoundCounter(u32);
//!
//! impl FightObserver for RoundCounter {
//!     fn on_event(&mut self, event: &FightEvent<'_>) {
//!         if let FightEvent::RoundStart { .. } = event {
//!             self.0 += 1;
//!         }
//!     }
//! }
//!
//! let mut counter = RoundCounter::default();
//! {
//!     let mut events = EventDispatcher::new();
//!     events.subscribe(&mut counter);
//!     events.round_start(1);
//!     events.round_end(1);
//! }
//! assert_eq!(counter.0, 1);
//! ```

use crate::combatant::Combatant;

/// A fight lifecycle notification.
///
/// Combatant payloads are borrowed from the roster at the moment of
/// emission, so health values reflect the state right after the strike
/// that produced the event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FightEvent<'a> {
    /// A combatant was created by a species factory.
    Created {
        /// The new combatant.
        npc: &'a Combatant,
    },
    /// A round is about to be evaluated.
    RoundStart {
        /// Round number, starting at 1.
        round: u64,
    },
    /// A round has been fully evaluated.
    RoundEnd {
        /// Round number, starting at 1.
        round: u64,
    },
    /// One combatant damaged another.
    Attack {
        /// Side dealing the damage.
        attacker: &'a Combatant,
        /// Side receiving the damage.
        target: &'a Combatant,
    },
    /// A combatant's health dropped to zero or below.
    Death {
        /// The combatant that died.
        victim: &'a Combatant,
        /// The opponent in the engagement that killed it.
        killer: &'a Combatant,
    },
}

/// Receiver of fight lifecycle events.
///
/// Observers only consume events; they have no way to feed back into the
/// fight. An observer doing its own IO must contain its failures.
pub trait FightObserver {
    /// Handle one event.
    fn on_event(&mut self, event: &FightEvent<'_>);
}

/// Handle returned by [`EventDispatcher::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

/// Publish/subscribe fan-out of [`FightEvent`]s.
#[derive(Default)]
pub struct EventDispatcher<'o> {
    observers: Vec<(ObserverId, &'o mut dyn FightObserver)>,
    next_id: u64,
}

impl<'o> EventDispatcher<'o> {
    /// Create a dispatcher with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register an observer. It will be notified after every observer
    /// registered before it.
    pub fn subscribe(&mut self, observer: &'o mut dyn FightObserver) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove an observer. It receives no further events.
    ///
    /// The `'o` borrow of the observer still lasts until the dispatcher is
    /// dropped. Returns `false` if the handle was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Number of subscribed observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Deliver an event to every observer in subscription order.
    pub fn publish(&mut self, event: &FightEvent<'_>) {
        for (_, observer) in &mut self.observers {
            observer.on_event(event);
        }
    }

    /// Publish [`FightEvent::Created`].
    pub fn npc_created(&mut self, npc: &Combatant) {
        self.publish(&FightEvent::Created { npc });
    }

    /// Publish [`FightEvent::RoundStart`].
    pub fn round_start(&mut self, round: u64) {
        self.publish(&FightEvent::RoundStart { round });
    }

    /// Publish [`FightEvent::RoundEnd`].
    pub fn round_end(&mut self, round: u64) {
        self.publish(&FightEvent::RoundEnd { round });
    }

    /// Publish [`FightEvent::Attack`].
    pub fn attack(&mut self, attacker: &Combatant, target: &Combatant) {
        self.publish(&FightEvent::Attack { attacker, target });
    }

    /// Publish [`FightEvent::Death`].
    pub fn death(&mut self, victim: &Combatant, killer: &Combatant) {
        self.publish(&FightEvent::Death { victim, killer });
    }
}

impl std::fmt::Debug for EventDispatcher<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Appends `tag:round` for round events.
    struct Tagged<'a> {
        tag: &'static str,
        log: &'a std::cell::RefCell<Vec<String>>,
    }

    impl FightObserver for Tagged<'_> {
        fn on_event(&mut self, event: &FightEvent<'_>) {
            if let FightEvent::RoundStart { round } = event {
                self.log.borrow_mut().push(format!("{}:{round}", self.tag));
            }
        }
    }

    #[test]
    fn test_publish_in_subscription_order() {
        let log = std::cell::RefCell::new(Vec::new());
        let mut first = Tagged { tag: "a", log: &log };
        let mut second = Tagged { tag: "b", log: &log };

        let mut events = EventDispatcher::new();
        events.subscribe(&mut first);
        events.subscribe(&mut second);
        events.round_start(1);
        events.round_start(2);
        drop(events);

        assert_eq!(*log.borrow(), vec!["a:1", "b:1", "a:2", "b:2"]);
    }

    #[test]
    fn test_unsubscribe() {
        let log = std::cell::RefCell::new(Vec::new());
        let mut first = Tagged { tag: "a", log: &log };
        let mut second = Tagged { tag: "b", log: &log };

        let mut events = EventDispatcher::new();
        let a = events.subscribe(&mut first);
        events.subscribe(&mut second);
        assert_eq!(events.observer_count(), 2);

        assert!(events.unsubscribe(a));
        assert!(!events.unsubscribe(a));
        assert_eq!(events.observer_count(), 1);

        events.round_start(7);
        drop(events);

        assert_eq!(*log.borrow(), vec!["b:7"]);
    }

    #[test]
    fn test_publish_without_observers() {
        let mut events = EventDispatcher::new();
        events.round_start(1);
        events.round_end(1);
        assert_eq!(events.observer_count(), 0);
    }
}

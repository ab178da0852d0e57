//! Event dispatch system
//!
//! A keyed listener table: handlers are registered under a `(key, event)`
//! pair and invoked synchronously, in registration order, with a borrowed
//! payload.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Opaque registration token returned by [`EventDispatcher::register`].
///
/// Closures have no identity, so unregistration goes through the token
/// handed out at registration time. A stale token is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

/// Event handler function type
type Handler<P> = Box<dyn FnMut(&P)>;

/// Dispatches events to registered handlers
pub struct EventDispatcher<K, E, P> {
    handlers: FxHashMap<(K, E), Vec<(HandlerId, Handler<P>)>>,
    next_id: u64,
}

impl<K, E, P> EventDispatcher<K, E, P>
where
    K: Copy + Eq + Hash,
    E: Copy + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
            next_id: 0,
        }
    }

    /// Register a handler for a key and event type. Handlers for the same
    /// pair fire in registration order.
    pub fn register<F>(&mut self, key: K, event: E, handler: F) -> HandlerId
    where
        F: FnMut(&P) + 'static,
    {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers
            .entry((key, event))
            .or_default()
            .push((id, Box::new(handler)));
        id
    }

    /// Remove a previously registered handler. Returns false when the token
    /// does not match a live registration.
    pub fn unregister(&mut self, key: K, event: E, id: HandlerId) -> bool {
        let Some(list) = self.handlers.get_mut(&(key, event)) else {
            return false;
        };
        let before = list.len();
        list.retain(|(handler_id, _)| *handler_id != id);
        before != list.len()
    }

    /// Invoke every handler registered for `(key, event)`, synchronously and
    /// in registration order.
    pub fn dispatch(&mut self, key: K, event: E, payload: &P) {
        if let Some(list) = self.handlers.get_mut(&(key, event)) {
            for (_, handler) in list.iter_mut() {
                handler(payload);
            }
        }
    }

    /// Drop every handler registered under `key`, for any event.
    pub fn clear_key(&mut self, key: K) {
        self.handlers.retain(|(handler_key, _), _| *handler_key != key);
    }

    /// Number of handlers registered for `(key, event)`.
    pub fn handler_count(&self, key: K, event: E) -> usize {
        self.handlers.get(&(key, event)).map_or(0, Vec::len)
    }
}

impl<K, E, P> Default for EventDispatcher<K, E, P>
where
    K: Copy + Eq + Hash,
    E: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    enum Kind {
        Ping,
        Pong,
    }

    #[test]
    fn test_dispatch_fires_in_registration_order() {
        let mut dispatcher: EventDispatcher<u32, Kind, i32> = EventDispatcher::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = seen.clone();
        dispatcher.register(1, Kind::Ping, move |payload| {
            first.borrow_mut().push(("first", *payload));
        });
        let second = seen.clone();
        dispatcher.register(1, Kind::Ping, move |payload| {
            second.borrow_mut().push(("second", *payload));
        });

        dispatcher.dispatch(1, Kind::Ping, &7);
        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_dispatch_is_scoped_to_key_and_event() {
        let mut dispatcher: EventDispatcher<u32, Kind, i32> = EventDispatcher::new();
        let count = Rc::new(RefCell::new(0));

        let counter = count.clone();
        dispatcher.register(1, Kind::Ping, move |_| {
            *counter.borrow_mut() += 1;
        });

        dispatcher.dispatch(2, Kind::Ping, &0);
        dispatcher.dispatch(1, Kind::Pong, &0);
        assert_eq!(*count.borrow(), 0);

        dispatcher.dispatch(1, Kind::Ping, &0);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_unregister_removes_exactly_one_handler() {
        let mut dispatcher: EventDispatcher<u32, Kind, i32> = EventDispatcher::new();
        let count = Rc::new(RefCell::new(0));

        let kept = count.clone();
        dispatcher.register(1, Kind::Ping, move |_| {
            *kept.borrow_mut() += 1;
        });
        let dropped = count.clone();
        let id = dispatcher.register(1, Kind::Ping, move |_| {
            *dropped.borrow_mut() += 10;
        });

        assert!(dispatcher.unregister(1, Kind::Ping, id));
        assert_eq!(dispatcher.handler_count(1, Kind::Ping), 1);

        dispatcher.dispatch(1, Kind::Ping, &0);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_unregister_with_stale_token_is_noop() {
        let mut dispatcher: EventDispatcher<u32, Kind, i32> = EventDispatcher::new();
        let id = dispatcher.register(1, Kind::Ping, |_| {});
        assert!(dispatcher.unregister(1, Kind::Ping, id));
        assert!(!dispatcher.unregister(1, Kind::Ping, id));
        assert!(!dispatcher.unregister(9, Kind::Pong, id));
    }

    #[test]
    fn test_clear_key_drops_all_events_for_key() {
        let mut dispatcher: EventDispatcher<u32, Kind, i32> = EventDispatcher::new();
        dispatcher.register(1, Kind::Ping, |_| {});
        dispatcher.register(1, Kind::Pong, |_| {});
        dispatcher.register(2, Kind::Ping, |_| {});

        dispatcher.clear_key(1);
        assert_eq!(dispatcher.handler_count(1, Kind::Ping), 0);
        assert_eq!(dispatcher.handler_count(1, Kind::Pong), 0);
        assert_eq!(dispatcher.handler_count(2, Kind::Ping), 1);
    }
}

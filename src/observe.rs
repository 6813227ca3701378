//! Single-threaded listener registry shared by the theme store and the
//! viewport hub.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Handle returned by [`Observers::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Listener<T> = Rc<dyn Fn(&T)>;

pub struct Observers<T> {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ObserverId, Listener<T>)>>,
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self {
            next_id: Cell::new(1),
            listeners: RefCell::new(Vec::new()),
        }
    }
}

impl<T> Observers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Calls every listener registered at the time of the call.
    ///
    /// Listeners run against a snapshot, so they may subscribe or unsubscribe
    /// while being notified.
    pub fn notify(&self, value: &T) {
        let snapshot: Vec<Listener<T>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in snapshot {
            listener(value);
        }
    }

    pub fn clear(&self) {
        self.listeners.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }
}

impl<T: 'static> Observers<T> {
    /// Registers `listener` and returns a guard that unregisters it on drop.
    pub fn subscribe_scoped(self: &Rc<Self>, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = self.subscribe(listener);
        Subscription {
            registry: Rc::downgrade(self) as Weak<dyn Unsubscribe>,
            id,
        }
    }
}

trait Unsubscribe {
    fn remove(&self, id: ObserverId);
}

impl<T> Unsubscribe for Observers<T> {
    fn remove(&self, id: ObserverId) {
        self.unsubscribe(id);
    }
}

/// Keeps a listener registered for as long as it is alive.
#[must_use = "dropping a Subscription unregisters the listener immediately"]
pub struct Subscription {
    registry: Weak<dyn Unsubscribe>,
    id: ObserverId,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_reaches_every_listener_in_registration_order() {
        let observers = Observers::<u32>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["a", "b"] {
            let seen = Rc::clone(&seen);
            observers.subscribe(move |value: &u32| seen.borrow_mut().push(format!("{tag}{value}")));
        }

        observers.notify(&7);

        assert_eq!(*seen.borrow(), vec!["a7".to_string(), "b7".to_string()]);
    }

    #[test]
    fn unsubscribe_removes_only_the_given_listener() {
        let observers = Observers::<()>::new();
        let first = observers.subscribe(|_| {});
        let _second = observers.subscribe(|_| {});

        assert!(observers.unsubscribe(first));
        assert!(!observers.unsubscribe(first));
        assert_eq!(observers.len(), 1);
    }

    #[test]
    fn dropping_subscription_unregisters_listener() {
        let observers = Rc::new(Observers::<()>::new());
        let subscription = observers.subscribe_scoped(|_| {});
        assert_eq!(observers.len(), 1);

        drop(subscription);

        assert!(observers.is_empty());
    }

    #[test]
    fn subscription_outliving_registry_drops_quietly() {
        let observers = Rc::new(Observers::<()>::new());
        let subscription = observers.subscribe_scoped(|_| {});
        drop(observers);
        drop(subscription);
    }

    #[test]
    fn listener_may_unsubscribe_itself_during_notify() {
        let observers = Rc::new(Observers::<()>::new());
        let calls = Rc::new(Cell::new(0));
        let own_id = Rc::new(Cell::new(None));

        let id = {
            let registry = Rc::clone(&observers);
            let calls = Rc::clone(&calls);
            let own_id = Rc::clone(&own_id);
            observers.subscribe(move |_| {
                calls.set(calls.get() + 1);
                if let Some(id) = own_id.get() {
                    registry.unsubscribe(id);
                }
            })
        };
        own_id.set(Some(id));

        observers.notify(&());
        observers.notify(&());

        assert_eq!(calls.get(), 1);
    }
}

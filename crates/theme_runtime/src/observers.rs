//! Minimal ordered publish/subscribe primitive, independent of any UI reactivity system.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Registration identifier, unique within one [`Subscribers`] list.
pub(crate) struct SubscriberId(u64);

type Observer<T> = Rc<dyn Fn(&T)>;

struct SubscriberList<T> {
    next_id: u64,
    entries: Vec<(SubscriberId, Observer<T>)>,
}

trait Detach {
    fn detach(&self, id: SubscriberId);
}

impl<T> Detach for RefCell<SubscriberList<T>> {
    fn detach(&self, id: SubscriberId) {
        self.borrow_mut().entries.retain(|(entry, _)| *entry != id);
    }
}

/// Ordered observer list. Observers run synchronously in registration order.
pub struct Subscribers<T> {
    list: Rc<RefCell<SubscriberList<T>>>,
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self {
            list: Rc::new(RefCell::new(SubscriberList {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }
}

impl<T: 'static> Subscribers<T> {
    /// Appends `observer` and returns the handle that removes it.
    pub fn subscribe(&self, observer: Observer<T>) -> Subscription {
        let id = {
            let mut list = self.list.borrow_mut();
            let id = SubscriberId(list.next_id);
            list.next_id += 1;
            list.entries.push((id, observer));
            id
        };
        let list: Weak<dyn Detach> = Rc::downgrade(&self.list) as Weak<dyn Detach>;
        Subscription { id, list }
    }

    /// Calls every observer registered at the start of the pass with `value`.
    ///
    /// Observers may subscribe or unsubscribe while being notified; additions wait for the next
    /// pass and removals take effect immediately.
    pub fn notify(&self, value: &T) {
        let snapshot: Vec<(SubscriberId, Observer<T>)> = self.list.borrow().entries.clone();
        for (id, observer) in snapshot {
            let still_registered = self
                .list
                .borrow()
                .entries
                .iter()
                .any(|(entry, _)| *entry == id);
            if still_registered {
                observer(value);
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.list.borrow().entries.len()
    }
}

#[must_use = "dropping a Subscription keeps the observer registered; call `unsubscribe` to remove it"]
/// Handle returned by `subscribe`. Dropping it leaves the observer registered.
pub struct Subscription {
    id: SubscriberId,
    list: Weak<dyn Detach>,
}

impl Subscription {
    /// Removes the observer. A no-op when the owning store is gone.
    pub fn unsubscribe(self) {
        if let Some(list) = self.list.upgrade() {
            list.detach(self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use pretty_assertions::assert_eq;

    use super::*;

    fn recorder(log: &Rc<RefCell<Vec<String>>>, name: &'static str) -> Observer<u8> {
        let log = log.clone();
        Rc::new(move |value: &u8| log.borrow_mut().push(format!("{name}:{value}")))
    }

    #[test]
    fn notifies_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let subscribers = Subscribers::<u8>::default();
        let _first = subscribers.subscribe(recorder(&log, "a"));
        let _second = subscribers.subscribe(recorder(&log, "b"));

        subscribers.notify(&7);

        assert_eq!(*log.borrow(), vec!["a:7".to_string(), "b:7".to_string()]);
    }

    #[test]
    fn unsubscribe_removes_only_that_observer() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let subscribers = Subscribers::<u8>::default();
        let first = subscribers.subscribe(recorder(&log, "a"));
        let _second = subscribers.subscribe(recorder(&log, "b"));

        first.unsubscribe();
        subscribers.notify(&1);

        assert_eq!(*log.borrow(), vec!["b:1".to_string()]);
        assert_eq!(subscribers.len(), 1);
    }

    #[test]
    fn observer_removed_mid_pass_is_skipped() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let subscribers = Subscribers::<u8>::default();
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::default();

        let victim_slot = victim.clone();
        let _remover = subscribers.subscribe(Rc::new(move |_: &u8| {
            if let Some(subscription) = victim_slot.borrow_mut().take() {
                subscription.unsubscribe();
            }
        }));
        *victim.borrow_mut() = Some(subscribers.subscribe(recorder(&log, "victim")));

        subscribers.notify(&3);

        assert!(log.borrow().is_empty());
        assert_eq!(subscribers.len(), 1);
    }

    #[test]
    fn observer_added_mid_pass_waits_for_next_pass() {
        let calls = Rc::new(Cell::new(0));
        let subscribers = Rc::new(Subscribers::<u8>::default());
        let added = Rc::new(Cell::new(false));

        let inner_subscribers = subscribers.clone();
        let inner_calls = calls.clone();
        let _adder = subscribers.subscribe(Rc::new(move |_: &u8| {
            if !added.replace(true) {
                let counter = inner_calls.clone();
                let _late = inner_subscribers
                    .subscribe(Rc::new(move |_: &u8| counter.set(counter.get() + 1)));
            }
        }));

        subscribers.notify(&1);
        assert_eq!(calls.get(), 0);
        subscribers.notify(&2);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn unsubscribe_after_list_dropped_is_noop() {
        let subscribers = Subscribers::<u8>::default();
        let subscription = subscribers.subscribe(Rc::new(|_: &u8| {}));
        drop(subscribers);
        subscription.unsubscribe();
    }
}

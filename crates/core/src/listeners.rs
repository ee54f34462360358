//! Non-owning listener registry.
//!
//! Shapes and the scene broadcast change events to observers they do not
//! own. A [`ListenerSet`] keeps only [`Weak`] references, so an observer's
//! lifetime is independent of whatever it observes: dropping the observer is
//! enough to stop delivery, and explicit [`ListenerSet::remove`] is available
//! for orderly deregistration.
//!
//! Broadcasting always goes through [`ListenerSet::snapshot`]. Callbacks run
//! against that copy, so a listener that registers or removes listeners while
//! being notified cannot disturb the iteration in progress.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

pub struct ListenerSet<L: ?Sized> {
    listeners: RefCell<Vec<Weak<L>>>,
}

impl<L: ?Sized> ListenerSet<L> {
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Registers a listener. Registering the same listener twice is a no-op.
    pub fn add(&self, listener: Weak<L>) {
        let mut listeners = self.listeners.borrow_mut();
        if !listeners.iter().any(|l| Weak::ptr_eq(l, &listener)) {
            listeners.push(listener);
        }
    }

    /// Deregisters a listener. Unknown listeners are ignored.
    pub fn remove(&self, listener: &Weak<L>) {
        self.listeners
            .borrow_mut()
            .retain(|l| !Weak::ptr_eq(l, listener));
    }

    pub fn contains(&self, listener: &Weak<L>) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|l| Weak::ptr_eq(l, listener))
    }

    /// Number of listeners that are still alive.
    pub fn len(&self) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|l| l.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the live listeners in registration order, pruning dead entries.
    pub fn snapshot(&self) -> Vec<Rc<L>> {
        let mut listeners = self.listeners.borrow_mut();
        listeners.retain(|l| l.strong_count() > 0);
        listeners.iter().filter_map(Weak::upgrade).collect()
    }

    pub fn clear(&self) {
        self.listeners.borrow_mut().clear();
    }
}

impl<L: ?Sized> Default for ListenerSet<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ?Sized> fmt::Debug for ListenerSet<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSet")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    trait Ping {
        fn ping(&self);
    }

    #[derive(Default)]
    struct Counter {
        hits: Cell<usize>,
    }

    impl Ping for Counter {
        fn ping(&self) {
            self.hits.set(self.hits.get() + 1);
        }
    }

    fn weak(counter: &Rc<Counter>) -> Weak<dyn Ping> {
        Rc::downgrade(counter) as Weak<dyn Ping>
    }

    #[test]
    fn test_add_is_idempotent() {
        let set: ListenerSet<dyn Ping> = ListenerSet::new();
        let counter = Rc::new(Counter::default());

        set.add(weak(&counter));
        set.add(weak(&counter));
        assert_eq!(set.len(), 1);

        for l in set.snapshot() {
            l.ping();
        }
        assert_eq!(counter.hits.get(), 1);
    }

    #[test]
    fn test_remove() {
        let set: ListenerSet<dyn Ping> = ListenerSet::new();
        let a = Rc::new(Counter::default());
        let b = Rc::new(Counter::default());

        set.add(weak(&a));
        set.add(weak(&b));
        set.remove(&weak(&a));

        assert!(!set.contains(&weak(&a)));
        assert!(set.contains(&weak(&b)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_dropped_listener_is_pruned() {
        let set: ListenerSet<dyn Ping> = ListenerSet::new();
        let keep = Rc::new(Counter::default());
        {
            let gone = Rc::new(Counter::default());
            set.add(weak(&gone));
        }
        set.add(weak(&keep));

        let live = set.snapshot();
        assert_eq!(live.len(), 1);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_snapshot_preserves_registration_order() {
        let set: ListenerSet<dyn Ping> = ListenerSet::new();
        let a = Rc::new(Counter::default());
        let b = Rc::new(Counter::default());
        set.add(weak(&b));
        set.add(weak(&a));

        let snapshot = set.snapshot();
        snapshot[0].ping();
        assert_eq!(b.hits.get(), 1);
        assert_eq!(a.hits.get(), 0);
    }
}

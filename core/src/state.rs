//! A minimal single-threaded observable container.
//!
//! # Design
//! `Signal<T>` is an observer pattern over a plain mutable value: `get`
//! returns a snapshot, `set`/`update` commit a new value and notify every
//! subscriber with it. Handles are cheap `Rc` clones sharing one interior
//! cell; single-threaded call discipline means writes never race.
//! Notification runs after the interior borrow is released, so subscribers
//! may freely call `get` (but not `set`/`update`, which would re-enter).

use std::cell::RefCell;
use std::rc::Rc;

/// Identifies one subscription for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

struct SignalCell<T> {
    value: T,
    subscribers: Vec<(SubscriptionId, Rc<dyn Fn(&T)>)>,
    next_id: usize,
}

/// An observable value. Cloning the signal clones the handle, not the value.
pub struct Signal<T> {
    cell: Rc<RefCell<SignalCell<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: Clone> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            cell: Rc::new(RefCell::new(SignalCell {
                value,
                subscribers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.cell.borrow().value.clone()
    }

    /// Read the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.cell.borrow().value)
    }

    /// Replace the value and notify subscribers.
    pub fn set(&self, value: T) {
        self.cell.borrow_mut().value = value;
        self.notify();
    }

    /// Mutate the value in place and notify subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.cell.borrow_mut().value);
        self.notify();
    }

    /// Register a change observer, invoked with every committed value.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubscriptionId {
        let mut cell = self.cell.borrow_mut();
        let id = SubscriptionId(cell.next_id);
        cell.next_id += 1;
        cell.subscribers.push((id, Rc::new(f)));
        id
    }

    /// Remove a subscription. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.cell
            .borrow_mut()
            .subscribers
            .retain(|(sub_id, _)| *sub_id != id);
    }

    fn notify(&self) {
        let subscribers: Vec<Rc<dyn Fn(&T)>> = self
            .cell
            .borrow()
            .subscribers
            .iter()
            .map(|(_, f)| Rc::clone(f))
            .collect();
        let value = self.get();
        for subscriber in subscribers {
            subscriber(&value);
        }
    }
}

impl<T: Clone + Default> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_latest_committed_value() {
        let signal = Signal::new(1);
        signal.set(2);
        signal.update(|v| *v += 3);
        assert_eq!(signal.get(), 5);
    }

    #[test]
    fn subscribers_observe_every_commit() {
        let signal = Signal::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        signal.subscribe(move |v| sink.borrow_mut().push(*v));

        signal.set(1);
        signal.update(|v| *v = 2);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn unsubscribed_observer_stops_receiving() {
        let signal = Signal::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = signal.subscribe(move |v| sink.borrow_mut().push(*v));

        signal.set(1);
        signal.unsubscribe(id);
        signal.set(2);
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn subscriber_may_read_the_signal_during_notification() {
        let signal = Signal::new(10);
        let observed = Rc::new(RefCell::new(0));
        let handle = signal.clone();
        let sink = Rc::clone(&observed);
        signal.subscribe(move |_| *sink.borrow_mut() = handle.get());

        signal.set(11);
        assert_eq!(*observed.borrow(), 11);
    }

    #[test]
    fn clones_share_the_same_cell() {
        let signal = Signal::new("a".to_string());
        let other = signal.clone();
        other.set("b".to_string());
        assert_eq!(signal.get(), "b");
    }
}

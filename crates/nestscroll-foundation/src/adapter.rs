//! Data-change notifications from the adapter layer.
//!
//! Every mutation of the backing data is reported as one
//! [`AdapterChangeEvent`] through a single callback. Events are consumed
//! synchronously and never queued.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::ops::Range;
use std::rc::{Rc, Weak};

/// A mutation of the adapter's backing data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdapterChangeEvent {
    /// Everything may have changed.
    FullReset,
    RangeChanged { start: usize, count: usize },
    RangeInserted { start: usize, count: usize },
    RangeRemoved { start: usize, count: usize },
    RangeMoved { from: usize, to: usize, count: usize },
}

impl AdapterChangeEvent {
    /// Positions touched by the event, in pre-change coordinates.
    ///
    /// `None` for [`FullReset`](Self::FullReset).
    pub fn affected_range(&self) -> Option<Range<usize>> {
        match *self {
            AdapterChangeEvent::FullReset => None,
            AdapterChangeEvent::RangeChanged { start, count }
            | AdapterChangeEvent::RangeInserted { start, count }
            | AdapterChangeEvent::RangeRemoved { start, count } => {
                Some(start..start.saturating_add(count))
            }
            AdapterChangeEvent::RangeMoved { from, to, count } => {
                Some(from.min(to)..from.max(to).saturating_add(count))
            }
        }
    }

    /// Returns true if the item count may differ after this event.
    pub fn changes_item_count(&self) -> bool {
        matches!(
            self,
            AdapterChangeEvent::FullReset
                | AdapterChangeEvent::RangeInserted { .. }
                | AdapterChangeEvent::RangeRemoved { .. }
        )
    }
}

impl fmt::Display for AdapterChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdapterChangeEvent::FullReset => write!(f, "full reset"),
            AdapterChangeEvent::RangeChanged { start, count } => {
                write!(f, "{count} item(s) changed at {start}")
            }
            AdapterChangeEvent::RangeInserted { start, count } => {
                write!(f, "{count} item(s) inserted at {start}")
            }
            AdapterChangeEvent::RangeRemoved { start, count } => {
                write!(f, "{count} item(s) removed at {start}")
            }
            AdapterChangeEvent::RangeMoved { from, to, count } => {
                write!(f, "{count} item(s) moved from {from} to {to}")
            }
        }
    }
}

type Observer = Rc<dyn Fn(&AdapterChangeEvent)>;

#[derive(Default)]
struct ObservableInner {
    observers: RefCell<FxHashMap<u64, Observer>>,
    next_id: Cell<u64>,
}

/// Registry the data source notifies whenever its data mutates.
#[derive(Clone, Default)]
pub struct AdapterObservable {
    inner: Rc<ObservableInner>,
}

impl AdapterObservable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an observer. Dropping the registration removes it again.
    pub fn register(
        &self,
        observer: impl Fn(&AdapterChangeEvent) + 'static,
    ) -> ObserverRegistration {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .observers
            .borrow_mut()
            .insert(id, Rc::new(observer));
        ObserverRegistration {
            observable: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    /// Delivers `event` to every observer in registration order.
    ///
    /// Observers may register or unregister while being notified; changes
    /// take effect from the next event.
    pub fn notify(&self, event: &AdapterChangeEvent) {
        let mut observers: SmallVec<[(u64, Observer); 4]> = self
            .inner
            .observers
            .borrow()
            .iter()
            .map(|(id, observer)| (*id, Rc::clone(observer)))
            .collect();
        observers.sort_unstable_by_key(|(id, _)| *id);
        for (_, observer) in observers {
            observer(event);
        }
    }

    pub fn notify_data_set_changed(&self) {
        self.notify(&AdapterChangeEvent::FullReset);
    }

    pub fn notify_item_range_changed(&self, start: usize, count: usize) {
        self.notify(&AdapterChangeEvent::RangeChanged { start, count });
    }

    pub fn notify_item_range_inserted(&self, start: usize, count: usize) {
        self.notify(&AdapterChangeEvent::RangeInserted { start, count });
    }

    pub fn notify_item_range_removed(&self, start: usize, count: usize) {
        self.notify(&AdapterChangeEvent::RangeRemoved { start, count });
    }

    pub fn notify_item_moved(&self, from: usize, to: usize) {
        self.notify(&AdapterChangeEvent::RangeMoved { from, to, count: 1 });
    }

    pub fn observer_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }
}

/// Keeps an observer registered with an [`AdapterObservable`].
pub struct ObserverRegistration {
    observable: Weak<ObservableInner>,
    id: Option<u64>,
}

impl ObserverRegistration {
    pub fn is_registered(&self) -> bool {
        match (self.id, self.observable.upgrade()) {
            (Some(id), Some(inner)) => inner.observers.borrow().contains_key(&id),
            _ => false,
        }
    }

    pub fn unregister(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let (Some(id), Some(inner)) = (self.id.take(), self.observable.upgrade()) {
            inner.observers.borrow_mut().remove(&id);
        }
    }
}

impl Drop for ObserverRegistration {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ObserverRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistration")
            .field("id", &self.id)
            .field("registered", &self.is_registered())
            .finish()
    }
}

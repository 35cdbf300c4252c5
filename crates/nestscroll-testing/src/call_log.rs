//! Shared, ordered record of the scroll operations fakes receive.

use std::cell::RefCell;
use std::rc::Rc;

/// One recorded operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Call {
    ContainerScrollTo { x: i32, y: i32 },
    ListScrollTo(usize),
    ListSmoothScrollTo(usize),
    ListScrollBy { delta: i32, consumed: i32 },
    Measure { height: i32 },
}

/// Cheaply cloneable log shared between a fake container and a fake engine,
/// so tests can assert on the interleaving of their calls.
#[derive(Clone, Debug, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<Call>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Recorded calls without measurement passes.
    pub fn scroll_calls(&self) -> Vec<Call> {
        self.calls
            .borrow()
            .iter()
            .copied()
            .filter(|call| !matches!(call, Call::Measure { .. }))
            .collect()
    }

    pub fn measure_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, Call::Measure { .. }))
            .count()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

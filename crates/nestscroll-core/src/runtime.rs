use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use std::thread::ThreadId;

use crate::layout_suppression::LayoutSuppression;
use crate::platform::RuntimeScheduler;
use crate::pre_draw::{PreDrawOutcome, PreDrawRegistration};
use crate::{NodeId, PreDrawCallbackId};

type PreDrawCallback = Box<dyn FnOnce() -> PreDrawOutcome + 'static>;

pub(crate) struct PreDrawEntry {
    id: PreDrawCallbackId,
    callback: Option<PreDrawCallback>,
}

pub(crate) struct RuntimeInner {
    scheduler: Rc<dyn RuntimeScheduler>,
    needs_frame: Cell<bool>,
    layout_requests: RefCell<FxHashSet<NodeId>>,
    pre_draw_callbacks: RefCell<VecDeque<PreDrawEntry>>,
    next_pre_draw_id: Cell<PreDrawCallbackId>,
    suppression_depth: Cell<u32>,
    swallowed_requests: Cell<usize>,
    ui_thread_id: ThreadId,
}

impl RuntimeInner {
    fn new(scheduler: Rc<dyn RuntimeScheduler>) -> Self {
        Self {
            scheduler,
            needs_frame: Cell::new(false),
            layout_requests: RefCell::new(FxHashSet::default()),
            pre_draw_callbacks: RefCell::new(VecDeque::new()),
            next_pre_draw_id: Cell::new(1),
            suppression_depth: Cell::new(0),
            swallowed_requests: Cell::new(0),
            ui_thread_id: std::thread::current().id(),
        }
    }

    fn schedule(&self) {
        self.needs_frame.set(true);
        self.scheduler.schedule_frame();
    }

    fn request_layout(&self, node: NodeId) {
        if self.suppression_depth.get() > 0 {
            self.swallowed_requests
                .set(self.swallowed_requests.get() + 1);
            log::trace!("layout request for node {node} swallowed while suppressed");
            return;
        }
        let inserted = self.layout_requests.borrow_mut().insert(node);
        if inserted {
            self.schedule();
        }
    }

    fn take_layout_requests(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.layout_requests.borrow_mut().drain().collect();
        nodes.sort_unstable();
        self.refresh_needs_frame();
        nodes
    }

    fn has_layout_requests(&self) -> bool {
        !self.layout_requests.borrow().is_empty()
    }

    fn register_pre_draw(&self, callback: PreDrawCallback) -> PreDrawCallbackId {
        let id = self.next_pre_draw_id.get();
        self.next_pre_draw_id.set(id + 1);
        self.pre_draw_callbacks.borrow_mut().push_back(PreDrawEntry {
            id,
            callback: Some(callback),
        });
        self.schedule();
        id
    }

    fn cancel_pre_draw(&self, id: PreDrawCallbackId) {
        let mut callbacks = self.pre_draw_callbacks.borrow_mut();
        if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
            callbacks.remove(index);
        }
        drop(callbacks);
        self.refresh_needs_frame();
    }

    fn is_pre_draw_pending(&self, id: PreDrawCallbackId) -> bool {
        self.pre_draw_callbacks
            .borrow()
            .iter()
            .any(|entry| entry.id == id)
    }

    fn has_pre_draw_callbacks(&self) -> bool {
        !self.pre_draw_callbacks.borrow().is_empty()
    }

    fn dispatch_pre_draw(&self) -> PreDrawOutcome {
        // Callbacks queued while dispatching belong to the next frame.
        let mut pending: SmallVec<[PreDrawCallback; 4]> = SmallVec::new();
        {
            let mut callbacks = self.pre_draw_callbacks.borrow_mut();
            while let Some(mut entry) = callbacks.pop_front() {
                if let Some(callback) = entry.callback.take() {
                    pending.push(callback);
                }
            }
        }
        let mut outcome = PreDrawOutcome::Proceed;
        for callback in pending {
            outcome = outcome.combine(callback());
        }
        self.refresh_needs_frame();
        outcome
    }

    fn enter_suppression(&self) {
        self.suppression_depth.set(self.suppression_depth.get() + 1);
    }

    fn exit_suppression(&self) {
        let depth = self.suppression_depth.get();
        debug_assert!(depth > 0, "layout suppression depth underflowed");
        self.suppression_depth.set(depth.saturating_sub(1));
    }

    fn refresh_needs_frame(&self) {
        if !self.has_layout_requests() && !self.has_pre_draw_callbacks() {
            self.needs_frame.set(false);
        }
    }
}

/// Owns the runtime state. Lists and containers hold [`RuntimeHandle`]s.
#[derive(Clone)]
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new(scheduler: Rc<dyn RuntimeScheduler>) -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new(scheduler)),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
            ui_thread_id: self.inner.ui_thread_id,
        }
    }

    pub fn needs_frame(&self) -> bool {
        self.inner.needs_frame.get()
    }

    pub fn set_needs_frame(&self, value: bool) {
        self.inner.needs_frame.set(value);
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new(Rc::new(DefaultScheduler))
    }
}

#[derive(Default)]
pub struct DefaultScheduler;

impl RuntimeScheduler for DefaultScheduler {
    fn schedule_frame(&self) {}
}

/// Weak handle to a [`Runtime`].
///
/// Every operation is a silent no-op once the runtime has been dropped, so a
/// list that outlives its host never fails.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
    ui_thread_id: ThreadId,
}

impl RuntimeHandle {
    /// Asks the host to lay `node` out again on its next layout pass.
    ///
    /// Requests coalesce: asking twice before the host drains them yields a
    /// single entry.
    pub fn request_layout(&self, node: NodeId) {
        self.assert_ui_thread();
        if let Some(inner) = self.inner.upgrade() {
            inner.request_layout(node);
        }
    }

    /// Drains pending layout requests in ascending node order.
    pub fn take_layout_requests(&self) -> Vec<NodeId> {
        self.inner
            .upgrade()
            .map(|inner| inner.take_layout_requests())
            .unwrap_or_default()
    }

    pub fn has_layout_requests(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.has_layout_requests())
            .unwrap_or(false)
    }

    /// Number of layout requests dropped by [`LayoutSuppression`] guards so far.
    pub fn swallowed_layout_requests(&self) -> usize {
        self.inner
            .upgrade()
            .map(|inner| inner.swallowed_requests.get())
            .unwrap_or(0)
    }

    /// Queues `callback` to run once right before the next draw.
    ///
    /// Dropping the returned registration withdraws the callback.
    pub fn register_pre_draw(
        &self,
        callback: impl FnOnce() -> PreDrawOutcome + 'static,
    ) -> PreDrawRegistration {
        self.assert_ui_thread();
        match self.inner.upgrade() {
            Some(inner) => {
                let id = inner.register_pre_draw(Box::new(callback));
                PreDrawRegistration::new(self.clone(), id)
            }
            None => PreDrawRegistration::inactive(self.clone()),
        }
    }

    pub(crate) fn cancel_pre_draw(&self, id: PreDrawCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_pre_draw(id);
        }
    }

    pub(crate) fn is_pre_draw_pending(&self, id: PreDrawCallbackId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.is_pre_draw_pending(id))
            .unwrap_or(false)
    }

    pub fn has_pre_draw_callbacks(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.has_pre_draw_callbacks())
            .unwrap_or(false)
    }

    /// Runs every queued pre-draw callback once.
    ///
    /// The host must skip the current draw when this returns
    /// [`PreDrawOutcome::CancelDraw`].
    pub fn dispatch_pre_draw(&self) -> PreDrawOutcome {
        self.assert_ui_thread();
        self.inner
            .upgrade()
            .map(|inner| inner.dispatch_pre_draw())
            .unwrap_or(PreDrawOutcome::Proceed)
    }

    /// Swallows layout requests until the returned guard is dropped.
    pub fn suppress_layout_requests(&self) -> LayoutSuppression {
        if let Some(inner) = self.inner.upgrade() {
            inner.enter_suppression();
        }
        LayoutSuppression::new(self.clone())
    }

    pub(crate) fn release_suppression(&self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.exit_suppression();
        }
    }

    pub fn is_layout_suppressed(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.suppression_depth.get() > 0)
            .unwrap_or(false)
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    pub fn assert_ui_thread(&self) {
        debug_assert_eq!(
            std::thread::current().id(),
            self.ui_thread_id,
            "layout state touched off the runtime's UI thread"
        );
    }
}

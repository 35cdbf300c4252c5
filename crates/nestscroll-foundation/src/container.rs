//! The outer scrolling container that hosts coordinated lists.
//!
//! [`CoordinatingContainer`] is the only view of the container a list ever
//! gets. [`ScrollContainer`] is the stock implementation hosts can use
//! directly.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use nestscroll_core::NodeId;

/// Queries and commands a list may issue against the container above it.
///
/// Methods take `&self`: containers are shared with their lists and keep
/// their mutable state in cells.
pub trait CoordinatingContainer {
    /// Height from the container's last measure pass; 0 while unmeasured.
    fn measured_height(&self) -> i32;

    /// Height of the container's viewport after layout.
    fn height(&self) -> i32;

    /// Sum of the extents of the container's children.
    fn content_height(&self) -> i32;

    fn scroll_y(&self) -> i32;

    fn scroll_to(&self, x: i32, y: i32);

    /// Content-space offset of `list`'s top edge, or `None` if the container
    /// does not coordinate that list.
    fn coordinated_top(&self, list: NodeId) -> Option<f32>;

    fn is_coordinated_with(&self, list: NodeId) -> bool {
        self.coordinated_top(list).is_some()
    }
}

type ScrollListener = Rc<dyn Fn(i32)>;

/// Stock vertical scroll container.
///
/// Holds the scroll offset, the measured and laid-out heights, and the
/// content-space top of each coordinated list. Share it as
/// `Rc<ScrollContainer>`; lists keep only a weak reference.
pub struct ScrollContainer {
    id: NodeId,
    scroll_x: Cell<i32>,
    scroll_y: Cell<i32>,
    measured_height: Cell<i32>,
    height: Cell<i32>,
    content_height: Cell<i32>,
    coordinated: RefCell<FxHashMap<NodeId, f32>>,
    /// Called with the new offset after every programmatic scroll.
    scroll_listeners: RefCell<FxHashMap<u64, ScrollListener>>,
    next_listener_id: Cell<u64>,
}

impl ScrollContainer {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            scroll_x: Cell::new(0),
            scroll_y: Cell::new(0),
            measured_height: Cell::new(0),
            height: Cell::new(0),
            content_height: Cell::new(0),
            coordinated: RefCell::new(FxHashMap::default()),
            scroll_listeners: RefCell::new(FxHashMap::default()),
            next_listener_id: Cell::new(1),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn set_measured_height(&self, height: i32) {
        self.measured_height.set(height.max(0));
    }

    /// Records the viewport height assigned by layout.
    pub fn set_height(&self, height: i32) {
        self.height.set(height.max(0));
        self.clamp_scroll();
    }

    pub fn set_content_height(&self, height: i32) {
        self.content_height.set(height.max(0));
        self.clamp_scroll();
    }

    /// Maximum scroll offset: content beyond the viewport.
    pub fn max_scroll_y(&self) -> i32 {
        (self.content_height.get() - self.height.get()).max(0)
    }

    pub fn scroll_x(&self) -> i32 {
        self.scroll_x.get()
    }

    /// Starts coordinating `list`, whose top edge sits at `top` in content space.
    pub fn coordinate(&self, list: NodeId, top: f32) {
        self.coordinated.borrow_mut().insert(list, top);
    }

    pub fn stop_coordinating(&self, list: NodeId) {
        self.coordinated.borrow_mut().remove(&list);
    }

    pub fn coordinated_count(&self) -> usize {
        self.coordinated.borrow().len()
    }

    /// Scrolls by `delta`, clamped to `[0, max_scroll_y]`. Returns the amount
    /// actually scrolled.
    pub fn scroll_by(&self, delta: i32) -> i32 {
        let current = self.scroll_y.get();
        let target = current.saturating_add(delta).clamp(0, self.max_scroll_y());
        if target != current {
            self.scroll_y.set(target);
            self.notify_scrolled(target);
        }
        target - current
    }

    pub fn add_scroll_listener(&self, listener: impl Fn(i32) + 'static) -> u64 {
        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);
        self.scroll_listeners
            .borrow_mut()
            .insert(id, Rc::new(listener));
        id
    }

    pub fn remove_scroll_listener(&self, id: u64) {
        self.scroll_listeners.borrow_mut().remove(&id);
    }

    fn clamp_scroll(&self) {
        let clamped = self.scroll_y.get().clamp(0, self.max_scroll_y());
        self.scroll_y.set(clamped);
    }

    /// Listeners run in registration order. Listeners added or removed
    /// while notifying take effect from the next scroll.
    fn notify_scrolled(&self, offset: i32) {
        let mut listeners: SmallVec<[(u64, ScrollListener); 4]> = self
            .scroll_listeners
            .borrow()
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();
        listeners.sort_unstable_by_key(|(id, _)| *id);
        for (_, listener) in listeners {
            listener(offset);
        }
    }
}

impl CoordinatingContainer for ScrollContainer {
    fn measured_height(&self) -> i32 {
        self.measured_height.get()
    }

    fn height(&self) -> i32 {
        self.height.get()
    }

    fn content_height(&self) -> i32 {
        self.content_height.get()
    }

    fn scroll_y(&self) -> i32 {
        self.scroll_y.get()
    }

    /// Jumps to `(x, y)`, clamping `y` to the scrollable range. Listeners are
    /// told about every call, even when the offset does not move.
    fn scroll_to(&self, x: i32, y: i32) {
        let clamped = y.clamp(0, self.max_scroll_y());
        self.scroll_x.set(x);
        self.scroll_y.set(clamped);
        self.notify_scrolled(clamped);
    }

    fn coordinated_top(&self, list: NodeId) -> Option<f32> {
        self.coordinated.borrow().get(&list).copied()
    }
}

impl fmt::Debug for ScrollContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollContainer")
            .field("id", &self.id)
            .field("scroll_y", &self.scroll_y.get())
            .field("measured_height", &self.measured_height.get())
            .field("height", &self.height.get())
            .field("content_height", &self.content_height.get())
            .field("coordinated", &self.coordinated_count())
            .finish()
    }
}

//! Deterministic list engine with fixed item heights.
//!
//! Items are stacked top to bottom in content space, each wrapped in the
//! same vertical decoration. A layout pass binds every item that intersects
//! the visible window `[scroll_offset, scroll_offset + available)`; an
//! unbounded height spec binds all of them and a zero-height one binds none.

use std::rc::Rc;

use nestscroll_core::{NodeId, RuntimeHandle};
use nestscroll_foundation::{FlingVelocitySource, ListLayoutEngine, ListScrollState};
use nestscroll_layout::{EdgeInsets, MeasureMode, MeasureSpec, Rect, Size};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::call_log::{Call, CallLog};
use crate::fling::FakeFlingSource;

const DEFAULT_WIDTH: i32 = 320;

#[derive(Clone, Copy, Debug)]
struct LaidOutChild {
    position: usize,
    bounds: Rect,
    decorated: Rect,
}

pub struct FakeListEngine {
    item_heights: Vec<i32>,
    padding: EdgeInsets,
    decoration: EdgeInsets,
    scroll_offset: i32,
    /// Content extent the last pass could show; `None` when unbounded.
    viewport: Option<i32>,
    measured: Size,
    width: i32,
    children: Vec<LaidOutChild>,
    child_scroll: FxHashMap<usize, i32>,
    detached: FxHashSet<usize>,
    blank_passes: usize,
    scroll_state: ListScrollState,
    fling: Option<Rc<FakeFlingSource>>,
    layout_requester: Option<(RuntimeHandle, NodeId)>,
    log: CallLog,
}

impl FakeListEngine {
    pub fn new(item_heights: Vec<i32>) -> Self {
        Self {
            item_heights,
            padding: EdgeInsets::ZERO,
            decoration: EdgeInsets::ZERO,
            scroll_offset: 0,
            viewport: None,
            measured: Size::ZERO,
            width: 0,
            children: Vec::new(),
            child_scroll: FxHashMap::default(),
            detached: FxHashSet::default(),
            blank_passes: 0,
            scroll_state: ListScrollState::Idle,
            fling: None,
            layout_requester: None,
            log: CallLog::new(),
        }
    }

    /// `count` items of `height` pixels each.
    pub fn uniform(count: usize, height: i32) -> Self {
        Self::new(vec![height; count])
    }

    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    /// Vertical space every item's decoration adds around it.
    pub fn with_decoration(mut self, decoration: EdgeInsets) -> Self {
        self.decoration = decoration;
        self
    }

    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = log;
        self
    }

    pub fn with_fling(mut self, fling: Rc<FakeFlingSource>) -> Self {
        self.fling = Some(fling);
        self
    }

    /// Makes the engine request a layout of `node` whenever it scrolls, as a
    /// real engine does when scrolling binds new rows.
    pub fn requesting_layout_on_scroll(mut self, runtime: RuntimeHandle, node: NodeId) -> Self {
        self.layout_requester = Some((runtime, node));
        self
    }

    /// The next `passes` layout passes bind nothing, like an engine whose
    /// layout manager is not attached yet.
    pub fn render_nothing_for(&mut self, passes: usize) {
        self.blank_passes = passes;
    }

    pub fn log(&self) -> &CallLog {
        &self.log
    }

    pub fn set_item_heights(&mut self, item_heights: Vec<i32>) {
        self.item_heights = item_heights;
    }

    pub fn insert_items(&mut self, at: usize, heights: &[i32]) {
        let at = at.min(self.item_heights.len());
        self.item_heights.splice(at..at, heights.iter().copied());
    }

    pub fn remove_items(&mut self, start: usize, count: usize) {
        let end = (start + count).min(self.item_heights.len());
        let start = start.min(end);
        self.item_heights.drain(start..end);
    }

    /// Scrolls the inner content of the child bound to `position`.
    pub fn set_child_scroll_y(&mut self, position: usize, scroll_y: i32) {
        self.child_scroll.insert(position, scroll_y);
    }

    /// Marks `position` as mid-recycle: its child reports no adapter position.
    pub fn detach_position(&mut self, position: usize) {
        self.detached.insert(position);
    }

    pub fn scroll_offset(&self) -> i32 {
        self.scroll_offset
    }

    /// Adapter positions bound by the last pass, top to bottom.
    pub fn rendered_positions(&self) -> Vec<usize> {
        self.children.iter().map(|child| child.position).collect()
    }

    /// Decorated height of all items together.
    pub fn content_height(&self) -> i32 {
        self.item_heights
            .iter()
            .map(|height| height + self.decoration.vertical())
            .sum()
    }

    fn item_top(&self, position: usize) -> i32 {
        self.item_heights
            .iter()
            .take(position)
            .map(|height| height + self.decoration.vertical())
            .sum()
    }

    fn max_scroll_offset(&self) -> i32 {
        match self.viewport {
            Some(viewport) => (self.content_height() - viewport).max(0),
            None => 0,
        }
    }

    fn layout_children(&mut self) {
        self.children.clear();
        if self.blank_passes > 0 {
            self.blank_passes -= 1;
            return;
        }
        self.scroll_offset = self.scroll_offset.clamp(0, self.max_scroll_offset());
        let window_end = self.viewport.map(|viewport| self.scroll_offset + viewport);
        if window_end == Some(self.scroll_offset) {
            return;
        }

        let mut content_top = 0;
        for (position, height) in self.item_heights.iter().copied().enumerate() {
            let content_bottom = content_top + height + self.decoration.vertical();
            let visible = content_bottom > self.scroll_offset
                && window_end.map_or(true, |end| content_top < end);
            if visible {
                let top = self.padding.top + content_top - self.scroll_offset;
                let decorated = Rect::new(
                    self.padding.left,
                    top,
                    self.width - self.padding.right,
                    top + height + self.decoration.vertical(),
                );
                let bounds = Rect::new(
                    decorated.left,
                    decorated.top + self.decoration.top,
                    decorated.right,
                    decorated.bottom - self.decoration.bottom,
                );
                self.children.push(LaidOutChild {
                    position,
                    bounds,
                    decorated,
                });
            }
            content_top = content_bottom;
        }
    }
}

impl ListLayoutEngine for FakeListEngine {
    type Child = usize;

    fn measure_with_spec(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        self.log.push(Call::Measure {
            height: height.size,
        });
        self.width = width.resolve(DEFAULT_WIDTH);
        self.viewport = height.available(self.padding);
        self.layout_children();

        let desired = self.content_height() + self.padding.vertical();
        let measured_height = match height.mode {
            MeasureMode::Exactly => height.size,
            MeasureMode::AtMost | MeasureMode::Unspecified => height.resolve(desired),
        };
        self.measured = Size::new(self.width, measured_height);
        self.measured
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn padding(&self) -> EdgeInsets {
        self.padding
    }

    fn item_count(&self) -> usize {
        self.item_heights.len()
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child_at(&self, index: usize) -> Option<usize> {
        (index < self.children.len()).then_some(index)
    }

    fn adapter_position_of(&self, child: usize) -> Option<usize> {
        let position = self.children.get(child)?.position;
        (!self.detached.contains(&position)).then_some(position)
    }

    fn child_bounds(&self, child: usize) -> Rect {
        self.children
            .get(child)
            .map(|child| child.bounds)
            .unwrap_or_default()
    }

    fn decorated_bounds_of(&self, child: usize) -> Rect {
        self.children
            .get(child)
            .map(|child| child.decorated)
            .unwrap_or_default()
    }

    fn child_scroll_y(&self, child: usize) -> i32 {
        self.children
            .get(child)
            .and_then(|child| self.child_scroll.get(&child.position))
            .copied()
            .unwrap_or(0)
    }

    fn vertical_scroll_range(&self) -> i32 {
        self.content_height() + self.padding.vertical()
    }

    fn scroll_vertically_by(&mut self, delta: i32) -> i32 {
        let before = self.scroll_offset;
        self.scroll_offset = (before + delta).clamp(0, self.max_scroll_offset());
        let consumed = self.scroll_offset - before;
        self.log.push(Call::ListScrollBy { delta, consumed });
        if consumed != 0 {
            self.layout_children();
            if let Some((runtime, node)) = &self.layout_requester {
                runtime.request_layout(*node);
            }
        }
        consumed
    }

    fn scroll_to_position(&mut self, position: usize) {
        self.log.push(Call::ListScrollTo(position));
        self.scroll_offset = self.item_top(position);
        self.layout_children();
    }

    fn smooth_scroll_to_position(&mut self, position: usize) {
        self.log.push(Call::ListSmoothScrollTo(position));
        self.scroll_state = ListScrollState::Settling;
        self.scroll_offset = self.item_top(position);
        self.layout_children();
    }

    fn scroll_state(&self) -> ListScrollState {
        self.scroll_state
    }

    fn set_scroll_state(&mut self, state: ListScrollState) {
        self.scroll_state = state;
    }

    fn fling_velocity_source(&self) -> Option<&dyn FlingVelocitySource> {
        self.fling
            .as_deref()
            .map(|fling| fling as &dyn FlingVelocitySource)
    }
}

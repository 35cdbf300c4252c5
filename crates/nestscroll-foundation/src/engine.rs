//! The generic list-layout engine an [`AutoSizingList`](crate::AutoSizingList) drives.
//!
//! The engine positions children, recycles views and computes scroll deltas.
//! None of that is reimplemented here; the list only measures through it and
//! reads back what it laid out.

use nestscroll_layout::{EdgeInsets, MeasureSpec, Rect, Size};

use crate::velocity::FlingVelocitySource;

/// Scroll activity of a list, as seen by nested-scroll negotiation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ListScrollState {
    /// Not scrolling.
    #[default]
    Idle,
    /// Following a pointer.
    Dragging,
    /// Animating towards a final position (fling or smooth scroll).
    Settling,
}

/// Layout/recycling engine behind a list.
///
/// All rectangles are in list coordinates: `y == 0` is the list's top edge,
/// so rendered children start at `padding().top`.
pub trait ListLayoutEngine {
    /// Handle to a rendered child. Only valid until the next layout pass.
    type Child: Copy + std::fmt::Debug;

    /// Lays out children under the given constraints and returns the size taken.
    fn measure_with_spec(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Size produced by the most recent [`measure_with_spec`](Self::measure_with_spec).
    fn measured_size(&self) -> Size;

    fn padding(&self) -> EdgeInsets;

    /// Number of items the adapter currently provides.
    fn item_count(&self) -> usize;

    /// Number of children laid out by the last pass.
    fn child_count(&self) -> usize;

    fn child_at(&self, index: usize) -> Option<Self::Child>;

    /// Adapter position bound to `child`, or `None` while it is being recycled.
    fn adapter_position_of(&self, child: Self::Child) -> Option<usize>;

    /// The child's own layout box.
    fn child_bounds(&self, child: Self::Child) -> Rect;

    /// The child's box grown by its margins and item decorations.
    fn decorated_bounds_of(&self, child: Self::Child) -> Rect;

    /// Scroll offset inside the child itself (nested scrollable rows).
    fn child_scroll_y(&self, _child: Self::Child) -> i32 {
        0
    }

    /// Total vertical extent of the list's content.
    fn vertical_scroll_range(&self) -> i32;

    /// Scrolls by `delta` pixels and returns how many were consumed.
    fn scroll_vertically_by(&mut self, delta: i32) -> i32;

    fn scroll_to_position(&mut self, position: usize);

    fn smooth_scroll_to_position(&mut self, position: usize);

    fn scroll_state(&self) -> ListScrollState {
        ListScrollState::Idle
    }

    fn set_scroll_state(&mut self, _state: ListScrollState) {}

    /// Fling animator exposing its velocity, when the engine has one.
    fn fling_velocity_source(&self) -> Option<&dyn FlingVelocitySource> {
        None
    }

    fn first_child(&self) -> Option<Self::Child> {
        self.child_at(0)
    }

    fn last_child(&self) -> Option<Self::Child> {
        self.child_count()
            .checked_sub(1)
            .and_then(|index| self.child_at(index))
    }

    /// Rendered child bound to `position`, if that item is currently laid out.
    fn find_child_for_adapter_position(&self, position: usize) -> Option<Self::Child> {
        (0..self.child_count())
            .filter_map(|index| self.child_at(index))
            .find(|child| self.adapter_position_of(*child) == Some(position))
    }
}

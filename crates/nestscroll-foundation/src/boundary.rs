//! Overscroll edge detection for nested-scroll handoff.

use crate::engine::ListLayoutEngine;

/// Which logical edges a list currently rests on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverscrollEdges {
    pub top: bool,
    pub bottom: bool,
}

/// Stateless edge queries over a list's rendered children.
///
/// A list with nothing rendered sits on both edges, so any overscroll is
/// handed straight to the parent.
pub struct BoundaryDetector<'a, E: ListLayoutEngine> {
    engine: &'a E,
}

impl<'a, E: ListLayoutEngine> BoundaryDetector<'a, E> {
    pub fn new(engine: &'a E) -> Self {
        Self { engine }
    }

    /// True when the first item is rendered first and is not itself scrolled.
    pub fn is_at_top(&self) -> bool {
        let Some(first) = self.engine.first_child() else {
            return true;
        };
        self.engine.adapter_position_of(first) == Some(0) && self.engine.child_scroll_y(first) == 0
    }

    /// True when the final item is rendered last and its bottom edge plus the
    /// list's bottom padding lands exactly on the list's height.
    pub fn is_at_bottom(&self) -> bool {
        let Some(last) = self.engine.last_child() else {
            return true;
        };
        let Some(final_position) = self.engine.item_count().checked_sub(1) else {
            return false;
        };
        self.engine.adapter_position_of(last) == Some(final_position)
            && self.engine.child_bounds(last).bottom + self.engine.padding().bottom
                == self.engine.measured_size().height
    }

    pub fn edges(&self) -> OverscrollEdges {
        OverscrollEdges {
            top: self.is_at_top(),
            bottom: self.is_at_bottom(),
        }
    }
}

//! Nested scroll coordination between an outer container and the
//! auto-sizing lists it hosts.
//!
//! # Architecture
//!
//! - [`AutoSizingList`] wraps a [`ListLayoutEngine`] and sizes it to its
//!   content, up to the height the container can offer.
//! - [`ScrollCoordinator`] turns "scroll to item P" into a container scroll
//!   followed by a list scroll when the item would otherwise stay hidden.
//! - [`BoundaryDetector`] and [`VelocityProbe`] answer the questions nested
//!   scroll and fling handoff ask of a list.
//!
//! # Example
//!
//! ```rust,ignore
//! let container = Rc::new(ScrollContainer::new(CONTAINER_ID));
//! let config = AutoSizingListConfig::default().with_minimum_height(48);
//! let mut list = AutoSizingList::new(LIST_ID, engine, runtime.handle(), config);
//! list.attach_container(&container);
//! list.on_measure(MeasureSpec::exactly(1080), MeasureSpec::at_most(0));
//! list.smooth_scroll_to_position(42);
//! ```

pub mod adapter;
pub mod auto_sizing_list;
pub mod boundary;
pub mod container;
pub mod coordinator;
pub mod engine;
pub mod velocity;

#[cfg(test)]
mod tests;

pub use adapter::*;
pub use auto_sizing_list::*;
pub use boundary::*;
pub use container::*;
pub use coordinator::*;
pub use engine::*;
pub use velocity::*;

pub use nestscroll_core::NodeId;
pub use nestscroll_layout::{EdgeInsets, MeasureMode, MeasureSpec, Rect, Size};

pub mod prelude {
    pub use crate::adapter::{AdapterChangeEvent, AdapterObservable, ObserverRegistration};
    pub use crate::auto_sizing_list::{AutoSizingList, AutoSizingListConfig, SharedAutoSizingList};
    pub use crate::boundary::{BoundaryDetector, OverscrollEdges};
    pub use crate::container::{CoordinatingContainer, ScrollContainer};
    pub use crate::coordinator::{NavigationPlan, ScrollCoordinator, ScrollMode};
    pub use crate::engine::{ListLayoutEngine, ListScrollState};
    pub use crate::velocity::{FlingVelocitySource, VelocityProbe, VelocityReadError};
    pub use nestscroll_layout::prelude::*;
}

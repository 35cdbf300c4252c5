//! Layout runtime for nestscroll: layout requests, pre-draw callbacks and
//! layout-request suppression, all driven from the UI thread.

mod layout_suppression;
mod platform;
mod pre_draw;
mod runtime;

pub use layout_suppression::LayoutSuppression;
pub use platform::RuntimeScheduler;
pub use pre_draw::{PreDrawOutcome, PreDrawRegistration};
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle};

#[cfg(test)]
mod tests;

/// Identifies a node (list or container) in the host's view hierarchy.
pub type NodeId = usize;

pub(crate) type PreDrawCallbackId = u64;

pub mod prelude {
    pub use crate::layout_suppression::LayoutSuppression;
    pub use crate::pre_draw::{PreDrawOutcome, PreDrawRegistration};
    pub use crate::runtime::{Runtime, RuntimeHandle};
    pub use crate::NodeId;
}

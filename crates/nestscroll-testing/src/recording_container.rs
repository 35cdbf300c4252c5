use std::ops::Deref;

use nestscroll_core::NodeId;
use nestscroll_foundation::{CoordinatingContainer, ScrollContainer};

use crate::call_log::{Call, CallLog};

/// [`ScrollContainer`] that records every programmatic scroll into a
/// [`CallLog`], so tests can check it ran before the list's own scroll.
pub struct RecordingContainer {
    inner: ScrollContainer,
    log: CallLog,
}

impl RecordingContainer {
    pub fn new(id: NodeId, log: CallLog) -> Self {
        Self {
            inner: ScrollContainer::new(id),
            log,
        }
    }

    /// Container whose viewport and last measured height are both `height`.
    pub fn laid_out(id: NodeId, log: CallLog, height: i32, content_height: i32) -> Self {
        let container = Self::new(id, log);
        container.inner.set_measured_height(height);
        container.inner.set_height(height);
        container.inner.set_content_height(content_height);
        container
    }

    pub fn log(&self) -> &CallLog {
        &self.log
    }
}

impl Deref for RecordingContainer {
    type Target = ScrollContainer;

    fn deref(&self) -> &ScrollContainer {
        &self.inner
    }
}

impl CoordinatingContainer for RecordingContainer {
    fn measured_height(&self) -> i32 {
        self.inner.measured_height()
    }

    fn height(&self) -> i32 {
        self.inner.height()
    }

    fn content_height(&self) -> i32 {
        self.inner.content_height()
    }

    fn scroll_y(&self) -> i32 {
        self.inner.scroll_y()
    }

    fn scroll_to(&self, x: i32, y: i32) {
        self.log.push(Call::ContainerScrollTo { x, y });
        self.inner.scroll_to(x, y);
    }

    fn coordinated_top(&self, list: NodeId) -> Option<f32> {
        self.inner.coordinated_top(list)
    }
}

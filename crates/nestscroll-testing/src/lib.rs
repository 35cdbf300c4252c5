//! Testing utilities and harness for nestscroll

pub mod call_log;
pub mod fake_engine;
pub mod fling;
pub mod host;
pub mod logging;
pub mod recording_container;

pub use call_log::*;
pub use fake_engine::*;
pub use fling::*;
pub use host::*;
pub use logging::init_logging;
pub use recording_container::*;

pub mod prelude {
    pub use crate::call_log::{Call, CallLog};
    pub use crate::fake_engine::FakeListEngine;
    pub use crate::fling::FakeFlingSource;
    pub use crate::host::{FrameCounter, FrameReport, TestHost};
    pub use crate::logging::init_logging;
    pub use crate::recording_container::RecordingContainer;
}

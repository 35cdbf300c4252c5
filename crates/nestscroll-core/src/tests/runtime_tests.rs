use crate::{Runtime, RuntimeScheduler};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Default)]
struct CountingScheduler {
    frames: Cell<usize>,
}

impl RuntimeScheduler for CountingScheduler {
    fn schedule_frame(&self) {
        self.frames.set(self.frames.get() + 1);
    }
}

#[test]
fn layout_requests_coalesce_per_node() {
    let scheduler = Rc::new(CountingScheduler::default());
    let runtime = Runtime::new(scheduler.clone());
    let handle = runtime.handle();

    handle.request_layout(7);
    handle.request_layout(3);
    handle.request_layout(7);

    assert!(runtime.needs_frame());
    assert_eq!(scheduler.frames.get(), 2);
    assert_eq!(handle.take_layout_requests(), vec![3, 7]);
    assert!(!handle.has_layout_requests());
    assert!(!runtime.needs_frame());
}

#[test]
fn suppression_swallows_requests_until_guard_drops() {
    let runtime = Runtime::default();
    let handle = runtime.handle();

    {
        let _outer = handle.suppress_layout_requests();
        {
            let _inner = handle.suppress_layout_requests();
            handle.request_layout(1);
        }
        assert!(handle.is_layout_suppressed());
        handle.request_layout(2);
    }

    assert!(!handle.is_layout_suppressed());
    assert!(handle.take_layout_requests().is_empty());
    assert_eq!(handle.swallowed_layout_requests(), 2);

    handle.request_layout(2);
    assert_eq!(handle.take_layout_requests(), vec![2]);
}

#[test]
fn suppression_releases_on_early_return() {
    fn scroll_and_bail(handle: &crate::RuntimeHandle, bail: bool) -> Option<()> {
        let _guard = handle.suppress_layout_requests();
        if bail {
            return None;
        }
        Some(())
    }

    let runtime = Runtime::default();
    let handle = runtime.handle();
    assert!(scroll_and_bail(&handle, true).is_none());
    assert!(!handle.is_layout_suppressed());
}

#[test]
fn handle_is_inert_after_runtime_drops() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    drop(runtime);

    assert!(!handle.is_alive());
    handle.request_layout(1);
    assert!(handle.take_layout_requests().is_empty());
    let registration = handle.register_pre_draw(|| crate::PreDrawOutcome::CancelDraw);
    assert!(!registration.is_active());
    assert!(handle.dispatch_pre_draw().should_draw());
}

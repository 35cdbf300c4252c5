//! Minimal frame loop driving one [`AutoSizingList`].
//!
//! Each traversal lays out the nodes that requested it, then runs pre-draw
//! callbacks and draws unless one of them cancelled the frame.

use std::cell::Cell;
use std::rc::Rc;

use nestscroll_core::{NodeId, Runtime, RuntimeHandle, RuntimeScheduler};
use nestscroll_foundation::{
    AutoSizingList, AutoSizingListConfig, ListLayoutEngine, SharedAutoSizingList,
};
use nestscroll_layout::{MeasureSpec, Size};

/// Scheduler that only counts how often a frame was requested.
#[derive(Default)]
pub struct FrameCounter {
    frames: Cell<usize>,
}

impl FrameCounter {
    pub fn frames(&self) -> usize {
        self.frames.get()
    }
}

impl RuntimeScheduler for FrameCounter {
    fn schedule_frame(&self) {
        self.frames.set(self.frames.get() + 1);
    }
}

/// What happened during one traversal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Nodes laid out because they requested it.
    pub relaid_out: Vec<NodeId>,
    pub drawn: bool,
}

pub struct TestHost<E: ListLayoutEngine> {
    runtime: Runtime,
    scheduler: Rc<FrameCounter>,
    list: SharedAutoSizingList<E>,
    width_spec: Cell<MeasureSpec>,
    height_spec: Cell<MeasureSpec>,
}

impl<E: ListLayoutEngine> TestHost<E> {
    pub fn new(list_id: NodeId, engine: E, config: AutoSizingListConfig) -> Self {
        crate::logging::init_logging();
        let scheduler = Rc::new(FrameCounter::default());
        let runtime = Runtime::new(scheduler.clone());
        let list = AutoSizingList::new(list_id, engine, runtime.handle(), config).into_shared();
        Self {
            runtime,
            scheduler,
            list,
            width_spec: Cell::new(MeasureSpec::exactly(320)),
            height_spec: Cell::new(MeasureSpec::unspecified()),
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn list(&self) -> &SharedAutoSizingList<E> {
        &self.list
    }

    pub fn frames_requested(&self) -> usize {
        self.scheduler.frames()
    }

    /// Specs the host offers the list on every measure.
    pub fn set_specs(&self, width: MeasureSpec, height: MeasureSpec) {
        self.width_spec.set(width);
        self.height_spec.set(height);
    }

    pub fn measure(&self) -> Size {
        self.list
            .borrow_mut()
            .on_measure(self.width_spec.get(), self.height_spec.get())
    }

    /// Runs one traversal: pending layouts, then pre-draw, then the draw.
    pub fn traverse(&self) -> FrameReport {
        let list_id = self.list.borrow().id();
        let relaid_out = self.runtime.handle().take_layout_requests();
        if relaid_out.contains(&list_id) {
            self.measure();
        }
        let drawn = self.runtime.handle().dispatch_pre_draw().should_draw();
        log::trace!("traversal relaid out {relaid_out:?}, drawn: {drawn}");
        FrameReport { relaid_out, drawn }
    }

    /// Traverses until a frame is drawn, giving up after `max_traversals`.
    pub fn run_until_drawn(&self, max_traversals: usize) -> Vec<FrameReport> {
        let mut reports = Vec::new();
        for _ in 0..max_traversals {
            let report = self.traverse();
            let drawn = report.drawn;
            reports.push(report);
            if drawn {
                break;
            }
        }
        reports
    }
}

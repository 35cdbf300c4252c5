use nestscroll_core::Runtime;
use nestscroll_foundation::prelude::*;
use nestscroll_testing::prelude::*;

const LIST: usize = 1;

fn blank_first_host(blank_passes: usize) -> TestHost<FakeListEngine> {
    let mut engine = FakeListEngine::uniform(5, 40);
    engine.render_nothing_for(blank_passes);
    let host = TestHost::new(LIST, engine, AutoSizingListConfig::default());
    host.set_specs(MeasureSpec::exactly(320), MeasureSpec::at_most(500));
    host
}

#[test]
fn blank_pass_retries_before_next_draw() {
    let host = blank_first_host(1);

    host.measure();
    assert!(host.list().borrow().has_pending_remeasure());

    let reports = host.run_until_drawn(5);

    assert_eq!(
        reports,
        vec![
            FrameReport {
                relaid_out: vec![],
                drawn: false,
            },
            FrameReport {
                relaid_out: vec![LIST],
                drawn: true,
            },
        ]
    );
    let list = host.list().borrow();
    assert_eq!(list.measured_size().height, 200);
    assert!(!list.has_pending_remeasure());
}

#[test]
fn repeated_blank_passes_queue_one_retry() {
    let host = blank_first_host(2);

    host.measure();
    host.measure();

    assert_eq!(host.frames_requested(), 1);
    let first = host.traverse();
    assert!(!first.drawn);
    assert_eq!(host.handle().take_layout_requests(), vec![LIST]);
    assert!(!host.handle().has_pre_draw_callbacks());
}

#[test]
fn cancelled_retry_never_runs() {
    let host = blank_first_host(1);

    host.measure();
    assert!(host.list().borrow_mut().cancel_pending_remeasure());
    assert!(!host.list().borrow_mut().cancel_pending_remeasure());

    let report = host.traverse();

    assert!(report.drawn);
    assert!(report.relaid_out.is_empty());
    assert!(!host.handle().has_layout_requests());
}

#[test]
fn successful_measure_withdraws_queued_retry() {
    let host = blank_first_host(1);

    host.measure();
    host.measure();

    assert!(!host.list().borrow().has_pending_remeasure());
    assert!(!host.handle().has_pre_draw_callbacks());
    assert!(host.traverse().drawn);
}

#[test]
fn dropping_list_withdraws_queued_retry() {
    let runtime = Runtime::default();
    let mut engine = FakeListEngine::uniform(5, 40);
    engine.render_nothing_for(1);
    let mut list = AutoSizingList::new(
        LIST,
        engine,
        runtime.handle(),
        AutoSizingListConfig::default(),
    );

    list.on_measure(MeasureSpec::exactly(320), MeasureSpec::at_most(500));
    assert!(runtime.handle().has_pre_draw_callbacks());

    drop(list);

    assert!(!runtime.handle().has_pre_draw_callbacks());
    assert!(runtime.handle().dispatch_pre_draw().should_draw());
}

#[test]
fn list_outliving_runtime_measures_without_retry() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    drop(runtime);
    let mut engine = FakeListEngine::uniform(5, 40);
    engine.render_nothing_for(1);
    let mut list = AutoSizingList::new(LIST, engine, handle, AutoSizingListConfig::default());

    list.on_measure(MeasureSpec::exactly(320), MeasureSpec::at_most(500));

    assert!(!list.has_pending_remeasure());
}

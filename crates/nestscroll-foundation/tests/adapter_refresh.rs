use std::rc::Rc;

use nestscroll_core::Runtime;
use nestscroll_foundation::prelude::*;
use nestscroll_testing::prelude::*;

const LIST: usize = 1;
const CONTAINER: usize = 2;

/// Host whose list was measured at `list_height` and is observing a fresh
/// adapter.
fn observed(items: usize, list_height: i32) -> (TestHost<FakeListEngine>, AdapterObservable) {
    let host = TestHost::new(
        LIST,
        FakeListEngine::uniform(items, 50),
        AutoSizingListConfig::default(),
    );
    host.set_specs(MeasureSpec::exactly(320), MeasureSpec::at_most(list_height));
    host.measure();

    let observable = AdapterObservable::new();
    AutoSizingList::observe(host.list(), &observable);
    (host, observable)
}

fn container(height: i32) -> Rc<RecordingContainer> {
    let container = Rc::new(RecordingContainer::laid_out(
        CONTAINER,
        CallLog::new(),
        height,
        height * 4,
    ));
    container.coordinate(LIST, 0.0);
    container
}

#[test]
fn data_change_requests_layout_when_heights_disagree() {
    let (host, observable) = observed(100, 400);
    let container = container(600);
    host.list().borrow_mut().attach_container(&container);

    observable.notify_item_range_inserted(100, 5);

    assert_eq!(host.handle().take_layout_requests(), vec![LIST]);
}

#[test]
fn every_event_kind_triggers_the_check() {
    let (host, observable) = observed(100, 400);
    let container = container(600);
    host.list().borrow_mut().attach_container(&container);

    observable.notify_data_set_changed();
    observable.notify_item_range_changed(0, 3);
    observable.notify_item_range_removed(4, 1);
    observable.notify_item_moved(2, 9);

    // Coalesced into one request.
    assert_eq!(host.handle().take_layout_requests(), vec![LIST]);
}

#[test]
fn list_showing_all_content_never_refreshes() {
    let (host, observable) = observed(3, 400);
    let container = container(600);
    host.list().borrow_mut().attach_container(&container);

    observable.notify_data_set_changed();

    assert!(!host.handle().has_layout_requests());
}

#[test]
fn list_matching_container_height_never_refreshes() {
    let (host, observable) = observed(100, 600);
    let container = container(600);
    host.list().borrow_mut().attach_container(&container);

    observable.notify_data_set_changed();

    assert!(!host.handle().has_layout_requests());
}

#[test]
fn unmeasured_or_missing_container_never_refreshes() {
    let (host, observable) = observed(100, 400);

    observable.notify_data_set_changed();
    assert!(!host.handle().has_layout_requests());

    let unmeasured = Rc::new(RecordingContainer::new(CONTAINER, CallLog::new()));
    host.list().borrow_mut().attach_container(&unmeasured);
    observable.notify_data_set_changed();

    assert!(!host.handle().has_layout_requests());
}

#[test]
fn events_during_layout_are_skipped() {
    let (host, observable) = observed(100, 400);
    let container = container(600);
    host.list().borrow_mut().attach_container(&container);

    let measuring = host.list().borrow_mut();
    observable.notify_data_set_changed();
    drop(measuring);

    assert!(!host.handle().has_layout_requests());
}

#[test]
fn replacing_or_stopping_observation_releases_observer() {
    let (host, first) = observed(100, 400);
    assert!(host.list().borrow().is_observing_adapter());

    let second = AdapterObservable::new();
    AutoSizingList::observe(host.list(), &second);
    assert_eq!(first.observer_count(), 0);
    assert_eq!(second.observer_count(), 1);

    host.list().borrow_mut().stop_observing();
    assert_eq!(second.observer_count(), 0);
    assert!(!host.list().borrow().is_observing_adapter());
}

#[test]
fn dropped_list_ignores_events() {
    let runtime = Runtime::default();
    let list = AutoSizingList::new(
        LIST,
        FakeListEngine::uniform(100, 50),
        runtime.handle(),
        AutoSizingListConfig::default(),
    )
    .into_shared();
    let observable = AdapterObservable::new();
    AutoSizingList::observe(&list, &observable);

    drop(list);
    observable.notify_data_set_changed();

    assert_eq!(observable.observer_count(), 0);
    assert!(!runtime.handle().has_layout_requests());
}

#[test]
fn direct_scroll_swallows_engine_layout_requests() {
    let runtime = Runtime::default();
    let engine =
        FakeListEngine::uniform(100, 50).requesting_layout_on_scroll(runtime.handle(), LIST);
    let mut list = AutoSizingList::new(
        LIST,
        engine,
        runtime.handle(),
        AutoSizingListConfig::default(),
    );
    list.on_measure(MeasureSpec::exactly(320), MeasureSpec::at_most(500));

    assert_eq!(list.scroll_vertically_by(120), 120);

    assert!(!runtime.handle().has_layout_requests());
    assert_eq!(runtime.handle().swallowed_layout_requests(), 1);
    assert!(!runtime.handle().is_layout_suppressed());

    list.engine_mut().scroll_vertically_by(30);
    assert_eq!(runtime.handle().take_layout_requests(), vec![LIST]);
}

#[test]
fn scroll_state_is_forwarded_to_engine() {
    let runtime = Runtime::default();
    let mut list = AutoSizingList::new(
        LIST,
        FakeListEngine::uniform(10, 50),
        runtime.handle(),
        AutoSizingListConfig::default(),
    );

    list.set_scroll_state(ListScrollState::Dragging);

    assert_eq!(list.scroll_state(), ListScrollState::Dragging);
}

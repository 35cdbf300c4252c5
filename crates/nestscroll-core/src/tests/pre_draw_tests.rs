use crate::{PreDrawOutcome, Runtime};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn callbacks_run_once_in_registration_order() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let order = Rc::new(RefCell::new(Vec::new()));

    let first_order = Rc::clone(&order);
    let _first = handle.register_pre_draw(move || {
        first_order.borrow_mut().push(1);
        PreDrawOutcome::Proceed
    });
    let second_order = Rc::clone(&order);
    let _second = handle.register_pre_draw(move || {
        second_order.borrow_mut().push(2);
        PreDrawOutcome::Proceed
    });

    assert!(handle.dispatch_pre_draw().should_draw());
    assert!(handle.dispatch_pre_draw().should_draw());
    assert_eq!(*order.borrow(), vec![1, 2]);
}

#[test]
fn any_cancel_skips_the_draw() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let _proceed = handle.register_pre_draw(|| PreDrawOutcome::Proceed);
    let _cancel = handle.register_pre_draw(|| PreDrawOutcome::CancelDraw);

    assert_eq!(handle.dispatch_pre_draw(), PreDrawOutcome::CancelDraw);
    assert_eq!(handle.dispatch_pre_draw(), PreDrawOutcome::Proceed);
}

#[test]
fn dropping_registration_withdraws_callback() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let fired = Rc::new(Cell::new(false));

    let flag = Rc::clone(&fired);
    let registration = handle.register_pre_draw(move || {
        flag.set(true);
        PreDrawOutcome::Proceed
    });
    assert!(registration.is_active());
    drop(registration);

    assert!(!handle.has_pre_draw_callbacks());
    handle.dispatch_pre_draw();
    assert!(!fired.get());
}

#[test]
fn cancel_after_fire_is_a_no_op() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let registration = handle.register_pre_draw(|| PreDrawOutcome::Proceed);

    handle.dispatch_pre_draw();
    assert!(!registration.is_active());
    registration.cancel();
    assert!(!handle.has_pre_draw_callbacks());
}

#[test]
fn callbacks_registered_during_dispatch_wait_for_next_frame() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let nested_fired = Rc::new(Cell::new(false));
    let held = Rc::new(RefCell::new(None));

    let inner_handle = handle.clone();
    let inner_flag = Rc::clone(&nested_fired);
    let inner_held = Rc::clone(&held);
    let _outer = handle.register_pre_draw(move || {
        let flag = Rc::clone(&inner_flag);
        let registration = inner_handle.register_pre_draw(move || {
            flag.set(true);
            PreDrawOutcome::Proceed
        });
        *inner_held.borrow_mut() = Some(registration);
        PreDrawOutcome::Proceed
    });

    handle.dispatch_pre_draw();
    assert!(!nested_fired.get());
    assert!(handle.has_pre_draw_callbacks());

    handle.dispatch_pre_draw();
    assert!(nested_fired.get());
}

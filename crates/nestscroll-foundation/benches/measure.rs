use std::hint::black_box;
use std::rc::Rc;

use criterion::{criterion_group, criterion_main, Criterion};
use nestscroll_foundation::prelude::*;
use nestscroll_testing::prelude::*;

const LIST: usize = 1;
const CONTAINER: usize = 2;

fn measure_content_that_fits(c: &mut Criterion) {
    let host = TestHost::new(
        LIST,
        FakeListEngine::uniform(40, 48).with_padding(EdgeInsets::vertical_only(8, 8)),
        AutoSizingListConfig::default(),
    );
    host.set_specs(MeasureSpec::exactly(360), MeasureSpec::at_most(4000));

    c.bench_function("measure_content_that_fits", |b| {
        b.iter(|| black_box(host.measure()));
    });
}

fn measure_with_inherited_height(c: &mut Criterion) {
    let container = Rc::new(RecordingContainer::laid_out(
        CONTAINER,
        CallLog::new(),
        800,
        20_000,
    ));
    container.coordinate(LIST, 120.0);
    let host = TestHost::new(
        LIST,
        FakeListEngine::uniform(500, 48),
        AutoSizingListConfig::default(),
    );
    host.list().borrow_mut().attach_container(&container);
    host.set_specs(MeasureSpec::exactly(360), MeasureSpec::unspecified());

    c.bench_function("measure_with_inherited_height", |b| {
        b.iter(|| black_box(host.measure()));
    });
}

criterion_group!(benches, measure_content_that_fits, measure_with_inherited_height);
criterion_main!(benches);

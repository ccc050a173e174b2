use std::cell::RefCell;
use std::hint::black_box;
use std::rc::Rc;

use criterion::{Criterion, criterion_group, criterion_main};
use plotflow::core::{NumSeries, Point};
use plotflow::transform::{Siso, TransformFunction};

fn bench_push_back_in_order_10k(c: &mut Criterion) {
    c.bench_function("push_back_in_order_10k", |b| {
        b.iter(|| {
            let mut series = NumSeries::new("bench");
            for i in 0..10_000 {
                series.push_back(black_box(Point::new(i as f64, (i % 17) as f64)));
            }
            black_box(series.len())
        })
    });
}

fn bench_push_back_retention_window_10k(c: &mut Criterion) {
    c.bench_function("push_back_retention_window_10k", |b| {
        b.iter(|| {
            let mut series = NumSeries::new("bench");
            series.set_maximum_range_x(500.0);
            for i in 0..10_000 {
                series.push_back(black_box(Point::new(i as f64, (i % 17) as f64)));
            }
            black_box(series.len())
        })
    });
}

fn bench_index_from_x_lookup(c: &mut Criterion) {
    let mut series = NumSeries::new("bench");
    for i in 0..10_000 {
        series.push_back(Point::new(i as f64, (i % 17) as f64));
    }

    c.bench_function("index_from_x_lookup_10k", |b| {
        b.iter(|| {
            let index = series.index_from_x(black_box(7_654.3)).expect("non-empty");
            black_box(index)
        })
    });
}

fn bench_derivative_batch_10k(c: &mut Criterion) {
    let input = Rc::new(RefCell::new(NumSeries::new("in")));
    for i in 0..10_000 {
        input
            .borrow_mut()
            .push_back(Point::new(i as f64 * 0.01, (i as f64 * 0.3).sin()));
    }

    c.bench_function("derivative_batch_10k", |b| {
        b.iter(|| {
            let output = Rc::new(RefCell::new(NumSeries::new("out")));
            let mut transform = Siso::<plotflow::transform::Derivative>::default();
            transform
                .set_data_source(&[input.clone()])
                .expect("configure");
            transform.calculate(&[output.clone()]).expect("calculate");
            black_box(output.borrow().len())
        })
    });
}

fn bench_derivative_incremental_step(c: &mut Criterion) {
    // Steady state of a streaming session: a large backlog already processed,
    // one new sample per calculate call.
    let input = Rc::new(RefCell::new(NumSeries::new("in")));
    for i in 0..10_000 {
        input
            .borrow_mut()
            .push_back(Point::new(i as f64 * 0.01, (i as f64 * 0.3).sin()));
    }
    let output = Rc::new(RefCell::new(NumSeries::new("out")));
    let mut transform = Siso::<plotflow::transform::Derivative>::default();
    transform
        .set_data_source(&[input.clone()])
        .expect("configure");
    transform.calculate(&[output.clone()]).expect("warmup");

    let mut next = 10_000_u64;
    c.bench_function("derivative_incremental_step", |b| {
        b.iter(|| {
            input
                .borrow_mut()
                .push_back(Point::new(next as f64 * 0.01, (next as f64 * 0.3).sin()));
            next += 1;
            transform.calculate(&[output.clone()]).expect("calculate");
            black_box(output.borrow().len())
        })
    });
}

criterion_group!(
    benches,
    bench_push_back_in_order_10k,
    bench_push_back_retention_window_10k,
    bench_index_from_x_lookup,
    bench_derivative_batch_10k,
    bench_derivative_incremental_step,
);
criterion_main!(benches);

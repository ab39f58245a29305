use criterion::{BatchSize, Criterion, criterion_group};
use orthoslab::{OrthogonalPathBuilder, Point};
use rand::Rng;

/// Returns a pointer drag wandering around the canvas.
fn random_drag(len: usize) -> Vec<Point> {
    let mut rng = rand::rng();
    let mut at = Point::default();

    (0..len)
        .map(|_| {
            at = at + Point::from(rng.random::<[f64; 2]>()) * 20. - Point { x: 10., y: 10. };
            at
        })
        .collect()
}

pub fn long_drags(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("long drags");

    group.bench_function("move", |b| {
        b.iter_batched(
            || random_drag(1000),
            |drag| {
                let mut builder = OrthogonalPathBuilder::default();
                let _ = builder.start(Point::default());
                drag.into_iter().for_each(|point| builder.move_to(point));
                builder.end()
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("preview", |b| {
        b.iter_batched(
            || random_drag(1000),
            |drag| {
                let mut builder = OrthogonalPathBuilder::default();
                let _ = builder.start(Point::default());
                drag.into_iter().for_each(|point| {
                    builder.move_to(point);
                    builder.preview_bounds();
                });
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, long_drags);

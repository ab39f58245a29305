use criterion::{BatchSize, Criterion, criterion_group};
use orthoslab::{
    CornerModification, EdgeModification, Outline, Placement, Shape, generate_edge_points,
    modification::CurvedBump,
};
use rand::Rng;

fn random_curves() -> [EdgeModification; 2] {
    let mut rng = rand::rng();
    let mut curve = |placement| {
        let width = rng.random_range(10.0..40.0);
        EdgeModification::BumpOutCurve(CurvedBump {
            placement,
            distance: rng.random_range(0.0..5.0),
            depth: width / 2.,
            width,
        })
    };

    [curve(Placement::Left), curve(Placement::Right)]
}

fn ribbon() -> Shape {
    Shape::new(
        0.,
        0.,
        vec![
            [0., 0.].into(),
            [0., 25.].into(),
            [96., 25.].into(),
            [96., 0.].into(),
        ],
    )
}

pub fn curved_edges(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("curved edges");

    group.bench_function("generate", |b| {
        b.iter_batched(
            random_curves,
            |curves| generate_edge_points(&[0., 25.].into(), &[96., 25.].into(), &curves),
            BatchSize::SmallInput,
        )
    });

    let shape = ribbon();
    group.bench_function("outline", |b| {
        b.iter_batched(
            random_curves,
            |curves| {
                Outline::from(&shape)
                    .with_edge(1, curves)
                    .with_edge(3, curves)
                    .with_corner(0, CornerModification::Radius { radius: 5. })
                    .with_corner(2, CornerModification::Radius { radius: 5. })
                    .resolve()
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, curved_edges);

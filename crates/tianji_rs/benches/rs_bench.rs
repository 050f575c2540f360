use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tianji_rs::{Direction, four_pillars, lunar, qimen, ziwei};

fn conversion_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    group.bench_function("solar_to_lunar", |b| {
        b.iter(|| lunar(black_box(2024), black_box(9), black_box(17)))
    });
    group.finish();
}

fn boards_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("boards");
    group.bench_function("four_pillars", |b| {
        b.iter(|| four_pillars(black_box(1987), 3, 14, black_box(10)))
    });
    group.bench_function("qimen_board", |b| {
        b.iter(|| qimen(black_box(1987), 3, 14, black_box(10), Direction::North))
    });
    group.bench_function("ziwei_chart", |b| {
        b.iter(|| ziwei(black_box(1987), 3, 14, black_box(10)))
    });
    group.finish();
}

criterion_group!(benches, conversion_bench, boards_bench);
criterion_main!(benches);

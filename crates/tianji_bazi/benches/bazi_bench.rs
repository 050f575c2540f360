use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tianji_bazi::{four_pillars, wuxing_count};
use tianji_calendar::SolarDate;

fn pillars_bench(c: &mut Criterion) {
    let date = SolarDate::new(1987, 3, 14).unwrap();

    let mut group = c.benchmark_group("pillars");
    group.bench_function("four_pillars", |b| {
        b.iter(|| four_pillars(black_box(date), black_box(10)))
    });
    group.finish();
}

fn wuxing_bench(c: &mut Criterion) {
    let date = SolarDate::new(1987, 3, 14).unwrap();
    let fp = four_pillars(date, 10).unwrap();
    let pillars = fp.pillars();

    let mut group = c.benchmark_group("wuxing");
    group.bench_function("wuxing_count", |b| {
        b.iter(|| wuxing_count(black_box(&pillars)))
    });
    group.finish();
}

criterion_group!(benches, pillars_bench, wuxing_bench);
criterion_main!(benches);

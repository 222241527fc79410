use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchang_vedic_base::{
    GeoLocation, RiseSetConfig, RiseSetEvent, Vaar, approximate_local_noon_jd, classify,
    compute_moon_event, compute_sun_event, hora_sequence, karana_from_elongation,
    nakshatra_from_longitude, rahu_kaal, tithi_from_elongation, yoga_from_sum,
};

fn panchang_primitives_bench(c: &mut Criterion) {
    let elong = 211.75;
    let sum = 278.31;
    let moon = 123.456;

    let mut group = c.benchmark_group("panchang_primitives");
    group.bench_function("classify", |b| {
        b.iter(|| classify(black_box(elong), 12.0, 30))
    });
    group.bench_function("tithi_from_elongation", |b| {
        b.iter(|| tithi_from_elongation(black_box(elong)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(moon)))
    });
    group.bench_function("yoga_from_sum", |b| {
        b.iter(|| yoga_from_sum(black_box(sum)))
    });
    group.bench_function("karana_from_elongation", |b| {
        b.iter(|| karana_from_elongation(black_box(elong)))
    });
    group.finish();
}

fn riseset_bench(c: &mut Criterion) {
    let loc = GeoLocation::new(28.6139, 77.209, 0.0);
    let cfg = RiseSetConfig::default();
    let jd_0h = 2_460_390.5;
    let noon = approximate_local_noon_jd(jd_0h, loc.longitude_deg);

    let mut group = c.benchmark_group("riseset");
    group.bench_function("sunrise", |b| {
        b.iter(|| compute_sun_event(&loc, RiseSetEvent::Sunrise, black_box(noon), &cfg))
    });
    group.bench_function("moonrise", |b| {
        b.iter(|| compute_moon_event(&loc, RiseSetEvent::Moonrise, black_box(jd_0h), &cfg))
    });
    group.finish();
}

fn day_division_bench(c: &mut Criterion) {
    let (rise, set) = (2_460_000.25, 2_460_000.75);

    let mut group = c.benchmark_group("day_division");
    group.bench_function("rahu_kaal", |b| {
        b.iter(|| rahu_kaal(black_box(rise), black_box(set), Vaar::Mangalvaar))
    });
    group.bench_function("hora_sequence", |b| {
        b.iter(|| hora_sequence(black_box(Vaar::Guruvaar)))
    });
    group.finish();
}

criterion_group!(benches, panchang_primitives_bench, riseset_bench, day_division_bench);
criterion_main!(benches);

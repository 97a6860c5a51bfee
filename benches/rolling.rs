use criterion::{black_box, criterion_group, criterion_main, Criterion};
use narrative_dice::{Die, Pool};
use rand::{rngs::StdRng, SeedableRng};

pub fn benchmark_parsing(c: &mut Criterion) {
    c.bench_function("parse full pool", |b| {
        b.iter(|| Pool::parse(black_box("99b 99s 99a 99d 99p 99c 99f")))
    });
    c.bench_function("parse adjacent terms", |b| {
        b.iter(|| Pool::parse(black_box("aapppddccbsf")))
    });
}

pub fn benchmark_rolling(c: &mut Criterion) {
    c.bench_function("roll cursed pool", |b| {
        b.iter(|| {
            let pool = Pool::new()
                .with(Die::Proficiency, 999)
                .with(Die::Challenge, 999);
            let mut rng = StdRng::seed_from_u64(1);
            pool.roll_with(&mut rng)
        });
    });
}

criterion_group!(benches, benchmark_parsing, benchmark_rolling);
criterion_main!(benches);

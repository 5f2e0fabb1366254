use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use sweeper_core::{GameConfig, GameEngine};

const TIERS: [(&str, u8, u8); 3] = [
    ("beginner", 9, 9),
    ("intermediate", 16, 16),
    ("expert", 16, 30),
];

// Mineless boards make the first reveal flood the whole grid, the
// worst case for the reveal engine.
fn reveal_tiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_reveal");
    for (name, rows, cols) in TIERS {
        let config = GameConfig::new(rows, cols, 0).unwrap();
        group.bench_function(name, |b| {
            b.iter_batched(
                || {
                    let mut engine = GameEngine::new();
                    engine.new_game(config, 42);
                    engine
                },
                |mut engine| engine.reveal((0, 0)).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, reveal_tiers);
criterion_main!(benches);

use spiel::game::State;
use spiel::game::registry;
use spiel::game::registry::Params;
use spiel::game::registry::Value;
use spiel::game::serial;
use spiel::traverse;
use spiel::traverse::Uniform;
use std::sync::Arc;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        traversing_kuhn_episodes,
        traversing_rps_episodes,
        replaying_kuhn_snapshots,
}

fn traversing_kuhn_episodes(c: &mut criterion::Criterion) {
    let mut params = Params::new();
    params.insert("players".to_string(), Value::Int(4));
    let game = registry::load("kuhn", &params).unwrap();
    let mut selector = Uniform::seeded(0);
    c.bench_function("traverse a 4-player kuhn episode", |b| {
        b.iter(|| traverse::play(&game, &mut selector).unwrap())
    });
}

fn traversing_rps_episodes(c: &mut criterion::Criterion) {
    let game = registry::load("rps", &Params::new()).unwrap();
    let mut selector = Uniform::seeded(0);
    c.bench_function("traverse a 3-player rps episode", |b| {
        b.iter(|| traverse::play(&game, &mut selector).unwrap())
    });
}

fn replaying_kuhn_snapshots(c: &mut criterion::Criterion) {
    let game = registry::load("kuhn", &Params::new()).unwrap();
    let mut selector = Uniform::seeded(0);
    let mut state = State::root(Arc::clone(&game));
    traverse::run(&mut state, &mut selector).unwrap();
    let snapshot = serial::serialize(&state);
    c.bench_function("replay a terminal kuhn snapshot", |b| {
        b.iter(|| serial::deserialize(Arc::clone(&game), &snapshot).unwrap())
    });
}

use carpool_core::model::split_by_role;
use carpool_core::synthetic::{generate_dataset, GeneratorParams};
use carpool_core::{Driver, Rider};

/// Seeded synthetic dataset shared by the property tests.
pub fn seeded_dataset(seed: u64, drivers: usize, riders: usize) -> (Vec<Driver>, Vec<Rider>) {
    let params = GeneratorParams::default()
        .with_counts(drivers, riders)
        .with_seed(seed);
    split_by_role(generate_dataset(&params))
}

/// A denser dataset: few hubs, small jitter, wide detours, so most drivers form groups.
pub fn dense_dataset(seed: u64) -> (Vec<Driver>, Vec<Rider>) {
    let params = GeneratorParams {
        num_hubs: 2,
        hub_jitter_km: 1.0,
        min_detour_km: 3.0,
        max_detour_km: 6.0,
        departure_window_minutes: 30,
        ..GeneratorParams::default()
    }
    .with_counts(30, 90)
    .with_seed(seed);
    split_by_role(generate_dataset(&params))
}

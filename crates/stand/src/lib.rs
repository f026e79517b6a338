use sortl_model::{Case, LineGenerator, lines::arrange};

/// Seed shared by every bench input so runs are comparable.
pub const SEED: u64 = 0x5012_7e57;

/// Input sizes measured by the benches.
pub fn quantities() -> impl Iterator<Item = usize> {
    (500..10_000).step_by(1000)
}

/// One bench input per quantity, arranged for `case`.
pub fn bench_inputs(case: Case) -> Vec<(usize, Vec<String>)> {
    quantities()
        .map(|quantity| {
            let lines = LineGenerator::seeded(SEED).take(quantity).collect();
            (quantity, arrange(case, lines))
        })
        .collect()
}

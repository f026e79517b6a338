use sortl_engine::MergeSorter;
use sortl_model::Case;
use sortl_stand::bench_inputs;

use std::time::Duration;

const BENCH_NAME: &str = "merge_sort";
const BENCH_GROUP_NAME: &str = const_format::formatc!("bench.{BENCH_NAME}");

fn merge_sort_bench_group(c: &mut criterion::Criterion, case: Case) {
    let mut group = c.benchmark_group(format!("{BENCH_GROUP_NAME}.{case}"));
    for (quantity, lines) in bench_inputs(case) {
        group.throughput(criterion::Throughput::Elements(quantity as u64));

        let bench_id = criterion::BenchmarkId::new("merge_sorter", quantity);
        group.bench_with_input(bench_id, &lines, |b, lines| {
            let mut sorter = MergeSorter::with_capacity(lines.len());
            b.iter_batched_ref(
                || lines.clone(),
                |lines| sorter.sort(lines),
                criterion::BatchSize::SmallInput,
            );
        });

        let bench_id = criterion::BenchmarkId::new("std_stable", quantity);
        group.bench_with_input(bench_id, &lines, |b, lines| {
            b.iter_batched_ref(
                || lines.clone(),
                |lines| lines.sort(),
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn merge_sort_benchmark(c: &mut criterion::Criterion) {
    for case in Case::ALL {
        merge_sort_bench_group(c, case);
    }
}

criterion::criterion_group! {
    name = merge_sort;
    config = criterion::Criterion::default()
        .sample_size(50)
        .warm_up_time(Duration::from_secs(2))
        .measurement_time(Duration::from_secs(10));
    targets = merge_sort_benchmark,
}

criterion::criterion_main!(merge_sort);

// benches/facets.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use thesis_browser::filter::{visible_indices, FacetCounts, FacetSelection, MethodSelection};
use thesis_browser::{Dataset, Record};

const METHODS: [&str; 7] = [
    "quantitative", "qualitative", "meta-analysis", "meta-synthesis", "mixed-methods", "survey", "",
];
const AREAS: [&str; 12] = [
    "genetics", "ageing", "sleep", "memory", "criminology", "education",
    "public health", "health psychology", "neuroscience", "language", "emotion", "attention",
];

/// Deterministic synthetic dataset, roughly the size of a department archive.
fn synthetic(n: usize) -> Dataset {
    let records = (0..n)
        .map(|i| {
            let mut row = vec![
                i.to_string(),
                METHODS[i % METHODS.len()].to_string(),
                String::new(),
                format!("Thesis {} on {}", i, AREAS[i % AREAS.len()]),
                format!("Abstract {} with twin cohort data {}", i, i % 17),
            ];
            for k in 0..(i % 4) {
                row.push(AREAS[(i * 7 + k * 5) % AREAS.len()].to_string());
            }
            Record::from_row(&row)
        })
        .collect();
    Dataset::new(None, records)
}

fn bench_facets(c: &mut Criterion) {
    let ds = synthetic(5_000);
    let records = ds.records();
    let unfiltered = FacetSelection::default();
    let narrow = FacetSelection::new("twin", MethodSelection::AllQuantitative, Some("sleep"));

    c.bench_function("visible_unfiltered", |b| {
        b.iter(|| black_box(visible_indices(black_box(records), &unfiltered).len()))
    });

    c.bench_function("visible_all_facets", |b| {
        b.iter(|| black_box(visible_indices(black_box(records), &narrow).len()))
    });

    c.bench_function("counts_all_facets", |b| {
        b.iter(|| black_box(FacetCounts::compute(black_box(records), &narrow)))
    });
}

criterion_group!(benches, bench_facets);
criterion_main!(benches);

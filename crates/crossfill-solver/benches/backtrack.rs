//! Benchmarks for propagation and search on small crossword grids.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench backtrack
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use crossfill_core::{SlotCatalog, Structure, Vocabulary, Word};
use crossfill_solver::{
    BacktrackSolver, Domains, Inference, SolverOptions, ac3, enforce_node_consistency,
};

const WORDS: &str = "
    able acid aged also area army away baby back ball band bank base bath bear beat
    been beer bell belt best bird blow blue boat body bomb bond bone book boom born
    boss both bowl bulk burn bush busy call calm came camp card care case cash cast
    cell chat chip city club coal coat code cold come cook cool cope copy core cost
    crew crop dark data date dawn days dead deal dean dear debt deep deny desk dial
    diet disc disk does done door dose down draw drew drop drug dual duke dust duty
    each earn ease east easy edge else even ever evil exit face fact fail fair fall
    farm fast fate fear feed feel feet fell felt file fill film find fine fire firm
    ace act add age ago aid aim air all and any arc are arm art ask ate bad bag bar
    bat bed bee bet big bit box boy bug bus but buy cab can cap car cat cod cot cow
    cry cup cut day den dew did die dig dog dot dry due ear eat egg end era eve eye
    fan far fat fed few fig fit fix fly fog for fox fun fur gap gas get god got gum
";

fn catalog(structure: &str) -> SlotCatalog {
    let structure: Structure = structure.parse().unwrap();
    let vocabulary: Vocabulary = WORDS.split_whitespace().filter_map(Word::new).collect();
    SlotCatalog::new(structure, vocabulary)
}

fn grids() -> [(&'static str, SlotCatalog); 3] {
    [
        ("cross", catalog("#_#\n___\n#_#")),
        ("ring", catalog("___\n_#_\n___")),
        ("frame", catalog("____\n_##_\n_##_\n____")),
    ]
}

fn bench_ac3(c: &mut Criterion) {
    for (param, catalog) in grids() {
        let mut domains = Domains::new(&catalog);
        enforce_node_consistency(&catalog, &mut domains);
        c.bench_with_input(BenchmarkId::new("ac3", param), &domains, |b, domains| {
            b.iter_batched_ref(
                || hint::black_box(domains.clone()),
                |domains| {
                    let consistent = ac3(&catalog, domains, None);
                    hint::black_box(consistent)
                },
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_solve(c: &mut Criterion) {
    for (param, catalog) in grids() {
        for (name, inference) in [
            ("solve_plain", Inference::None),
            ("solve_mac", Inference::MaintainArcConsistency),
        ] {
            let solver = BacktrackSolver::new(SolverOptions {
                inference,
                ..SolverOptions::default()
            });
            c.bench_with_input(BenchmarkId::new(name, param), &catalog, |b, catalog| {
                b.iter(|| {
                    let assignment = solver.solve(hint::black_box(catalog)).unwrap();
                    hint::black_box(assignment)
                });
            });
        }
    }
}

criterion_group!(benches, bench_ac3, bench_solve);
criterion_main!(benches);

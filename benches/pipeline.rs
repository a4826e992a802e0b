//! Benchmarks for the configuration loading pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use plotcfg::diagnostics::Diagnostics;
use plotcfg::parser::{tokenize_line, IncludeResolver};
use plotcfg::{expand_multiplots, segment, LoadOptions, PlotConfig};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

/// A large synthetic configuration: `pages` pages of `per_page` lines.
fn synthetic_source(pages: usize, per_page: usize) -> String {
    let mut source = String::from("guicolor white\ndefinecut good x>0\n");
    for p in 0..pages {
        source.push_str(&format!("newpage\ntitle \"Page {}\"\n", p));
        for i in 0..per_page {
            source.push_str(&format!("h{}_{} good -drawopt colz -title \"Plot {}\"\n", p, i, i));
        }
        source.push_str("multiplot 1 8 hist_XXXXX -nostat\n");
    }
    source
}

// -- Tokenizing benchmarks --

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    let simple = "hcal_etot goodpid -drawopt colz -nostat";
    let quoted = "macro plot.C(\"a b\", 'c d') -title \"Calorimeter total energy\"";

    group.bench_function("tokenize_simple", |b| {
        b.iter(|| tokenize_line(black_box(simple)).unwrap())
    });

    group.bench_function("tokenize_quoted", |b| {
        b.iter(|| tokenize_line(black_box(quoted)).unwrap())
    });

    group.finish();
}

// -- Layout benchmarks --

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");

    let source = synthetic_source(50, 12);
    let mut diags = Diagnostics::new();
    let doc = IncludeResolver::new("", &mut diags)
        .load_source(&source)
        .unwrap();

    group.bench_function("segment_50_pages", |b| b.iter(|| segment(black_box(&doc))));

    group.bench_function("expand_multiplots_50_pages", |b| {
        b.iter(|| {
            let mut diags = Diagnostics::new();
            expand_multiplots(black_box(&doc), 2, &mut diags).unwrap()
        })
    });

    group.finish();
}

// -- Full load benchmarks --

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    let fixture = load_fixture("hms.cfg");
    let synthetic = synthetic_source(50, 12);
    let opts = LoadOptions::new("bench.cfg").with_config_dir(fixtures_dir().display().to_string());

    group.bench_function("load_fixture", |b| {
        b.iter(|| PlotConfig::from_source(black_box(&fixture), &opts).unwrap())
    });

    group.bench_function("load_synthetic", |b| {
        b.iter(|| PlotConfig::from_source(black_box(&synthetic), &opts).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_layout, bench_load);
criterion_main!(benches);

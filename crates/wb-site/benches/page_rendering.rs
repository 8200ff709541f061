//! Benchmarks for page rendering and preview output.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use wb_site::{Site, SiteConfig, previews};
use wb_storage::{Category, MockStorage};

/// Component spec with `sections` headings and a props table in each.
fn generate_spec(sections: usize) -> String {
    let mut md = String::from("---\ntitle: Generated\nstatus: draft\n---\n# Generated\n\n");
    for i in 0..sections {
        md.push_str(&format!("## Variant {i}\n\n"));
        md.push_str("Use it for **primary** actions. See [Card](card.md).\n\n");
        md.push_str("| Prop | Type | Default |\n|---|---|---|\n");
        md.push_str("| size | `sm \\| md \\| lg` | `md` |\n\n");
    }
    md
}

fn site(markdown: &str, cache_pages: bool) -> Site {
    let storage = MockStorage::new().with_doc(Category::Components, "button", markdown);
    Site::new(
        Arc::new(storage),
        SiteConfig {
            cache_pages,
            ..SiteConfig::default()
        },
    )
}

fn bench_render_uncached(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_uncached");

    for sections in [5, 20, 50] {
        let markdown = generate_spec(sections);
        let site = site(&markdown, false);

        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(BenchmarkId::new("sections", sections), &site, |b, site| {
            b.iter(|| site.render(Category::Components, black_box("button")));
        });
    }

    group.finish();
}

fn bench_render_cached(c: &mut Criterion) {
    let site = site(&generate_spec(20), true);
    let _ = site.render(Category::Components, "button");

    c.bench_function("render_cached_20_sections", |b| {
        b.iter(|| site.render(Category::Components, black_box("button")));
    });
}

fn bench_navigation(c: &mut Criterion) {
    let mut storage = MockStorage::new().with_workflow("# Workflow");
    for slug in previews::preview_slugs() {
        storage = storage.with_doc(Category::Components, slug, "# Doc");
    }
    let site = Site::new(Arc::new(storage), SiteConfig::default());

    c.bench_function("navigation_60_components", |b| {
        b.iter(|| site.navigation());
    });
}

fn bench_preview_sections(c: &mut Criterion) {
    let Some(entry) = previews::get_preview("data-table") else {
        return;
    };

    c.bench_function("preview_sections_data_table", |b| {
        b.iter(|| black_box(entry.sections()));
    });
}

criterion_group!(
    benches,
    bench_render_uncached,
    bench_render_cached,
    bench_navigation,
    bench_preview_sections
);
criterion_main!(benches);

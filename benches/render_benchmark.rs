//! Benchmarks for html-inline rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks render synthetic documents of growing size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic document with the given number of sections.
fn create_test_html(section_count: usize) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html>\n<head><title>Bench</title>");
    html.push_str("<style>p { margin: 0; }</style></head>\n<body>\n");

    for i in 0..section_count {
        html.push_str(&format!(
            "<h2 class=\"title\">Section {}</h2>\n<p>Some <b>bold</b> &amp; <i>italic</i> text.</p>\n",
            i + 1
        ));
        html.push_str("<ul>\n<li>One</li>\n<li>Two</li>\n</ul>\n");
        html.push_str("<blockquote>A quotation</blockquote>\n");
        html.push_str("<table><tr><td>cell</td></tr></table>\n");
        html.push_str("<script>if (a < b) { run(); }</script>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Benchmark the two presets on a small document.
fn bench_presets(c: &mut Criterion) {
    let html = create_test_html(1);
    let base = html_inline::HtmlInliner::base();
    let semantic = html_inline::HtmlInliner::semantic();

    c.bench_function("render_base", |b| {
        b.iter(|| base.render(black_box(&html)));
    });

    c.bench_function("render_semantic", |b| {
        b.iter(|| semantic.render(black_box(&html)));
    });
}

/// Benchmark rendering at various sizes.
fn bench_document_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_size");
    let inliner = html_inline::HtmlInliner::base();

    for section_count in [1, 10, 100].iter() {
        let html = create_test_html(*section_count);

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| inliner.render(black_box(&html)));
        });
    }

    group.finish();
}

/// Benchmark batch rendering.
fn bench_render_all(c: &mut Criterion) {
    let inliner = html_inline::HtmlInliner::base();
    let docs: Vec<String> = (0..64).map(|_| create_test_html(5)).collect();

    c.bench_function("render_all_64", |b| {
        b.iter(|| inliner.render_all(black_box(&docs)));
    });
}

criterion_group!(benches, bench_presets, bench_document_size, bench_render_all);
criterion_main!(benches);

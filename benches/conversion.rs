// Benchmarks for HTML fragment to Markdown conversion.

use criterion::{criterion_group, criterion_main, Criterion};
use fragdown::{html_to_markdown, parse_html};

fn bench_simple(c: &mut Criterion) {
    let html = "<h1>Hello</h1><p>This is a <strong>simple</strong> document.</p>";
    c.bench_function("simple_document", |b| {
        b.iter(|| html_to_markdown(html).unwrap());
    });
}

fn bench_email(c: &mut Criterion) {
    let paragraph = "<p> <strong>Note</strong> &#149; see <a href=\"https://example.com/a?b=1&amp;c=2\">\
                     the <em>entry</em></a>&nbsp;for details.<br /> </p>\n";
    let html = format!("<font size=\"-1\" face='arial'>{}</font>", paragraph.repeat(200));
    c.bench_function("email_body_parse", |b| {
        b.iter(|| parse_html(&html).unwrap());
    });
    c.bench_function("email_body_convert", |b| {
        b.iter(|| html_to_markdown(&html).unwrap());
    });
}

criterion_group!(benches, bench_simple, bench_email);
criterion_main!(benches);

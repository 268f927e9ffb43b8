use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sumaddon::{exports, sum, try_parse_number, Context, Value};

fn bench_native(c: &mut Criterion) {
    c.bench_function("native_sum", |b| {
        b.iter(|| sum(black_box(2), black_box(3)))
    });
}

fn bench_coerce(c: &mut Criterion) {
    let ctx = Context::new();
    let number = Value::from(123.75);
    let text = Value::from("  0x7f  ");

    c.bench_function("coerce_number", |b| {
        b.iter(|| try_parse_number(black_box(&number), &ctx))
    });
    c.bench_function("coerce_string", |b| {
        b.iter(|| try_parse_number(black_box(&text), &ctx))
    });
}

fn bench_export_call(c: &mut Criterion) {
    let ctx = Context::new();
    let table = exports();
    let args = [Value::from(2), Value::from(3)];

    c.bench_function("export_call_sum", |b| {
        b.iter(|| table.call(black_box("sum"), &ctx, black_box(&args)))
    });
}

criterion_group!(benches, bench_native, bench_coerce, bench_export_call);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use record::{Employee, Header};

fn parse_add_string(c: &mut Criterion) {
    c.bench_function("record_parse_add_string", |b| {
        b.iter(|| black_box("Alice,123 Main St,40").parse::<Employee>().unwrap());
    });
}

fn encode_decode(c: &mut Criterion) {
    let e = Employee::new("Alice", "123 Main St", 40);
    let h = Header::new();

    c.bench_function("record_encode", |b| {
        b.iter(|| black_box(&e).encode());
    });

    let buf = e.encode();
    c.bench_function("record_decode", |b| {
        b.iter(|| Employee::decode(black_box(&buf)));
    });

    c.bench_function("header_encode_decode", |b| {
        b.iter(|| Header::decode(&black_box(&h).encode()));
    });
}

criterion_group!(benches, parse_add_string, encode_decode);

criterion_main!(benches);

use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;

const SIMPLE: &str = "{hello}";

const NESTED: &str = "query user(id:123) {
    close_friends: friends(max: 5, distance: 1.2) {
        picture
        mutual_friends {
            name
            picture
        }
    }
}";

fn scan_benchmarks(c: &mut Criterion) {
    c.bench_function("scan_simple", |b| {
        b.iter(|| quell_parser::Scanner::new(black_box(SIMPLE)).count())
    });
    c.bench_function("scan_nested", |b| {
        b.iter(|| quell_parser::Scanner::new(black_box(NESTED)).count())
    });
}

fn parse_benchmarks(c: &mut Criterion) {
    c.bench_function("parse_simple", |b| {
        b.iter(|| quell_parser::parse(black_box(SIMPLE)).unwrap())
    });
    c.bench_function("parse_nested", |b| {
        b.iter(|| quell_parser::parse(black_box(NESTED)).unwrap())
    });
}

criterion_group!(benches, scan_benchmarks, parse_benchmarks);
criterion_main!(benches);

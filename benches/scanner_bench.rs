/*!
 * Benchmarks for the lexical zone scanner.
 *
 * Measures performance of:
 * - Full-file zone scanning
 * - Skeleton extraction used by the QA pass
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use srclate::scanner::{skeleton, Zone, ZoneScanner};

/// Generate a synthetic Java-like source of roughly `classes` class bodies.
fn generate_source(classes: usize) -> String {
    let mut src = String::new();
    for i in 0..classes {
        src.push_str(&format!(
            "/**\n * Обработчик номер {i}.\n */\nclass Handler{i} {{\n    \
             // внутренний счётчик\n    \
             static final String LABEL = \"Элемент {i} из набора\";\n    \
             static final char SEP = ';';\n    \
             String describe(int n) {{\n        \
             /* подстановка значения */\n        \
             return String.format(\"Найдено %d объектов\", n);\n    }}\n}}\n\n"
        ));
    }
    src
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    for classes in [10, 100, 1000] {
        let src = generate_source(classes);
        group.throughput(Throughput::Bytes(src.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(classes), &src, |b, src| {
            b.iter(|| {
                let mut zones = 0usize;
                for zone in ZoneScanner::new(black_box(src)) {
                    if matches!(zone, Zone::Translatable { .. }) {
                        zones += 1;
                    }
                }
                zones
            })
        });
    }
    group.finish();
}

fn bench_skeleton(c: &mut Criterion) {
    let mut group = c.benchmark_group("skeleton");
    for classes in [10, 100] {
        let src = generate_source(classes);
        group.throughput(Throughput::Bytes(src.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(classes), &src, |b, src| {
            b.iter(|| skeleton(black_box(src)))
        });
    }
    group.finish();
}

criterion_group!(scanner_benches, bench_scan, bench_skeleton);
criterion_main!(scanner_benches);

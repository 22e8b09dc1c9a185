use std::iter;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lazy_static::lazy_static;

const KB: usize = 1024;

lazy_static! {
    static ref SEARCH_DATA: Vec<(&'static str, &'static str, String)> = vec![
        ("Literal", "y", "x".repeat(50) + "y"),
        ("NotLiteral", ".y", "x".repeat(50) + "y"),
        ("MatchClass", "[abcdw]", "xxxx".repeat(20) + "w"),
        // 'b' is between 'a' and 'c', so the charclass range checking is no help here.
        ("MatchClass_InRange", "[ac]", "bbbb".repeat(20) + "c"),
        ("AnchoredLiteralShortNonMatch", "^zbc(d|e)", "abcdefghijklmnopqrstuvwxyz".to_owned()),
        (
            "AnchoredLiteralLongNonMatch",
            "^zbc(d|e)",
            "abcdefghijklmnopqrstuvwxyz".repeat(1 << 15)
        ),
    ];
    static ref SCAN_DATA: Vec<(&'static str, &'static str)> = vec![
        ("Easy0", "ABCDEFGHIJKLMNOPQRSTUVWXYZ"),
        ("Easy1", "A[AB]B[BC]C[CD]D[DE]E[EF]F[FG]G[GH]H[HI]I[IJ]J"),
        ("Medium", "[XYZ]ABCDEFGHIJKLMNOPQRSTUVWXYZ"),
        ("Words", r"\w+"),
        ("Empty", r"\d*"),
    ];
    static ref SCAN_SIZE: Vec<usize> = vec![16, 32, KB, 32 * KB];
    static ref SCAN_TEXT: String = {
        let mut x: u32 = !0;

        iter::from_fn(|| {
            x = x.wrapping_add(x);
            x ^= 1;

            if (x as i32) < 0 {
                x ^= 0x8888_8eef
            }

            if x % 31 == 0 {
                Some('\n')
            } else {
                Some((x % (0x7E + 1 - 0x20) + 0x20) as u8 as char)
            }
        })
        .take(32 * KB)
        .collect()
    };
}

fn onigbind_search_bench(c: &mut Criterion) {
    use onigbind::prelude::*;

    let mut group = c.benchmark_group("onigbind");
    let mp = MatchParam::new().unwrap();

    for (name, expr, text) in SEARCH_DATA.iter() {
        let re = Regex::new(expr).unwrap();

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("search", name), text, |b, text| {
            b.iter(|| re.search_with_param(text, 0, text.len(), SearchOptions::NONE, None, &mp).unwrap())
        });
    }

    for (name, expr) in SCAN_DATA.iter() {
        let re = Regex::new(expr).unwrap();

        for &size in SCAN_SIZE.iter() {
            let text = &SCAN_TEXT[..size];

            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(BenchmarkId::new(*name, size), &text, |b, text| {
                b.iter(|| {
                    re.scan_with_param(text, 0, text.len(), SearchOptions::NONE, &mp, |_| Matching::Continue)
                        .unwrap()
                })
            });
        }
    }

    group.finish();
}

fn regex_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("regex");

    for (name, expr, text) in SEARCH_DATA.iter() {
        let re = regex::Regex::new(expr).unwrap();

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("search", name), text, |b, text| {
            b.iter(|| re.find(text))
        });
    }

    for (name, expr) in SCAN_DATA.iter() {
        let re = regex::Regex::new(expr).unwrap();

        for &size in SCAN_SIZE.iter() {
            let text = &SCAN_TEXT[..size];

            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(BenchmarkId::new(*name, size), &text, |b, text| {
                b.iter(|| re.find_iter(text).count())
            });
        }
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = onigbind_search_bench, regex_bench
}

criterion_main!(benches);

use std::hint::black_box;

use artmatch::matcher::cross_check_match;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use opencv::core::{CV_8UC1, Mat, Scalar};
use opencv::prelude::*;
use rand::prelude::*;

fn random_descriptors(rng: &mut impl RngCore, n: i32) -> Mat {
    let mut mat = Mat::new_rows_cols_with_default(n, 32, CV_8UC1, Scalar::all(0.)).unwrap();
    rng.fill_bytes(mat.data_bytes_mut().unwrap());
    mat
}

fn bench_cross_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("Cross check");
    let mut rng = rand::rng();

    group.throughput(Throughput::Elements(1));
    // ORB 默认最多 500 个特征点
    for n in [100, 500] {
        let des1 = random_descriptors(&mut rng, n);
        let des2 = random_descriptors(&mut rng, n);
        group.bench_function(format!("{n}x{n}"), |b| {
            b.iter(|| cross_check_match(black_box(&des1), black_box(&des2)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cross_check);
criterion_main!(benches);

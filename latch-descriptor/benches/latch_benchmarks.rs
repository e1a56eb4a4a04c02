use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use latch_core::{Image, ImageView, Keypoint, LatchConfig, DESCRIPTOR_BYTES};
use latch_descriptor::{LatchBuilder, LatchExtractor};

/// Create benchmark image with texture at several frequencies
fn create_benchmark_image(width: usize, height: usize) -> Image {
    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let coarse = ((x / 16 + y / 16) % 2) as u8 * 60;
            let fine = ((x * 7 + y * 13) % 31) as u8;
            let gradient = ((x as f32 / width as f32) * 100.0) as u8;
            img[y * width + x] = 40 + coarse + fine + gradient;
        }
    }
    img
}

/// Keypoints spread over the interior with varying scale and orientation
fn create_benchmark_keypoints(n: usize, width: usize, height: usize) -> Vec<Keypoint> {
    let span_x = (width - 80) as f32;
    let span_y = (height - 80) as f32;
    (0..n)
        .map(|i| {
            let t = i as f32;
            Keypoint::new(
                40.0 + (t * 11.37) % span_x,
                40.0 + (t * 5.71) % span_y,
                4.0 + (t * 0.37) % 10.0,
                (t * 0.29) % 6.283,
            )
        })
        .collect()
}

fn bench_single_vs_multi(c: &mut Criterion) {
    let (w, h) = (1280, 720);
    let img = create_benchmark_image(w, h);
    let view = ImageView::new(&img, w, h);

    let sequential = LatchExtractor::new(LatchConfig::sequential()).unwrap();
    let parallel = LatchBuilder::new().preset_parallel().build().unwrap();

    let mut group = c.benchmark_group("latch_extraction");
    for &n in &[16usize, 256, 2048, 10_000] {
        let keypoints = create_benchmark_keypoints(n, w, h);
        let mut out = vec![0u8; n * DESCRIPTOR_BYTES];

        group.bench_with_input(BenchmarkId::new("sequential", n), &keypoints, |b, kps| {
            b.iter(|| {
                let mut kps = kps.clone();
                black_box(sequential.compute_into(view, &mut kps, &mut out).unwrap())
            })
        });

        group.bench_with_input(BenchmarkId::new("parallel", n), &keypoints, |b, kps| {
            b.iter(|| {
                let mut kps = kps.clone();
                black_box(parallel.compute_into(view, &mut kps, &mut out).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_thread_scaling(c: &mut Criterion) {
    let (w, h) = (1280, 720);
    let img = create_benchmark_image(w, h);
    let view = ImageView::new(&img, w, h);
    let keypoints = create_benchmark_keypoints(5000, w, h);
    let mut out = vec![0u8; keypoints.len() * DESCRIPTOR_BYTES];

    let mut group = c.benchmark_group("thread_scaling");
    for &threads in &[1usize, 2, 4, 8] {
        let ex = LatchBuilder::new().threads(threads).build().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(threads), &keypoints, |b, kps| {
            b.iter(|| {
                let mut kps = kps.clone();
                black_box(ex.compute_into(view, &mut kps, &mut out).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_single_keypoint(c: &mut Criterion) {
    let (w, h) = (256, 256);
    let img = create_benchmark_image(w, h);
    let view = ImageView::new(&img, w, h);
    let kp = Keypoint::new(128.0, 128.0, 9.0, 0.8);
    let mut block = [0u8; DESCRIPTOR_BYTES];

    c.bench_function("describe_keypoint", |b| {
        b.iter(|| {
            latch_descriptor::packer::describe_keypoint(&view, black_box(&kp), &mut block);
            black_box(block[0])
        })
    });
}

criterion_group!(benches, bench_single_vs_multi, bench_thread_scaling, bench_single_keypoint);
criterion_main!(benches);

// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for batch planning and gallery bookkeeping.
//!
//! Measures the performance of:
//! - Planning a batch (random sizes + URL building)
//! - Applying a completed batch to a large gallery

use criterion::{criterion_group, criterion_main, Criterion};
use iced::widget::image;
use iced_gallery::gallery::{Message, Settings, State};
use iced_gallery::source::{plan_batch, BatchRequest, DimensionRange, RemoteImage};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

const BASE_URL: &str = "https://source.unsplash.com/";

/// Planning alone and planning plus URL construction for a first-page batch.
fn bench_plan_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_planning");
    let dimensions = DimensionRange::new(250, 750);
    let batch = BatchRequest::primary("mountain lake", 15);

    group.bench_function("plan_initial_batch", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| black_box(plan_batch(&mut rng, dimensions, black_box(&batch))));
    });

    group.bench_function("plan_and_build_urls", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| {
            let urls: Vec<_> = plan_batch(&mut rng, dimensions, &batch)
                .iter()
                .filter_map(|request| request.url(BASE_URL).ok())
                .collect();
            black_box(urls);
        });
    });

    group.finish();
}

/// Appending a scroll batch once the gallery already holds many pictures.
fn bench_apply_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_planning");
    let pictures = |count: usize| -> Vec<RemoteImage> {
        (0..count)
            .map(|i| {
                RemoteImage::new(
                    format!("https://images.unsplash.com/photo-{i}"),
                    image::Handle::from_bytes(vec![0u8; 16]),
                )
            })
            .collect()
    };

    let (mut base, _) = State::mount(Settings::default(), 1024.0);
    base.handle(Message::BatchFetched {
        request: BatchRequest::primary("", 1000),
        result: Ok(pictures(1000)),
    });
    let scroll_batch = pictures(5);

    group.bench_function("append_scroll_batch", |b| {
        b.iter(|| {
            let mut state = base.clone();
            state.handle(Message::BatchFetched {
                request: BatchRequest::primary("", 5),
                result: Ok(scroll_batch.clone()),
            });
            black_box(state.images().len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_plan_batch, bench_apply_batch);
criterion_main!(benches);

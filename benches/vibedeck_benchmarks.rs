//! # VibeDeck Performance Benchmarks
//!
//! Benchmarks for the operations that scale with catalog size.
//!
//! ## Benchmark Categories
//!
//! - **Vibe Graph**: Full rebuild after a catalog edit
//! - **Search**: Snapshot plus linear keyword scan
//! - **Navigation**: Vibe and sequential next/previous
//!
//! ## Running Benchmarks
//!
//! ```bash
//! cargo bench
//! cargo bench vibe_graph
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use vibedeck::library::Library;
use vibedeck::playback::{BrowseMode, PlaybackSession};
use vibedeck::track::TrackFields;

const VIBES: &[&str] = &["Happy", "Chill", "Sad", "Energetic", "Emotional", "Upbeat"];
const GENRES: &[&str] = &["Pop", "Rock", "Jazz", "Hip-Hop", "R&B"];

fn create_test_catalog(count: usize) -> Vec<TrackFields> {
    (0..count)
        .map(|i| {
            TrackFields::new(
                &format!("Track {i}"),
                &format!("Artist {}", i % 97),
                GENRES[i % GENRES.len()],
                VIBES[i % VIBES.len()],
            )
        })
        .collect()
}

fn benchmark_vibe_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("vibe_graph");

    for size in [100, 1_000, 10_000].iter() {
        let mut library = Library::new().with_catalog(create_test_catalog(*size));
        group.bench_with_input(BenchmarkId::new("rebuild", size), size, |b, _| {
            b.iter(|| library.rebuild_index());
        });
    }

    let mut library = Library::new().with_catalog(create_test_catalog(1_000));
    group.bench_function("add_with_rebuild_1000", |b| {
        b.iter(|| {
            let added = library.add(TrackFields::new("New", "Someone", "Pop", "Happy"));
            library.delete(added.id()).ok();
        });
    });

    group.finish();
}

fn benchmark_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [100, 1_000, 10_000].iter() {
        let library = Library::new().with_catalog(create_test_catalog(*size));
        group.bench_with_input(BenchmarkId::new("keyword", size), size, |b, _| {
            b.iter(|| black_box(library.search(black_box("chill"))));
        });
    }

    group.finish();
}

fn benchmark_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");
    let library = Library::new().with_catalog(create_test_catalog(1_000));

    group.bench_function("next_related", |b| {
        let track = library.get_all()[500].clone();
        b.iter(|| black_box(library.next_related(black_box(&track))));
    });

    for mode in [BrowseMode::Home, BrowseMode::Playlist] {
        group.bench_function(format!("session_next_{mode:?}").to_lowercase(), |b| {
            let mut session = PlaybackSession::from_library(&library);
            session.set_mode(mode);
            b.iter(|| black_box(session.next(&library)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_vibe_graph, benchmark_search, benchmark_navigation);
criterion_main!(benches);

// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_gallery::api::{parse_search_page, RawHit, SearchPage};
use iced_gallery::search::{NotificationSink, SearchState};
use std::hint::black_box;

struct Discard;

impl NotificationSink for Discard {
    fn warn(&mut self, _key: &str, _args: &[(&str, &str)]) {}
}

fn page(per_page: u64, page: u64, total_hits: u64) -> SearchPage {
    let start = (page - 1) * per_page;
    SearchPage {
        total_hits,
        hits: (start..(start + per_page).min(total_hits))
            .map(|n| RawHit {
                id: n,
                tags: format!("nature, landscape, tag{n}"),
                webformat_url: format!("https://cdn.test/{n}_640.jpg"),
                large_image_url: format!("https://cdn.test/{n}_1280.jpg"),
            })
            .collect(),
    }
}

fn body(per_page: u64) -> Vec<u8> {
    let hits: Vec<String> = (0..per_page)
        .map(|n| {
            format!(
                r#"{{"id":{n},"pageURL":"https://pixabay.test/{n}","type":"photo","tags":"nature, landscape","previewURL":"https://cdn.test/{n}_150.jpg","webformatURL":"https://cdn.test/{n}_640.jpg","largeImageURL":"https://cdn.test/{n}_1280.jpg","views":100,"likes":3}}"#
            )
        })
        .collect();
    format!(r#"{{"total":5000,"totalHits":500,"hits":[{}]}}"#, hits.join(",")).into_bytes()
}

/// Loads every page of a result set through the search state.
fn result_merging_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("result_merging");

    for per_page in [12_u64, 50, 200] {
        let total_hits = 500;
        let pages: Vec<SearchPage> = (1..=total_hits.div_ceil(per_page))
            .map(|p| page(per_page, p, total_hits))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(per_page), &pages, |b, pages| {
            b.iter(|| {
                let mut state = SearchState::new();
                let mut sink = Discard;
                let mut next = state.submit("landscape", &mut sink);
                for page in pages {
                    let Some(request) = next else { break };
                    state.apply(&request.ticket, Ok(page.clone()), &mut sink);
                    next = state.load_more();
                }
                black_box(state.results().len())
            });
        });
    }

    group.finish();
}

fn response_parsing_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("response_parsing");

    for per_page in [12_u64, 200] {
        let bytes = body(per_page);
        group.bench_with_input(BenchmarkId::from_parameter(per_page), &bytes, |b, bytes| {
            b.iter(|| black_box(parse_search_page(black_box(bytes))));
        });
    }

    group.finish();
}

criterion_group!(benches, result_merging_benchmark, response_parsing_benchmark);
criterion_main!(benches);

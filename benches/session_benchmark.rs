use async_trait::async_trait;
use book_finder::views::render_session;
use book_finder::{Book, GatewayError, SearchController, SearchGateway, SearchResultPage};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

struct OfflineGateway;

#[async_trait]
impl SearchGateway for OfflineGateway {
    async fn fetch_page(&self, _: &str, _: u32) -> Result<SearchResultPage, GatewayError> {
        unreachable!("benchmarks complete requests directly")
    }
}

fn sample_page(num_found: u64, start: u64, count: usize) -> SearchResultPage {
    SearchResultPage {
        num_found,
        start,
        docs: (0..count)
            .map(|i| {
                let n = start as usize + i;
                let mut book = Book::new(
                    format!("/works/OL{}W", n),
                    format!("A Rather Long Title For Benchmark Book Number {} In The Series", n),
                );
                book.author_name = vec![format!("Author {}", n % 50), "Co Author".to_string()];
                book.first_publish_year = Some(1800 + (n % 200) as i32);
                book.cover_i = if n % 3 == 0 { None } else { Some(n as i64) };
                book
            })
            .collect(),
    }
}

fn loaded_controller(pages: u64) -> SearchController<OfflineGateway> {
    let total = pages * 20;
    let mut controller = SearchController::new(Arc::new(OfflineGateway));
    if let Some(request) = controller.begin_search("benchmark") {
        controller.complete(&request, Ok(sample_page(total, 0, 20)));
    }
    for p in 1..pages {
        if let Some(request) = controller.begin_load_more() {
            controller.complete(&request, Ok(sample_page(total, p * 20, 20)));
        }
    }
    controller
}

fn benchmark_accumulate_pages(c: &mut Criterion) {
    c.bench_function("accumulate_50_pages", |b| {
        b.iter(|| loaded_controller(black_box(50)))
    });
}

fn benchmark_render_session(c: &mut Criterion) {
    let controller = loaded_controller(10);

    c.bench_function("render_200_cards", |b| {
        b.iter(|| {
            render_session(
                black_box(controller.session()),
                black_box("https://covers.openlibrary.org"),
            )
        })
    });
}

criterion_group!(benches, benchmark_accumulate_pages, benchmark_render_session);
criterion_main!(benches);

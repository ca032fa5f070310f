use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use test_fixtures::{numbered_corpus, ScriptedProvider};
use verse_core::config::RetrievalConfig;
use verse_embeddings::EmbeddingClient;
use verse_retrieval::{cosine_similarity, CorpusIndex, RetrievalEngine};

fn bench_cosine(c: &mut Criterion) {
    let a: Vec<f32> = (0..768).map(|i| (i as f32 * 0.01).sin()).collect();
    let b: Vec<f32> = (0..768).map(|i| (i as f32 * 0.02).cos()).collect();
    c.bench_function("cosine_similarity_768", |bench| {
        bench.iter(|| cosine_similarity(black_box(&a), black_box(&b)))
    });
}

fn bench_semantic_search(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
    let engine = RetrievalEngine::new(
        CorpusIndex::build(&numbered_corpus(500)),
        EmbeddingClient::with_provider(Arc::new(ScriptedProvider::new(256))),
        RetrievalConfig::default(),
    );
    // Warm the cache so the bench measures ranking, not the provider.
    rt.block_on(engine.semantic_search("line 42", 10));

    c.bench_function("semantic_search_cached_pool_80", |bench| {
        bench
            .to_async(&rt)
            .iter(|| engine.semantic_search(black_box("line 42"), 10))
    });
}

fn bench_fallback(c: &mut Criterion) {
    let index = CorpusIndex::build(&numbered_corpus(5_000));
    c.bench_function("keyword_fallback_5000", |bench| {
        bench.iter(|| {
            verse_retrieval::search::search_keyword(index.records(), black_box("Line 49"), 10)
        })
    });
}

criterion_group!(benches, bench_cosine, bench_semantic_search, bench_fallback);
criterion_main!(benches);

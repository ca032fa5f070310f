//! EmbeddingClient integration tests against the scripted provider.

use std::sync::Arc;

use futures::future::join_all;
use test_fixtures::ScriptedProvider;
use verse_core::constants::CACHE_KEY_CHARS;
use verse_embeddings::{cache_key, EmbeddingCache, EmbeddingClient};

#[tokio::test]
async fn texts_sharing_prefix_issue_one_request() {
    let provider = Arc::new(ScriptedProvider::new(32));
    let client = EmbeddingClient::with_provider(provider.clone());
    let prefix = "In the beginning ".repeat(20);
    assert!(prefix.chars().count() > CACHE_KEY_CHARS);

    let a = client.embed(&format!("{prefix}was the word")).await.unwrap();
    let b = client.embed(&format!("{prefix}was the light")).await.unwrap();

    assert_eq!(provider.calls(), 1);
    assert!(Arc::ptr_eq(&a, &b));
}

#[tokio::test]
async fn texts_differing_within_prefix_are_separate() {
    let provider = Arc::new(ScriptedProvider::new(32));
    let client = EmbeddingClient::with_provider(provider.clone());

    client.embed("the sun rises").await.unwrap();
    client.embed("the moon sets").await.unwrap();

    assert_eq!(provider.calls(), 2);
    assert_eq!(client.cache().len(), 2);
}

#[tokio::test]
async fn provider_receives_full_text_not_key() {
    let provider = Arc::new(ScriptedProvider::new(32));
    let client = EmbeddingClient::with_provider(provider.clone());
    let long = "x".repeat(CACHE_KEY_CHARS + 50);

    client.embed(&long).await.unwrap();

    assert_eq!(provider.requests(), vec![long.clone()]);
    assert!(client.cache().contains(cache_key(&long)));
}

#[tokio::test]
async fn concurrent_distinct_texts_all_cached() {
    let provider = Arc::new(ScriptedProvider::new(32));
    let client = EmbeddingClient::with_provider(provider.clone());
    let texts: Vec<String> = (0..25).map(|i| format!("verse number {i}")).collect();

    let results = join_all(texts.iter().map(|t| client.embed(t))).await;

    assert!(results.iter().all(|r| r.is_ok()));
    assert_eq!(client.cache().len(), 25);
    assert_eq!(provider.calls(), 25);

    // Every result belongs to its own text.
    for (text, result) in texts.iter().zip(results) {
        let expected = provider.bag_of_words(text);
        assert_eq!(&*result.unwrap(), expected.as_slice());
    }
}

#[tokio::test]
async fn injected_cache_is_shared_between_clients() {
    let cache = EmbeddingCache::shared();
    let first = Arc::new(ScriptedProvider::new(8));
    let second = Arc::new(ScriptedProvider::new(8));

    EmbeddingClient::new(first.clone(), cache.clone())
        .embed("shared verse")
        .await
        .unwrap();
    EmbeddingClient::new(second.clone(), cache)
        .embed("shared verse")
        .await
        .unwrap();

    assert_eq!(first.calls(), 1);
    assert_eq!(second.calls(), 0);
}

#[tokio::test]
async fn fresh_cache_per_client_by_default() {
    let provider = Arc::new(ScriptedProvider::new(8));

    EmbeddingClient::with_provider(provider.clone())
        .embed("verse")
        .await
        .unwrap();
    EmbeddingClient::with_provider(provider.clone())
        .embed("verse")
        .await
        .unwrap();

    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn missing_vector_leaves_cache_empty() {
    let client =
        EmbeddingClient::with_provider(Arc::new(ScriptedProvider::new(8).returning_no_vector()));
    assert!(client.embed("verse").await.is_err());
    assert!(client.cache().is_empty());
}

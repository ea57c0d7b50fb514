use std::sync::Arc;

use answerbank_core::config::EmbeddingConfig;
use answerbank_embeddings::EmbeddingEngine;

fn engine(provider: &str) -> EmbeddingEngine {
    let corpus = vec![
        "What is your name?".to_string(),
        "What time is it?".to_string(),
        "How are you?".to_string(),
    ];
    EmbeddingEngine::new(
        &EmbeddingConfig {
            provider: provider.to_string(),
            dimensions: 96,
            ..Default::default()
        },
        &corpus,
    )
}

#[test]
fn query_and_batch_embeddings_agree() {
    for provider in ["hashed", "tfidf"] {
        let engine = engine(provider);
        let batch = engine
            .embed_batch(&["What time is it?".to_string()])
            .unwrap();
        let single = engine.embed_query("What time is it?").unwrap();
        assert_eq!(batch[0], single, "provider {provider}");
    }
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = Arc::new(engine("hashed"));
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                for i in 0..25 {
                    let v = engine.embed_query(&format!("question {t} {i}")).unwrap();
                    assert_eq!(v.len(), 96);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().expect("embedding thread should not panic");
    }
}

#[test]
fn whitespace_only_query_yields_zero_vector() {
    let engine = engine("tfidf");
    let v = engine.embed_query("   ").unwrap();
    assert_eq!(v.len(), 96);
    assert!(v.iter().all(|&x| x == 0.0));
}

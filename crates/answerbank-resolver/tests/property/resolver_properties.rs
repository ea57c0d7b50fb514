//! Property tests: casing/padding variants of stored questions resolve through
//! the textual tiers, and unknown input is gated until readiness.

use std::sync::Arc;

use answerbank_core::config::SimilarityConfig;
use answerbank_core::constants::NOT_READY_MESSAGE;
use answerbank_core::models::ResolutionTier;
use answerbank_embeddings::HashedProvider;
use answerbank_indexer::Readiness;
use answerbank_resolver::Resolver;
use answerbank_store::{load_knowledge_base, KnowledgeBase};
use proptest::prelude::*;
use test_fixtures::corpus_path;

fn unready_resolver() -> Resolver {
    let kb: KnowledgeBase = load_knowledge_base(&corpus_path("small_talk.json")).unwrap();
    Resolver::new(
        Arc::new(kb),
        Arc::new(HashedProvider::new(16)),
        Arc::new(Readiness::new()),
        &SimilarityConfig::default(),
    )
}

/// Apply per-character case flips and surrounding whitespace.
fn disguise(question: &str, flips: &[bool], left: &str, right: &str) -> String {
    let body: String = question
        .chars()
        .zip(flips.iter().cycle())
        .map(|(c, &upper)| {
            if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect();
    format!("{left}{body}{right}")
}

proptest! {
    #[test]
    fn variants_of_stored_questions_hit_textual_tiers(
        pick in 0usize..8,
        flips in prop::collection::vec(any::<bool>(), 1..16),
        left in "[ \t\n]{0,4}",
        right in "[ \t\n]{0,4}",
    ) {
        let resolver = unready_resolver();
        let entry = resolver.knowledge_base().get(pick).unwrap().clone();
        let input = disguise(&entry.question, &flips, &left, &right);

        let resolution = resolver.resolve_detailed(&input);
        prop_assert_eq!(resolution.tier, ResolutionTier::Exact);
        prop_assert_eq!(resolution.answer, entry.answer);
    }

    #[test]
    fn unknown_input_is_gated_before_readiness(input in "[a-z]{3,12} [a-z]{3,12} zq") {
        let resolver = unready_resolver();
        prop_assert_eq!(resolver.resolve(&input), NOT_READY_MESSAGE);
    }

    #[test]
    fn binary_search_agrees_with_exact_lookup(pick in 0usize..8) {
        let resolver = unready_resolver();
        let kb = resolver.knowledge_base();
        let question = &kb.get(pick).unwrap().question;
        prop_assert_eq!(kb.exact_lookup(question), kb.binary_search(question));
    }
}

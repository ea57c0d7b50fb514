use answerbank_core::models::KnowledgeEntry;
use answerbank_store::KnowledgeBase;
use proptest::prelude::*;

fn corpus() -> impl Strategy<Value = Vec<KnowledgeEntry>> {
    prop::collection::vec(("[A-Za-z ?]{0,12}", "[a-z]{1,8}"), 0..40).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(q, a)| KnowledgeEntry::new(q, a))
            .collect()
    })
}

proptest! {
    #[test]
    fn binary_search_matches_linear_scan(source in corpus(), probe in "[A-Za-z ?]{0,12}") {
        let kb = KnowledgeBase::from_entries(source);
        let linear = kb
            .entries()
            .iter()
            .position(|e| e.question == probe)
            .map(|i| kb.entries()[i].answer.as_str());
        let binary = kb.binary_search(&probe).map(|hit| hit.answer);
        prop_assert_eq!(linear, binary);
    }

    #[test]
    fn every_stored_question_hits_both_tiers_identically(source in corpus()) {
        let kb = KnowledgeBase::from_entries(source);
        for entry in kb.entries() {
            let exact = kb.exact_lookup(&entry.question);
            let binary = kb.binary_search(&entry.question);
            prop_assert!(exact.is_some());
            prop_assert_eq!(exact, binary);
        }
    }

    #[test]
    fn last_occurrence_wins(source in corpus()) {
        let kb = KnowledgeBase::from_entries(source.clone());
        for entry in kb.entries() {
            let last = source.iter().rev().find(|e| e.question == entry.question).unwrap();
            prop_assert_eq!(&last.answer, &entry.answer);
        }
    }

    #[test]
    fn entries_sorted_and_unique(source in corpus()) {
        let kb = KnowledgeBase::from_entries(source);
        prop_assert!(kb.entries().windows(2).all(|w| w[0].question < w[1].question));
    }
}

use answerbank_similarity::{euclidean, SimilarityIndex};
use proptest::prelude::*;

const DIMS: usize = 4;

fn matrix() -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(prop::collection::vec(-10.0f32..10.0, DIMS), 1..50)
}

fn probe() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-10.0f32..10.0, DIMS)
}

proptest! {
    #[test]
    fn nearest_matches_brute_force(rows in matrix(), q in probe()) {
        let index = SimilarityIndex::build(&rows).unwrap();
        let hit = index.nearest(&q).unwrap().unwrap();
        let best = rows
            .iter()
            .map(|r| euclidean(r, &q))
            .fold(f32::INFINITY, f32::min);
        prop_assert!((hit.distance - best).abs() < 1e-4);
    }

    #[test]
    fn query_results_sorted_and_unique(rows in matrix(), q in probe(), k in 0usize..60) {
        let index = SimilarityIndex::build(&rows).unwrap();
        let hits = index.query(&q, k).unwrap();
        prop_assert_eq!(hits.len(), k.min(rows.len()));
        prop_assert!(hits.windows(2).all(|w| w[0].distance <= w[1].distance));
        let mut seen: Vec<usize> = hits.iter().map(|n| n.index).collect();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), hits.len());
    }

    #[test]
    fn every_row_is_its_own_nearest_at_distance_zero(rows in matrix()) {
        let index = SimilarityIndex::build(&rows).unwrap();
        for row in &rows {
            let hit = index.nearest(row).unwrap().unwrap();
            prop_assert_eq!(hit.distance, 0.0);
        }
    }
}

//! Property tests for filtering, mapping and multi-key sorting

use proptest::prelude::*;

use keypath::{
    KeyPath, KeyPathIterator, Property, SortByKeyPath, SortDescriptor, compare_all,
    ordered_before, their,
};

#[derive(Clone, Debug, PartialEq)]
struct Row {
    group: u8,
    label: String,
    score: i32,
}

const GROUP: KeyPath<Row, u8> = KeyPath::new(|r: &Row| &r.group);
const LABEL: KeyPath<Row, String> = KeyPath::new(|r: &Row| &r.label);
const SCORE: KeyPath<Row, i32> = KeyPath::new(|r: &Row| &r.score);

fn row() -> impl Strategy<Value = Row> {
    (0u8..4, "[a-d]{0,3}", -50i32..50).prop_map(|(group, label, score)| Row {
        group,
        label,
        score,
    })
}

proptest! {
    #[test]
    fn filter_by_keeps_exactly_matching(rows in prop::collection::vec(row(), 0..40)) {
        let positive = Property::new(|r: &Row| r.score > 0);
        let kept: Vec<&Row> = rows.iter().filter_by(positive).collect();
        let expected: Vec<&Row> = rows.iter().filter(|r| r.score > 0).collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn map_by_is_pointwise(rows in prop::collection::vec(row(), 0..40)) {
        let scores: Vec<i32> = rows.iter().map_by(SCORE).collect();
        prop_assert_eq!(scores.len(), rows.len());
        for (score, row) in scores.iter().zip(&rows) {
            prop_assert_eq!(*score, row.score);
        }
    }

    #[test]
    fn their_agrees_with_lt(a in row(), b in row()) {
        prop_assert_eq!(their(LABEL)(&a, &b), a.label < b.label);
        prop_assert_eq!(their(SCORE)(&a, &b), a.score < b.score);
    }

    #[test]
    fn multi_key_sort_orders_lexicographically(rows in prop::collection::vec(row(), 0..40)) {
        let rules = [
            SortDescriptor::ascending(GROUP),
            SortDescriptor::descending(SCORE),
            SortDescriptor::ascending(LABEL),
        ];
        let mut sorted = rows.clone();
        sorted.sort_by_descriptors(&rules);

        let mut expected = rows;
        expected.sort_by(|l, r| {
            l.group
                .cmp(&r.group)
                .then(r.score.cmp(&l.score))
                .then(l.label.cmp(&r.label))
        });
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn combined_predicate_is_strict(a in row(), b in row()) {
        let rules = [SortDescriptor::descending(GROUP), SortDescriptor::ascending(SCORE)];
        let before = ordered_before(&rules);
        prop_assert!(!before(&a, &a));
        prop_assert!(!(before(&a, &b) && before(&b, &a)));
        prop_assert_eq!(before(&a, &b), compare_all(&rules, &a, &b).is_lt());
    }

    #[test]
    fn sorting_is_idempotent(rows in prop::collection::vec(row(), 0..40)) {
        let rules = [SortDescriptor::ascending(LABEL), SortDescriptor::descending(GROUP)];
        let once = rows.iter().sorted_by_descriptors(&rules);
        let twice = once.clone().into_iter().sorted_by_descriptors(&rules);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn singleton_ascending_matches_their(rows in prop::collection::vec(row(), 0..40)) {
        let mut by_descriptor = rows.clone();
        by_descriptor.sort_by_descriptors(&[SortDescriptor::ascending(SCORE)]);
        let mut by_predicate = rows;
        by_predicate.sort_by_predicate(their(SCORE));
        prop_assert_eq!(by_descriptor, by_predicate);
    }

    #[test]
    fn descriptor_comparisons_are_antisymmetric(a in row(), b in row()) {
        let rules = [
            SortDescriptor::ascending(LABEL),
            SortDescriptor::descending(SCORE),
            SortDescriptor::ascending(GROUP).reversed(),
        ];
        for rule in &rules {
            prop_assert_eq!(rule.compare(&a, &b), rule.compare(&b, &a).reverse());
        }
        prop_assert_eq!(
            compare_all(&rules, &a, &b),
            compare_all(&rules, &b, &a).reverse()
        );
    }
}

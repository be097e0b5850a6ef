//! Property-based tests for graph building.
//!
//! These tests use proptest to generate random property sets and verify
//! that invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use std::collections::BTreeSet;

    use crate::builder::GraphBuilder;
    use crate::defaults::DEFAULT_TEMPLATE_SUFFIX;
    use crate::extraction::ExtractionOptions;
    use crate::property::PropertySet;
    use crate::transform::SuffixRule;
    use proptest::prelude::*;

    /// Keys drawn from a small alphabet so that references collide often.
    fn key() -> impl Strategy<Value = String> {
        "[a-e](\\.format)?"
    }

    /// A value made of literal text and `${key}` references.
    fn value() -> impl Strategy<Value = String> {
        let part = prop_oneof![
            "[0-9 .-]{0,3}",
            key().prop_map(|k| format!("${{{}}}", k)),
        ];
        prop::collection::vec(part, 0..5).prop_map(|parts| parts.concat())
    }

    fn property_set() -> impl Strategy<Value = PropertySet> {
        prop::collection::btree_map(key(), value(), 0..6).prop_map(PropertySet::from)
    }

    fn builder() -> GraphBuilder {
        GraphBuilder::default().with_rule(SuffixRule::default())
    }

    // ============================================================================
    // extraction property tests
    // ============================================================================

    proptest! {
        /// Property: every extracted token was written as `${token}` in the value
        #[test]
        fn extracted_tokens_appear_in_value(value in value()) {
            let options = ExtractionOptions::default();
            for token in options.extract(&value) {
                let placeholder = format!("${{{}}}", token);
                prop_assert!(value.contains(&placeholder));
            }
        }

        /// Property: values without a `$` never produce dependencies
        #[test]
        fn plain_values_have_no_tokens(value in "[^$]*") {
            prop_assert!(ExtractionOptions::default().extract(&value).is_empty());
        }
    }

    // ============================================================================
    // build property tests
    // ============================================================================

    proptest! {
        /// Property: the edge set does not depend on the order of the property sets
        #[test]
        fn build_ignores_set_order(sets in prop::collection::vec(property_set(), 0..4)) {
            let builder = builder();
            let forward = builder.build(sets.iter());
            let backward = builder.build(sets.iter().rev());
            prop_assert_eq!(forward, backward);
        }

        /// Property: building twice from the same input gives the same graph
        #[test]
        fn build_is_deterministic(sets in prop::collection::vec(property_set(), 0..4)) {
            let builder = builder();
            prop_assert_eq!(builder.build(&sets), builder.build(&sets));
        }

        /// Property: each key's dependencies are the union over all sets
        #[test]
        fn build_merges_sets(first in property_set(), second in property_set()) {
            let builder = builder();
            let merged = builder.build([&first, &second]);
            let only_first = builder.build([&first]);
            let only_second = builder.build([&second]);

            let union: BTreeSet<(&str, &str)> =
                only_first.edges().chain(only_second.edges()).collect();
            let actual: BTreeSet<(&str, &str)> = merged.edges().collect();
            prop_assert_eq!(actual, union);
        }

        /// Property: every template key yields an edge from its derived key
        #[test]
        fn build_links_every_template_key(set in property_set()) {
            let graph = builder().build([&set]);
            for entry in set.iter() {
                if let Some(derived) = entry.key().strip_suffix(DEFAULT_TEMPLATE_SUFFIX) {
                    prop_assert!(graph.contains_edge(derived, entry.key()));
                }
            }
        }

        /// Property: without a rule, edges are exactly the extracted references
        #[test]
        fn build_without_rule_matches_extraction(set in property_set()) {
            let options = ExtractionOptions::default();
            let graph = GraphBuilder::new(options.clone()).build([&set]);

            let expected: usize = set.iter().map(|e| options.extract(e.value()).len()).sum();
            prop_assert_eq!(graph.edge_count(), expected);
        }
    }
}

//! Property-based tests for the shuffle session.
//!
//! Increase cases locally with: PROPTEST_CASES=800 cargo test -p nolza

use std::collections::HashSet;
use std::env;

use proptest::prelude::*;

use crate::domain::shuffle::ShuffleSession;
use crate::domain::test_gens::{self, Action};
use crate::domain::tips::{next_tip_for_count, SAFETY_TIPS};

fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(32);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn prop_no_immediate_repeat(
        (catalog, start) in test_gens::catalog_with_member(2, 12),
        seed in any::<u64>(),
        steps in 1usize..60,
    ) {
        let mut session = ShuffleSession::seeded(seed);
        let mut current = catalog[start].clone();
        for _ in 0..steps {
            let next = session.next_slug(&catalog, Some(current.as_str()));
            let next = next.expect("two or more slugs always leave a candidate");
            prop_assert_ne!(&next, &current);
            current = next;
        }
    }

    #[test]
    fn prop_blocks_without_exclusion_are_permutations(
        catalog in test_gens::catalog(1, 10),
        seed in any::<u64>(),
        blocks in 1usize..5,
    ) {
        let mut session = ShuffleSession::seeded(seed);
        for _ in 0..blocks {
            let block: HashSet<String> = (0..catalog.len())
                .filter_map(|_| session.next_slug(&catalog, None))
                .collect();
            prop_assert_eq!(block.len(), catalog.len());
        }
    }

    #[test]
    fn prop_used_slugs_stay_within_catalog(
        catalog in test_gens::catalog(1, 8),
        seed in any::<u64>(),
        actions in test_gens::actions(8, 40),
    ) {
        let mut session = ShuffleSession::seeded(seed);
        let all: HashSet<&str> = catalog.iter().map(String::as_str).collect();
        let mut expected_count = 0u32;
        for action in actions {
            match action {
                Action::Reset => {
                    session.reset();
                    expected_count = 0;
                }
                Action::Next => {
                    if let Some(slug) = session.next_slug(&catalog, None) {
                        prop_assert!(all.contains(slug.as_str()));
                    }
                }
                Action::NextExcluding(i) => {
                    let exclude = &catalog[i % catalog.len()];
                    if let Some(slug) = session.next_slug(&catalog, Some(exclude.as_str())) {
                        prop_assert_ne!(&slug, exclude);
                    } else {
                        prop_assert_eq!(catalog.len(), 1);
                    }
                }
                Action::Mark(i) => session.mark_used(&catalog[i % catalog.len()]),
                Action::Increment => {
                    expected_count += 1;
                    prop_assert_eq!(session.increment_count(), expected_count);
                }
                Action::SetTip(tip) => session.set_pending_tip_index(tip),
                Action::ConsumeTip => {
                    session.consume_pending_tip_index();
                    prop_assert_eq!(session.pending_tip_index(), None);
                }
            }
            prop_assert!(session.used_slugs().iter().all(|s| all.contains(s.as_str())));
            prop_assert_eq!(session.shuffle_count(), expected_count);
        }
    }

    #[test]
    fn prop_tip_cadence(count in 1u32..10_000) {
        let tip = next_tip_for_count(count, SAFETY_TIPS.len());
        if count % 4 == 0 {
            prop_assert_eq!(tip, Some(((count / 4 - 1) as usize) % SAFETY_TIPS.len()));
        } else {
            prop_assert_eq!(tip, None);
        }
    }
}

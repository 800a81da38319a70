//! Deterministic tests for shuffle selection, counting and tip hand-off.

use std::collections::HashSet;

use crate::domain::shuffle::ShuffleSession;

fn abc() -> Vec<&'static str> {
    vec!["A", "B", "C"]
}

#[test]
fn never_returns_the_excluded_slug() {
    let catalog = vec!["a", "b", "c", "d"];
    let mut session = ShuffleSession::seeded(7);
    let mut current = session.next_slug(&catalog, None).unwrap();
    for _ in 0..200 {
        let next = session.next_slug(&catalog, Some(current.as_str())).unwrap();
        assert_ne!(next, current, "immediate repeat of the game on screen");
        current = next;
    }
}

#[test]
fn each_block_of_n_calls_covers_the_catalog() {
    let catalog = vec!["a", "b", "c", "d", "e", "f"];
    let mut session = ShuffleSession::seeded(2024);
    for block in 0..5 {
        let seen: HashSet<String> = (0..catalog.len())
            .map(|_| session.next_slug(&catalog, None).unwrap())
            .collect();
        assert_eq!(seen.len(), catalog.len(), "block {block} repeated a slug");
    }
}

#[test]
fn exhaustion_clears_used_set_and_keeps_going() {
    let catalog = abc();
    let mut session = ShuffleSession::seeded(11);
    for _ in 0..3 {
        session.next_slug(&catalog, None).unwrap();
    }
    assert_eq!(session.used_slugs().len(), 3);

    let wrapped = session.next_slug(&catalog, None).unwrap();
    assert_eq!(session.used_slugs().len(), 1);
    assert!(session.used_slugs().contains(&wrapped));
}

#[test]
fn three_game_walkthrough_with_exclusion() {
    let catalog = abc();
    let mut session = ShuffleSession::seeded(5);
    session.reset();

    let first = session.next_slug(&catalog, None).unwrap();
    let second = session.next_slug(&catalog, Some(first.as_str())).unwrap();
    assert_ne!(second, first);

    let third = session.next_slug(&catalog, Some(second.as_str())).unwrap();
    let all: HashSet<&str> = [first.as_str(), second.as_str(), third.as_str()]
        .into_iter()
        .collect();
    assert_eq!(all.len(), 3, "first three picks must cover A, B and C");

    // Pool minus `third` is fully used, so the set wraps.
    let fourth = session.next_slug(&catalog, Some(third.as_str())).unwrap();
    assert_ne!(fourth, third);
    assert!(catalog.iter().any(|s| *s == fourth));
    assert_eq!(session.used_slugs().len(), 1);
}

#[test]
fn single_game_catalog_excluding_itself_has_no_pick() {
    let catalog = vec!["A"];
    let mut session = ShuffleSession::seeded(1);
    assert_eq!(session.next_slug(&catalog, Some("A")), None);
    assert_eq!(session.next_slug(&catalog, None).as_deref(), Some("A"));
}

#[test]
fn empty_catalog_has_no_pick() {
    let catalog: Vec<&str> = Vec::new();
    let mut session = ShuffleSession::seeded(1);
    assert_eq!(session.next_slug(&catalog, None), None);
}

#[test]
fn marked_slug_is_skipped_until_wrap() {
    let catalog = vec!["a", "b"];
    let mut session = ShuffleSession::seeded(8);
    session.mark_used("a");
    assert_eq!(session.next_slug(&catalog, None).as_deref(), Some("b"));
}

#[test]
fn counter_counts_up_from_one() {
    let mut session = ShuffleSession::seeded(1);
    let seq: Vec<u32> = (0..6).map(|_| session.increment_count()).collect();
    assert_eq!(seq, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(session.shuffle_count(), 6);
}

#[test]
fn pending_tip_is_consumed_once() {
    let mut session = ShuffleSession::seeded(1);
    session.set_pending_tip_index(Some(2));
    assert_eq!(session.consume_pending_tip_index(), Some(2));
    assert_eq!(session.consume_pending_tip_index(), None);
}

#[test]
fn setting_none_clears_pending_tip() {
    let mut session = ShuffleSession::seeded(1);
    session.set_pending_tip_index(Some(1));
    session.set_pending_tip_index(None);
    assert_eq!(session.consume_pending_tip_index(), None);
}

#[test]
fn reset_clears_everything() {
    let catalog = abc();
    let mut session = ShuffleSession::seeded(3);
    session.next_slug(&catalog, None);
    session.next_slug(&catalog, None);
    session.mark_used("C");
    session.increment_count();
    session.increment_count();
    session.set_pending_tip_index(Some(0));

    session.reset();
    assert!(session.used_slugs().is_empty());
    assert_eq!(session.pending_tip_index(), None);
    assert_eq!(session.increment_count(), 1);

    // Reset twice is the same as once.
    session.reset();
    session.reset();
    assert_eq!(session.shuffle_count(), 0);
}

#[test]
fn after_reset_any_slug_can_come_first() {
    let catalog = abc();
    let mut firsts = HashSet::new();
    for seed in 0..64 {
        let mut session = ShuffleSession::seeded(seed);
        session.next_slug(&catalog, None);
        session.next_slug(&catalog, None);
        session.reset();
        firsts.insert(session.next_slug(&catalog, None).unwrap());
    }
    assert_eq!(firsts.len(), 3);
}

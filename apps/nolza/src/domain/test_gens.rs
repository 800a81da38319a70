// Proptest generators for shuffle inputs.

use proptest::prelude::*;

/// Generate a catalog of `min..=max` distinct slugs.
pub fn catalog(min: usize, max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z]{1,8}", min..=max)
        .prop_map(|set| {
            let mut slugs: Vec<String> = set.into_iter().collect();
            slugs.sort();
            slugs
        })
}

/// A catalog together with an index of one of its slugs.
pub fn catalog_with_member(min: usize, max: usize) -> impl Strategy<Value = (Vec<String>, usize)> {
    catalog(min, max).prop_flat_map(|slugs| {
        let len = slugs.len();
        (Just(slugs), 0..len)
    })
}

/// A single user action against a session.
#[derive(Debug, Clone)]
pub enum Action {
    Reset,
    Next,
    NextExcluding(usize),
    Mark(usize),
    Increment,
    SetTip(Option<usize>),
    ConsumeTip,
}

pub fn action(catalog_len: usize) -> impl Strategy<Value = Action> {
    let max = catalog_len.max(1);
    prop_oneof![
        Just(Action::Reset),
        Just(Action::Next),
        (0..max).prop_map(Action::NextExcluding),
        (0..max).prop_map(Action::Mark),
        Just(Action::Increment),
        prop::option::of(0..4usize).prop_map(Action::SetTip),
        Just(Action::ConsumeTip),
    ]
}

pub fn actions(catalog_len: usize, max_len: usize) -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(action(catalog_len), 0..max_len)
}

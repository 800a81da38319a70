//! Shuffle session: random game selection without immediate repeats.
//!
//! A session tracks one shuffle streak. Slugs shown during the streak are kept
//! in a used set so the next pick prefers games not yet seen; once every
//! candidate has been used the set is cleared and selection wraps around.
//! The session also carries the shuffle counter and the one-shot pending tip
//! consumed by the next game screen.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::catalog::SlugSource;

/// State for the current shuffle streak.
///
/// Generic over the RNG so tests and the simulator can inject a seeded one.
#[derive(Debug, Clone)]
pub struct ShuffleSession<R = StdRng> {
    used_slugs: HashSet<String>,
    shuffle_count: u32,
    pending_tip_index: Option<usize>,
    rng: R,
}

impl ShuffleSession<StdRng> {
    /// Fresh session seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Fresh session with a reproducible pick sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is given, entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::new(),
        }
    }
}

impl Default for ShuffleSession<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ShuffleSession<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            used_slugs: HashSet::new(),
            shuffle_count: 0,
            pending_tip_index: None,
            rng,
        }
    }

    /// End the current streak. Idempotent.
    pub fn reset(&mut self) {
        self.used_slugs.clear();
        self.shuffle_count = 0;
        self.pending_tip_index = None;
        debug!("shuffle streak reset");
    }

    /// Pick the next slug to show, never returning `exclude`.
    ///
    /// Unused slugs are preferred. When none remain the used set is cleared
    /// and the pick is made from the whole catalog minus `exclude`. Returns
    /// `None` only when the catalog has nothing besides `exclude`.
    pub fn next_slug<C>(&mut self, catalog: &C, exclude: Option<&str>) -> Option<String>
    where
        C: SlugSource + ?Sized,
    {
        let pool: Vec<&str> = catalog
            .slugs()
            .into_iter()
            .filter(|slug| Some(*slug) != exclude)
            .collect();

        let mut candidates: Vec<&str> = pool
            .iter()
            .copied()
            .filter(|slug| !self.used_slugs.contains(*slug))
            .collect();

        if candidates.is_empty() {
            debug!(used = self.used_slugs.len(), "shuffle pool exhausted, wrapping");
            self.used_slugs.clear();
            candidates = pool;
        }

        if candidates.is_empty() {
            debug!(?exclude, "no shuffle candidates");
            return None;
        }

        let pick = candidates[self.rng.random_range(0..candidates.len())].to_string();
        self.used_slugs.insert(pick.clone());
        debug!(slug = %pick, remaining = candidates.len() - 1, "shuffle pick");
        Some(pick)
    }

    /// Record a slug as shown without selecting it.
    pub fn mark_used(&mut self, slug: &str) {
        if slug.is_empty() {
            return;
        }
        self.used_slugs.insert(slug.to_string());
    }

    /// Count one more shuffle action and return the new total.
    pub fn increment_count(&mut self) -> u32 {
        self.shuffle_count = self.shuffle_count.saturating_add(1);
        self.shuffle_count
    }

    pub fn set_pending_tip_index(&mut self, index: Option<usize>) {
        self.pending_tip_index = index;
    }

    /// Take the pending tip, leaving none behind.
    pub fn consume_pending_tip_index(&mut self) -> Option<usize> {
        self.pending_tip_index.take()
    }

    pub fn shuffle_count(&self) -> u32 {
        self.shuffle_count
    }

    pub fn pending_tip_index(&self) -> Option<usize> {
        self.pending_tip_index
    }

    pub fn used_slugs(&self) -> &HashSet<String> {
        &self.used_slugs
    }
}

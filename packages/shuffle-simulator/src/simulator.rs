//! In-memory shuffle streak simulation.

use std::collections::HashSet;
use std::sync::Arc;

use nolza::services::NoopAnalytics;
use nolza::{GameCatalog, Origin, ShuffleController, ShuffleSession, TipSchedule};
use serde::Serialize;

/// Outcome of one streak: a home shuffle followed by in-game shuffles.
#[derive(Debug, Clone, Serialize)]
pub struct StreakResult {
    pub streak_no: u64,
    pub seed: u64,
    pub visited: Vec<String>,
    /// Pairs of consecutive identical games; the shuffle rules keep this at zero.
    pub immediate_repeats: usize,
    /// Shuffle counts at which a safety tip was shown.
    pub tips_at: Vec<u32>,
    pub distinct_games: usize,
    /// Index into `visited` by which every game had appeared, if reached.
    pub full_coverage_at: Option<usize>,
}

pub struct Simulator {
    catalog: Arc<GameCatalog>,
    tips: TipSchedule,
}

impl Simulator {
    pub fn new(catalog: GameCatalog, tips: TipSchedule) -> Self {
        Self {
            catalog: Arc::new(catalog),
            tips,
        }
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    /// Run one streak of `length` in-game shuffles after the home shuffle.
    pub fn run_streak(&self, streak_no: u64, seed: u64, length: usize) -> StreakResult {
        let controller = ShuffleController::new(
            self.catalog.clone(),
            self.tips,
            Arc::new(NoopAnalytics),
            ShuffleSession::seeded(seed),
        );

        let mut visited = Vec::with_capacity(length + 1);
        let mut tips_at = Vec::new();

        if let Some(nav) = controller.start_from_home() {
            let mut current = nav.slug().unwrap_or_default().to_string();
            controller.enter_game(&current, Origin::Shuffle);
            visited.push(current.clone());

            for _ in 0..length {
                let Some(nav) = controller.shuffle_from_game(&current, Origin::Shuffle) else {
                    break;
                };
                current = nav.slug().unwrap_or_default().to_string();
                let screen = controller.enter_game(&current, Origin::Shuffle);
                if screen.tip.is_some() {
                    tips_at.push(controller.shuffle_count());
                }
                visited.push(current.clone());
            }
        }
        controller.leave_game();

        let immediate_repeats = visited.windows(2).filter(|w| w[0] == w[1]).count();
        let mut seen = HashSet::new();
        let mut full_coverage_at = None;
        for (idx, slug) in visited.iter().enumerate() {
            seen.insert(slug.as_str());
            if full_coverage_at.is_none() && seen.len() == self.catalog.len() {
                full_coverage_at = Some(idx);
            }
        }

        StreakResult {
            streak_no,
            seed,
            distinct_games: seen.len(),
            visited,
            immediate_repeats,
            tips_at,
            full_coverage_at,
        }
    }
}

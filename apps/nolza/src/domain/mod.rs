//! Domain layer: catalog data, shuffle session, tip cadence and guidelines.

pub mod catalog;
pub mod guidelines;
pub mod seed_derivation;
pub mod shuffle;
pub mod tips;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_shuffle;
#[cfg(test)]
mod tests_shuffle;

// Re-exports for ergonomics
pub use catalog::{ExtendedRule, GameCatalog, GameRecord, InstructionStep, Overview, SlugSource};
pub use guidelines::{find_guideline, Guideline, GUIDELINES};
pub use seed_derivation::derive_streak_seed;
pub use shuffle::ShuffleSession;
pub use tips::{next_tip_for_count, SafetyTip, TipSchedule, DEFAULT_TIP_EVERY, SAFETY_TIPS};

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod infra;
pub mod services;
pub mod state;
pub mod telemetry;

// Re-exports for public API
pub use config::ShuffleConfig;
pub use domain::{
    next_tip_for_count, GameCatalog, GameRecord, Guideline, SafetyTip, ShuffleSession,
    SlugSource, TipSchedule, GUIDELINES, SAFETY_TIPS,
};
pub use error::AppError;
pub use errors::DomainError;
pub use infra::state::{build_state, StateBuilder};
pub use services::{
    AnalyticsEvent, AnalyticsSink, GameScreen, Navigation, Origin, Screen, ShuffleController,
};
pub use state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    nolza_test_support::logging::init();
}

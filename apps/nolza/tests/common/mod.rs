#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::Arc;

use nolza::services::RecordingAnalytics;
use nolza::{GameCatalog, ShuffleController, ShuffleSession, TipSchedule};

// Logging is auto-installed for every test binary that pulls in this module
#[ctor::ctor]
fn init_logging() {
    nolza_test_support::logging::init();
}

/// Controller over `catalog` with a seeded session and recorded analytics.
pub fn seeded_controller(
    catalog: GameCatalog,
    seed: u64,
) -> (ShuffleController, Arc<RecordingAnalytics>) {
    let analytics = Arc::new(RecordingAnalytics::new());
    let controller = ShuffleController::new(
        Arc::new(catalog),
        TipSchedule::default(),
        analytics.clone(),
        ShuffleSession::seeded(seed),
    );
    (controller, analytics)
}

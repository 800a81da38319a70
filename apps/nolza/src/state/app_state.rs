use std::sync::Arc;

use crate::config::ShuffleConfig;
use crate::domain::catalog::GameCatalog;
use crate::domain::shuffle::ShuffleSession;
use crate::services::analytics::AnalyticsSink;
use crate::services::shuffle_flow::ShuffleController;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Games available to browse and shuffle
    pub catalog: Arc<GameCatalog>,
    /// Resolved shuffle configuration
    pub config: ShuffleConfig,
    /// Destination for usage events
    pub analytics: Arc<dyn AnalyticsSink>,
}

impl AppState {
    pub fn new(
        catalog: GameCatalog,
        config: ShuffleConfig,
        analytics: Arc<dyn AnalyticsSink>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config,
            analytics,
        }
    }

    /// Controller owning a fresh shuffle session for this app run.
    pub fn shuffle_controller(&self) -> ShuffleController {
        ShuffleController::new(
            self.catalog.clone(),
            self.config.tip_schedule(),
            self.analytics.clone(),
            ShuffleSession::from_seed(self.config.seed),
        )
    }
}

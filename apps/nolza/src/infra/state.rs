use std::sync::Arc;

use tracing::info;

use crate::config::ShuffleConfig;
use crate::domain::catalog::GameCatalog;
use crate::error::AppError;
use crate::services::analytics::{AnalyticsSink, TracingAnalytics};
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    config: ShuffleConfig,
    catalog: Option<GameCatalog>,
    analytics: Arc<dyn AnalyticsSink>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            config: ShuffleConfig::default(),
            catalog: None,
            analytics: Arc::new(TracingAnalytics::default()),
        }
    }
    pub fn with_config(mut self, config: ShuffleConfig) -> Self {
        self.config = config;
        self
    }
    /// Use this catalog instead of loading one from config.
    pub fn with_catalog(mut self, catalog: GameCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }
    pub fn with_analytics(mut self, analytics: Arc<dyn AnalyticsSink>) -> Self {
        self.analytics = analytics;
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        let catalog = match (self.catalog, &self.config.catalog_path) {
            (Some(catalog), _) => catalog,
            (None, Some(path)) => GameCatalog::from_path(path)?,
            (None, None) => GameCatalog::builtin()?,
        };
        info!(
            games = catalog.len(),
            tip_every = self.config.tip_every,
            seeded = self.config.seed.is_some(),
            "catalog loaded"
        );
        Ok(AppState::new(catalog, self.config, self.analytics))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_build_defaults_to_builtin_catalog() {
        let state = build_state().build().unwrap();
        assert_eq!(state.catalog.len(), 8);
    }

    #[test]
    fn test_build_loads_catalog_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"games": [{{"slug": "solo", "title": "Solo", "tagline": "", "overview": {{"players": "1", "drinks": "Any", "materials": "None"}}, "instructions": []}}]}}"#
        )
        .unwrap();

        let config = ShuffleConfig {
            catalog_path: Some(file.path().to_path_buf()),
            ..ShuffleConfig::default()
        };
        let state = build_state().with_config(config).build().unwrap();
        assert_eq!(state.catalog.len(), 1);
        assert!(state.catalog.get("solo").is_some());
        assert!(!state.shuffle_controller().can_shuffle());
    }

    #[test]
    fn test_build_reports_missing_catalog_file() {
        let config = ShuffleConfig {
            catalog_path: Some("/no/such/catalog.json".into()),
            ..ShuffleConfig::default()
        };
        let err = build_state().with_config(config).build().err().unwrap();
        assert_eq!(err.code(), "CATALOG_NOT_FOUND");
    }
}

//! Shuffle configuration loaded from the environment.
//!
//! - `NOLZA_SHUFFLE_SEED`: optional u64; makes pick order reproducible
//! - `NOLZA_TIP_EVERY`: shuffles between safety tips, `0` disables (default 4)
//! - `NOLZA_CATALOG_PATH`: optional JSON catalog replacing the bundled games

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::tips::{TipSchedule, DEFAULT_TIP_EVERY};
use crate::error::AppError;

pub const SEED_VAR: &str = "NOLZA_SHUFFLE_SEED";
pub const TIP_EVERY_VAR: &str = "NOLZA_TIP_EVERY";
pub const CATALOG_PATH_VAR: &str = "NOLZA_CATALOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffleConfig {
    pub seed: Option<u64>,
    pub tip_every: u32,
    pub catalog_path: Option<PathBuf>,
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tip_every: DEFAULT_TIP_EVERY,
            catalog_path: None,
        }
    }
}

impl ShuffleConfig {
    /// Read configuration from the environment. Unset or blank variables
    /// fall back to defaults; unparsable values are a config error.
    pub fn from_env() -> Result<Self, AppError> {
        let seed = parse_var::<u64>(SEED_VAR)?;
        let tip_every = parse_var::<u32>(TIP_EVERY_VAR)?.unwrap_or(DEFAULT_TIP_EVERY);
        let catalog_path = non_empty_var(CATALOG_PATH_VAR).map(PathBuf::from);

        Ok(Self {
            seed,
            tip_every,
            catalog_path,
        })
    }

    pub fn tip_schedule(&self) -> TipSchedule {
        TipSchedule::new(self.tip_every)
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    pub fn with_tip_every(mut self, tip_every: Option<u32>) -> Self {
        if let Some(every) = tip_every {
            self.tip_every = every;
        }
        self
    }

    pub fn with_catalog_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.catalog_path = path;
        }
        self
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    let value = env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match non_empty_var(name) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::config(format!("{name} must be a non-negative integer, got '{raw}'"))),
    }
}

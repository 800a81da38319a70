//! Analytics seam for shuffle usage.
//!
//! Delivery to a real analytics backend lives outside this crate; the app
//! only needs somewhere to hand events to. Every tracked event is wrapped with
//! the properties common to the whole app session.

use std::env;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    ShuffleUsed {
        previous_game_id: Option<String>,
        resulting_game_id: String,
        shuffle_count: u32,
    },
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::ShuffleUsed { .. } => "shuffle_used",
        }
    }
}

/// Properties attached to every event of one app session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommonProperties {
    pub session_id: String,
    pub app_version: &'static str,
    pub platform: &'static str,
    pub locale: String,
    pub device_language: String,
}

impl CommonProperties {
    /// Fresh session id plus version, OS and locale of the running process.
    pub fn detect() -> Self {
        let raw_locale = ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .find_map(|var| env::var(var).ok().filter(|v| !v.trim().is_empty()));
        let (locale, device_language) = split_locale(raw_locale.as_deref());
        Self {
            session_id: Uuid::new_v4().to_string(),
            app_version: env!("CARGO_PKG_VERSION"),
            platform: env::consts::OS,
            locale,
            device_language,
        }
    }

    /// Start a new analytics session, keeping everything else.
    pub fn new_session(&mut self) -> &str {
        self.session_id = Uuid::new_v4().to_string();
        &self.session_id
    }
}

/// `en_US.UTF-8` -> (`en_US`, `en`). Missing or `C`/`POSIX` locales are unknown.
fn split_locale(raw: Option<&str>) -> (String, String) {
    let locale = raw
        .map(|r| r.split(['.', '@']).next().unwrap_or_default().trim())
        .filter(|l| !l.is_empty() && *l != "C" && *l != "POSIX");
    match locale {
        Some(locale) => {
            let language = locale.split(['-', '_']).next().unwrap_or_default();
            let language = if language.is_empty() { "unknown" } else { language };
            (locale.to_string(), language.to_string())
        }
        None => ("unknown".to_string(), "unknown".to_string()),
    }
}

/// An event as delivered: common properties flattened next to event fields.
#[derive(Debug, Serialize)]
pub struct TrackedEvent<'a> {
    #[serde(flatten)]
    pub common: &'a CommonProperties,
    #[serde(flatten)]
    pub event: &'a AnalyticsEvent,
}

pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: &AnalyticsEvent);
}

/// Emits each event as a structured log line under the `analytics` target.
#[derive(Debug, Clone)]
pub struct TracingAnalytics {
    common: CommonProperties,
}

impl TracingAnalytics {
    pub fn new(common: CommonProperties) -> Self {
        Self { common }
    }

    pub fn common(&self) -> &CommonProperties {
        &self.common
    }
}

impl Default for TracingAnalytics {
    fn default() -> Self {
        Self::new(CommonProperties::detect())
    }
}

impl AnalyticsSink for TracingAnalytics {
    fn track(&self, event: &AnalyticsEvent) {
        let tracked = TrackedEvent {
            common: &self.common,
            event,
        };
        match serde_json::to_string(&tracked) {
            Ok(properties) => info!(target: "analytics", event = event.name(), %properties),
            Err(e) => warn!(target: "analytics", event = event.name(), error = %e, "failed to encode event"),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
    fn track(&self, _event: &AnalyticsEvent) {}
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingAnalytics {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl RecordingAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().clone()
    }

    pub fn take(&self) -> Vec<AnalyticsEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl AnalyticsSink for RecordingAnalytics {
    fn track(&self, event: &AnalyticsEvent) {
        self.events.lock().push(event.clone());
    }
}

//! Screen-level shuffle flows.
//!
//! Each public method corresponds to one navigation event in the app. The
//! streak boundary is explicit: `start_from_home` opens a streak and
//! `leave_game` closes it. Entering a game screen never resets anything.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::catalog::{GameCatalog, GameRecord};
use crate::domain::shuffle::ShuffleSession;
use crate::domain::tips::{SafetyTip, TipSchedule, SAFETY_TIPS};
use crate::services::analytics::{AnalyticsEvent, AnalyticsSink};

/// Where a game screen was opened from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Home,
    Library,
    Shuffle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Open a game screen on top of the current one.
    Push { slug: String, origin: Origin },
    /// Swap the current game screen for another, keeping the back target.
    Replace { slug: String, origin: Origin },
    /// Return to whatever opened the game screen.
    Back,
}

impl Navigation {
    pub fn slug(&self) -> Option<&str> {
        match self {
            Navigation::Push { slug, .. } | Navigation::Replace { slug, .. } => Some(slug),
            Navigation::Back => None,
        }
    }
}

/// What a game screen shows when it mounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameScreen {
    pub slug: String,
    pub origin: Origin,
    /// `None` renders the "game not found" state.
    pub record: Option<GameRecord>,
    /// Safety tip overlay scheduled by the shuffle that led here.
    pub tip: Option<SafetyTip>,
}

/// Owns the shuffle session and drives it from navigation events.
pub struct ShuffleController<R = StdRng> {
    catalog: Arc<GameCatalog>,
    tips: TipSchedule,
    analytics: Arc<dyn AnalyticsSink>,
    session: Mutex<ShuffleSession<R>>,
}

impl<R: Rng> ShuffleController<R> {
    pub fn new(
        catalog: Arc<GameCatalog>,
        tips: TipSchedule,
        analytics: Arc<dyn AnalyticsSink>,
        session: ShuffleSession<R>,
    ) -> Self {
        Self {
            catalog,
            tips,
            analytics,
            session: Mutex::new(session),
        }
    }

    pub fn catalog(&self) -> &GameCatalog {
        &self.catalog
    }

    /// Shuffle button is only useful with something to switch to.
    pub fn can_shuffle(&self) -> bool {
        self.catalog.len() > 1
    }

    /// Shuffle from the home screen: starts a fresh streak.
    pub fn start_from_home(&self) -> Option<Navigation> {
        let mut session = self.session.lock();
        session.reset();

        let slug = session.next_slug(&*self.catalog, None)?;
        let shuffle_count = session.increment_count();
        drop(session);

        self.analytics.track(&AnalyticsEvent::ShuffleUsed {
            previous_game_id: None,
            resulting_game_id: slug.clone(),
            shuffle_count,
        });
        info!(%slug, shuffle_count, "shuffle started from home");

        Some(Navigation::Push {
            slug,
            origin: Origin::Shuffle,
        })
    }

    /// Shuffle from a game screen showing `current`.
    ///
    /// The count always advances and the pending tip is set or cleared
    /// according to the schedule, even when no other game is available.
    pub fn shuffle_from_game(&self, current: &str, origin: Origin) -> Option<Navigation> {
        let mut session = self.session.lock();
        let shuffle_count = session.increment_count();
        let tip = self.tips.tip_for_count(shuffle_count, SAFETY_TIPS.len());
        session.set_pending_tip_index(tip);

        let slug = session.next_slug(&*self.catalog, Some(current));
        drop(session);

        let Some(slug) = slug else {
            debug!(current, shuffle_count, "nothing to shuffle to");
            return None;
        };

        self.analytics.track(&AnalyticsEvent::ShuffleUsed {
            previous_game_id: Some(current.to_string()),
            resulting_game_id: slug.clone(),
            shuffle_count,
        });
        debug!(from = current, to = %slug, shuffle_count, ?tip, "shuffled");

        Some(Navigation::Replace { slug, origin })
    }

    /// Mount a game screen.
    ///
    /// Known games are recorded as seen so the next shuffle skips them, and
    /// any pending tip is handed to this screen exactly once.
    pub fn enter_game(&self, slug: &str, origin: Origin) -> GameScreen {
        let record = self.catalog.get(slug).cloned();

        let mut session = self.session.lock();
        if record.is_some() {
            session.mark_used(slug);
        }
        let tip = session
            .consume_pending_tip_index()
            .and_then(|idx| SAFETY_TIPS.get(idx).copied());
        drop(session);

        if record.is_none() {
            debug!(slug, "game not found");
        }

        GameScreen {
            slug: slug.to_string(),
            origin,
            record,
            tip,
        }
    }

    /// Back navigation out of a game screen. Ends the streak.
    pub fn leave_game(&self) -> Navigation {
        self.session.lock().reset();
        Navigation::Back
    }

    pub fn shuffle_count(&self) -> u32 {
        self.session.lock().shuffle_count()
    }

    pub fn used_count(&self) -> usize {
        self.session.lock().used_slugs().len()
    }
}

pub mod analytics;
pub mod screens;
pub mod shuffle_flow;

pub use analytics::{
    AnalyticsEvent, AnalyticsSink, CommonProperties, NoopAnalytics, RecordingAnalytics,
    TracingAnalytics,
};
pub use shuffle_flow::{GameScreen, Navigation, Origin, ShuffleController};
pub use screens::Screen;

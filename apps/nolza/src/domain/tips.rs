//! Safety-tip content and the cadence that schedules it.

use serde::Serialize;

/// Default number of shuffles between safety tips.
pub const DEFAULT_TIP_EVERY: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SafetyTip {
    pub title: &'static str,
    pub body: &'static str,
}

/// Tips are shown in this order, wrapping after the last one.
pub const SAFETY_TIPS: [SafetyTip; 4] = [
    SafetyTip {
        title: "Mix it up with non-alcoholic options",
        body: "Substitute alcoholic drinks with water, soft drinks, or mocktails during games to stay refreshed and help prevent binge drinking.",
    },
    SafetyTip {
        title: "Take care of yourself",
        body: "Stay hydrated, pace yourself, and take breaks when you need them. If you ever start to feel unwell or uncomfortable, it is always okay to stop drinking.",
    },
    SafetyTip {
        title: "Make sure everyone feels comfortable",
        body: "Never pressure anyone to drink or join a game. Everyone should feel free to participate at their own pace.",
    },
    SafetyTip {
        title: "Create an inclusive atmosphere",
        body: "Encourage participation without judgment, and celebrate everyone's choices - whether they are drinking alcohol, sipping a mocktail, or skipping drinks altogether.",
    },
];

/// How often a tip is scheduled, in shuffle actions.
///
/// `every == 0` disables tips entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipSchedule {
    pub every: u32,
}

impl Default for TipSchedule {
    fn default() -> Self {
        Self {
            every: DEFAULT_TIP_EVERY,
        }
    }
}

impl TipSchedule {
    pub const fn new(every: u32) -> Self {
        Self { every }
    }

    pub const fn disabled() -> Self {
        Self { every: 0 }
    }

    /// Tip index to schedule after the `count`-th shuffle, if any.
    ///
    /// Qualifying counts are `every, 2*every, ...`; the n-th qualifying count
    /// maps to tip `(n - 1) % tip_len`.
    pub fn tip_for_count(&self, count: u32, tip_len: usize) -> Option<usize> {
        if self.every == 0 || tip_len == 0 || count == 0 || count % self.every != 0 {
            return None;
        }
        let ordinal = (count / self.every - 1) as usize;
        Some(ordinal % tip_len)
    }
}

/// Cadence rule with the default interval of four shuffles.
pub fn next_tip_for_count(count: u32, tip_len: usize) -> Option<usize> {
    TipSchedule::default().tip_for_count(count, tip_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tip_only_on_multiples_of_four() {
        for k in 1..=20u32 {
            let tip = next_tip_for_count(k, SAFETY_TIPS.len());
            assert_eq!(tip.is_some(), k % 4 == 0, "count {k}");
        }
    }

    #[test]
    fn tips_rotate_in_order() {
        let seq: Vec<_> = [4u32, 8, 12, 16, 20, 24]
            .iter()
            .map(|&k| next_tip_for_count(k, SAFETY_TIPS.len()))
            .collect();
        assert_eq!(seq, vec![Some(0), Some(1), Some(2), Some(3), Some(0), Some(1)]);
    }

    #[test]
    fn zero_count_and_empty_list_yield_none() {
        assert_eq!(next_tip_for_count(0, 4), None);
        assert_eq!(next_tip_for_count(4, 0), None);
    }

    #[test]
    fn custom_interval() {
        let schedule = TipSchedule::new(3);
        assert_eq!(schedule.tip_for_count(2, 4), None);
        assert_eq!(schedule.tip_for_count(3, 4), Some(0));
        assert_eq!(schedule.tip_for_count(6, 4), Some(1));
        assert_eq!(schedule.tip_for_count(6, 1), Some(0));
    }

    #[test]
    fn disabled_schedule_never_fires() {
        let schedule = TipSchedule::disabled();
        assert!((0..50).all(|k| schedule.tip_for_count(k, 4).is_none()));
    }
}

//! Coarse time tracking - ranges instead of precise elapsed durations.

use serde::{Deserialize, Serialize};

const MS_PER_HOUR: i64 = 60 * 60 * 1000;

/// Coarse bucket for how long it has been since the last meaningful action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    Recent,
    Gap,
    LongGap,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::Recent, TimeRange::Gap, TimeRange::LongGap];

    /// True for `gap` and `long_gap`.
    pub fn is_inactive(&self) -> bool {
        match self {
            TimeRange::Recent => false,
            TimeRange::Gap | TimeRange::LongGap => true,
        }
    }

    /// Wire token for this range.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Recent => "recent",
            TimeRange::Gap => "gap",
            TimeRange::LongGap => "long_gap",
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The two thresholds separating `recent`, `gap` and `long_gap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeThresholds {
    /// Elapsed time below this is `recent`.
    pub gap_after_hours: u32,
    /// Elapsed time at or above this is `long_gap`.
    pub long_gap_after_hours: u32,
}

impl Default for TimeThresholds {
    fn default() -> Self {
        Self {
            gap_after_hours: 48,
            long_gap_after_hours: 168,
        }
    }
}

impl TimeThresholds {
    pub fn gap_after_ms(&self) -> i64 {
        i64::from(self.gap_after_hours) * MS_PER_HOUR
    }

    pub fn long_gap_after_ms(&self) -> i64 {
        i64::from(self.long_gap_after_hours) * MS_PER_HOUR
    }

    /// Classify elapsed time since the last meaningful action.
    ///
    /// No prior action means `long_gap`. A timestamp in the future counts as no elapsed time.
    pub fn classify(&self, last_meaningful_action_ms: Option<i64>, now_ms: i64) -> TimeRange {
        let Some(last) = last_meaningful_action_ms else {
            return TimeRange::LongGap;
        };

        let elapsed = now_ms.saturating_sub(last).max(0);
        if elapsed >= self.long_gap_after_ms() {
            TimeRange::LongGap
        } else if elapsed >= self.gap_after_ms() {
            TimeRange::Gap
        } else {
            TimeRange::Recent
        }
    }
}

/// Classify elapsed time using the default thresholds.
pub fn compute_time_range(last_meaningful_action_ms: Option<i64>, now_ms: i64) -> TimeRange {
    TimeThresholds::default().classify(last_meaningful_action_ms, now_ms)
}

/// Time information carried by a character.
///
/// `now_ms` is the time of the last calculation; `range` is only meaningful together
/// with `last_meaningful_action_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeContext {
    pub range: TimeRange,
    pub now_ms: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_meaningful_action_ms: Option<i64>,
}

impl TimeContext {
    /// Context for a character that has never acted.
    pub fn untouched(now_ms: i64) -> Self {
        Self {
            range: TimeRange::LongGap,
            now_ms,
            last_meaningful_action_ms: None,
        }
    }

    /// Context right after a meaningful action at `now_ms`.
    pub fn acted_at(now_ms: i64) -> Self {
        Self {
            range: TimeRange::Recent,
            now_ms,
            last_meaningful_action_ms: Some(now_ms),
        }
    }
}

//! Character state - the aggregate threaded through every transition.

mod stats;

pub use stats::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::time::TimeContext;

/// Stat value given to each key of a brand new character.
pub const DEFAULT_BASELINE_STAT: u32 = 1;

/// An unordered set of opaque flag tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flags(BTreeSet<String>);

impl Flags {
    /// Create an empty flag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a flag is present.
    pub fn contains(&self, flag: &str) -> bool {
        self.0.contains(flag)
    }

    /// Return a copy with the given flags added. Present flags are left as they are.
    pub fn with_set<I, S>(&self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.0.clone();
        next.extend(flags.into_iter().map(Into::into));
        Self(next)
    }

    /// Return a copy with the given flags removed. Absent flags are ignored.
    pub fn with_cleared<I, S>(&self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut next = self.0.clone();
        for flag in flags {
            next.remove(flag.as_ref());
        }
        Self(next)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over flags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Flags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// The full state of one player.
///
/// Values are never mutated by the engine; each transition returns a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterState {
    pub stats: Stats,
    pub flags: Flags,
    pub time_context: TimeContext,
}

impl CharacterState {
    /// State for a player seen for the first time.
    pub fn new(now_ms: i64) -> Self {
        Self::with_baseline(DEFAULT_BASELINE_STAT, now_ms)
    }

    /// State for a first-contact player with a specific baseline stat value.
    pub fn with_baseline(baseline: u32, now_ms: i64) -> Self {
        Self {
            stats: Stats::uniform(baseline),
            flags: Flags::new(),
            time_context: TimeContext::untouched(now_ms),
        }
    }

    /// Builder-style stats override.
    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = stats;
        self
    }

    /// Builder-style flags override.
    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Builder-style time context override.
    pub fn with_time_context(mut self, time_context: TimeContext) -> Self {
        self.time_context = time_context;
        self
    }

    /// Check if the character carries a flag.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }
}

impl Default for CharacterState {
    fn default() -> Self {
        Self::new(0)
    }
}

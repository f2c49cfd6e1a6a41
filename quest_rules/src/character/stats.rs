//! Trait stats: the closed set of keys and the values attached to them.

use serde::{Deserialize, Serialize};

/// The three trait categories. The set is closed; adding a key is a breaking change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKey {
    Agency,
    Courage,
    Order,
}

impl StatKey {
    /// All keys in canonical order.
    pub const ALL: [StatKey; 3] = [StatKey::Agency, StatKey::Courage, StatKey::Order];

    /// Wire token for this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatKey::Agency => "agency",
            StatKey::Courage => "courage",
            StatKey::Order => "order",
        }
    }
}

impl std::fmt::Display for StatKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current stat values for a character. Values never go below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    pub agency: u32,
    pub courage: u32,
    pub order: u32,
}

impl Stats {
    /// Create stats with every key at the same value.
    pub fn uniform(value: u32) -> Self {
        Self {
            agency: value,
            courage: value,
            order: value,
        }
    }

    /// Get the value of a stat.
    pub fn get(&self, key: StatKey) -> u32 {
        match key {
            StatKey::Agency => self.agency,
            StatKey::Courage => self.courage,
            StatKey::Order => self.order,
        }
    }

    fn slot_mut(&mut self, key: StatKey) -> &mut u32 {
        match key {
            StatKey::Agency => &mut self.agency,
            StatKey::Courage => &mut self.courage,
            StatKey::Order => &mut self.order,
        }
    }

    /// Return a copy with `delta` applied to `key`, floored at zero.
    pub fn with_delta(mut self, key: StatKey, delta: i32) -> Self {
        let slot = self.slot_mut(key);
        let next = (i64::from(*slot) + i64::from(delta)).max(0);
        *slot = u32::try_from(next).unwrap_or(u32::MAX);
        self
    }

    /// Return a copy with every present delta applied.
    pub fn with_deltas(self, deltas: &PartialStats<i32>) -> Self {
        deltas
            .iter()
            .fold(self, |stats, (key, delta)| stats.with_delta(key, delta))
    }

    /// Iterate over `(key, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKey, u32)> + '_ {
        StatKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

/// A partial mapping from stat key to a value, used for deltas and minimums.
///
/// Absent keys mean "not mentioned". Unknown keys are rejected on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialStats<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courage: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<T>,
}

impl<T: Copy> PartialStats<T> {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self {
            agency: None,
            courage: None,
            order: None,
        }
    }

    /// Set a value for a key.
    pub fn with(mut self, key: StatKey, value: T) -> Self {
        match key {
            StatKey::Agency => self.agency = Some(value),
            StatKey::Courage => self.courage = Some(value),
            StatKey::Order => self.order = Some(value),
        }
        self
    }

    /// Get the value for a key, if present.
    pub fn get(&self, key: StatKey) -> Option<T> {
        match key {
            StatKey::Agency => self.agency,
            StatKey::Courage => self.courage,
            StatKey::Order => self.order,
        }
    }

    /// Iterate over present entries in canonical key order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKey, T)> + '_ {
        StatKey::ALL
            .into_iter()
            .filter_map(move |key| self.get(key).map(|value| (key, value)))
    }

    /// True when no key is present.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

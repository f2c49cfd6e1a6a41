//! Quest definitions - what a quest asks for, gates on, and changes.

use serde::{Deserialize, Serialize};

use crate::character::{PartialStats, StatKey};
use crate::time::TimeRange;

/// Stable identifier for a quest, assigned by the catalog author.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestId(pub String);

impl QuestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QuestId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Quest category. Mirrors the stat keys one to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestType {
    Agency,
    Courage,
    Order,
}

impl QuestType {
    pub const ALL: [QuestType; 3] = [QuestType::Agency, QuestType::Courage, QuestType::Order];

    /// The stat this quest type is about.
    pub fn stat_key(&self) -> StatKey {
        match self {
            QuestType::Agency => StatKey::Agency,
            QuestType::Courage => StatKey::Courage,
            QuestType::Order => StatKey::Order,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.stat_key().as_str()
    }
}

impl std::fmt::Display for QuestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// State changes applied when a quest is completed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Consequence {
    #[serde(skip_serializing_if = "PartialStats::is_empty")]
    pub stat_deltas: PartialStats<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub set_flags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clear_flags: Vec<String>,
    /// Informational only; the engine reports these but does not track lock state.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unlocks: Vec<QuestId>,
}

impl Consequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delta(mut self, key: StatKey, delta: i32) -> Self {
        self.stat_deltas = self.stat_deltas.with(key, delta);
        self
    }

    pub fn with_set_flag(mut self, flag: impl Into<String>) -> Self {
        self.set_flags.push(flag.into());
        self
    }

    pub fn with_clear_flag(mut self, flag: impl Into<String>) -> Self {
        self.clear_flags.push(flag.into());
        self
    }

    pub fn with_unlock(mut self, quest_id: impl Into<QuestId>) -> Self {
        self.unlocks.push(quest_id.into());
        self
    }

    /// True when completing the quest would change nothing. Zero deltas count as nothing.
    pub fn is_empty(&self) -> bool {
        self.stat_deltas.iter().all(|(_, delta)| delta == 0)
            && self.set_flags.is_empty()
            && self.clear_flags.is_empty()
            && self.unlocks.is_empty()
    }
}

/// Minimum stat values a character needs for the quest to be offered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatGate {
    pub minimum: PartialStats<u32>,
}

/// Flags that must be present or absent for the quest to be offered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlagGate {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocked: Vec<String>,
}

/// Time ranges in which a quest is a better fit. Used for ordering only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Relevance {
    pub preferred_ranges: Vec<TimeRange>,
}

/// When a quest is offered. Every absent block means "unconstrained".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Availability {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatGate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<FlagGate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<Relevance>,
}

impl Availability {
    /// True when the quest declares `range` among its preferred ranges.
    pub fn prefers(&self, range: TimeRange) -> bool {
        self.relevance
            .as_ref()
            .is_some_and(|relevance| relevance.preferred_ranges.contains(&range))
    }
}

/// A single real-world quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuestNode {
    pub id: QuestId,
    #[serde(rename = "type")]
    pub quest_type: QuestType,
    /// Framing shown before the action.
    pub context: String,
    /// What the player actually does.
    pub real_world_action: String,
    /// The boundary that keeps the action small.
    pub constraint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<String>,
    #[serde(default)]
    pub consequence: Consequence,
    #[serde(default)]
    pub availability: Availability,
}

impl QuestNode {
    /// Create a quest with empty consequence and no availability constraints.
    pub fn new(
        id: impl Into<QuestId>,
        quest_type: QuestType,
        context: impl Into<String>,
        real_world_action: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            quest_type,
            context: context.into(),
            real_world_action: real_world_action.into(),
            constraint: constraint.into(),
            reflection: None,
            consequence: Consequence::default(),
            availability: Availability::default(),
        }
    }

    pub fn with_reflection(mut self, reflection: impl Into<String>) -> Self {
        self.reflection = Some(reflection.into());
        self
    }

    pub fn with_consequence(mut self, consequence: Consequence) -> Self {
        self.consequence = consequence;
        self
    }

    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Require a minimum value for a stat.
    pub fn with_minimum(mut self, key: StatKey, minimum: u32) -> Self {
        let gate = self.availability.stats.get_or_insert_with(StatGate::default);
        gate.minimum = gate.minimum.with(key, minimum);
        self
    }

    /// Require a flag to be present.
    pub fn with_required_flag(mut self, flag: impl Into<String>) -> Self {
        self.availability
            .flags
            .get_or_insert_with(FlagGate::default)
            .required
            .push(flag.into());
        self
    }

    /// Require a flag to be absent.
    pub fn with_blocked_flag(mut self, flag: impl Into<String>) -> Self {
        self.availability
            .flags
            .get_or_insert_with(FlagGate::default)
            .blocked
            .push(flag.into());
        self
    }

    /// Mark the quest as a better fit for the given ranges.
    pub fn with_preferred_ranges(mut self, ranges: impl IntoIterator<Item = TimeRange>) -> Self {
        self.availability
            .relevance
            .get_or_insert_with(Relevance::default)
            .preferred_ranges
            .extend(ranges);
        self
    }
}

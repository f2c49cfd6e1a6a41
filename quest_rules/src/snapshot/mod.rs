//! Storage-boundary records: the shape a player's state takes at rest.
//!
//! The core never reads the completion log in its own transitions. It travels with
//! the state so callers can apply repeatability and cooldown policies on top.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::character::{CharacterState, Flags, Stats};
use crate::error::RulesError;
use crate::quests::QuestId;
use crate::time::TimeContext;

/// Record of which quests a player has completed and when.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompletionLog {
    /// Completed quest ids in first-completion order, without repeats.
    pub completed_quest_ids: Vec<QuestId>,
    /// Most recent completion time per quest.
    pub completed_at_by_quest_id: BTreeMap<QuestId, i64>,
}

impl CompletionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a log with a completion of `quest_id` at `at_ms` recorded.
    pub fn record(&self, quest_id: &QuestId, at_ms: i64) -> Self {
        let mut next = self.clone();
        if !next.completed_quest_ids.contains(quest_id) {
            next.completed_quest_ids.push(quest_id.clone());
        }
        next.completed_at_by_quest_id.insert(quest_id.clone(), at_ms);
        next
    }

    pub fn has_completed(&self, quest_id: &QuestId) -> bool {
        self.completed_at_by_quest_id.contains_key(quest_id)
            || self.completed_quest_ids.contains(quest_id)
    }

    /// When the quest was last completed, if ever.
    pub fn last_completed_at(&self, quest_id: &QuestId) -> Option<i64> {
        self.completed_at_by_quest_id.get(quest_id).copied()
    }
}

/// A player's persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub stats: Stats,
    /// Order is not significant; written sorted.
    pub flags: Vec<String>,
    pub time_context: TimeContext,
    #[serde(default)]
    pub completed_quest_ids: Vec<QuestId>,
    #[serde(default)]
    pub completed_at_by_quest_id: BTreeMap<QuestId, i64>,
}

impl PlayerSnapshot {
    /// Capture a state together with its completion log.
    pub fn new(state: &CharacterState, completions: &CompletionLog) -> Self {
        Self {
            stats: state.stats,
            flags: state.flags.iter().map(str::to_string).collect(),
            time_context: state.time_context,
            completed_quest_ids: completions.completed_quest_ids.clone(),
            completed_at_by_quest_id: completions.completed_at_by_quest_id.clone(),
        }
    }

    /// Rebuild the character state. Duplicate flags collapse.
    pub fn character_state(&self) -> CharacterState {
        CharacterState {
            stats: self.stats,
            flags: self.flags.iter().cloned().collect::<Flags>(),
            time_context: self.time_context,
        }
    }

    /// The completion log carried alongside the state.
    pub fn completions(&self) -> CompletionLog {
        CompletionLog {
            completed_quest_ids: self.completed_quest_ids.clone(),
            completed_at_by_quest_id: self.completed_at_by_quest_id.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, RulesError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(source: &str) -> Result<Self, RulesError> {
        Ok(serde_json::from_str(source)?)
    }
}

//! Engine - the façade callers drive.
//!
//! Composes the quest catalog, transitions and the rules pipeline. Unknown quest
//! ids are a silent no-op: the state comes back unchanged with no events.

use crate::character::CharacterState;
use crate::config::EngineConfig;
use crate::quests::{QuestCatalog, QuestId, QuestNode};
use crate::rules::choose_quests;
use crate::transitions::{apply_quest_completed, apply_quest_started, apply_time_tick, Transition};

/// Drives transitions against an injected quest catalog.
#[derive(Debug, Clone)]
pub struct Engine<C> {
    catalog: C,
    config: EngineConfig,
}

impl<C: QuestCatalog> Engine<C> {
    /// Create an engine with the given catalog and configuration.
    pub fn new(catalog: C, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    /// Create an engine with default configuration.
    pub fn with_defaults(catalog: C) -> Self {
        Self::new(catalog, EngineConfig::default())
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// State for a player seen for the first time.
    pub fn new_character(&self, now_ms: i64) -> CharacterState {
        CharacterState::with_baseline(self.config.baseline_stat, now_ms)
    }

    /// Advance time. Never changes stats.
    pub fn tick(&self, state: &CharacterState, now_ms: i64) -> Transition {
        let transition = apply_time_tick(state, now_ms, &self.config.time);
        tracing::debug!(
            events = transition.events.len(),
            range = %transition.state.time_context.range,
            "time tick"
        );
        transition
    }

    /// Start a quest by id.
    pub fn start_quest(&self, state: &CharacterState, quest_id: &QuestId, now_ms: i64) -> Transition {
        let Some(quest) = self.lookup(quest_id) else {
            return Transition::unchanged(state);
        };

        let transition = apply_quest_started(state, &quest.id, quest.quest_type, now_ms);
        tracing::debug!(
            quest_id = %quest.id,
            events = transition.events.len(),
            range = %transition.state.time_context.range,
            "quest started"
        );
        transition
    }

    /// Complete a quest by id, applying its consequence.
    pub fn complete_quest(
        &self,
        state: &CharacterState,
        quest_id: &QuestId,
        now_ms: i64,
    ) -> Transition {
        let Some(quest) = self.lookup(quest_id) else {
            return Transition::unchanged(state);
        };

        let transition = apply_quest_completed(state, quest, now_ms);
        tracing::debug!(
            quest_id = %quest.id,
            events = transition.events.len(),
            range = %transition.state.time_context.range,
            "quest completed"
        );
        transition
    }

    /// The quests to show right now: filtered, ranked, and diversity-selected.
    ///
    /// Ranking reads the range stored in `state`; tick first to refresh it.
    pub fn available_quests(&self, state: &CharacterState) -> Vec<&QuestNode> {
        let all = self.catalog.list_all();
        let chosen = choose_quests(state, &all, self.config.max_choices);
        tracing::debug!(
            catalog = all.len(),
            chosen = chosen.len(),
            range = %state.time_context.range,
            "quests chosen"
        );
        chosen
    }

    fn lookup(&self, quest_id: &QuestId) -> Option<&QuestNode> {
        let quest = self.catalog.quest_by_id(quest_id);
        if quest.is_none() {
            tracing::debug!(quest_id = %quest_id, "unknown quest id, leaving state unchanged");
        }
        quest
    }
}

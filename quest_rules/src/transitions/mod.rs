//! Pure state transitions: time ticks, quest starts, quest completions.
//!
//! Each function takes the current state by reference and returns a new state
//! together with the ordered list of events describing the change. None of them
//! touch stats on inactivity: time passing leads to stagnation, never decay.

use crate::character::CharacterState;
use crate::events::GameEvent;
use crate::quests::{QuestId, QuestNode, QuestType};
use crate::time::{TimeContext, TimeRange, TimeThresholds};

/// The result of a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: CharacterState,
    pub events: Vec<GameEvent>,
}

impl Transition {
    /// A transition that changes nothing and reports nothing.
    pub fn unchanged(state: &CharacterState) -> Self {
        Self {
            state: state.clone(),
            events: Vec::new(),
        }
    }
}

/// Recompute the time range for `now_ms`.
///
/// Emits `time_context_changed` when the range moves, and `re_entry_suggested`
/// only on the edge from `recent` into `gap`/`long_gap`.
pub fn apply_time_tick(
    state: &CharacterState,
    now_ms: i64,
    thresholds: &TimeThresholds,
) -> Transition {
    let previous = state.time_context;
    let range = thresholds.classify(previous.last_meaningful_action_ms, now_ms);

    let mut events = Vec::new();
    if range != previous.range {
        events.push(GameEvent::TimeContextChanged {
            previous_range: previous.range,
            new_range: range,
        });
    }
    if range.is_inactive() && !previous.range.is_inactive() {
        events.push(GameEvent::ReEntrySuggested {
            current_range: range,
        });
    }

    let state = state.clone().with_time_context(TimeContext {
        range,
        now_ms,
        last_meaningful_action_ms: previous.last_meaningful_action_ms,
    });

    Transition { state, events }
}

/// Record that a quest was started. Starting counts as a meaningful action.
///
/// The quest's consequence is not applied here.
pub fn apply_quest_started(
    state: &CharacterState,
    quest_id: &QuestId,
    quest_type: QuestType,
    now_ms: i64,
) -> Transition {
    let mut events = Vec::new();
    push_range_change(&mut events, state.time_context.range, TimeRange::Recent);
    events.push(GameEvent::QuestStarted {
        quest_id: quest_id.clone(),
        quest_type,
    });

    let state = state
        .clone()
        .with_time_context(TimeContext::acted_at(now_ms));

    Transition { state, events }
}

/// Apply a quest's consequence and mark the completion.
///
/// Event order is fixed: `stat_changed`, `flag_changed`, `quests_unlocked`,
/// `time_context_changed`, then `quest_completed` as the last event. Each of the
/// first four appears only when there is something to report.
pub fn apply_quest_completed(state: &CharacterState, quest: &QuestNode, now_ms: i64) -> Transition {
    let consequence = &quest.consequence;
    let mut next = state.clone();
    let mut events = Vec::new();

    if !consequence.stat_deltas.is_empty() {
        next.stats = next.stats.with_deltas(&consequence.stat_deltas);
        events.push(GameEvent::StatChanged {
            deltas: consequence.stat_deltas,
        });
    }

    if !consequence.set_flags.is_empty() || !consequence.clear_flags.is_empty() {
        next.flags = next
            .flags
            .with_set(consequence.set_flags.iter().cloned())
            .with_cleared(&consequence.clear_flags);
        events.push(GameEvent::FlagChanged {
            flags_set: non_empty(&consequence.set_flags),
            flags_cleared: non_empty(&consequence.clear_flags),
        });
    }

    if !consequence.unlocks.is_empty() {
        events.push(GameEvent::QuestsUnlocked {
            quest_ids: consequence.unlocks.clone(),
        });
    }

    push_range_change(&mut events, state.time_context.range, TimeRange::Recent);
    next.time_context = TimeContext::acted_at(now_ms);

    events.push(GameEvent::QuestCompleted {
        quest_id: quest.id.clone(),
        quest_type: quest.quest_type,
    });

    Transition {
        state: next,
        events,
    }
}

fn push_range_change(events: &mut Vec<GameEvent>, previous: TimeRange, next: TimeRange) {
    if previous != next {
        events.push(GameEvent::TimeContextChanged {
            previous_range: previous,
            new_range: next,
        });
    }
}

fn non_empty(flags: &[String]) -> Option<Vec<String>> {
    if flags.is_empty() {
        None
    } else {
        Some(flags.to_vec())
    }
}

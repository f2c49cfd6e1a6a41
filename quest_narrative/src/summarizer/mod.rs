//! Event batch → one summary, picked by fixed priority.

mod templates;

use quest_rules::{CharacterState, EventKind, GameEvent, PartialStats, StatKey};

use crate::summary::NarrativeSummary;

/// Narrative priority of an event kind, lower wins. `None` means the kind is
/// never summarized on its own.
pub fn narrative_priority(kind: EventKind) -> Option<u8> {
    match kind {
        EventKind::QuestCompleted => Some(0),
        EventKind::QuestStarted => Some(1),
        EventKind::ReEntrySuggested => Some(2),
        EventKind::TimeContextChanged => Some(3),
        EventKind::StatChanged => Some(4),
        EventKind::FlagChanged => Some(5),
        EventKind::QuestsUnlocked => None,
    }
}

/// Summarize a batch of events for the player.
///
/// Picks the highest-priority event regardless of input order. Returns `None`
/// when there is nothing to say, which includes an empty batch.
pub fn summarize(events: &[GameEvent], state: &CharacterState) -> Option<NarrativeSummary> {
    let (_, event) = events
        .iter()
        .filter_map(|event| narrative_priority(event.kind()).map(|priority| (priority, event)))
        .min_by_key(|(priority, _)| *priority)?;

    tracing::trace!(kind = %event.kind(), events = events.len(), "summarizing event batch");

    let template = match event {
        GameEvent::QuestCompleted { quest_type, .. } => templates::quest_completed(*quest_type),
        GameEvent::QuestStarted { quest_type, .. } => templates::quest_started(*quest_type),
        GameEvent::ReEntrySuggested { current_range } => templates::re_entry_suggested(
            *current_range,
            state.time_context.last_meaningful_action_ms.is_some(),
        ),
        GameEvent::TimeContextChanged { new_range, .. } => {
            templates::time_context_changed(*new_range)
        }
        GameEvent::StatChanged { deltas } => templates::stat_changed(leading_increase(deltas)),
        GameEvent::FlagChanged { .. } => templates::flag_changed(),
        GameEvent::QuestsUnlocked { .. } => return None,
    };

    Some(template.render())
}

/// The stat with the largest positive delta. Ties go to the earlier key in
/// `StatKey::ALL`.
fn leading_increase(deltas: &PartialStats<i32>) -> Option<StatKey> {
    let mut lead: Option<(StatKey, i32)> = None;
    for (key, delta) in deltas.iter() {
        if delta > 0 && lead.map_or(true, |(_, best)| delta > best) {
            lead = Some((key, delta));
        }
    }
    lead.map(|(key, _)| key)
}

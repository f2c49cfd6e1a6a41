//! Availability gates and time-relevance ranking.

use crate::character::CharacterState;
use crate::quests::{FlagGate, QuestNode, StatGate};

/// True when the character passes both the stat gate and the flag gate.
///
/// Time relevance is not part of this check; it only affects ordering.
pub fn is_quest_available(state: &CharacterState, quest: &QuestNode) -> bool {
    let availability = &quest.availability;
    let stats_ok = availability
        .stats
        .as_ref()
        .map_or(true, |gate| passes_stat_gate(state, gate));
    let flags_ok = availability
        .flags
        .as_ref()
        .map_or(true, |gate| passes_flag_gate(state, gate));

    stats_ok && flags_ok
}

fn passes_stat_gate(state: &CharacterState, gate: &StatGate) -> bool {
    gate.minimum
        .iter()
        .all(|(key, minimum)| state.stats.get(key) >= minimum)
}

fn passes_flag_gate(state: &CharacterState, gate: &FlagGate) -> bool {
    gate.required.iter().all(|flag| state.has_flag(flag))
        && gate.blocked.iter().all(|flag| !state.has_flag(flag))
}

/// Keep the quests the character can take, preserving order.
pub fn filter_available_quests<'a>(
    state: &CharacterState,
    quests: &[&'a QuestNode],
) -> Vec<&'a QuestNode> {
    quests
        .iter()
        .copied()
        .filter(|quest| is_quest_available(state, quest))
        .collect()
}

/// Stable partition: quests preferring the current range first, the rest after.
///
/// Relative order inside each group is preserved. Quests without a preference
/// always land in the second group.
pub fn rank_quests<'a>(state: &CharacterState, quests: &[&'a QuestNode]) -> Vec<&'a QuestNode> {
    let range = state.time_context.range;
    let (preferred, rest): (Vec<&QuestNode>, Vec<&QuestNode>) = quests
        .iter()
        .copied()
        .partition(|quest| quest.availability.prefers(range));

    preferred.into_iter().chain(rest).collect()
}

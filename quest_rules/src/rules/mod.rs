//! Rules pipeline - decides which quests to surface.
//!
//! The pipeline runs in three stages:
//! 1. **Filter**: drop quests whose stat or flag gates the character does not meet
//! 2. **Rank**: move quests that prefer the current time range to the front
//! 3. **Select**: take a small, type-diverse set from the ranked list
//!
//! Scarcity of choice never comes from the clock: time only reorders.

mod availability;
mod selection;

pub use availability::*;
pub use selection::*;

use crate::character::CharacterState;
use crate::quests::QuestNode;

/// Filter, rank and select in one call. This is the entry point callers should use.
pub fn choose_quests<'a>(
    state: &CharacterState,
    quests: &[&'a QuestNode],
    max_choices: usize,
) -> Vec<&'a QuestNode> {
    let available = filter_available_quests(state, quests);
    let ranked = rank_quests(state, &available);
    select_quest_choices(&ranked, max_choices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Flags, StatKey};
    use crate::quests::{Consequence, QuestType};
    use crate::time::TimeRange;

    fn quest(id: &str, quest_type: QuestType) -> QuestNode {
        QuestNode::new(id, quest_type, "c", "a", "k")
            .with_consequence(Consequence::new().with_delta(quest_type.stat_key(), 1))
    }

    #[test]
    fn test_choose_composes_all_stages() {
        let mut state = CharacterState::new(0).with_flags(Flags::new().with_set(["locked_out"]));
        state.time_context.range = TimeRange::Gap;

        let quests = [
            quest("a1", QuestType::Agency),
            quest("a2", QuestType::Agency).with_preferred_ranges([TimeRange::Gap]),
            quest("c1", QuestType::Courage).with_blocked_flag("locked_out"),
            quest("c2", QuestType::Courage),
            quest("o1", QuestType::Order).with_minimum(StatKey::Order, 5),
            quest("o2", QuestType::Order).with_preferred_ranges([TimeRange::Gap]),
        ];
        let refs: Vec<&QuestNode> = quests.iter().collect();

        let chosen = choose_quests(&state, &refs, DEFAULT_MAX_CHOICES);
        let ids: Vec<_> = chosen.iter().map(|q| q.id.as_str()).collect();

        assert_eq!(ids, vec!["a2", "o2", "c2"]);
    }

    #[test]
    fn test_choose_with_nothing_available() {
        let quests = [quest("gated", QuestType::Order).with_minimum(StatKey::Order, 99)];
        let refs: Vec<&QuestNode> = quests.iter().collect();
        assert!(choose_quests(&CharacterState::new(0), &refs, 3).is_empty());
    }
}

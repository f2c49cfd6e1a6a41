//! Diversity-first selection over an already ranked list.

use std::collections::HashSet;

use crate::quests::{QuestNode, QuestType};

/// Number of quests surfaced when no other limit is configured.
pub const DEFAULT_MAX_CHOICES: usize = 3;

/// Pick at most `max_choices` quests from a ranked list.
///
/// Pass 1 walks the list in rank order and takes the first quest of each type not
/// yet picked. Pass 2 walks it again and fills any remaining slots in rank order,
/// allowing repeated types. Lists no longer than `max_choices` come back unchanged.
pub fn select_quest_choices<'a>(quests: &[&'a QuestNode], max_choices: usize) -> Vec<&'a QuestNode> {
    if quests.len() <= max_choices {
        return quests.to_vec();
    }

    let mut picked = vec![false; quests.len()];
    let mut seen_types: HashSet<QuestType> = HashSet::new();
    let mut selected = Vec::with_capacity(max_choices);

    for (position, quest) in quests.iter().enumerate() {
        if selected.len() >= max_choices {
            break;
        }
        if seen_types.insert(quest.quest_type) {
            picked[position] = true;
            selected.push(*quest);
        }
    }

    for (position, quest) in quests.iter().enumerate() {
        if selected.len() >= max_choices {
            break;
        }
        if !picked[position] {
            picked[position] = true;
            selected.push(*quest);
        }
    }

    selected
}

//! Load-time checks for quest definitions.

use std::collections::HashSet;

use super::{QuestId, QuestNode};
use crate::error::QuestValidationError;

/// Validate a whole catalog, reporting the first problem in catalog order.
///
/// Each quest is checked for a repeated id, then on its own, then for its unlock
/// targets, before moving on to the next one.
pub fn validate_quests(quests: &[QuestNode]) -> Result<(), QuestValidationError> {
    let known: HashSet<&QuestId> = quests.iter().map(|quest| &quest.id).collect();
    let mut seen: HashSet<&QuestId> = HashSet::with_capacity(quests.len());

    for quest in quests {
        if !seen.insert(&quest.id) {
            return Err(QuestValidationError::DuplicateId(quest.id.clone()));
        }

        validate_quest(quest)?;

        for target in &quest.consequence.unlocks {
            if *target == quest.id {
                return Err(QuestValidationError::SelfUnlock {
                    quest: quest.id.clone(),
                });
            }
            if !known.contains(target) {
                return Err(QuestValidationError::UnknownUnlock {
                    quest: quest.id.clone(),
                    target: target.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Checks that only need the quest itself.
pub fn validate_quest(quest: &QuestNode) -> Result<(), QuestValidationError> {
    let text_fields = [
        ("id", quest.id.as_str()),
        ("context", quest.context.as_str()),
        ("realWorldAction", quest.real_world_action.as_str()),
        ("constraint", quest.constraint.as_str()),
    ];
    for (field, value) in text_fields {
        if value.trim().is_empty() {
            return Err(QuestValidationError::EmptyField {
                quest: quest.id.clone(),
                field,
            });
        }
    }

    if quest.consequence.is_empty() {
        return Err(QuestValidationError::NoEffect {
            quest: quest.id.clone(),
        });
    }

    let consequence = &quest.consequence;
    if let Some(flag) = first_shared(&consequence.set_flags, &consequence.clear_flags) {
        return Err(QuestValidationError::ConflictingFlag {
            quest: quest.id.clone(),
            flag: flag.to_string(),
        });
    }

    if let Some(gate) = &quest.availability.flags {
        if let Some(flag) = first_shared(&gate.required, &gate.blocked) {
            return Err(QuestValidationError::ConflictingFlag {
                quest: quest.id.clone(),
                flag: flag.to_string(),
            });
        }
    }

    if let Some(relevance) = &quest.availability.relevance {
        if relevance.preferred_ranges.is_empty() {
            return Err(QuestValidationError::EmptyRelevance {
                quest: quest.id.clone(),
            });
        }
    }

    Ok(())
}

fn first_shared<'a>(left: &'a [String], right: &[String]) -> Option<&'a str> {
    left.iter()
        .find(|flag| right.contains(*flag))
        .map(String::as_str)
}

//! Outcome records emitted by transitions.
//!
//! Events carry only the data needed to describe what happened. They never
//! carry rendered text; turning them into words is the narrative layer's job.

use serde::{Deserialize, Serialize};

use crate::character::PartialStats;
use crate::quests::{QuestId, QuestType};
use crate::time::TimeRange;

/// Everything a transition can report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum GameEvent {
    /// The coarse time range moved.
    TimeContextChanged {
        previous_range: TimeRange,
        new_range: TimeRange,
    },

    /// The character just crossed from activity into a gap.
    ReEntrySuggested { current_range: TimeRange },

    /// Stats were adjusted. Carries the requested deltas, not the clamped result.
    StatChanged { deltas: PartialStats<i32> },

    /// Flags were set and/or cleared.
    FlagChanged {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        flags_set: Option<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        flags_cleared: Option<Vec<String>>,
    },

    /// A completed quest points at follow-up quests.
    QuestsUnlocked { quest_ids: Vec<QuestId> },

    QuestStarted {
        quest_id: QuestId,
        quest_type: QuestType,
    },

    /// Always the last event of a completion.
    QuestCompleted {
        quest_id: QuestId,
        quest_type: QuestType,
    },
}

/// Discriminant of [`GameEvent`], without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    TimeContextChanged,
    ReEntrySuggested,
    StatChanged,
    FlagChanged,
    QuestsUnlocked,
    QuestStarted,
    QuestCompleted,
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::TimeContextChanged { .. } => EventKind::TimeContextChanged,
            GameEvent::ReEntrySuggested { .. } => EventKind::ReEntrySuggested,
            GameEvent::StatChanged { .. } => EventKind::StatChanged,
            GameEvent::FlagChanged { .. } => EventKind::FlagChanged,
            GameEvent::QuestsUnlocked { .. } => EventKind::QuestsUnlocked,
            GameEvent::QuestStarted { .. } => EventKind::QuestStarted,
            GameEvent::QuestCompleted { .. } => EventKind::QuestCompleted,
        }
    }

    /// The quest this event is about, if any.
    pub fn quest_id(&self) -> Option<&QuestId> {
        match self {
            GameEvent::QuestStarted { quest_id, .. } | GameEvent::QuestCompleted { quest_id, .. } => {
                Some(quest_id)
            }
            GameEvent::TimeContextChanged { .. }
            | GameEvent::ReEntrySuggested { .. }
            | GameEvent::StatChanged { .. }
            | GameEvent::FlagChanged { .. }
            | GameEvent::QuestsUnlocked { .. } => None,
        }
    }
}

impl EventKind {
    /// Wire token for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::TimeContextChanged => "time_context_changed",
            EventKind::ReEntrySuggested => "re_entry_suggested",
            EventKind::StatChanged => "stat_changed",
            EventKind::FlagChanged => "flag_changed",
            EventKind::QuestsUnlocked => "quests_unlocked",
            EventKind::QuestStarted => "quest_started",
            EventKind::QuestCompleted => "quest_completed",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::StatKey;
    use serde_json::json;

    #[test]
    fn test_event_wire_shapes() {
        let event = GameEvent::TimeContextChanged {
            previous_range: TimeRange::Recent,
            new_range: TimeRange::LongGap,
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"type": "time_context_changed", "previousRange": "recent", "newRange": "long_gap"})
        );

        let event = GameEvent::QuestCompleted {
            quest_id: QuestId::new("walk"),
            quest_type: QuestType::Courage,
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"type": "quest_completed", "questId": "walk", "questType": "courage"})
        );

        let event = GameEvent::StatChanged {
            deltas: PartialStats::new().with(StatKey::Courage, -2),
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"type": "stat_changed", "deltas": {"courage": -2}})
        );
    }

    #[test]
    fn test_flag_changed_omits_empty_sides() {
        let event = GameEvent::FlagChanged {
            flags_set: Some(vec!["a".to_string()]),
            flags_cleared: None,
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value, json!({"type": "flag_changed", "flagsSet": ["a"]}));

        let back: GameEvent = serde_json::from_value(value).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_kind_matches_wire_tag() {
        let events = vec![
            GameEvent::ReEntrySuggested {
                current_range: TimeRange::Gap,
            },
            GameEvent::QuestsUnlocked {
                quest_ids: vec![QuestId::new("next")],
            },
            GameEvent::QuestStarted {
                quest_id: QuestId::new("q"),
                quest_type: QuestType::Order,
            },
        ];
        for event in events {
            let value = serde_json::to_value(&event).unwrap();
            assert_eq!(value["type"], event.kind().as_str());
        }
    }

    #[test]
    fn test_quest_id_accessor() {
        let started = GameEvent::QuestStarted {
            quest_id: QuestId::new("q"),
            quest_type: QuestType::Agency,
        };
        assert_eq!(started.quest_id(), Some(&QuestId::new("q")));
        assert_eq!(
            GameEvent::ReEntrySuggested {
                current_range: TimeRange::Gap
            }
            .quest_id(),
            None
        );
    }
}

//! Error types for loading configuration, catalogs and snapshots.

use thiserror::Error;

use crate::quests::QuestId;

/// Errors raised at the load and storage boundary.
///
/// Transitions, rules and engine operations never fail; only parsing
/// configuration, catalogs and snapshots can.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("config parse error: {0}")]
    Config(#[source] toml::de::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("quest catalog parse error: {0}")]
    CatalogParse(#[source] toml::de::Error),

    #[error("invalid quest: {0}")]
    Validation(#[from] QuestValidationError),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Quest authoring mistakes caught when a catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestValidationError {
    #[error("duplicate quest id: {0}")]
    DuplicateId(QuestId),

    #[error("quest {quest}: field `{field}` is blank")]
    EmptyField { quest: QuestId, field: &'static str },

    #[error("quest {quest}: completing it changes nothing")]
    NoEffect { quest: QuestId },

    #[error("quest {quest}: unlocks unknown quest {target}")]
    UnknownUnlock { quest: QuestId, target: QuestId },

    #[error("quest {quest}: unlocks itself")]
    SelfUnlock { quest: QuestId },

    #[error("quest {quest}: flag `{flag}` is used in contradictory ways")]
    ConflictingFlag { quest: QuestId, flag: String },

    #[error("quest {quest}: relevance block lists no ranges")]
    EmptyRelevance { quest: QuestId },
}

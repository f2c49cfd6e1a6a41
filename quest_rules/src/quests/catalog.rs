//! Quest catalog - lookup and stable enumeration of quest definitions.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::{validate_quests, QuestId, QuestNode};
use crate::error::RulesError;

/// Read access to the set of quests a player can be offered.
///
/// `list_all` must return the same order on every call for the lifetime of the
/// catalog; ranking and selection use that order to break ties.
pub trait QuestCatalog {
    /// Look up a quest by id.
    fn quest_by_id(&self, id: &QuestId) -> Option<&QuestNode>;

    /// All quests in catalog order.
    fn list_all(&self) -> Vec<&QuestNode>;
}

/// A validated, in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    quests: Vec<QuestNode>,
    index: HashMap<QuestId, usize>,
}

const STARTER_CATALOG: &str = include_str!("../../data/starter_quests.toml");

/// Document shape for TOML catalogs: a `[[quest]]` array of tables.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    #[serde(default)]
    quest: Vec<QuestNode>,
}

impl InMemoryCatalog {
    /// Build a catalog, rejecting any quest that fails validation.
    pub fn new(quests: Vec<QuestNode>) -> Result<Self, RulesError> {
        validate_quests(&quests)?;

        let index = quests
            .iter()
            .enumerate()
            .map(|(position, quest)| (quest.id.clone(), position))
            .collect();

        tracing::info!(quests = quests.len(), "quest catalog loaded");

        Ok(Self { quests, index })
    }

    /// Parse and validate a TOML catalog document.
    pub fn from_toml_str(source: &str) -> Result<Self, RulesError> {
        let document: CatalogDocument = toml::from_str(source).map_err(RulesError::CatalogParse)?;
        Self::new(document.quest)
    }

    /// The quests bundled with the crate.
    pub fn starter() -> Result<Self, RulesError> {
        Self::from_toml_str(STARTER_CATALOG)
    }

    /// Read, parse and validate a TOML catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Number of quests in the catalog.
    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    /// Borrow the quests in catalog order.
    pub fn quests(&self) -> &[QuestNode] {
        &self.quests
    }
}

impl QuestCatalog for InMemoryCatalog {
    fn quest_by_id(&self, id: &QuestId) -> Option<&QuestNode> {
        self.index
            .get(id)
            .and_then(|position| self.quests.get(*position))
    }

    fn list_all(&self) -> Vec<&QuestNode> {
        self.quests.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::StatKey;
    use crate::error::QuestValidationError;
    use crate::quests::QuestType;
    use crate::time::TimeRange;

    const CATALOG: &str = r#"
[[quest]]
id = "first-step"
type = "agency"
context = "Small choices add up."
realWorldAction = "Pick one thing you have been putting off and do the first two minutes of it."
constraint = "Two minutes. Stopping after that is fine."
consequence = { statDeltas = { agency = 1 }, setFlags = ["started_something"], unlocks = ["second-step"] }

[[quest]]
id = "second-step"
type = "agency"
context = "The thing you started is still there."
realWorldAction = "Give it another ten minutes."
constraint = "Ten minutes."
reflection = "What made it easier this time?"

[quest.consequence]
statDeltas = { agency = 2 }

[quest.availability]
flags = { required = ["started_something"] }
relevance = { preferredRanges = ["recent"] }
"#;

    #[test]
    fn test_parse_toml_catalog() {
        let catalog = InMemoryCatalog::from_toml_str(CATALOG).unwrap();
        assert_eq!(catalog.len(), 2);

        let first = catalog.quest_by_id(&QuestId::new("first-step")).unwrap();
        assert_eq!(first.quest_type, QuestType::Agency);
        assert_eq!(first.consequence.stat_deltas.get(StatKey::Agency), Some(1));
        assert_eq!(first.consequence.unlocks, vec![QuestId::new("second-step")]);

        let second = catalog.quest_by_id(&QuestId::new("second-step")).unwrap();
        assert!(second.availability.prefers(TimeRange::Recent));
        assert_eq!(
            second.reflection.as_deref(),
            Some("What made it easier this time?")
        );
    }

    #[test]
    fn test_list_all_is_stable_catalog_order() {
        let catalog = InMemoryCatalog::from_toml_str(CATALOG).unwrap();
        let ids: Vec<_> = catalog.list_all().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["first-step", "second-step"]);

        let again: Vec<_> = catalog.list_all().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, again);
    }

    #[test]
    fn test_unknown_id_is_none() {
        let catalog = InMemoryCatalog::from_toml_str(CATALOG).unwrap();
        assert!(catalog.quest_by_id(&QuestId::new("nope")).is_none());
    }

    #[test]
    fn test_unknown_stat_key_is_parse_error() {
        let source = r#"
[[quest]]
id = "x"
type = "order"
context = "c"
realWorldAction = "a"
constraint = "k"
consequence = { statDeltas = { strength = 1 } }
"#;
        assert!(matches!(
            InMemoryCatalog::from_toml_str(source),
            Err(RulesError::CatalogParse(_))
        ));
    }

    #[test]
    fn test_invalid_quest_is_validation_error() {
        let source = r#"
[[quest]]
id = "x"
type = "order"
context = "c"
realWorldAction = "a"
constraint = "k"
"#;
        assert!(matches!(
            InMemoryCatalog::from_toml_str(source),
            Err(RulesError::Validation(QuestValidationError::NoEffect { .. }))
        ));
    }

    #[test]
    fn test_starter_catalog_is_valid() {
        let catalog = InMemoryCatalog::starter().unwrap();
        assert_eq!(catalog.len(), 9);

        for quest_type in [QuestType::Agency, QuestType::Courage, QuestType::Order] {
            assert!(catalog.quests().iter().any(|q| q.quest_type == quest_type));
        }
    }

    #[test]
    fn test_load_from_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/starter_quests.toml");
        let catalog = InMemoryCatalog::load(path).unwrap();
        assert_eq!(catalog.quests(), InMemoryCatalog::starter().unwrap().quests());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = InMemoryCatalog::load("does/not/exist/quests.toml");
        assert!(matches!(result, Err(RulesError::Io(_))));
    }

    #[test]
    fn test_empty_document_is_empty_catalog() {
        let catalog = InMemoryCatalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.list_all().is_empty());
    }
}

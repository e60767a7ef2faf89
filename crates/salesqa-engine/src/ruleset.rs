//! Rule-set configuration.
//!
//! A rule set is a JSON document of the form `{ "rules": [ ... ] }`. It is
//! the serialized form of an engine: building it registers every rule in
//! file order, so duplicate IDs fail the same way programmatic
//! registration does.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use salesqa_model::EngineError;

use crate::engine::Engine;
use crate::rule::Rule;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Load a rule set from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open rule set: {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse rule set: {}", path.display()))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let ruleset = serde_json::from_reader(reader)?;
        Ok(ruleset)
    }

    /// Register every rule, in order, into a fresh engine.
    pub fn build(self) -> Result<Engine, EngineError> {
        let mut engine = Engine::new();
        for rule in self.rules {
            engine.register(rule)?;
        }
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleKind;

    #[test]
    fn builds_engine_in_file_order() {
        let json = r#"{
            "rules": [
                {"id": "R01", "description": "date format", "kind": "date_format", "column": "sale_date"},
                {"id": "R02", "description": "price range", "kind": "numeric_range", "column": "price", "min": 0.0}
            ]
        }"#;
        let ruleset = RuleSet::from_reader(json.as_bytes()).unwrap();
        let engine = ruleset.build().unwrap();
        assert_eq!(engine.rules().len(), 2);
        assert_eq!(engine.rules()[0].id, "R01");
        match &engine.rules()[0].kind {
            RuleKind::DateFormat { format, .. } => assert_eq!(format, "%Y-%m-%d"),
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn loads_from_a_file_on_disk() {
        let dir = std::env::temp_dir().join(format!(
            "salesqa-ruleset-test-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rules.json");
        std::fs::write(
            &path,
            r#"{"rules": [{"id": "R01", "description": "price present", "kind": "not_blank", "column": "price"}]}"#,
        )
        .unwrap();

        let ruleset = RuleSet::from_path(&path).unwrap();
        assert_eq!(ruleset.rules.len(), 1);
        assert_eq!(ruleset.rules[0].id, "R01");
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = RuleSet::from_path(Path::new("/nonexistent/rules.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/rules.json"));
    }

    #[test]
    fn duplicate_ids_in_file_fail_the_build() {
        let json = r#"{
            "rules": [
                {"id": "R01", "description": "a", "kind": "not_blank", "column": "price"},
                {"id": "R01", "description": "b", "kind": "not_blank", "column": "total"}
            ]
        }"#;
        let ruleset = RuleSet::from_reader(json.as_bytes()).unwrap();
        let err = ruleset.build().unwrap_err();
        assert_eq!(
            err,
            EngineError::DuplicateRule {
                id: "R01".to_string()
            }
        );
    }
}

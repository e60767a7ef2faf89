//! Rule definitions.
//!
//! A [`Rule`] pairs a stable identifier and description with a [`RuleKind`]
//! describing what to check. Rules are plain data and serde-serializable so
//! rule sets can live in JSON config files.

use serde::{Deserialize, Serialize};

/// How a check treats blank cells (null, empty, or whitespace-only).
///
/// The policy is explicit per rule: structural checks that assert presence
/// should use `Violation`, while shape checks that only constrain values
/// that exist should use `Ignore` and leave presence to a dedicated
/// not-blank rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlankPolicy {
    /// Blank cells are skipped.
    #[default]
    Ignore,
    /// Blank cells count as violations.
    Violation,
}

/// One registered check against the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Stable identifier, unique within an engine.
    pub id: String,
    /// Human-readable description, carried into the report.
    pub description: String,
    #[serde(flatten)]
    pub kind: RuleKind,
}

impl Rule {
    pub fn new(id: impl Into<String>, description: impl Into<String>, kind: RuleKind) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            kind,
        }
    }
}

/// The supported check kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleKind {
    /// Violation iff the cell is null or, for text, empty/whitespace.
    NotBlank { column: String },

    /// Normalizes the cell (currency symbol, thousands separators) and
    /// parses it; parse failures and blanks are violations, as is any
    /// parsed value outside `[min, max]`. Either bound may be absent.
    NumericRange {
        column: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        /// Additionally reject values with a fractional part.
        #[serde(default)]
        integers_only: bool,
    },

    /// Violation iff the cell value is not in `allowed`. Matching is exact
    /// and case-sensitive unless `normalize_case` uppercases both sides.
    OneOf {
        column: String,
        allowed: Vec<String>,
        #[serde(default)]
        normalize_case: bool,
        #[serde(default)]
        blank_policy: BlankPolicy,
    },

    /// Cross-column arithmetic consistency: `result` must equal
    /// `left * right` within `tolerance`. Rows where any of the three
    /// cells fails to parse are violations.
    ProductConsistency {
        result: String,
        left: String,
        right: String,
        #[serde(default = "default_tolerance")]
        tolerance: f64,
    },

    /// Regex check on the textual cell value. With `deny` set the rule
    /// flags rows that match (disallowed characters); without it the rule
    /// flags rows that do not match (required shape, e.g. an email).
    Pattern {
        column: String,
        pattern: String,
        #[serde(default)]
        deny: bool,
        #[serde(default)]
        blank_policy: BlankPolicy,
    },

    /// Uniqueness over a composite key. The first occurrence of a key is
    /// not counted; every later repeat is one violation.
    Unique {
        columns: Vec<String>,
        #[serde(default)]
        blank_policy: BlankPolicy,
    },

    /// The cell must parse as a date with the given chrono format string.
    DateFormat {
        column: String,
        #[serde(default = "default_date_format")]
        format: String,
        #[serde(default)]
        blank_policy: BlankPolicy,
    },
}

fn default_tolerance() -> f64 {
    1e-9
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_round_trips_through_json() {
        let rule = Rule::new(
            "R03",
            "price is a non-negative amount",
            RuleKind::NumericRange {
                column: "price".to_string(),
                min: Some(0.0),
                max: None,
                integers_only: false,
            },
        );
        let json = serde_json::to_string(&rule).expect("serialize rule");
        let round: Rule = serde_json::from_str(&json).expect("deserialize rule");
        assert_eq!(round, rule);
    }

    #[test]
    fn kind_tag_and_defaults_deserialize() {
        let json = r#"{
            "id": "R05",
            "description": "product name has no special characters",
            "kind": "pattern",
            "column": "product_name",
            "pattern": "[^a-zA-Z0-9\\s]",
            "deny": true
        }"#;
        let rule: Rule = serde_json::from_str(json).expect("deserialize rule");
        match rule.kind {
            RuleKind::Pattern {
                deny, blank_policy, ..
            } => {
                assert!(deny);
                assert_eq!(blank_policy, BlankPolicy::Ignore);
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn product_consistency_defaults_tolerance() {
        let json = r#"{
            "id": "R12",
            "description": "total equals price times quantity",
            "kind": "product_consistency",
            "result": "total",
            "left": "price",
            "right": "quantity"
        }"#;
        let rule: Rule = serde_json::from_str(json).expect("deserialize rule");
        match rule.kind {
            RuleKind::ProductConsistency { tolerance, .. } => assert_eq!(tolerance, 1e-9),
            other => panic!("unexpected kind: {other:?}"),
        }
    }
}

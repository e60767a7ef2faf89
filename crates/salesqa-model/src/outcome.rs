use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The result of evaluating one rule once.
///
/// `violations` is `None` only when the rule itself could not be evaluated
/// (missing column, bad pattern). Whenever it is `Some(n)`, the invariant
/// `passed == (n == 0)` holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub passed: bool,
    pub violations: Option<u64>,
    pub message: String,
    /// Zero-based indices of the offending rows, in row order.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub offending_rows: BTreeSet<usize>,
}

impl Outcome {
    /// Outcome for a rule that was evaluated against every row.
    pub fn evaluated(
        violations: u64,
        offending_rows: BTreeSet<usize>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            passed: violations == 0,
            violations: Some(violations),
            message: message.into(),
            offending_rows,
        }
    }

    /// Outcome for a rule whose evaluation itself failed.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            violations: None,
            message: message.into(),
            offending_rows: BTreeSet::new(),
        }
    }
}

/// One report entry: a rule identity plus its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    pub rule_id: String,
    pub description: String,
    pub outcome: Outcome,
}

/// The ordered collection of outcomes for one validation run.
///
/// Entries appear in rule registration order and the report is never
/// modified after `Engine::run` returns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub results: Vec<RuleResult>,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.results.iter().all(|result| result.outcome.passed)
    }

    pub fn failed_count(&self) -> usize {
        self.results
            .iter()
            .filter(|result| !result.outcome.passed)
            .count()
    }

    pub fn total_violations(&self) -> u64 {
        self.results
            .iter()
            .filter_map(|result| result.outcome.violations)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}

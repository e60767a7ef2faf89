//! The validation engine.
//!
//! Rules are registered in order and evaluated in that order against a
//! read-only frame. A rule that cannot be evaluated (missing column, bad
//! pattern) produces a failed outcome with the error message; it never
//! aborts the run, so the report always carries one outcome per rule.

use polars::prelude::DataFrame;

use std::collections::BTreeSet;

use salesqa_model::{ColumnLookup, EngineError, Outcome, Report, RuleError, RuleResult};

use crate::checks;
use crate::checks::Evaluation;
use crate::rule::{Rule, RuleKind};

/// Ordered rule list with unique IDs. Stateless across runs: `run` borrows
/// the engine immutably and every run is independent.
#[derive(Debug, Default)]
pub struct Engine {
    rules: Vec<Rule>,
    ids: BTreeSet<String>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule to the end of the evaluation order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateRule`] when the ID is already
    /// registered; the earlier registration stays intact.
    pub fn register(&mut self, rule: Rule) -> Result<(), EngineError> {
        if !self.ids.insert(rule.id.clone()) {
            return Err(EngineError::DuplicateRule { id: rule.id });
        }
        self.rules.push(rule);
        Ok(())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluate every registered rule against the frame, in registration
    /// order. Deterministic: the same frame always yields the same report.
    pub fn run(&self, df: &DataFrame) -> Report {
        let lookup = ColumnLookup::from_frame(df);
        let results = self
            .rules
            .iter()
            .map(|rule| RuleResult {
                rule_id: rule.id.clone(),
                description: rule.description.clone(),
                outcome: match evaluate(rule, df, &lookup) {
                    Ok(eval) => outcome_from_evaluation(eval),
                    Err(error) => Outcome::failed(error.to_string()),
                },
            })
            .collect();
        Report { results }
    }
}

fn evaluate(rule: &Rule, df: &DataFrame, lookup: &ColumnLookup) -> Result<Evaluation, RuleError> {
    match &rule.kind {
        RuleKind::NotBlank { column } => checks::not_blank::check(df, lookup, column),
        RuleKind::NumericRange {
            column,
            min,
            max,
            integers_only,
        } => checks::range::check(df, lookup, column, *min, *max, *integers_only),
        RuleKind::OneOf {
            column,
            allowed,
            normalize_case,
            blank_policy,
        } => checks::membership::check(df, lookup, column, allowed, *normalize_case, *blank_policy),
        RuleKind::ProductConsistency {
            result,
            left,
            right,
            tolerance,
        } => checks::arithmetic::check(df, lookup, result, left, right, *tolerance),
        RuleKind::Pattern {
            column,
            pattern,
            deny,
            blank_policy,
        } => checks::pattern::check(df, lookup, column, pattern, *deny, *blank_policy),
        RuleKind::Unique {
            columns,
            blank_policy,
        } => checks::unique::check(df, lookup, columns, *blank_policy),
        RuleKind::DateFormat {
            column,
            format,
            blank_policy,
        } => checks::dates::check(df, lookup, column, format, *blank_policy),
    }
}

fn outcome_from_evaluation(eval: Evaluation) -> Outcome {
    if eval.violations == 0 {
        return Outcome::evaluated(0, BTreeSet::new(), "no violations");
    }
    let mut message = format!("{} violation(s)", eval.violations);
    if !eval.examples.is_empty() {
        message.push_str(&format!("; values: {}", eval.examples.join(", ")));
    }
    Outcome::evaluated(eval.violations, eval.offending_rows, message)
}

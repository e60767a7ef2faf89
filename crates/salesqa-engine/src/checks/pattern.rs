//! Regex pattern check.
//!
//! `deny` flips the polarity: a deny rule flags cells that match the
//! pattern (disallowed characters), a plain rule flags cells that do not
//! (required shape such as an email address). Blank handling is explicit
//! per rule. An unparseable pattern is an evaluation error, captured by the
//! engine as that rule's failed outcome.

use polars::prelude::{AnyValue, DataFrame};
use regex::Regex;

use salesqa_model::{ColumnLookup, RuleError, any_to_string, is_blank};

use crate::rule::BlankPolicy;

use super::{Evaluation, resolve_column};

pub(crate) fn check(
    df: &DataFrame,
    lookup: &ColumnLookup,
    column: &str,
    pattern: &str,
    deny: bool,
    blank_policy: BlankPolicy,
) -> Result<Evaluation, RuleError> {
    let series = resolve_column(df, lookup, column)?;
    let regex = Regex::new(pattern).map_err(|error| RuleError::InvalidPattern {
        pattern: pattern.to_string(),
        message: error.to_string(),
    })?;

    let mut eval = Evaluation::default();
    for idx in 0..df.height() {
        let value = series.get(idx).unwrap_or(AnyValue::Null);
        if is_blank(&value) {
            if blank_policy == BlankPolicy::Violation {
                eval.record(idx);
            }
            continue;
        }
        let text = any_to_string(value);
        let trimmed = text.trim();
        if regex.is_match(trimmed) == deny {
            eval.record_with_example(idx, trimmed);
        }
    }
    Ok(eval)
}

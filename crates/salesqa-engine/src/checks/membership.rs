//! Set-membership check against an externally supplied allowed-set.
//!
//! Matching is exact and case-sensitive. Case normalization is an explicit
//! opt-in pre-step that uppercases both the allowed-set and the cell.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, DataFrame};

use salesqa_model::{ColumnLookup, RuleError, any_to_string, is_blank};

use crate::rule::BlankPolicy;

use super::{Evaluation, resolve_column};

pub(crate) fn check(
    df: &DataFrame,
    lookup: &ColumnLookup,
    column: &str,
    allowed: &[String],
    normalize_case: bool,
    blank_policy: BlankPolicy,
) -> Result<Evaluation, RuleError> {
    let series = resolve_column(df, lookup, column)?;
    let allowed_set: BTreeSet<String> = allowed
        .iter()
        .map(|value| {
            if normalize_case {
                value.to_uppercase()
            } else {
                value.clone()
            }
        })
        .collect();

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
        let key = if normalize_case {
            trimmed.to_uppercase()
        } else {
            trimmed.to_string()
        };
        if !allowed_set.contains(&key) {
            eval.record_with_example(idx, trimmed);
        }
    }
    Ok(eval)
}

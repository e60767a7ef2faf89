//! Cross-column arithmetic consistency: `result == left * right` within an
//! explicit tolerance. A row where any of the three cells fails to parse is
//! a violation; negativity is deliberately not checked here, that belongs
//! to a range rule.

use polars::prelude::{AnyValue, DataFrame};

use salesqa_model::{ColumnLookup, RuleError, any_to_f64};

use super::{Evaluation, resolve_column};

pub(crate) fn check(
    df: &DataFrame,
    lookup: &ColumnLookup,
    result: &str,
    left: &str,
    right: &str,
    tolerance: f64,
) -> Result<Evaluation, RuleError> {
    let result_series = resolve_column(df, lookup, result)?;
    let left_series = resolve_column(df, lookup, left)?;
    let right_series = resolve_column(df, lookup, right)?;

    let mut eval = Evaluation::default();
    for idx in 0..df.height() {
        let actual = any_to_f64(&result_series.get(idx).unwrap_or(AnyValue::Null));
        let lhs = any_to_f64(&left_series.get(idx).unwrap_or(AnyValue::Null));
        let rhs = any_to_f64(&right_series.get(idx).unwrap_or(AnyValue::Null));
        match (actual, lhs, rhs) {
            (Some(actual), Some(lhs), Some(rhs)) => {
                if (actual - lhs * rhs).abs() > tolerance {
                    eval.record(idx);
                }
            }
            _ => eval.record(idx),
        }
    }
    Ok(eval)
}

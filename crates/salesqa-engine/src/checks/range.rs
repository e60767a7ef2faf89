//! Numeric-range check.
//!
//! Cells are normalized (currency symbol, thousands separators) and parsed
//! before comparison. Blank and malformed cells are violations: a range
//! rule asserts that a parseable value exists.

use polars::prelude::{AnyValue, DataFrame};

use salesqa_model::{ColumnLookup, RuleError, any_to_f64, any_to_string};

use super::{Evaluation, resolve_column};

pub(crate) fn check(
    df: &DataFrame,
    lookup: &ColumnLookup,
    column: &str,
    min: Option<f64>,
    max: Option<f64>,
    integers_only: bool,
) -> Result<Evaluation, RuleError> {
    let series = resolve_column(df, lookup, column)?;
    let mut eval = Evaluation::default();
    for idx in 0..df.height() {
        let value = series.get(idx).unwrap_or(AnyValue::Null);
        let Some(parsed) = any_to_f64(&value) else {
            eval.record_with_example(idx, any_to_string(value).trim());
            continue;
        };
        let below = min.is_some_and(|bound| parsed < bound);
        let above = max.is_some_and(|bound| parsed > bound);
        let fractional = integers_only && parsed.fract() != 0.0;
        if below || above || fractional {
            eval.record_with_example(idx, any_to_string(value).trim());
        }
    }
    Ok(eval)
}

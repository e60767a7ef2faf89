//! Null/empty check: violation iff the cell is null or, for text, the
//! empty/whitespace string.

use polars::prelude::{AnyValue, DataFrame};

use salesqa_model::{ColumnLookup, RuleError, is_blank};

use super::{Evaluation, resolve_column};

pub(crate) fn check(
    df: &DataFrame,
    lookup: &ColumnLookup,
    column: &str,
) -> Result<Evaluation, RuleError> {
    let series = resolve_column(df, lookup, column)?;
    let mut eval = Evaluation::default();
    for idx in 0..df.height() {
        let value = series.get(idx).unwrap_or(AnyValue::Null);
        if is_blank(&value) {
            eval.record(idx);
        }
    }
    Ok(eval)
}

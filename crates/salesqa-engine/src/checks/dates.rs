//! Date-format check: the cell must parse as a calendar date with the
//! rule's chrono format string.

use chrono::NaiveDate;
use polars::prelude::{AnyValue, DataFrame};

use salesqa_model::{ColumnLookup, RuleError, any_to_string, is_blank};

use crate::rule::BlankPolicy;

use super::{Evaluation, resolve_column};

pub(crate) fn check(
    df: &DataFrame,
    lookup: &ColumnLookup,
    column: &str,
    format: &str,
    blank_policy: BlankPolicy,
) -> Result<Evaluation, RuleError> {
    let series = resolve_column(df, lookup, column)?;
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
        if NaiveDate::parse_from_str(trimmed, format).is_err() {
            eval.record_with_example(idx, trimmed);
        }
    }
    Ok(eval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;
    use std::collections::BTreeSet;

    #[test]
    fn iso_dates_pass_and_other_shapes_fail() {
        let frame =
            df!("sale_date" => ["2024-10-27", "27/10/2024", "2024-13-01", "not a date"]).unwrap();
        let lookup = ColumnLookup::from_frame(&frame);
        let eval = check(&frame, &lookup, "sale_date", "%Y-%m-%d", BlankPolicy::Violation).unwrap();
        assert_eq!(eval.violations, 3);
        assert_eq!(eval.offending_rows, BTreeSet::from([1, 2, 3]));
    }

    #[test]
    fn blank_dates_follow_policy() {
        let frame = df!("sale_date" => ["2024-10-27", ""]).unwrap();
        let lookup = ColumnLookup::from_frame(&frame);
        let eval = check(&frame, &lookup, "sale_date", "%Y-%m-%d", BlankPolicy::Ignore).unwrap();
        assert_eq!(eval.violations, 0);
    }
}

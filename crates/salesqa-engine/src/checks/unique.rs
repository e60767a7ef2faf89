//! Uniqueness check over a composite key.
//!
//! Convention: the first occurrence of a key is free; every later repeat
//! counts as one violation. A key whose components are all blank follows
//! the rule's blank policy instead of participating in dedup.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, Column, DataFrame};

use salesqa_model::{ColumnLookup, RuleError, any_to_string};

use crate::rule::BlankPolicy;

use super::{Evaluation, resolve_column};

pub(crate) fn check(
    df: &DataFrame,
    lookup: &ColumnLookup,
    columns: &[String],
    blank_policy: BlankPolicy,
) -> Result<Evaluation, RuleError> {
    let series: Vec<&Column> = columns
        .iter()
        .map(|column| resolve_column(df, lookup, column))
        .collect::<Result<_, _>>()?;

    let mut seen: BTreeSet<Vec<String>> = BTreeSet::new();
    let mut eval = Evaluation::default();
    for idx in 0..df.height() {
        let key: Vec<String> = series
            .iter()
            .map(|column| {
                any_to_string(column.get(idx).unwrap_or(AnyValue::Null))
                    .trim()
                    .to_string()
            })
            .collect();
        if key.iter().all(String::is_empty) {
            if blank_policy == BlankPolicy::Violation {
                eval.record(idx);
            }
            continue;
        }
        if !seen.insert(key.clone()) {
            eval.record_with_example(idx, &key.join("|"));
        }
    }
    Ok(eval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;

    #[test]
    fn counts_repeats_beyond_first_occurrence() {
        let frame = df!("id" => ["A1", "A1", "B2", "A1"]).unwrap();
        let lookup = ColumnLookup::from_frame(&frame);
        let eval = check(
            &frame,
            &lookup,
            &["id".to_string()],
            BlankPolicy::Ignore,
        )
        .unwrap();
        assert_eq!(eval.violations, 2);
        assert_eq!(eval.offending_rows, BTreeSet::from([1, 3]));
    }

    #[test]
    fn composite_keys_only_collide_on_every_component() {
        let frame = df!(
            "customer_id" => ["1", "1", "2"],
            "sale_date" => ["2024-01-01", "2024-01-02", "2024-01-01"],
        )
        .unwrap();
        let lookup = ColumnLookup::from_frame(&frame);
        let eval = check(
            &frame,
            &lookup,
            &["customer_id".to_string(), "sale_date".to_string()],
            BlankPolicy::Ignore,
        )
        .unwrap();
        assert_eq!(eval.violations, 0);
    }

    #[test]
    fn blank_keys_follow_policy_instead_of_colliding() {
        let frame = df!("id" => ["", "", "A1"]).unwrap();
        let lookup = ColumnLookup::from_frame(&frame);

        let ignored = check(&frame, &lookup, &["id".to_string()], BlankPolicy::Ignore).unwrap();
        assert_eq!(ignored.violations, 0);

        let strict = check(&frame, &lookup, &["id".to_string()], BlankPolicy::Violation).unwrap();
        assert_eq!(strict.violations, 2);
    }
}

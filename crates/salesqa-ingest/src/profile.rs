//! Column profiling: a quick shape-of-the-data overview (blank counts,
//! distinct values) used by the CLI before anyone writes rules.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, DataFrame};
use serde::Serialize;

use salesqa_model::{any_to_string, is_blank};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub non_blank: u64,
    pub blank: u64,
    pub distinct: u64,
}

/// Profile every column of the frame, in column order.
pub fn profile(df: &DataFrame) -> Vec<ColumnProfile> {
    df.get_columns()
        .iter()
        .map(|column| {
            let mut non_blank = 0u64;
            let mut blank = 0u64;
            let mut distinct = BTreeSet::new();
            for idx in 0..df.height() {
                let value = column.get(idx).unwrap_or(AnyValue::Null);
                if is_blank(&value) {
                    blank += 1;
                } else {
                    non_blank += 1;
                    distinct.insert(any_to_string(value).trim().to_string());
                }
            }
            ColumnProfile {
                name: column.name().to_string(),
                non_blank,
                blank,
                distinct: distinct.len() as u64,
            }
        })
        .collect()
}

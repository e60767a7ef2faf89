//! Check implementations, one module per rule kind.
//!
//! Every check is a pure scan over the read-only frame: it resolves its
//! column(s), walks the rows, and reports a violation count plus the
//! offending row indices. Checks return `Err` only when they cannot be
//! evaluated at all (missing column, bad pattern); malformed cell values
//! are violations, never errors.

pub(crate) mod arithmetic;
pub(crate) mod dates;
pub(crate) mod membership;
pub(crate) mod not_blank;
pub(crate) mod pattern;
pub(crate) mod range;
pub(crate) mod unique;

use std::collections::BTreeSet;

use polars::prelude::{Column, DataFrame};

use salesqa_model::{ColumnLookup, RuleError};

/// Maximum number of offending values echoed into the outcome message.
pub(crate) const MAX_EXAMPLES: usize = 5;

/// What a check observed: the violation count, the offending rows, and a
/// few example values for the message.
#[derive(Debug, Default)]
pub(crate) struct Evaluation {
    pub violations: u64,
    pub offending_rows: BTreeSet<usize>,
    pub examples: Vec<String>,
}

impl Evaluation {
    pub(crate) fn record(&mut self, row: usize) {
        self.violations += 1;
        self.offending_rows.insert(row);
    }

    pub(crate) fn record_with_example(&mut self, row: usize, value: &str) {
        self.record(row);
        if self.examples.len() < MAX_EXAMPLES && !self.examples.contains(&value.to_string()) {
            self.examples.push(value.to_string());
        }
    }
}

/// Resolve a rule's column reference against the frame, case-insensitively.
pub(crate) fn resolve_column<'a>(
    df: &'a DataFrame,
    lookup: &ColumnLookup,
    column: &str,
) -> Result<&'a Column, RuleError> {
    let name = lookup.get(column).ok_or_else(|| RuleError::ColumnMissing {
        column: column.to_string(),
    })?;
    df.column(name).map_err(|_| RuleError::ColumnMissing {
        column: column.to_string(),
    })
}

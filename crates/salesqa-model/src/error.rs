use thiserror::Error;

/// Errors raised while building an engine. These propagate to the caller;
/// evaluation-time failures are captured per rule instead (see [`RuleError`]).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("duplicate rule id: {id}")]
    DuplicateRule { id: String },
}

/// Failures raised while evaluating a single rule.
///
/// A `RuleError` never aborts a run: the engine converts it into a failed
/// outcome for the offending rule and continues with the remaining rules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("column not found: {column}")]
    ColumnMissing { column: String },
    #[error("invalid pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },
}

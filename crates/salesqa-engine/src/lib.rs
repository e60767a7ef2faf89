//! Rule-based data-quality validation over tabular data.
//!
//! The engine takes an in-memory `polars::DataFrame` and an ordered list of
//! named rules, evaluates every rule against the frame, and produces a
//! [`salesqa_model::Report`] with one outcome per rule. Rules are pure
//! projections over the read-only frame; a rule that cannot be evaluated
//! fails individually without aborting the run.

mod checks;
mod engine;
mod rule;
mod ruleset;

pub use engine::Engine;
pub use rule::{BlankPolicy, Rule, RuleKind};
pub use ruleset::RuleSet;

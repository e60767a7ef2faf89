pub mod error;
pub mod lookup;
pub mod outcome;
pub mod value;

pub use error::{EngineError, RuleError};
pub use lookup::ColumnLookup;
pub use outcome::{Outcome, Report, RuleResult};
pub use value::{any_to_f64, any_to_string, format_numeric, is_blank, parse_number};

//! Output sinks for validation reports.
//!
//! The engine hands over an immutable [`salesqa_model::Report`]; this crate
//! persists it. Sinks never re-interpret outcomes, they only format them.

pub mod csv_export;
pub mod json;

pub use csv_export::write_report_csv;
pub use json::{ReportPayload, write_report_json};

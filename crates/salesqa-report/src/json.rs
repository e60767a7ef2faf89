//! JSON report sink: a versioned envelope around the run's results.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use salesqa_model::{Report, RuleResult};

const REPORT_SCHEMA: &str = "salesqa.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct ReportPayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    /// Identifier of the validated dataset (usually the input path).
    pub source: &'a str,
    pub rules_evaluated: usize,
    pub rules_failed: usize,
    pub total_violations: u64,
    pub results: &'a [RuleResult],
}

impl<'a> ReportPayload<'a> {
    pub fn new(source: &'a str, report: &'a Report) -> Self {
        Self {
            schema: REPORT_SCHEMA,
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            source,
            rules_evaluated: report.len(),
            rules_failed: report.failed_count(),
            total_violations: report.total_violations(),
            results: &report.results,
        }
    }
}

/// Write `validation_report.json` into `output_dir`, creating it if needed.
pub fn write_report_json(output_dir: &Path, source: &str, report: &Report) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output dir: {}", output_dir.display()))?;
    let output_path = output_dir.join("validation_report.json");
    let payload = ReportPayload::new(source, report);
    let json = serde_json::to_string_pretty(&payload).context("failed to serialize report")?;
    std::fs::write(&output_path, format!("{json}\n"))
        .with_context(|| format!("failed to write report: {}", output_path.display()))?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use salesqa_model::Outcome;
    use std::collections::BTreeSet;

    fn sample_report() -> Report {
        Report {
            results: vec![RuleResult {
                rule_id: "R01".to_string(),
                description: "price is non-negative".to_string(),
                outcome: Outcome::evaluated(1, BTreeSet::from([4]), "1 violation(s)"),
            }],
        }
    }

    #[test]
    fn writes_versioned_envelope() {
        let dir = std::env::temp_dir().join(format!(
            "salesqa-report-json-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let path = write_report_json(&dir, "ventas.csv", &sample_report()).unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["schema"], "salesqa.validation-report");
        assert_eq!(value["schema_version"], 1);
        assert_eq!(value["source"], "ventas.csv");
        assert_eq!(value["rules_failed"], 1);
        assert_eq!(value["results"][0]["rule_id"], "R01");
        assert_eq!(value["results"][0]["outcome"]["offending_rows"][0], 4);
    }
}

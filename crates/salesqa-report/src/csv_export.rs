//! CSV report sink: one row per rule, spreadsheet-friendly.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::WriterBuilder;

use salesqa_model::Report;

/// Write `validation_report.csv` into `output_dir`, creating it if needed.
pub fn write_report_csv(output_dir: &Path, report: &Report) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output dir: {}", output_dir.display()))?;
    let output_path = output_dir.join("validation_report.csv");

    let mut writer = WriterBuilder::new()
        .from_path(&output_path)
        .with_context(|| format!("failed to create report: {}", output_path.display()))?;
    writer.write_record(["rule_id", "description", "result", "violations", "message"])?;
    for result in &report.results {
        let outcome = &result.outcome;
        let violations = outcome
            .violations
            .map(|count| count.to_string())
            .unwrap_or_default();
        writer.write_record([
            result.rule_id.as_str(),
            result.description.as_str(),
            if outcome.passed { "Passed" } else { "Failed" },
            violations.as_str(),
            outcome.message.as_str(),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write report: {}", output_path.display()))?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use salesqa_model::{Outcome, RuleResult};
    use std::collections::BTreeSet;

    #[test]
    fn one_row_per_rule_with_header() {
        let report = Report {
            results: vec![
                RuleResult {
                    rule_id: "R01".to_string(),
                    description: "sale date is ISO formatted".to_string(),
                    outcome: Outcome::evaluated(0, BTreeSet::new(), "no violations"),
                },
                RuleResult {
                    rule_id: "R02".to_string(),
                    description: "total matches price * quantity".to_string(),
                    outcome: Outcome::failed("column not found: total"),
                },
            ],
        };

        let dir = std::env::temp_dir().join(format!(
            "salesqa-report-csv-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let path = write_report_csv(&dir, &report).unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "rule_id,description,result,violations,message");
        assert!(lines[1].starts_with("R01,"));
        assert!(lines[1].contains("Passed"));
        assert!(lines[2].contains("Failed"));
        // Evaluation failures leave the violations cell empty.
        assert!(lines[2].contains(",Failed,,"));
    }
}

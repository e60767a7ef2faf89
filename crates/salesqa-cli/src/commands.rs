use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use salesqa_engine::RuleSet;
use salesqa_ingest::{ColumnProfile, profile, read_dataset};
use salesqa_model::Report;
use salesqa_report::{write_report_csv, write_report_json};

use crate::cli::{CheckArgs, ProfileArgs, ReportFormatArg};
use crate::rules::default_sales_ruleset;

pub struct CheckResult {
    pub source: String,
    pub rows: usize,
    pub report: Report,
    pub json_path: Option<PathBuf>,
    pub csv_path: Option<PathBuf>,
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let df = read_dataset(&args.input)?;
    info!(
        rows = df.height(),
        columns = df.width(),
        path = %args.input.display(),
        "dataset loaded"
    );

    let ruleset = match &args.rules {
        Some(path) => RuleSet::from_path(path)?,
        None => default_sales_ruleset(),
    };
    let engine = ruleset
        .build()
        .context("failed to build validation engine")?;
    debug!(rules = engine.rules().len(), "engine built");

    let report = engine.run(&df);
    for result in &report.results {
        if result.outcome.violations.is_none() {
            warn!(
                rule = %result.rule_id,
                message = %result.outcome.message,
                "rule could not be evaluated"
            );
        }
    }
    info!(
        rules = report.len(),
        failed = report.failed_count(),
        violations = report.total_violations(),
        "validation finished"
    );

    let source = args.input.display().to_string();
    let mut json_path = None;
    let mut csv_path = None;
    if args.report != ReportFormatArg::None {
        let output_dir = output_dir(args);
        if matches!(args.report, ReportFormatArg::Json | ReportFormatArg::Both) {
            json_path = Some(write_report_json(&output_dir, &source, &report)?);
        }
        if matches!(args.report, ReportFormatArg::Csv | ReportFormatArg::Both) {
            csv_path = Some(write_report_csv(&output_dir, &report)?);
        }
    }

    Ok(CheckResult {
        source,
        rows: df.height(),
        report,
        json_path,
        csv_path,
    })
}

pub struct ProfileResult {
    pub source: String,
    pub rows: usize,
    pub columns: Vec<ColumnProfile>,
}

pub fn run_profile(args: &ProfileArgs) -> Result<ProfileResult> {
    let df = read_dataset(&args.input)?;
    info!(
        rows = df.height(),
        columns = df.width(),
        path = %args.input.display(),
        "dataset loaded"
    );
    Ok(ProfileResult {
        source: args.input.display().to_string(),
        rows: df.height(),
        columns: profile(&df),
    })
}

fn output_dir(args: &CheckArgs) -> PathBuf {
    match &args.output_dir {
        Some(dir) => dir.clone(),
        None => args
            .input
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .join("output"),
    }
}

//! End-to-end engine scenarios over small sales frames.

use polars::prelude::df;

use salesqa_engine::{BlankPolicy, Engine, Rule, RuleKind, RuleSet};

fn sales_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "R01",
            "price is a non-negative amount",
            RuleKind::NumericRange {
                column: "price".to_string(),
                min: Some(0.0),
                max: None,
                integers_only: false,
            },
        ),
        Rule::new(
            "R02",
            "total equals price times quantity",
            RuleKind::ProductConsistency {
                result: "total".to_string(),
                left: "price".to_string(),
                right: "quantity".to_string(),
                tolerance: 1e-9,
            },
        ),
    ]
}

#[test]
fn negativity_and_inconsistency_are_independent_checks() {
    // A negative price with an arithmetically consistent total fails the
    // range rule and passes the consistency rule.
    let frame = df!(
        "price" => ["$-5.00"],
        "quantity" => ["2"],
        "total" => ["-10.00"],
    )
    .unwrap();

    let engine = RuleSet::new(sales_rules()).build().unwrap();
    let report = engine.run(&frame);

    assert_eq!(report.results[0].rule_id, "R01");
    assert_eq!(report.results[0].outcome.violations, Some(1));
    assert_eq!(report.results[1].rule_id, "R02");
    assert_eq!(report.results[1].outcome.violations, Some(0));
    assert!(report.results[1].outcome.passed);
}

#[test]
fn uniqueness_counts_repeats_beyond_first_occurrence() {
    let frame = df!("id" => ["A1", "A1", "B2"]).unwrap();
    let mut engine = Engine::new();
    engine
        .register(Rule::new(
            "R01",
            "id is unique",
            RuleKind::Unique {
                columns: vec!["id".to_string()],
                blank_policy: BlankPolicy::Ignore,
            },
        ))
        .unwrap();

    let report = engine.run(&frame);
    assert_eq!(report.results[0].outcome.violations, Some(1));
    assert_eq!(
        report.results[0].outcome.offending_rows,
        std::collections::BTreeSet::from([1])
    );
}

#[test]
fn missing_column_fails_one_rule_and_run_completes() {
    let frame = df!("price" => ["10.00", "abc"]).unwrap();
    let mut engine = Engine::new();
    engine
        .register(Rule::new(
            "R01",
            "category is populated",
            RuleKind::NotBlank {
                column: "category".to_string(),
            },
        ))
        .unwrap();
    engine
        .register(Rule::new(
            "R02",
            "price parses as a number",
            RuleKind::NumericRange {
                column: "price".to_string(),
                min: None,
                max: None,
                integers_only: false,
            },
        ))
        .unwrap();

    let report = engine.run(&frame);
    assert_eq!(report.len(), 2);

    let missing = &report.results[0].outcome;
    assert!(!missing.passed);
    assert_eq!(missing.violations, None);
    assert!(missing.message.contains("column not found: category"));

    let parsed = &report.results[1].outcome;
    assert_eq!(parsed.violations, Some(1));
}

#[test]
fn repeated_runs_yield_identical_reports() {
    let frame = df!(
        "price" => ["10.00", "", "$3.50"],
        "quantity" => ["1", "2", "x"],
        "total" => ["10.00", "5.00", "7.00"],
    )
    .unwrap();
    let engine = RuleSet::new(sales_rules()).build().unwrap();

    let first = engine.run(&frame);
    let second = engine.run(&frame);
    assert_eq!(first, second);
}

#[test]
fn column_resolution_is_case_insensitive() {
    let frame = df!("PRICE" => ["-1"]).unwrap();
    let engine = RuleSet::new(sales_rules()[..1].to_vec()).build().unwrap();
    let report = engine.run(&frame);
    assert_eq!(report.results[0].outcome.violations, Some(1));
}

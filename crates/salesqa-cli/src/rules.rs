//! The built-in sales rule set.
//!
//! Covers the standard quality checklist for a sales export: date format,
//! id integrity, non-negative amounts, populated and clean text fields,
//! allowed category/region/payment values, email and phone shapes, and
//! total = price * quantity consistency.

use salesqa_engine::{BlankPolicy, Rule, RuleKind, RuleSet};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

pub fn default_sales_ruleset() -> RuleSet {
    RuleSet::new(vec![
        Rule::new(
            "R01",
            "sale_date is an ISO date (YYYY-MM-DD)",
            RuleKind::DateFormat {
                column: "sale_date".to_string(),
                format: "%Y-%m-%d".to_string(),
                blank_policy: BlankPolicy::Violation,
            },
        ),
        Rule::new(
            "R02",
            "product_id is unique",
            RuleKind::Unique {
                columns: strings(&["product_id"]),
                blank_policy: BlankPolicy::Violation,
            },
        ),
        Rule::new(
            "R03",
            "product_id is numeric",
            RuleKind::Pattern {
                column: "product_id".to_string(),
                pattern: "^[0-9]+$".to_string(),
                deny: false,
                blank_policy: BlankPolicy::Ignore,
            },
        ),
        Rule::new(
            "R04",
            "price is a non-negative amount",
            RuleKind::NumericRange {
                column: "price".to_string(),
                min: Some(0.0),
                max: None,
                integers_only: false,
            },
        ),
        Rule::new(
            "R05",
            "quantity is a positive whole number",
            RuleKind::NumericRange {
                column: "quantity".to_string(),
                min: Some(1.0),
                max: None,
                integers_only: true,
            },
        ),
        Rule::new(
            "R06",
            "product_name is populated",
            RuleKind::NotBlank {
                column: "product_name".to_string(),
            },
        ),
        Rule::new(
            "R07",
            "product_name has no digits or symbols",
            RuleKind::Pattern {
                column: "product_name".to_string(),
                pattern: r"[^a-zA-Z\s]".to_string(),
                deny: true,
                blank_policy: BlankPolicy::Ignore,
            },
        ),
        Rule::new(
            "R08",
            "customer_name is populated",
            RuleKind::NotBlank {
                column: "customer_name".to_string(),
            },
        ),
        Rule::new(
            "R09",
            "customer_name has no digits or symbols",
            RuleKind::Pattern {
                column: "customer_name".to_string(),
                pattern: r"[^a-zA-Z\s]".to_string(),
                deny: true,
                blank_policy: BlankPolicy::Ignore,
            },
        ),
        Rule::new(
            "R10",
            "customer_email looks like an email address",
            RuleKind::Pattern {
                column: "customer_email".to_string(),
                pattern: r"^[\w.-]+@[\w.-]+\.\w+$".to_string(),
                deny: false,
                blank_policy: BlankPolicy::Violation,
            },
        ),
        Rule::new(
            "R11",
            "customer_phone is 7 to 10 digits",
            RuleKind::Pattern {
                column: "customer_phone".to_string(),
                pattern: "^[0-9]{7,10}$".to_string(),
                deny: false,
                blank_policy: BlankPolicy::Violation,
            },
        ),
        Rule::new(
            "R12",
            "category is a known product category",
            RuleKind::OneOf {
                column: "category".to_string(),
                allowed: strings(&["Electronics", "Clothing", "Home", "Toys", "Groceries"]),
                normalize_case: false,
                blank_policy: BlankPolicy::Violation,
            },
        ),
        Rule::new(
            "R13",
            "region is a known sales region",
            RuleKind::OneOf {
                column: "region".to_string(),
                allowed: strings(&["North", "South", "East", "West", "Central"]),
                normalize_case: false,
                blank_policy: BlankPolicy::Violation,
            },
        ),
        Rule::new(
            "R14",
            "payment_method is a known method",
            RuleKind::OneOf {
                column: "payment_method".to_string(),
                allowed: strings(&["Cash", "Card", "Bank Transfer"]),
                normalize_case: false,
                blank_policy: BlankPolicy::Violation,
            },
        ),
        Rule::new(
            "R15",
            "total equals price times quantity",
            RuleKind::ProductConsistency {
                result: "total".to_string(),
                left: "price".to_string(),
                right: "quantity".to_string(),
                tolerance: 1e-9,
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ruleset_builds_without_duplicate_ids() {
        let engine = default_sales_ruleset().build().expect("build engine");
        assert_eq!(engine.rules().len(), 15);
    }
}

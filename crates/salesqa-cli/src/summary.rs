//! Console rendering of check and profile results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::{CheckResult, ProfileResult};

pub fn print_check_summary(result: &CheckResult) {
    println!("Source: {} ({} row(s))", result.source, result.rows);
    if let Some(path) = &result.json_path {
        println!("JSON report: {}", path.display());
    }
    if let Some(path) = &result.csv_path {
        println!("CSV report: {}", path.display());
    }

    let mut table = new_table();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Description"),
        header_cell("Result"),
        header_cell("Violations"),
        header_cell("Message"),
    ]);
    align_column(&mut table, 3, CellAlignment::Right);

    for entry in &result.report.results {
        let outcome = &entry.outcome;
        let result_cell = if outcome.passed {
            Cell::new("Passed").fg(Color::Green)
        } else {
            Cell::new("Failed").fg(Color::Red)
        };
        let violations = outcome
            .violations
            .map(|count| count.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(&entry.rule_id),
            Cell::new(&entry.description),
            result_cell,
            Cell::new(violations),
            Cell::new(&outcome.message),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} rule(s) failed", result.report.failed_count()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(if result.report.passed() {
            "Passed"
        } else {
            "Failed"
        })
        .add_attribute(Attribute::Bold),
        Cell::new(result.report.total_violations()).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    println!("{table}");
}

pub fn print_profile_summary(result: &ProfileResult) {
    println!("Source: {} ({} row(s))", result.source, result.rows);
    let mut table = new_table();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Non-blank"),
        header_cell("Blank"),
        header_cell("Distinct"),
    ]);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for column in &result.columns {
        let blank_cell = if column.blank > 0 {
            Cell::new(column.blank).fg(Color::Yellow)
        } else {
            Cell::new(column.blank)
        };
        table.add_row(vec![
            Cell::new(&column.name),
            Cell::new(column.non_blank),
            blank_cell,
            Cell::new(column.distinct),
        ]);
    }
    println!("{table}");
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

//! Human-facing summary and field-table rendering.

use chrono::NaiveDate;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use asset_map::SynonymTable;
use asset_model::{GroupBreakdown, Summary};

pub fn print_summary(summary: &Summary, reference_date: NaiveDate, shown_records: usize) {
    println!("Records: {} (showing {})", summary.total_records, shown_records);
    println!("Reference date: {reference_date}");
    println!(
        "Totals: qty {}, manufacturers {}, categories {}, active {}, expired {}, service contracts {}",
        summary.total_quantity,
        summary.manufacturer_count,
        summary.category_count,
        summary.active_support,
        summary.expired_support,
        summary.service_contracts,
    );

    print_breakdown("Manufacturer", &summary.manufacturer_breakdown);
    print_breakdown("Category", &summary.category_breakdown);
    print_lifecycle(summary);
    print_completeness(summary);
}

fn print_breakdown(
    label: &str,
    breakdown: &std::collections::BTreeMap<String, GroupBreakdown>,
) {
    if breakdown.is_empty() {
        return;
    }
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell(label),
        header_cell("Count"),
        header_cell("Quantity"),
        header_cell("Active"),
        header_cell("Expired"),
    ]);
    for index in 1..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (group, counts) in breakdown {
        table.add_row(vec![
            Cell::new(group),
            Cell::new(counts.count),
            Cell::new(counts.quantity),
            count_cell(counts.active_count, Color::Green),
            count_cell(counts.expired_count, Color::Red),
        ]);
    }
    println!();
    println!("{table}");
}

fn print_lifecycle(summary: &Summary) {
    if summary.lifecycle_by_category.is_empty() {
        return;
    }
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Records"),
        header_cell("Qty"),
        header_cell("End of Sale"),
        header_cell("End of SW Vuln"),
        header_cell("Last Day Support"),
    ]);
    for index in 1..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (category, counts) in &summary.lifecycle_by_category {
        table.add_row(vec![
            Cell::new(category),
            Cell::new(counts.total),
            Cell::new(counts.total_qty),
            count_cell(counts.end_of_sale, Color::Yellow),
            count_cell(counts.end_of_sw_vuln, Color::Yellow),
            count_cell(counts.last_day_support, Color::Red),
        ]);
    }
    println!();
    println!("Lifecycle expiry by category:");
    println!("{table}");
}

fn print_completeness(summary: &Summary) {
    if summary.field_completeness.is_empty() {
        return;
    }
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Field"), header_cell("Complete")]);
    align_column(&mut table, 1, CellAlignment::Right);
    for (field, percent) in &summary.field_completeness {
        let cell = if *percent >= 90 {
            Cell::new(format!("{percent}%")).fg(Color::Green)
        } else if *percent >= 50 {
            Cell::new(format!("{percent}%")).fg(Color::Yellow)
        } else {
            Cell::new(format!("{percent}%")).fg(Color::Red)
        };
        table.add_row(vec![Cell::new(field), cell]);
    }
    println!();
    println!("Field completeness:");
    println!("{table}");
}

pub fn print_fields(synonyms: &SynonymTable) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Canonical field"), header_cell("Synonyms")]);
    for entry in synonyms.entries() {
        table.add_row(vec![
            Cell::new(entry.field).add_attribute(Attribute::Bold),
            Cell::new(entry.synonyms.join(", ")),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

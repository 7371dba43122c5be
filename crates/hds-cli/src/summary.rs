use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hds_cli::pipeline::{GoldOutcome, InspectedTable, SilverOutcome};

pub fn print_silver_summary(outcome: &SilverOutcome) {
    println!("Dataset: {} ({})", outcome.dataset, outcome.adapter);
    if let Some(location) = &outcome.location {
        println!("Source: {location}");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Labeled"),
        header_cell("Positive"),
        header_cell("Extra columns"),
    ]);
    apply_table_style(&mut table);
    for index in 0..3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let extras = if outcome.extra_columns.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(outcome.extra_columns.join(", "))
    };
    table.add_row(vec![
        Cell::new(outcome.rows),
        Cell::new(outcome.labeled_rows),
        Cell::new(outcome.positives).fg(Color::Yellow),
        extras,
    ]);
    println!("{table}");
    println!(
        "Saved silver → {} | rows={}",
        outcome.path.display(),
        outcome.rows
    );
}

pub fn print_gold_summary(outcome: &GoldOutcome) {
    println!(
        "Merged gold → {} | rows={} | sources={}",
        outcome.path.display(),
        outcome.rows,
        outcome.sources
    );
}

pub fn print_inspection(tables: &[InspectedTable]) {
    if tables.is_empty() {
        println!("No silver files found.");
        return;
    }
    for table in tables {
        let name = table
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!();
        println!("{name}");
        println!("{}", table.head);
        println!("Shape: ({}, {})", table.rows, table.columns);
    }
}

pub fn apply_table_style(table: &mut Table) {
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

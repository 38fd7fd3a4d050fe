use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ProcessResult;

pub fn print_summary(result: &ProcessResult) {
    if result.dry_run {
        println!("Dry run: no tables written");
    } else {
        println!("Output: {}", result.output_dir.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Input"),
        header_cell("Malformed"),
        header_cell("Rejected"),
        header_cell("Duplicates"),
        header_cell("Kept"),
    ]);
    apply_table_style(&mut table);
    for column in 1..=5 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    let mut total_input = 0usize;
    let mut total_kept = 0usize;
    for (dataset, stats) in &result.datasets {
        total_input += stats.input_rows;
        total_kept += stats.kept;
        table.add_row(vec![
            Cell::new(dataset.as_str()),
            Cell::new(stats.input_rows),
            count_cell(stats.malformed, Color::Yellow),
            count_cell(stats.rejected_total(), Color::Yellow),
            count_cell(stats.duplicates_removed, Color::Yellow),
            Cell::new(stats.kept).fg(Color::Green),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_input).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_kept).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    let resolution = &result.resolution;
    let mut tables = Table::new();
    tables.set_header(vec![header_cell("Table"), header_cell("Rows")]);
    apply_table_style(&mut tables);
    align_column(&mut tables, 1, CellAlignment::Right);
    tables.add_row(vec![Cell::new("movies"), Cell::new(result.movies)]);
    tables.add_row(vec![Cell::new("genres"), Cell::new(result.genres)]);
    tables.add_row(vec![
        Cell::new("movie_genres"),
        Cell::new(result.movie_genres),
    ]);
    println!("{tables}");

    println!(
        "Matched both: {}  metadata-only: {}  genres-only: {}",
        resolution.matched_both, resolution.metadata_only, resolution.genres_only
    );
    println!(
        "Financial matched: {}  unmatched (dropped): {}",
        resolution.financial_matched, resolution.financial_unmatched
    );
    if resolution.fallback_collisions > 0 {
        println!(
            "Ambiguous fallback matches resolved by input order: {}",
            resolution.fallback_collisions
        );
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

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

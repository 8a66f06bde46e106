use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use stock_ingest::InspectionReport;
use stock_model::{AnnotatedRecord, CellValue, PrefixTag};
use stock_output::title_case_header;

use crate::types::{CategoryListing, ProcessResult};

pub fn print_process_summary(result: &ProcessResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output_dir.display());
    println!(
        "Sort: {:?}, missing categories: {:?}",
        result.options.sort_mode, result.options.null_category
    );
    println!("{}", preview_table(result));
    let shown = result.preview_rows.min(result.table.len());
    if shown < result.table.len() {
        println!("Showing {shown} of {} rows", result.table.len());
    }

    let mut categories = Table::new();
    categories.set_header(vec![
        header_cell("Category"),
        header_cell("Sheet"),
        header_cell("Rows"),
    ]);
    apply_summary_table_style(&mut categories);
    align_column(&mut categories, 2, CellAlignment::Right);
    for partition in &result.partitions {
        categories.add_row(vec![
            Cell::new(&partition.category)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&partition.sheet),
            count_cell(partition.records),
        ]);
    }
    categories.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(result.table.len()).add_attribute(Attribute::Bold),
    ]);
    println!("{categories}");

    let mut prefixes = Table::new();
    prefixes.set_header(vec![header_cell("Prefix"), header_cell("Rows")]);
    apply_summary_table_style(&mut prefixes);
    align_column(&mut prefixes, 1, CellAlignment::Right);
    for (tag, count) in &result.prefix_counts {
        prefixes.add_row(vec![prefix_cell(*tag), count_cell(*count)]);
    }
    println!("{prefixes}");

    let verb = if result.dry_run {
        "Would write"
    } else {
        "Wrote"
    };
    for path in result.outputs.iter() {
        println!("{verb}: {}", path.display());
    }
}

fn preview_table(result: &ProcessResult) -> Table {
    let columns = result.table.output_columns();
    let mut table = Table::new();
    table.set_header(
        columns
            .iter()
            .map(|column| header_cell(&title_case_header(column)))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for record in result.table.records.iter().take(result.preview_rows) {
        table.add_row(preview_row(record, &columns));
    }
    table
}

fn preview_row(record: &AnnotatedRecord, columns: &[String]) -> Vec<Cell> {
    columns
        .iter()
        .map(|column| match record.output_value(column) {
            CellValue::Empty => dim_cell("-"),
            value => Cell::new(value),
        })
        .collect()
}

pub fn print_categories(listing: &CategoryListing) {
    println!("Input: {}", listing.input.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (category, count) in &listing.categories {
        table.add_row(vec![Cell::new(category), count_cell(*count)]);
    }
    println!("{table}");
    if listing.missing > 0 {
        println!("Rows with no category: {}", listing.missing);
    }
}

pub fn print_inspection(report: &InspectionReport) {
    println!("File: {}", report.path.display());
    println!("Detected encoding: {}", report.encoding);
    println!();
    println!("Raw columns:");
    for column in &report.raw_columns {
        println!("  {column:?}");
    }
    println!();
    println!("First rows:");
    println!("{}", report.head);
    println!();
    println!("Cleaned columns:");
    for column in &report.cleaned_columns {
        println!("  {column}");
    }
    println!();
    let missing = report.missing_required();
    if missing.is_empty() {
        println!("Required columns: found 'category' and 'item'");
    } else {
        println!("Required columns: missing {}", missing.join(", "));
    }
    for sample in &report.column_samples {
        println!();
        println!("Column '{}':", sample.name());
        for idx in 0..sample.len() {
            match sample.get(idx) {
                Ok(value) => println!("  {value}"),
                Err(_) => println!("  <unreadable>"),
            }
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
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

fn prefix_cell(tag: PrefixTag) -> Cell {
    let color = match tag {
        PrefixTag::Glass => Color::Magenta,
        PrefixTag::Retail => Color::Green,
        PrefixTag::SitIn => Color::Yellow,
        PrefixTag::Other => Color::DarkGrey,
    };
    Cell::new(tag).fg(color)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

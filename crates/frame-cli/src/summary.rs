//! Run summaries printed after a transform.

use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// A column the run added or overwrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSummary {
    pub name: String,
    pub dtype: String,
    pub null_count: usize,
}

/// Outcome of one CLI run.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub rows: usize,
    pub steps: Vec<&'static str>,
    pub written_columns: Vec<ColumnSummary>,
}

/// Print the summary to stderr so stdout stays clean for CSV output.
pub fn print_summary(result: &RunResult) {
    eprintln!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => eprintln!("Output: {}", path.display()),
        None => eprintln!("Output: <stdout>"),
    }
    eprintln!("Steps: {}", result.steps.join(" -> "));
    eprintln!("{}", summary_table(result));
}

/// Build the table of written columns.
pub fn summary_table(result: &RunResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Rows"),
        header_cell("Nulls"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    for column in &result.written_columns {
        table.add_row(vec![
            Cell::new(&column.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            dim_cell(&column.dtype),
            Cell::new(result.rows),
            null_cell(column.null_count),
        ]);
    }
    if result.written_columns.is_empty() {
        table.add_row(vec![
            dim_cell("(no columns written)"),
            dim_cell("-"),
            Cell::new(result.rows),
            dim_cell("-"),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
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

fn null_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(Color::Yellow)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

//! CSV input and output.

use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{
    Column, CsvReadOptions, CsvWriter, DataFrame, DataType, PolarsResult, SerReader, SerWriter,
};
use tracing::debug;

/// Rows used to infer column types.
const INFER_SCHEMA_ROWS: usize = 100;

/// Read a CSV file, parsing ISO 8601 date and datetime strings into
/// temporal columns.
///
/// Columns with no values at all (including every column of a header-only
/// file) carry no type information and are read as `null` columns.
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .map_parse_options(|options| options.with_try_parse_dates(true))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("open CSV {}", path.display()))?
        .finish()
        .with_context(|| format!("parse CSV {}", path.display()))?;
    let frame = untyped_columns_to_null(frame)
        .with_context(|| format!("parse CSV {}", path.display()))?;

    debug!(
        path = %path.display(),
        rows = frame.height(),
        columns = frame.width(),
        "read CSV"
    );
    Ok(frame)
}

/// Replace string columns holding only nulls with `Null`-typed columns.
fn untyped_columns_to_null(mut frame: DataFrame) -> PolarsResult<DataFrame> {
    let height = frame.height();
    let names: Vec<_> = frame
        .get_columns()
        .iter()
        .filter(|column| column.dtype() == &DataType::String && column.null_count() == height)
        .map(|column| column.name().clone())
        .collect();
    for name in names {
        debug!(column = %name, "empty CSV column read as null");
        frame.with_column(Column::full_null(name, height, &DataType::Null))?;
    }
    Ok(frame)
}

/// Write `frame` as CSV to `output`, or to stdout when no path is given.
pub fn write_csv(frame: &mut DataFrame, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            CsvWriter::new(file)
                .include_header(true)
                .finish(frame)
                .with_context(|| format!("write CSV {}", path.display()))?;
            debug!(path = %path.display(), rows = frame.height(), "wrote CSV");
        }
        None => {
            let stdout = io::stdout();
            CsvWriter::new(stdout.lock())
                .include_header(true)
                .finish(frame)
                .context("write CSV to stdout")?;
        }
    }
    Ok(())
}

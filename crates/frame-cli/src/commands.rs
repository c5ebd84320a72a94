//! Command implementations.

use std::fs;

use anyhow::{Context, Result};
use comfy_table::Table;
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use frame_transform::{DateDifferenceTransformer, DateUnit, Pipeline, PipelineConfig};

use crate::cli::{ApplyArgs, DatediffArgs, IoArgs};
use crate::io::{read_csv, write_csv};
use crate::summary::{ColumnSummary, RunResult, apply_table_style};

pub fn run_datediff(args: &DatediffArgs) -> Result<RunResult> {
    let mut builder =
        DateDifferenceTransformer::builder(&args.column_lower, &args.column_upper)
            .units(&args.units)
            .verbose(args.trace_transform);
    if let Some(name) = &args.new_column_name {
        builder = builder.new_column_name(name);
    }
    let transformer = builder.build().context("configure date difference")?;

    run_pipeline(Pipeline::new().with_step(transformer), &args.io)
}

pub fn run_apply(args: &ApplyArgs) -> Result<RunResult> {
    let text = fs::read_to_string(&args.config)
        .with_context(|| format!("read config {}", args.config.display()))?;
    let config = PipelineConfig::from_json(&text)
        .with_context(|| format!("parse config {}", args.config.display()))?;
    let pipeline = Pipeline::from_config(&config)
        .with_context(|| format!("build pipeline from {}", args.config.display()))?;

    run_pipeline(pipeline, &args.io)
}

pub fn run_units() {
    let mut table = Table::new();
    table.set_header(vec!["Code", "Unit", "Seconds"]);
    apply_table_style(&mut table);
    for unit in DateUnit::ALL {
        table.add_row(vec![
            unit.code().to_string(),
            unit.label().to_string(),
            unit.seconds().to_string(),
        ]);
    }
    println!("{table}");
}

fn run_pipeline(pipeline: Pipeline, io: &IoArgs) -> Result<RunResult> {
    let span = info_span!("run", input = %io.input.display(), steps = pipeline.len());
    let _guard = span.enter();

    let mut frame = read_csv(&io.input)?;
    let mut transformed = pipeline
        .transform(&mut frame)
        .with_context(|| format!("transform {}", io.input.display()))?;
    write_csv(&mut transformed, io.output.as_deref())?;

    let written_columns = written_columns(&transformed, &pipeline.output_columns());
    info!(
        rows = transformed.height(),
        written = written_columns.len(),
        "run complete"
    );

    Ok(RunResult {
        input: io.input.clone(),
        output: io.output.clone(),
        rows: transformed.height(),
        steps: pipeline.names(),
        written_columns,
    })
}

/// Summaries of the named columns of `frame`, in the given order.
fn written_columns(frame: &DataFrame, names: &[&str]) -> Vec<ColumnSummary> {
    names
        .iter()
        .filter_map(|name| frame.column(name).ok())
        .map(|column| ColumnSummary {
            name: column.name().to_string(),
            dtype: column.dtype().to_string(),
            null_count: column.null_count(),
        })
        .collect()
}

//! Shared fixtures for transformer integration tests.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::{Column, DataFrame, DataType, IntoColumn, NamedFrom, Series, TimeUnit};

pub fn dt(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
}

/// A microsecond-resolution datetime column.
pub fn datetime_column(name: &str, values: &[Option<NaiveDateTime>]) -> Column {
    let ticks: Vec<Option<i64>> = values
        .iter()
        .map(|value| value.map(|v| v.and_utc().timestamp_micros()))
        .collect();
    Series::new(name.into(), ticks)
        .cast(&DataType::Datetime(TimeUnit::Microseconds, None))
        .unwrap()
        .into_column()
}

/// Eight rows of `a` (lower) and `b` (upper) covering positive, zero and
/// negative gaps.
pub fn datediff_frame() -> DataFrame {
    let a = [
        dt(1993, 9, 27, 11, 58, 58),
        dt(2000, 3, 19, 12, 59, 59),
        dt(2018, 11, 10, 11, 59, 59),
        dt(2018, 10, 10, 11, 59, 59),
        dt(2018, 10, 10, 11, 59, 59),
        dt(2018, 10, 10, 10, 59, 59),
        dt(2018, 12, 10, 11, 59, 59),
        dt(1985, 7, 23, 11, 59, 59),
    ];
    let b = [
        dt(2020, 5, 1, 12, 59, 59),
        dt(2019, 12, 25, 11, 58, 58),
        dt(2018, 11, 10, 11, 59, 59),
        dt(2018, 11, 10, 11, 59, 59),
        dt(2018, 9, 10, 9, 59, 59),
        dt(2015, 11, 10, 11, 59, 59),
        dt(2015, 11, 10, 12, 59, 59),
        dt(2015, 7, 23, 11, 59, 59),
    ];
    let a: Vec<Option<NaiveDateTime>> = a.into_iter().map(Some).collect();
    let b: Vec<Option<NaiveDateTime>> = b.into_iter().map(Some).collect();
    DataFrame::new(vec![datetime_column("a", &a), datetime_column("b", &b)]).unwrap()
}

/// Two rows, each missing one side.
pub fn datediff_nulls_frame() -> DataFrame {
    DataFrame::new(vec![
        datetime_column("a", &[Some(dt(1993, 9, 27, 11, 58, 58)), None]),
        datetime_column("b", &[None, Some(dt(2019, 12, 25, 11, 58, 58))]),
    ])
    .unwrap()
}

pub fn f64_values(frame: &DataFrame, column: &str) -> Vec<Option<f64>> {
    frame
        .column(column)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .collect()
}

pub fn assert_close(actual: &[Option<f64>], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (idx, (actual, expected)) in actual.iter().zip(expected).enumerate() {
        let actual = actual.unwrap_or_else(|| panic!("row {idx} is null"));
        let tolerance = 1e-12 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "row {idx}: expected {expected}, got {actual}"
        );
    }
}

//! Tests for the date difference transformer.

mod common;

use polars::prelude::{DataFrame, DataType, IntoColumn, NamedFrom, Series, TimeUnit};

use common::{
    assert_close, datediff_frame, datediff_nulls_frame, datetime_column, dt, f64_values,
};
use frame_transform::{DateDifferenceTransformer, TransformError, Transformer};

fn transformer(units: &str) -> DateDifferenceTransformer {
    DateDifferenceTransformer::builder("a", "b")
        .new_column_name(units)
        .units(units)
        .copy(true)
        .verbose(false)
        .build()
        .unwrap()
}

#[test]
fn test_expected_output_units_d() {
    let mut df = datediff_frame();
    let out = transformer("D").transform(&mut df).unwrap();

    assert_close(
        &f64_values(&out, "D"),
        &[
            9713.042372685186,
            7219.957627314815,
            0.0,
            31.0,
            -30.083333333333332,
            -1064.9583333333333,
            -1125.9583333333333,
            10957.0,
        ],
    );
}

#[test]
fn test_expected_output_units_h() {
    let mut df = datediff_frame();
    let out = transformer("h").transform(&mut df).unwrap();

    assert_close(
        &f64_values(&out, "h"),
        &[
            233113.01694444445,
            173278.98305555555,
            0.0,
            744.0,
            -722.0,
            -25559.0,
            -27023.0,
            262968.0,
        ],
    );
}

#[test]
fn test_expected_output_units_m() {
    let mut df = datediff_frame();
    let out = transformer("m").transform(&mut df).unwrap();

    assert_close(
        &f64_values(&out, "m"),
        &[
            13986781.016666668,
            10396738.983333332,
            0.0,
            44640.0,
            -43320.0,
            -1533540.0,
            -1621380.0,
            15778080.0,
        ],
    );
}

#[test]
fn test_expected_output_units_s() {
    let mut df = datediff_frame();
    let out = transformer("s").transform(&mut df).unwrap();

    // Whole seconds are exact
    assert_eq!(
        f64_values(&out, "s"),
        vec![
            Some(839206861.0),
            Some(623804339.0),
            Some(0.0),
            Some(2678400.0),
            Some(-2599200.0),
            Some(-92012400.0),
            Some(-97282800.0),
            Some(946684800.0),
        ]
    );
}

#[test]
fn test_whole_values_are_exact() {
    let mut df = datediff_frame();
    let days = transformer("D").transform(&mut df).unwrap();
    let hours = transformer("h").transform(&mut df).unwrap();

    let days = f64_values(&days, "D");
    let hours = f64_values(&hours, "h");
    assert_eq!(days[2], Some(0.0));
    assert_eq!(days[3], Some(31.0));
    assert_eq!(hours[3], Some(744.0));
}

#[test]
fn test_expected_output_nulls() {
    let mut df = datediff_nulls_frame();
    let out = transformer("D").transform(&mut df).unwrap();

    assert_eq!(out.width(), 3);
    assert_eq!(f64_values(&out, "D"), vec![None, None]);
    assert_eq!(out.column("D").unwrap().dtype(), &DataType::Float64);
}

#[test]
fn test_default_column_name_in_output() {
    let mut df = datediff_frame();
    let x = DateDifferenceTransformer::builder("a", "b")
        .units("h")
        .build()
        .unwrap();
    let out = x.transform(&mut df).unwrap();
    assert!(out.column("b_a_datediff_h").is_ok());
}

#[test]
fn test_copy_leaves_input_untouched() {
    let mut df = datediff_frame();
    let out = transformer("D").transform(&mut df).unwrap();

    assert_eq!(df.width(), 2);
    assert_eq!(out.width(), 3);
    assert_eq!(out.height(), df.height());
}

#[test]
fn test_no_copy_writes_into_input() {
    let mut df = datediff_frame();
    let x = DateDifferenceTransformer::builder("a", "b")
        .new_column_name("D")
        .copy(false)
        .build()
        .unwrap();
    let out = x.transform(&mut df).unwrap();

    assert_eq!(df.width(), 3);
    assert!(df.equals_missing(&out));
}

#[test]
fn test_existing_column_is_overwritten() {
    let mut df = datediff_frame();
    df.with_column(Series::new("D".into(), vec!["stale"; 8]))
        .unwrap();

    let out = transformer("D").transform(&mut df).unwrap();

    assert_eq!(out.width(), 3);
    let names: Vec<&str> = out
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect();
    assert_eq!(names, vec!["a", "b", "D"]);
    assert_eq!(out.column("D").unwrap().dtype(), &DataType::Float64);
}

#[test]
fn test_missing_column_raised_by_base() {
    let mut df = DataFrame::new(vec![datetime_column("a", &[Some(dt(2018, 1, 1, 0, 0, 0))])])
        .unwrap();

    let err = transformer("D").transform(&mut df).unwrap_err();
    match err {
        TransformError::MissingColumns {
            transformer,
            columns,
        } => {
            assert_eq!(transformer, "DateDifferenceTransformer");
            assert_eq!(columns, vec!["b"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_non_temporal_column_rejected() {
    let mut df = DataFrame::new(vec![
        datetime_column("a", &[Some(dt(2018, 1, 1, 0, 0, 0))]),
        Series::new("b".into(), vec!["2018-01-02"]).into_column(),
    ])
    .unwrap();

    let err = transformer("D").transform(&mut df).unwrap_err();
    assert!(matches!(
        err,
        TransformError::NonTemporalColumn { ref column, .. } if column == "b"
    ));
}

#[test]
fn test_failed_transform_leaves_in_place_frame_unchanged() {
    let mut df = DataFrame::new(vec![
        datetime_column("a", &[Some(dt(2018, 1, 1, 0, 0, 0))]),
        Series::new("b".into(), vec![1i64]).into_column(),
    ])
    .unwrap();
    let x = DateDifferenceTransformer::builder("a", "b")
        .copy(false)
        .build()
        .unwrap();

    assert!(x.transform(&mut df).is_err());
    assert_eq!(df.width(), 2);
}

#[test]
fn test_date_and_datetime_columns_mix() {
    let lower = Series::new("a".into(), vec![Some(17_845i32)]) // 2018-11-10
        .cast(&DataType::Date)
        .unwrap()
        .into_column();
    let upper = Series::new(
        "b".into(),
        vec![Some(dt(2018, 11, 11, 12, 0, 0).and_utc().timestamp_nanos_opt().unwrap())],
    )
    .cast(&DataType::Datetime(TimeUnit::Nanoseconds, None))
    .unwrap()
    .into_column();
    let mut df = DataFrame::new(vec![lower, upper]).unwrap();

    let out = transformer("h").transform(&mut df).unwrap();
    assert_eq!(f64_values(&out, "h"), vec![Some(36.0)]);
}

#[test]
fn test_all_null_column_yields_nulls() {
    let mut df = DataFrame::new(vec![
        datetime_column("a", &[Some(dt(2018, 1, 1, 0, 0, 0)), None]),
        Series::new_null("b".into(), 2).into_column(),
    ])
    .unwrap();

    let out = transformer("s").transform(&mut df).unwrap();
    assert_eq!(f64_values(&out, "s"), vec![None, None]);
}

#[test]
fn test_fit_then_transform() {
    let mut df = datediff_frame();
    let mut x = transformer("D");
    let out = x.fit_transform(&mut df).unwrap();
    assert_eq!(out.width(), 3);
}

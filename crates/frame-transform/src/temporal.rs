//! Date arithmetic over polars columns.
//!
//! Both inputs are brought to a common time unit (the finer of the two,
//! with `Date` treated as milliseconds). Each side's physical integers are
//! widened to that unit in `i128` and subtracted, so values outside the
//! `i64` range of the finer unit stay exact. The difference is divided by the
//! length of the requested [`DateUnit`] in that time unit, so the only
//! rounding is the final floating-point division.

use polars::prelude::{
    Column, DataType, Float64Chunked, Int64Chunked, IntoSeries, PolarsResult, Series, TimeUnit,
};

use frame_model::DateUnit;

const SECONDS_PER_DAY: i64 = 86_400;

/// True for dtypes the date difference accepts.
///
/// `Null` is accepted so an all-missing column yields an all-missing result.
pub fn is_temporal(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Date | DataType::Datetime(_, _) | DataType::Null
    )
}

/// Time unit of a temporal dtype, if it has one.
fn time_unit_of(dtype: &DataType) -> Option<TimeUnit> {
    match dtype {
        DataType::Datetime(unit, _) => Some(*unit),
        DataType::Date => Some(TimeUnit::Milliseconds),
        _ => None,
    }
}

fn precision_rank(unit: TimeUnit) -> u8 {
    match unit {
        TimeUnit::Milliseconds => 0,
        TimeUnit::Microseconds => 1,
        TimeUnit::Nanoseconds => 2,
    }
}

/// The finer of the time units of two temporal dtypes.
///
/// Falls back to microseconds when neither dtype carries a unit.
pub fn common_time_unit(lower: &DataType, upper: &DataType) -> TimeUnit {
    match (time_unit_of(lower), time_unit_of(upper)) {
        (Some(a), Some(b)) => {
            if precision_rank(a) >= precision_rank(b) {
                a
            } else {
                b
            }
        }
        (Some(unit), None) | (None, Some(unit)) => unit,
        (None, None) => TimeUnit::Microseconds,
    }
}

/// Number of ticks of `unit` in one second.
pub fn ticks_per_second(unit: TimeUnit) -> i64 {
    match unit {
        TimeUnit::Milliseconds => 1_000,
        TimeUnit::Microseconds => 1_000_000,
        TimeUnit::Nanoseconds => 1_000_000_000,
    }
}

/// Raw tick values of a temporal column in its own resolution, with the
/// factor that widens them to `unit`.
///
/// A `Date` stores days; a datetime stores ticks of its own time unit, in UTC.
fn native_ticks(column: &Column, unit: TimeUnit) -> PolarsResult<(Int64Chunked, i128)> {
    let per_second = i128::from(ticks_per_second(unit));
    let factor = match column.dtype() {
        DataType::Datetime(own, _) => per_second / i128::from(ticks_per_second(*own)),
        DataType::Date => per_second * i128::from(SECONDS_PER_DAY),
        _ => 1,
    };
    let ticks = column.to_physical_repr().cast(&DataType::Int64)?;
    Ok((ticks.i64()?.clone(), factor))
}

/// Compute `upper - lower` for every row, expressed in `unit`.
///
/// Rows where either side is null produce null. Negative differences
/// are kept as negative values.
///
/// Callers are expected to have checked both dtypes with [`is_temporal`].
pub fn date_difference(
    lower: &Column,
    upper: &Column,
    unit: DateUnit,
    name: &str,
) -> PolarsResult<Series> {
    let time_unit = common_time_unit(lower.dtype(), upper.dtype());
    let (lower_ticks, lower_factor) = native_ticks(lower, time_unit)?;
    let (upper_ticks, upper_factor) = native_ticks(upper, time_unit)?;
    let ticks_per_unit = (unit.seconds() * ticks_per_second(time_unit)) as f64;

    let values: Float64Chunked = lower_ticks
        .into_iter()
        .zip(upper_ticks.into_iter())
        .map(|(lo, hi)| match (lo, hi) {
            // widening in i128 cannot overflow, unlike a cast to the finer unit
            (Some(lo), Some(hi)) => {
                let diff = i128::from(hi) * upper_factor - i128::from(lo) * lower_factor;
                Some(diff as f64 / ticks_per_unit)
            }
            _ => None,
        })
        .collect();

    Ok(values.with_name(name.into()).into_series())
}

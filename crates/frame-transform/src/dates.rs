//! Date difference transformer.
//!
//! Computes `column_upper - column_lower` for every row of a frame and
//! stores the result, scaled to days, hours, minutes or seconds, in a new
//! `Float64` column.

use polars::prelude::DataFrame;
use serde_json::Value;
use tracing::{debug, debug_span};

use frame_model::{DateUnit, Result, TransformError};

use crate::base::BaseTransformer;
use crate::params::Params;
use crate::temporal::{date_difference, is_temporal};
use crate::transformer::Transformer;

/// Name reported by [`DateDifferenceTransformer`].
pub const DATE_DIFFERENCE_TRANSFORMER: &str = "DateDifferenceTransformer";

/// Adds a column holding the difference between two date columns.
///
/// # Examples
///
/// ```
/// use frame_transform::DateDifferenceTransformer;
///
/// let transformer = DateDifferenceTransformer::builder("admitted", "discharged")
///     .units("h")
///     .build()
///     .unwrap();
/// assert_eq!(transformer.new_column_name(), "discharged_admitted_datediff_h");
/// assert_eq!(transformer.columns(), ["admitted", "discharged"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DateDifferenceTransformer {
    base: BaseTransformer,
    column_lower: String,
    column_upper: String,
    new_column_name: String,
    units: DateUnit,
}

/// Builder for [`DateDifferenceTransformer`].
#[derive(Debug, Clone)]
pub struct DateDifferenceBuilder {
    column_lower: String,
    column_upper: String,
    new_column_name: Option<String>,
    units: String,
    copy: bool,
    verbose: bool,
}

impl DateDifferenceBuilder {
    /// Name of the output column (default `{upper}_{lower}_datediff_{units}`).
    #[must_use]
    pub fn new_column_name(mut self, name: impl Into<String>) -> Self {
        self.new_column_name = Some(name.into());
        self
    }

    /// Unit code: one of `D`, `h`, `m`, `s` (default `D`).
    #[must_use]
    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    /// Work on a copy of the input frame (default `true`).
    #[must_use]
    pub fn copy(mut self, copy: bool) -> Self {
        self.copy = copy;
        self
    }

    /// Log each lifecycle call at `info` (default `false`).
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validate the configuration and build the transformer.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidUnits`] for an unknown unit code and
    /// [`TransformError::InvalidColumns`] for empty column names.
    pub fn build(self) -> Result<DateDifferenceTransformer> {
        let units = self
            .units
            .parse::<DateUnit>()
            .map_err(|source| TransformError::InvalidUnits {
                transformer: DATE_DIFFERENCE_TRANSFORMER,
                source,
            })?;

        let base = BaseTransformer::named(
            DATE_DIFFERENCE_TRANSFORMER,
            vec![self.column_lower.clone(), self.column_upper.clone()],
            self.copy,
            self.verbose,
        )?;

        let new_column_name = self.new_column_name.unwrap_or_else(|| {
            default_column_name(&self.column_lower, &self.column_upper, units)
        });

        Ok(DateDifferenceTransformer {
            base,
            column_lower: self.column_lower,
            column_upper: self.column_upper,
            new_column_name,
            units,
        })
    }
}

/// Output column name used when none is configured.
pub fn default_column_name(column_lower: &str, column_upper: &str, units: DateUnit) -> String {
    format!("{column_upper}_{column_lower}_datediff_{units}")
}

impl DateDifferenceTransformer {
    /// Start building a transformer over `column_lower` (earlier dates)
    /// and `column_upper` (later dates).
    pub fn builder(
        column_lower: impl Into<String>,
        column_upper: impl Into<String>,
    ) -> DateDifferenceBuilder {
        DateDifferenceBuilder {
            column_lower: column_lower.into(),
            column_upper: column_upper.into(),
            new_column_name: None,
            units: DateUnit::default().code().to_string(),
            copy: true,
            verbose: false,
        }
    }

    /// Build from untyped JSON arguments, as found in configuration files.
    ///
    /// Accepted keys: `column_lower`, `column_upper`, `new_column_name`,
    /// `units`, `copy`, `verbose`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let params = Params::new(DATE_DIFFERENCE_TRANSFORMER, value)?;
        params.reject_unknown(&[
            "column_lower",
            "column_upper",
            "new_column_name",
            "units",
            "copy",
            "verbose",
        ])?;

        let mut builder = Self::builder(
            params.required_str("column_lower")?,
            params.required_str("column_upper")?,
        );
        if let Some(name) = params.optional_str("new_column_name")? {
            builder = builder.new_column_name(name);
        }
        builder
            .units(params.str_or("units", DateUnit::default().code())?)
            .copy(params.bool_or("copy", true)?)
            .verbose(params.bool_or("verbose", false)?)
            .build()
    }

    pub fn column_lower(&self) -> &str {
        &self.column_lower
    }

    pub fn column_upper(&self) -> &str {
        &self.column_upper
    }

    /// Both source columns, lower first.
    pub fn columns(&self) -> &[String] {
        self.base.columns()
    }

    pub fn new_column_name(&self) -> &str {
        &self.new_column_name
    }

    pub fn units(&self) -> DateUnit {
        self.units
    }

    pub fn copy(&self) -> bool {
        self.base.copy()
    }

    pub fn verbose(&self) -> bool {
        self.base.verbose()
    }

    /// The shared base this transformer delegates to.
    pub fn base(&self) -> &BaseTransformer {
        &self.base
    }

    fn check_temporal(&self, frame: &DataFrame) -> Result<()> {
        for name in self.base.columns() {
            let dtype = frame.column(name)?.dtype();
            if !is_temporal(dtype) {
                return Err(TransformError::NonTemporalColumn {
                    transformer: DATE_DIFFERENCE_TRANSFORMER,
                    column: name.clone(),
                    dtype: dtype.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Transformer for DateDifferenceTransformer {
    fn name(&self) -> &'static str {
        DATE_DIFFERENCE_TRANSFORMER
    }

    fn columns(&self) -> &[String] {
        self.base.columns()
    }

    fn output_columns(&self) -> &[String] {
        std::slice::from_ref(&self.new_column_name)
    }

    fn fit(&mut self, frame: &DataFrame) -> Result<()> {
        self.base.fit(frame)
    }

    fn transform(&self, frame: &mut DataFrame) -> Result<DataFrame> {
        let _span = debug_span!(
            "date_difference",
            lower = %self.column_lower,
            upper = %self.column_upper,
            units = %self.units,
        )
        .entered();

        let mut target = self.base.transform(frame)?;
        self.check_temporal(&target)?;

        let values = date_difference(
            target.column(&self.column_lower)?,
            target.column(&self.column_upper)?,
            self.units,
            &self.new_column_name,
        )?;
        let null_count = values.null_count();
        target.with_column(values)?;

        debug!(
            column = %self.new_column_name,
            rows = target.height(),
            null_count,
            "date difference written"
        );
        Ok(target.into_frame())
    }
}

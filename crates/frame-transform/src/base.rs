//! Base transformer shared by every member of the transformer family.
//!
//! `BaseTransformer` owns the configuration every transformer has in
//! common (the columns it reads, the copy flag and the verbose flag) and
//! performs the checks that run before any transformer-specific work:
//!
//! - configured columns must be present in the frame
//! - with `copy = true` the caller's frame is never modified
//! - with `copy = false` output columns are written into the caller's frame

use std::ops::{Deref, DerefMut};

use polars::prelude::DataFrame;
use serde_json::Value;
use tracing::{debug, info};

use frame_model::{Result, TransformError};

use crate::params::Params;
use crate::transformer::Transformer;

/// Name reported by a bare `BaseTransformer`.
pub const BASE_TRANSFORMER: &str = "BaseTransformer";

/// The frame a transformer writes its output into.
///
/// Returned by [`BaseTransformer::transform`]: either an owned copy of the
/// input or a mutable borrow of the caller's frame.
#[derive(Debug)]
pub enum FrameTarget<'a> {
    /// A copy; the caller's frame is left untouched.
    Copied(DataFrame),
    /// The caller's own frame.
    InPlace(&'a mut DataFrame),
}

impl FrameTarget<'_> {
    /// True when writes will not reach the caller's frame.
    pub fn is_copy(&self) -> bool {
        matches!(self, Self::Copied(_))
    }

    /// Consume the target, returning the resulting frame.
    ///
    /// For an in-place target this is a shallow clone of the caller's
    /// frame, which already holds every write made through the target.
    pub fn into_frame(self) -> DataFrame {
        match self {
            Self::Copied(frame) => frame,
            Self::InPlace(frame) => frame.clone(),
        }
    }
}

impl Deref for FrameTarget<'_> {
    type Target = DataFrame;

    fn deref(&self) -> &DataFrame {
        match self {
            Self::Copied(frame) => frame,
            Self::InPlace(frame) => &**frame,
        }
    }
}

impl DerefMut for FrameTarget<'_> {
    fn deref_mut(&mut self) -> &mut DataFrame {
        match self {
            Self::Copied(frame) => frame,
            Self::InPlace(frame) => &mut **frame,
        }
    }
}

/// Configuration and pre-checks common to all transformers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseTransformer {
    name: &'static str,
    columns: Vec<String>,
    copy: bool,
    verbose: bool,
}

impl BaseTransformer {
    /// Create a base transformer over `columns`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidColumns`] if `columns` is empty or
    /// contains an empty name.
    pub fn new(columns: Vec<String>, copy: bool, verbose: bool) -> Result<Self> {
        Self::named(BASE_TRANSFORMER, columns, copy, verbose)
    }

    /// Create a base on behalf of a concrete transformer, so errors and
    /// log lines carry that transformer's name.
    pub fn named(
        name: &'static str,
        columns: Vec<String>,
        copy: bool,
        verbose: bool,
    ) -> Result<Self> {
        if verbose {
            info!(transformer = name, "BaseTransformer.init() called");
        }

        if columns.is_empty() {
            return Err(TransformError::InvalidColumns {
                transformer: name,
                reason: "columns must contain at least one column name".to_string(),
            });
        }
        if columns.iter().any(String::is_empty) {
            return Err(TransformError::InvalidColumns {
                transformer: name,
                reason: "column names must not be empty".to_string(),
            });
        }

        Ok(Self {
            name,
            columns,
            copy,
            verbose,
        })
    }

    /// Build a bare base transformer from JSON parameters.
    ///
    /// `columns` may be a single string or a list of strings.
    pub fn from_value(value: &Value) -> Result<Self> {
        let params = Params::new(BASE_TRANSFORMER, value)?;
        params.reject_unknown(&["columns", "copy", "verbose"])?;
        let columns = params.required_str_list("columns")?;
        let copy = params.bool_or("copy", true)?;
        let verbose = params.bool_or("verbose", false)?;
        Self::new(columns, copy, verbose)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn copy(&self) -> bool {
        self.copy
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Check that every configured column is present in `frame`.
    pub fn columns_check(&self, frame: &DataFrame) -> Result<()> {
        let missing: Vec<String> = self
            .columns
            .iter()
            .filter(|column| frame.get_column_index(column.as_str()).is_none())
            .cloned()
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(TransformError::MissingColumns {
                transformer: self.name,
                columns: missing,
            })
        }
    }

    /// Validate that `frame` can be fitted on.
    ///
    /// Nothing is learned here; transformers without learned state use
    /// this as their whole `fit`.
    pub fn fit(&self, frame: &DataFrame) -> Result<()> {
        if self.verbose {
            info!(transformer = self.name, "BaseTransformer.fit() called");
        }

        if frame.height() == 0 {
            return Err(TransformError::EmptyFrame {
                transformer: self.name,
            });
        }
        self.columns_check(frame)
    }

    /// Run the shared pre-checks and hand back the frame to write into.
    ///
    /// With `copy = true` the returned target owns a copy of `frame`;
    /// otherwise it borrows `frame` so writes land in the caller's frame.
    pub fn transform<'a>(&self, frame: &'a mut DataFrame) -> Result<FrameTarget<'a>> {
        if self.verbose {
            info!(transformer = self.name, "BaseTransformer.transform() called");
        }
        debug!(
            transformer = self.name,
            rows = frame.height(),
            copy = self.copy,
            "transform called"
        );

        self.columns_check(frame)?;

        if self.copy {
            Ok(FrameTarget::Copied(frame.clone()))
        } else {
            Ok(FrameTarget::InPlace(frame))
        }
    }
}

impl Transformer for BaseTransformer {
    fn name(&self) -> &'static str {
        self.name
    }

    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn fit(&mut self, frame: &DataFrame) -> Result<()> {
        BaseTransformer::fit(self, frame)
    }

    fn transform(&self, frame: &mut DataFrame) -> Result<DataFrame> {
        Ok(BaseTransformer::transform(self, frame)?.into_frame())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, DataType, IntoColumn, NamedFrom, Series};

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("a".into(), vec![1i64, 2, 3]).into_column(),
            Series::new("b".into(), vec!["x", "y", "z"]).into_column(),
        ])
        .unwrap()
    }

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn test_empty_columns_rejected() {
        let err = BaseTransformer::new(Vec::new(), true, false).unwrap_err();
        assert!(matches!(err, TransformError::InvalidColumns { .. }));
        assert!(err.is_value_error());
    }

    #[test]
    fn test_empty_column_name_rejected() {
        let err = BaseTransformer::new(columns(&["a", ""]), true, false).unwrap_err();
        assert!(matches!(err, TransformError::InvalidColumns { .. }));
    }

    #[test]
    fn test_columns_check_reports_all_missing() {
        let base = BaseTransformer::new(columns(&["a", "c", "d"]), true, false).unwrap();
        let err = base.columns_check(&frame()).unwrap_err();
        match err {
            TransformError::MissingColumns {
                transformer,
                columns,
            } => {
                assert_eq!(transformer, BASE_TRANSFORMER);
                assert_eq!(columns, vec!["c", "d"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_named_base_reports_owner() {
        let base = BaseTransformer::named("Owner", columns(&["zz"]), true, false).unwrap();
        let err = base.columns_check(&frame()).unwrap_err();
        assert!(err.to_string().starts_with("Owner: "));
    }

    #[test]
    fn test_fit_rejects_empty_frame() {
        let base = BaseTransformer::new(columns(&["a"]), true, false).unwrap();
        let empty = DataFrame::new(vec![Column::new_empty("a".into(), &DataType::Int64)]).unwrap();
        let err = base.fit(&empty).unwrap_err();
        assert!(matches!(err, TransformError::EmptyFrame { .. }));
        assert!(base.fit(&frame()).is_ok());
    }

    #[test]
    fn test_transform_copy_returns_owned() {
        let base = BaseTransformer::new(columns(&["a"]), true, false).unwrap();
        let mut df = frame();
        let target = base.transform(&mut df).unwrap();
        assert!(target.is_copy());
        assert_eq!(target.height(), 3);
    }

    #[test]
    fn test_transform_in_place_writes_reach_caller() {
        let base = BaseTransformer::new(columns(&["a"]), false, false).unwrap();
        let mut df = frame();
        {
            let mut target = base.transform(&mut df).unwrap();
            assert!(!target.is_copy());
            target
                .with_column(Series::new("c".into(), vec![0.5f64, 1.5, 2.5]))
                .unwrap();
        }
        assert_eq!(df.width(), 3);
    }

    #[test]
    fn test_transform_copy_leaves_caller_untouched() {
        let base = BaseTransformer::new(columns(&["a"]), true, false).unwrap();
        let mut df = frame();
        let out = {
            let mut target = base.transform(&mut df).unwrap();
            target
                .with_column(Series::new("c".into(), vec![0.5f64, 1.5, 2.5]))
                .unwrap();
            target.into_frame()
        };
        assert_eq!(df.width(), 2);
        assert_eq!(out.width(), 3);
    }

    #[test]
    fn test_from_value_accepts_single_column_string() {
        let base = BaseTransformer::from_value(&serde_json::json!({"columns": "a"})).unwrap();
        assert_eq!(base.columns(), ["a".to_string()]);
        assert!(base.copy());
        assert!(!base.verbose());
    }

    #[test]
    fn test_from_value_rejects_non_bool_copy() {
        let err =
            BaseTransformer::from_value(&serde_json::json!({"columns": ["a"], "copy": "yes"}))
                .unwrap_err();
        assert_eq!(err.to_string(), "BaseTransformer: copy must be a bool");
    }
}

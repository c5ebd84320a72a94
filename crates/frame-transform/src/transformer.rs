//! The contract shared by every transformer.

use std::fmt;

use polars::prelude::DataFrame;

use frame_model::Result;

/// A dataframe preprocessing step with a `fit`/`transform` lifecycle.
///
/// `transform` takes the caller's frame mutably: transformers configured
/// with `copy = false` write their output columns into it, while
/// `copy = true` transformers leave it untouched. Either way the
/// resulting frame is returned.
pub trait Transformer: fmt::Debug {
    /// Type name used in errors, logs and configuration files.
    fn name(&self) -> &'static str;

    /// Columns this transformer reads.
    fn columns(&self) -> &[String];

    /// Columns this transformer writes, whether new or overwritten.
    fn output_columns(&self) -> &[String] {
        &[]
    }

    /// Learn whatever the transformer needs from `frame`.
    fn fit(&mut self, frame: &DataFrame) -> Result<()>;

    /// Apply the transformer to `frame`.
    fn transform(&self, frame: &mut DataFrame) -> Result<DataFrame>;

    fn fit_transform(&mut self, frame: &mut DataFrame) -> Result<DataFrame> {
        self.fit(frame)?;
        self.transform(frame)
    }
}

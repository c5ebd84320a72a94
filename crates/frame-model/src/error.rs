//! Error types for dataframe transformers.

use thiserror::Error;

use crate::units::DateUnit;

/// A unit code outside the accepted set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("units must be one of {}, got {value}", DateUnit::accepted_codes())]
pub struct UnitParseError {
    pub value: String,
}

/// Errors raised while constructing or applying a transformer.
///
/// Messages are prefixed with the name of the transformer that raised them.
#[derive(Debug, Error)]
pub enum TransformError {
    // === Construction Errors ===
    /// An argument has the wrong type (only reachable through dynamic construction).
    #[error("{transformer}: {field} must be a {expected}")]
    Type {
        transformer: &'static str,
        field: String,
        expected: &'static str,
    },

    /// A required argument was not supplied.
    #[error("{transformer}: missing required argument '{field}'")]
    MissingArgument {
        transformer: &'static str,
        field: String,
    },

    /// An argument the transformer does not accept.
    #[error("{transformer}: unexpected argument '{field}'")]
    UnexpectedArgument {
        transformer: &'static str,
        field: String,
    },

    /// The units code is not one of the accepted codes.
    #[error("{transformer}: {source}")]
    InvalidUnits {
        transformer: &'static str,
        #[source]
        source: UnitParseError,
    },

    /// The configured column list is unusable.
    #[error("{transformer}: {reason}")]
    InvalidColumns {
        transformer: &'static str,
        reason: String,
    },

    // === Frame Errors ===
    /// Configured columns are absent from the frame.
    #[error("{transformer}: columns not found in frame: {}", .columns.join(", "))]
    MissingColumns {
        transformer: &'static str,
        columns: Vec<String>,
    },

    /// A source column does not hold dates or datetimes.
    #[error("{transformer}: column '{column}' must be a date or datetime, got {dtype}")]
    NonTemporalColumn {
        transformer: &'static str,
        column: String,
        dtype: String,
    },

    /// `fit` was called on a frame with no rows.
    #[error("{transformer}: cannot fit on a frame with no rows")]
    EmptyFrame { transformer: &'static str },

    // === Configuration Errors ===
    /// A pipeline step names a transformer that does not exist.
    #[error("unknown transformer '{name}'")]
    UnknownTransformer { name: String },

    /// A configuration document could not be parsed.
    #[error("invalid transformer configuration: {message}")]
    Config { message: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl TransformError {
    /// True for construction errors caused by an argument of the wrong type.
    ///
    /// Errors raised while fitting or transforming a frame are neither type
    /// nor value errors.
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            Self::Type { .. } | Self::MissingArgument { .. } | Self::UnexpectedArgument { .. }
        )
    }

    /// True for construction errors caused by an argument with the right
    /// type but a bad value.
    pub fn is_value_error(&self) -> bool {
        matches!(self, Self::InvalidUnits { .. } | Self::InvalidColumns { .. })
    }
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TransformError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config {
            message: err.to_string(),
        }
    }
}

/// Result type for transformer operations.
pub type Result<T> = std::result::Result<T, TransformError>;

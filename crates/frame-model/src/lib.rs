//! Shared types for dataframe preprocessing transformers.
//!
//! - **units**: time units used to scale durations into plain numbers
//! - **error**: the error type shared by every transformer
//! - **config**: serde-facing pipeline configuration

pub mod config;
pub mod error;
pub mod units;

pub use config::{PipelineConfig, TransformerSpec};
pub use error::{Result, TransformError, UnitParseError};
pub use units::DateUnit;

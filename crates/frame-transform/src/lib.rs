//! Dataframe preprocessing transformers.
//!
//! This crate provides the transformer family and its shared plumbing:
//!
//! - **base**: `BaseTransformer`, column checks and copy-or-mutate semantics
//! - **transformer**: the `Transformer` trait every member implements
//! - **dates**: `DateDifferenceTransformer`
//! - **temporal**: vectorised date arithmetic over polars columns
//! - **pipeline**: ordered chains of transformers built from configuration

pub mod base;
pub mod dates;
mod params;
pub mod pipeline;
pub mod temporal;
pub mod transformer;

pub use base::{BASE_TRANSFORMER, BaseTransformer, FrameTarget};
pub use dates::{DATE_DIFFERENCE_TRANSFORMER, DateDifferenceBuilder, DateDifferenceTransformer};
pub use pipeline::{Pipeline, build_transformer};
pub use transformer::Transformer;

// Re-export shared model types for downstream crates
pub use frame_model::{DateUnit, PipelineConfig, Result, TransformError, TransformerSpec};

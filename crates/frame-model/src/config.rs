//! Pipeline configuration documents.
//!
//! A pipeline is described as JSON:
//!
//! ```json
//! {
//!   "steps": [
//!     { "transformer": "DateDifferenceTransformer", "column_lower": "a", "column_upper": "b", "units": "h" }
//!   ]
//! }
//! ```
//!
//! Step parameters are kept as raw JSON so each transformer can validate
//! its own arguments and report type errors by field name.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// One step of a pipeline: a transformer name plus its raw arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformerSpec {
    /// Transformer type name, e.g. `DateDifferenceTransformer`.
    pub transformer: String,
    /// Every other key of the step object.
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

impl TransformerSpec {
    pub fn new(transformer: impl Into<String>) -> Self {
        Self {
            transformer: transformer.into(),
            params: Map::new(),
        }
    }

    /// Set a parameter, replacing any previous value.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Parameters as a JSON object value.
    pub fn params_value(&self) -> Value {
        Value::Object(self.params.clone())
    }
}

/// An ordered list of transformer steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub steps: Vec<TransformerSpec>,
}

impl PipelineConfig {
    pub fn new(steps: Vec<TransformerSpec>) -> Self {
        Self { steps }
    }

    /// Parse a configuration document.
    ///
    /// Accepts either `{"steps": [...]}` or a bare array of steps.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        let config = match value {
            Value::Array(_) => Self {
                steps: serde_json::from_value(value)?,
            },
            other => serde_json::from_value(other)?,
        };
        Ok(config)
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

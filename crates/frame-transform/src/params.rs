//! Typed access to JSON transformer arguments.
//!
//! Configuration files carry arguments as untyped JSON. These helpers
//! pull each argument out with the type the transformer expects and
//! report mismatches as type errors naming the offending field.

use serde_json::{Map, Value};

use frame_model::{Result, TransformError};

pub(crate) struct Params<'a> {
    transformer: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> Params<'a> {
    pub(crate) fn new(transformer: &'static str, value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self { transformer, map }),
            other => Err(TransformError::Config {
                message: format!(
                    "{transformer}: arguments must be a JSON object, got {}",
                    json_type(other)
                ),
            }),
        }
    }

    /// Fail on any key outside `allowed`.
    pub(crate) fn reject_unknown(&self, allowed: &[&str]) -> Result<()> {
        match self.map.keys().find(|key| !allowed.contains(&key.as_str())) {
            Some(key) => Err(TransformError::UnexpectedArgument {
                transformer: self.transformer,
                field: key.clone(),
            }),
            None => Ok(()),
        }
    }

    pub(crate) fn required_str(&self, field: &str) -> Result<String> {
        match self.map.get(field) {
            None => Err(TransformError::MissingArgument {
                transformer: self.transformer,
                field: field.to_string(),
            }),
            Some(value) => self.as_str(field, value),
        }
    }

    /// An optional string; absent and `null` both mean "not given".
    pub(crate) fn optional_str(&self, field: &str) -> Result<Option<String>> {
        match self.map.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => self.as_str(field, value).map(Some),
        }
    }

    /// A string with a default; an explicit `null` is a type error.
    pub(crate) fn str_or(&self, field: &str, default: &str) -> Result<String> {
        match self.map.get(field) {
            None => Ok(default.to_string()),
            Some(value) => self.as_str(field, value),
        }
    }

    pub(crate) fn bool_or(&self, field: &str, default: bool) -> Result<bool> {
        match self.map.get(field) {
            None => Ok(default),
            Some(Value::Bool(flag)) => Ok(*flag),
            Some(_) => Err(self.type_error(field, "bool")),
        }
    }

    /// A string or list of strings, normalised to a list.
    pub(crate) fn required_str_list(&self, field: &str) -> Result<Vec<String>> {
        match self.map.get(field) {
            None => Err(TransformError::MissingArgument {
                transformer: self.transformer,
                field: field.to_string(),
            }),
            Some(Value::String(single)) => Ok(vec![single.clone()]),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(name) => Ok(name.clone()),
                    _ => Err(self.type_error(field, "str or list of str")),
                })
                .collect(),
            Some(_) => Err(self.type_error(field, "str or list of str")),
        }
    }

    fn as_str(&self, field: &str, value: &Value) -> Result<String> {
        match value {
            Value::String(text) => Ok(text.clone()),
            _ => Err(self.type_error(field, "str")),
        }
    }

    fn type_error(&self, field: &str, expected: &'static str) -> TransformError {
        TransformError::Type {
            transformer: self.transformer,
            field: field.to_string(),
            expected,
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

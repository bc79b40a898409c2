//! Typed access to tool invocation arguments.

use crate::error::DetourError;

/// Wrapper around the parsed argument object of a tool invocation.
///
/// The agent guarantees this is always a JSON object: a blob that failed to
/// parse arrives as `{"input": <raw text>}`.
#[derive(Debug, Clone)]
pub struct ToolArguments {
    value: serde_json::Value,
}

impl ToolArguments {
    pub fn new(value: serde_json::Value) -> Self {
        Self { value }
    }

    /// The raw JSON value.
    pub fn raw(&self) -> &serde_json::Value {
        &self.value
    }

    /// Get a required string argument.
    pub fn get_str(&self, key: &str) -> Result<&str, DetourError> {
        self.value
            .get(key)
            .and_then(|v| v.as_str())
            .ok_or_else(|| DetourError::InvalidArgument(format!("missing string argument: {key}")))
    }

    /// Get an optional string argument.
    pub fn get_str_opt(&self, key: &str) -> Option<&str> {
        self.value.get(key).and_then(|v| v.as_str())
    }

    /// Get a required integer argument.
    pub fn get_i64(&self, key: &str) -> Result<i64, DetourError> {
        self.value
            .get(key)
            .and_then(|v| v.as_i64())
            .ok_or_else(|| DetourError::InvalidArgument(format!("missing integer argument: {key}")))
    }

    /// Get a required float argument.
    pub fn get_f64(&self, key: &str) -> Result<f64, DetourError> {
        self.value
            .get(key)
            .and_then(|v| v.as_f64())
            .ok_or_else(|| DetourError::InvalidArgument(format!("missing float argument: {key}")))
    }

    /// Get a required boolean argument.
    pub fn get_bool(&self, key: &str) -> Result<bool, DetourError> {
        self.value
            .get(key)
            .and_then(|v| v.as_bool())
            .ok_or_else(|| DetourError::InvalidArgument(format!("missing boolean argument: {key}")))
    }

    /// Deserialize the entire argument object into a typed struct.
    pub fn deserialize<T: serde::de::DeserializeOwned>(&self) -> Result<T, DetourError> {
        serde_json::from_value(self.value.clone()).map_err(|e| {
            DetourError::InvalidArgument(format!("failed to deserialize arguments: {e}"))
        })
    }
}

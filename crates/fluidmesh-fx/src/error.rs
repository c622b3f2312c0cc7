use std::fmt;

/// A rejected [`MeshGradientConfig`](crate::MeshGradientConfig) field.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    /// Dotted path of the offending field, e.g. `layers[2].radius_scale`.
    pub field: String,
    pub message: String,
}

impl ConfigError {
    pub(crate) fn new(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self { field: field.into(), message: msg.into() }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid mesh gradient config: {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

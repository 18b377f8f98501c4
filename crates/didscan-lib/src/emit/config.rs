//! Configuration types for descriptor emission.

use didscan_core::Colors;

/// Type written wherever a source type fell outside the translation table.
pub const DEFAULT_PLACEHOLDER: &str = "text";

/// Configuration for descriptor emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitConfig {
    /// IDL type rendered for opaque leaves
    pub(crate) placeholder: String,
    /// Color configuration for output
    pub(crate) colors: Colors,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            colors: Colors::OFF,
        }
    }
}

impl EmitConfig {
    /// Create a new EmitConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the IDL type used for unrecognized source types.
    pub fn placeholder(mut self, value: impl Into<String>) -> Self {
        self.placeholder = value.into();
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn placeholder_type(&self) -> &str {
        &self.placeholder
    }

    pub fn colors(&self) -> Colors {
        self.colors
    }
}

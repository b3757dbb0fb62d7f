// File: src/error.rs
// Purpose: Error type shared by template parsing, generator construction and URL binding

use thiserror::Error;

/// Errors raised while building a URL helper or generating a URL with it.
///
/// Construction errors (`EmptyTemplate`, `InvalidDefaults`) are returned when
/// the helper is created. Binding errors (`MissingParams`, `ExtraParams`,
/// `ProtocolWithoutHost`) are returned by the call that triggers them, and
/// carry the template plus every offending name or value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("Must provide a non-empty string as a URL spec")]
    EmptyTemplate,

    #[error("Must provide an object for defaults, got {found}")]
    InvalidDefaults { found: String },

    #[error("Missing [{}] for spec '{template}'", .names.join(", "))]
    MissingParams { template: String, names: Vec<String> },

    #[error("Extra params [{}] for spec '{template}'", .values.join(", "))]
    ExtraParams { template: String, values: Vec<String> },

    #[error("Can't provide a protocol with no host for spec '{template}'")]
    ProtocolWithoutHost { template: String },

    #[error("No route named '{name}'")]
    UnknownRoute { name: String },
}

impl UrlError {
    /// True for errors raised when a helper is created rather than called
    pub fn is_construction_error(&self) -> bool {
        matches!(self, UrlError::EmptyTemplate | UrlError::InvalidDefaults { .. })
    }
}

pub type Result<T> = std::result::Result<T, UrlError>;

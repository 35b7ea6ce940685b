//! Error types.
//!
//! Rendering itself never fails. [`StyleError`] covers misuse of the
//! shortcut dispatch, strict name parsing, and stylesheet loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by [`Styles`](crate::Styles) and the style types.
#[derive(Debug, Error)]
pub enum StyleError {
    /// A shortcut was invoked for a name that isn't a registered style.
    #[error("unknown style method '{name}'")]
    UnknownMethod { name: String },

    /// A shortcut was invoked without the text to style.
    #[error("style method '{name}' requires a text argument")]
    MissingArgument { name: String },

    /// A shortcut was invoked with more than one text argument.
    #[error("style method '{name}' takes one text argument, got {count}")]
    TooManyArguments { name: String, count: usize },

    /// Strict color parsing failed.
    #[error("unknown color name: {0}")]
    UnknownColor(String),

    /// Strict attribute parsing failed.
    #[error("unknown style attribute: {0}")]
    UnknownAttribute(String),

    /// YAML stylesheet parse error.
    #[error("failed to parse YAML stylesheet: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON stylesheet parse error.
    #[error("failed to parse JSON stylesheet: {0}")]
    Json(#[from] serde_json::Error),

    /// The stylesheet file could not be read.
    #[error("failed to read stylesheet {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stylesheet file extension is neither YAML nor JSON.
    #[error("unsupported stylesheet format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

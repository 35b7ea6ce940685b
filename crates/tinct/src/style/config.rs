//! The configuration-record form of a style.
//!
//! [`StyleConfig`] mirrors the `{fg, bg, options, extra}` record accepted by
//! [`Styles::add_config`](crate::Styles::add_config) and by stylesheet files.
//! Every field is optional when deserializing.
//!
//! ```yaml
//! warning:
//!   fg: black
//!   bg: yellow
//! notice:
//!   options: [bold, underscore]
//! darkGray:
//!   fg: black
//!   extra: true
//! ```

use serde::{Deserialize, Serialize};

use super::definition::StyleDef;

/// A style described by raw names.
///
/// Names are resolved when converted into a [`StyleDef`]; unknown ones are
/// dropped at that point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Foreground color name. Empty means unset.
    pub fg: String,
    /// Background color name. Empty means unset.
    pub bg: String,
    /// Attribute names.
    pub options: Vec<String>,
    /// Use the extended (bright) palette.
    pub extra: bool,
}

impl StyleConfig {
    /// Shorthand for a foreground-only record.
    pub fn fg(name: impl Into<String>) -> Self {
        Self {
            fg: name.into(),
            ..Self::default()
        }
    }
}

impl From<&StyleConfig> for StyleDef {
    fn from(config: &StyleConfig) -> Self {
        StyleDef::make(&config.fg, &config.bg, config.options.as_slice(), config.extra)
    }
}

impl From<StyleConfig> for StyleDef {
    fn from(config: StyleConfig) -> Self {
        StyleDef::from(&config)
    }
}

//! Loading styles from YAML or JSON stylesheets.
//!
//! A stylesheet maps style names to either a [`StyleConfig`] record or an
//! inline style string:
//!
//! ```yaml
//! title:
//!   fg: cyan
//!   options: [bold]
//! badge:
//!   fg: white
//!   bg: blue
//!   extra: true
//! muted: "fg=black;extra=true"
//! ```
//!
//! Entries are added on top of the existing registry, so a sheet can
//! override any default style.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::StyleError;
use crate::style::{StyleConfig, StyleDef};
use crate::styles::Styles;

/// One stylesheet entry.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StyleEntry {
    Inline(String),
    Record(StyleConfig),
}

impl From<StyleEntry> for StyleDef {
    fn from(entry: StyleEntry) -> Self {
        match entry {
            StyleEntry::Inline(spec) => StyleDef::parse_inline(&spec),
            StyleEntry::Record(config) => config.into(),
        }
    }
}

type Sheet = BTreeMap<String, StyleEntry>;

impl Styles {
    /// Creates a registry with the default palette plus the styles in `yaml`.
    ///
    /// ```rust
    /// use tinct::Styles;
    ///
    /// let styles = Styles::from_yaml(r#"
    /// title:
    ///   fg: cyan
    ///   options: [bold]
    /// muted: "fg=black;extra=true"
    /// "#).unwrap();
    ///
    /// assert_eq!(styles.get_style("title").unwrap().render(), "1;36");
    /// assert_eq!(styles.get_style("muted").unwrap().render(), "90");
    /// assert!(styles.has_style("error"));
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, StyleError> {
        let mut styles = Styles::new();
        styles.extend_from_yaml(yaml)?;
        Ok(styles)
    }

    /// Creates a registry with the default palette plus the styles in the
    /// file at `path`. The format is picked from the extension: `yaml`,
    /// `yml` or `json`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StyleError> {
        let mut styles = Styles::new();
        styles.extend_from_file(path)?;
        Ok(styles)
    }

    /// Adds every style in a YAML stylesheet.
    pub fn extend_from_yaml(&mut self, yaml: &str) -> Result<&mut Self, StyleError> {
        let sheet: Sheet = serde_yaml::from_str(yaml)?;
        Ok(self.extend_from_sheet(sheet))
    }

    /// Adds every style in a JSON stylesheet.
    pub fn extend_from_json(&mut self, json: &str) -> Result<&mut Self, StyleError> {
        let sheet: Sheet = serde_json::from_str(json)?;
        Ok(self.extend_from_sheet(sheet))
    }

    /// Adds every style in the stylesheet file at `path`.
    pub fn extend_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<&mut Self, StyleError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let read = || {
            std::fs::read_to_string(path).map_err(|source| StyleError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        match extension.as_deref() {
            Some("yaml" | "yml") => self.extend_from_yaml(&read()?),
            Some("json") => self.extend_from_json(&read()?),
            _ => Err(StyleError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    fn extend_from_sheet(&mut self, sheet: Sheet) -> &mut Self {
        log::debug!("loading {} style(s) from stylesheet", sheet.len());
        for (name, entry) in sheet {
            self.add(&name, entry);
        }
        self
    }
}

//! Style descriptors.
//!
//! A [`StyleDef`] pairs an optional foreground and background [`Color`] with a
//! set of [`Attribute`]s and a flag selecting the extended (bright) palette.
//! It renders to the parameter list of an SGR escape:
//!
//! ```rust
//! use tinct::{Attribute, Color, StyleDef};
//!
//! let def = StyleDef::new()
//!     .fg(Color::Red)
//!     .bg(Color::White)
//!     .attr(Attribute::Underscore)
//!     .attr(Attribute::Bold);
//! assert_eq!(def.render(), "1;4;31;47");
//!
//! assert_eq!(StyleDef::new().render(), "");
//! ```
//!
//! # Inline Syntax
//!
//! [`StyleDef::parse_inline`] reads the `key=value;key=value` form used by
//! ad-hoc tags such as `<fg=red;options=bold>`. Recognized keys are `fg`,
//! `bg`, `options` (comma-separated attributes) and `extra`. Parsing is
//! best-effort: segments that don't make sense are skipped.

use std::collections::BTreeSet;
use std::fmt;

use super::attribute::Attribute;
use super::color::Color;
use super::config::StyleConfig;

/// An immutable description of colors and attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StyleDef {
    fg: Option<Color>,
    bg: Option<Color>,
    attributes: BTreeSet<Attribute>,
    extended: bool,
}

impl StyleDef {
    /// Creates an empty descriptor that renders to no escape at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the foreground color.
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Sets the background color.
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Adds an attribute. Adding one twice has no further effect.
    pub fn attr(mut self, attribute: Attribute) -> Self {
        self.attributes.insert(attribute);
        self
    }

    /// Selects the extended (bright) color codes.
    pub fn extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    /// Builds a descriptor from raw names.
    ///
    /// Empty names mean "not set". Unknown color or attribute names are
    /// accepted but contribute nothing to the rendered output.
    pub fn make<S: AsRef<str>>(fg: &str, bg: &str, options: &[S], extended: bool) -> Self {
        let mut def = StyleDef::new().extended(extended);
        def.fg = lookup_color(fg);
        def.bg = lookup_color(bg);
        for option in options {
            def.insert_attribute(option.as_ref());
        }
        def
    }

    /// Parses the inline `key=value;key=value` syntax.
    ///
    /// ```rust
    /// use tinct::StyleDef;
    ///
    /// let def = StyleDef::parse_inline("fg=red;options=bold,underscore");
    /// assert_eq!(def.render(), "1;4;31");
    ///
    /// // Broken segments are skipped, never fatal
    /// let def = StyleDef::parse_inline("fg=green;oops;size=12");
    /// assert_eq!(def.render(), "32");
    /// ```
    pub fn parse_inline(spec: &str) -> Self {
        let mut def = StyleDef::new();

        for segment in spec.split(';').map(str::trim) {
            if segment.is_empty() {
                continue;
            }
            let Some((key, value)) = segment.split_once('=') else {
                log::debug!("ignoring inline style segment without '=': {:?}", segment);
                continue;
            };
            match key.trim() {
                "fg" => def.fg = lookup_color(value),
                "bg" => def.bg = lookup_color(value),
                "options" => {
                    for option in value.split(',') {
                        def.insert_attribute(option);
                    }
                }
                "extra" => def.extended = parse_flag(value),
                other => {
                    log::debug!("ignoring unknown inline style key {:?} in {:?}", other, spec);
                }
            }
        }

        def
    }

    fn insert_attribute(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        match Attribute::from_name(name) {
            Some(attribute) => {
                self.attributes.insert(attribute);
            }
            None => log::debug!("ignoring unknown style attribute {:?}", name),
        }
    }

    pub fn foreground(&self) -> Option<Color> {
        self.fg
    }

    pub fn background(&self) -> Option<Color> {
        self.bg
    }

    pub fn attributes(&self) -> &BTreeSet<Attribute> {
        &self.attributes
    }

    pub fn is_extended(&self) -> bool {
        self.extended
    }

    /// Returns true if rendering would produce an empty parameter list.
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attributes.is_empty()
    }

    /// Renders the SGR parameter list: attributes, then foreground, then
    /// background, separated by `;`.
    pub fn render(&self) -> String {
        let mut codes: Vec<String> = self
            .attributes
            .iter()
            .map(|attribute| attribute.code().to_string())
            .collect();
        if let Some(fg) = self.fg {
            codes.push(fg.fg_code(self.extended).to_string());
        }
        if let Some(bg) = self.bg {
            codes.push(bg.bg_code(self.extended).to_string());
        }
        codes.join(";")
    }

    /// Converts back to the configuration-record form.
    pub fn to_config(&self) -> StyleConfig {
        StyleConfig {
            fg: self.fg.map(|c| c.name().to_string()).unwrap_or_default(),
            bg: self.bg.map(|c| c.name().to_string()).unwrap_or_default(),
            options: self
                .attributes
                .iter()
                .map(|a| a.name().to_string())
                .collect(),
            extra: self.extended,
        }
    }
}

impl fmt::Display for StyleDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn lookup_color(name: &str) -> Option<Color> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let color = Color::from_name(name);
    if color.is_none() {
        log::debug!("ignoring unknown color {:?}", name);
    }
    color
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "1" | "true" | "yes" | "on"
    )
}

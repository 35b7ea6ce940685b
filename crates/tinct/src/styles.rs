//! The style engine: a registry of named styles and the tag renderer.
//!
//! [`Styles`] maps names to [`StyleDef`]s and renders text containing
//! `<name>content</name>` markers:
//!
//! - a registered name renders with its descriptor,
//! - a name containing `=` is read as an inline style (`<fg=red;options=bold>`),
//! - any other name is left exactly as written.
//!
//! When colour is off (the terminal can't show it, or the no-colour switch
//! is set) every marker is stripped instead.
//!
//! # Example
//!
//! ```rust
//! use tinct::{NoColor, OutputMode, StyleConfig, Styles};
//!
//! let mut styles = Styles::new()
//!     .with_output(OutputMode::Term)
//!     .with_no_color(NoColor::new(false));
//!
//! styles.add_config("accent", StyleConfig::fg("magenta"));
//!
//! assert_eq!(styles.apply("error", "boom"), "\x1b[30;41mboom\x1b[0m");
//! assert_eq!(styles.format("<accent>hi</accent>"), "\x1b[35mhi\x1b[0m");
//! assert_eq!(styles.format("<nope>hi</nope>"), "<nope>hi</nope>");
//! ```

use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

use tinct_tags::{
    is_valid_tag_name, strip_tags, validate, TagParser, UnknownTagBehavior, UnknownTagErrors,
};

use crate::error::StyleError;
use crate::output::{ColorSupport, OutputMode};
use crate::style::{Attribute, Color, StyleConfig, StyleDef};
use crate::switch::NoColor;
use crate::wrap_tag;

/// A registry of named styles plus the rendering configuration.
///
/// Registries are independent: adding to one never affects another. The
/// no-colour switch is shared with the process-wide flag unless a separate
/// one is injected with [`with_no_color`](Styles::with_no_color).
#[derive(Clone)]
pub struct Styles {
    styles: HashMap<String, StyleDef>,
    no_color: NoColor,
    support: Arc<dyn ColorSupport>,
    unknown_behavior: UnknownTagBehavior,
}

impl Default for Styles {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Styles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Styles")
            .field("styles", &self.styles)
            .field("no_color", &self.no_color.get())
            .field("unknown_behavior", &self.unknown_behavior)
            .finish_non_exhaustive()
    }
}

impl Styles {
    /// Creates a registry seeded with the default palette.
    ///
    /// Seeded names: `normal`, `faint`, `faintly`, `bold`, `info`, `note`,
    /// `primary`, `success`, `notice`, `warning`, `comment`, `question`,
    /// `danger`, `error`, `underline`, `blue`, `cyan`, `magenta`, `mga`,
    /// `red`, `yellow` and `darkGray`.
    pub fn new() -> Self {
        let mut styles = Self::empty();
        styles.load_default_styles();
        styles
    }

    /// Creates a registry with no styles at all.
    pub fn empty() -> Self {
        Self {
            styles: HashMap::new(),
            no_color: NoColor::global(),
            support: Arc::new(OutputMode::Auto),
            unknown_behavior: UnknownTagBehavior::default(),
        }
    }

    fn load_default_styles(&mut self) {
        self.add("normal", StyleDef::new().fg(Color::Normal))
            .add("faint", StyleDef::new().fg(Color::Normal).attr(Attribute::Italic))
            .add("faintly", StyleDef::new().fg(Color::Normal).attr(Attribute::Italic))
            .add("bold", StyleDef::new().attr(Attribute::Bold))
            .add("info", StyleDef::new().fg(Color::Green))
            .add("note", StyleDef::new().fg(Color::Cyan).attr(Attribute::Bold))
            .add("primary", StyleDef::new().fg(Color::Yellow).attr(Attribute::Bold))
            .add("success", StyleDef::new().fg(Color::Green).attr(Attribute::Bold))
            .add(
                "notice",
                StyleDef::new()
                    .attr(Attribute::Bold)
                    .attr(Attribute::Underscore),
            )
            .add("warning", StyleDef::new().fg(Color::Black).bg(Color::Yellow))
            .add("comment", StyleDef::new().fg(Color::Yellow))
            .add("question", StyleDef::new().fg(Color::Black).bg(Color::Cyan))
            .add("danger", StyleDef::new().fg(Color::Red))
            .add("error", StyleDef::new().fg(Color::Black).bg(Color::Red))
            .add(
                "underline",
                StyleDef::new().fg(Color::Normal).attr(Attribute::Underscore),
            )
            .add("blue", StyleDef::new().fg(Color::Blue))
            .add("cyan", StyleDef::new().fg(Color::Cyan))
            .add("magenta", StyleDef::new().fg(Color::Magenta))
            .add("mga", StyleDef::new().fg(Color::Magenta))
            .add("red", StyleDef::new().fg(Color::Red))
            .add("darkGray", StyleDef::new().fg(Color::Black).extended(true))
            .add("yellow", StyleDef::new().fg(Color::Yellow));
    }

    /// Uses `no_color` instead of the process-wide switch.
    pub fn with_no_color(mut self, no_color: NoColor) -> Self {
        self.no_color = no_color;
        self
    }

    /// Uses `support` to decide whether escapes can be emitted.
    pub fn with_support<S: ColorSupport + 'static>(mut self, support: S) -> Self {
        self.support = Arc::new(support);
        self
    }

    /// Shorthand for [`with_support`](Styles::with_support) with an [`OutputMode`].
    pub fn with_output(self, mode: OutputMode) -> Self {
        self.with_support(mode)
    }

    /// Sets what happens to tags that are neither registered nor inline styles.
    ///
    /// The default, [`UnknownTagBehavior::Passthrough`], leaves them as written.
    pub fn with_unknown_behavior(mut self, behavior: UnknownTagBehavior) -> Self {
        self.unknown_behavior = behavior;
        self
    }

    // ==================== Registry ====================

    /// Adds a named style. Returns `&mut self` for chaining.
    ///
    /// If a style with the same name exists, it is replaced: the last
    /// registration wins, which is how the default palette is customized.
    pub fn add<V: Into<StyleDef>>(&mut self, name: &str, value: V) -> &mut Self {
        if !is_valid_tag_name(name) {
            log::debug!("style '{}' can't be referenced from tags", name);
        }
        if self.styles.insert(name.to_string(), value.into()).is_some() {
            log::debug!("style '{}' overwritten", name);
        }
        self
    }

    /// Adds a style from its raw parts. Unknown names contribute nothing.
    pub fn add_parts<S: AsRef<str>>(
        &mut self,
        name: &str,
        fg: &str,
        bg: &str,
        options: &[S],
        extra: bool,
    ) -> &mut Self {
        self.add(name, StyleDef::make(fg, bg, options, extra))
    }

    /// Adds a style from a configuration record.
    pub fn add_config(&mut self, name: &str, config: StyleConfig) -> &mut Self {
        self.add(name, config)
    }

    pub fn has_style(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn get_style(&self, name: &str) -> Option<&StyleDef> {
        self.styles.get(name)
    }

    pub fn styles(&self) -> &HashMap<String, StyleDef> {
        &self.styles
    }

    /// Registered names, sorted.
    pub fn names(&self) -> BTreeSet<&str> {
        self.styles.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Sets the no-colour switch this registry observes.
    ///
    /// Unless a separate switch was injected, this is the process-wide flag
    /// and the change is seen by every registry sharing it.
    pub fn set_no_color(&self, enabled: bool) {
        self.no_color.set(enabled);
    }

    pub fn is_no_color(&self) -> bool {
        self.no_color.get()
    }

    /// Resolves a tag name to a descriptor.
    ///
    /// Registered names come first; otherwise a name containing `=` is parsed
    /// as an inline style. Inline styles are never registered.
    pub fn resolve(&self, name: &str) -> Option<Cow<'_, StyleDef>> {
        if let Some(def) = self.styles.get(name) {
            return Some(Cow::Borrowed(def));
        }
        if name.contains('=') {
            return Some(Cow::Owned(StyleDef::parse_inline(name)));
        }
        None
    }

    fn is_resolvable(&self, name: &str) -> bool {
        self.styles.contains_key(name) || name.contains('=')
    }

    // ==================== Rendering ====================

    /// Renders every style tag in `text`.
    ///
    /// Text without a `<` is returned as-is, without allocating. With colour
    /// off, all markers are stripped. Otherwise paired tags become escape
    /// sequences and unknown tags are handled by the configured
    /// [`UnknownTagBehavior`].
    pub fn format<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.is_empty() || !text.contains('<') {
            return Cow::Borrowed(text);
        }

        if self.no_color.get() || !self.support.supports_color() {
            log::trace!("colour disabled, stripping tags");
            return Cow::Owned(strip_tags(text));
        }

        let parser = TagParser::new(|name: &str| self.resolve(name).map(|def| def.render()))
            .unknown_behavior(self.unknown_behavior.clone());
        Cow::Owned(parser.process(text))
    }

    /// Same as [`format`](Styles::format).
    pub fn render<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.format(text)
    }

    /// Wraps `text` in `<name>` tags and formats the result.
    ///
    /// `name` should be a registered style or an inline style; anything else
    /// comes back with its tags intact.
    pub fn apply(&self, name: &str, text: &str) -> String {
        self.format(&wrap_tag(text, name)).into_owned()
    }

    /// Removes every tag from `text`, regardless of registry or colour state.
    pub fn strip_color(text: &str) -> String {
        strip_tags(text)
    }

    /// Reports tags in `text` that are neither registered nor inline styles.
    pub fn unknown_tags(&self, text: &str) -> Result<(), UnknownTagErrors> {
        validate(text, |name| self.is_resolvable(name))
    }

    // ==================== Shortcut dispatch ====================

    /// Applies the style called `name` to the single text in `args`.
    ///
    /// This is the method-style entry point behind the shortcut methods
    /// ([`Styles::info`] and friends) and the [`styled!`](crate::styled) macro.
    ///
    /// # Errors
    ///
    /// - [`StyleError::UnknownMethod`] if `name` isn't registered
    /// - [`StyleError::MissingArgument`] if `args` is empty
    /// - [`StyleError::TooManyArguments`] if `args` has more than one entry
    pub fn call(&self, name: &str, args: &[&str]) -> Result<String, StyleError> {
        if !self.has_style(name) {
            return Err(StyleError::UnknownMethod {
                name: name.to_string(),
            });
        }
        match args {
            [text] => Ok(self.apply(name, text)),
            [] => Err(StyleError::MissingArgument {
                name: name.to_string(),
            }),
            _ => Err(StyleError::TooManyArguments {
                name: name.to_string(),
                count: args.len(),
            }),
        }
    }
}

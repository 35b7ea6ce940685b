//! # Tinct - Tag-Based Terminal Styling
//!
//! `tinct` turns `<name>content</name>` markers into ANSI SGR escape
//! sequences, or strips them when colour is off.
//!
//! ## Core Concepts
//!
//! - [`Styles`]: a registry of named styles plus the tag renderer
//! - [`StyleDef`]: foreground, background, attributes and the bright flag
//! - [`StyleConfig`]: the `fg` / `bg` / `options` / `extra` record form of a style
//! - [`NoColor`]: the no-colour switch, process-wide by default
//! - [`OutputMode`] / [`ColorSupport`]: whether the output target can show colour
//!
//! ## Quick Start
//!
//! ```rust
//! use tinct::{NoColor, OutputMode, Styles};
//!
//! let styles = Styles::new()
//!     .with_output(OutputMode::Term)
//!     .with_no_color(NoColor::new(false));
//!
//! assert_eq!(
//!     styles.format("<info>saved</info> 3 files"),
//!     "\x1b[32msaved\x1b[0m 3 files"
//! );
//!
//! styles.set_no_color(true);
//! assert_eq!(styles.format("<info>saved</info> 3 files"), "saved 3 files");
//! ```
//!
//! ## Inline Styles
//!
//! A tag whose name contains `=` is parsed on the spot:
//!
//! ```rust
//! use tinct::{NoColor, OutputMode, Styles};
//!
//! let styles = Styles::empty()
//!     .with_output(OutputMode::Term)
//!     .with_no_color(NoColor::new(false));
//!
//! assert_eq!(
//!     styles.format("<fg=white;bg=blue;options=bold>v2</fg=white;bg=blue;options=bold>"),
//!     "\x1b[1;37;44mv2\x1b[0m"
//! );
//! ```
//!
//! ## Stylesheets
//!
//! ```rust
//! use tinct::Styles;
//!
//! let styles = Styles::from_yaml(r#"
//! header:
//!   fg: cyan
//!   options: [bold, underscore]
//! "#).unwrap();
//! assert!(styles.has_style("header"));
//! ```

pub mod error;
pub mod output;
pub mod style;
pub mod switch;

mod global;
mod shortcuts;
mod styles;
mod stylesheet;

// Error type
pub use error::StyleError;

// Engine
pub use styles::Styles;

// Style model
pub use style::{Attribute, Color, StyleConfig, StyleDef};

// Colour switches
pub use output::{ColorSupport, OutputMode};
pub use switch::{is_no_color, set_no_color, NoColor};

// Shared registry
pub use global::{global, with_global, with_global_mut};

// Re-export tag parser types for validation and custom handling
pub use tinct_tags::{
    strip_tags, UnknownTagBehavior, UnknownTagError, UnknownTagErrors, UnknownTagKind,
};

/// Wraps `text` in an opening and closing tag called `name`.
///
/// An empty name returns `text` unchanged.
///
/// ```rust
/// assert_eq!(tinct::wrap_tag("done", "info"), "<info>done</info>");
/// assert_eq!(tinct::wrap_tag("done", ""), "done");
/// ```
pub fn wrap_tag(text: &str, name: &str) -> String {
    if name.is_empty() {
        return text.to_string();
    }
    format!("<{name}>{text}</{name}>")
}

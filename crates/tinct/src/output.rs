//! Colour-support detection.
//!
//! [`Styles`](crate::Styles) asks a [`ColorSupport`] collaborator, once per
//! `format` call, whether escapes should be emitted. The default is
//! [`OutputMode::Auto`], which asks the terminal.

use console::Term;

/// Answers "does the current output target support ANSI colour?".
///
/// Implemented for [`OutputMode`] and for any `Fn() -> bool`:
///
/// ```rust
/// use tinct::{ColorSupport, OutputMode};
///
/// assert!(OutputMode::Term.supports_color());
/// assert!(!(|| false).supports_color());
/// ```
pub trait ColorSupport: Send + Sync {
    fn supports_color(&self) -> bool;
}

impl<F> ColorSupport for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn supports_color(&self) -> bool {
        self()
    }
}

/// Controls whether output includes ANSI escape codes.
///
/// # Variants
///
/// - `Auto` - Detect terminal capabilities automatically (default behavior)
/// - `Term` - Always include ANSI escape codes
/// - `Text` - Never include ANSI escape codes (plain text)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Auto-detect terminal capabilities
    #[default]
    Auto,
    /// Always use ANSI escape codes (terminal output)
    Term,
    /// Never use ANSI escape codes (plain text)
    Text,
}

impl OutputMode {
    /// Resolves the output mode to a concrete decision about whether to use color.
    ///
    /// - `Auto` checks that stdout is a colour-capable terminal and that
    ///   colours haven't been disabled through `console` (e.g. `CLICOLOR=0`)
    /// - `Term` always returns `true`
    /// - `Text` always returns `false`
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => {
                console::colors_enabled() && Term::stdout().features().colors_supported()
            }
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }
}

impl ColorSupport for OutputMode {
    fn supports_color(&self) -> bool {
        self.should_use_color()
    }
}

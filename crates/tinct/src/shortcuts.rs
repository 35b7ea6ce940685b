//! Method-style shortcuts for the default palette.
//!
//! `styles.info("saved")` is the same as `styles.call("info", &["saved"])`.
//! Like [`Styles::call`], the shortcuts fail with
//! [`StyleError::UnknownMethod`] when the name isn't registered (for example
//! on a registry built with [`Styles::empty`]).
//!
//! For any other registered name, use the [`styled!`](crate::styled) macro.

use crate::error::StyleError;
use crate::styles::Styles;

macro_rules! shortcuts {
    ($($name:ident),* $(,)?) => {
        impl Styles {
            $(
                #[doc = concat!("Applies the `", stringify!($name), "` style to `text`.")]
                pub fn $name(&self, text: &str) -> Result<String, StyleError> {
                    self.call(stringify!($name), &[text])
                }
            )*
        }
    };
}

shortcuts!(info, comment, success, warning, danger, error, notice, primary, note, question);

/// Applies a registered style by name, method-style.
///
/// The name may be written bare or as a string expression:
///
/// ```rust
/// use tinct::{styled, NoColor, OutputMode, StyleDef, Color, Styles};
///
/// let mut styles = Styles::new()
///     .with_output(OutputMode::Term)
///     .with_no_color(NoColor::new(false));
/// styles.add("accent", StyleDef::new().fg(Color::Magenta));
///
/// assert_eq!(styled!(styles, accent, "hi").unwrap(), "\x1b[35mhi\x1b[0m");
/// assert_eq!(styled!(styles, "info", "ok").unwrap(), "\x1b[32mok\x1b[0m");
/// assert!(styled!(styles, missing, "x").is_err());
/// ```
#[macro_export]
macro_rules! styled {
    ($styles:expr, $name:ident, $text:expr) => {
        $styles.call(stringify!($name), &[::std::convert::AsRef::<str>::as_ref(&$text)])
    };
    ($styles:expr, $name:expr, $text:expr) => {
        $styles.call($name, &[::std::convert::AsRef::<str>::as_ref(&$text)])
    };
}

#[cfg(test)]
mod tests {
    use crate::{NoColor, OutputMode, StyleError, Styles};

    fn colored() -> Styles {
        Styles::new()
            .with_output(OutputMode::Term)
            .with_no_color(NoColor::new(false))
    }

    #[test]
    fn test_shortcuts_match_apply() {
        let styles = colored();
        assert_eq!(styles.info("m").unwrap(), styles.apply("info", "m"));
        assert_eq!(styles.error("m").unwrap(), "\x1b[30;41mm\x1b[0m");
        assert_eq!(styles.comment("m").unwrap(), "\x1b[33mm\x1b[0m");
        assert_eq!(styles.question("m").unwrap(), "\x1b[30;46mm\x1b[0m");
    }

    #[test]
    fn test_shortcut_on_empty_registry_fails() {
        let styles = Styles::empty();
        assert!(matches!(
            styles.warning("m"),
            Err(StyleError::UnknownMethod { ref name }) if name == "warning"
        ));
    }

    #[test]
    fn test_macro_with_owned_text() {
        let styles = colored();
        let text = String::from("owned");
        assert_eq!(styled!(styles, danger, text).unwrap(), "\x1b[31mowned\x1b[0m");
    }

    #[test]
    fn test_macro_with_runtime_name() {
        let styles = colored();
        let name = String::from("success");
        assert_eq!(
            styled!(styles, &name, "ok").unwrap(),
            "\x1b[1;32mok\x1b[0m"
        );
    }
}

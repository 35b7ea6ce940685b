//! The no-colour switch.
//!
//! When set, every [`Styles::format`](crate::Styles::format) call strips tags
//! instead of emitting escapes, whatever the terminal supports.
//!
//! The switch is a shared handle. [`NoColor::global`] returns the
//! process-wide flag, which every engine built with
//! [`Styles::new`](crate::Styles::new) observes. Tests and embedders that need
//! isolation build their own with [`NoColor::new`] and inject it through
//! [`Styles::with_no_color`](crate::Styles::with_no_color).
//!
//! ```rust
//! use tinct::{NoColor, OutputMode, Styles};
//!
//! let switch = NoColor::new(false);
//! let styles = Styles::new()
//!     .with_output(OutputMode::Term)
//!     .with_no_color(switch.clone());
//!
//! assert_eq!(styles.format("<info>ok</info>"), "\x1b[32mok\x1b[0m");
//!
//! switch.set(true);
//! assert_eq!(styles.format("<info>ok</info>"), "ok");
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;

static GLOBAL_NO_COLOR: Lazy<NoColor> = Lazy::new(NoColor::default);

/// A cloneable handle to a no-colour flag. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct NoColor(Arc<AtomicBool>);

impl NoColor {
    /// Creates an independent flag.
    pub fn new(enabled: bool) -> Self {
        Self(Arc::new(AtomicBool::new(enabled)))
    }

    /// Returns a handle to the process-wide flag. It starts out unset.
    pub fn global() -> Self {
        GLOBAL_NO_COLOR.clone()
    }

    /// Creates an independent flag that is set when `NO_COLOR` is present
    /// and non-empty.
    pub fn from_env() -> Self {
        let enabled = std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty());
        Self::new(enabled)
    }

    pub fn get(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn set(&self, enabled: bool) {
        self.0.store(enabled, Ordering::Relaxed);
    }

    /// Returns true if both handles point at the same flag.
    pub fn shares_flag_with(&self, other: &NoColor) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Sets the process-wide no-colour flag.
pub fn set_no_color(enabled: bool) {
    GLOBAL_NO_COLOR.set(enabled);
}

/// Reads the process-wide no-colour flag.
pub fn is_no_color() -> bool {
    GLOBAL_NO_COLOR.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_independent_flags() {
        let a = NoColor::new(false);
        let b = NoColor::new(false);
        a.set(true);
        assert!(a.get());
        assert!(!b.get());
        assert!(!a.shares_flag_with(&b));
    }

    #[test]
    fn test_clones_share_flag() {
        let a = NoColor::new(false);
        let b = a.clone();
        b.set(true);
        assert!(a.get());
        assert!(a.shares_flag_with(&b));
    }

    #[test]
    #[serial]
    fn test_global_handle_tracks_free_functions() {
        let handle = NoColor::global();
        assert!(handle.shares_flag_with(&NoColor::global()));

        set_no_color(true);
        assert!(handle.get());
        assert!(is_no_color());

        handle.set(false);
        assert!(!is_no_color());
    }

    #[test]
    #[serial]
    fn test_from_env() {
        std::env::set_var("NO_COLOR", "1");
        assert!(NoColor::from_env().get());

        std::env::set_var("NO_COLOR", "");
        assert!(!NoColor::from_env().get());

        std::env::remove_var("NO_COLOR");
        assert!(!NoColor::from_env().get());
    }
}

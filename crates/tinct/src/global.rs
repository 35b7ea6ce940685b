//! The shared default registry.
//!
//! Convenient for applications that want one palette everywhere. Nothing
//! else in the crate depends on it; independent [`Styles`] values work the
//! same way.
//!
//! ```rust
//! use tinct::{with_global, with_global_mut, StyleConfig};
//!
//! with_global_mut(|styles| {
//!     styles.add_config("highlight", StyleConfig::fg("cyan"));
//! });
//! assert!(with_global(|styles| styles.has_style("highlight")));
//! ```

use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::styles::Styles;

static GLOBAL_STYLES: Lazy<RwLock<Styles>> = Lazy::new(|| RwLock::new(Styles::new()));

/// Returns the process-wide registry, seeded with the default palette on
/// first use.
pub fn global() -> &'static RwLock<Styles> {
    &GLOBAL_STYLES
}

/// Runs `f` with shared access to the process-wide registry.
pub fn with_global<T>(f: impl FnOnce(&Styles) -> T) -> T {
    let guard = GLOBAL_STYLES.read().unwrap_or_else(PoisonError::into_inner);
    f(&guard)
}

/// Runs `f` with exclusive access to the process-wide registry.
pub fn with_global_mut<T>(f: impl FnOnce(&mut Styles) -> T) -> T {
    let mut guard = GLOBAL_STYLES.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

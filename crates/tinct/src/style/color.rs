//! Named terminal colors and their SGR codes.
//!
//! Supported names: `black`, `red`, `green`, `yellow`, `blue`, `magenta`,
//! `cyan`, `white`, `normal` and `default`. A few aliases are accepted:
//! `brown` (yellow), `gray`/`grey` (white) and `mga` (magenta).
//!
//! Each color has a standard code and an extended (bright) code:
//!
//! ```rust
//! use tinct::Color;
//!
//! let red = Color::from_name("red").unwrap();
//! assert_eq!(red.fg_code(false), 31);
//! assert_eq!(red.fg_code(true), 91);
//! assert_eq!(red.bg_code(false), 41);
//! assert_eq!(red.bg_code(true), 101);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;

/// One of the eight base ANSI colors, or the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// The terminal's own color (code 39 / 49).
    Normal,
    /// Same codes as [`Color::Normal`].
    Default,
}

impl Color {
    /// Every color, in code order.
    pub const ALL: [Color; 10] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Normal,
        Color::Default,
    ];

    /// Looks up a color by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" | "brown" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" | "mga" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" | "gray" | "grey" => Color::White,
            "normal" => Color::Normal,
            "default" => Color::Default,
            _ => return None,
        };
        Some(color)
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Normal => "normal",
            Color::Default => "default",
        }
    }

    fn offset(self) -> u8 {
        match self {
            Color::Black => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
            Color::White => 7,
            Color::Normal | Color::Default => 9,
        }
    }

    fn is_default(self) -> bool {
        matches!(self, Color::Normal | Color::Default)
    }

    /// Foreground code: 30-37, 90-97 when `extended`, 39 for the default color.
    pub fn fg_code(self, extended: bool) -> u8 {
        if self.is_default() {
            return 39;
        }
        let base = if extended { 90 } else { 30 };
        base + self.offset()
    }

    /// Background code: 40-47, 100-107 when `extended`, 49 for the default color.
    pub fn bg_code(self, extended: bool) -> u8 {
        if self.is_default() {
            return 49;
        }
        let base = if extended { 100 } else { 40 };
        base + self.offset()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_name(s.trim()).ok_or_else(|| StyleError::UnknownColor(s.to_string()))
    }
}

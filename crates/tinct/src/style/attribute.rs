//! Text attributes (bold, underscore, ...) and their SGR codes.

use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;

/// A text attribute. Ordering follows the SGR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    /// Increased intensity (1).
    Bold,
    /// Decreased intensity (2). Also accepted as `fuzzy` or `dim`.
    Faint,
    /// Italic (3).
    Italic,
    /// Underlined (4). Also accepted as `underline`.
    Underscore,
    /// Blinking (5).
    Blink,
    /// Swapped foreground and background (7).
    Reverse,
    /// Hidden text (8). Also accepted as `hidden` or `conceal`.
    Concealed,
}

impl Attribute {
    pub const ALL: [Attribute; 7] = [
        Attribute::Bold,
        Attribute::Faint,
        Attribute::Italic,
        Attribute::Underscore,
        Attribute::Blink,
        Attribute::Reverse,
        Attribute::Concealed,
    ];

    /// Looks up an attribute by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        let attr = match name.to_ascii_lowercase().as_str() {
            "bold" => Attribute::Bold,
            "faint" | "fuzzy" | "dim" => Attribute::Faint,
            "italic" => Attribute::Italic,
            "underscore" | "underline" => Attribute::Underscore,
            "blink" => Attribute::Blink,
            "reverse" => Attribute::Reverse,
            "concealed" | "conceal" | "hidden" => Attribute::Concealed,
            _ => return None,
        };
        Some(attr)
    }

    pub fn name(self) -> &'static str {
        match self {
            Attribute::Bold => "bold",
            Attribute::Faint => "faint",
            Attribute::Italic => "italic",
            Attribute::Underscore => "underscore",
            Attribute::Blink => "blink",
            Attribute::Reverse => "reverse",
            Attribute::Concealed => "concealed",
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Attribute::Bold => 1,
            Attribute::Faint => 2,
            Attribute::Italic => 3,
            Attribute::Underscore => 4,
            Attribute::Blink => 5,
            Attribute::Reverse => 7,
            Attribute::Concealed => 8,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::from_name(s.trim()).ok_or_else(|| StyleError::UnknownAttribute(s.to_string()))
    }
}

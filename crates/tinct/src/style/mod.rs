//! Style descriptors: colors, attributes, and their SGR rendering.

mod attribute;
mod color;
mod config;
mod definition;

pub use attribute::Attribute;
pub use color::Color;
pub use config::StyleConfig;
pub use definition::StyleDef;

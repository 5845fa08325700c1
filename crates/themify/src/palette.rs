//! Palette model: per-variation symbolic color names mapped to hex literals.
//!
//! A palette holds one color map per variation name. Color names are
//! symbolic (`primary-0`, `accent-500`) and literals are hex colors. Colors
//! iterate in sorted name order, so generated output is deterministic;
//! variation ordering comes from the configured variation set, not from the
//! palette itself.
//!
//! Palettes deserialize straight from their JSON shape:
//!
//! ```rust
//! use themify::Palette;
//!
//! let palette: Palette = serde_json::from_str(
//!     r##"{"light": {"primary-0": "#ffffff"}, "dark": {"primary-0": "#000000"}}"##,
//! ).unwrap();
//! assert_eq!(palette.color("dark", "primary-0"), Some("#000000"));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ThemifyError;

/// Mapping from variation name to color name to literal color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    variations: BTreeMap<String, BTreeMap<String, String>>,
}

impl Palette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or extends) a variation's color map, returning `self` for chaining.
    pub fn variation<I, K, V>(mut self, name: impl Into<String>, colors: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entry = self.variations.entry(name.into()).or_default();
        for (name, literal) in colors {
            entry.insert(name.into(), literal.into());
        }
        self
    }

    /// Looks up a color literal for the given variation.
    pub fn color(&self, variation: &str, name: &str) -> Option<&str> {
        self.variations.get(variation)?.get(name).map(String::as_str)
    }

    /// Returns the full color map for a variation, if it exists.
    pub fn colors(&self, variation: &str) -> Option<&BTreeMap<String, String>> {
        self.variations.get(variation)
    }
}

/// Parses a hex color literal into its RGB components.
///
/// Accepts 3-digit (`#fff`) and 6-digit (`#ffffff`) forms, with or without
/// the leading `#`.
pub(crate) fn parse_hex(literal: &str) -> Result<(u8, u8, u8), String> {
    let trimmed = literal.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    // byte slicing below requires single-byte characters
    if !hex.is_ascii() {
        return Err(format!("Invalid hex: {}", hex));
    }
    match hex.len() {
        // 3-digit hex: #rgb -> #rrggbb
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).map_err(|_| format!("Invalid hex: {}", hex))? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).map_err(|_| format!("Invalid hex: {}", hex))? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).map_err(|_| format!("Invalid hex: {}", hex))? * 17;
            Ok((r, g, b))
        }
        // 6-digit hex: #rrggbb
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| format!("Invalid hex: {}", hex))?;
            let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| format!("Invalid hex: {}", hex))?;
            let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| format!("Invalid hex: {}", hex))?;
            Ok((r, g, b))
        }
        _ => Err(format!(
            "Invalid hex color: {} (must be 3 or 6 digits)",
            trimmed
        )),
    }
}

/// Decomposes a palette literal into its channel list, e.g. `255, 136, 0`.
///
/// This is the form used both inside `rgba(...)` compositions and as the
/// value of the generated custom properties.
pub(crate) fn rgb_channels(name: &str, literal: &str) -> Result<String, ThemifyError> {
    let (r, g, b) = parse_hex(literal).map_err(|_| ThemifyError::InvalidColorLiteral {
        name: name.to_string(),
        value: literal.to_string(),
    })?;
    Ok(format!("{}, {}, {}", r, g, b))
}

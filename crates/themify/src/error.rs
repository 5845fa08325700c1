//! Error types for the themify transforms.
//!
//! This module provides [`ThemifyError`], the primary error type for all
//! transform operations. Every variant represents a build-time authoring
//! error: the transform aborts on the first problem instead of producing
//! partial output. The only recoverable situation, a non-default variation
//! without an override, never surfaces here (it resolves to "no override"
//! internally and the declaration is skipped for that variation).

use std::fmt;

/// Error type for palette validation, marker resolution, and tree rewriting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemifyError {
    /// A marker payload could not be parsed, or has the wrong shape.
    MalformedExpression {
        /// The offending payload text.
        expression: String,
    },

    /// A marker payload defines no variations, or omits the default variation.
    MissingVariation {
        /// The offending payload text.
        expression: String,
        /// The variation that has no entry.
        variation: String,
    },

    /// A marker payload carries an empty color reference.
    EmptyColorValue {
        /// The offending payload text.
        expression: String,
    },

    /// A color referenced for the default variation is not in the palette.
    UnknownColorReference {
        /// The color name that failed to resolve.
        name: String,
        /// The variation it was resolved against.
        variation: String,
    },

    /// A configured variation has no colors in the palette.
    EmptyPaletteVariation {
        /// The variation without colors.
        variation: String,
    },

    /// A palette literal could not be decomposed into RGB channels.
    InvalidColorLiteral {
        /// The color name the literal belongs to.
        name: String,
        /// The literal that failed to parse.
        value: String,
    },

    /// Failed to serialize the dynamic fallback table.
    Serialization(String),
}

impl fmt::Display for ThemifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemifyError::MalformedExpression { expression } => {
                write!(f, "failed to parse the expression: {}", expression)
            }
            ThemifyError::MissingVariation {
                expression,
                variation,
            } => {
                write!(
                    f,
                    "the expression {} defines no value for the variation '{}'",
                    expression, variation
                )
            }
            ThemifyError::EmptyColorValue { expression } => {
                write!(f, "received an empty color in the expression: {}", expression)
            }
            ThemifyError::UnknownColorReference { name, variation } => {
                write!(
                    f,
                    "the color name '{}' does not exist in the palette for the variation '{}'",
                    name, variation
                )
            }
            ThemifyError::EmptyPaletteVariation { variation } => {
                write!(f, "expected a map of colors for the variation '{}'", variation)
            }
            ThemifyError::InvalidColorLiteral { name, value } => {
                write!(
                    f,
                    "invalid color literal '{}' for '{}' (expected a 3 or 6 digit hex color)",
                    value, name
                )
            }
            ThemifyError::Serialization(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ThemifyError {}

impl From<serde_json::Error> for ThemifyError {
    fn from(err: serde_json::Error) -> Self {
        ThemifyError::Serialization(err.to_string())
    }
}

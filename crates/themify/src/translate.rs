//! Translation of resolved palette colors into their textual output forms.
//!
//! A resolved `(color, alpha)` pair renders differently depending on where
//! the output runs:
//!
//! - [`ExecMode::CssVar`] — `rgba(var(--name), alpha)`, referencing a
//!   runtime custom property. Always the rgba form, even for alpha 1, so the
//!   same declaration works uniformly across variations at runtime.
//! - [`ExecMode::CssColor`] — the fully resolved literal, or an `rgba(...)`
//!   composition of its channels when alpha is not 1.
//! - [`ExecMode::DynamicExpression`] — an opaque `%[...]%` placeholder a
//!   downstream runtime locates and substitutes.

use crate::error::ThemifyError;
use crate::palette::rgb_channels;

/// Target representation for a resolved color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecMode {
    /// Reference a runtime custom property, carrying the alpha.
    #[default]
    CssVar,
    /// Fully resolved literal color.
    CssColor,
    /// Placeholder token for later runtime substitution.
    DynamicExpression,
}

/// A marker occurrence resolved for one variation.
///
/// `alpha` is carried textually: the comparison against `"1"` and the final
/// output are both exact-text operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColor {
    /// The symbolic color name from the marker payload.
    pub name: String,
    /// The alpha component, as written (or `"1"` when implied).
    pub alpha: String,
    /// The palette literal the name resolved to.
    pub literal: String,
}

/// Renders a resolved color for the given variation and execution mode.
pub fn translate(
    resolved: &ResolvedColor,
    variation: &str,
    mode: ExecMode,
) -> Result<String, ThemifyError> {
    match mode {
        ExecMode::CssColor => {
            // with the default alpha, the literal passes through untouched
            if resolved.alpha == "1" {
                Ok(resolved.literal.clone())
            } else {
                let channels = rgb_channels(&resolved.name, &resolved.literal)?;
                Ok(format!("rgba({}, {})", channels, resolved.alpha))
            }
        }
        ExecMode::DynamicExpression => Ok(format!(
            "%[{}, {}, {}]%",
            variation, resolved.name, resolved.alpha
        )),
        ExecMode::CssVar => Ok(format!(
            "rgba(var(--{}), {})",
            resolved.name, resolved.alpha
        )),
    }
}

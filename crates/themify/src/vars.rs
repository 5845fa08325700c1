//! Custom-property block generation.
//!
//! Exposes every palette color as a custom property holding raw channel
//! components, so `rgba(var(--name), alpha)` composition works at runtime:
//!
//! ```css
//! :root {
//!   --primary-0: 255, 255, 255;
//! }
//! .t-dark {
//!   --primary-0: 0, 0, 0;
//! }
//! ```
//!
//! The default variation targets the document root; every other variation
//! targets its class selector. Blocks are prepended ahead of all other
//! nodes, before any other processing touches the tree.

use crate::config::ThemifyOptions;
use crate::css::{Declaration, Root, Rule};
use crate::error::ThemifyError;
use crate::palette::rgb_channels;

/// Builds one custom-property rule per configured variation, in variation
/// order.
pub fn create_vars_rules(options: &ThemifyOptions) -> Result<Vec<Rule>, ThemifyError> {
    let mut rules = Vec::with_capacity(options.variations.len());
    for variation in &options.variations {
        let colors = options
            .palette
            .colors(variation)
            .filter(|colors| !colors.is_empty())
            .ok_or_else(|| ThemifyError::EmptyPaletteVariation {
                variation: variation.clone(),
            })?;
        let selector = if options.is_default(variation) {
            ":root".to_string()
        } else {
            options.variation_selector(variation)
        };
        let mut rule = Rule::new(selector);
        for (name, literal) in colors {
            rule.append(Declaration::new(
                format!("--{}", name),
                rgb_channels(name, literal)?,
            ));
        }
        rules.push(rule);
    }
    Ok(rules)
}

/// Prepends the generated blocks to the tree.
pub fn prepend_vars(root: &mut Root, options: &ThemifyOptions) -> Result<(), ThemifyError> {
    let rules = create_vars_rules(options)?;
    root.prepend_rules(rules);
    Ok(())
}

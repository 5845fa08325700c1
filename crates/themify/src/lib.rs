//! # Themify - Theme-Variation Color Rewriting for CSS Rule Trees
//!
//! `themify` rewrites a stylesheet's rule tree so a single authored
//! declaration supports multiple theme variations. Authors embed a marker
//! expression naming, per variation, a palette color and an optional
//! opacity:
//!
//! ```css
//! .box {
//!   color: themify({"light": "primary-0", "dark": ["primary-700", "0.5"]});
//! }
//! ```
//!
//! The engine resolves these references against a [`Palette`] and expands
//! the declaration into the rules, selectors, and custom-property
//! references needed for theme switching.
//!
//! ## Core Concepts
//!
//! - [`Palette`]: per-variation mapping of symbolic color names to hex
//!   literals
//! - [`ThemifyOptions`]: the resolved configuration (variation set, class
//!   prefix, output toggles)
//! - [`ExecMode`]: which textual form a resolved color translates into
//! - [`Root`] / [`Rule`] / [`AtRule`] / [`Declaration`]: the rule-tree
//!   model the engine mutates and hands back
//! - [`FallbackArtifacts`]: side-channel text blobs for environments
//!   without custom-property support
//!
//! ## Quick Start
//!
//! ```rust
//! use themify::{init_themify, themify, Palette, Root, Rule, ThemifyOptions};
//!
//! let palette = Palette::new()
//!     .variation("light", [("primary-0", "#ffffff")])
//!     .variation("dark", [("primary-0", "#000000")]);
//! let options = ThemifyOptions::new(palette).with_class_prefix("t-");
//!
//! let mut root = Root::new();
//! root.push_rule(
//!     Rule::new(".box").decl("color", r#"themify({"light": "primary-0", "dark": "primary-0"})"#),
//! );
//!
//! init_themify(&mut root, &options).unwrap();
//! themify(&mut root, &options).unwrap();
//!
//! assert_eq!(
//!     root.to_string(),
//!     "\
//! :root {
//!   --primary-0: 255, 255, 255;
//! }
//! .t-dark {
//!   --primary-0: 0, 0, 0;
//! }
//! .box, .t-dark .box {
//!   color: rgba(var(--primary-0), 1);
//! }"
//! );
//! ```
//!
//! Because the light and dark values are identical here, the rewriter
//! appends the scoped selector to the existing rule instead of duplicating
//! it; differing values get their own variation-scoped rule at the end of
//! the root.
//!
//! ## Fallback Artifacts
//!
//! With `screw_ie11` disabled, [`themify`] additionally returns a flat
//! stylesheet of resolved literal colors plus a JSON table of `%[...]%`
//! placeholder rules, for consumers that cannot rely on custom properties:
//!
//! ```rust
//! use themify::{themify, Palette, Root, Rule, ThemifyOptions};
//!
//! let palette = Palette::new()
//!     .variation("light", [("primary-0", "#ffffff")])
//!     .variation("dark", [("primary-0", "#000000")]);
//! let options = ThemifyOptions::new(palette).with_screw_ie11(false);
//!
//! let mut root = Root::new();
//! root.push_rule(
//!     Rule::new(".box").decl("color", r#"themify({"light": "primary-0", "dark": "primary-0"})"#),
//! );
//!
//! let artifacts = themify(&mut root, &options).unwrap().unwrap();
//! assert!(artifacts.css.contains("color: #ffffff;"));
//! assert!(artifacts.dynamic.contains("%[dark, primary-0, 1]%"));
//! ```
//!
//! The engine performs no file or network I/O; persisting the mutated tree
//! and the artifacts is the caller's responsibility.

mod config;
mod css;
mod error;
mod expr;
mod fallback;
mod palette;
mod rewrite;
mod translate;
mod vars;

pub use config::{FallbackPaths, ThemifyOptions};
pub use css::{AtRule, Declaration, Node, Root, Rule};
pub use error::ThemifyError;
pub use expr::{has_marker, resolve_decl_value};
pub use fallback::{process_fallback_rules, FallbackArtifacts};
pub use palette::Palette;
pub use rewrite::process_rules;
pub use translate::{translate, ExecMode, ResolvedColor};
pub use vars::{create_vars_rules, prepend_vars};

/// Runs the fallback pass (when enabled) followed by the rewrite pass.
///
/// The fallback pass runs first, against the unmutated tree, and only when
/// `screw_ie11` is `false`; its artifacts are returned for the caller to
/// persist. The rewrite pass then mutates the tree in place.
pub fn themify(
    root: &mut Root,
    options: &ThemifyOptions,
) -> Result<Option<FallbackArtifacts>, ThemifyError> {
    let artifacts = if options.screw_ie11 {
        None
    } else {
        process_fallback_rules(root, options)?
    };
    process_rules(root, options)?;
    Ok(artifacts)
}

/// Prepends the per-variation custom-property blocks to the tree.
///
/// No-op when `create_vars` is disabled.
pub fn init_themify(root: &mut Root, options: &ThemifyOptions) -> Result<(), ThemifyError> {
    if options.create_vars {
        prepend_vars(root, options)?;
    }
    Ok(())
}

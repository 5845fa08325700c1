//! Engine configuration: palette, variation set, and output options.

use std::path::PathBuf;

use crate::palette::Palette;

/// Destination paths for the fallback artifacts.
///
/// The engine never writes files; these paths ride along so the host can
/// persist the [`FallbackArtifacts`](crate::FallbackArtifacts) it gets back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallbackPaths {
    pub css_path: Option<PathBuf>,
    pub dynamic_path: Option<PathBuf>,
}

/// Resolved configuration for one transform invocation.
///
/// Defaults mirror the conventional theme setup: variations `light` and
/// `dark` with `light` as the default, no class prefix, custom-property
/// generation on, and the fallback pass off (`screw_ie11 = true`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemifyOptions {
    pub palette: Palette,
    /// Ordered set of known variation names.
    pub variations: Vec<String>,
    /// The designated default variation; must be a member of `variations`.
    pub default_variation: String,
    /// Prefix for variation class selectors, e.g. `t-` gives `.t-dark`.
    pub class_prefix: String,
    /// Whether `init_themify` prepends the custom-property blocks.
    pub create_vars: bool,
    /// When `false`, the fallback pass runs and artifacts are returned.
    pub screw_ie11: bool,
    pub fallback: FallbackPaths,
}

impl ThemifyOptions {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            variations: vec!["light".to_string(), "dark".to_string()],
            default_variation: "light".to_string(),
            class_prefix: String::new(),
            create_vars: true,
            screw_ie11: true,
            fallback: FallbackPaths::default(),
        }
    }

    /// Replaces the variation set and its designated default.
    pub fn with_variations(
        mut self,
        variations: Vec<String>,
        default_variation: impl Into<String>,
    ) -> Self {
        self.variations = variations;
        self.default_variation = default_variation.into();
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    pub fn with_create_vars(mut self, create_vars: bool) -> Self {
        self.create_vars = create_vars;
        self
    }

    pub fn with_screw_ie11(mut self, screw_ie11: bool) -> Self {
        self.screw_ie11 = screw_ie11;
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackPaths) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn is_default(&self, variation: &str) -> bool {
        variation == self.default_variation
    }

    /// All configured variations except the default, in configured order.
    pub fn non_default_variations(&self) -> impl Iterator<Item = &str> + '_ {
        self.variations
            .iter()
            .map(String::as_str)
            .filter(move |v| *v != self.default_variation)
    }

    /// The class selector for a variation: `.{classPrefix}{variation}`.
    pub fn variation_selector(&self, variation: &str) -> String {
        format!(".{}{}", self.class_prefix, variation)
    }

    /// Scopes each selector under the variation's class selector.
    pub fn scoped_selectors(&self, selectors: &[String], variation: &str) -> Vec<String> {
        let prefix = self.variation_selector(variation);
        selectors
            .iter()
            .map(|selector| format!("{} {}", prefix, selector))
            .collect()
    }
}

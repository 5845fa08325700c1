//! End-to-end tests for the full transform pipeline.
//!
//! These exercise the documented composition: `init_themify` prepends the
//! custom-property blocks, `themify` runs the fallback pass (when enabled)
//! and then rewrites the tree in place.

use std::collections::BTreeMap;

use themify::{
    init_themify, themify, AtRule, Palette, Root, Rule, ThemifyError, ThemifyOptions,
};

fn palette() -> Palette {
    Palette::new()
        .variation("light", [("primary-0", "#ffffff"), ("accent", "#ff6b35")])
        .variation("dark", [("primary-0", "#000000"), ("accent", "#35b6ff")])
}

fn options() -> ThemifyOptions {
    ThemifyOptions::new(palette()).with_class_prefix("t-")
}

// ============================================================================
// Full pipeline
// ============================================================================

#[test]
fn test_identical_variation_values_merge_into_one_rule() {
    let mut root = Root::new();
    root.push_rule(
        Rule::new(".box").decl("color", r#"themify({"light": "primary-0", "dark": "primary-0"})"#),
    );

    init_themify(&mut root, &options()).unwrap();
    let artifacts = themify(&mut root, &options()).unwrap();
    assert!(artifacts.is_none());

    assert_eq!(
        root.to_string(),
        "\
:root {
  --accent: 255, 107, 53;
  --primary-0: 255, 255, 255;
}
.t-dark {
  --accent: 53, 182, 255;
  --primary-0: 0, 0, 0;
}
.box, .t-dark .box {
  color: rgba(var(--primary-0), 1);
}"
    );
}

#[test]
fn test_differing_variation_values_create_a_scoped_rule() {
    let mut root = Root::new();
    root.push_rule(
        Rule::new(".box").decl("color", r#"themify({"light": "primary-0", "dark": "accent"})"#),
    );

    themify(&mut root, &options()).unwrap();

    assert_eq!(
        root.to_string(),
        "\
.box {
  color: rgba(var(--primary-0), 1);
}
.t-dark .box {
  color: rgba(var(--accent), 1);
}"
    );
}

#[test]
fn test_omitted_variation_is_a_valid_authoring_choice() {
    let mut root = Root::new();
    root.push_rule(Rule::new(".box").decl(
        "color",
        r#"themify({"light": ["primary-0", "0.5"]})"#,
    ));

    themify(&mut root, &options()).unwrap();

    assert_eq!(
        root.to_string(),
        ".box {\n  color: rgba(var(--primary-0), 0.5);\n}"
    );
}

#[test]
fn test_keyframes_content_is_rewritten_but_never_duplicated() {
    let mut root = Root::new();
    root.push_at_rule(
        AtRule::new("keyframes", "pulse")
            .rule(Rule::new("from").decl(
                "background-color",
                r#"themify({"light": "primary-0", "dark": "accent"})"#,
            ))
            .rule(Rule::new("to").decl(
                "background-color",
                r#"themify({"light": "accent", "dark": "primary-0"})"#,
            )),
    );

    themify(&mut root, &options()).unwrap();

    assert_eq!(
        root.to_string(),
        "\
@keyframes pulse {
  from {
    background-color: rgba(var(--primary-0), 1);
  }
  to {
    background-color: rgba(var(--accent), 1);
  }
}"
    );
}

#[test]
fn test_mixed_rule_aggregates_merges_and_clones() {
    let mut root = Root::new();
    root.push_rule(
        Rule::new(".panel")
            .decl("color", r#"themify({"light": "primary-0", "dark": "primary-0"})"#)
            .decl("border-color", r#"themify({"light": "accent", "dark": "primary-0"})"#)
            .decl("padding", "4px"),
    );

    themify(&mut root, &options()).unwrap();

    assert_eq!(
        root.to_string(),
        "\
.panel, .t-dark .panel {
  color: rgba(var(--primary-0), 1);
  border-color: rgba(var(--accent), 1);
  padding: 4px;
}
.t-dark .panel {
  border-color: rgba(var(--primary-0), 1);
}"
    );
}

// ============================================================================
// Fallback artifacts
// ============================================================================

#[test]
fn test_fallback_artifacts_cover_both_modes() {
    let mut root = Root::new();
    root.push_rule(Rule::new(".box").decl(
        "color",
        r#"themify({"light": ["primary-0", "0.5"], "dark": ["primary-0", "0.5"]})"#,
    ));

    let artifacts = themify(&mut root, &options().with_screw_ie11(false))
        .unwrap()
        .unwrap();

    assert_eq!(
        artifacts.css,
        "\
.box {
  color: rgba(255, 255, 255, 0.5);
}
.t-dark .box {
  color: rgba(0, 0, 0, 0.5);
}"
    );

    let table: BTreeMap<String, String> = serde_json::from_str(&artifacts.dynamic).unwrap();
    assert_eq!(table["light"], ".box {\n  color: %[light, primary-0, 0.5]%;\n}");
    assert_eq!(
        table["dark"],
        ".t-dark .box {\n  color: %[dark, primary-0, 0.5]%;\n}"
    );

    // the mutated tree still got the custom-property rewrite
    assert!(root.to_string().contains("rgba(var(--primary-0), 0.5)"));
}

#[test]
fn test_fallback_skipped_when_screw_ie11() {
    let mut root = Root::new();
    root.push_rule(Rule::new(".box").decl("color", r#"themify({"light": "primary-0"})"#));
    assert!(themify(&mut root, &options()).unwrap().is_none());
}

// ============================================================================
// Errors abort before mutation
// ============================================================================

#[test]
fn test_marker_without_default_variation_fails_and_leaves_tree_intact() {
    let mut root = Root::new();
    root.push_rule(Rule::new(".box").decl("color", r#"themify({"dark": "primary-0"})"#));
    let before = root.clone();

    let err = themify(&mut root, &options().with_screw_ie11(false)).unwrap_err();
    assert!(matches!(err, ThemifyError::MissingVariation { .. }));
    assert_eq!(root, before);
}

#[test]
fn test_unknown_default_color_fails() {
    let mut root = Root::new();
    root.push_rule(Rule::new(".box").decl("color", r#"themify({"light": "primary-9"})"#));
    let err = themify(&mut root, &options()).unwrap_err();
    assert!(matches!(err, ThemifyError::UnknownColorReference { .. }));
}

#[test]
fn test_init_requires_colors_for_every_variation() {
    let palette = Palette::new().variation("light", [("primary-0", "#ffffff")]);
    let mut root = Root::new();
    let err = init_themify(&mut root, &ThemifyOptions::new(palette)).unwrap_err();
    assert_eq!(
        err,
        ThemifyError::EmptyPaletteVariation {
            variation: "dark".to_string(),
        }
    );
}

// ============================================================================
// Custom variation sets
// ============================================================================

#[test]
fn test_three_variation_set_with_custom_default() {
    let palette = Palette::new()
        .variation("sepia", [("ink", "#332200")])
        .variation("light", [("ink", "#222222")])
        .variation("dark", [("ink", "#dddddd")]);
    let opts = ThemifyOptions::new(palette).with_variations(
        vec!["sepia".into(), "light".into(), "dark".into()],
        "sepia",
    );

    let mut root = Root::new();
    root.push_rule(Rule::new("p").decl(
        "color",
        r#"themify({"sepia": "ink", "light": "ink", "dark": "ink"})"#,
    ));

    init_themify(&mut root, &opts).unwrap();
    themify(&mut root, &opts).unwrap();

    let css = root.to_string();
    // sepia is the default: it owns :root and the in-place value
    assert!(css.contains(":root {\n  --ink: 51, 34, 0;\n}"));
    assert!(css.contains(".light {\n  --ink: 34, 34, 34;\n}"));
    assert!(css.contains(".dark {\n  --ink: 221, 221, 221;\n}"));
    // identical var references across variations merge into one selector list
    assert!(css.contains("p, .light p, .dark p {"));
}

#[test]
fn test_multi_marker_declaration_end_to_end() {
    let mut root = Root::new();
    root.push_rule(Rule::new(".fade").decl(
        "background",
        concat!(
            r#"linear-gradient(themify({"light": "primary-0", "dark": "primary-0"}), "#,
            r#"themify({"light": "accent", "dark": "accent"}))"#
        ),
    ));

    themify(&mut root, &options()).unwrap();

    assert_eq!(
        root.to_string(),
        "\
.fade, .t-dark .fade {
  background: linear-gradient(rgba(var(--primary-0), 1), rgba(var(--accent), 1));
}"
    );
}

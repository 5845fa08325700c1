//! Fallback pass for environments without custom-property support.
//!
//! A structurally parallel, read-only walk over the tree that produces two
//! side artifacts:
//!
//! 1. A flat stylesheet with fully resolved literal colors
//!    ([`ExecMode::CssColor`]), covering every variation through scoped
//!    selectors.
//! 2. A JSON table mapping each variation to rules whose values are
//!    `%[...]%` placeholder tokens ([`ExecMode::DynamicExpression`]), for a
//!    runtime to substitute.
//!
//! The primary tree is never mutated; running the pass twice over the same
//! tree yields byte-identical artifacts. Minifying and persisting the blobs
//! is the caller's concern.

use std::collections::BTreeMap;

use crate::config::ThemifyOptions;
use crate::css::{Declaration, Node, Root, Rule};
use crate::error::ThemifyError;
use crate::expr::{has_marker, resolve_decl_value};
use crate::translate::ExecMode;

/// Side artifacts produced by the fallback pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackArtifacts {
    /// Flat stylesheet text with fully resolved literal colors.
    pub css: String,
    /// JSON table mapping every configured variation to its placeholder
    /// rules (an empty string when a variation contributed none).
    pub dynamic: String,
}

/// Builds the fallback artifacts for every marker-bearing rule.
///
/// Returns `Ok(None)` when no rule in the tree contains a marker.
pub fn process_fallback_rules(
    root: &Root,
    options: &ThemifyOptions,
) -> Result<Option<FallbackArtifacts>, ThemifyError> {
    let mut css_rules: Vec<Rule> = Vec::new();
    let mut dynamic_rules: BTreeMap<&str, Vec<Rule>> = options
        .variations
        .iter()
        .map(|v| (v.as_str(), Vec::new()))
        .collect();

    for node in &root.nodes {
        collect_node(node, options, &mut css_rules, &mut dynamic_rules)?;
    }

    if css_rules.is_empty() {
        return Ok(None);
    }

    let css = css_rules
        .iter()
        .map(Rule::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    let table: BTreeMap<&str, String> = dynamic_rules
        .iter()
        .map(|(variation, rules)| {
            let text = rules
                .iter()
                .map(Rule::to_string)
                .collect::<Vec<_>>()
                .join("\n");
            (*variation, text)
        })
        .collect();
    let dynamic = serde_json::to_string(&table)?;

    Ok(Some(FallbackArtifacts { css, dynamic }))
}

fn collect_node<'a>(
    node: &Node,
    options: &'a ThemifyOptions,
    css_rules: &mut Vec<Rule>,
    dynamic_rules: &mut BTreeMap<&'a str, Vec<Rule>>,
) -> Result<(), ThemifyError> {
    match node {
        Node::Rule(rule) => collect_rule(rule, options, css_rules, dynamic_rules),
        Node::AtRule(at) => {
            for child in &at.nodes {
                collect_node(child, options, css_rules, dynamic_rules)?;
            }
            Ok(())
        }
    }
}

fn collect_rule<'a>(
    rule: &Rule,
    options: &'a ThemifyOptions,
    css_rules: &mut Vec<Rule>,
    dynamic_rules: &mut BTreeMap<&'a str, Vec<Rule>>,
) -> Result<(), ThemifyError> {
    if !rule.decls.iter().any(|decl| has_marker(&decl.value)) {
        return Ok(());
    }

    // one parallel rule per variation per mode: the default variation keeps
    // the original selectors, the others get scoped selectors
    let shells = |options: &ThemifyOptions| -> Vec<(String, Rule)> {
        options
            .variations
            .iter()
            .map(|variation| {
                let shell = if options.is_default(variation) {
                    rule.clone_empty()
                } else {
                    Rule::with_selectors(options.scoped_selectors(&rule.selectors, variation))
                };
                (variation.clone(), shell)
            })
            .collect()
    };
    let mut color_shells = shells(options);
    let mut dynamic_shells = shells(options);

    for decl in &rule.decls {
        if !has_marker(&decl.value) {
            continue;
        }
        for (variation, shell) in color_shells.iter_mut() {
            if let Some(value) =
                resolve_decl_value(&decl.value, variation, options, ExecMode::CssColor)?
            {
                shell.append(Declaration::new(decl.prop.clone(), value));
            }
        }
        for (variation, shell) in dynamic_shells.iter_mut() {
            if let Some(value) =
                resolve_decl_value(&decl.value, variation, options, ExecMode::DynamicExpression)?
            {
                shell.append(Declaration::new(decl.prop.clone(), value));
            }
        }
    }

    css_rules.extend(color_shells.into_iter().map(|(_, shell)| shell));
    for (variation, shell) in dynamic_shells {
        if let Some(rules) = dynamic_rules.get_mut(variation.as_str()) {
            rules.push(shell);
        }
    }
    Ok(())
}

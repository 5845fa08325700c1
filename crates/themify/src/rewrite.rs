//! The primary, mutating rewrite pass.
//!
//! Each marker declaration is replaced in place with its default-variation
//! translation (custom-property references), so the untouched tree already
//! renders the default theme. Non-default variations become reachable
//! through variation-scoped selectors: either appended to the original rule
//! (when the translated value is byte-identical to the default) or collected
//! into lazily created clone rules appended to the end of the root.
//!
//! Rules sitting directly inside a keyframes context are only rewritten in
//! place; no scoped selector can meaningfully apply there, so no extra rules
//! or selectors are created.

use std::collections::{HashMap, HashSet};

use crate::config::ThemifyOptions;
use crate::css::{AtRule, Declaration, Node, Root, Rule};
use crate::error::ThemifyError;
use crate::expr::{has_marker, resolve_decl_value};
use crate::translate::ExecMode;

/// Rewrites every marker declaration and appends the variation-scoped
/// sibling rules to the root.
pub fn process_rules(root: &mut Root, options: &ThemifyOptions) -> Result<(), ThemifyError> {
    let mut created = Vec::new();
    for node in &mut root.nodes {
        rewrite_node(node, None, options, &mut created)?;
    }
    root.nodes.extend(created.into_iter().map(Node::Rule));
    Ok(())
}

fn rewrite_node(
    node: &mut Node,
    parent_at: Option<&str>,
    options: &ThemifyOptions,
    created: &mut Vec<Rule>,
) -> Result<(), ThemifyError> {
    match node {
        Node::Rule(rule) => rewrite_rule(rule, parent_at, options, created),
        Node::AtRule(at) => {
            let AtRule { name, nodes, .. } = at;
            for child in nodes {
                rewrite_node(child, Some(name.as_str()), options, created)?;
            }
            Ok(())
        }
    }
}

/// Rules directly inside a keyframes block cannot be duplicated under
/// variation selectors (covers vendor-prefixed forms too).
fn forbids_duplication(parent_at: Option<&str>) -> bool {
    parent_at.is_some_and(|name| name.contains("keyframes"))
}

fn rewrite_rule(
    rule: &mut Rule,
    parent_at: Option<&str>,
    options: &ThemifyOptions,
    created_out: &mut Vec<Rule>,
) -> Result<(), ThemifyError> {
    // scoped selectors derive from the selectors as authored
    let base_selectors = rule.selectors.clone();
    let mut merged: Vec<String> = Vec::new();
    let mut merged_variations: HashSet<&str> = HashSet::new();
    let mut clones: Vec<Rule> = Vec::new();
    let mut clone_index: HashMap<&str, usize> = HashMap::new();
    let global = forbids_duplication(parent_at);

    for i in 0..rule.decls.len() {
        let raw = rule.decls[i].value.clone();
        if !has_marker(&raw) {
            continue;
        }
        let prop = rule.decls[i].prop.clone();
        let Some(default_value) =
            resolve_decl_value(&raw, &options.default_variation, options, ExecMode::CssVar)?
        else {
            // the resolver raises for a missing default override
            continue;
        };
        rule.decls[i].value = default_value.clone();

        if global {
            continue;
        }

        for variation in options.non_default_variations() {
            let Some(value) = resolve_decl_value(&raw, variation, options, ExecMode::CssVar)?
            else {
                continue;
            };
            if value == default_value {
                // identical output under this variation: extend the original
                // rule's selectors instead of duplicating the declaration
                if merged_variations.insert(variation) {
                    merged.extend(options.scoped_selectors(&base_selectors, variation));
                }
            } else {
                let index = match clone_index.get(variation) {
                    Some(&index) => index,
                    None => {
                        clones.push(Rule::with_selectors(
                            options.scoped_selectors(&base_selectors, variation),
                        ));
                        clone_index.insert(variation, clones.len() - 1);
                        clones.len() - 1
                    }
                };
                clones[index].append(Declaration::new(prop.clone(), value));
            }
        }
    }

    rule.selectors.extend(merged);
    created_out.extend(clones);
    Ok(())
}

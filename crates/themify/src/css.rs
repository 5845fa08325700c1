//! A minimal CSS rule-tree model.
//!
//! The engine operates on an already-parsed tree; full CSS parsing is out of
//! scope. Callers build trees programmatically and serialize them back to
//! text through `Display`.
//!
//! # Example
//!
//! ```rust
//! use themify::{Root, Rule};
//!
//! let mut root = Root::new();
//! root.push_rule(Rule::new(".box").decl("color", "#fff"));
//! assert_eq!(root.to_string(), ".box {\n  color: #fff;\n}");
//! ```

use std::fmt;

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub prop: String,
    pub value: String,
}

impl Declaration {
    pub fn new(prop: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            prop: prop.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.prop, self.value)
    }
}

/// A selector set plus its ordered declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selectors: Vec<String>,
    pub decls: Vec<Declaration>,
}

impl Rule {
    /// Creates a rule from a selector string, splitting on commas.
    pub fn new(selector: impl Into<String>) -> Self {
        let selector = selector.into();
        Self {
            selectors: selector
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            decls: Vec::new(),
        }
    }

    /// Creates a rule from an already-split selector list.
    pub fn with_selectors(selectors: Vec<String>) -> Self {
        Self {
            selectors,
            decls: Vec::new(),
        }
    }

    /// Appends a declaration, returning `self` for chaining.
    pub fn decl(mut self, prop: impl Into<String>, value: impl Into<String>) -> Self {
        self.decls.push(Declaration::new(prop, value));
        self
    }

    /// Appends a declaration in place.
    pub fn append(&mut self, decl: Declaration) {
        self.decls.push(decl);
    }

    /// Clones the rule with its declarations removed.
    pub fn clone_empty(&self) -> Self {
        Self {
            selectors: self.selectors.clone(),
            decls: Vec::new(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.selectors.join(", "))?;
        if self.decls.is_empty() {
            return write!(f, "}}");
        }
        writeln!(f)?;
        for decl in &self.decls {
            writeln!(f, "  {}", decl)?;
        }
        write!(f, "}}")
    }
}

/// An at-rule context (`@media`, `@keyframes`, ...) holding nested nodes.
///
/// The name is stored without the leading `@`, so vendor-prefixed forms like
/// `-webkit-keyframes` keep their prefix in `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtRule {
    pub name: String,
    pub params: String,
    pub nodes: Vec<Node>,
}

impl AtRule {
    pub fn new(name: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: params.into(),
            nodes: Vec::new(),
        }
    }

    /// Nests a rule, returning `self` for chaining.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.nodes.push(Node::Rule(rule));
        self
    }
}

impl fmt::Display for AtRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;
        if !self.params.is_empty() {
            write!(f, " {}", self.params)?;
        }
        write!(f, " {{")?;
        if self.nodes.is_empty() {
            return write!(f, "}}");
        }
        writeln!(f)?;
        for node in &self.nodes {
            for line in node.to_string().lines() {
                writeln!(f, "  {}", line)?;
            }
        }
        write!(f, "}}")
    }
}

/// A node in the rule tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Rule(Rule),
    AtRule(AtRule),
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Rule(rule) => rule.fmt(f),
            Node::AtRule(at) => at.fmt(f),
        }
    }
}

/// The root of a rule tree: an ordered sequence of nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Root {
    pub nodes: Vec<Node>,
}

impl Root {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_rule(&mut self, rule: Rule) {
        self.nodes.push(Node::Rule(rule));
    }

    pub fn push_at_rule(&mut self, at: AtRule) {
        self.nodes.push(Node::AtRule(at));
    }

    /// Inserts the given rules ahead of every existing node.
    pub fn prepend_rules(&mut self, rules: Vec<Rule>) {
        let mut nodes: Vec<Node> = rules.into_iter().map(Node::Rule).collect();
        nodes.append(&mut self.nodes);
        self.nodes = nodes;
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            node.fmt(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_new_splits_selectors() {
        let rule = Rule::new(".a, .b");
        assert_eq!(rule.selectors, vec![".a".to_string(), ".b".to_string()]);
    }

    #[test]
    fn test_declaration_display() {
        let decl = Declaration::new("color", "#fff");
        assert_eq!(decl.to_string(), "color: #fff;");
    }

    #[test]
    fn test_rule_display() {
        let rule = Rule::new(".box").decl("color", "#fff").decl("opacity", "0.5");
        assert_eq!(
            rule.to_string(),
            ".box {\n  color: #fff;\n  opacity: 0.5;\n}"
        );
    }

    #[test]
    fn test_empty_rule_display() {
        let rule = Rule::new(".box");
        assert_eq!(rule.to_string(), ".box {}");
    }

    #[test]
    fn test_multi_selector_display() {
        let rule = Rule::with_selectors(vec![".a".into(), ".dark .a".into()]).decl("top", "0");
        assert_eq!(rule.to_string(), ".a, .dark .a {\n  top: 0;\n}");
    }

    #[test]
    fn test_at_rule_display() {
        let at = AtRule::new("keyframes", "fade").rule(Rule::new("from").decl("opacity", "0"));
        assert_eq!(
            at.to_string(),
            "@keyframes fade {\n  from {\n    opacity: 0;\n  }\n}"
        );
    }

    #[test]
    fn test_at_rule_without_params() {
        let at = AtRule::new("font-face", "");
        assert_eq!(at.to_string(), "@font-face {}");
    }

    #[test]
    fn test_root_display_joins_nodes() {
        let mut root = Root::new();
        root.push_rule(Rule::new(".a").decl("top", "0"));
        root.push_rule(Rule::new(".b").decl("top", "1px"));
        assert_eq!(
            root.to_string(),
            ".a {\n  top: 0;\n}\n.b {\n  top: 1px;\n}"
        );
    }

    #[test]
    fn test_prepend_rules() {
        let mut root = Root::new();
        root.push_rule(Rule::new(".existing"));
        root.prepend_rules(vec![Rule::new(":root"), Rule::new(".dark")]);
        let selectors: Vec<_> = root
            .nodes
            .iter()
            .map(|n| match n {
                Node::Rule(r) => r.selectors[0].clone(),
                Node::AtRule(_) => unreachable!(),
            })
            .collect();
        assert_eq!(selectors, vec![":root", ".dark", ".existing"]);
    }

    #[test]
    fn test_clone_empty_keeps_selectors() {
        let rule = Rule::new(".box").decl("color", "#fff");
        let empty = rule.clone_empty();
        assert_eq!(empty.selectors, rule.selectors);
        assert!(empty.decls.is_empty());
    }
}

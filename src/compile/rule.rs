//! Flattened rules and their text rendering.

use std::fmt::Write;

use super::options::CompileOptions;

/// One normalized `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Kebab-case property name.
    pub property: String,
    /// Value text, unit already applied.
    pub value: String,
}

/// A fully qualified selector with its declarations, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl CompiledRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }
}

/// Renders rules as CSS text, one block per rule.
///
/// Each block has the shape `selector {\n<indent>property: value;\n}\n`.
/// A rule without declarations still produces its (empty) block.
pub fn format_rules(rules: &[CompiledRule], options: &CompileOptions) -> String {
    let mut out = String::new();
    for rule in rules {
        // Writing into a String cannot fail
        let _ = writeln!(out, "{} {{", rule.selector);
        for decl in &rule.declarations {
            let _ = writeln!(out, "{}{}: {};", options.indent, decl.property, decl.value);
        }
        out.push_str("}\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(property: &str, value: &str) -> Declaration {
        Declaration {
            property: property.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_format_single_rule() {
        let mut rule = CompiledRule::new(".a");
        rule.declarations.push(decl("color", "red"));
        rule.declarations.push(decl("margin-top", "10px"));

        let css = format_rules(&[rule], &CompileOptions::default());
        assert_eq!(css, ".a {\n  color: red;\n  margin-top: 10px;\n}\n");
    }

    #[test]
    fn test_format_empty_rule() {
        let css = format_rules(&[CompiledRule::new(".empty")], &CompileOptions::default());
        assert_eq!(css, ".empty {\n}\n");
    }

    #[test]
    fn test_format_no_rules() {
        assert_eq!(format_rules(&[], &CompileOptions::default()), "");
    }

    #[test]
    fn test_format_uses_indent() {
        let mut rule = CompiledRule::new("#x");
        rule.declarations.push(decl("order", "1"));
        let css = format_rules(&[rule], &CompileOptions::new().indent(4));
        assert_eq!(css, "#x {\n    order: 1;\n}\n");
    }
}

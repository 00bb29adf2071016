//! Compilation of style trees to CSS text.
//!
//! Compilation runs in two pure steps:
//!
//! 1. [`flatten`] walks the tree depth-first and produces one
//!    [`CompiledRule`] per selector, qualifying nested selectors with their
//!    ancestors (`.a` containing `.b` becomes `.a .b`).
//! 2. [`format_rules`] renders the rules as text.
//!
//! [`build`] composes both with default [`CompileOptions`]. Neither step
//! touches a document, so the same tree always yields the same text.
//!
//! # Ordering
//!
//! A block's declarations keep source order. The block for a selector is
//! emitted before the blocks of its nested selectors, which follow in key
//! order, depth-first.
//!
//! # Example
//!
//! ```rust
//! use stylesheet_loader::{build, StyleTree};
//!
//! let styles = StyleTree::new().rule(
//!     ".my-style",
//!     StyleTree::new()
//!         .decl("myStyleRule", 15)
//!         .rule(".first-level", StyleTree::new().decl("zIndex", 2)),
//! );
//!
//! assert_eq!(
//!     build(&styles),
//!     ".my-style {\n  my-style-rule: 15px;\n}\n.my-style .first-level {\n  z-index: 2;\n}\n",
//! );
//! ```

mod case;
mod options;
pub mod properties;
mod rule;

pub use case::kebab_case;
pub use options::CompileOptions;
pub use rule::{format_rules, CompiledRule, Declaration};

use log::debug;

use crate::tree::{StyleEntry, StyleTree, StyleValue};

/// Compiles a style tree to CSS text with default options.
pub fn build(tree: &StyleTree) -> String {
    build_with(tree, &CompileOptions::default())
}

/// Compiles a style tree to CSS text with the given options.
pub fn build_with(tree: &StyleTree, options: &CompileOptions) -> String {
    format_rules(&flatten(tree, options), options)
}

/// Flattens a style tree into qualified rules, in output order.
///
/// Top-level keys are selectors. A top-level entry holding a plain value has
/// no selector to belong to and is skipped.
pub fn flatten(tree: &StyleTree, options: &CompileOptions) -> Vec<CompiledRule> {
    let mut rules = Vec::new();
    for (selector, entry) in tree.iter() {
        match entry {
            StyleEntry::Nested(block) => flatten_block(selector, block, options, &mut rules),
            StyleEntry::Value(_) => {
                debug!("skipping top-level declaration '{}' outside any selector", selector);
            }
        }
    }
    rules
}

fn flatten_block(
    selector: &str,
    block: &StyleTree,
    options: &CompileOptions,
    rules: &mut Vec<CompiledRule>,
) {
    let mut rule = CompiledRule::new(selector);
    let mut nested = Vec::new();

    for (key, entry) in block.iter() {
        match entry {
            StyleEntry::Value(value) => {
                let property = kebab_case(key);
                let value = normalize_value(&property, value, options);
                rule.declarations.push(Declaration { property, value });
            }
            StyleEntry::Nested(child) => nested.push((key, child)),
        }
    }

    rules.push(rule);

    for (key, child) in nested {
        let qualified = format!("{} {}", selector, key);
        flatten_block(&qualified, child, options, rules);
    }
}

/// Renders a value, appending the unit to bare numbers of unit-bearing properties.
fn normalize_value(property: &str, value: &StyleValue, options: &CompileOptions) -> String {
    match value {
        StyleValue::Number(n) if !options.is_unitless(property) => {
            format!("{}{}", n, options.unit)
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> StyleTree {
        StyleTree::new()
            .rule(
                ".my-color",
                StyleTree::new().decl("color", "#111111").rule(
                    ".first-level",
                    StyleTree::new()
                        .decl("backgroundColor", "#2f2f2f")
                        .decl("marginTop", 10),
                ),
            )
            .rule(
                ".my-color .first-level",
                StyleTree::new()
                    .decl("marginTop", "40px")
                    .rule(".second-level", StyleTree::new().decl("marginLeft", 31)),
            )
    }

    #[test]
    fn test_build_full_fixture() {
        let css = build(&fixture());
        let expected = "\
.my-color {
  color: #111111;
}
.my-color .first-level {
  background-color: #2f2f2f;
  margin-top: 10px;
}
.my-color .first-level {
  margin-top: 40px;
}
.my-color .first-level .second-level {
  margin-left: 31px;
}
";
        assert_eq!(css, expected);
    }

    #[test]
    fn test_nested_selectors_are_flattened() {
        let styles = StyleTree::new().rule(
            ".a",
            StyleTree::new().rule(".b", StyleTree::new().rule(".c", StyleTree::new().decl("x", 1))),
        );

        let rules = flatten(&styles, &CompileOptions::default());
        let selectors: Vec<&str> = rules.iter().map(|r| r.selector.as_str()).collect();
        assert_eq!(selectors, vec![".a", ".a .b", ".a .b .c"]);

        let css = build(&styles);
        assert!(css.contains(".a .b .c {\n  x: 1px;\n}\n"));
        // one level of braces only
        assert!(!css.contains("{\n  .b"));
    }

    #[test]
    fn test_camel_case_and_px() {
        let styles = StyleTree::new().rule(".my-style", StyleTree::new().decl("myStyleRule", 15));
        assert!(build(&styles).contains("my-style-rule: 15px;"));
    }

    #[test]
    fn test_unitless_properties_never_get_px() {
        let mut block = StyleTree::new();
        for (index, name) in properties::UNITLESS_PROPERTIES.iter().enumerate() {
            block.insert(*name, index);
        }
        let css = build(&StyleTree::new().rule(".my-style", block));
        assert!(!css.contains("px;"));
        assert!(css.contains("z-index: "));
    }

    #[test]
    fn test_declarations_before_nested_blocks() {
        // nested key appears first in source, its block still follows the parent's
        let styles = StyleTree::new().rule(
            ".p",
            StyleTree::new()
                .rule(".child", StyleTree::new().decl("order", 1))
                .decl("color", "red"),
        );

        assert_eq!(
            build(&styles),
            ".p {\n  color: red;\n}\n.p .child {\n  order: 1;\n}\n"
        );
    }

    #[test]
    fn test_depth_first_order() {
        let styles = StyleTree::new().rule(
            ".r",
            StyleTree::new()
                .rule(".a", StyleTree::new().rule(".deep", StyleTree::new()))
                .rule(".b", StyleTree::new()),
        );

        let selectors: Vec<String> = flatten(&styles, &CompileOptions::default())
            .into_iter()
            .map(|r| r.selector)
            .collect();
        assert_eq!(selectors, vec![".r", ".r .a", ".r .a .deep", ".r .b"]);
    }

    #[test]
    fn test_empty_block_is_emitted() {
        let styles = StyleTree::new().rule(".empty", StyleTree::new());
        assert_eq!(build(&styles), ".empty {\n}\n");
    }

    #[test]
    fn test_strings_pass_through() {
        let styles = StyleTree::new().rule(".a", StyleTree::new().decl("width", "calc(100% - 2px)"));
        assert!(build(&styles).contains("width: calc(100% - 2px);"));
    }

    #[test]
    fn test_top_level_value_is_skipped() {
        let styles = StyleTree::new()
            .decl("color", "red")
            .rule(".a", StyleTree::new().decl("color", "blue"));
        assert_eq!(build(&styles), ".a {\n  color: blue;\n}\n");
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(build(&StyleTree::new()), "");
    }

    #[test]
    fn test_build_with_options() {
        let styles = StyleTree::new().rule(
            ".a",
            StyleTree::new().decl("fontSize", 2).decl("flexBasis", 3),
        );
        let options = CompileOptions::new().unit("rem").indent(1).unitless("flexBasis");
        assert_eq!(
            build_with(&styles, &options),
            ".a {\n font-size: 2rem;\n flex-basis: 3;\n}\n"
        );
    }

    #[test]
    fn test_f32_values_compile_to_short_decimals() {
        let styles = StyleTree::new().rule(
            ".a",
            StyleTree::new().decl("opacity", 0.1f32).decl("width", 0.3f32),
        );
        assert_eq!(build(&styles), ".a {\n  opacity: 0.1;\n  width: 0.3px;\n}\n");
    }

    #[test]
    fn test_fractional_values() {
        let styles = StyleTree::new().rule(
            ".a",
            StyleTree::new().decl("opacity", 0.5).decl("borderWidth", 1.5),
        );
        let css = build(&styles);
        assert!(css.contains("opacity: 0.5;"));
        assert!(css.contains("border-width: 1.5px;"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn property_name() -> impl Strategy<Value = String> {
        "[a-z]{1,8}([A-Z][a-z]{1,6}){0,3}"
    }

    proptest! {
        #[test]
        fn build_is_deterministic(
            props in prop::collection::vec((property_name(), 0u32..1000), 0..12),
        ) {
            let block: StyleTree = props.into_iter().collect();
            let tree = StyleTree::new().rule(".x", block);
            prop_assert_eq!(build(&tree), build(&tree.clone()));
        }

        #[test]
        fn numbers_get_px_unless_unitless(name in property_name(), n in 0u32..10_000) {
            let tree = StyleTree::new().rule(".x", StyleTree::new().decl(&name, n));
            let css = build(&tree);
            let expected = if properties::is_unitless(&name) {
                format!("{}: {};", kebab_case(&name), n)
            } else {
                format!("{}: {}px;", kebab_case(&name), n)
            };
            prop_assert!(css.contains(&expected));
        }

        #[test]
        fn kebab_case_output_has_no_uppercase(name in property_name()) {
            prop_assert!(!kebab_case(&name).chars().any(|c| c.is_ascii_uppercase()));
        }
    }
}

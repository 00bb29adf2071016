//! Integration tests for compiling style trees loaded from files.

use stylesheet_loader::{build, properties, StyleTree};

const EXPECTED: &str = include_str!("fixtures/card.css");

#[test]
fn test_json_fixture_compiles() {
    let tree = StyleTree::from_json(include_str!("fixtures/card.json")).unwrap();
    assert_eq!(build(&tree), EXPECTED);
}

#[test]
fn test_yaml_fixture_compiles_identically() {
    let tree = StyleTree::from_yaml(include_str!("fixtures/card.yaml")).unwrap();
    assert_eq!(build(&tree), EXPECTED);
}

#[test]
fn test_json_value_round_trip_through_serde() {
    let value = serde_json::json!({
        ".my-style": {
            "myStyleRule": 15,
            ".first-level": {
                ".sub-first-level": { "paddingBottom": 15 }
            }
        }
    });
    let tree: StyleTree = serde_json::from_value(value).unwrap();
    let css = build(&tree);

    assert!(css.contains(".my-style .first-level .sub-first-level {"));
    assert!(css.contains("my-style-rule: 15px;"));
    assert!(css.contains("padding-bottom: 15px;"));
}

#[test]
fn test_unitless_table_from_json() {
    let mut block = serde_json::Map::new();
    for (index, name) in properties::UNITLESS_PROPERTIES.iter().enumerate() {
        block.insert(name.to_string(), serde_json::json!(index));
    }
    let tree: StyleTree = serde_json::from_value(serde_json::json!({ ".my-style": block })).unwrap();

    assert!(!build(&tree).contains("px;"));
}

#[test]
fn test_kebab_case_keys_are_accepted() {
    let tree = StyleTree::from_json(r#"{ ".a": { "z-index": 4, "margin-top": 4 } }"#).unwrap();
    assert_eq!(build(&tree), ".a {\n  z-index: 4;\n  margin-top: 4px;\n}\n");
}

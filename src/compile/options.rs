//! Compilation settings.

use serde::Deserialize;

use super::case::kebab_case;
use super::properties::is_unitless;

/// Settings that shape compiled CSS.
///
/// The defaults reproduce the plain [`build`](crate::build) output: `px` for
/// bare numbers, two-space indentation and the built-in unit-less table.
/// Options deserialize from any serde format, with every field optional:
///
/// ```rust
/// use stylesheet_loader::CompileOptions;
///
/// let options: CompileOptions =
///     serde_json::from_str(r#"{ "unit": "rem", "unitless": ["flexBasis"] }"#).unwrap();
/// assert_eq!(options.unit, "rem");
/// assert_eq!(options.indent, "  ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    /// Suffix appended to bare numbers of unit-bearing properties.
    pub unit: String,
    /// Indentation written before each declaration.
    pub indent: String,
    /// Extra unit-less properties, in camelCase or kebab-case.
    pub unitless: Vec<String>,
}

impl CompileOptions {
    /// Creates options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unit suffix, returning the updated options for chaining.
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Sets the declaration indentation to `width` spaces.
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = " ".repeat(width);
        self
    }

    /// Marks an additional property as unit-less.
    pub fn unitless(mut self, property: impl Into<String>) -> Self {
        self.unitless.push(property.into());
        self
    }

    /// Returns true if `property` (already kebab-case) takes bare numbers.
    pub(crate) fn is_unitless(&self, property: &str) -> bool {
        is_unitless(property) || self.unitless.iter().any(|p| kebab_case(p) == property)
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            unit: "px".to_string(),
            indent: "  ".to_string(),
            unitless: Vec::new(),
        }
    }
}

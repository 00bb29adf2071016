//! Property metadata: which properties take bare numbers.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use super::case::kebab_case;

/// Properties whose numeric values are emitted without a unit suffix.
///
/// Names are listed in camelCase, the spelling style trees use.
pub const UNITLESS_PROPERTIES: &[&str] = &[
    "animationIterationCount",
    "aspectRatio",
    "borderImageOutset",
    "borderImageSlice",
    "borderImageWidth",
    "boxFlex",
    "boxFlexGroup",
    "boxOrdinalGroup",
    "columnCount",
    "columns",
    "flex",
    "flexGrow",
    "flexPositive",
    "flexShrink",
    "flexNegative",
    "flexOrder",
    "gridArea",
    "gridRow",
    "gridRowEnd",
    "gridRowSpan",
    "gridRowStart",
    "gridColumn",
    "gridColumnEnd",
    "gridColumnSpan",
    "gridColumnStart",
    "fontWeight",
    "lineClamp",
    "lineHeight",
    "opacity",
    "order",
    "orphans",
    "scale",
    "tabSize",
    "widows",
    "zIndex",
    "zoom",
    // SVG
    "fillOpacity",
    "floodOpacity",
    "stopOpacity",
    "strokeDasharray",
    "strokeDashoffset",
    "strokeMiterlimit",
    "strokeOpacity",
    "strokeWidth",
];

static UNITLESS: Lazy<HashSet<String>> =
    Lazy::new(|| UNITLESS_PROPERTIES.iter().map(|name| kebab_case(name)).collect());

/// Returns true if bare numbers for `property` must not get a unit.
///
/// Accepts camelCase (`zIndex`) or kebab-case (`z-index`) spelling.
pub fn is_unitless(property: &str) -> bool {
    UNITLESS.contains(&kebab_case(property))
}

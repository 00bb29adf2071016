//! Property name normalization.

/// Converts a camelCase property name to kebab-case.
///
/// Each upper-case ASCII letter becomes `-` followed by its lower-case form.
/// Names that are already kebab-case come back unchanged, and a leading
/// capital produces a leading dash, which is how vendor-prefixed names are
/// written in camelCase.
///
/// # Example
///
/// ```rust
/// use stylesheet_loader::kebab_case;
///
/// assert_eq!(kebab_case("myStyleRule"), "my-style-rule");
/// assert_eq!(kebab_case("WebkitTransition"), "-webkit-transition");
/// assert_eq!(kebab_case("z-index"), "z-index");
/// ```
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case_camel() {
        assert_eq!(kebab_case("backgroundColor"), "background-color");
        assert_eq!(kebab_case("borderTopLeftRadius"), "border-top-left-radius");
    }

    #[test]
    fn test_kebab_case_single_word() {
        assert_eq!(kebab_case("color"), "color");
        assert_eq!(kebab_case(""), "");
    }

    #[test]
    fn test_kebab_case_vendor_prefix() {
        assert_eq!(kebab_case("MozBoxSizing"), "-moz-box-sizing");
        assert_eq!(kebab_case("msFlex"), "ms-flex");
    }

    #[test]
    fn test_kebab_case_idempotent_on_kebab() {
        let once = kebab_case("lineHeight");
        assert_eq!(kebab_case(&once), once);
    }

    #[test]
    fn test_kebab_case_custom_property_untouched() {
        assert_eq!(kebab_case("--main-color"), "--main-color");
    }
}

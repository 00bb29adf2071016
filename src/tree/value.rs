//! Declaration values.

use std::fmt;

/// A declaration value: either literal text or a bare number.
///
/// Numbers print in plain decimal notation (`15`, `0.5`, `0.0000001`). Unlike
/// JavaScript, very large or very small magnitudes are never written in
/// exponent form, so `1e21` renders as `1000000000000000000000`.
///
/// Numbers are the only values the compiler rewrites. Whether a unit suffix
/// is appended depends on the property they are declared under, see
/// [`crate::properties::is_unitless`].
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Text passed through unchanged (`"#111"`, `"40px"`, `"auto"`).
    Text(String),
    /// A bare number (`15`, `0.5`).
    Number(f64),
}

impl StyleValue {
    /// Returns true if this value is a bare number.
    pub fn is_number(&self) -> bool {
        matches!(self, StyleValue::Number(_))
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Text(text) => f.write_str(text),
            // f64's Display prints integral values without a fraction, `15` not `15.0`
            StyleValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<&String> for StyleValue {
    fn from(s: &String) -> Self {
        StyleValue::Text(s.clone())
    }
}

macro_rules! number_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StyleValue {
                fn from(n: $ty) -> Self {
                    StyleValue::Number(n as f64)
                }
            }
        )*
    };
}

number_from!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f64);

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        // widen through the shortest decimal text so 0.1f32 stays 0.1
        StyleValue::Number(n.to_string().parse().unwrap_or(n as f64))
    }
}

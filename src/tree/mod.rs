//! Style trees: the input to compilation.
//!
//! - [`StyleTree`]: ordered, nested map of selectors and declarations
//! - [`StyleEntry`]: a declaration value or a nested tree
//! - [`StyleValue`]: text or a bare number
//! - [`LoadError`]: errors from loading trees out of JSON or YAML

mod de;
#[allow(clippy::module_inception)]
mod tree;
mod value;

pub use de::LoadError;
pub use tree::{StyleEntry, StyleTree};
pub use value::StyleValue;

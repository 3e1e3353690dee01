//! Batch tools operating on tree artifacts
//!
//! - `uppercase` - rewrite every `name` to uppercase
//! - `extract` - cut a smaller tree out of a larger one

pub mod extract;
pub mod uppercase;

pub use extract::{extract, ExtractMode};
pub use uppercase::{uppercase_file, uppercase_names};

//! Genealogy - outline-to-tree compiler for family-tree diagrams
//!
//! Converts a hand-written indented outline into the JSON tree consumed by
//! a collapsible diagram viewer, and models the viewer's collapse state.

pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod parser;
pub mod tools;
pub mod view;

// Re-exports for convenience
pub use config::Config;
pub use error::{GenealogyError, GenealogyResult};
pub use io::{from_json_str, read_outline, read_tree_json, to_json_pretty, write_tree_json};
pub use models::{TreeNode, DEFAULT_ROOT_LABEL, SYNTHETIC_ROOT_ID};
pub use parser::{
    clean_label, parse_outline, parse_outline_with, OrphanLine, OrphanPolicy, ParseOptions,
    ParsedOutline,
};
pub use tools::{extract, uppercase_file, uppercase_names, ExtractMode};
pub use view::{
    prune_to_depth, visible_tree, wrap_label, CollapsedSet, ExpansionDepth, ViewState, VisibleRow,
};

pub mod build;
pub mod extract;
pub mod show;
pub mod uppercase;

use std::path::Path;

use anyhow::{Context, Result};
use genealogy::{parse_outline_with, read_outline, read_tree_json, Config, TreeNode};

/// Load a tree from a JSON artifact, or parse it when given an outline
pub fn load_tree(path: &Path, config: &Config) -> Result<TreeNode> {
    let is_outline = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e.to_ascii_lowercase().as_str(), "md" | "markdown" | "txt"))
        .unwrap_or(false);

    if is_outline {
        let text = read_outline(path)?;
        let parsed = parse_outline_with(&text, &config.parse_options());
        for orphan in &parsed.orphans {
            tracing::warn!(
                line = orphan.line,
                id = %orphan.id,
                "'{}' has no parent bullet and was dropped",
                orphan.label
            );
        }
        Ok(parsed.tree)
    } else {
        read_tree_json(path).with_context(|| format!("failed to load tree from {}", path.display()))
    }
}

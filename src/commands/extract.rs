use std::path::Path;

use anyhow::{Context, Result};
use genealogy::{extract, read_tree_json, write_tree_json, ExtractMode};

pub fn cmd_extract(input: &Path, name: &str, output: &Path, mode: ExtractMode, json: bool) -> Result<()> {
    let tree = read_tree_json(input)
        .with_context(|| format!("failed to load tree from {}", input.display()))?;

    let cut = extract(&tree, name, mode)?;
    write_tree_json(output, &cut)
        .with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!(%mode, nodes = cut.node_count(), "extracted tree");

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "extract",
            "mode": mode.to_string(),
            "output": output.display().to_string(),
            "nodes": cut.node_count(),
        }))?;
    } else {
        println!(
            "Extracted {} ({} nodes) to: {}",
            mode,
            cut.node_count(),
            output.display()
        );
    }
    Ok(())
}

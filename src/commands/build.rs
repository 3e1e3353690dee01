use std::path::PathBuf;

use anyhow::{Context, Result};
use genealogy::{parse_outline_with, read_outline, to_json_pretty, write_tree_json, Config, OrphanPolicy};

pub struct BuildArgs {
    pub source: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub clamp_orphans: bool,
    pub root_label: Option<String>,
    pub stdout: bool,
}

pub fn cmd_build(config: &Config, args: BuildArgs, json: bool) -> Result<()> {
    let source = args.source.unwrap_or_else(|| config.build.source.clone());
    let output = args.output.unwrap_or_else(|| config.build.output.clone());

    let mut options = config.parse_options();
    if args.clamp_orphans {
        options.orphans = OrphanPolicy::Clamp;
    }
    if let Some(label) = args.root_label {
        options.root_label = label;
    }

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "start",
            "command": "build",
            "source": source.display().to_string(),
        }))?;
    }

    tracing::info!(source = %source.display(), orphans = ?options.orphans, "building tree");
    let text = read_outline(&source)
        .with_context(|| format!("failed to read outline {}", source.display()))?;
    let parsed = parse_outline_with(&text, &options);

    for orphan in &parsed.orphans {
        tracing::warn!(
            line = orphan.line,
            id = %orphan.id,
            "'{}' has no parent bullet at depth {} and was dropped",
            orphan.label,
            orphan.depth.saturating_sub(1)
        );
        if json {
            crate::ui::json::emit(serde_json::json!({
                "event": "orphan",
                "line": orphan.line,
                "depth": orphan.depth,
                "id": orphan.id,
                "label": orphan.label,
            }))?;
        }
    }

    let nodes = parsed.tree.node_count();

    if args.stdout {
        if json {
            crate::ui::json::emit(serde_json::json!({
                "event": "complete",
                "command": "build",
                "nodes": nodes,
                "orphans": parsed.orphans.len(),
                "data": parsed.tree,
            }))?;
        } else {
            println!("{}", to_json_pretty(&parsed.tree)?);
        }
        return Ok(());
    }

    write_tree_json(&output, &parsed.tree)
        .with_context(|| format!("failed to write {}", output.display()))?;

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "build",
            "output": output.display().to_string(),
            "nodes": nodes,
            "orphans": parsed.orphans.len(),
        }))?;
    } else {
        println!("Generated: {}", output.display());
        println!(
            "  {} nodes from {} bullets ({} dropped)",
            nodes,
            parsed.bullet_count,
            parsed.orphans.len()
        );
    }

    Ok(())
}

use std::path::PathBuf;

use anyhow::Result;
use genealogy::{Config, ExpansionDepth, ViewState};

use super::load_tree;
use crate::ui::tree::render_rows;

pub struct ShowArgs {
    pub input: Option<PathBuf>,
    pub collapse: Vec<String>,
    pub expand: Vec<String>,
    pub depth: Option<usize>,
    pub expand_all: bool,
    pub collapse_all: bool,
    pub wrap: Option<usize>,
}

pub fn cmd_show(config: &Config, args: ShowArgs, json: bool) -> Result<()> {
    let input = args.input.unwrap_or_else(|| config.build.output.clone());
    let tree = load_tree(&input, config)?;

    let mut state = ViewState::for_tree(&tree);
    for id in args.collapse {
        if tree.find(&id).is_none() {
            tracing::warn!(id = %id, "no node with this id");
        }
        state.collapsed.collapse(id);
    }
    for id in args.expand {
        state.collapsed.expand(&id);
    }

    if args.collapse_all {
        state.collapse_all();
    } else if args.expand_all {
        state.expand_all();
    } else {
        state.depth = ExpansionDepth(args.depth.unwrap_or(config.view.depth));
    }

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "show",
            "depth": state.depth.0,
            "collapsed": state.collapsed.iter().collect::<Vec<_>>(),
            "data": state.render_tree(&tree),
        }))?;
        return Ok(());
    }

    let wrap = args.wrap.unwrap_or(config.view.wrap_width).max(1);
    println!("{}", render_rows(&state.rows(&tree), wrap));
    Ok(())
}

pub fn cmd_stats(config: &Config, input: Option<PathBuf>, json: bool) -> Result<()> {
    let input = input.unwrap_or_else(|| config.build.output.clone());
    let tree = load_tree(&input, config)?;

    let nodes = tree.node_count();
    let leaves = tree.leaf_count();
    let generations = tree.depth() + 1;
    let synthetic_root = tree.is_synthetic_root();

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "stats",
            "input": input.display().to_string(),
            "nodes": nodes,
            "leaves": leaves,
            "generations": generations,
            "synthetic_root": synthetic_root,
        }))?;
    } else {
        println!("Tree: {}", input.display());
        println!("  Root:        {} [{}]", tree.name, tree.id);
        println!("  Nodes:       {}", nodes);
        println!("  Leaves:      {}", leaves);
        println!("  Generations: {}", generations);
        if synthetic_root {
            println!("  Top-level:   {} (synthetic root)", tree.children.len());
        }
    }
    Ok(())
}

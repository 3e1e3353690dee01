//! Subtree extraction
//!
//! Names are matched by case-insensitive substring, first hit in
//! pre-order wins.

use std::fmt;
use std::str::FromStr;

use crate::error::{GenealogyError, GenealogyResult};
use crate::models::TreeNode;

/// How to cut the tree around the matched node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractMode {
    /// The matched node with everything below it
    #[default]
    Subtree,
    /// The chain from the root down to the matched node
    Path,
    /// Every node whose numeric id is at most the bound
    IdMax(u64),
    /// The whole tree cut off below the matched node's generation
    ToNameDepth,
}

impl FromStr for ExtractMode {
    type Err = GenealogyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GenealogyError::InvalidExtractMode {
            mode: s.to_string(),
        };
        match s.trim() {
            "subtree" => Ok(Self::Subtree),
            "path" => Ok(Self::Path),
            "to_name_depth" => Ok(Self::ToNameDepth),
            other => {
                let bound = other.strip_prefix("id_max:").ok_or_else(invalid)?;
                bound.trim().parse().map(Self::IdMax).map_err(|_| invalid())
            }
        }
    }
}

impl fmt::Display for ExtractMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Subtree => write!(f, "subtree"),
            Self::Path => write!(f, "path"),
            Self::IdMax(n) => write!(f, "id_max:{}", n),
            Self::ToNameDepth => write!(f, "to_name_depth"),
        }
    }
}

/// Cut a tree according to `mode`.
///
/// `needle` is ignored by [`ExtractMode::IdMax`], which fails when the
/// root's own id is above the bound.
pub fn extract(tree: &TreeNode, needle: &str, mode: ExtractMode) -> GenealogyResult<TreeNode> {
    let needle = needle.trim().to_lowercase();
    let not_found = || GenealogyError::NodeNotFound {
        needle: needle.clone(),
    };

    match mode {
        ExtractMode::Subtree => find_subtree(tree, &needle).cloned().ok_or_else(not_found),
        ExtractMode::Path => {
            let path = find_path(tree, &needle).ok_or_else(not_found)?;
            Ok(chain(&path))
        }
        ExtractMode::IdMax(max) => {
            filter_by_id(tree, max).ok_or_else(|| GenealogyError::EmptyExtract {
                mode: mode.to_string(),
            })
        }
        ExtractMode::ToNameDepth => {
            let depth = find_depth(tree, &needle, 0).ok_or_else(not_found)?;
            Ok(prune_stripped(tree, depth))
        }
    }
}

fn matches(node: &TreeNode, needle: &str) -> bool {
    node.name.to_lowercase().contains(needle)
}

fn find_subtree<'a>(node: &'a TreeNode, needle: &str) -> Option<&'a TreeNode> {
    node.iter().find(|n| matches(n, needle))
}

fn find_path<'a>(node: &'a TreeNode, needle: &str) -> Option<Vec<&'a TreeNode>> {
    if matches(node, needle) {
        return Some(vec![node]);
    }
    node.children.iter().find_map(|child| {
        let mut rest = find_path(child, needle)?;
        rest.insert(0, node);
        Some(rest)
    })
}

fn find_depth(node: &TreeNode, needle: &str, depth: usize) -> Option<usize> {
    if matches(node, needle) {
        return Some(depth);
    }
    node.children
        .iter()
        .find_map(|child| find_depth(child, needle, depth + 1))
}

fn chain(path: &[&TreeNode]) -> TreeNode {
    let mut nodes = path.iter().rev().map(|n| n.stripped());
    let mut acc = nodes.next().unwrap_or_else(|| TreeNode::new("", ""));
    for mut parent in nodes {
        parent.children.push(acc);
        acc = parent;
    }
    acc
}

/// Numeric part of an id: leading `n`s stripped, anything else counts as 0
fn id_number(id: &str) -> u64 {
    id.trim_start_matches('n').parse().unwrap_or(0)
}

fn filter_by_id(node: &TreeNode, max: u64) -> Option<TreeNode> {
    if id_number(&node.id) > max {
        return None;
    }
    let mut kept = node.stripped();
    kept.children = node
        .children
        .iter()
        .filter_map(|c| filter_by_id(c, max))
        .collect();
    Some(kept)
}

fn prune_stripped(node: &TreeNode, remaining: usize) -> TreeNode {
    let mut kept = node.stripped();
    if remaining > 0 {
        kept.children = node
            .children
            .iter()
            .map(|c| prune_stripped(c, remaining - 1))
            .collect();
    }
    kept
}

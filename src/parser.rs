//! Outline parser
//!
//! Turns an indented bullet list into a [`TreeNode`] tree.
//!
//! # Format
//! ```text
//! # Headings and prose are ignored
//! - Trần Văn A
//!   - **Trần Văn B**
//!   - Trần Văn C
//!     - Trần Thị D
//! ```
//!
//! Indentation is measured in units of two columns and rounded down, so
//! three leading spaces nest exactly like two.

use serde::{Deserialize, Serialize};

use crate::models::{TreeNode, DEFAULT_ROOT_LABEL};

/// What to do with a bullet whose parent level does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrphanPolicy {
    /// Keep the node out of the tree (matches existing JSON artifacts)
    #[default]
    Drop,
    /// Attach the node under the deepest ancestor currently open
    Clamp,
}

/// Options for [`parse_outline_with`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Label of the synthetic root used for multi-root outlines
    pub root_label: String,
    /// Handling of over-indented bullets
    pub orphans: OrphanPolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            root_label: DEFAULT_ROOT_LABEL.to_string(),
            orphans: OrphanPolicy::Drop,
        }
    }
}

/// A bullet that did not make it into the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanLine {
    /// 1-based line number in the source document
    pub line: usize,
    /// Depth computed from indentation
    pub depth: usize,
    /// Id the node was assigned
    pub id: String,
    /// Cleaned label
    pub label: String,
}

/// Result of parsing an outline
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedOutline {
    pub tree: TreeNode,
    /// Bullets unreachable from the root, in document order
    pub orphans: Vec<OrphanLine>,
    /// Number of bullet lines recognised
    pub bullet_count: usize,
}

/// A bullet line split into indentation width and raw label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bullet<'a> {
    indent: usize,
    label: &'a str,
}

/// Arena entry; children refer to other entries by index
struct Slot {
    id: String,
    name: String,
    line: usize,
    depth: usize,
    children: Vec<usize>,
}

/// Strip simple emphasis markers from a label.
///
/// Removes every `**`, then one leading and one trailing `*`, trimming
/// whitespace around the result.
pub fn clean_label(raw: &str) -> String {
    let without_bold = raw.trim_matches(is_outline_space).replace("**", "");
    let t = without_bold.strip_prefix('*').unwrap_or(&without_bold);
    let t = t.strip_suffix('*').unwrap_or(t);
    t.trim_matches(is_outline_space).to_string()
}

/// Whitespace as outline authoring tools see it.
///
/// Unicode `White_Space` plus the byte-order mark, minus NEL (U+0085).
fn is_outline_space(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Characters that end a line even inside a label
fn is_line_break(c: char) -> bool {
    matches!(c, '\r' | '\n' | '\u{2028}' | '\u{2029}')
}

/// Split on `\n`, dropping the `\r` of each `\r\n` pair
fn outline_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut parts = text.split('\n').peekable();
    std::iter::from_fn(move || {
        let line = parts.next()?;
        match parts.peek() {
            Some(_) => Some(line.strip_suffix('\r').unwrap_or(line)),
            None => Some(line),
        }
    })
}

/// Recognise `<whitespace>-<whitespace+><label>`
///
/// A label holding a stray line break does not count as a bullet.
fn match_bullet(line: &str) -> Option<Bullet<'_>> {
    let body = line.trim_start_matches(is_outline_space);
    let indent = line[..line.len() - body.len()].chars().count();
    let rest = body.strip_prefix('-')?;
    let label = rest.trim_start_matches(is_outline_space);
    if label.len() == rest.len() || label.contains(is_line_break) {
        return None;
    }
    Some(Bullet { indent, label })
}

/// Parse an outline with default options, discarding diagnostics
pub fn parse_outline(text: &str) -> TreeNode {
    parse_outline_with(text, &ParseOptions::default()).tree
}

/// Parse an outline document into a tree
///
/// Exactly one top-level bullet becomes the root; zero or several are
/// wrapped in a synthetic root with id `root`.
pub fn parse_outline_with(text: &str, options: &ParseOptions) -> ParsedOutline {
    let mut arena: Vec<Slot> = Vec::new();
    let mut roots: Vec<usize> = Vec::new();
    // Most recent node per depth; holes appear when indentation jumps.
    let mut stack: Vec<Option<usize>> = Vec::new();

    for (line_no, line) in outline_lines(text).enumerate() {
        let Some(bullet) = match_bullet(line) else {
            continue;
        };

        let raw_depth = bullet.indent / 2;
        let depth = match options.orphans {
            OrphanPolicy::Drop => raw_depth,
            OrphanPolicy::Clamp => raw_depth.min(stack.len()),
        };

        let idx = arena.len();
        arena.push(Slot {
            id: format!("n{}", idx + 1),
            name: clean_label(bullet.label),
            line: line_no + 1,
            depth,
            children: Vec::new(),
        });

        if depth == 0 {
            roots.push(idx);
        } else if let Some(parent) = stack.get(depth - 1).copied().flatten() {
            arena[parent].children.push(idx);
        }

        if stack.len() <= depth {
            stack.resize(depth + 1, None);
        }
        stack[depth] = Some(idx);
        stack.truncate(depth + 1);
    }

    let orphans = collect_orphans(&arena, &roots);
    for orphan in &orphans {
        tracing::debug!(
            line = orphan.line,
            depth = orphan.depth,
            id = %orphan.id,
            "bullet has no parent at depth {}, dropped",
            orphan.depth.saturating_sub(1)
        );
    }

    let bullet_count = arena.len();
    let mut root_nodes: Vec<TreeNode> = roots
        .iter()
        .map(|&idx| assemble(&arena, idx))
        .collect();

    let tree = if root_nodes.len() == 1 {
        root_nodes.remove(0)
    } else {
        TreeNode::synthetic_root(options.root_label.clone(), root_nodes)
    };

    tracing::info!(
        bullets = bullet_count,
        nodes = tree.node_count(),
        orphans = orphans.len(),
        "parsed outline"
    );

    ParsedOutline {
        tree,
        orphans,
        bullet_count,
    }
}

fn assemble(arena: &[Slot], idx: usize) -> TreeNode {
    let slot = &arena[idx];
    TreeNode {
        id: slot.id.clone(),
        name: slot.name.clone(),
        children: slot.children.iter().map(|&c| assemble(arena, c)).collect(),
        collapsed: None,
    }
}

fn collect_orphans(arena: &[Slot], roots: &[usize]) -> Vec<OrphanLine> {
    let mut reachable = vec![false; arena.len()];
    let mut pending: Vec<usize> = roots.to_vec();
    while let Some(idx) = pending.pop() {
        reachable[idx] = true;
        pending.extend(arena[idx].children.iter().copied());
    }

    arena
        .iter()
        .zip(reachable)
        .filter(|(_, seen)| !seen)
        .map(|(slot, _)| OrphanLine {
            line: slot.line,
            depth: slot.depth,
            id: slot.id.clone(),
            label: slot.name.clone(),
        })
        .collect()
}

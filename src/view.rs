//! Tree view model
//!
//! Tracks which nodes are collapsed and derives the tree that should be
//! drawn. The source tree is never modified; every derivation returns a
//! fresh copy.
//!
//! Two controls are layered:
//! - a per-node [`CollapsedSet`], flipped one id at a time
//! - a global [`ExpansionDepth`] driven by "expand all" / "collapse all"

use std::collections::BTreeSet;

use unicode_width::UnicodeWidthStr;

use crate::models::TreeNode;

/// Default label wrap width, in display columns
pub const DEFAULT_WRAP_WIDTH: usize = 24;

/// Ids whose descendants are hidden
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapsedSet {
    ids: BTreeSet<String>,
}

impl CollapsedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from nodes carrying `collapsed: true`
    pub fn from_tree(tree: &TreeNode) -> Self {
        tree.iter()
            .filter(|n| n.collapsed == Some(true))
            .map(|n| n.id.clone())
            .collect()
    }

    /// Flip membership of `id`, returning whether it is now collapsed
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn collapse(&mut self, id: impl Into<String>) {
        self.ids.insert(id.into());
    }

    pub fn expand(&mut self, id: &str) {
        self.ids.remove(id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for CollapsedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Copy of `tree` where every collapsed node has no children.
///
/// Collapsed nodes stay visible themselves. Collapse marks on hidden
/// descendants are irrelevant here but survive in the set, so they apply
/// again once the ancestor is expanded.
pub fn visible_tree(tree: &TreeNode, collapsed: &CollapsedSet) -> TreeNode {
    TreeNode {
        id: tree.id.clone(),
        name: tree.name.clone(),
        children: if collapsed.contains(&tree.id) {
            Vec::new()
        } else {
            tree.children
                .iter()
                .map(|c| visible_tree(c, collapsed))
                .collect()
        },
        collapsed: tree.collapsed,
    }
}

/// Global initial-expansion depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExpansionDepth(pub usize);

impl ExpansionDepth {
    /// Depth used by "expand all"
    pub const EXPAND_ALL: ExpansionDepth = ExpansionDepth(99);
    /// Depth used by "collapse all": only the root is shown
    pub const COLLAPSE_ALL: ExpansionDepth = ExpansionDepth(0);
}

impl Default for ExpansionDepth {
    fn default() -> Self {
        Self::EXPAND_ALL
    }
}

/// Copy of `tree` keeping only nodes at most `depth` levels below it
pub fn prune_to_depth(tree: &TreeNode, depth: usize) -> TreeNode {
    TreeNode {
        id: tree.id.clone(),
        name: tree.name.clone(),
        children: match depth {
            0 => Vec::new(),
            d => tree.children.iter().map(|c| prune_to_depth(c, d - 1)).collect(),
        },
        collapsed: tree.collapsed,
    }
}

/// Per-session view state over one immutable tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub collapsed: CollapsedSet,
    pub depth: ExpansionDepth,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the advisory flags stored in the tree
    pub fn for_tree(tree: &TreeNode) -> Self {
        Self {
            collapsed: CollapsedSet::from_tree(tree),
            depth: ExpansionDepth::default(),
        }
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        let now_collapsed = self.collapsed.toggle(id);
        tracing::debug!(id, collapsed = now_collapsed, "toggle node");
        now_collapsed
    }

    /// Leaves the per-node set untouched
    pub fn expand_all(&mut self) {
        self.depth = ExpansionDepth::EXPAND_ALL;
    }

    /// Leaves the per-node set untouched
    pub fn collapse_all(&mut self) {
        self.depth = ExpansionDepth::COLLAPSE_ALL;
    }

    /// The tree handed to a renderer
    pub fn render_tree(&self, tree: &TreeNode) -> TreeNode {
        prune_to_depth(&visible_tree(tree, &self.collapsed), self.depth.0)
    }

    /// Flatten the render tree into display rows
    pub fn rows(&self, tree: &TreeNode) -> Vec<VisibleRow> {
        let mut rows = Vec::new();
        self.push_rows(tree, 0, &mut rows);
        rows
    }

    fn push_rows(&self, node: &TreeNode, depth: usize, rows: &mut Vec<VisibleRow>) {
        let expanded = !self.collapsed.contains(&node.id) && depth < self.depth.0;
        rows.push(VisibleRow {
            id: node.id.clone(),
            name: node.name.clone(),
            depth,
            has_children: !node.is_leaf(),
            expanded,
            hidden: if expanded { 0 } else { node.node_count() - 1 },
        });
        if expanded {
            for child in &node.children {
                self.push_rows(child, depth + 1, rows);
            }
        }
    }
}

/// A flattened node of the render tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    pub id: String,
    pub name: String,
    /// Depth level (0 = root)
    pub depth: usize,
    /// Whether the source node has children, shown or not
    pub has_children: bool,
    /// Whether the children are shown
    pub expanded: bool,
    /// Number of descendants not shown because of this node
    pub hidden: usize,
}

impl VisibleRow {
    /// Whether children exist but are hidden
    pub fn is_folded(&self) -> bool {
        self.has_children && !self.expanded
    }
}

/// Greedy word wrap of a label into lines of at most `max_width` columns.
///
/// `|` separates explicit lines. A word wider than `max_width` gets a
/// line of its own and is never split.
pub fn wrap_label(label: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for part in label.split('|') {
        let mut current = String::new();
        for word in part.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            if current.width() + 1 + word.width() > max_width {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            } else {
                current.push(' ');
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

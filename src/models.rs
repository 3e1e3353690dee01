//! Core data models
//!
//! Defines the family tree as it travels between the outline parser,
//! the JSON artifact and the view model:
//! - `TreeNode`: one person or entry, with ordered children

use serde::{Deserialize, Serialize};

/// Identifier of the synthetic top node inserted for multi-root outlines
pub const SYNTHETIC_ROOT_ID: &str = "root";

/// Label of the synthetic top node when no other label is configured
pub const DEFAULT_ROOT_LABEL: &str = "Phả hệ";

/// One node of the family tree
///
/// Serialized as `{ "id", "name", "children" }`; `collapsed` is only
/// written when it has been set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Unique within one tree (`n1`, `n2`, ... or `root`)
    pub id: String,

    /// Display label
    pub name: String,

    /// Children in document order
    #[serde(default)]
    pub children: Vec<TreeNode>,

    /// Advisory collapse flag, read by the view model only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
}

impl TreeNode {
    /// Create a node without children
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
            collapsed: None,
        }
    }

    /// Create the synthetic root wrapping several top-level entries
    pub fn synthetic_root(label: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            id: SYNTHETIC_ROOT_ID.to_string(),
            name: label.into(),
            children,
            collapsed: None,
        }
    }

    /// Builder-style helper to append a child
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_synthetic_root(&self) -> bool {
        self.id == SYNTHETIC_ROOT_ID
    }

    /// Total number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }

    /// Number of leaves in this subtree
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(TreeNode::leaf_count).sum()
        }
    }

    /// Number of generations below this node (a lone node has depth 0)
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Find a node by id anywhere in this subtree
    pub fn find(&self, id: &str) -> Option<&TreeNode> {
        self.iter().find(|n| n.id == id)
    }

    /// Pre-order traversal in document order
    pub fn iter(&self) -> TreeIter<'_> {
        TreeIter { stack: vec![self] }
    }

    /// All ids in pre-order
    pub fn ids(&self) -> Vec<&str> {
        self.iter().map(|n| n.id.as_str()).collect()
    }

    /// Copy of this node carrying only id and name
    pub fn stripped(&self) -> TreeNode {
        TreeNode::new(self.id.clone(), self.name.clone())
    }
}

/// Pre-order iterator over a tree
pub struct TreeIter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for TreeIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeNode {
        TreeNode::new("n1", "A")
            .with_child(TreeNode::new("n2", "B"))
            .with_child(TreeNode::new("n3", "C").with_child(TreeNode::new("n4", "D")))
    }

    #[test]
    fn test_node_count_and_depth() {
        let tree = sample();
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(tree.depth(), 2);
        assert_eq!(TreeNode::new("x", "x").depth(), 0);
    }

    #[test]
    fn test_iter_is_preorder() {
        let tree = sample();
        assert_eq!(tree.ids(), vec!["n1", "n2", "n3", "n4"]);
    }

    #[test]
    fn test_find() {
        let tree = sample();
        assert_eq!(tree.find("n4").map(|n| n.name.as_str()), Some("D"));
        assert!(tree.find("n9").is_none());
    }

    #[test]
    fn test_serialize_omits_unset_collapsed() {
        let json = serde_json::to_string(&TreeNode::new("n1", "A")).unwrap();
        assert_eq!(json, r#"{"id":"n1","name":"A","children":[]}"#);
    }

    #[test]
    fn test_serialize_keeps_collapsed_flag() {
        let mut node = TreeNode::new("n1", "A");
        node.collapsed = Some(true);
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"id":"n1","name":"A","children":[],"collapsed":true}"#);
    }

    #[test]
    fn test_deserialize_defaults_missing_children() {
        let node: TreeNode = serde_json::from_str(r#"{"id":"n1","name":"A"}"#).unwrap();
        assert!(node.is_leaf());
        assert_eq!(node.collapsed, None);
    }

    #[test]
    fn test_synthetic_root() {
        let root = TreeNode::synthetic_root(DEFAULT_ROOT_LABEL, vec![sample()]);
        assert!(root.is_synthetic_root());
        assert_eq!(root.name, "Phả hệ");
        assert!(!sample().is_synthetic_root());
    }
}

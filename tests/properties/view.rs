//! Property tests for the collapse-state model.

use proptest::prelude::*;

use genealogy::{parse_outline, visible_tree, CollapsedSet, ViewState};

fn id() -> impl Strategy<Value = String> {
    (1u32..40).prop_map(|n| format!("n{}", n))
}

fn sample_tree() -> genealogy::TreeNode {
    parse_outline(
        "- A\n  - B\n    - C\n    - D\n  - E\n    - F\n      - G\n- H\n  - I\n",
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Toggling the same id twice restores the set.
    #[test]
    fn property_toggle_twice_is_identity(
        initial in proptest::collection::btree_set(id(), 0..10),
        target in id(),
    ) {
        let before: CollapsedSet = initial.iter().cloned().collect();
        let mut set = before.clone();
        set.toggle(&target);
        set.toggle(&target);
        prop_assert_eq!(set, before);
    }

    /// PROPERTY: The visible tree is a subset of the source, which stays untouched.
    #[test]
    fn property_visible_tree_is_subset(
        collapsed in proptest::collection::vec(id(), 0..6),
    ) {
        let tree = sample_tree();
        let before = tree.clone();
        let set: CollapsedSet = collapsed.into_iter().collect();
        let visible = visible_tree(&tree, &set);

        prop_assert_eq!(&tree, &before);
        prop_assert_eq!(visible.id.as_str(), tree.id.as_str());
        for node in visible.iter() {
            prop_assert!(tree.find(&node.id).is_some());
            if set.contains(&node.id) {
                prop_assert!(node.children.is_empty());
            }
        }
    }

    /// PROPERTY: Rows list exactly the nodes of the render tree, in pre-order.
    #[test]
    fn property_rows_match_render_tree(
        collapsed in proptest::collection::vec(id(), 0..6),
        depth in 0usize..5,
    ) {
        let tree = sample_tree();
        let mut state = ViewState::new();
        for id in collapsed {
            state.collapsed.collapse(id);
        }
        state.depth = genealogy::ExpansionDepth(depth);

        let rendered = state.render_tree(&tree);
        let row_ids: Vec<String> = state.rows(&tree).into_iter().map(|r| r.id).collect();
        let tree_ids: Vec<String> = rendered.ids().into_iter().map(String::from).collect();
        prop_assert_eq!(row_ids, tree_ids);
    }
}

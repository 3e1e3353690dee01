//! Property tests for outline parsing.

use proptest::prelude::*;

use genealogy::{
    clean_label, parse_outline, parse_outline_with, OrphanPolicy, ParseOptions, TreeNode,
};

fn word() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-zĂăÂâĐđÊêÔôƠơƯưàáảãạ]{1,10}( [A-Za-zĂăÂâĐđÊêÔôƠơƯưàáảãạ]{1,10}){0,2}").unwrap()
}

/// Depths where each bullet is at most one level below the previous one
fn well_formed_depths() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..4, 1..=24).prop_map(|steps| {
        let mut depths = Vec::with_capacity(steps.len());
        let mut prev = 0usize;
        for (i, step) in steps.into_iter().enumerate() {
            let depth = if i == 0 { 0 } else { step.min(prev + 1).max(1) };
            depths.push(depth);
            prev = depth;
        }
        depths
    })
}

fn render(depths: &[usize], labels: &[String]) -> String {
    depths
        .iter()
        .zip(labels.iter().cycle())
        .map(|(d, label)| format!("{}- {}\n", "  ".repeat(*d), label))
        .collect()
}

fn real_nodes(tree: &TreeNode) -> usize {
    tree.node_count() - usize::from(tree.is_synthetic_root())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics, whatever the input.
    #[test]
    fn property_parse_never_panics(text in any::<String>()) {
        let _ = parse_outline(&text);
    }

    /// PROPERTY: Parsing bullet-shaped noise never panics under either policy.
    #[test]
    fn property_parse_bullet_noise_never_panics(
        text in proptest::string::string_regex("[ \\t\\-*a-z\\n]{0,200}").unwrap(),
        clamp in any::<bool>(),
    ) {
        let options = ParseOptions {
            orphans: if clamp { OrphanPolicy::Clamp } else { OrphanPolicy::Drop },
            ..ParseOptions::default()
        };
        let _ = parse_outline_with(&text, &options);
    }

    /// PROPERTY: A single top-level bullet is the root, with no wrapper.
    #[test]
    fn property_single_root_has_no_wrapper(
        depths in well_formed_depths(),
        labels in proptest::collection::vec(word(), 1..=6),
    ) {
        let tree = parse_outline(&render(&depths, &labels));
        prop_assert_eq!(tree.id.as_str(), "n1");
        prop_assert!(!tree.is_synthetic_root());
        prop_assert_eq!(tree.node_count(), depths.len());
    }

    /// PROPERTY: Several top-level bullets become children of the synthetic root, in order.
    #[test]
    fn property_multiple_roots_are_wrapped_in_order(
        labels in proptest::collection::vec(word(), 2..=10),
    ) {
        let text: String = labels.iter().map(|l| format!("- {}\n", l)).collect();
        let tree = parse_outline(&text);
        prop_assert!(tree.is_synthetic_root());
        let names: Vec<String> = tree.children.iter().map(|c| c.name.clone()).collect();
        prop_assert_eq!(names, labels.clone());
    }

    /// PROPERTY: Ids follow document order when nothing is dropped.
    #[test]
    fn property_ids_follow_document_order(depths in well_formed_depths()) {
        let labels = vec!["x".to_string()];
        let tree = parse_outline(&render(&depths, &labels));
        let expected: Vec<String> = (1..=depths.len()).map(|i| format!("n{}", i)).collect();
        let ids: Vec<String> = tree.ids().into_iter().map(String::from).collect();
        prop_assert_eq!(ids, expected);
    }

    /// PROPERTY: Every bullet ends up either in the tree or in the orphan list.
    #[test]
    fn property_bullets_are_accounted_for(
        depths in proptest::collection::vec(0usize..6, 0..=30),
        clamp in any::<bool>(),
    ) {
        let labels = vec!["y".to_string()];
        let options = ParseOptions {
            orphans: if clamp { OrphanPolicy::Clamp } else { OrphanPolicy::Drop },
            ..ParseOptions::default()
        };
        let parsed = parse_outline_with(&render(&depths, &labels), &options);
        prop_assert_eq!(parsed.bullet_count, depths.len());
        prop_assert_eq!(real_nodes(&parsed.tree) + parsed.orphans.len(), depths.len());
        if clamp {
            prop_assert!(parsed.orphans.is_empty());
        }
    }

    /// PROPERTY: The JSON artifact decodes back to the same tree.
    #[test]
    fn property_json_round_trip(
        depths in well_formed_depths(),
        labels in proptest::collection::vec(word(), 1..=6),
    ) {
        let tree = parse_outline(&render(&depths, &labels));
        let json = genealogy::to_json_pretty(&tree).unwrap();
        let decoded: TreeNode = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded, tree);
    }

    /// PROPERTY: Emphasis around a word is removed, and cleaning twice changes nothing.
    #[test]
    fn property_clean_label_strips_emphasis(
        word in word(),
        marker in prop_oneof![Just(""), Just("*"), Just("**")],
        pad in "[ ]{0,3}",
    ) {
        let raw = format!("{pad}{marker}{word}{marker}{pad}");
        let once = clean_label(&raw);
        prop_assert_eq!(&once, &word);
        prop_assert_eq!(clean_label(&once), once.clone());
    }
}

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(content) {
            let _ = genealogy::uppercase_names(value);
        }
        if let Ok(tree) = genealogy::from_json_str::<genealogy::TreeNode>(content) {
            let _ = genealogy::ViewState::for_tree(&tree).rows(&tree);
        }
    }
});

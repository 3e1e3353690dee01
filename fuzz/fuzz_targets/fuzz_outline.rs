#![no_main]

use genealogy::{parse_outline_with, OrphanPolicy, ParseOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Both orphan policies must accept any text
        let parsed = parse_outline_with(content, &ParseOptions::default());
        assert!(parsed.orphans.len() <= parsed.bullet_count);

        let clamp = ParseOptions {
            orphans: OrphanPolicy::Clamp,
            ..ParseOptions::default()
        };
        let parsed = parse_outline_with(content, &clamp);
        assert!(parsed.orphans.is_empty());
    }
});

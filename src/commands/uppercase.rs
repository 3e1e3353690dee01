use std::path::Path;

use anyhow::{Context, Result};
use genealogy::uppercase_file;

pub fn cmd_uppercase(file: &Path, json: bool) -> Result<()> {
    let abs = std::path::absolute(file).unwrap_or_else(|_| file.to_path_buf());
    let count = uppercase_file(&abs)
        .with_context(|| format!("failed to uppercase names in {}", abs.display()))?;

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "uppercase",
            "file": abs.display().to_string(),
            "names": count,
        }))?;
    } else {
        println!("Uppercased names written to: {}", abs.display());
    }
    Ok(())
}

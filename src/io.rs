//! Reading outlines and reading/writing tree artifacts

use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::{GenealogyError, GenealogyResult};
use crate::models::TreeNode;

/// Read an outline document; a missing file is reported as `SourceNotFound`
pub fn read_outline(path: &Path) -> GenealogyResult<String> {
    if !path.is_file() {
        return Err(GenealogyError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Pretty JSON with 2-space indentation and no trailing newline
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> GenealogyResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write content to a file atomically
///
/// Uses tempfile + rename so readers never observe a half-written file.
pub fn atomic_write(path: &Path, content: &[u8]) -> GenealogyResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Write a tree artifact
pub fn write_tree_json(path: &Path, tree: &TreeNode) -> GenealogyResult<()> {
    let json = to_json_pretty(tree)?;
    atomic_write(path, json.as_bytes())?;
    tracing::debug!(path = %path.display(), bytes = json.len(), "wrote tree artifact");
    Ok(())
}

/// Decode JSON of any nesting depth.
///
/// One generation costs two levels (object and `children` array), so the
/// default recursion limit would reject trees `build` can write. The stack
/// grows on demand instead.
pub fn from_json_str<T: DeserializeOwned>(text: &str) -> serde_json::Result<T> {
    let mut json = serde_json::Deserializer::from_str(text);
    json.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;
    Ok(value)
}

/// Read a tree artifact
pub fn read_tree_json(path: &Path) -> GenealogyResult<TreeNode> {
    let text = std::fs::read_to_string(path)?;
    from_json_str(&text).map_err(|e| GenealogyError::InvalidArtifact {
        file: path.to_path_buf(),
        message: e.to_string(),
    })
}

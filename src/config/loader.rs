//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GenealogyError, GenealogyResult};
use crate::parser::OrphanPolicy;

use super::types::{Config, Verbosity};

/// Project configuration file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "genealogy.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> GenealogyResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| GenealogyError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> GenealogyResult<(Config, Vec<ConfigWarning>)> {
    let project_config = project_root.map(|root| root.join(PROJECT_CONFIG_FILE));
    let user_config = dirs::config_dir().map(|dir| dir.join("genealogy").join("config.toml"));

    for candidate in [project_config, user_config].into_iter().flatten() {
        if candidate.is_file() {
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (GENEALOGY_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(super) fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    // GENEALOGY_ROOT_LABEL
    if let Some(label) = lookup("GENEALOGY_ROOT_LABEL") {
        config.outline.root_label = label;
    }

    // GENEALOGY_ORPHANS
    if let Some(policy) = lookup("GENEALOGY_ORPHANS") {
        config.outline.orphans = match policy.to_lowercase().as_str() {
            "clamp" => OrphanPolicy::Clamp,
            _ => OrphanPolicy::Drop,
        };
    }

    // GENEALOGY_VERBOSITY
    if let Some(verbosity) = lookup("GENEALOGY_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "build",
        "source",
        "output",
        "outline",
        "root_label",
        "orphans",
        "view",
        "wrap_width",
        "depth",
        "verbosity",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

/// Edit distance between two keys, counted in chars
fn levenshtein(a: &str, b: &str) -> usize {
    let target: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=target.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in target.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1)
                .min(row[j] + 1)
                .min(diagonal + usize::from(ca != cb));
            diagonal = above;
        }
    }

    row[target.len()]
}

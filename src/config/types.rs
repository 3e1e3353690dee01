//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GenealogyResult;
use crate::models::DEFAULT_ROOT_LABEL;
use crate::parser::{OrphanPolicy, ParseOptions};
use crate::view::{ExpansionDepth, DEFAULT_WRAP_WIDTH};

use super::loader::{self, ConfigWarning};

/// Build input/output locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_source")]
    pub source: PathBuf,

    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            output: default_output(),
        }
    }
}

fn default_source() -> PathBuf {
    PathBuf::from("public/genealogy.md")
}

fn default_output() -> PathBuf {
    PathBuf::from("public/genealogy.json")
}

/// Outline parsing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineConfig {
    #[serde(default = "default_root_label")]
    pub root_label: String,

    #[serde(default)]
    pub orphans: OrphanPolicy,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            root_label: default_root_label(),
            orphans: OrphanPolicy::default(),
        }
    }
}

fn default_root_label() -> String {
    DEFAULT_ROOT_LABEL.to_string()
}

/// Terminal view configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,

    #[serde(default = "default_depth")]
    pub depth: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            wrap_width: default_wrap_width(),
            depth: default_depth(),
        }
    }
}

fn default_wrap_width() -> usize {
    DEFAULT_WRAP_WIDTH
}

fn default_depth() -> usize {
    ExpansionDepth::EXPAND_ALL.0
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub outline: OutlineConfig,

    #[serde(default)]
    pub view: ViewConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> GenealogyResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> GenealogyResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    ///
    /// A config file that exists but cannot be decoded is an error.
    pub fn load_or_default(project_root: Option<&Path>) -> GenealogyResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (GENEALOGY_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Parser options derived from the `[outline]` section
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            root_label: self.outline.root_label.clone(),
            orphans: self.outline.orphans,
        }
    }
}

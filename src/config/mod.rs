//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (GENEALOGY_*)
//! 3. Project config (./genealogy.toml)
//! 4. User config (<config dir>/genealogy/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{BuildConfig, Config, OutlineConfig, OutputConfig, Verbosity, ViewConfig};

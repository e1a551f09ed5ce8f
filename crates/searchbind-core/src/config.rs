//! Configuration types for searchbind.
//!
//! [`Config::load`] layers, in order: the embedded defaults, the config file
//! (`$XDG_CONFIG_HOME/searchbind/config.toml` or an explicit path), and
//! `SEARCHBIND__*` environment variables. [`Config::defaults`] returns the
//! embedded defaults without touching the filesystem (useful in tests).

use crate::matcher::{MatchMode, MatchOptions};
use crate::types::RecordKind;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
case_sensitive = false
match_mode     = "substring"

[search.templates]
Blog     = ["Name"]
BlogPost = ["Name", "Content"]
Comment  = ["Title", "Text"]
"#;

const ENV_PREFIX: &str = "SEARCHBIND";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default)]
    pub match_mode: MatchMode,
    /// `[search.templates]`: record kind → fields searched for the text.
    #[serde(default = "default_templates")]
    pub templates: BTreeMap<RecordKind, Vec<String>>,
}

fn default_templates() -> BTreeMap<RecordKind, Vec<String>> {
    let fields = |names: &[&str]| names.iter().map(|n| n.to_string()).collect();
    BTreeMap::from([
        (RecordKind::Blog, fields(&["Name"])),
        (RecordKind::BlogPost, fields(&["Name", "Content"])),
        (RecordKind::Comment, fields(&["Title", "Text"])),
    ])
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            match_mode: MatchMode::default(),
            templates: default_templates(),
        }
    }
}

impl SearchConfig {
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            case_sensitive: self.case_sensitive,
            mode: self.match_mode,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `path`, or from the default location when `None`, layered
    /// on top of the built-in defaults. A missing file is not an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
        tracing::debug!(path = %path.display(), "loading config");

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("searchbind")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

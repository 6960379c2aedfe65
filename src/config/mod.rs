// ABOUTME: Configuration management for flow
// Handles the config file location, defaults and the popup/find sections

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowConfig {
    /// General settings
    #[serde(default)]
    pub flow: GeneralConfig,

    /// fzf-tmux popup appearance
    #[serde(default, rename = "fzf-tmux")]
    pub popup: PopupConfig,

    /// Candidate directory discovery
    #[serde(default)]
    pub find: FindConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Session created when starting a new server
    #[serde(default = "default_init_session_name")]
    pub init_session_name: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            init_session_name: default_init_session_name(),
        }
    }
}

/// Appearance of the picker popup. None of these affect what gets selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupConfig {
    /// Popup width (e.g. "80%")
    #[serde(default = "default_width")]
    pub width: String,

    /// Popup height (e.g. "60%")
    #[serde(default = "default_length")]
    pub length: String,

    /// fzf border style
    #[serde(default = "default_border")]
    pub border: String,

    /// Preview window position (up, down, left, right)
    #[serde(default = "default_preview_pos")]
    pub preview_pos: String,

    /// Preview window size
    #[serde(default = "default_preview_size")]
    pub preview_size: String,

    /// Preview window border style
    #[serde(default = "default_border")]
    pub preview_border: String,

    /// Command (plus arguments) used to preview a candidate directory
    #[serde(default = "default_preview_dir_cmd")]
    pub preview_dir_cmd: Vec<String>,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            length: default_length(),
            border: default_border(),
            preview_pos: default_preview_pos(),
            preview_size: default_preview_size(),
            preview_border: default_border(),
            preview_dir_cmd: default_preview_dir_cmd(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindConfig {
    /// Parent directories whose children are offered as new sessions
    #[serde(default = "default_find_dirs")]
    pub dirs: Vec<String>,
}

impl Default for FindConfig {
    fn default() -> Self {
        Self {
            dirs: default_find_dirs(),
        }
    }
}

fn default_init_session_name() -> String {
    "0".to_string()
}

fn default_width() -> String {
    "80%".to_string()
}

fn default_length() -> String {
    "60%".to_string()
}

fn default_border() -> String {
    "rounded".to_string()
}

fn default_preview_pos() -> String {
    "right".to_string()
}

fn default_preview_size() -> String {
    "60%".to_string()
}

fn default_preview_dir_cmd() -> Vec<String> {
    vec!["ls".to_string()]
}

fn default_find_dirs() -> Vec<String> {
    vec!["~".to_string()]
}

impl FlowConfig {
    /// Load configuration from an explicit path or the default location.
    ///
    /// A missing file at the default location yields the defaults; an
    /// explicitly requested file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                Some(path) => {
                    debug!("No config file at {}, using defaults", path.display());
                    Ok(Self::default())
                }
                None => Ok(Self::default()),
            },
        }
    }

    /// Parse a config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/flow/config.toml`, else `~/.config/flow/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        let config_home = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))?;
        Some(config_home.join("flow").join("config.toml"))
    }
}

//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.todolist/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TodoConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub seed: Option<Seed>,
    pub items: Option<Vec<String>>,
    pub blank_titles: Option<BlankTitles>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub done_color: Option<String>,
    pub strikethrough: Option<bool>,
}

/// What the list holds when the app starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Seed {
    /// The four built-in demo items.
    #[default]
    Demo,
    /// Nothing.
    Empty,
    /// The titles listed under `[general] items`.
    Custom,
}

/// How the title dialog treats a submission with no visible text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BlankTitles {
    /// Store the blank title; the row shows up empty.
    #[default]
    Accept,
    /// Close the dialog without touching the list.
    Ignore,
}

impl FromStr for Seed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s.trim(), true)
    }
}

impl FromStr for BlankTitles {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s.trim(), true)
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DONE_COLOR: &str = "#ff2d55";
pub const DEFAULT_STRIKETHROUGH: bool = true;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub seed: Seed,
    pub custom_items: Vec<String>,
    pub blank_titles: BlankTitles,
    pub done_color: String,
    pub strikethrough: bool,
}

/// Values taken from command-line flags (None = not given).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub seed: Option<Seed>,
    pub blank_titles: Option<BlankTitles>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.todolist/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".todolist").join("config.toml"))
}

/// Load config from `~/.todolist/config.toml`, or from `explicit` when given.
///
/// A missing default file is generated (commented out) and yields
/// `TodoConfig::default()`. A missing explicit file is an I/O error.
pub fn load_config(explicit: Option<&Path>) -> Result<TodoConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(TodoConfig::default());
            }
        },
    };

    if explicit.is_none() && !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TodoConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<TodoConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

fn generate_default_config(path: &Path) {
    let default_content = r##"# To-Do List Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# seed = "demo"                  # "demo", "empty", or "custom"
# items = ["Buy milk", "Walk"]   # used when seed = "custom"
# blank_titles = "accept"        # "accept" or "ignore"

# [display]
# done_color = "#ff2d55"         # any ratatui color name or hex
# strikethrough = true
"##;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TodoConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &TodoConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let seed = cli
        .seed
        .or_else(|| env_value(&env, "TODOLIST_SEED"))
        .or(config.general.seed)
        .unwrap_or_default();

    let blank_titles = cli
        .blank_titles
        .or_else(|| env_value(&env, "TODOLIST_BLANK_TITLES"))
        .or(config.general.blank_titles)
        .unwrap_or_default();

    let custom_items = config.general.items.clone().unwrap_or_default();
    if seed == Seed::Custom && custom_items.is_empty() {
        warn!("seed = \"custom\" but [general] items is empty; starting with an empty list");
    }

    ResolvedConfig {
        seed,
        custom_items,
        blank_titles,
        done_color: config
            .display
            .done_color
            .clone()
            .unwrap_or_else(|| DEFAULT_DONE_COLOR.to_string()),
        strikethrough: config
            .display
            .strikethrough
            .unwrap_or(DEFAULT_STRIKETHROUGH),
    }
}

fn env_value<T: FromStr>(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = env(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: unrecognized value", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&TodoConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.seed, Seed::Demo);
        assert_eq!(resolved.blank_titles, BlankTitles::Accept);
        assert_eq!(resolved.done_color, DEFAULT_DONE_COLOR);
        assert!(resolved.strikethrough);
        assert!(resolved.custom_items.is_empty());
    }

    #[test]
    fn test_toml_values_override_defaults() {
        let toml_str = r##"
[general]
seed = "custom"
items = ["빨래하기", "장보기"]
blank_titles = "ignore"

[display]
done_color = "green"
strikethrough = false
"##;
        let config = parse_config(toml_str).unwrap();
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.seed, Seed::Custom);
        assert_eq!(resolved.custom_items, vec!["빨래하기", "장보기"]);
        assert_eq!(resolved.blank_titles, BlankTitles::Ignore);
        assert_eq!(resolved.done_color, "green");
        assert!(!resolved.strikethrough);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config = parse_config("[display]\nstrikethrough = false\n").unwrap();
        assert_eq!(config.display.strikethrough, Some(false));
        assert!(config.general.seed.is_none());
        assert!(config.display.done_color.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[general]\nseed = \"sometimes\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_env_beats_file_and_cli_beats_env() {
        let config = parse_config("[general]\nseed = \"custom\"\nblank_titles = \"accept\"\n").unwrap();
        let env = |key: &str| match key {
            "TODOLIST_SEED" => Some("empty".to_string()),
            "TODOLIST_BLANK_TITLES" => Some("IGNORE".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.seed, Seed::Empty);
        assert_eq!(resolved.blank_titles, BlankTitles::Ignore);

        let cli = CliOverrides {
            seed: Some(Seed::Demo),
            blank_titles: None,
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.seed, Seed::Demo);
        assert_eq!(resolved.blank_titles, BlankTitles::Ignore);
    }

    #[test]
    fn test_bad_env_value_falls_through() {
        let config = parse_config("[general]\nseed = \"empty\"\n").unwrap();
        let env = |key: &str| (key == "TODOLIST_SEED").then(|| "bogus".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.seed, Seed::Empty);
    }

    #[test]
    fn test_explicit_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("todolist-does-not-exist/config.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_generated_default_is_valid_toml() {
        let dir = std::env::temp_dir().join(format!("todolist-cfg-{}", std::process::id()));
        let path = dir.join("config.toml");
        generate_default_config(&path);

        let config = load_config(Some(&path)).unwrap();
        assert!(config.general.seed.is_none());
        assert!(config.display.done_color.is_none());

        let _ = fs::remove_dir_all(&dir);
    }
}

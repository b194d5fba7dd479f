//! # RustPal Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for RustPal, handling
//! loading, merging, and validation of the bot's persona (the name it answers
//! to and the label printed before its replies) and its content pools
//! (greetings and jokes).
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file given with `--config` or `RUSTPAL_CONFIG` (used alone)
//! 2. Project-specific `.rustpal.toml` in the current directory or ancestors
//! 3. User-specific `<config dir>/rustpal/config.toml`
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [persona]
//! name = "RustPal"
//! label = "RustPal 🦀"
//!
//! [content]
//! greetings = ["Hello!", "Howdy!"]
//! jokes = ["A SQL query walks into a bar, goes up to two tables and asks: may I join you?"]
//! ```
//!
//! ```rust
//! let cfg = config::load_config(None)?;
//! println!("{}", cfg.persona.label);
//! ```
//!
use crate::core::error::{PalError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub persona: PersonaConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

/// How the bot presents itself.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PersonaConfig {
    /// Name used in the "what's your name" reply.
    #[serde(default = "default_persona_name")]
    pub name: String,
    /// Prefix printed before every reply in the interactive shell.
    #[serde(default = "default_persona_label")]
    pub label: String,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            name: default_persona_name(),
            label: default_persona_label(),
        }
    }
}

/// Replacement content pools. An empty list keeps the built-in pool.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    #[serde(default)]
    pub greetings: Vec<String>,
    #[serde(default)]
    pub jokes: Vec<String>,
}

fn default_persona_name() -> String {
    "RustPal".to_string()
}
fn default_persona_label() -> String {
    "RustPal 🦀".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".rustpal.toml";

/// Loads the effective configuration.
///
/// When `explicit` is set, that file is the only source and must exist.
/// Otherwise the user and project files are merged over the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => load_explicit_config(path)?,
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_explicit_config(path: &Path) -> Result<Config> {
    let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
    if !expanded.is_file() {
        return Err(anyhow!(PalError::Config(format!(
            "Configuration file '{}' does not exist.",
            expanded.display()
        ))));
    }
    info!("Loading configuration from: {}", expanded.display());
    load_config_from_path(&expanded)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "RustPal", "rustpal") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.rustpal.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the root looking for `.rustpal.toml`,
/// stopping at the first directory that contains `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.persona.name = if project_cfg.persona.name != default_persona_name() {
        project_cfg.persona.name
    } else {
        user.persona.name
    };
    merged.persona.label = if project_cfg.persona.label != default_persona_label() {
        project_cfg.persona.label
    } else {
        user.persona.label
    };
    merged.content.greetings = if !project_cfg.content.greetings.is_empty() {
        project_cfg.content.greetings
    } else {
        user.content.greetings
    };
    merged.content.jokes = if !project_cfg.content.jokes.is_empty() {
        project_cfg.content.jokes
    } else {
        user.content.jokes
    };
    merged
}

fn validate_config(config: &Config) -> Result<()> {
    if config.persona.name.trim().is_empty() {
        return Err(anyhow!(PalError::Config(
            "persona.name must not be empty.".to_string()
        )));
    }
    if config.persona.label.trim().is_empty() {
        return Err(anyhow!(PalError::Config(
            "persona.label must not be empty.".to_string()
        )));
    }
    for (pool, entries) in [
        ("greetings", &config.content.greetings),
        ("jokes", &config.content.jokes),
    ] {
        if let Some(index) = entries.iter().position(|e| e.trim().is_empty()) {
            return Err(anyhow!(PalError::Config(format!(
                "content.{pool}[{index}] must not be empty."
            ))));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [persona]
            name = "Ferris"

            [content]
            jokes = ["Why did the crab cross the road? It didn't, it borrowed the other side."]
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.persona.name, "Ferris");
        assert_eq!(config.persona.label, default_persona_label()); // Default
        assert!(config.content.greetings.is_empty());
        assert_eq!(config.content.jokes.len(), 1);
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result: std::result::Result<Config, _> = toml::from_str("[persona]\nmood = \"grumpy\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let user = Config {
            persona: PersonaConfig {
                name: "UserPal".into(),
                label: "UserPal >".into(),
            },
            content: ContentConfig {
                greetings: vec!["Howdy!".into()],
                jokes: vec!["user joke".into()],
            },
        };
        let project = Config {
            persona: PersonaConfig {
                name: "ProjectPal".into(),
                ..Default::default()
            },
            content: ContentConfig {
                jokes: vec!["project joke".into()],
                ..Default::default()
            },
        };

        let merged = merge_configs(user, Some(project));

        assert_eq!(merged.persona.name, "ProjectPal");
        assert_eq!(merged.persona.label, "UserPal >"); // Project left the default
        assert_eq!(merged.content.greetings, vec!["Howdy!"]);
        assert_eq!(merged.content.jokes, vec!["project joke"]);
    }

    #[test]
    fn test_validate_config_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_config_empty_name() {
        let config = Config {
            persona: PersonaConfig {
                name: "   ".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("persona.name must not be empty"));
    }

    #[test]
    fn test_validate_config_blank_pool_entry() {
        let config = Config {
            content: ContentConfig {
                greetings: vec!["Hi!".into(), "".into()],
                ..Default::default()
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("content.greetings[1]"));
    }

    #[test]
    fn test_find_project_config_in_ancestor() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();

        let found = find_project_config_path(&nested);
        assert_eq!(found, Some(temp_dir.path().join(PROJECT_CONFIG_FILENAME)));
    }

    #[test]
    fn test_find_project_config_stops_at_git_root() {
        let temp_dir = tempdir().unwrap();
        let repo = temp_dir.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();

        assert_eq!(find_project_config_path(&repo), None);
    }

    #[test]
    fn test_load_explicit_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("pal.toml");
        fs::write(&path, "[persona]\nlabel = \"Bot:\"\n").unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.persona.label, "Bot:");
        assert_eq!(config.persona.name, default_persona_name());
    }

    #[test]
    fn test_load_explicit_config_missing_file() {
        let temp_dir = tempdir().unwrap();
        let result = load_config(Some(temp_dir.path().join("nope.toml").as_path()));
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }
}

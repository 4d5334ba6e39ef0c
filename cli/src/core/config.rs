//! # Convmatch Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the convmatch configuration. The
//! configuration supplies what the matching core deliberately does not hard
//! code: the Adjective Tag Set used to validate state slots, the longest state
//! accepted, and extra lexicon entries for the bundled annotator.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config` (`~` is expanded)
//! 2. Project-specific `.convmatch.toml` in the current directory or ancestors
//!    (the search stops at a directory containing `.git`)
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! Sources 1 and 2 are alternatives: an explicit file replaces the project
//! file search. Whichever applies is merged over the user file field by field.
//!
//! ## Examples
//!
//! ```toml
//! [matching]
//! adjective_tags = ["JJ", "JJR", "JJS"]
//! max_state_len = 15
//!
//! [lexicon]
//! grumpy = "JJ"
//! ```
//!
//! ```rust,no_run
//! let cfg = convmatch::core::config::load_config(None)?;
//! let dispatcher = cfg.dispatcher();
//! let annotator = cfg.annotator();
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
use crate::annotate::{AdjectiveTags, LexiconAnnotator};
use crate::core::error::{ConvmatchError, Result};
use crate::matching::{Dispatcher, MatchContext, TaskRegistry, DEFAULT_MAX_STATE_LEN};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub matching: MatchingConfig,
    /// Extra `word = "TAG"` entries for the lexicon annotator.
    #[serde(default)]
    pub lexicon: BTreeMap<String, String>,
}

/// Settings for the goal matchers.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MatchingConfig {
    /// Tags treated as adjectives when validating a state slot.
    #[serde(default = "default_adjective_tags")]
    pub adjective_tags: Vec<String>,
    /// Longest accepted state slot, in characters.
    #[serde(default = "default_max_state_len")]
    pub max_state_len: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            adjective_tags: default_adjective_tags(),
            max_state_len: default_max_state_len(),
        }
    }
}

fn default_adjective_tags() -> Vec<String> {
    AdjectiveTags::default().iter().map(str::to_string).collect()
}
fn default_max_state_len() -> usize {
    DEFAULT_MAX_STATE_LEN
}

impl Config {
    /// A dispatcher over the standard task registry with these matching settings.
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(
            TaskRegistry::standard(),
            MatchContext::from_config(&self.matching),
        )
    }

    /// The bundled annotator, extended with the configured lexicon entries.
    pub fn annotator(&self) -> LexiconAnnotator {
        LexiconAnnotator::new().with_entries(self.lexicon.iter())
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".convmatch.toml";

/// Loads the merged configuration. `explicit` is the `--config` path, if any.
pub fn load_config(explicit: Option<&str>) -> Result<Config> {
    let user_config = load_user_config()?;
    let overlay = match explicit {
        Some(path) => Some(load_explicit_config(path)?),
        None => {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            load_project_config(&current_dir)?
        }
    };
    let merged_config = merge_configs(user_config.unwrap_or_default(), overlay);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_explicit_config(path: &str) -> Result<Config> {
    let expanded = PathBuf::from(shellexpand::tilde(path).into_owned());
    info!("Loading configuration from: {}", expanded.display());
    if !expanded.is_file() {
        return Err(anyhow!(ConvmatchError::Config(format!(
            "Configuration file '{}' does not exist or is not a file.",
            expanded.display()
        ))));
    }
    load_config_from_path(&expanded)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Convmatch", "convmatch") {
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

fn load_project_config(start: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file ({}) found in {} or ancestors.",
            PROJECT_CONFIG_FILENAME,
            start.display()
        );
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path: &Path = start;
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

fn merge_configs(user: Config, overlay: Option<Config>) -> Config {
    let overlay = match overlay {
        Some(o) => o,
        None => return user,
    };
    let mut merged = Config::default();
    merged.matching.adjective_tags = if overlay.matching.adjective_tags != default_adjective_tags() {
        overlay.matching.adjective_tags
    } else {
        user.matching.adjective_tags
    };
    merged.matching.max_state_len = if overlay.matching.max_state_len != default_max_state_len() {
        overlay.matching.max_state_len
    } else {
        user.matching.max_state_len
    };
    merged.lexicon = user.lexicon;
    merged.lexicon.extend(overlay.lexicon);
    merged
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.matching.adjective_tags.is_empty() {
        return Err(anyhow!(ConvmatchError::Config(
            "matching.adjective_tags must contain at least one tag.".to_string()
        )));
    }
    if config.matching.adjective_tags.iter().any(|t| t.trim().is_empty()) {
        return Err(anyhow!(ConvmatchError::Config(
            "matching.adjective_tags cannot contain blank tags.".to_string()
        )));
    }
    if config.matching.max_state_len == 0 {
        return Err(anyhow!(ConvmatchError::Config(
            "matching.max_state_len must be greater than zero.".to_string()
        )));
    }
    for (word, tag) in &config.lexicon {
        if word.trim().is_empty() || tag.trim().is_empty() {
            return Err(anyhow!(ConvmatchError::Config(format!(
                "Invalid lexicon entry '{}' = '{}': word and tag must be non-empty.",
                word, tag
            ))));
        }
    }
    info!("Configuration validation successful.");
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::Annotator;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [matching]
            adjective_tags = ["JJ", "ADJ"]

            [lexicon]
            grumpy = "JJ"
            Frank = "NNP"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.matching.adjective_tags, vec!["JJ", "ADJ"]);
        assert_eq!(config.matching.max_state_len, DEFAULT_MAX_STATE_LEN); // Default
        assert_eq!(config.lexicon.get("grumpy").map(String::as_str), Some("JJ"));
        assert_eq!(config.lexicon.len(), 2);
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.matching.adjective_tags, vec!["ADJ", "JJ", "JJR", "JJS"]);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[matching]\nfoo = 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_prefers_overlay_non_defaults() {
        let mut user = Config::default();
        user.matching.max_state_len = 20;
        user.lexicon.insert("grumpy".into(), "JJ".into());
        user.lexicon.insert("banana".into(), "NN".into());

        let mut project = Config::default();
        project.matching.adjective_tags = vec!["ADJ".into()];
        project.lexicon.insert("banana".into(), "JJ".into());

        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.matching.adjective_tags, vec!["ADJ"]);
        assert_eq!(merged.matching.max_state_len, 20); // Project left the default
        assert_eq!(merged.lexicon.get("banana").map(String::as_str), Some("JJ"));
        assert_eq!(merged.lexicon.get("grumpy").map(String::as_str), Some("JJ"));
    }

    #[test]
    fn test_merge_without_overlay_returns_user() {
        let mut user = Config::default();
        user.matching.max_state_len = 3;
        assert_eq!(merge_configs(user.clone(), None), user);
    }

    #[test]
    fn test_validate_config_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_config_empty_tags() {
        let mut config = Config::default();
        config.matching.adjective_tags.clear();
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("at least one tag"));
    }

    #[test]
    fn test_validate_config_zero_state_len() {
        let mut config = Config::default();
        config.matching.max_state_len = 0;
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConvmatchError>(),
            Some(ConvmatchError::Config(_))
        ));
    }

    #[test]
    fn test_validate_config_blank_lexicon_tag() {
        let mut config = Config::default();
        config.lexicon.insert("grumpy".into(), " ".into());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_find_project_config_walks_up_to_git_root() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join(".git")).unwrap();
        fs::write(root.join(PROJECT_CONFIG_FILENAME), "").unwrap();
        let nested = root.join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(
            find_project_config_path(&nested),
            Some(root.join(PROJECT_CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_find_project_config_stops_at_git_dir() {
        let temp_dir = tempdir().unwrap();
        let outer = temp_dir.path();
        fs::write(outer.join(PROJECT_CONFIG_FILENAME), "").unwrap();
        let repo = outer.join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();

        assert_eq!(find_project_config_path(&repo), None);
    }

    #[test]
    fn test_load_project_config_parses_file() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join(".git")).unwrap();
        fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILENAME),
            "[matching]\nmax_state_len = 9\n",
        )
        .unwrap();

        let config = load_project_config(temp_dir.path()).unwrap().unwrap();
        assert_eq!(config.matching.max_state_len, 9);
    }

    #[test]
    fn test_load_explicit_config_missing_file() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        let err = load_explicit_config(&missing.to_string_lossy()).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_explicit_path_tilde_expansion() {
        let home_dir = dirs::home_dir().unwrap();
        let expanded = shellexpand::tilde("~/convmatch.toml").into_owned();
        assert_eq!(
            PathBuf::from(expanded),
            home_dir.join("convmatch.toml")
        );
    }

    #[test]
    fn test_config_builds_annotator_and_dispatcher() {
        let mut config = Config::default();
        config.lexicon.insert("grumpy".into(), "JJ".into());
        let doc = config.annotator().annotate("I am grumpy").unwrap();
        let result = config.dispatcher().resolve_and_match(1, 3, &doc).unwrap();
        assert_eq!(result.extracted(), Some("grumpy"));
    }
}

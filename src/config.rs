//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/lexstat/lexstat.toml`
//! 3. Environment variables: `LEXSTAT_*` prefix
//!
//! Scalars replace the previous layer when specified. The stopword array
//! in the global config UNIONS with the compiled defaults and supports a
//! `!word` negation prefix to remove an inherited entry; environment
//! variables replace arrays outright (explicit user override).

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Raw settings for intermediate parsing (fields are Option to detect
/// "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub top_words: Option<usize>,
    pub top_ngrams: Option<usize>,
    pub report_dir: Option<PathBuf>,
    pub extra_stopwords: Option<Vec<String>>,
}

/// Unified configuration for lexstat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// How many ranked tokens the word table keeps
    pub top_words: usize,
    /// How many ranked n-grams the bigram/trigram tables keep
    pub top_ngrams: usize,
    /// Directory for generated CSV reports and the TOC text
    pub report_dir: PathBuf,
    /// Stopwords added on top of the built-in English list
    pub extra_stopwords: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            top_words: 40,
            top_ngrams: 20,
            report_dir: PathBuf::from("report/generated"),
            extra_stopwords: ["alice", "said", "would", "could", "one"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Get the XDG config directory for lexstat.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "lexstat").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("lexstat.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge arrays with union semantics and negation support.
    ///
    /// - Items from overlay are added to base
    /// - Items prefixed with `!` remove the corresponding item
    /// - Duplicates are de-duplicated; result is sorted for determinism
    pub fn merge_array(base: &[String], overlay: &[String]) -> Vec<String> {
        let mut result: HashSet<String> = base.iter().cloned().collect();

        for pattern in overlay {
            if let Some(negated) = pattern.strip_prefix('!') {
                result.remove(negated);
            } else {
                result.insert(pattern.clone());
            }
        }

        let mut vec: Vec<String> = result.into_iter().collect();
        vec.sort();
        vec
    }

    /// Merge overlay config onto self (base).
    ///
    /// - Scalar options: overlay wins if Some, otherwise keep base
    /// - `extra_stopwords`: union merge with negation support
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            top_words: overlay.top_words.unwrap_or(self.top_words),
            top_ngrams: overlay.top_ngrams.unwrap_or(self.top_ngrams),
            report_dir: overlay
                .report_dir
                .clone()
                .unwrap_or_else(|| self.report_dir.clone()),
            extra_stopwords: overlay
                .extra_stopwords
                .as_ref()
                .map(|o| Self::merge_array(&self.extra_stopwords, o))
                .unwrap_or_else(|| self.extra_stopwords.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/lexstat/lexstat.toml`
    ///    (stopword array UNIONS with defaults, `!word` removes)
    /// 3. Environment variables: `LEXSTAT_*` prefix (REPLACE)
    pub fn load() -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        Ok(current)
    }

    /// Load settings from an explicit TOML file merged over defaults.
    ///
    /// Used by tests and by callers that manage their own config location.
    pub fn load_from(path: &Path) -> Result<Self, ApplicationError> {
        let raw = load_raw_settings(path)?;
        Ok(Self::default().merge_with(&raw))
    }

    /// Apply LEXSTAT_* environment variables as explicit overrides.
    ///
    /// Env vars replace values (not merge), they are explicit user
    /// overrides. `LEXSTAT_EXTRA_STOPWORDS` takes a comma-separated list.
    pub fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("LEXSTAT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("extra_stopwords"),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get::<usize>("top_words") {
            settings.top_words = val;
        }
        if let Ok(val) = config.get::<usize>("top_ngrams") {
            settings.top_ngrams = val;
        }
        if let Ok(val) = config.get_string("report_dir") {
            settings.report_dir = PathBuf::from(val);
        }
        if let Ok(val) = config.get::<Vec<String>>("extra_stopwords") {
            settings.extra_stopwords = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# lexstat configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/lexstat/lexstat.toml
#   Env:    LEXSTAT_* environment variables (explicit overrides)
#
# extra_stopwords UNIONS with the compiled defaults.
# Use "!word" to REMOVE an inherited entry:
#   extra_stopwords = ["gutenberg", "!alice"]

# How many ranked tokens the word table keeps
# top_words = 40

# How many ranked n-grams the bigram/trigram tables keep
# top_ngrams = 20

# Directory for generated CSV reports and the TOC text
# report_dir = "report/generated"

# Stopwords added on top of the built-in English list
# extra_stopwords = ["alice", "said", "would", "could", "one"]
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.top_words, 40);
        assert_eq!(settings.top_ngrams, 20);
        assert!(settings.extra_stopwords.contains(&"alice".to_string()));
    }

    #[test]
    fn test_merge_array_union() {
        let base = vec!["a".to_string(), "b".to_string()];
        let overlay = vec!["c".to_string()];
        let result = Settings::merge_array(&base, &overlay);
        assert_eq!(result, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_merge_array_negation() {
        let base = vec!["a".to_string(), "b".to_string()];
        let overlay = vec!["!a".to_string(), "c".to_string()];
        let result = Settings::merge_array(&base, &overlay);
        assert_eq!(result, vec!["b", "c"]);
    }

    #[test]
    fn test_merge_array_negation_nonexistent() {
        let base = vec!["a".to_string()];
        let overlay = vec!["!x".to_string()];
        assert_eq!(Settings::merge_array(&base, &overlay), vec!["a"]);
    }

    #[test]
    fn given_overlay_scalars_when_merging_then_overlay_wins() {
        let overlay = RawSettings {
            top_words: Some(5),
            top_ngrams: None,
            report_dir: None,
            extra_stopwords: None,
        };
        let merged = Settings::default().merge_with(&overlay);
        assert_eq!(merged.top_words, 5);
        assert_eq!(merged.top_ngrams, 20);
    }
}

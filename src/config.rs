use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".spellfix.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub language: String,

    /// Word list replacing the embedded dictionary
    pub word_list: Option<PathBuf>,

    /// Extra known words, one per line
    pub personal_dictionary: Option<PathBuf>,

    pub ignore_patterns: Vec<String>,

    pub max_suggestions: usize,

    pub max_edit_distance: u32,
}

fn default_language() -> String {
    "en_US".to_string()
}

fn default_max_suggestions() -> usize {
    5
}

fn default_max_edit_distance() -> u32 {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            word_list: None,
            personal_dictionary: None,
            ignore_patterns: vec![
                r"\w*[_\d]\w*".to_string(),          // Identifiers with digits or underscores
                r"https?://\S+".to_string(),         // URLs
                r"\b[a-fA-F0-9]{32,}\b".to_string(), // Hashes
                r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}".to_string(), // Emails
            ],
            max_suggestions: default_max_suggestions(),
            max_edit_distance: default_max_edit_distance(),
        }
    }
}

impl Config {
    /// Load configuration with priority: local config > global config > defaults
    pub fn load() -> Result<Self> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Path::new(LOCAL_CONFIG_FILE),
        )
    }

    pub fn load_from(global_path: Option<&Path>, local_path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global_path {
            if global_path.exists() {
                log::debug!("Loading global config from {}", global_path.display());
                config = config.merge(Self::from_file(global_path)?);
            }
        }

        if local_path.exists() {
            log::debug!("Loading local config from {}", local_path.display());
            config = config.merge(Self::from_file(local_path)?);
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        // Paths in a config file are relative to the file itself
        if let Some(base) = path.parent() {
            config.word_list = config.word_list.map(|p| base.join(p));
            config.personal_dictionary = config.personal_dictionary.map(|p| base.join(p));
        }

        Ok(config)
    }

    fn merge(mut self, other: Self) -> Self {
        if other.language != default_language() {
            self.language = other.language;
        }
        if other.word_list.is_some() {
            self.word_list = other.word_list;
        }
        if other.personal_dictionary.is_some() {
            self.personal_dictionary = other.personal_dictionary;
        }
        for pattern in other.ignore_patterns {
            if !self.ignore_patterns.contains(&pattern) {
                self.ignore_patterns.push(pattern);
            }
        }
        if other.max_suggestions != default_max_suggestions() {
            self.max_suggestions = other.max_suggestions;
        }
        if other.max_edit_distance != default_max_edit_distance() {
            self.max_edit_distance = other.max_edit_distance;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellfix").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

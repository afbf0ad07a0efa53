pub mod dictionary;
pub mod suggestions;
pub mod tokenizer;

use crate::corrector::SpellOracle;
use crate::Config;
use anyhow::Result;
use dictionary::Dictionary;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Numbers, percentages, dates, times
    static ref NUMERIC: Regex = Regex::new(r"^[+-]?\d[\d.,:/%-]*$").unwrap();
}

/// Dictionary-backed spell oracle
pub struct SpellChecker {
    dictionary: Dictionary,
    ignore_patterns: Vec<Regex>,
    max_suggestions: usize,
    max_edit_distance: u32,
}

impl SpellChecker {
    pub fn new(config: &Config) -> Result<Self> {
        let dictionary = Dictionary::load(config)?;
        log::debug!("Loaded {} words into dictionary", dictionary.len());

        Ok(Self::with_dictionary(dictionary, config))
    }

    pub fn with_dictionary(dictionary: Dictionary, config: &Config) -> Self {
        let mut ignore_patterns = Vec::new();
        for pattern in &config.ignore_patterns {
            match Regex::new(pattern) {
                Ok(re) => ignore_patterns.push(re),
                Err(e) => log::warn!("Invalid ignore pattern '{}': {}", pattern, e),
            }
        }

        Self {
            dictionary,
            ignore_patterns,
            max_suggestions: config.max_suggestions,
            max_edit_distance: config.max_edit_distance,
        }
    }

    fn should_ignore(&self, word: &str) -> bool {
        // Skip single characters
        if word.chars().count() <= 1 {
            return true;
        }

        if NUMERIC.is_match(word) {
            return true;
        }

        self.ignore_patterns
            .iter()
            .any(|pattern| pattern.is_match(word))
    }
}

impl SpellOracle for SpellChecker {
    fn is_known(&self, word: &str) -> bool {
        self.should_ignore(word) || self.dictionary.contains(&word.to_lowercase())
    }

    fn candidates(&self, word: &str) -> Vec<String> {
        suggestions::generate(
            &word.to_lowercase(),
            &self.dictionary,
            self.max_edit_distance,
            self.max_suggestions,
        )
    }
}

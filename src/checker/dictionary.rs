use crate::config::Config;
use anyhow::{Context, Result};
use fst::automaton::{Levenshtein, LevenshteinError};
use fst::{IntoStreamer, Map, Streamer};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const EN_WORDS: &str = include_str!("words/en.txt");
const EN_US_WORDS: &str = include_str!("words/en_US.txt");
const EN_GB_WORDS: &str = include_str!("words/en_GB.txt");
const RANKED_WORDS: &str = include_str!("words/ranked.txt");

/// Rank of a word missing from the frequency list
pub const UNRANKED: u64 = u64::MAX;

/// Lower-cased word set. Each word maps to its frequency rank, 0 being the
/// most common.
pub struct Dictionary {
    map: Map<Vec<u8>>,
    longest: usize,
}

impl Dictionary {
    /// Load the configured word list (or the embedded one) plus personal words
    pub fn load(config: &Config) -> Result<Self> {
        let mut words = match &config.word_list {
            Some(path) => read_word_list(path)?,
            None => embedded_words(&config.language),
        };

        if let Some(personal_path) = &config.personal_dictionary {
            if personal_path.exists() {
                let personal = read_word_list(personal_path)
                    .context("Failed to read personal dictionary")?;
                log::debug!(
                    "Adding {} personal words from {}",
                    personal.len(),
                    personal_path.display()
                );
                words.extend(personal);
            }
        }

        Self::from_ranked_words(words, parse_word_list(RANKED_WORDS))
    }

    /// Build an in-memory dictionary without frequency information
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_ranked_words(words, Vec::<String>::new())
    }

    /// Build an in-memory dictionary; words are stored lower-cased.
    ///
    /// `ranked` lists common words, most frequent first. Ranked words that are
    /// not in `words` are not added.
    pub fn from_ranked_words<I, S, R, T>(words: I, ranked: R) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut entries: BTreeMap<String, u64> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .map(|w| (w, UNRANKED))
            .collect();

        for (rank, word) in ranked.into_iter().enumerate() {
            if let Some(slot) = entries.get_mut(&word.as_ref().trim().to_lowercase()) {
                *slot = (*slot).min(rank as u64);
            }
        }

        let longest = entries.keys().map(|w| w.chars().count()).max().unwrap_or(0);
        let map = Map::from_iter(entries).context("Failed to build dictionary")?;
        Ok(Self { map, longest })
    }

    /// Check if word exists in dictionary. Callers pass lower-case words.
    pub fn contains(&self, word: &str) -> bool {
        self.map.contains_key(word.as_bytes())
    }

    /// Frequency rank of a word, [`UNRANKED`] if it is rare or unknown
    pub fn rank(&self, word: &str) -> u64 {
        self.map.get(word.as_bytes()).unwrap_or(UNRANKED)
    }

    /// Length in characters of the longest word
    pub fn longest_word(&self) -> usize {
        self.longest
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// All words within `distance` Levenshtein edits of `word`
    pub fn within_distance(
        &self,
        word: &str,
        distance: u32,
    ) -> std::result::Result<Vec<String>, LevenshteinError> {
        let automaton = Levenshtein::new(word, distance)?;
        let mut results = Vec::new();
        let mut stream = self.map.search(&automaton).into_stream();

        while let Some((key, _)) = stream.next() {
            if let Ok(word) = String::from_utf8(key.to_vec()) {
                results.push(word);
            }
        }

        Ok(results)
    }
}

/// Whitespace-separated words; lines starting with `#` are comments
fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list: {}", path.display()))?;
    Ok(parse_word_list(&content))
}

fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .flat_map(str::split_whitespace)
        .map(str::to_string)
        .collect()
}

fn embedded_words(language: &str) -> Vec<String> {
    let regional = match language {
        "en_GB" => EN_GB_WORDS,
        "en" | "en_US" => EN_US_WORDS,
        other => {
            log::warn!(
                "No embedded dictionary for '{}', falling back to en_US",
                other
            );
            EN_US_WORDS
        }
    };

    let mut words = parse_word_list(EN_WORDS);
    words.extend(parse_word_list(regional));
    words
}

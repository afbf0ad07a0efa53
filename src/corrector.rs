//! Token-by-token correction of a document.
//!
//! The [`Corrector`] asks a [`SpellOracle`] about every whitespace-delimited
//! token. Unknown tokens with candidates are handed to a [`Resolver`], which
//! picks the replacement. The console prompt is one resolver; tests and other
//! front-ends supply their own.

use crate::checker::tokenizer::{self, Casing};
use crate::error::{CorrectError, Result};

/// Dictionary lookup and suggestion capability
pub trait SpellOracle {
    /// Case-insensitive membership test
    fn is_known(&self, word: &str) -> bool;

    /// Corrections for an unknown word, best first. The order must be stable.
    fn candidates(&self, word: &str) -> Vec<String>;
}

/// An unknown token that has at least one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguousToken {
    pub word: String,
    /// Index of the token in the document
    pub position: usize,
    pub candidates: Vec<String>,
}

/// Chooses replacements for ambiguous tokens
pub trait Resolver {
    /// Return the 0-based index of the chosen candidate.
    fn resolve(&mut self, token: &AmbiguousToken) -> Result<usize>;

    /// Called for unknown tokens that have no candidates.
    fn no_suggestions(&mut self, _word: &str) -> Result<()> {
        Ok(())
    }
}

impl<F> Resolver for F
where
    F: FnMut(&AmbiguousToken) -> Result<usize>,
{
    fn resolve(&mut self, token: &AmbiguousToken) -> Result<usize> {
        self(token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenStatus {
    Known,
    NoSuggestions,
    Ambiguous(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Correction {
    pub tokens: Vec<String>,
    pub replaced: usize,
    pub unresolved: usize,
}

impl Correction {
    /// Corrected tokens joined by single spaces
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

pub struct Corrector<'a, O: SpellOracle + ?Sized> {
    oracle: &'a O,
}

impl<'a, O: SpellOracle + ?Sized> Corrector<'a, O> {
    pub fn new(oracle: &'a O) -> Self {
        Self { oracle }
    }

    /// Classify a token. Candidates carry the token's punctuation and casing,
    /// so each one can replace the token as-is.
    pub fn check(&self, token: &str) -> TokenStatus {
        let parts = tokenizer::split_affixes(token);
        if parts.word.is_empty() || self.oracle.is_known(parts.word) {
            return TokenStatus::Known;
        }

        let casing = Casing::of(parts.word);
        let mut candidates: Vec<String> = Vec::new();
        for candidate in self.oracle.candidates(parts.word) {
            let shaped = format!("{}{}{}", parts.prefix, casing.apply(&candidate), parts.suffix);
            if !candidates.contains(&shaped) {
                candidates.push(shaped);
            }
        }

        if candidates.is_empty() {
            TokenStatus::NoSuggestions
        } else {
            TokenStatus::Ambiguous(candidates)
        }
    }

    pub fn correct<R>(&self, text: &str, resolver: &mut R) -> Result<Correction>
    where
        R: Resolver + ?Sized,
    {
        let mut correction = Correction::default();

        for (position, token) in tokenizer::tokens(text).enumerate() {
            let corrected = match self.check(token) {
                TokenStatus::Known => token.to_string(),
                TokenStatus::NoSuggestions => {
                    log::debug!("No suggestions for '{}'", token);
                    resolver.no_suggestions(token)?;
                    correction.unresolved += 1;
                    token.to_string()
                }
                TokenStatus::Ambiguous(candidates) => {
                    let ambiguous = AmbiguousToken {
                        word: token.to_string(),
                        position,
                        candidates,
                    };
                    let index = resolver.resolve(&ambiguous)?;
                    let AmbiguousToken {
                        word,
                        mut candidates,
                        ..
                    } = ambiguous;

                    if index >= candidates.len() {
                        return Err(CorrectError::SelectionOutOfRange {
                            word,
                            index,
                            count: candidates.len(),
                        });
                    }

                    let chosen = candidates.swap_remove(index);
                    log::debug!("Replacing '{}' with '{}'", word, chosen);
                    if chosen != word {
                        correction.replaced += 1;
                    }
                    chosen
                }
            };

            correction.tokens.push(corrected);
        }

        log::info!(
            "Processed {} tokens: {} replaced, {} without suggestions",
            correction.tokens.len(),
            correction.replaced,
            correction.unresolved
        );

        Ok(correction)
    }
}

use crate::checker::dictionary::Dictionary;
use std::collections::BTreeSet;

/// Generate spelling suggestions for a lower-case word.
///
/// Only the closest tier is returned: if any word is one edit away, words two
/// edits away are dropped. Within a tier, candidates that keep every letter of
/// the typo come first, then common words, then the rest lexicographically,
/// so the list is stable across runs.
pub fn generate(
    word: &str,
    dictionary: &Dictionary,
    max_distance: u32,
    max_suggestions: usize,
) -> Vec<String> {
    if max_distance == 0 || max_suggestions == 0 {
        return Vec::new();
    }

    // Nothing in the dictionary can be close enough to a word this long
    let length = word.chars().count();
    if length > dictionary.longest_word() + max_distance as usize {
        log::debug!("Skipping suggestions for a {}-character word", length);
        return Vec::new();
    }

    let matches = retrieve(word, dictionary, max_distance);
    order(word, matches, dictionary, max_distance as usize, max_suggestions)
}

/// Dictionary words that may be within `max_distance` edits.
///
/// The automaton counts a swap of adjacent letters as two edits, so it runs one
/// edit wider and [`order`] applies the real bound.
fn retrieve(word: &str, dictionary: &Dictionary, max_distance: u32) -> Vec<String> {
    dictionary
        .within_distance(word, max_distance + 1)
        .or_else(|e| {
            log::debug!("Narrowing search for '{}': {}", word, e);
            dictionary.within_distance(word, max_distance)
        })
        .unwrap_or_else(|e| {
            // Automaton too large (long words, high distance)
            log::debug!("Falling back to single edits for '{}': {}", word, e);
            single_edits(word)
                .into_iter()
                .filter(|candidate| dictionary.contains(candidate))
                .collect()
        })
}

fn order(
    word: &str,
    matches: Vec<String>,
    dictionary: &Dictionary,
    max_distance: usize,
    max_suggestions: usize,
) -> Vec<String> {
    let mut scored: Vec<(usize, bool, u64, String)> = matches
        .into_iter()
        .filter(|candidate| candidate != word)
        .filter_map(|candidate| {
            let distance = edit_distance(word, &candidate);
            (distance <= max_distance).then(|| {
                let drops_letters = !keeps_letters(word, &candidate);
                (distance, drops_letters, dictionary.rank(&candidate), candidate)
            })
        })
        .collect();

    let Some(best) = scored.iter().map(|(distance, ..)| *distance).min() else {
        return Vec::new();
    };

    scored.retain(|(distance, ..)| *distance == best);
    scored.sort();
    scored.dedup();

    scored
        .into_iter()
        .take(max_suggestions)
        .map(|(.., candidate)| candidate)
        .collect()
}

/// Whether every letter typed survives in the candidate, i.e. the typo only
/// missed or swapped keys
fn keeps_letters(typo: &str, candidate: &str) -> bool {
    let mut available: Vec<char> = candidate.chars().collect();
    typo.chars().all(|c| match available.iter().position(|&a| a == c) {
        Some(i) => {
            available.swap_remove(i);
            true
        }
        None => false,
    })
}

/// Optimal string alignment distance: Levenshtein plus adjacent transpositions
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, item) in matrix[0].iter_mut().enumerate() {
        *item = j;
    }

    for i in 1..=a_len {
        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };

            let mut best = std::cmp::min(
                std::cmp::min(
                    matrix[i - 1][j] + 1, // deletion
                    matrix[i][j - 1] + 1, // insertion
                ),
                matrix[i - 1][j - 1] + cost, // substitution
            );

            if i > 1
                && j > 1
                && a_chars[i - 1] == b_chars[j - 2]
                && a_chars[i - 2] == b_chars[j - 1]
            {
                best = best.min(matrix[i - 2][j - 2] + 1); // transposition
            }

            matrix[i][j] = best;
        }
    }

    matrix[a_len][b_len]
}

/// Every string one edit away from `word`
fn single_edits(word: &str) -> BTreeSet<String> {
    let mut edits = BTreeSet::new();
    let chars: Vec<char> = word.chars().collect();
    let alphabet: Vec<char> = ('a'..='z').collect();

    // Deletions
    for i in 0..chars.len() {
        let mut new_word = chars.clone();
        new_word.remove(i);
        edits.insert(new_word.iter().collect());
    }

    // Transpositions (swap adjacent)
    for i in 0..chars.len().saturating_sub(1) {
        let mut new_word = chars.clone();
        new_word.swap(i, i + 1);
        edits.insert(new_word.iter().collect());
    }

    // Replacements
    for i in 0..chars.len() {
        for &ch in &alphabet {
            if chars[i] != ch {
                let mut new_word = chars.clone();
                new_word[i] = ch;
                edits.insert(new_word.iter().collect());
            }
        }
    }

    // Insertions
    for i in 0..=chars.len() {
        for &ch in &alphabet {
            let mut new_word = chars.clone();
            new_word.insert(i, ch);
            edits.insert(new_word.iter().collect());
        }
    }

    edits.remove(word);
    edits
}

use unicode_segmentation::UnicodeSegmentation;

/// Whitespace-delimited tokens, left to right
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// A token split into surrounding punctuation and the word to look up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parts<'a> {
    pub prefix: &'a str,
    pub word: &'a str,
    pub suffix: &'a str,
}

/// Strip leading and trailing non-alphanumeric graphemes from a token.
///
/// Inner punctuation is kept, so `don't` and `e-mail` stay whole. A token
/// with no alphanumeric grapheme yields an empty `word`.
pub fn split_affixes(token: &str) -> Parts<'_> {
    let is_wordlike = |g: &str| g.chars().next().map_or(false, char::is_alphanumeric);

    let mut graphemes = token.grapheme_indices(true);
    let start = graphemes.find(|(_, g)| is_wordlike(*g)).map(|(i, _)| i);

    let Some(start) = start else {
        return Parts {
            prefix: token,
            word: "",
            suffix: "",
        };
    };

    let end = token
        .grapheme_indices(true)
        .rev()
        .find(|(_, g)| is_wordlike(*g))
        .map(|(i, g)| i + g.len())
        .unwrap_or(token.len());

    Parts {
        prefix: &token[..start],
        word: &token[start..end],
        suffix: &token[end..],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    Lower,
    Capitalized,
    Upper,
    Mixed,
}

impl Casing {
    pub fn of(word: &str) -> Self {
        let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();

        match letters.split_first() {
            None => Casing::Mixed,
            Some((_, [])) if letters[0].is_uppercase() => Casing::Capitalized,
            Some(_) if letters.iter().all(|c| c.is_uppercase()) => Casing::Upper,
            Some(_) if letters.iter().all(|c| c.is_lowercase()) => Casing::Lower,
            Some((first, rest))
                if first.is_uppercase() && rest.iter().all(|c| c.is_lowercase()) =>
            {
                Casing::Capitalized
            }
            Some(_) => Casing::Mixed,
        }
    }

    /// Shape a dictionary candidate like the word it replaces
    pub fn apply(self, candidate: &str) -> String {
        match self {
            Casing::Upper => candidate.to_uppercase(),
            Casing::Capitalized => {
                let mut chars = candidate.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            Casing::Lower | Casing::Mixed => candidate.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_ignore_whitespace_layout() {
        let tokens: Vec<_> = tokens("  Ths\tis\n\na   tst ").collect();
        assert_eq!(tokens, vec!["Ths", "is", "a", "tst"]);
    }

    #[test]
    fn test_split_affixes() {
        assert_eq!(
            split_affixes("(hello),"),
            Parts {
                prefix: "(",
                word: "hello",
                suffix: "),"
            }
        );
        assert_eq!(split_affixes("don't").word, "don't");
        assert_eq!(split_affixes("\"tst.\"").word, "tst");
        assert_eq!(split_affixes("naïve!").word, "naïve");
    }

    #[test]
    fn test_split_affixes_without_word() {
        let parts = split_affixes("--");
        assert_eq!(parts.prefix, "--");
        assert!(parts.word.is_empty());
        assert!(parts.suffix.is_empty());
    }

    #[test]
    fn test_casing_detection() {
        assert_eq!(Casing::of("tst"), Casing::Lower);
        assert_eq!(Casing::of("Ths"), Casing::Capitalized);
        assert_eq!(Casing::of("I"), Casing::Capitalized);
        assert_eq!(Casing::of("TST"), Casing::Upper);
        assert_eq!(Casing::of("tSt"), Casing::Mixed);
        assert_eq!(Casing::of("42"), Casing::Mixed);
    }

    #[test]
    fn test_casing_apply() {
        assert_eq!(Casing::Capitalized.apply("this"), "This");
        assert_eq!(Casing::Upper.apply("test"), "TEST");
        assert_eq!(Casing::Lower.apply("test"), "test");
        assert_eq!(Casing::Mixed.apply("iPhone"), "iPhone");
    }
}

//! Amharic text preprocessing: cleaning, tokenization, normalization,
//! stopword removal, and stemming. Queries must go through the exact same
//! pipeline the corpus did, or term lookups silently miss.

use std::sync::LazyLock;

use regex::Regex;

use crate::retrieval::stopwords;

// Tokens are runs of Ethiopic script or word characters. The slash is kept
// inside tokens so abbreviations like "ዶ/ር" survive tokenization and can be
// expanded afterwards.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[\u{1200}-\u{137F}\\w/]+").expect("valid token regex"));

// Common slash abbreviations and their expanded single-token forms.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("ዶ/ር", "ዶክተር"),
    ("ፕ/ር", "ፕሮፌሰር"),
    ("ወ/ሮ", "ወይዘሮ"),
    ("ወ/ሪት", "ወይዘሪት"),
    ("ም/ል", "ምክትል"),
    ("ጠ/ሚ", "ጠቅላይሚኒስትር"),
    ("ት/ቤት", "ትምህርትቤት"),
    ("ክ/ከተማ", "ክፍለከተማ"),
];

/// Fold letter families that spell the same sound onto one canonical form
/// (ሐ/ኀ/ኸ → ሀ, ሠ → ሰ, ዐ → አ, ፀ → ጸ, order by vowel).
fn normalize_char(c: char) -> char {
    match c {
        'ሐ' | 'ኀ' | 'ኸ' => 'ሀ',
        'ሑ' | 'ኁ' | 'ኹ' => 'ሁ',
        'ሒ' | 'ኂ' | 'ኺ' => 'ሂ',
        'ሓ' | 'ኃ' | 'ኻ' => 'ሃ',
        'ሔ' | 'ኄ' | 'ኼ' => 'ሄ',
        'ሕ' | 'ኅ' | 'ኽ' => 'ህ',
        'ሖ' | 'ኆ' | 'ኾ' => 'ሆ',
        'ሠ' => 'ሰ',
        'ሡ' => 'ሱ',
        'ሢ' => 'ሲ',
        'ሣ' => 'ሳ',
        'ሤ' => 'ሴ',
        'ሥ' => 'ስ',
        'ሦ' => 'ሶ',
        'ዐ' => 'አ',
        'ዑ' => 'ኡ',
        'ዒ' => 'ኢ',
        'ዓ' => 'ኣ',
        'ዔ' => 'ኤ',
        'ዕ' => 'እ',
        'ዖ' => 'ኦ',
        'ፀ' => 'ጸ',
        'ፁ' => 'ጹ',
        'ፂ' => 'ጺ',
        'ፃ' => 'ጻ',
        'ፄ' => 'ጼ',
        'ፅ' => 'ጽ',
        'ፆ' => 'ጾ',
        other => other,
    }
}

fn normalize_letters(token: &str) -> String {
    token.chars().map(normalize_char).collect()
}

fn expand_abbreviation(token: &str) -> String {
    for (abbreviation, expansion) in ABBREVIATIONS {
        if token == *abbreviation {
            return (*expansion).to_string();
        }
    }
    // Unknown abbreviation: just drop the slash.
    token.replace('/', "")
}

fn is_numeral(c: char) -> bool {
    // ASCII digits plus Ethiopic numerals ፩..፼.
    c.is_ascii_digit() || ('\u{1369}'..='\u{137C}').contains(&c)
}

fn is_stripped_punctuation(c: char) -> bool {
    // Ethiopic punctuation ፡..፨, ASCII punctuation except the slash used by
    // abbreviations.
    ('\u{1361}'..='\u{1368}').contains(&c) || (c.is_ascii_punctuation() && c != '/')
}

/// Strip numerals and punctuation, split into tokens, expand slash
/// abbreviations, and fold interchangeable letters.
pub fn clean_and_tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .map(|c| {
            if is_numeral(c) || is_stripped_punctuation(c) {
                ' '
            } else {
                c
            }
        })
        .collect();

    TOKEN_RE
        .find_iter(&cleaned)
        .map(|m| m.as_str())
        .map(|token| {
            if token.contains('/') {
                expand_abbreviation(token)
            } else {
                token.to_string()
            }
        })
        .map(|token| normalize_letters(&token))
        .filter(|token| !token.is_empty())
        .collect()
}

// Longest-match affixes for the stemmer. Order does not matter; the longest
// applicable one wins.
const SUFFIXES: &[&str] = &[
    "ናችን", "ናችሁ", "ናቸው", "ችሁ", "ቸው", "ልኝ", "ብኝ", "ልህ", "ብህ", "ልሽ", "ብሽ", "ዎች", "ኦች", "ዮች",
    "አን", "አት", "አው", "ነት", "ኝ", "ህ", "ሽ", "ት", "ች", "ን", "ዬ", "ዋ", "ኡ", "ው", "ና",
];

const PREFIXES: &[&str] = &[
    "እንደ", "ስለ", "እነ", "እና", "አይ", "አል", "አስ", "ታን", "አን", "የ", "ለ", "በ", "ከ", "እ", "ት", "ይ", "ሰ",
];

/// Light Amharic stemmer: strip the longest matching prefix, then the
/// longest matching suffix. Never reduces a token to nothing.
pub fn stem(word: &str) -> String {
    let mut current = word;

    if let Some(prefix) = longest_affix(current, PREFIXES, |w, a| w.starts_with(a)) {
        let remainder = &current[prefix.len()..];
        if !remainder.is_empty() {
            current = remainder;
        }
    }

    if let Some(suffix) = longest_affix(current, SUFFIXES, |w, a| w.ends_with(a)) {
        let remainder = &current[..current.len() - suffix.len()];
        if !remainder.is_empty() {
            return remainder.to_string();
        }
    }

    current.to_string()
}

fn longest_affix<'a>(
    word: &str,
    affixes: &[&'a str],
    matches: impl Fn(&str, &str) -> bool,
) -> Option<&'a str> {
    affixes
        .iter()
        .filter(|affix| matches(word, affix))
        .max_by_key(|affix| affix.len())
        .copied()
}

/// The full query/document pipeline: tokenize, lowercase stray Latin,
/// drop stopwords, stem.
pub fn preprocess(text: &str) -> Vec<String> {
    clean_and_tokenize(text)
        .into_iter()
        .map(|token| token.to_lowercase())
        .filter(|token| !stopwords::is_stopword(token))
        .map(|token| stem(&token))
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_on_ethiopic_word_space() {
        let tokens = clean_and_tokenize("ኢትዮጵያ ታሪክ አላት።");
        assert_eq!(tokens, vec!["ኢትዮጵያ", "ታሪክ", "አላት"]);
    }

    #[test]
    fn test_numerals_are_removed() {
        let tokens = clean_and_tokenize("በ2024 እና ፳፻ ዓመት");
        assert!(!tokens.iter().any(|t| t.contains('2')));
        assert!(!tokens.iter().any(|t| t.contains('፳')));
    }

    #[test]
    fn test_ethiopic_punctuation_is_removed() {
        let tokens = clean_and_tokenize("ሰላም፣ እንዴት፤ ነህ፧");
        assert_eq!(tokens, vec!["ሰላም", "እንዴት", "ነህ"]);
    }

    #[test]
    fn test_known_abbreviation_expands() {
        let tokens = clean_and_tokenize("ዶ/ር አበበ");
        assert_eq!(tokens[0], "ዶክተር");
    }

    #[test]
    fn test_unknown_slash_token_loses_slash() {
        let tokens = clean_and_tokenize("ሀ/ለ");
        assert_eq!(tokens, vec!["ሀለ"]);
    }

    #[test]
    fn test_interchangeable_letters_fold_to_canonical_form() {
        assert_eq!(clean_and_tokenize("ሐይል"), vec!["ሀይል"]);
        assert_eq!(clean_and_tokenize("ሥራ"), vec!["ስራ"]);
        assert_eq!(clean_and_tokenize("ዓለም"), vec!["ኣለም"]);
        assert_eq!(clean_and_tokenize("ፀሀይ"), vec!["ጸሀይ"]);
    }

    #[test]
    fn test_mixed_script_keeps_latin_words() {
        let tokens = clean_and_tokenize("የ Ethiopia ዜና");
        assert!(tokens.contains(&"Ethiopia".to_string()));
    }

    #[test]
    fn test_stem_strips_prefix_and_suffix() {
        // የ- prefix and -ዎች suffix around a noun.
        assert_eq!(stem("የመጽሀፍዎች"), "መጽሀፍ");
    }

    #[test]
    fn test_stem_prefers_longest_affix() {
        // እንደ- must win over እ-.
        assert_eq!(stem("እንደሰራ"), "ሰራ");
    }

    #[test]
    fn test_stem_never_empties_a_token() {
        assert!(!stem("የ").is_empty());
        assert!(!stem("ን").is_empty());
    }

    #[test]
    fn test_preprocess_drops_stopwords_and_lowercases() {
        let tokens = preprocess("ኢትዮጵያ እና Kenya ላይ");
        assert!(tokens.contains(&"kenya".to_string()));
        assert!(!tokens.iter().any(|t| t == "እና"));
        assert!(!tokens.iter().any(|t| t == "ላይ"));
    }

    #[test]
    fn test_preprocess_of_query_matches_preprocess_of_document() {
        // The same surface form through either path lands on one term.
        let from_query = preprocess("ሥራ");
        let from_document = preprocess("በሥራው");
        assert_eq!(from_query, from_document);
    }
}

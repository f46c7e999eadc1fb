//! Built-in Amharic stopword list.
//!
//! A compact list of high-frequency function words: conjunctions,
//! prepositions, copulas, pronouns, and common auxiliaries. Terms here are
//! dropped before stemming, matching the preprocessing the corpus itself
//! went through.

pub const AMHARIC_STOPWORDS: &[&str] = &[
    "እና",
    "ነው",
    "ላይ",
    "ውስጥ",
    "ወደ",
    "ጋር",
    "ግን",
    "ወይም",
    "እንደ",
    "ስለ",
    "ከ",
    "በ",
    "የ",
    "ለ",
    "ም",
    "ናቸው",
    "ነበር",
    "ነበሩ",
    "አለ",
    "አሉ",
    "የለም",
    "ይህ",
    "ይህን",
    "ያ",
    "እነዚህ",
    "እነዚያ",
    "እሱ",
    "እሷ",
    "እነሱ",
    "እኔ",
    "እኛ",
    "አንተ",
    "አንቺ",
    "እናንተ",
    "ሁሉ",
    "ሁሉም",
    "እያንዳንዱ",
    "ብቻ",
    "እንዲሁም",
    "እንዲሁ",
    "ደግሞ",
    "ግዜ",
    "ጊዜ",
    "በኋላ",
    "በፊት",
    "እስከ",
    "ያለ",
    "ሆኖም",
    "ስለዚህ",
    "እንጂ",
    "ማለት",
    "ይሆናል",
    "ሆነ",
    "ሲሆን",
    "መሆኑን",
    "መሆን",
    "እንደሆነ",
    "እንደሚሆን",
    "አሁን",
    "ዛሬ",
    "ትናንት",
    "ነገ",
    "እዚህ",
    "እዚያ",
    "ምን",
    "ማን",
    "የት",
    "መቼ",
    "እንዴት",
    "ለምን",
];

pub fn is_stopword(token: &str) -> bool {
    AMHARIC_STOPWORDS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_function_words_are_stopwords() {
        assert!(is_stopword("እና"));
        assert!(is_stopword("ነው"));
        assert!(is_stopword("ላይ"));
    }

    #[test]
    fn test_content_words_are_not_stopwords() {
        assert!(!is_stopword("ኢትዮጵያ"));
        assert!(!is_stopword("መንግስት"));
    }
}

// src/analyzer/text.rs
// =============================================================================
// This module analyzes the visible text of a page.
//
// Three computations, all pure functions over the body text:
// - Keyword density: which words dominate the page, as a percentage of all
//   words. Function words (Spanish stop words), very short tokens and
//   vowel-only tokens are excluded. Top 5 by density, stable order on ties.
// - Readability: a simple sentence-length heuristic clamped to [0, 100].
//   15 words per sentence scores 100; every extra word costs 2 points.
// - Word count: plain whitespace-separated token count.
//
// Rust concepts:
// - HashMap for frequency counting
// - sort_by with partial_cmp for f64 ordering (f64 is not Ord)
// - Stable sort so ties keep first-encounter order
// =============================================================================

use std::collections::HashMap;

use regex::Regex;
use serde::Serialize;

/// Spanish function words excluded from keyword density.
const STOP_WORDS: &[&str] = &[
    "a", "ante", "bajo", "cabe", "con", "contra", "de", "desde", "durante", "en", "entre",
    "hacia", "hasta", "mediante", "para", "por", "según", "sin", "so", "sobre", "tras", "el",
    "la", "los", "las", "un", "una", "unos", "unas", "y", "e", "ni", "que", "es", "son", "era",
    "fue", "fueron", "ser", "estar", "este", "esta", "estos", "estas", "ese", "esa", "esos",
    "esas", "aquel", "aquella", "aquellos", "aquellas", "su", "sus", "cuyo", "cuya", "cuyos",
    "cuyas", "mi", "mis", "tu", "tus", "nuestro", "nuestra", "nuestros", "nuestras",
];

/// One entry of the keyword-density table.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordDensity {
    pub word: String,
    /// Percentage of all word tokens on the page
    pub density: f64,
}

/// Computes the top-5 keyword densities of the page text.
///
/// The denominator is the total word count BEFORE filtering, so the reported
/// percentages are shares of the whole text and can never sum above 100.
pub fn keyword_density(text: &str) -> Vec<KeywordDensity> {
    let word_pattern = Regex::new(r"\b\w+\b").unwrap();
    let lowercased = text.to_lowercase();

    let words: Vec<&str> = word_pattern
        .find_iter(&lowercased)
        .map(|m| m.as_str())
        .collect();
    let total_words = words.len();
    if total_words == 0 {
        return Vec::new();
    }

    // Count frequencies, remembering the order words first appeared in so
    // ties can be broken deterministically
    let mut frequency: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for word in &words {
        if word.chars().count() <= 2 || is_stop_word(word) || is_all_vowels(word) {
            continue;
        }
        let count = frequency.entry(word).or_insert(0);
        if *count == 0 {
            first_seen.push(word);
        }
        *count += 1;
    }

    let mut densities: Vec<KeywordDensity> = first_seen
        .into_iter()
        .map(|word| KeywordDensity {
            word: word.to_string(),
            density: frequency[word] as f64 / total_words as f64 * 100.0,
        })
        .collect();

    // Stable sort: equal densities keep first-encounter order
    densities.sort_by(|a, b| b.density.partial_cmp(&a.density).unwrap());
    densities.truncate(5);
    densities
}

/// Sentence-length readability heuristic, clamped to [0, 100].
///
/// Returns 0 when there are no sentences or no words (guards the division).
pub fn readability_score(text: &str) -> f64 {
    let sentences: Vec<&str> = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .collect();
    let words: Vec<&str> = text.split_whitespace().collect();

    if sentences.is_empty() || words.is_empty() {
        return 0.0;
    }

    let average_words_per_sentence = words.len() as f64 / sentences.len() as f64;
    (100.0 - (average_words_per_sentence - 15.0) * 2.0).clamp(0.0, 100.0)
}

/// Whitespace-separated word count of the page text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

// Tokens like "aaa" or "eio" carry no keyword signal
fn is_all_vowels(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| "aeiou".contains(c))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is the denominator the UNFILTERED word count?
//    - Density answers "what share of the page is this word?"
//    - Filtering only decides which words are worth reporting,
//      not how big the page is
//    - Side effect: the reported percentages can never sum above 100
//
// 2. Why partial_cmp().unwrap() for sorting?
//    - f64 only implements PartialOrd because NaN breaks total ordering
//    - Our densities are count/total*100 with total > 0, so NaN can't occur
//      and the unwrap is safe
//
// 3. What does "stable sort" buy us?
//    - sort_by in Rust is stable: equal elements keep their relative order
//    - Combined with the first_seen list, ties are broken by where a word
//      first appeared in the text - fully deterministic output
//
// 4. Why chars().count() instead of len()?
//    - len() counts BYTES; "año" is 3 characters but 4 bytes in UTF-8
//    - The length filter is about characters a reader sees
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_is_sorted_descending_and_capped_at_five() {
        let text = "rust rust rust cargo cargo tokio serde clap hyper actix";
        let result = keyword_density(text);

        assert!(result.len() <= 5);
        assert_eq!(result[0].word, "rust");
        for pair in result.windows(2) {
            assert!(pair[0].density >= pair[1].density);
        }
    }

    #[test]
    fn test_densities_sum_at_most_one_hundred() {
        let text = "alpha beta gamma alpha beta alpha delta epsilon zeta";
        let result = keyword_density(text);
        let sum: f64 = result.iter().map(|k| k.density).sum();
        assert!(sum <= 100.0 + f64::EPSILON);
    }

    #[test]
    fn test_stop_words_and_short_tokens_never_appear() {
        let text = "el la de con rust para rust sobre ab xy rust";
        let result = keyword_density(text);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].word, "rust");
        // 3 occurrences out of 11 total tokens
        assert!((result[0].density - 3.0 / 11.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_vowel_only_tokens_are_excluded() {
        let result = keyword_density("aei oau rust rust");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].word, "rust");
    }

    #[test]
    fn test_ties_keep_first_encounter_order() {
        let text = "zebra apple zebra apple mango";
        let result = keyword_density(text);
        assert_eq!(result[0].word, "zebra");
        assert_eq!(result[1].word, "apple");
        assert_eq!(result[2].word, "mango");
    }

    #[test]
    fn test_empty_text_yields_no_keywords() {
        assert!(keyword_density("").is_empty());
    }

    #[test]
    fn test_readability_is_defined_for_tiny_input() {
        // "Hi." = 1 word, 1 sentence: 100 - (1 - 15) * 2 = 128, clamped
        let score = readability_score("Hi.");
        assert!(score.is_finite());
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_readability_clamps_to_zero() {
        // One 80-word sentence: 100 - (80 - 15) * 2 = -30, clamped to 0
        let long_sentence = format!("{}.", vec!["word"; 80].join(" "));
        assert_eq!(readability_score(&long_sentence), 0.0);
    }

    #[test]
    fn test_readability_of_empty_text_is_zero() {
        assert_eq!(readability_score(""), 0.0);
        assert_eq!(readability_score("..."), 0.0);
    }

    #[test]
    fn test_fifteen_word_sentences_score_best() {
        let sentence = format!("{}.", vec!["w"; 15].join(" "));
        assert_eq!(readability_score(&sentence), 100.0);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("one two  three\nfour"), 4);
        assert_eq!(word_count(""), 0);
    }
}

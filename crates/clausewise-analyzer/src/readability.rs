//! Flesch, Flesch-Kincaid and Gunning Fog readability metrics.

use std::sync::LazyLock;

use clausewise_core::ReadabilityScore;
use regex::Regex;

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid pattern"));
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z']+").expect("valid pattern"));
static VOWEL_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]+").expect("valid pattern"));
static ION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^aeiouy]ion").expect("valid pattern"));

/// Words with at least this many syllables count as complex.
const COMPLEX_SYLLABLES: usize = 3;

/// (minimum ease, grade label, ease label), highest band first.
const BANDS: &[(f64, &str, &str)] = &[
    (80.0, "Very Easy", "Plain English — anyone can understand this."),
    (65.0, "Easy", "Fairly accessible language — most adults can follow it."),
    (50.0, "Moderate", "Requires some concentration — equivalent to a magazine article."),
    (35.0, "Difficult", "Academic-level language — requires careful reading."),
    (20.0, "Very Difficult", "Dense legal or technical writing — hard to follow for most people."),
];

const LOWEST_BAND: (&str, &str) = (
    "Very Confusing",
    "Extremely complex — consider asking a professional to explain it.",
);

/// Round to one decimal place.
///
/// Rounds the exact binary value, so `8.25` goes to `8.2` (exact tie, to
/// even) and `0.15` to `0.1` (stored just below the tie).
pub(crate) fn round1(x: f64) -> f64 {
    format!("{x:.1}").parse().unwrap_or(x)
}

/// Heuristic English syllable count, never below one.
pub fn count_syllables(word: &str) -> usize {
    let word: String = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect();
    if word.is_empty() {
        return 1;
    }

    let mut count = VOWEL_GROUP.find_iter(&word).count();
    let bytes = word.as_bytes();
    if bytes.len() > 2
        && bytes[bytes.len() - 1] == b'e'
        && !b"aeiou".contains(&bytes[bytes.len() - 2])
    {
        count = count.saturating_sub(1);
    }
    count += ION_SUFFIX.find_iter(&word).count();
    count.max(1)
}

/// Compute readability for normalised text.
pub fn score(text: &str) -> ReadabilityScore {
    let sentences = SENTENCE_BREAK
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
        .max(1) as f64;

    let words: Vec<&str> = WORD.find_iter(text).map(|m| m.as_str()).collect();
    let word_count = words.len().max(1) as f64;

    let mut syllables = 0usize;
    let mut complex = 0usize;
    let mut letters = 0usize;
    for w in &words {
        let n = count_syllables(w);
        syllables += n;
        if n >= COMPLEX_SYLLABLES {
            complex += 1;
        }
        letters += w.len();
    }
    let syllables = syllables as f64;

    let words_per_sentence = word_count / sentences;
    let syllables_per_word = syllables / word_count;
    let avg_sentence_len = round1(words_per_sentence);
    let avg_word_len = round1(letters as f64 / word_count);
    let complex_word_pct = round1(complex as f64 / word_count * 100.0);

    let flesch_ease =
        round1(206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word).clamp(0.0, 100.0);
    let flesch_grade =
        round1(0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59).max(0.0);
    let gunning_fog = round1(0.4 * (avg_sentence_len + complex_word_pct));

    let (grade_label, ease_label) = BANDS
        .iter()
        .find(|(min, _, _)| flesch_ease >= *min)
        .map(|(_, grade, ease)| (*grade, *ease))
        .unwrap_or(LOWEST_BAND);

    ReadabilityScore {
        flesch_ease,
        flesch_grade,
        gunning_fog,
        avg_sentence_len,
        avg_word_len,
        complex_word_pct,
        grade_label: grade_label.to_string(),
        ease_label: ease_label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syllable_heuristics() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("agreement"), 3);
        assert_eq!(count_syllables("termination"), 5);
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("'"), 1);
        assert_eq!(count_syllables("rhythm"), 1);
    }

    #[test]
    fn simple_text_is_easy() {
        let r = score("The cat sat on the mat. The dog ran to the park.");
        assert_eq!(r.avg_sentence_len, 6.0);
        assert_eq!(r.complex_word_pct, 0.0);
        assert_eq!(r.flesch_ease, 100.0);
        assert_eq!(r.grade_label, "Very Easy");
    }

    #[test]
    fn dense_text_scores_low() {
        let r = score(
            "Notwithstanding any indemnification obligations, the licensee irrevocably \
             acknowledges consequential limitations regarding administrative determinations.",
        );
        assert!(r.flesch_ease < 20.0, "ease {}", r.flesch_ease);
        assert_eq!(r.grade_label, "Very Confusing");
        assert!(r.flesch_grade > 12.0);
    }

    #[test]
    fn bounds_hold_for_text_without_words() {
        let r = score("12345 !!! ...");
        assert!((0.0..=100.0).contains(&r.flesch_ease));
        assert!(r.flesch_grade >= 0.0);
    }

    #[test]
    fn rounding_is_one_decimal() {
        assert_eq!(round1(12.345), 12.3);
        assert_eq!(round1(0.05), 0.1);
    }

    #[test]
    fn rounding_follows_the_binary_value() {
        assert_eq!(round1(8.25), 8.2);
        assert_eq!(round1(0.25), 0.2);
        assert_eq!(round1(0.15), 0.1);
        assert_eq!(round1(26.75), 26.8);
        assert_eq!(round1(-2.25), -2.2);
    }

    #[test]
    fn sentence_length_tie_rounds_down() {
        let r = score("One two. Three four. Five six. Seven eight nine.");
        assert_eq!(r.avg_sentence_len, 2.2);
        assert_eq!(r.complex_word_pct, 0.0);
        assert_eq!(r.gunning_fog, 0.9);
    }
}

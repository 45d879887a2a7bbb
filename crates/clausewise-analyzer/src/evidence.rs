//! Verbatim supporting sentences for findings.

use std::collections::HashSet;

use clausewise_core::{normalize, split_sentences, truncate_chars};

use crate::patterns::PatternSet;

/// Maximum evidence sentences attached to one finding.
pub const MAX_EVIDENCE: usize = 2;

/// Sentences outside this character range are never quoted.
const MIN_SENTENCE_CHARS: usize = 20;
const MAX_SENTENCE_CHARS: usize = 500;

/// Sentences sharing this many leading lower-cased characters are duplicates.
const DEDUP_PREFIX_CHARS: usize = 80;

/// Collect up to `max` sentences of `text` matched by any of `patterns`.
///
/// `patterns` should be case-insensitive; sentences are returned normalised,
/// in document order, without near-duplicates.
pub fn find_evidence(text: &str, patterns: &PatternSet, max: usize) -> Vec<String> {
    let mut found = Vec::new();
    let mut seen = HashSet::new();

    for piece in split_sentences(text) {
        let sentence = normalize(piece);
        let len = sentence.chars().count();
        if !(MIN_SENTENCE_CHARS..=MAX_SENTENCE_CHARS).contains(&len) {
            continue;
        }
        if !patterns.is_match(&sentence) {
            continue;
        }
        let key = truncate_chars(&sentence.to_lowercase(), DEDUP_PREFIX_CHARS).to_string();
        if !seen.insert(key) {
            continue;
        }
        found.push(sentence);
        if found.len() >= max {
            break;
        }
    }

    found
}

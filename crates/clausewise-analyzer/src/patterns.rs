//! Compiled pattern sets shared by every rule evaluator.

use regex::{Regex, RegexBuilder};

/// Compile a pattern from the rule tables.
///
/// Table patterns are compile-time constants covered by tests, so a failure
/// here is a programming error.
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid pattern")
}

/// Compile a pattern that ignores case.
pub(crate) fn compile_ignore_case(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("valid pattern")
}

/// A list of alternatives evaluated together.
#[derive(Debug, Clone)]
pub struct PatternSet {
    regexes: Vec<Regex>,
}

impl PatternSet {
    /// Case-sensitive set, meant for the lower-cased document.
    pub fn new(patterns: &[&str]) -> Self {
        Self {
            regexes: patterns.iter().map(|p| compile(p)).collect(),
        }
    }

    /// Case-insensitive set, meant for the original text.
    pub fn ignore_case(patterns: &[&str]) -> Self {
        Self {
            regexes: patterns.iter().map(|p| compile_ignore_case(p)).collect(),
        }
    }

    /// True when any alternative matches somewhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regexes.iter().any(|re| re.is_match(text))
    }

    /// Total non-overlapping matches of every alternative.
    pub fn count_matches(&self, text: &str) -> usize {
        self.regexes.iter().map(|re| re.find_iter(text).count()).sum()
    }
}

/// First capture group of `re` that participated in the first match.
pub(crate) fn first_capture<'t>(re: &Regex, text: &'t str, groups: &[usize]) -> Option<&'t str> {
    let caps = re.captures(text)?;
    groups
        .iter()
        .find_map(|&g| caps.get(g).map(|m| m.as_str()))
}

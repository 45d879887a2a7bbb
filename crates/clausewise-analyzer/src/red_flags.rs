//! Red-flag detection for aggressive or one-sided clauses.

use std::collections::HashSet;

use clausewise_core::RedFlag;
use regex::Regex;

use crate::document::Document;
use crate::evidence::{MAX_EVIDENCE, find_evidence};
use crate::patterns::{PatternSet, compile};
use crate::rules::{RED_FLAG_RULES, RedFlagRule};

struct CompiledRule {
    trigger: Regex,
    message: &'static str,
    evidence: PatternSet,
}

pub struct RedFlagScanner {
    rules: Vec<CompiledRule>,
}

impl RedFlagScanner {
    pub fn new() -> Self {
        Self::from_rules(RED_FLAG_RULES)
    }

    pub fn from_rules(rules: &[RedFlagRule]) -> Self {
        Self {
            rules: rules
                .iter()
                .map(|r| CompiledRule {
                    trigger: compile(r.trigger),
                    message: r.message,
                    evidence: PatternSet::ignore_case(r.evidence),
                })
                .collect(),
        }
    }

    /// Red flags in rule order, at most one per distinct message.
    pub fn scan(&self, doc: &Document) -> Vec<RedFlag> {
        let mut seen = HashSet::new();
        self.rules
            .iter()
            .filter(|rule| rule.trigger.is_match(doc.lower()))
            .filter(|rule| seen.insert(rule.message))
            .map(|rule| RedFlag {
                message: rule.message.to_string(),
                evidence: find_evidence(doc.text(), &rule.evidence, MAX_EVIDENCE),
            })
            .collect()
    }
}

impl Default for RedFlagScanner {
    fn default() -> Self {
        Self::new()
    }
}

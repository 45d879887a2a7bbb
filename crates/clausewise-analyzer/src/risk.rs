//! Weighted risk scoring.

use clausewise_core::RiskLevel;
use regex::Regex;

use crate::patterns::compile;
use crate::rules::{
    HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD, RISK_PATTERNS, RISK_SCORE_CAP, risk_reason,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub reason: &'static str,
    /// Within `0..=100`.
    pub score: u32,
}

pub struct RiskScorer {
    patterns: Vec<(u32, Regex)>,
}

impl RiskScorer {
    pub fn new() -> Self {
        Self {
            patterns: RISK_PATTERNS
                .iter()
                .map(|(weight, p)| (*weight, compile(p)))
                .collect(),
        }
    }

    /// Sum the weight of every pattern present in the lower-cased document.
    ///
    /// Each pattern counts once regardless of how often it matches.
    pub fn raw_score(&self, lower: &str) -> u32 {
        self.patterns
            .iter()
            .filter(|(_, re)| re.is_match(lower))
            .map(|(weight, _)| weight)
            .sum()
    }

    pub fn assess(&self, lower: &str) -> RiskAssessment {
        let score = self.raw_score(lower).min(RISK_SCORE_CAP);
        let level = level_for(score);
        RiskAssessment {
            level,
            reason: risk_reason(level),
            score,
        }
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn level_for(score: u32) -> RiskLevel {
    if score >= HIGH_RISK_THRESHOLD {
        RiskLevel::High
    } else if score >= MEDIUM_RISK_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(level_for(0), RiskLevel::Low);
        assert_eq!(level_for(24), RiskLevel::Low);
        assert_eq!(level_for(25), RiskLevel::Medium);
        assert_eq!(level_for(49), RiskLevel::Medium);
        assert_eq!(level_for(50), RiskLevel::High);
        assert_eq!(level_for(100), RiskLevel::High);
    }

    #[test]
    fn each_pattern_counts_once() {
        let scorer = RiskScorer::new();
        assert_eq!(scorer.raw_score("no refund. no refund. no refund."), 15);
    }

    #[test]
    fn refund_and_arbitration_is_medium() {
        let scorer = RiskScorer::new();
        let assessment =
            scorer.assess("all disputes go to binding arbitration. there is no refund.");
        assert_eq!(assessment.score, 30);
        assert_eq!(assessment.level, RiskLevel::Medium);
        assert!(assessment.reason.starts_with("Has some notable clauses"));
    }

    #[test]
    fn score_is_capped() {
        let lower = "irrevocable. you waive every right. no refund. class action waiver. \
                     binding arbitration. we sell your personal data. at our sole discretion, \
                     without notice. unlimited liability. foreclosure. cross-default. wage garnishment.";
        let scorer = RiskScorer::new();
        assert!(scorer.raw_score(lower) > 100);
        let assessment = scorer.assess(lower);
        assert_eq!(assessment.score, 100);
        assert_eq!(assessment.level, RiskLevel::High);
    }

    #[test]
    fn clean_text_is_low() {
        let assessment = RiskScorer::new().assess("welcome to our friendly service.");
        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.level, RiskLevel::Low);
    }
}

//! The single-document analysis pipeline.

use std::sync::LazyLock;

use clausewise_core::{AnalysisResult, CoreError};
use tracing::debug;

use crate::checklist::ChecklistBuilder;
use crate::classifier::Classifier;
use crate::detectors::{Detector, default_detectors};
use crate::document::Document;
use crate::readability;
use crate::red_flags::RedFlagScanner;
use crate::risk::RiskScorer;
use crate::summary::summarize;

static DEFAULT_ANALYZER: LazyLock<Analyzer> = LazyLock::new(Analyzer::new);

/// Analyse `text` with the built-in rule set.
pub fn analyze(text: &str) -> Result<AnalysisResult, CoreError> {
    DEFAULT_ANALYZER.analyze(text)
}

/// Compiled rule set. Build once, share freely; analysis never mutates it.
pub struct Analyzer {
    classifier: Classifier,
    risk: RiskScorer,
    detectors: Vec<Box<dyn Detector>>,
    red_flags: RedFlagScanner,
    checklist: ChecklistBuilder,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::with_detectors(default_detectors())
    }

    /// Use a custom detector registry; key points follow its order.
    pub fn with_detectors(detectors: Vec<Box<dyn Detector>>) -> Self {
        Self {
            classifier: Classifier::new(),
            risk: RiskScorer::new(),
            detectors,
            red_flags: RedFlagScanner::new(),
            checklist: ChecklistBuilder::new(),
        }
    }

    pub fn detector_count(&self) -> usize {
        self.detectors.len()
    }

    /// Produce a complete analysis of `text`.
    ///
    /// Deterministic: the same input always yields an identical result.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, CoreError> {
        let doc = Document::new(text)?;
        Ok(self.analyze_document(&doc))
    }

    pub fn analyze_document(&self, doc: &Document) -> AnalysisResult {
        let word_count = doc.word_count();
        let char_count = doc.char_count();

        let classification = self.classifier.classify(doc.lower());
        let document_type = classification.document_type;
        let risk = self.risk.assess(doc.lower());

        let key_points: Vec<_> = self.detectors.iter().filter_map(|d| d.evaluate(doc)).collect();
        let red_flags = self.red_flags.scan(doc);
        let before_signing = self.checklist.build(doc, risk.level);

        debug!(
            document_type = %document_type,
            top_score = classification.top_score(),
            risk_score = risk.score,
            key_points = key_points.len(),
            red_flags = red_flags.len(),
            words = word_count,
            "analysed document"
        );

        AnalysisResult {
            document_type,
            document_summary: summarize(document_type, word_count),
            risk_level: risk.level,
            risk_reason: risk.reason.to_string(),
            risk_score: risk.score,
            readability: Some(readability::score(doc.text())),
            key_points,
            red_flags,
            before_signing,
            word_count,
            char_count,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use clausewise_core::{DocumentType, RiskLevel};

    use super::*;
    use crate::detectors::Refunds;

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(analyze("   \n\t  "), Err(CoreError::EmptyDocument)));
    }

    #[test]
    fn counts_use_normalised_text() {
        let result = analyze("Hello   there,\n\nfriend.").unwrap();
        assert_eq!(result.word_count, 3);
        assert_eq!(result.char_count, "Hello there, friend.".chars().count());
        assert_eq!(result.document_type, DocumentType::General);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert!(result.readability.is_some());
    }

    #[test]
    fn custom_registry_limits_key_points() {
        let analyzer = Analyzer::with_detectors(vec![Box::new(Refunds::new())]);
        assert_eq!(analyzer.detector_count(), 1);
        let result = analyzer
            .analyze("There is no refund. Payments are billed monthly to your card.")
            .unwrap();
        assert_eq!(result.key_points.len(), 1);
        assert_eq!(result.key_points[0].category, "Refunds");
    }

    #[test]
    fn analysis_is_deterministic() {
        let text = "We may share personal data with third parties. Binding arbitration applies.";
        assert_eq!(analyze(text).unwrap(), analyze(text).unwrap());
    }
}

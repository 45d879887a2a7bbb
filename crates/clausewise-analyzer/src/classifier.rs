//! Keyword-frequency classification for legal documents.
//!
//! Each category carries a pattern list; its score is the total number of
//! matches in the lower-cased document. The highest score wins, ties resolve
//! to the category listed first, and a document that matches nothing is
//! [`DocumentType::General`].

use clausewise_core::DocumentType;

use crate::patterns::PatternSet;
use crate::rules::DOC_TYPE_RULES;

/// Category scores for one document, in classification-table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub document_type: DocumentType,
    pub scores: Vec<(DocumentType, usize)>,
}

impl Classification {
    pub fn top_score(&self) -> usize {
        self.scores.iter().map(|(_, s)| *s).max().unwrap_or(0)
    }
}

pub struct Classifier {
    rules: Vec<(DocumentType, PatternSet)>,
}

impl Classifier {
    /// Compile the built-in classification table.
    pub fn new() -> Self {
        Self::from_rules(DOC_TYPE_RULES)
    }

    pub fn from_rules(rules: &[(DocumentType, &[&str])]) -> Self {
        Self {
            rules: rules
                .iter()
                .map(|(dt, patterns)| (*dt, PatternSet::new(patterns)))
                .collect(),
        }
    }

    /// Classify a lower-cased document.
    pub fn classify(&self, lower: &str) -> Classification {
        let scores: Vec<(DocumentType, usize)> = self
            .rules
            .iter()
            .map(|(dt, set)| (*dt, set.count_matches(lower)))
            .collect();
        let document_type = best_match(&scores);
        Classification {
            document_type,
            scores,
        }
    }

    /// Number of categories in the table.
    pub fn category_count(&self) -> usize {
        self.rules.len()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Highest-scoring category; the earliest wins a tie.
fn best_match(scores: &[(DocumentType, usize)]) -> DocumentType {
    let mut best = DocumentType::General;
    let mut best_score = 0;

    for (dt, score) in scores {
        if *score > best_score {
            best_score = *score;
            best = *dt;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> DocumentType {
        Classifier::new().classify(&text.to_lowercase()).document_type
    }

    #[test]
    fn lease_vocabulary_classifies_as_lease() {
        let text = "The tenant shall pay rent monthly. The landlord holds the security deposit. \
                    This lease covers the premises.";
        assert_eq!(classify(text), DocumentType::LeaseRental);
    }

    #[test]
    fn privacy_vocabulary_classifies_as_privacy_policy() {
        let text = "We process personal data under the GDPR. The data controller honours \
                    every data subject request, including the right to erasure.";
        assert_eq!(classify(text), DocumentType::PrivacyPolicy);
    }

    #[test]
    fn no_matches_is_general() {
        assert_eq!(classify("Hello there, friend."), DocumentType::General);
    }

    #[test]
    fn ties_resolve_to_earlier_category() {
        // One Insurance hit ("premium") and one Loan hit ("borrow").
        let result = Classifier::new().classify("premium borrow");
        assert_eq!(result.document_type, DocumentType::Insurance);
        assert_eq!(result.top_score(), 1);
    }

    #[test]
    fn scores_follow_table_order() {
        let clf = Classifier::new();
        let result = clf.classify("nothing");
        assert_eq!(result.scores.len(), clf.category_count());
        assert_eq!(result.scores[0].0, DocumentType::Insurance);
        assert!(result.scores.iter().all(|(_, s)| *s == 0));
    }

    #[test]
    fn custom_rules() {
        let clf = Classifier::from_rules(&[(DocumentType::Travel, &["boarding pass"])]);
        assert_eq!(clf.classify("show your boarding pass").document_type, DocumentType::Travel);
    }
}

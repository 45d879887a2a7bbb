//! Clause detectors.
//!
//! Each detector owns one key-point category. It checks a presence gate
//! against the lower-cased document and, when the gate fires, produces a
//! [`KeyPoint`] with a detail message, a `watch_out` flag and up to two
//! evidence sentences. Detectors are independent of one another; the
//! registry order is the order key points appear in a result.

mod commercial;
mod legal;
mod obligations;
mod privacy;

pub use commercial::{AutoRenewal, Cancellation, Payment, Refunds};
pub use legal::{
    AccountTermination, Arbitration, ForceMajeure, GoverningLaw, IntellectualProperty, Liability,
    TermsChanges,
};
pub use obligations::{
    AgeRestriction, LoanDefault, NetworkUsage, NonCompete, SecurityDeposit, ServiceLevel,
};
pub use privacy::{Cookies, DataPrivacy, HealthData};

use clausewise_core::KeyPoint;

use crate::document::Document;
use crate::evidence::{MAX_EVIDENCE, find_evidence};
use crate::patterns::PatternSet;

/// A category-specific clause detector.
pub trait Detector: Send + Sync {
    /// Key-point category this detector reports under.
    fn category(&self) -> &'static str;

    /// Inspect the document; `None` when the category is not addressed.
    fn evaluate(&self, doc: &Document) -> Option<KeyPoint>;
}

/// Every built-in detector in reporting order.
pub fn default_detectors() -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(Payment::new()),
        Box::new(AutoRenewal::new()),
        Box::new(Cancellation::new()),
        Box::new(Refunds::new()),
        Box::new(DataPrivacy::new()),
        Box::new(Cookies::new()),
        Box::new(Liability::new()),
        Box::new(Arbitration::new()),
        Box::new(IntellectualProperty::new()),
        Box::new(AccountTermination::new()),
        Box::new(TermsChanges::new()),
        Box::new(GoverningLaw::new()),
        Box::new(NonCompete::new()),
        Box::new(LoanDefault::new()),
        Box::new(HealthData::new()),
        Box::new(NetworkUsage::new()),
        Box::new(SecurityDeposit::new()),
        Box::new(ForceMajeure::new()),
        Box::new(ServiceLevel::new()),
        Box::new(AgeRestriction::new()),
    ]
}

macro_rules! default_from_new {
    ($($ty:ty),+ $(,)?) => {
        $(impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        })+
    };
}
pub(crate) use default_from_new;

/// Fixed presentation of a category.
pub(crate) struct Heading {
    pub category: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
}

impl Heading {
    /// Build the key point, quoting evidence from the original text.
    pub(crate) fn key_point(
        &self,
        doc: &Document,
        evidence: &PatternSet,
        detail: String,
        watch_out: bool,
    ) -> KeyPoint {
        KeyPoint {
            category: self.category.to_string(),
            icon: self.icon.to_string(),
            title: self.title.to_string(),
            detail,
            watch_out,
            evidence: find_evidence(doc.text(), evidence, MAX_EVIDENCE),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn run(detector: &dyn Detector, text: &str) -> Option<KeyPoint> {
        let doc = Document::new(text).unwrap();
        detector.evaluate(&doc)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use clausewise_core::MATRIX_CATEGORY_ORDER;

    use super::*;

    #[test]
    fn registry_has_twenty_distinct_categories() {
        let detectors = default_detectors();
        assert_eq!(detectors.len(), 20);
        let categories: HashSet<&str> = detectors.iter().map(|d| d.category()).collect();
        assert_eq!(categories.len(), 20);
    }

    #[test]
    fn every_category_has_a_matrix_position() {
        for d in default_detectors() {
            assert!(
                MATRIX_CATEGORY_ORDER.contains(&d.category()),
                "{} missing from matrix order",
                d.category()
            );
        }
    }

    #[test]
    fn reporting_order_starts_with_payment_and_ends_with_age() {
        let detectors = default_detectors();
        assert_eq!(detectors[0].category(), "Payment & Billing");
        assert_eq!(detectors[19].category(), "Age Restriction");
    }
}

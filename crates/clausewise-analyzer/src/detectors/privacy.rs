//! Personal, tracking and health data detectors.

use clausewise_core::KeyPoint;

use super::{Detector, Heading, default_from_new};
use crate::document::Document;
use crate::patterns::PatternSet;

const DATA_PRIVACY: Heading = Heading {
    category: "Privacy & Data",
    icon: "🔒",
    title: "Data & Privacy",
};

pub struct DataPrivacy {
    gate: PatternSet,
    sells: PatternSet,
    shares: PatternSet,
    regulated: PatternSet,
    evidence: PatternSet,
}

impl DataPrivacy {
    pub fn new() -> Self {
        Self {
            gate: PatternSet::new(&["personal (data|information)", "privacy", r"collect.*data"]),
            sells: PatternSet::new(&[r"sell.*data", r"third.party.*sell"]),
            shares: PatternSet::new(&[r"share.*third.part", r"third.part.*share"]),
            regulated: PatternSet::new(&["gdpr", "ccpa"]),
            evidence: PatternSet::ignore_case(&[
                "personal (data|information)",
                r"collect.*data",
                r"share.*data",
            ]),
        }
    }
}

impl Detector for DataPrivacy {
    fn category(&self) -> &'static str {
        DATA_PRIVACY.category
    }

    fn evaluate(&self, doc: &Document) -> Option<KeyPoint> {
        let lower = doc.lower();
        if !self.gate.is_match(lower) {
            return None;
        }

        let (detail, watch_out) = if self.sells.is_match(lower) {
            ("Your personal data may be sold to third parties.", true)
        } else if self.shares.is_match(lower) {
            (
                "Your data may be shared with third parties — check which ones and why.",
                true,
            )
        } else if self.regulated.is_match(lower) {
            ("GDPR/CCPA-compliant data handling is referenced.", false)
        } else {
            ("The document describes how your personal data is handled.", false)
        };
        Some(DATA_PRIVACY.key_point(doc, &self.evidence, detail.to_string(), watch_out))
    }
}

const COOKIES: Heading = Heading {
    category: "Cookies & Tracking",
    icon: "🍪",
    title: "Cookies & Tracking",
};

pub struct Cookies {
    gate: PatternSet,
    advertising: PatternSet,
    evidence: PatternSet,
}

impl Cookies {
    pub fn new() -> Self {
        Self {
            gate: PatternSet::new(&["cookie", "tracking", "web beacon", "pixel"]),
            advertising: PatternSet::new(&[r"third.party.*cookie", r"advertis.*cookie"]),
            evidence: PatternSet::ignore_case(&["cookie", "tracking", "web beacon"]),
        }
    }
}

impl Detector for Cookies {
    fn category(&self) -> &'static str {
        COOKIES.category
    }

    fn evaluate(&self, doc: &Document) -> Option<KeyPoint> {
        let lower = doc.lower();
        if !self.gate.is_match(lower) {
            return None;
        }
        let watch_out = self.advertising.is_match(lower);
        let detail = if watch_out {
            "Third-party and advertising cookies may be placed on your device."
        } else {
            "Cookies and tracking technologies are used."
        };
        Some(COOKIES.key_point(doc, &self.evidence, detail.to_string(), watch_out))
    }
}

const HEALTH_DATA: Heading = Heading {
    category: "Health Data",
    icon: "🏥",
    title: "Health & Medical Data",
};

pub struct HealthData {
    gate: PatternSet,
    disclosure: PatternSet,
    evidence: PatternSet,
}

impl HealthData {
    pub fn new() -> Self {
        Self {
            gate: PatternSet::new(&[
                "hipaa",
                r"health.*data",
                r"medical.*record",
                "protected health",
                r"\bphi\b",
            ]),
            disclosure: PatternSet::new(&[r"share.*health", r"disclose.*health", r"third.*health"]),
            evidence: PatternSet::ignore_case(&["hipaa", r"health.*data", r"medical.*record"]),
        }
    }
}

impl Detector for HealthData {
    fn category(&self) -> &'static str {
        HEALTH_DATA.category
    }

    fn evaluate(&self, doc: &Document) -> Option<KeyPoint> {
        let lower = doc.lower();
        if !self.gate.is_match(lower) {
            return None;
        }
        let watch_out = self.disclosure.is_match(lower);
        let detail = if watch_out {
            "Your health data may be shared with third parties — verify scope and purpose."
        } else {
            "Health data is involved. HIPAA or equivalent protections may apply."
        };
        Some(HEALTH_DATA.key_point(doc, &self.evidence, detail.to_string(), watch_out))
    }
}

default_from_new!(DataPrivacy, Cookies, HealthData);

#[cfg(test)]
mod tests {
    use super::super::test_support::run;
    use super::*;

    #[test]
    fn selling_data_outranks_sharing() {
        let text = "We may share personal data with third parties and sell data to brokers.";
        let kp = run(&DataPrivacy::new(), text).unwrap();
        assert_eq!(kp.detail, "Your personal data may be sold to third parties.");
        assert!(kp.watch_out);
    }

    #[test]
    fn sharing_with_third_parties_watches() {
        let kp = run(
            &DataPrivacy::new(),
            "We share your personal information with third parties.",
        )
        .unwrap();
        assert!(kp.detail.starts_with("Your data may be shared"));
        assert!(kp.watch_out);
        assert_eq!(kp.evidence.len(), 1);
    }

    #[test]
    fn gdpr_reference_is_reassuring() {
        let kp = run(&DataPrivacy::new(), "Our privacy practices follow the GDPR.").unwrap();
        assert_eq!(kp.detail, "GDPR/CCPA-compliant data handling is referenced.");
        assert!(!kp.watch_out);
    }

    #[test]
    fn advertising_cookies_watch() {
        let kp = run(
            &Cookies::new(),
            "Advertising partners may set cookies on your browser.",
        )
        .unwrap();
        assert!(kp.watch_out);
        let plain = run(&Cookies::new(), "We use a tracking pixel to count visits.").unwrap();
        assert!(!plain.watch_out);
        assert_eq!(plain.detail, "Cookies and tracking technologies are used.");
    }

    #[test]
    fn health_data_disclosure() {
        let kp = run(&HealthData::new(), "We may disclose your health data to insurers.").unwrap();
        assert!(kp.watch_out);
        let plain = run(&HealthData::new(), "Medical records are kept under HIPAA rules.").unwrap();
        assert!(!plain.watch_out);
    }

    #[test]
    fn phi_needs_word_boundary() {
        assert!(run(&HealthData::new(), "A philosophy of openness guides us.").is_none());
    }
}

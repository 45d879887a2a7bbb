//! Liability, dispute, rights and jurisdiction detectors.

use clausewise_core::KeyPoint;
use regex::Regex;

use super::{Detector, Heading, default_from_new};
use crate::document::Document;
use crate::patterns::{PatternSet, compile, first_capture};
use crate::rules::JURISDICTION_PATTERN;

const LIABILITY: Heading = Heading {
    category: "Liability",
    icon: "⚠️",
    title: "Liability & Indemnification",
};

pub struct Liability {
    gate: PatternSet,
    unlimited: PatternSet,
    limited: PatternSet,
    indemnity: PatternSet,
    evidence: PatternSet,
}

impl Liability {
    pub fn new() -> Self {
        Self {
            gate: PatternSet::new(&["liability", "liable", "indemnif"]),
            unlimited: PatternSet::new(&["unlimited liability"]),
            limited: PatternSet::new(&["limitation of liability", "not liable"]),
            indemnity: PatternSet::new(&["indemnif"]),
            evidence: PatternSet::ignore_case(&["liabilit", "indemnif"]),
        }
    }
}

impl Detector for Liability {
    fn category(&self) -> &'static str {
        LIABILITY.category
    }

    fn evaluate(&self, doc: &Document) -> Option<KeyPoint> {
        let lower = doc.lower();
        if !self.gate.is_match(lower) {
            return None;
        }

        let (base, mut watch_out) = if self.unlimited.is_match(lower) {
            ("You may be exposed to unlimited financial liability.", true)
        } else if self.limited.is_match(lower) {
            (
                "The provider limits its own liability — you may have limited recourse for damages.",
                true,
            )
        } else {
            ("The document includes liability clauses.", false)
        };

        let mut detail = base.to_string();
        if self.indemnity.is_match(lower) {
            detail.push_str(
                " You may be required to indemnify the provider against third-party claims.",
            );
            watch_out = true;
        }
        Some(LIABILITY.key_point(doc, &self.evidence, detail, watch_out))
    }
}

const ARBITRATION: Heading = Heading {
    category: "Dispute Resolution",
    icon: "⚖️",
    title: "Disputes & Arbitration",
};

pub struct Arbitration {
    gate: PatternSet,
    binding: PatternSet,
    class_waiver: PatternSet,
    evidence: PatternSet,
}

impl Arbitration {
    pub fn new() -> Self {
        Self {
            gate: PatternSet::new(&[
                "arbitrat",
                "class action",
                "dispute resolution",
                "jurisdiction",
            ]),
            binding: PatternSet::new(&["binding arbitration"]),
            class_waiver: PatternSet::new(&["class action waiver"]),
            evidence: PatternSet::ignore_case(&["arbitrat", "class action", "dispute"]),
        }
    }
}

impl Detector for Arbitration {
    fn category(&self) -> &'static str {
        ARBITRATION.category
    }

    fn evaluate(&self, doc: &Document) -> Option<KeyPoint> {
        let lower = doc.lower();
        if !self.gate.is_match(lower) {
            return None;
        }

        let mut detail = String::from("Dispute resolution procedures are outlined.");
        let mut watch_out = false;
        if self.binding.is_match(lower) {
            detail = "You must use binding arbitration to resolve disputes — you may not sue in court."
                .to_string();
            watch_out = true;
        }
        if self.class_waiver.is_match(lower) {
            detail.push_str(" Class action lawsuits are waived.");
            watch_out = true;
        }
        Some(ARBITRATION.key_point(doc, &self.evidence, detail, watch_out))
    }
}

const INTELLECTUAL_PROPERTY: Heading = Heading {
    category: "Intellectual Property",
    icon: "©️",
    title: "Content & IP Rights",
};

pub struct IntellectualProperty {
    gate: PatternSet,
    broad_license: PatternSet,
    evidence: PatternSet,
}

impl IntellectualProperty {
    pub fn new() -> Self {
        Self {
            gate: PatternSet::new(&[
                "intellectual property",
                "copyright",
                "trademark",
                r"content.*license",
                r"user.generated",
            ]),
            broad_license: PatternSet::new(&[
                r"grant.*license.*content",
                r"royalty.free",
                r"perpetual.*license",
            ]),
            evidence: PatternSet::ignore_case(&[
                "intellectual property",
                "copyright",
                r"license.*content",
            ]),
        }
    }
}

impl Detector for IntellectualProperty {
    fn category(&self) -> &'static str {
        INTELLECTUAL_PROPERTY.category
    }

    fn evaluate(&self, doc: &Document) -> Option<KeyPoint> {
        let lower = doc.lower();
        if !self.gate.is_match(lower) {
            return None;
        }
        let watch_out = self.broad_license.is_match(lower);
        let detail = if watch_out {
            "You grant the platform a broad license to use your content."
        } else {
            "Intellectual property ownership is addressed."
        };
        Some(INTELLECTUAL_PROPERTY.key_point(doc, &self.evidence, detail.to_string(), watch_out))
    }
}

const ACCOUNT_TERMINATION: Heading = Heading {
    category: "Account Termination",
    icon: "🚫",
    title: "Account Suspension / Termination",
};

pub struct AccountTermination {
    gate: PatternSet,
    without_notice: PatternSet,
    terminates: PatternSet,
    evidence: PatternSet,
}

impl AccountTermination {
    const PATTERNS: [&'static str; 3] = [
        r"terminat.*account",
        r"suspend.*account",
        r"sole.*discretion",
    ];

    pub fn new() -> Self {
        Self {
            gate: PatternSet::new(&Self::PATTERNS),
            without_notice: PatternSet::new(&["without (prior )?notice"]),
            terminates: PatternSet::new(&["terminat"]),
            evidence: PatternSet::ignore_case(&Self::PATTERNS),
        }
    }
}

impl Detector for AccountTermination {
    fn category(&self) -> &'static str {
        ACCOUNT_TERMINATION.category
    }

    fn evaluate(&self, doc: &Document) -> Option<KeyPoint> {
        let lower = doc.lower();
        if !self.gate.is_match(lower) {
            return None;
        }
        let watch_out = self.without_notice.is_match(lower) && self.terminates.is_match(lower);
        let detail = if watch_out {
            "Your account may be terminated without prior notice at their discretion."
        } else {
            "The provider can terminate or suspend accounts under defined conditions."
        };
        Some(ACCOUNT_TERMINATION.key_point(doc, &self.evidence, detail.to_string(), watch_out))
    }
}

const TERMS_CHANGES: Heading = Heading {
    category: "Terms Changes",
    icon: "📝",
    title: "Right to Modify Terms",
};

pub struct TermsChanges {
    gate: PatternSet,
    unannounced: PatternSet,
    evidence: PatternSet,
}

impl TermsChanges {
    pub fn new() -> Self {
        Self {
            gate: PatternSet::new(&[
                r"modif.*terms",
                r"change.*terms",
                r"amend.*agreement",
                r"update.*terms",
            ]),
            unannounced: PatternSet::new(&[r"without.*notice", r"at any time.*modif"]),
            evidence: PatternSet::ignore_case(&[
                r"modif.*terms",
                r"change.*terms",
                r"amend.*agreement",
            ]),
        }
    }
}

impl Detector for TermsChanges {
    fn category(&self) -> &'static str {
        TERMS_CHANGES.category
    }

    fn evaluate(&self, doc: &Document) -> Option<KeyPoint> {
        let lower = doc.lower();
        if !self.gate.is_match(lower) {
            return None;
        }
        let watch_out = self.unannounced.is_match(lower);
        let detail = if watch_out {
            "Terms can be changed at any time without notice — continued use implies acceptance."
        } else {
            "The provider can update these terms over time."
        };
        Some(TERMS_CHANGES.key_point(doc, &self.evidence, detail.to_string(), watch_out))
    }
}

const GOVERNING_LAW: Heading = Heading {
    category: "Governing Law",
    icon: "🏛️",
    title: "Applicable Law & Jurisdiction",
};

pub struct GoverningLaw {
    gate: PatternSet,
    jurisdiction: Regex,
    evidence: PatternSet,
}

impl GoverningLaw {
    pub fn new() -> Self {
        Self {
            gate: PatternSet::new(&["governing law", "jurisdiction", "laws of the state"]),
            jurisdiction: compile(JURISDICTION_PATTERN),
            evidence: PatternSet::ignore_case(&["governing law", "jurisdiction"]),
        }
    }
}

impl Detector for GoverningLaw {
    fn category(&self) -> &'static str {
        GOVERNING_LAW.category
    }

    fn evaluate(&self, doc: &Document) -> Option<KeyPoint> {
        if !self.gate.is_match(doc.lower()) {
            return None;
        }
        let place = first_capture(&self.jurisdiction, doc.text(), &[2])
            .unwrap_or("a specific jurisdiction");
        let detail = format!(
            "This agreement is governed by the laws of {place}. Disputes may need to be resolved there."
        );
        Some(GOVERNING_LAW.key_point(doc, &self.evidence, detail, false))
    }
}

const FORCE_MAJEURE: Heading = Heading {
    category: "Force Majeure",
    icon: "🌪️",
    title: "Force Majeure",
};

pub struct ForceMajeure {
    gate: PatternSet,
    evidence: PatternSet,
}

impl ForceMajeure {
    pub fn new() -> Self {
        Self {
            gate: PatternSet::new(&[
                "force majeure",
                "act of god",
                r"beyond.*control",
                "unforeseeable",
            ]),
            evidence: PatternSet::ignore_case(&["force majeure", "act of god", r"beyond.*control"]),
        }
    }
}

impl Detector for ForceMajeure {
    fn category(&self) -> &'static str {
        FORCE_MAJEURE.category
    }

    fn evaluate(&self, doc: &Document) -> Option<KeyPoint> {
        if !self.gate.is_match(doc.lower()) {
            return None;
        }
        let detail = "A force majeure clause limits the provider's obligations during extraordinary events (natural disasters, pandemics, etc.).";
        Some(FORCE_MAJEURE.key_point(doc, &self.evidence, detail.to_string(), false))
    }
}

default_from_new!(
    Liability,
    Arbitration,
    IntellectualProperty,
    AccountTermination,
    TermsChanges,
    GoverningLaw,
    ForceMajeure,
);

#[cfg(test)]
mod tests {
    use super::super::test_support::run;
    use super::*;

    #[test]
    fn indemnity_is_appended_to_liability() {
        let text = "We are not liable for lost profits. You agree to indemnify us for any claim.";
        let kp = run(&Liability::new(), text).unwrap();
        assert_eq!(
            kp.detail,
            "The provider limits its own liability — you may have limited recourse for damages. \
             You may be required to indemnify the provider against third-party claims."
        );
        assert!(kp.watch_out);
    }

    #[test]
    fn plain_liability_clause() {
        let kp = run(&Liability::new(), "Each party bears liability for its own staff.").unwrap();
        assert_eq!(kp.detail, "The document includes liability clauses.");
        assert!(!kp.watch_out);
    }

    #[test]
    fn arbitration_with_class_waiver() {
        let text = "Disputes go to binding arbitration. This includes a class action waiver.";
        let kp = run(&Arbitration::new(), text).unwrap();
        assert!(kp.detail.starts_with("You must use binding arbitration"));
        assert!(kp.detail.ends_with(" Class action lawsuits are waived."));
        assert!(kp.watch_out);
        assert_eq!(kp.evidence.len(), 2);
    }

    #[test]
    fn class_waiver_alone_extends_default_detail() {
        let kp = run(
            &Arbitration::new(),
            "There is a class action waiver in section nine.",
        )
        .unwrap();
        assert_eq!(
            kp.detail,
            "Dispute resolution procedures are outlined. Class action lawsuits are waived."
        );
    }

    #[test]
    fn broad_content_license() {
        let text = "You grant us a royalty-free license to any user-generated content you post.";
        let kp = run(&IntellectualProperty::new(), text).unwrap();
        assert!(kp.watch_out);
    }

    #[test]
    fn termination_without_notice() {
        let text = "We may terminate your account without notice.";
        let kp = run(&AccountTermination::new(), text).unwrap();
        assert!(kp.watch_out);
        let soft = run(
            &AccountTermination::new(),
            "We may suspend your account for abuse.",
        )
        .unwrap();
        assert!(!soft.watch_out);
    }

    #[test]
    fn terms_changes_without_notice() {
        let kp = run(&TermsChanges::new(), "We may change these terms without notice.").unwrap();
        assert!(kp.watch_out);
        let kp = run(
            &TermsChanges::new(),
            "We will update these terms from time to time.",
        )
        .unwrap();
        assert!(!kp.watch_out);
    }

    #[test]
    fn governing_law_names_jurisdiction() {
        let text = "Governing law: the laws of New York apply to this agreement.";
        let kp = run(&GoverningLaw::new(), text).unwrap();
        assert_eq!(
            kp.detail,
            "This agreement is governed by the laws of New York. Disputes may need to be resolved there."
        );
        assert!(!kp.watch_out);
    }

    #[test]
    fn governing_law_without_named_place() {
        let kp = run(&GoverningLaw::new(), "Governing law is set out in section twelve.").unwrap();
        assert!(kp.detail.contains("the laws of a specific jurisdiction"));
    }

    #[test]
    fn force_majeure_never_watches() {
        let kp = run(
            &ForceMajeure::new(),
            "Neither party is responsible for events beyond its control.",
        )
        .unwrap();
        assert!(!kp.watch_out);
    }
}

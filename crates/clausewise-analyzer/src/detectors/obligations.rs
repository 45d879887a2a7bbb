//! Detectors for obligations placed on the signer: restrictive covenants,
//! default consequences, usage limits, deposits, service levels and age.

use clausewise_core::KeyPoint;
use regex::Regex;

use super::{Detector, Heading, default_from_new};
use crate::document::Document;
use crate::patterns::{PatternSet, compile, compile_ignore_case, first_capture};

const NON_COMPETE: Heading = Heading {
    category: "Non-Compete",
    icon: "🚷",
    title: "Non-Compete Clause",
};

pub struct NonCompete {
    gate: PatternSet,
    period: Regex,
    evidence: PatternSet,
}

impl NonCompete {
    const PATTERNS: [&'static str; 3] = [r"non.compete", r"non.solicit", "restraint of trade"];

    pub fn new() -> Self {
        Self {
            gate: PatternSet::new(&Self::PATTERNS),
            period: compile_ignore_case(r"(\d+)\s*(month|year)"),
            evidence: PatternSet::ignore_case(&Self::PATTERNS),
        }
    }
}

impl Detector for NonCompete {
    fn category(&self) -> &'static str {
        NON_COMPETE.category
    }

    fn evaluate(&self, doc: &Document) -> Option<KeyPoint> {
        if !self.gate.is_match(doc.lower()) {
            return None;
        }
        let mut detail = String::from(
            "A non-compete or non-solicitation clause is present — you may be restricted from working for competitors.",
        );
        if let Some(caps) = self.period.captures(doc.text())
            && let (Some(count), Some(unit)) = (caps.get(1), caps.get(2))
        {
            detail.push_str(&format!(
                " The restriction period appears to be {} {}(s).",
                count.as_str(),
                unit.as_str()
            ));
        }
        Some(NON_COMPETE.key_point(doc, &self.evidence, detail, true))
    }
}

const LOAN_DEFAULT: Heading = Heading {
    category: "Default & Consequences",
    icon: "💥",
    title: "Default Provisions",
};

pub struct LoanDefault {
    gate: PatternSet,
    evidence: PatternSet,
}

impl LoanDefault {
    pub fn new() -> Self {
        Self {
            gate: PatternSet::new(&["default", "acceleration", "foreclosure", "repossess"]),
            evidence: PatternSet::ignore_case(&[
                "default",
                "foreclosure",
                "repossess",
                "acceleration",
            ]),
        }
    }
}

impl Detector for LoanDefault {
    fn category(&self) -> &'static str {
        LOAN_DEFAULT.category
    }

    fn evaluate(&self, doc: &Document) -> Option<KeyPoint> {
        if !self.gate.is_match(doc.lower()) {
            return None;
        }
        let detail = "The document outlines consequences for default — this may include acceleration of full repayment, asset seizure, or foreclosure.";
        Some(LOAN_DEFAULT.key_point(doc, &self.evidence, detail.to_string(), true))
    }
}

const NETWORK_USAGE: Heading = Heading {
    category: "Network & Roaming",
    icon: "📡",
    title: "Data Limits & Roaming",
};

pub struct NetworkUsage {
    gate: PatternSet,
    throttling: PatternSet,
    roaming: PatternSet,
    evidence: PatternSet,
}

impl NetworkUsage {
    pub fn new() -> Self {
        Self {
            gate: PatternSet::new(&[
                "roaming",
                "data cap",
                "fair use",
                "throttl",
                "network management",
            ]),
            throttling: PatternSet::new(&["throttl", r"speed.*reduc"]),
            roaming: PatternSet::new(&["roaming"]),
            evidence: PatternSet::ignore_case(&["roaming", "throttl", "data cap"]),
        }
    }
}

impl Detector for NetworkUsage {
    fn category(&self) -> &'static str {
        NETWORK_USAGE.category
    }

    fn evaluate(&self, doc: &Document) -> Option<KeyPoint> {
        let lower = doc.lower();
        if !self.gate.is_match(lower) {
            return None;
        }

        let mut detail = String::from("Network usage policies are defined.");
        let mut watch_out = false;
        if self.throttling.is_match(lower) {
            detail =
                "Your data speeds may be throttled after exceeding a usage threshold.".to_string();
            watch_out = true;
        }
        if self.roaming.is_match(lower) {
            detail.push_str(" Roaming charges may apply outside your home network.");
            watch_out = true;
        }
        Some(NETWORK_USAGE.key_point(doc, &self.evidence, detail, watch_out))
    }
}

const SECURITY_DEPOSIT: Heading = Heading {
    category: "Security Deposit",
    icon: "🏦",
    title: "Security Deposit",
};

pub struct SecurityDeposit {
    gate: PatternSet,
    evidence: PatternSet,
}

impl SecurityDeposit {
    pub fn new() -> Self {
        Self {
            gate: PatternSet::new(&["security deposit", r"bond\b", r"damage.*deposit"]),
            evidence: PatternSet::ignore_case(&["security deposit", "bond", "deposit"]),
        }
    }
}

impl Detector for SecurityDeposit {
    fn category(&self) -> &'static str {
        SECURITY_DEPOSIT.category
    }

    fn evaluate(&self, doc: &Document) -> Option<KeyPoint> {
        if !self.gate.is_match(doc.lower()) {
            return None;
        }
        let detail = "A security deposit is required. Review the conditions under which it can be withheld or deducted.";
        Some(SECURITY_DEPOSIT.key_point(doc, &self.evidence, detail.to_string(), true))
    }
}

const SERVICE_LEVEL: Heading = Heading {
    category: "Service Level",
    icon: "📊",
    title: "Uptime & SLA Guarantee",
};

pub struct ServiceLevel {
    gate: PatternSet,
    uptime: Regex,
    credits_only: PatternSet,
    evidence: PatternSet,
}

impl ServiceLevel {
    pub fn new() -> Self {
        Self {
            gate: PatternSet::new(&[
                r"\bsla\b",
                "service level",
                "uptime",
                r"availability.*%",
                "downtime",
            ]),
            uptime: compile(r"(\d{2,3}(?:\.\d+)?)\s*%"),
            credits_only: PatternSet::new(&[
                "no credit",
                r"sole remedy.*credit",
                r"not liable.*downtime",
            ]),
            evidence: PatternSet::ignore_case(&["uptime", "service level", "downtime"]),
        }
    }
}

impl Detector for ServiceLevel {
    fn category(&self) -> &'static str {
        SERVICE_LEVEL.category
    }

    fn evaluate(&self, doc: &Document) -> Option<KeyPoint> {
        let lower = doc.lower();
        if !self.gate.is_match(lower) {
            return None;
        }

        let uptime = first_capture(&self.uptime, doc.text(), &[1])
            .map(|pct| format!("{pct}%"))
            .unwrap_or_else(|| "a defined".to_string());
        let watch_out = self.credits_only.is_match(lower);
        let mut detail = format!("An SLA guarantees {uptime} uptime.");
        if watch_out {
            detail.push_str(
                " However, compensation for downtime may be limited to service credits only.",
            );
        }
        Some(SERVICE_LEVEL.key_point(doc, &self.evidence, detail, watch_out))
    }
}

const AGE_RESTRICTION: Heading = Heading {
    category: "Age Restriction",
    icon: "🔞",
    title: "Age Requirement",
};

pub struct AgeRestriction {
    gate: PatternSet,
    minimum: Regex,
    evidence: PatternSet,
}

impl AgeRestriction {
    pub fn new() -> Self {
        Self {
            gate: PatternSet::new(&[
                r"(\d+)\s*years? of age",
                r"must be\s*\d+",
                r"age.*requirement",
                "minors?",
            ]),
            minimum: compile_ignore_case(r"(\d+)\s*years? of age|must be (\d+)"),
            evidence: PatternSet::ignore_case(&[r"years? of age", r"must be \d+", "minor"]),
        }
    }
}

impl Detector for AgeRestriction {
    fn category(&self) -> &'static str {
        AGE_RESTRICTION.category
    }

    fn evaluate(&self, doc: &Document) -> Option<KeyPoint> {
        if !self.gate.is_match(doc.lower()) {
            return None;
        }
        let age = first_capture(&self.minimum, doc.text(), &[1, 2]).unwrap_or("a minimum");
        let detail = format!(
            "Users must be at least {age} years old. Parental consent may be required for minors."
        );
        Some(AGE_RESTRICTION.key_point(doc, &self.evidence, detail, false))
    }
}

default_from_new!(
    NonCompete,
    LoanDefault,
    NetworkUsage,
    SecurityDeposit,
    ServiceLevel,
    AgeRestriction,
);

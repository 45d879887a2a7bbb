//! Money and contract-lifecycle detectors: payment, renewal, cancellation, refunds.

use clausewise_core::KeyPoint;
use regex::Regex;

use super::{Detector, Heading, default_from_new};
use crate::document::Document;
use crate::patterns::{PatternSet, compile_ignore_case};

const PAYMENT: Heading = Heading {
    category: "Payment & Billing",
    icon: "💳",
    title: "Payment Terms",
};

pub struct Payment {
    gate: PatternSet,
    automatic: PatternSet,
    price_change: PatternSet,
    late_fee: PatternSet,
    evidence: PatternSet,
}

impl Payment {
    pub fn new() -> Self {
        Self {
            gate: PatternSet::new(&["payment", "billing", "charge", "fee", "price"]),
            automatic: PatternSet::new(&[r"automat\w+ (charge|bill|renew)"]),
            price_change: PatternSet::new(&[r"price.*change", r"adjust.*price", r"modify.*fee"]),
            late_fee: PatternSet::new(&[r"late.*fee", r"penalty.*payment"]),
            evidence: PatternSet::ignore_case(&["payment", "billing", "charge", "fee"]),
        }
    }
}

impl Detector for Payment {
    fn category(&self) -> &'static str {
        PAYMENT.category
    }

    fn evaluate(&self, doc: &Document) -> Option<KeyPoint> {
        let lower = doc.lower();
        if !self.gate.is_match(lower) {
            return None;
        }

        let checks = [
            (&self.automatic, "Payments may be charged automatically."),
            (&self.price_change, "Prices can change — check for notice requirements."),
            (&self.late_fee, "Late payment fees or penalties may apply."),
        ];
        let parts: Vec<&str> = checks
            .iter()
            .filter(|(set, _)| set.is_match(lower))
            .map(|(_, msg)| *msg)
            .collect();

        let watch_out = !parts.is_empty();
        let detail = parts
            .first()
            .copied()
            .unwrap_or("Document includes payment or billing terms.");
        Some(PAYMENT.key_point(doc, &self.evidence, detail.to_string(), watch_out))
    }
}

const RENEWAL: Heading = Heading {
    category: "Auto-Renewal",
    icon: "🔄",
    title: "Automatic Renewal",
};

pub struct AutoRenewal {
    gate: PatternSet,
    evidence: PatternSet,
}

impl AutoRenewal {
    pub fn new() -> Self {
        Self {
            gate: PatternSet::new(&[r"auto.?renew", "automatically renew", r"renew.*subscription"]),
            evidence: PatternSet::ignore_case(&[r"auto.?renew", "automatically renew"]),
        }
    }
}

impl Detector for AutoRenewal {
    fn category(&self) -> &'static str {
        RENEWAL.category
    }

    fn evaluate(&self, doc: &Document) -> Option<KeyPoint> {
        if !self.gate.is_match(doc.lower()) {
            return None;
        }
        let detail =
            "Your subscription may renew automatically. Check how far in advance you must cancel.";
        Some(RENEWAL.key_point(doc, &self.evidence, detail.to_string(), true))
    }
}

const CANCELLATION: Heading = Heading {
    category: "Cancellation",
    icon: "❌",
    title: "Cancellation Policy",
};

pub struct Cancellation {
    gate: PatternSet,
    no_refund: PatternSet,
    any_time: PatternSet,
    notice: PatternSet,
    evidence: PatternSet,
}

impl Cancellation {
    pub fn new() -> Self {
        Self {
            gate: PatternSet::new(&["cancel", "terminat", r"end.*subscription"]),
            no_refund: PatternSet::new(&["no refund", r"non.refundable"]),
            any_time: PatternSet::new(&[r"cancel.*any time", "anytime"]),
            notice: PatternSet::new(&[r"notice.*cancel", r"cancel.*notice"]),
            evidence: PatternSet::ignore_case(&[r"cancel\w*", r"terminat\w*"]),
        }
    }
}

impl Detector for Cancellation {
    fn category(&self) -> &'static str {
        CANCELLATION.category
    }

    fn evaluate(&self, doc: &Document) -> Option<KeyPoint> {
        let lower = doc.lower();
        if !self.gate.is_match(lower) {
            return None;
        }

        let (detail, watch_out) = if self.no_refund.is_match(lower) {
            ("Cancellations may not entitle you to a refund.", true)
        } else if self.any_time.is_match(lower) {
            (
                "You can cancel at any time, but verify whether unused periods are refunded.",
                false,
            )
        } else if self.notice.is_match(lower) {
            ("A notice period may be required before cancellation takes effect.", true)
        } else {
            ("Cancellation terms are defined in this document.", false)
        };
        Some(CANCELLATION.key_point(doc, &self.evidence, detail.to_string(), watch_out))
    }
}

const REFUNDS: Heading = Heading {
    category: "Refunds",
    icon: "💰",
    title: "Refund Policy",
};

pub struct Refunds {
    gate: PatternSet,
    no_refunds: PatternSet,
    window: Regex,
    evidence: PatternSet,
}

impl Refunds {
    pub fn new() -> Self {
        Self {
            gate: PatternSet::new(&["refund", r"money.back", "chargeback"]),
            no_refunds: PatternSet::new(&["no refund", r"non.refundable", "all sales final"]),
            window: compile_ignore_case(r"(\d+).day"),
            evidence: PatternSet::ignore_case(&["refund", r"money.back"]),
        }
    }
}

impl Detector for Refunds {
    fn category(&self) -> &'static str {
        REFUNDS.category
    }

    fn evaluate(&self, doc: &Document) -> Option<KeyPoint> {
        let lower = doc.lower();
        if !self.gate.is_match(lower) {
            return None;
        }

        let (detail, watch_out) = if self.no_refunds.is_match(lower) {
            ("No refunds are available — all purchases are final.".to_string(), true)
        } else {
            let detail = match self.window.captures(doc.text()).and_then(|c| c.get(1)) {
                Some(days) => format!(
                    "A {}-day refund window is offered — verify the conditions.",
                    days.as_str()
                ),
                None => "Refund terms are addressed.".to_string(),
            };
            (detail, false)
        };
        Some(REFUNDS.key_point(doc, &self.evidence, detail, watch_out))
    }
}

default_from_new!(Payment, AutoRenewal, Cancellation, Refunds);

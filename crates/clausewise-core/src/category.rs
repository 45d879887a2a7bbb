//! Document categories and the canonical key-point category ordering.
//!
//! A document is classified into exactly one [`DocumentType`]. The wire
//! format carries the human-readable label (e.g. `"Lease / Rental Agreement"`),
//! so the serde names below are part of the stable contract.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the 20 fixed document classifications, or the general fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "Insurance Policy")]
    Insurance,
    #[serde(rename = "Loan / Credit Agreement")]
    LoanCredit,
    #[serde(rename = "Mortgage Agreement")]
    Mortgage,
    #[serde(rename = "Investment / Securities")]
    Investment,
    #[serde(rename = "Lease / Rental Agreement")]
    LeaseRental,
    #[serde(rename = "Employment Contract")]
    Employment,
    #[serde(rename = "SaaS / Software License")]
    SaasLicense,
    #[serde(rename = "Mobile App Terms")]
    MobileApp,
    #[serde(rename = "Cloud Services Agreement")]
    CloudServices,
    #[serde(rename = "Open Source License")]
    OpenSource,
    #[serde(rename = "E-Commerce / Shopping")]
    ECommerce,
    #[serde(rename = "Subscription Service")]
    Subscription,
    #[serde(rename = "Streaming / Media")]
    Streaming,
    #[serde(rename = "Travel & Hospitality")]
    Travel,
    #[serde(rename = "Telecommunications")]
    Telecom,
    #[serde(rename = "Healthcare / Medical")]
    Healthcare,
    #[serde(rename = "Financial Advisory")]
    FinancialAdvisory,
    #[serde(rename = "Privacy Policy")]
    PrivacyPolicy,
    #[serde(rename = "Social Media Platform")]
    SocialMedia,
    #[serde(rename = "Website Terms of Use")]
    WebsiteTerms,
    #[serde(rename = "General Terms & Conditions")]
    General,
}

impl DocumentType {
    /// The 20 classifiable categories in classification-table order.
    ///
    /// Ties in classification resolve to the earlier entry here.
    pub const CLASSIFIABLE: [DocumentType; 20] = [
        Self::Insurance,
        Self::LoanCredit,
        Self::Mortgage,
        Self::Investment,
        Self::LeaseRental,
        Self::Employment,
        Self::SaasLicense,
        Self::MobileApp,
        Self::CloudServices,
        Self::OpenSource,
        Self::ECommerce,
        Self::Subscription,
        Self::Streaming,
        Self::Travel,
        Self::Telecom,
        Self::Healthcare,
        Self::FinancialAdvisory,
        Self::PrivacyPolicy,
        Self::SocialMedia,
        Self::WebsiteTerms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insurance => "Insurance Policy",
            Self::LoanCredit => "Loan / Credit Agreement",
            Self::Mortgage => "Mortgage Agreement",
            Self::Investment => "Investment / Securities",
            Self::LeaseRental => "Lease / Rental Agreement",
            Self::Employment => "Employment Contract",
            Self::SaasLicense => "SaaS / Software License",
            Self::MobileApp => "Mobile App Terms",
            Self::CloudServices => "Cloud Services Agreement",
            Self::OpenSource => "Open Source License",
            Self::ECommerce => "E-Commerce / Shopping",
            Self::Subscription => "Subscription Service",
            Self::Streaming => "Streaming / Media",
            Self::Travel => "Travel & Hospitality",
            Self::Telecom => "Telecommunications",
            Self::Healthcare => "Healthcare / Medical",
            Self::FinancialAdvisory => "Financial Advisory",
            Self::PrivacyPolicy => "Privacy Policy",
            Self::SocialMedia => "Social Media Platform",
            Self::WebsiteTerms => "Website Terms of Use",
            Self::General => "General Terms & Conditions",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical row order for key-point categories in comparison matrices.
pub const MATRIX_CATEGORY_ORDER: &[&str] = &[
    "Privacy & Data",
    "Dispute Resolution",
    "Account Termination",
    "Auto-Renewal",
    "Cancellation",
    "Refunds",
    "Payment & Billing",
    "Liability",
    "Intellectual Property",
    "Terms Changes",
    "Cookies & Tracking",
    "Non-Compete",
    "Health Data",
    "Default & Consequences",
    "Security Deposit",
    "Network & Roaming",
    "Service Level",
    "Force Majeure",
    "Age Restriction",
    "Governing Law",
];

/// Position of a key-point category in [`MATRIX_CATEGORY_ORDER`].
///
/// Unlisted categories return `usize::MAX` so a stable sort keeps them last,
/// in the order they were first seen.
pub fn matrix_position(category: &str) -> usize {
    MATRIX_CATEGORY_ORDER
        .iter()
        .position(|c| *c == category)
        .unwrap_or(usize::MAX)
}

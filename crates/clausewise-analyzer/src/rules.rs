//! Versioned rule tables.
//!
//! These tables are data, not logic: the scorers in this crate compile them
//! once and evaluate them unchanged. Editing any pattern, weight, threshold or
//! message changes observable output and must bump [`RULES_VERSION`].
//!
//! Patterns are written in lower case. Presence checks run them against the
//! lower-cased document; evidence searches run them case-insensitively against
//! the original text.

use clausewise_core::{DocumentType, RiskLevel};

pub const RULES_VERSION: &str = "3.0";

// ── Classification ──

/// Per-category patterns; a category's score is its total match count.
pub const DOC_TYPE_RULES: &[(DocumentType, &[&str])] = &[
    (
        DocumentType::Insurance,
        &[
            r"insur\w+", r"premium", r"claim", r"policyholder", r"deductible", r"coverage",
            r"beneficiar", r"underwr", r"actuar",
        ],
    ),
    (
        DocumentType::LoanCredit,
        &[
            r"\bloan\b", r"borrow", r"\blender\b", r"\bprincipal\b", r"interest rate",
            r"repayment", r"\bdefault\b", r"collateral", r"credit\s+facilit",
        ],
    ),
    (
        DocumentType::Mortgage,
        &[
            r"mortgage", r"\bproperty\b", r"\bdeed\b", r"foreclosure", r"escrow", r"\blien\b",
            r"amortiz", r"real estate",
        ],
    ),
    (
        DocumentType::Investment,
        &[
            r"securities", r"invest\w+", r"portfolio", r"dividend", r"\bshare\b", r"\bfund\b",
            r"\bbroker\b", r"fiduciary", r"risk\s+disclosur",
        ],
    ),
    (
        DocumentType::LeaseRental,
        &[
            r"\blease\b", r"tenancy", r"landlord", r"\btenant\b", r"\brent\b", r"premises",
            r"eviction", r"security deposit", r"notice to vacate",
        ],
    ),
    (
        DocumentType::Employment,
        &[
            r"employ\w+", r"\bsalary\b", r"termination", r"non.compete", r"confidentialit",
            r"severance", r"probation\w+",
        ],
    ),
    (
        DocumentType::SaasLicense,
        &[
            r"software.as.a.service", r"\bsaas\b", r"license\s+grant", r"api\s+access",
            r"\bseat\b", r"end.user\s+licen",
        ],
    ),
    (
        DocumentType::MobileApp,
        &[
            r"mobile app", r"app store", r"google play", r"push notification",
            r"in.app purchase", r"device\s+permiss",
        ],
    ),
    (
        DocumentType::CloudServices,
        &[
            r"\bcloud\b", r"infrastructure", r"\buptime\b", r"\bsla\b", r"service level",
            r"data center", r"storage\s+capacit",
        ],
    ),
    (
        DocumentType::OpenSource,
        &[
            r"open.source", r"\bgnu\b", r"mit license", r"apache license", r"redistribute",
            r"copyleft", r"permissive",
        ],
    ),
    (
        DocumentType::ECommerce,
        &[
            r"shopping cart", r"refund policy", r"return policy", r"\bseller\b", r"\bbuyer\b",
            r"checkout", r"order confirmation",
        ],
    ),
    (
        DocumentType::Subscription,
        &[
            r"subscription", r"monthly plan", r"annual plan", r"free trial", r"\bupgrade\b",
            r"\bdowngrade\b", r"billing cycle",
        ],
    ),
    (
        DocumentType::Streaming,
        &[
            r"stream\w+", r"content library", r"\bwatch\b", r"episode", r"playlist",
            r"download.*offline", r"simultaneous stream",
        ],
    ),
    (
        DocumentType::Travel,
        &[
            r"booking", r"reservation", r"check.in", r"check.out", r"cancellation policy",
            r"\bhotel\b", r"\bflight\b", r"itinerary", r"passenger", r"travell?\w+",
        ],
    ),
    (
        DocumentType::Telecom,
        &[
            r"telecom", r"mobile plan", r"data plan", r"roaming", r"network\s+coverage",
            r"sim card", r"\bcarrier\b", r"broadband",
        ],
    ),
    (
        DocumentType::Healthcare,
        &[
            r"patient", r"healthcare", r"medical record", r"\bhipaa\b", r"treatment",
            r"physician", r"diagnos", r"health data", r"telehealth",
        ],
    ),
    (
        DocumentType::FinancialAdvisory,
        &[
            r"financial advice", r"\badvisor\b", r"wealth management", r"asset management",
            r"fee.based", r"\bcommission\b", r"suitability",
        ],
    ),
    (
        DocumentType::PrivacyPolicy,
        &[
            r"personal data", r"\bgdpr\b", r"data controller", r"\bcookie\b", r"data subject",
            r"\bccpa\b", r"right to erasure", r"data retention",
        ],
    ),
    (
        DocumentType::SocialMedia,
        &[
            r"\bpost\b", r"\bprofile\b", r"followers", r"content moderation",
            r"community guideline", r"\bhashtag\b", r"\bfeed\b",
        ],
    ),
    (
        DocumentType::WebsiteTerms,
        &[
            r"\bwebsite\b", r"\bsite\b", r"user account", r"terms of (use|service)",
            r"acceptable use", r"hyperlink", r"web content",
        ],
    ),
];

// ── Risk ──

/// Weighted risk patterns. Each contributes its weight once when present.
pub const RISK_PATTERNS: &[(u32, &str)] = &[
    (15, r"irrevocable"),
    (15, r"waive.*right"),
    (15, r"no refund"),
    (15, r"class action waiver"),
    (15, r"binding arbitration"),
    (14, r"sell.*personal (data|information)"),
    (12, r"at our sole discretion"),
    (12, r"without (prior )?notice"),
    (12, r"we may terminate.*at any time"),
    (12, r"unlimited liability"),
    (12, r"may share.*personal.*third"),
    (10, r"auto.?renew"),
    (10, r"may change.*terms.*without notice"),
    (10, r"unilateral(ly)?.*modif"),
    (15, r"foreclosure"),
    (12, r"cross.default"),
    (12, r"acceleration.*clause"),
    (12, r"wage.*garnish"),
    (10, r"non.compete"),
    (10, r"perpetual.*license"),
    (10, r"track.*location"),
    (10, r"monitor.*communication"),
    (7, r"limitation of liability"),
    (6, r"disclaimer of warranties"),
    (6, r"as.is"),
    (6, r"indemnif"),
    (5, r"governing law"),
    (5, r"dispute resolution"),
    (5, r"force majeure"),
    (4, r"intellectual property"),
    (3, r"cookies"),
    (3, r"aggregate.*data"),
];

pub const RISK_SCORE_CAP: u32 = 100;
pub const HIGH_RISK_THRESHOLD: u32 = 50;
pub const MEDIUM_RISK_THRESHOLD: u32 = 25;

/// Canned explanation for each risk tier.
pub fn risk_reason(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => {
            "Contains several aggressive clauses — liability waivers, arbitration requirements, or data-sharing terms."
        }
        RiskLevel::Medium => {
            "Has some notable clauses around liability, data use, or cancellation that deserve attention."
        }
        RiskLevel::Low => "Mostly standard terms with no particularly aggressive conditions detected.",
    }
}

// ── Red flags ──

pub struct RedFlagRule {
    pub trigger: &'static str,
    pub message: &'static str,
    pub evidence: &'static [&'static str],
}

pub const RED_FLAG_RULES: &[RedFlagRule] = &[
    RedFlagRule {
        trigger: r"sell.*personal (data|information)",
        message: "May sell your personal data to third parties.",
        evidence: &[r"sell.*personal", r"personal.*sold"],
    },
    RedFlagRule {
        trigger: r"share.*with.*third.part",
        message: "Your data may be shared with unspecified third parties.",
        evidence: &[r"share.*third", r"third.part.*receiv"],
    },
    RedFlagRule {
        trigger: r"track.*location",
        message: "Your location data may be tracked.",
        evidence: &[r"track.*location", r"location.*track"],
    },
    RedFlagRule {
        trigger: r"monitor.*communication",
        message: "Provider may monitor your private communications.",
        evidence: &[r"monitor.*communicat"],
    },
    RedFlagRule {
        trigger: r"class action waiver",
        message: "Waives your right to participate in class action lawsuits.",
        evidence: &[r"class action"],
    },
    RedFlagRule {
        trigger: r"binding arbitration",
        message: "Requires binding arbitration — limits your ability to sue.",
        evidence: &[r"binding arbitration", r"arbitrat"],
    },
    RedFlagRule {
        trigger: r"waive.*right",
        message: "Contains clauses where you waive important legal rights.",
        evidence: &[r"waive.*right", r"right.*waiv"],
    },
    RedFlagRule {
        trigger: r"irrevocable.*licen",
        message: "Grants an irrevocable license over your content.",
        evidence: &[r"irrevocable.*licen"],
    },
    RedFlagRule {
        trigger: r"perpetual.*licen.*royalty.free",
        message: "Grants unlimited, perpetual, royalty-free use of your content.",
        evidence: &[r"perpetual.*licen", r"royalty.free"],
    },
    RedFlagRule {
        trigger: r"no refund|non.refundable|all sales final",
        message: "No refunds under any circumstances.",
        evidence: &[r"no refund", r"non.refundable"],
    },
    RedFlagRule {
        trigger: r"accelerat.*repayment|full.*amount.*due",
        message: "Default may trigger immediate repayment of full balance.",
        evidence: &[r"accelerat", r"full.*amount.*due"],
    },
    RedFlagRule {
        trigger: r"wage.*garnish",
        message: "Wages may be garnished in case of default.",
        evidence: &[r"wage.*garnish"],
    },
    RedFlagRule {
        trigger: r"(modif|change|amend).*without.*notice",
        message: "Terms can be changed without notifying you.",
        evidence: &[r"without.*notice", r"change.*terms"],
    },
    RedFlagRule {
        trigger: r"terminat.*without (prior )?notice",
        message: "Account can be terminated without any notice.",
        evidence: &[r"terminat.*without.*notice"],
    },
    RedFlagRule {
        trigger: r"at our sole discretion",
        message: "Provider has unchecked discretion on key decisions.",
        evidence: &[r"sole discretion"],
    },
    RedFlagRule {
        trigger: r"unilateral.*modif",
        message: "Provider can unilaterally modify the agreement.",
        evidence: &[r"unilateral"],
    },
    RedFlagRule {
        trigger: r"not responsible.*any (loss|damage)",
        message: "Provider disclaims all responsibility for losses.",
        evidence: &[r"not responsible.*loss", r"not liable.*damage"],
    },
    RedFlagRule {
        trigger: r"indemnif.*attorney.*fees",
        message: "You may be liable for the provider's legal fees.",
        evidence: &[r"indemnif.*attorney", r"attorney.*fees"],
    },
    RedFlagRule {
        trigger: r"foreclosure",
        message: "Non-payment may result in foreclosure of your property.",
        evidence: &[r"foreclosure"],
    },
    RedFlagRule {
        trigger: r"non.compete.*(\d+)\s*year",
        message: "Non-compete clause restricts you for a multi-year period.",
        evidence: &[r"non.compete.*year"],
    },
    RedFlagRule {
        trigger: r"cross.default",
        message: "Default on one obligation may trigger default on all.",
        evidence: &[r"cross.default"],
    },
    RedFlagRule {
        trigger: r"repossess",
        message: "Assets may be repossessed in case of default.",
        evidence: &[r"repossess"],
    },
];

// ── Checklist ──

/// What a matching checklist rule contributes.
#[derive(Debug, Clone, Copy)]
pub enum ChecklistItem {
    Fixed(&'static str),
    /// Names the governing jurisdiction; skipped when none can be captured.
    Jurisdiction,
}

pub const CHECKLIST_RULES: &[(&[&str], ChecklistItem)] = &[
    (
        &[r"auto.?renew", r"automatically renew"],
        ChecklistItem::Fixed("Confirm the auto-renewal date and how to cancel before it triggers."),
    ),
    (
        &[r"binding arbitration"],
        ChecklistItem::Fixed(
            "Understand that by signing you likely give up your right to sue in court.",
        ),
    ),
    (
        &[r"personal data", r"data.*collect"],
        ChecklistItem::Fixed(
            "Review exactly what personal data is collected and who it is shared with.",
        ),
    ),
    (
        &[r"no refund", r"non.refundable"],
        ChecklistItem::Fixed("Note there are no refunds — be certain before committing."),
    ),
    (
        &[r"foreclosure", r"repossess", r"collateral"],
        ChecklistItem::Fixed(
            "Understand what assets are at risk if you default on your obligations.",
        ),
    ),
    (
        &[r"non.compete", r"non.solicit"],
        ChecklistItem::Fixed("Review the non-compete clause — it may restrict future employment."),
    ),
    (
        &[r"hipaa", r"health.*data", r"medical.*record"],
        ChecklistItem::Fixed(
            "Verify how your health data is stored, protected, and who can access it.",
        ),
    ),
    (
        &[r"roaming", r"data cap", r"throttl"],
        ChecklistItem::Fixed("Check data caps, throttling thresholds, and roaming charges carefully."),
    ),
    (&[r"governing law", r"jurisdiction"], ChecklistItem::Jurisdiction),
    (
        &[r"indemnif"],
        ChecklistItem::Fixed(
            "Understand the indemnification clause — you may be financially responsible for third-party claims.",
        ),
    ),
    (
        &[r"intellectual property", r"license.*content"],
        ChecklistItem::Fixed("Check what rights you grant to the platform over content you upload."),
    ),
];

pub const CHECKLIST_HIGH_RISK_ITEM: &str =
    "Given the high risk level, consider having a legal professional review this document.";

pub const CHECKLIST_FALLBACK_ITEMS: [&str; 2] = [
    "Read the full document carefully before agreeing.",
    "Check for any trial periods, fees, or commitments involved.",
];

pub const CHECKLIST_KEEP_COPY_ITEM: &str =
    "Keep a copy of this document for your records once signed.";

pub const CHECKLIST_MAX_ITEMS: usize = 7;

/// Case-sensitive capture of a governing jurisdiction ("laws of the State of ...").
pub const JURISDICTION_PATTERN: &str = r"laws? of (the )?([A-Z][a-z]+(?:\s[A-Z][a-z]+)?)";

// ── Summaries ──

/// Documents longer than this many words get the length caveat.
pub const LONG_DOCUMENT_WORDS: usize = 3000;

pub const LONG_DOCUMENT_CAVEAT: &str =
    " The document is comprehensive — take time to read key sections carefully.";

pub fn summary_template(doc_type: DocumentType) -> &'static str {
    match doc_type {
        DocumentType::Insurance => {
            "This is an insurance policy outlining coverage terms, exclusions, premiums, and claim procedures. It defines your rights as a policyholder and what events or losses are covered."
        }
        DocumentType::LoanCredit => {
            "This is a loan or credit agreement governing borrowed funds, repayment schedules, interest rates, and consequences of default."
        }
        DocumentType::Mortgage => {
            "This is a mortgage agreement securing a loan against real property. It covers repayment terms, interest, default consequences including foreclosure rights."
        }
        DocumentType::Investment => {
            "This is an investment or securities agreement covering risk disclosures, fees, fiduciary obligations, and the management of your assets or portfolio."
        }
        DocumentType::LeaseRental => {
            "This is a lease or rental agreement outlining tenancy terms, rent obligations, maintenance responsibilities, and conditions for eviction."
        }
        DocumentType::Employment => {
            "This is an employment agreement covering compensation, confidentiality, intellectual property, non-compete obligations, and termination conditions."
        }
        DocumentType::SaasLicense => {
            "This is a software or SaaS subscription agreement governing usage rights, billing, and the provider's ability to modify or terminate the service."
        }
        DocumentType::MobileApp => {
            "These are Terms of Service for a mobile application covering acceptable use, in-app purchases, data handling, and your rights as a user."
        }
        DocumentType::CloudServices => {
            "This is a cloud services agreement covering infrastructure access, uptime guarantees (SLAs), data ownership, and service availability."
        }
        DocumentType::OpenSource => {
            "This is an open-source license governing how the software can be used, modified, and redistributed."
        }
        DocumentType::ECommerce => {
            "This is an e-commerce agreement covering purchases, returns, refunds, and seller/buyer obligations on the platform."
        }
        DocumentType::Subscription => {
            "This is a subscription agreement governing recurring billing, plan features, upgrade/downgrade rights, and cancellation."
        }
        DocumentType::Streaming => {
            "This is a streaming or media service agreement covering content access, billing, simultaneous streams, and usage restrictions."
        }
        DocumentType::Travel => {
            "This is a travel or hospitality agreement covering bookings, cancellations, refunds, passenger obligations, and liability for travel disruptions."
        }
        DocumentType::Telecom => {
            "This is a telecommunications agreement covering your mobile or broadband plan, data limits, roaming charges, and network usage policies."
        }
        DocumentType::Healthcare => {
            "This is a healthcare or medical services agreement covering patient rights, data privacy (HIPAA), treatment consent, and billing."
        }
        DocumentType::FinancialAdvisory => {
            "This is a financial advisory agreement covering the scope of advice, fee structures, fiduciary duty, conflicts of interest, and liability."
        }
        DocumentType::PrivacyPolicy => {
            "This is a Privacy Policy describing what personal data is collected, how it is used, who it is shared with, and your rights regarding that data."
        }
        DocumentType::SocialMedia => {
            "These are Terms of Service for a social media platform covering content rights, community standards, data use, and account management."
        }
        DocumentType::WebsiteTerms => {
            "These are Website Terms of Use governing how you may access and interact with the site, including user accounts, content, and liability."
        }
        DocumentType::General => {
            "This is a general Terms & Conditions document outlining the rules, rights, and obligations between you and the provider."
        }
    }
}

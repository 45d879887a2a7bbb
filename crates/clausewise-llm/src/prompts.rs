//! Prompt templates sent to the model.
//!
//! Document text is cut to an excerpt before it is embedded so a long
//! contract cannot blow past the model's context window.

use clausewise_core::{AnalysisResult, ComparisonResult, MultiCompareResult, truncate_chars};

/// Characters of document text included in most prompts.
pub const EXCERPT_CHARS: usize = 6000;

/// Shorter excerpt for the one-line verdict.
pub const VERDICT_EXCERPT_CHARS: usize = 2000;

pub const SYSTEM_PROMPT: &str = "You are a plain-English legal analyst helping everyday people \
understand Terms & Conditions documents. Be concise, honest, and practical. Never use legal \
jargon without immediately explaining it. Respond ONLY with what is asked: no preamble, no sign-off.";

pub fn summary(text: &str, doc_type: &str) -> String {
    format!(
        "This is a {doc_type} document. In 3 to 4 sentences, explain in plain English what a \
person is agreeing to if they sign this. Write as if explaining to a friend.\n\n\
Document (excerpt):\n{}\n\nPlain English summary:",
        truncate_chars(text, EXCERPT_CHARS)
    )
}

pub fn verdict(text: &str, doc_type: &str, risk_level: &str, risk_score: u32) -> String {
    format!(
        "This is a {doc_type} with a {risk_level} risk score of {risk_score}/100.\n\n\
Write ONE sentence that gives an honest bottom-line verdict on whether a typical person \
should sign this, and why. Be direct. No hedging.\n\n\
Document (excerpt):\n{}\n\nVerdict:",
        truncate_chars(text, VERDICT_EXCERPT_CHARS)
    )
}

pub fn negotiation_tips(text: &str, doc_type: &str) -> String {
    format!(
        "This is a {doc_type} document.\n\n\
List 3 to 5 specific, practical things a person could ask to change or negotiate before \
signing. Be concrete and name the actual clause or term. Format as a numbered list, one tip \
per line.\n\nDocument (excerpt):\n{}\n\nNegotiation tips:",
        truncate_chars(text, EXCERPT_CHARS)
    )
}

pub fn concerns(text: &str, doc_type: &str) -> String {
    format!(
        "Read this {doc_type} carefully and identify up to 4 things that are unusual, \
one-sided, or potentially harmful to the person signing.\n\n\
Only flag things that actually appear in the text. If it is a fair document, say so.\n\
Format as a numbered list, one concern per line.\n\nDocument (excerpt):\n{}\n\nConcerns:",
        truncate_chars(text, EXCERPT_CHARS)
    )
}

pub fn questions(text: &str, doc_type: &str) -> String {
    format!(
        "This is a {doc_type}. What are 3 to 4 specific questions a person should ask the \
other party before signing?\n\n\
These should be questions whose answers would genuinely change whether they sign.\n\
Format as a numbered list, one question per line.\n\nDocument (excerpt):\n{}\n\nQuestions to ask:",
        truncate_chars(text, EXCERPT_CHARS)
    )
}

/// Ask for a JSON verdict on a pairwise comparison.
///
/// Only the computed findings are sent, not the documents themselves.
pub fn comparison_opinion(result: &ComparisonResult) -> String {
    let describe = |name: &str, score: f64, a: &AnalysisResult| {
        let flags: Vec<&str> = a.red_flags.iter().map(|f| f.message.as_str()).collect();
        format!(
            "- {name}: {} with {} risk ({}/100), composite score {score:.1}, red flags: {}",
            a.document_type,
            a.risk_level,
            a.risk_score,
            if flags.is_empty() { "none".to_string() } else { flags.join("; ") }
        )
    };
    format!(
        "Two documents were compared clause by clause.\n\n{}\n{}\n\n\
Automated summary: {}\n\n\
Which document is fairer to the person signing? Reply ONLY with a JSON object of the form \
{{\"better\": \"<document name>\", \"reason\": \"<one or two plain-English sentences>\"}}.",
        describe(&result.left_name, result.left_score, &result.left),
        describe(&result.right_name, result.right_score, &result.right),
        result.summary
    )
}

/// Ask the model to pick one document from a ranked set.
pub fn multi_compare_pick(result: &MultiCompareResult) -> String {
    let lines: Vec<String> = result
        .rankings
        .iter()
        .map(|r| {
            format!(
                "{}. {} ({} risk, {}/100): {}",
                r.rank, r.name, r.result.risk_level, r.result.risk_score, r.result.document_summary
            )
        })
        .collect();
    format!(
        "These documents were ranked from safest to riskiest:\n\n{}\n\n\
Which ONE would you recommend a typical person sign, and why? Answer in 2 to 3 plain-English \
sentences and name the document.\n\nRecommendation:",
        lines.join("\n")
    )
}

//! Analysis and comparison value types.
//!
//! Every type here is built once, fully populated, and not mutated afterwards.
//! Field names are the wire format: [`WireFormat`] converts any of them to and
//! from a plain `serde_json::Value` tree without loss, and callers rely on
//! those names for caching and transport.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::category::DocumentType;
use crate::error::CoreError;
use crate::text::truncate_chars;

/// Maximum characters of key-point detail shown in a matrix cell.
pub const CELL_DETAIL_CHARS: usize = 120;

/// Detail text for a category a document does not mention.
pub const NOT_MENTIONED: &str = "Not mentioned";

// ── Wire format ──

/// Lossless conversion to and from the plain key-value wire form.
pub trait WireFormat: Serialize + DeserializeOwned + Sized {
    fn to_value(&self) -> Result<serde_json::Value, CoreError> {
        serde_json::to_value(self).map_err(CoreError::Serialization)
    }

    fn from_value(value: serde_json::Value) -> Result<Self, CoreError> {
        serde_json::from_value(value).map_err(CoreError::Deserialization)
    }

    fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(self).map_err(CoreError::Serialization)
    }

    fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(CoreError::Deserialization)
    }
}

// ── Single-document analysis ──

/// Readability metrics; numeric fields are rounded to one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScore {
    /// Flesch Reading Ease, 0–100 (higher = easier).
    pub flesch_ease: f64,
    /// Flesch-Kincaid US grade level, never negative.
    pub flesch_grade: f64,
    pub gunning_fog: f64,
    /// Words per sentence.
    pub avg_sentence_len: f64,
    /// Characters per word.
    pub avg_word_len: f64,
    /// Percentage of words with three or more syllables.
    pub complex_word_pct: f64,
    pub grade_label: String,
    pub ease_label: String,
}

/// An evidence-backed observation about one topical concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyPoint {
    pub category: String,
    pub icon: String,
    pub title: String,
    pub detail: String,
    /// True when the finding deserves the reader's attention.
    pub watch_out: bool,
    /// Zero to two verbatim sentences from the document.
    pub evidence: Vec<String>,
}

/// A warning about an aggressive or one-sided clause.
///
/// The message doubles as the deduplication key within one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedFlag {
    pub message: String,
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete analysis of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub document_type: DocumentType,
    pub document_summary: String,
    pub risk_level: RiskLevel,
    pub risk_reason: String,
    /// Capped weighted sum, always within 0..=100.
    pub risk_score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readability: Option<ReadabilityScore>,
    /// In detector evaluation order.
    pub key_points: Vec<KeyPoint>,
    pub red_flags: Vec<RedFlag>,
    /// "Before you sign" checklist, at most seven items.
    pub before_signing: Vec<String>,
    pub word_count: usize,
    pub char_count: usize,
}

impl AnalysisResult {
    /// Number of key points flagged `watch_out`.
    pub fn watch_count(&self) -> usize {
        self.key_points.iter().filter(|kp| kp.watch_out).count()
    }

    /// The first key point in `category`, if any.
    pub fn key_point(&self, category: &str) -> Option<&KeyPoint> {
        self.key_points.iter().find(|kp| kp.category == category)
    }
}

impl WireFormat for AnalysisResult {}

// ── Matrix cells ──

/// Visual state of a [`MatrixCell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Good,
    Warn,
    Missing,
}

impl CellState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warn => "warn",
            Self::Missing => "missing",
        }
    }
}

/// One document's standing in one key-point category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixCell {
    pub present: bool,
    pub watch_out: bool,
    pub detail: String,
}

impl MatrixCell {
    pub fn from_key_point(kp: &KeyPoint) -> Self {
        Self {
            present: true,
            watch_out: kp.watch_out,
            detail: truncate_chars(&kp.detail, CELL_DETAIL_CHARS).to_string(),
        }
    }

    pub fn missing() -> Self {
        Self {
            present: false,
            watch_out: false,
            detail: NOT_MENTIONED.to_string(),
        }
    }

    /// Cell for `category` in `result`, missing when no key point covers it.
    pub fn for_category(result: &AnalysisResult, category: &str) -> Self {
        result
            .key_point(category)
            .map(Self::from_key_point)
            .unwrap_or_else(Self::missing)
    }

    pub fn state(&self) -> CellState {
        if !self.present {
            CellState::Missing
        } else if self.watch_out {
            CellState::Warn
        } else {
            CellState::Good
        }
    }
}

// ── Multi-document ranking ──

/// A document's place in the ranked leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocRanking {
    /// 1 = safest.
    pub rank: usize,
    pub name: String,
    pub result: AnalysisResult,
    /// Composite score, lower = safer, rounded to one decimal.
    pub total_score: f64,
    pub watch_count: usize,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// One key-point category across every ranked document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub category: String,
    pub icon: String,
    /// One cell per document, in rank order.
    pub cells: Vec<MatrixCell>,
}

/// Language-model commentary attached to a ranking after it is computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Enhancement {
    #[serde(rename = "llm_pick")]
    pub pick: String,
    #[serde(rename = "llm_model")]
    pub model: String,
    #[serde(rename = "llm_enhanced")]
    pub enhanced: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiCompareResult {
    /// Document names in rank order.
    pub doc_names: Vec<String>,
    pub rankings: Vec<DocRanking>,
    pub matrix: Vec<CategoryRow>,
    pub winner_name: String,
    pub winner_reason: String,
    pub recommendation: String,
    #[serde(flatten)]
    pub enhancement: Enhancement,
}

impl MultiCompareResult {
    /// Return a copy carrying `enhancement`; ranking fields are untouched.
    pub fn with_enhancement(self, enhancement: Enhancement) -> Self {
        Self {
            enhancement,
            ..self
        }
    }
}

impl WireFormat for MultiCompareResult {}

// ── Pairwise comparison ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Neither,
}

/// One key-point category compared across two documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryComparison {
    pub category: String,
    pub icon: String,
    pub left: MatrixCell,
    pub right: MatrixCell,
    pub winner: Side,
}

/// Language-model opinion attached to a pairwise comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonEnhancement {
    #[serde(rename = "llm_opinion")]
    pub opinion: String,
    #[serde(rename = "llm_model")]
    pub model: String,
    #[serde(rename = "llm_enhanced")]
    pub enhanced: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub left_name: String,
    pub right_name: String,
    pub left: AnalysisResult,
    pub right: AnalysisResult,
    pub left_score: f64,
    pub right_score: f64,
    pub overall_winner: Side,
    pub categories: Vec<CategoryComparison>,
    pub left_only_flags: Vec<String>,
    pub right_only_flags: Vec<String>,
    pub shared_flags: Vec<String>,
    pub summary: String,
    #[serde(flatten)]
    pub enhancement: ComparisonEnhancement,
}

impl ComparisonResult {
    /// Name of the winning document, if either side won.
    pub fn winner_name(&self) -> Option<&str> {
        match self.overall_winner {
            Side::Left => Some(&self.left_name),
            Side::Right => Some(&self.right_name),
            Side::Neither => None,
        }
    }

    /// Return a copy carrying `enhancement`; comparison fields are untouched.
    pub fn with_enhancement(self, enhancement: ComparisonEnhancement) -> Self {
        Self {
            enhancement,
            ..self
        }
    }
}

impl WireFormat for ComparisonResult {}

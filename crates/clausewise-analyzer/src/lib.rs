//! Rule-based analysis of legal documents.
//!
//! [`Analyzer`] turns raw text into an [`AnalysisResult`](clausewise_core::AnalysisResult):
//! document type, weighted risk, readability, per-category key points with
//! evidence, red flags and a pre-signing checklist. [`compare`] and
//! [`multi_compare`] build side-by-side and ranked views on top of those
//! results. Everything here is pure, deterministic and offline.

mod analyzer;
pub mod checklist;
pub mod classifier;
mod compare;
pub mod detectors;
mod document;
pub mod evidence;
mod patterns;
mod rank;
pub mod readability;
pub mod red_flags;
pub mod risk;
pub mod rules;
mod summary;

pub use analyzer::{Analyzer, analyze};
pub use compare::compare;
pub use detectors::Detector;
pub use document::Document;
pub use patterns::PatternSet;
pub use rank::{composite_score, multi_compare};
pub use rules::RULES_VERSION;
pub use summary::summarize;

//! Core types, document categories, text normalisation, and the wire format for Clausewise.

pub mod category;
pub mod error;
pub mod model;
pub mod text;

pub use category::{DocumentType, MATRIX_CATEGORY_ORDER, matrix_position};
pub use error::CoreError;
pub use model::{
    AnalysisResult, CategoryComparison, CategoryRow, CellState, ComparisonEnhancement,
    ComparisonResult, DocRanking, Enhancement, KeyPoint, MatrixCell, MultiCompareResult,
    ReadabilityScore, RedFlag, RiskLevel, Side, WireFormat,
};
pub use text::{normalize, split_sentences, truncate_chars};

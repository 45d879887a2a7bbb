//! Side-by-side comparison of exactly two documents.

use clausewise_core::{
    AnalysisResult, CategoryComparison, CellState, ComparisonEnhancement, ComparisonResult,
    MatrixCell, Side,
};
use tracing::debug;

use crate::rank::{composite_score, ordered_categories};
use crate::readability::round1;

/// Compare two analyses.
///
/// The lower composite score wins overall; each shared category is won by
/// the side whose clause is favourable, then absent, then concerning.
pub fn compare(
    left: &AnalysisResult,
    right: &AnalysisResult,
    left_name: &str,
    right_name: &str,
) -> ComparisonResult {
    let left_score = composite_score(left);
    let right_score = composite_score(right);
    let overall_winner = lower_wins(left_score, right_score);

    let categories: Vec<CategoryComparison> = ordered_categories([left, right])
        .into_iter()
        .map(|(category, icon)| {
            let l = MatrixCell::for_category(left, &category);
            let r = MatrixCell::for_category(right, &category);
            let winner = lower_wins(cell_rank(&l), cell_rank(&r));
            CategoryComparison {
                category,
                icon,
                left: l,
                right: r,
                winner,
            }
        })
        .collect();

    let (left_only_flags, right_only_flags, shared_flags) = partition_flags(left, right);

    let summary = summarize(
        left_name,
        right_name,
        round1(left_score),
        round1(right_score),
        overall_winner,
    );

    debug!(
        left = left_name,
        right = right_name,
        winner = ?overall_winner,
        categories = categories.len(),
        "compared documents"
    );

    ComparisonResult {
        left_name: left_name.to_string(),
        right_name: right_name.to_string(),
        left: left.clone(),
        right: right.clone(),
        left_score: round1(left_score),
        right_score: round1(right_score),
        overall_winner,
        categories,
        left_only_flags,
        right_only_flags,
        shared_flags,
        summary,
        enhancement: ComparisonEnhancement::default(),
    }
}

fn lower_wins<T: PartialOrd>(left: T, right: T) -> Side {
    if left < right {
        Side::Left
    } else if right < left {
        Side::Right
    } else {
        Side::Neither
    }
}

/// Lower is better.
fn cell_rank(cell: &MatrixCell) -> u8 {
    match cell.state() {
        CellState::Good => 0,
        CellState::Missing => 1,
        CellState::Warn => 2,
    }
}

/// (left only, right only, shared) red-flag messages, each in document order.
fn partition_flags(
    left: &AnalysisResult,
    right: &AnalysisResult,
) -> (Vec<String>, Vec<String>, Vec<String>) {
    let has = |result: &AnalysisResult, message: &str| {
        result.red_flags.iter().any(|f| f.message == message)
    };

    let mut left_only = Vec::new();
    let mut shared = Vec::new();
    for flag in &left.red_flags {
        if has(right, &flag.message) {
            shared.push(flag.message.clone());
        } else {
            left_only.push(flag.message.clone());
        }
    }
    let right_only = right
        .red_flags
        .iter()
        .filter(|f| !has(left, &f.message))
        .map(|f| f.message.clone())
        .collect();

    (left_only, right_only, shared)
}

fn summarize(
    left_name: &str,
    right_name: &str,
    left_score: f64,
    right_score: f64,
    winner: Side,
) -> String {
    match winner {
        Side::Left => format!(
            "{left_name} comes out ahead with a composite risk score of {left_score:.1} versus {right_score:.1} for {right_name}."
        ),
        Side::Right => format!(
            "{right_name} comes out ahead with a composite risk score of {right_score:.1} versus {left_score:.1} for {left_name}."
        ),
        Side::Neither => format!(
            "{left_name} and {right_name} are evenly matched with a composite risk score of {left_score:.1} each."
        ),
    }
}

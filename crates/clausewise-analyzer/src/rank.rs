//! Multi-document ranking.
//!
//! Documents are ordered by a composite score (lower = safer), described
//! relative to their peers, laid out in a category matrix and summarised in
//! a recommendation that names the safest and riskiest choices.

use clausewise_core::{
    AnalysisResult, CategoryRow, CoreError, DocRanking, Enhancement, MatrixCell,
    MultiCompareResult, matrix_position,
};
use tracing::debug;

use crate::readability::round1;

/// Fewest documents that can be ranked.
pub const MIN_DOCUMENTS: usize = 2;

const RISK_WEIGHT: f64 = 0.5;
const RED_FLAG_WEIGHT: f64 = 0.3;
const WATCH_WEIGHT: f64 = 0.2;
const RED_FLAG_POINTS: usize = 4;
const WATCH_POINTS: usize = 3;

/// Distance from the peer mean that counts as notably low or high risk.
const RISK_MARGIN: f64 = 10.0;
const MAX_TRAITS: usize = 3;
const NO_STRENGTHS: &str = "No particular strengths identified";

/// Composite gap under which the runner-up is called a close second.
const CLOSE_SECOND_GAP: f64 = 5.0;

/// Lower is safer: half risk score, plus weighted red-flag and watch-out counts.
pub fn composite_score(result: &AnalysisResult) -> f64 {
    result.risk_score as f64 * RISK_WEIGHT
        + (result.red_flags.len() * RED_FLAG_POINTS) as f64 * RED_FLAG_WEIGHT
        + (result.watch_count() * WATCH_POINTS) as f64 * WATCH_WEIGHT
}

/// Rank two or more named analyses against each other.
///
/// Ties keep input order. Callers enforce any upper bound on `documents`.
pub fn multi_compare(
    documents: &[(String, AnalysisResult)],
) -> Result<MultiCompareResult, CoreError> {
    if documents.len() < MIN_DOCUMENTS {
        return Err(CoreError::InsufficientInput {
            required: MIN_DOCUMENTS,
            supplied: documents.len(),
        });
    }

    let mut scored: Vec<(&String, &AnalysisResult, f64)> = documents
        .iter()
        .map(|(name, result)| (name, result, composite_score(result)))
        .collect();
    scored.sort_by(|a, b| a.2.total_cmp(&b.2));

    let peers = PeerStats::new(documents.iter().map(|(_, r)| r));
    let rankings: Vec<DocRanking> = scored
        .iter()
        .enumerate()
        .map(|(i, (name, result, score))| DocRanking {
            rank: i + 1,
            name: (*name).clone(),
            result: (*result).clone(),
            total_score: round1(*score),
            watch_count: result.watch_count(),
            strengths: strengths(result, &peers),
            weaknesses: weaknesses(result, &peers),
        })
        .collect();

    let ranked: Vec<&AnalysisResult> = rankings.iter().map(|r| &r.result).collect();
    let matrix = build_matrix(&ranked);
    let (winner_reason, recommendation) = recommend(&rankings);

    debug!(
        documents = rankings.len(),
        winner = %rankings[0].name,
        categories = matrix.len(),
        "ranked documents"
    );

    Ok(MultiCompareResult {
        doc_names: rankings.iter().map(|r| r.name.clone()).collect(),
        winner_name: rankings[0].name.clone(),
        rankings,
        matrix,
        winner_reason,
        recommendation,
        enhancement: Enhancement::default(),
    })
}

// ── Peer-relative traits ──

struct PeerStats {
    mean_risk: f64,
    mean_flags: f64,
}

impl PeerStats {
    fn new<'a>(results: impl Iterator<Item = &'a AnalysisResult>) -> Self {
        let (mut n, mut risk, mut flags) = (0usize, 0u64, 0usize);
        for r in results {
            n += 1;
            risk += u64::from(r.risk_score);
            flags += r.red_flags.len();
        }
        let n = n.max(1) as f64;
        Self {
            mean_risk: risk as f64 / n,
            mean_flags: flags as f64 / n,
        }
    }
}

fn join_categories<'a>(points: impl Iterator<Item = &'a str>) -> String {
    points.take(MAX_TRAITS).collect::<Vec<_>>().join(", ")
}

fn strengths(result: &AnalysisResult, peers: &PeerStats) -> Vec<String> {
    let mut items = Vec::new();

    if (result.risk_score as f64) < peers.mean_risk - RISK_MARGIN {
        items.push(format!(
            "Risk score ({}/100) is well below average",
            result.risk_score
        ));
    }
    if (result.red_flags.len() as f64) < peers.mean_flags {
        items.push("Fewer red flags than most alternatives".to_string());
    }
    let mut favourable = result
        .key_points
        .iter()
        .filter(|kp| !kp.watch_out)
        .map(|kp| kp.category.as_str())
        .peekable();
    if favourable.peek().is_some() {
        items.push(format!("Favourable terms on: {}", join_categories(favourable)));
    }
    if result.readability.as_ref().is_some_and(|r| r.flesch_ease >= 50.0) {
        items.push("Written in relatively plain language".to_string());
    }

    if items.is_empty() {
        return vec![NO_STRENGTHS.to_string()];
    }
    items.truncate(MAX_TRAITS);
    items
}

fn weaknesses(result: &AnalysisResult, peers: &PeerStats) -> Vec<String> {
    let mut items = Vec::new();

    if (result.risk_score as f64) > peers.mean_risk + RISK_MARGIN {
        items.push(format!("Risk score ({}/100) is above average", result.risk_score));
    }
    if !result.red_flags.is_empty() {
        items.push(format!("{} red flag(s) detected", result.red_flags.len()));
    }
    let mut concerning = result
        .key_points
        .iter()
        .filter(|kp| kp.watch_out)
        .map(|kp| kp.category.as_str())
        .peekable();
    if concerning.peek().is_some() {
        items.push(format!("Concerning clauses: {}", join_categories(concerning)));
    }
    if result.readability.as_ref().is_some_and(|r| r.flesch_ease < 35.0) {
        items.push("Complex, hard-to-follow language".to_string());
    }

    items.truncate(MAX_TRAITS);
    items
}

// ── Category matrix ──

/// Union of key-point categories across `results` with the first icon seen,
/// in canonical matrix order; unlisted categories follow in first-seen order.
pub(crate) fn ordered_categories<'a>(
    results: impl IntoIterator<Item = &'a AnalysisResult>,
) -> Vec<(String, String)> {
    let mut categories: Vec<(String, String)> = Vec::new();
    for result in results {
        for kp in &result.key_points {
            if !categories.iter().any(|(c, _)| *c == kp.category) {
                categories.push((kp.category.clone(), kp.icon.clone()));
            }
        }
    }
    categories.sort_by_key(|(c, _)| matrix_position(c));
    categories
}

fn build_matrix(ranked: &[&AnalysisResult]) -> Vec<CategoryRow> {
    ordered_categories(ranked.iter().copied())
        .into_iter()
        .map(|(category, icon)| {
            let cells = ranked
                .iter()
                .map(|result| MatrixCell::for_category(result, &category))
                .collect();
            CategoryRow {
                category,
                icon,
                cells,
            }
        })
        .collect()
}

// ── Narrative ──

fn margin_word(best: &AnalysisResult, worst: &AnalysisResult) -> &'static str {
    let gap = i64::from(worst.risk_score) - i64::from(best.risk_score);
    if gap >= 30 {
        "significantly"
    } else if gap >= 15 {
        "meaningfully"
    } else {
        "slightly"
    }
}

/// Winner reason and recommendation for rankings sorted best-first.
fn recommend(rankings: &[DocRanking]) -> (String, String) {
    let n = rankings.len();
    let (Some(best), Some(worst)) = (rankings.first(), rankings.last()) else {
        return (String::new(), String::new());
    };

    let mut reasons = Vec::new();
    if best.result.risk_score < 30 {
        reasons.push(format!("low risk score of {}/100", best.result.risk_score));
    }
    if best.result.red_flags.is_empty() {
        reasons.push("no red flags".to_string());
    } else if best.result.red_flags.len() < worst.result.red_flags.len() {
        reasons.push(format!("fewest red flags ({})", best.result.red_flags.len()));
    }
    if best.watch_count == 0 {
        reasons.push("no concerning clauses".to_string());
    }
    let winner_reason = if reasons.is_empty() {
        format!("Ranked #1 with the lowest composite risk score among all {n} documents.")
    } else {
        format!("Ranked #1 due to its {}.", reasons.join(", "))
    };

    let mut rec = format!(
        "Based on the analysis of {n} documents, {} is {} the safest choice. ",
        best.name,
        margin_word(&best.result, &worst.result)
    );
    if let Some(first) = best.strengths.first() {
        rec.push_str(&format!("It stands out for: {}. ", first.to_lowercase()));
    }
    if n > 2
        && let Some(second) = rankings.get(1)
        && second.total_score - best.total_score < CLOSE_SECOND_GAP
    {
        rec.push_str(&format!(
            "{} is a close second and also a reasonable option. ",
            second.name
        ));
    }
    if !worst.result.red_flags.is_empty() {
        rec.push_str(&format!(
            "Avoid {} if possible — it carries {} red flag(s) and scored {}/100 on risk.",
            worst.name,
            worst.result.red_flags.len(),
            worst.result.risk_score
        ));
    }

    (winner_reason, rec)
}

#[cfg(test)]
mod tests {
    use clausewise_core::{DocumentType, KeyPoint, RedFlag, RiskLevel};

    use super::*;

    fn kp(category: &str, watch_out: bool) -> KeyPoint {
        KeyPoint {
            category: category.into(),
            icon: "•".into(),
            title: category.into(),
            detail: format!("{category} detail"),
            watch_out,
            evidence: vec![],
        }
    }

    fn flag(message: &str) -> RedFlag {
        RedFlag {
            message: message.into(),
            evidence: vec![],
        }
    }

    fn result(risk_score: u32, flags: usize, key_points: Vec<KeyPoint>) -> AnalysisResult {
        AnalysisResult {
            document_type: DocumentType::General,
            document_summary: String::new(),
            risk_level: crate::risk::level_for(risk_score),
            risk_reason: String::new(),
            risk_score,
            readability: None,
            key_points,
            red_flags: (0..flags).map(|i| flag(&format!("flag {i}"))).collect(),
            before_signing: vec![],
            word_count: 100,
            char_count: 600,
        }
    }

    fn named(name: &str, r: AnalysisResult) -> (String, AnalysisResult) {
        (name.to_string(), r)
    }

    #[test]
    fn composite_weights() {
        let r = result(40, 2, vec![kp("Refunds", true), kp("Liability", false)]);
        // 40*0.5 + 8*0.3 + 3*0.2
        assert!((composite_score(&r) - 23.0).abs() < 1e-9);
    }

    #[test]
    fn total_score_is_rounded_after_sorting() {
        // 5*0.5 + 4*0.3 = 3.7000000000000002 before rounding
        let out = multi_compare(&[
            named("A", result(5, 1, vec![])),
            named("B", result(60, 0, vec![])),
        ])
        .unwrap();
        assert_eq!(out.rankings[0].total_score, 3.7);
        assert_eq!(out.rankings[1].total_score, 30.0);
    }

    #[test]
    fn single_document_is_insufficient() {
        let err = multi_compare(&[named("A", result(10, 0, vec![]))]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientInput {
                required: 2,
                supplied: 1
            }
        ));
    }

    #[test]
    fn ranks_ascending_and_ties_keep_input_order() {
        let docs = vec![
            named("Risky", result(60, 3, vec![])),
            named("First tie", result(10, 0, vec![])),
            named("Second tie", result(10, 0, vec![])),
        ];
        let out = multi_compare(&docs).unwrap();
        assert_eq!(out.doc_names, vec!["First tie", "Second tie", "Risky"]);
        assert_eq!(out.rankings[0].rank, 1);
        assert_eq!(out.rankings[2].rank, 3);
        assert_eq!(out.winner_name, "First tie");
        assert_eq!(out.rankings[2].total_score, 33.6);
    }

    #[test]
    fn matrix_rows_follow_canonical_order_and_rank_columns() {
        let docs = vec![
            named("B", result(40, 1, vec![kp("Governing Law", false), kp("Refunds", true)])),
            named("A", result(5, 0, vec![kp("Privacy & Data", false), kp("Custom", false)])),
        ];
        let out = multi_compare(&docs).unwrap();
        let rows: Vec<&str> = out.matrix.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(rows, vec!["Privacy & Data", "Refunds", "Governing Law", "Custom"]);

        // Columns are in rank order: A first.
        let privacy = &out.matrix[0];
        assert!(privacy.cells[0].present);
        assert!(!privacy.cells[1].present);
        assert_eq!(privacy.cells[1].detail, "Not mentioned");
        assert!(out.matrix.iter().all(|row| row.cells.len() == 2));
    }

    #[test]
    fn strengths_and_weaknesses_relative_to_peers() {
        let docs = vec![
            named("Safe", result(5, 0, vec![kp("Refunds", false)])),
            named("Risky", result(70, 4, vec![kp("Liability", true), kp("Refunds", true)])),
        ];
        let out = multi_compare(&docs).unwrap();
        let safe = &out.rankings[0];
        assert_eq!(
            safe.strengths,
            vec![
                "Risk score (5/100) is well below average",
                "Fewer red flags than most alternatives",
                "Favourable terms on: Refunds",
            ]
        );
        assert!(safe.weaknesses.is_empty());

        let risky = &out.rankings[1];
        assert_eq!(risky.strengths, vec![NO_STRENGTHS]);
        assert_eq!(
            risky.weaknesses,
            vec![
                "Risk score (70/100) is above average",
                "4 red flag(s) detected",
                "Concerning clauses: Liability, Refunds",
            ]
        );
    }

    #[test]
    fn narrative_names_winner_and_worst() {
        let docs = vec![
            named("Gym", result(70, 2, vec![kp("Liability", true)])),
            named("Library", result(5, 0, vec![])),
        ];
        let out = multi_compare(&docs).unwrap();
        assert_eq!(
            out.winner_reason,
            "Ranked #1 due to its low risk score of 5/100, no red flags, no concerning clauses."
        );
        assert_eq!(
            out.recommendation,
            "Based on the analysis of 2 documents, Library is significantly the safest choice. \
             It stands out for: risk score (5/100) is well below average. \
             Avoid Gym if possible — it carries 2 red flag(s) and scored 70/100 on risk."
        );
        assert_eq!(out.rankings[1].result.risk_level, RiskLevel::High);
    }

    #[test]
    fn close_second_only_with_three_or_more() {
        let docs = vec![
            named("A", result(20, 0, vec![])),
            named("B", result(22, 0, vec![])),
            named("C", result(60, 1, vec![])),
        ];
        let out = multi_compare(&docs).unwrap();
        assert!(out.recommendation.contains("B is a close second"));

        let pair = vec![named("A", result(20, 0, vec![])), named("B", result(22, 0, vec![]))];
        let out = multi_compare(&pair).unwrap();
        assert!(!out.recommendation.contains("close second"));
    }

    #[test]
    fn fallback_winner_reason() {
        let docs = vec![
            named("A", result(40, 2, vec![kp("Refunds", true)])),
            named("B", result(45, 2, vec![kp("Refunds", true)])),
        ];
        let out = multi_compare(&docs).unwrap();
        assert_eq!(
            out.winner_reason,
            "Ranked #1 with the lowest composite risk score among all 2 documents."
        );
        assert!(out.recommendation.contains("A is slightly the safest choice"));
    }
}

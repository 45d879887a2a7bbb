//! Vertical card display for analyses, comparisons and rankings.
//!
//! Each card is a header followed by titled sections of `label  value`
//! rows. Empty sections are skipped.

use chrono::Local;
use clausewise_analyzer::RULES_VERSION;
use clausewise_core::{
    AnalysisResult, CellState, ComparisonResult, MatrixCell, MultiCompareResult, Side,
};
use clausewise_llm::{LlmInsight, LlmStatus};

const MAX_LIST_ITEMS: usize = 10;
const EVIDENCE_CHARS: usize = 160;
const CELL_WIDTH: usize = 14;

// ── Public API ──

/// Print a single analysis as a vertical card.
pub fn print_analysis_card(name: &str, result: &AnalysisResult) {
    println!("=== {} ===", name);
    println!("{}", result.document_type);
    println!("{}", result.document_summary);
    println!();

    println!("Risk");
    print_field("level", &format!("{} ({}/100)", result.risk_level, result.risk_score));
    print_field("reason", &result.risk_reason);
    println!();

    if let Some(r) = &result.readability {
        println!("Readability");
        print_field("grade", &format!("{} ({})", r.grade_label, r.flesch_grade));
        print_field("reading ease", &format!("{} / 100", r.flesch_ease));
        print_field("gunning fog", &r.gunning_fog.to_string());
        print_field("avg sentence length", &format!("{} words", r.avg_sentence_len));
        print_field("complex words", &format!("{}%", r.complex_word_pct));
        print_field("verdict", &r.ease_label);
        println!();
    }

    if !result.key_points.is_empty() {
        println!("Key Points ({}, {} to watch)", result.key_points.len(), result.watch_count());
        for kp in &result.key_points {
            let marker = if kp.watch_out { "!" } else { " " };
            println!("  {marker} {} {:<24} {}", kp.icon, kp.title, kp.detail);
            for quote in &kp.evidence {
                println!("        \"{}\"", shorten(quote, EVIDENCE_CHARS));
            }
        }
        println!();
    }

    if !result.red_flags.is_empty() {
        println!("Red Flags ({})", result.red_flags.len());
        for flag in &result.red_flags {
            println!("  - {}", flag.message);
            for quote in &flag.evidence {
                println!("        \"{}\"", shorten(quote, EVIDENCE_CHARS));
            }
        }
        println!();
    }

    print_numbered("Before You Sign", &result.before_signing);

    println!("Document");
    print_field("words", &result.word_count.to_string());
    print_field("characters", &result.char_count.to_string());
    print_footer();
}

/// Print language-model commentary beneath an analysis card.
pub fn print_insight(insight: &LlmInsight) {
    if !insight.enhanced {
        println!("(language model unavailable, rule-based analysis only)");
        println!();
        return;
    }
    println!("Plain English ({})", insight.model_used);
    if !insight.plain_summary.is_empty() {
        print_field("summary", &insight.plain_summary);
    }
    if !insight.overall_verdict.is_empty() {
        print_field("verdict", &insight.overall_verdict);
    }
    println!();
    print_numbered("Negotiation Tips", &insight.negotiation_tips);
    print_numbered("Concerns", &insight.plain_red_flags);
    print_numbered("Questions To Ask", &insight.user_questions);
}

/// Print a pairwise comparison as a two-column card.
pub fn print_comparison_card(result: &ComparisonResult) {
    println!("=== {} vs {} ===", result.left_name, result.right_name);
    println!("{}", result.summary);
    println!();

    println!("Scores");
    print_field(&result.left_name, &side_line(&result.left, result.left_score));
    print_field(&result.right_name, &side_line(&result.right, result.right_score));
    println!();

    if !result.categories.is_empty() {
        println!("Categories");
        println!(
            "  {:<26} {:<CELL_WIDTH$} {:<CELL_WIDTH$} better",
            "",
            shorten(&result.left_name, CELL_WIDTH),
            shorten(&result.right_name, CELL_WIDTH)
        );
        for row in &result.categories {
            let better = match row.winner {
                Side::Left => result.left_name.as_str(),
                Side::Right => result.right_name.as_str(),
                Side::Neither => "-",
            };
            println!(
                "  {:<26} {:<CELL_WIDTH$} {:<CELL_WIDTH$} {}",
                format!("{} {}", row.icon, row.category),
                cell_marker(&row.left),
                cell_marker(&row.right),
                better
            );
        }
        println!();
    }

    print_bullets(&format!("Only in {}", result.left_name), &result.left_only_flags);
    print_bullets(&format!("Only in {}", result.right_name), &result.right_only_flags);
    print_bullets("In Both", &result.shared_flags);

    if result.enhancement.enhanced {
        println!("Second Opinion ({})", result.enhancement.model);
        println!("  {}", result.enhancement.opinion);
        println!();
    }
    print_footer();
}

/// Print a ranked leaderboard and its category matrix.
pub fn print_ranking_card(result: &MultiCompareResult) {
    println!("=== Ranking of {} documents ===", result.rankings.len());
    println!("Winner: {}", result.winner_name);
    println!("{}", result.winner_reason);
    println!();

    println!("Leaderboard");
    for r in &result.rankings {
        println!(
            "  #{} {:<24} score {:>5.1}  {} risk ({}/100)  {} flag(s)  {} to watch",
            r.rank,
            r.name,
            r.total_score,
            r.result.risk_level,
            r.result.risk_score,
            r.result.red_flags.len(),
            r.watch_count
        );
        for s in &r.strengths {
            println!("       + {s}");
        }
        for w in &r.weaknesses {
            println!("       - {w}");
        }
    }
    println!();

    if !result.matrix.is_empty() {
        println!("Matrix");
        let header: Vec<String> = result
            .doc_names
            .iter()
            .map(|n| format!("{:<CELL_WIDTH$}", shorten(n, CELL_WIDTH)))
            .collect();
        println!("  {:<26} {}", "", header.join(" "));
        for row in result.matrix.iter().take(MAX_LIST_ITEMS * 2) {
            let cells: Vec<String> = row
                .cells
                .iter()
                .map(|c| format!("{:<CELL_WIDTH$}", cell_marker(c)))
                .collect();
            println!(
                "  {:<26} {}",
                format!("{} {}", row.icon, row.category),
                cells.join(" ")
            );
        }
        println!();
    }

    println!("Recommendation");
    println!("  {}", result.recommendation);
    println!();

    if result.enhancement.enhanced {
        println!("Model Pick ({})", result.enhancement.model);
        println!("  {}", result.enhancement.pick);
        println!();
    }
    print_footer();
}

pub fn print_llm_status(status: &LlmStatus) {
    println!("Language Model");
    print_field("available", if status.available { "yes" } else { "no" });
    print_field("model", &status.model);
    if let Some(reason) = &status.reason {
        print_field("reason", reason);
    }
    if status.available {
        print_field("base url", &status.base_url);
        print_field("model loaded", if status.model_loaded { "yes" } else { "no" });
        let shown: Vec<&str> = status
            .all_models
            .iter()
            .take(MAX_LIST_ITEMS)
            .map(String::as_str)
            .collect();
        if !shown.is_empty() {
            print_field("installed", &shown.join(", "));
        }
        if status.all_models.len() > MAX_LIST_ITEMS {
            println!("    ... and {} more", status.all_models.len() - MAX_LIST_ITEMS);
        }
    }
}

// ── Section rendering ──

fn print_field(label: &str, value: &str) {
    println!("  {:<26} {}", label, value);
}

fn print_numbered(header: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{header}");
    for (i, item) in items.iter().enumerate() {
        println!("  {}. {}", i + 1, item);
    }
    println!();
}

fn print_bullets(header: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{header}");
    for item in items.iter().take(MAX_LIST_ITEMS) {
        println!("  - {item}");
    }
    if items.len() > MAX_LIST_ITEMS {
        println!("    ... and {} more", items.len() - MAX_LIST_ITEMS);
    }
    println!();
}

fn print_footer() {
    println!(
        "Generated {} with rules v{}",
        Local::now().format("%Y-%m-%d %H:%M"),
        RULES_VERSION
    );
}

// ── Helpers ──

fn side_line(result: &AnalysisResult, score: f64) -> String {
    format!(
        "score {:.1}  {} risk ({}/100)  {} flag(s)",
        score,
        result.risk_level,
        result.risk_score,
        result.red_flags.len()
    )
}

fn cell_marker(cell: &MatrixCell) -> &'static str {
    match cell.state() {
        CellState::Good => "ok",
        CellState::Warn => "watch",
        CellState::Missing => "-",
    }
}

/// Cut to `max` characters, marking the cut with `...`.
fn shorten(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

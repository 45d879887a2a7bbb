use clausewise_analyzer::{analyze, multi_compare};
use clausewise_core::{CoreError, DocumentType, RiskLevel};

const SCENARIO_A: &str = "This Agreement is governed by the laws of California. \
    Disputes shall be resolved through binding arbitration. \
    There are no refunds under any circumstances.";

#[test]
fn scenario_a_arbitration_and_no_refunds() {
    let result = analyze(SCENARIO_A).unwrap();

    // binding arbitration (15) + no refund (15); "governed by the laws of"
    // is not the "governing law" phrase.
    assert_eq!(result.risk_score, 30);
    assert_eq!(result.risk_level, RiskLevel::Medium);
    assert_eq!(result.document_type, DocumentType::General);

    assert!(
        result
            .red_flags
            .iter()
            .any(|f| f.message == "Requires binding arbitration — limits your ability to sue.")
    );
    let refunds = result.key_point("Refunds").expect("refund key point");
    assert!(refunds.watch_out);
    assert_eq!(
        refunds.evidence,
        vec!["There are no refunds under any circumstances."]
    );

    let categories: Vec<&str> = result.key_points.iter().map(|kp| kp.category.as_str()).collect();
    assert_eq!(categories, vec!["Refunds", "Dispute Resolution"]);

    assert_eq!(
        result.before_signing,
        vec![
            "Understand that by signing you likely give up your right to sue in court.",
            "Note there are no refunds — be certain before committing.",
            "Keep a copy of this document for your records once signed.",
        ]
    );
}

#[test]
fn scenario_b_short_text_still_analyses() {
    let result = analyze("Too short.").unwrap();
    assert_eq!(result.word_count, 2);
    assert_eq!(result.document_type, DocumentType::General);

    assert!(matches!(analyze(" \n "), Err(CoreError::EmptyDocument)));
}

#[test]
fn scenario_c_one_document_is_not_enough() {
    let only = analyze(SCENARIO_A).unwrap();
    let err = multi_compare(&[("Only".to_string(), only)]).unwrap_err();
    assert!(matches!(err, CoreError::InsufficientInput { supplied: 1, .. }));
}

#[test]
fn scenario_d_fewer_red_flags_rank_first() {
    let more_flags = analyze(
        "You agree to binding arbitration for every dispute. \
         We may repossess the equipment if payments stop.",
    )
    .unwrap();
    let fewer_flags =
        analyze("You agree to binding arbitration for every dispute with the company.").unwrap();

    assert_eq!(more_flags.risk_score, fewer_flags.risk_score);
    assert!(more_flags.red_flags.len() > fewer_flags.red_flags.len());

    let ranked = multi_compare(&[
        ("Equipment lease".to_string(), more_flags),
        ("Service terms".to_string(), fewer_flags),
    ])
    .unwrap();
    assert_eq!(ranked.winner_name, "Service terms");
    assert_eq!(ranked.doc_names, vec!["Service terms", "Equipment lease"]);
}

#[test]
fn lease_document_end_to_end() {
    let text = "This residential lease is made between the landlord and the tenant. \
        The tenant shall pay rent on the first day of each month. \
        A security deposit equal to one month of rent is held by the landlord. \
        Late fees apply when rent is more than five days overdue. \
        This lease is subject to the laws of the State of Oregon.";
    let result = analyze(text).unwrap();

    assert_eq!(result.document_type, DocumentType::LeaseRental);
    assert!(result.document_summary.starts_with("This is a lease or rental agreement"));
    assert!(result.key_point("Security Deposit").is_some_and(|kp| kp.watch_out));
    assert!(result.key_point("Payment & Billing").is_some_and(|kp| kp.watch_out));
    assert!(result.before_signing.len() <= 7);
    assert_eq!(
        result.before_signing.last().map(String::as_str),
        Some("Keep a copy of this document for your records once signed.")
    );
}

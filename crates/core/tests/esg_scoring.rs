use std::fs;
use std::path::Path;

use greenmetric_core::esg::{score_responses, Answer, EsgResponses};
use greenmetric_core::types::{MarketStanding, PerformanceLevel, ScoreBand};
use greenmetric_core::{assess_esg, AssessOptions};

fn load_fixture() -> EsgResponses {
    let path = Path::new("../../fixtures/acme_manufacturing/esg_responses.json");
    let bytes = fs::read(path).expect("read fixture");
    serde_json::from_slice(&bytes).expect("parse fixture")
}

#[test]
fn fixture_scores_80_across_the_board() {
    let result = score_responses(&load_fixture()).expect("score ok");

    assert_eq!(result.environmental, 80);
    assert_eq!(result.social, 80);
    assert_eq!(result.governance, 80);
    // round(80*0.35 + 80*0.30 + 80*0.35)
    assert_eq!(result.overall, 80);

    assert_eq!(result.completeness.environmental, 80);
    assert_eq!(result.completeness.social, 80);
    assert_eq!(result.completeness.governance, 80);
}

#[test]
fn fixture_report_is_excellent_and_beats_manufacturing_average() {
    let opts = AssessOptions {
        industry: Some("Manufacturing".to_string()),
        ..AssessOptions::default()
    };
    let report = assess_esg(&load_fixture(), &opts).expect("assess ok");

    assert_eq!(report.band, ScoreBand::Excellent);
    // 80 clears the market median of 68 but not the 85 top-quartile boundary
    assert_eq!(report.market_standing, MarketStanding::AboveMedian);
    assert!(report.recommendations.is_empty());

    let b = report.benchmark.as_ref().expect("benchmark present");
    assert_eq!(b.industry_avg_score, 65);
    assert_eq!(b.delta, 15);
    assert_eq!(b.performance, PerformanceLevel::Excellent);
}

#[test]
fn answering_everything_with_top_options_reaches_100() {
    let mut responses = load_fixture();
    responses.environmental.insert(
        "waste_reduction".to_string(),
        Answer::Multi(
            ["zero_waste", "recycling", "reduction", "circular"]
                .iter()
                .map(|v| v.to_string())
                .collect(),
        ),
    );
    responses.environmental.insert(
        "climate_risk".to_string(),
        Answer::Multi(
            ["physical_risk", "transition_risk", "scenario_analysis", "disclosure"]
                .iter()
                .map(|v| v.to_string())
                .collect(),
        ),
    );

    let result = score_responses(&responses).expect("score ok");
    assert_eq!(result.environmental, 100);
    assert_eq!(result.completeness.environmental, 100);
}

#[test]
fn empty_responses_score_zero_but_do_not_error() {
    let result = score_responses(&EsgResponses::default()).expect("score ok");
    assert_eq!(result.overall, 0);
    assert_eq!(result.completeness.environmental, 0);
}

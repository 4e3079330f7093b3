use std::fs;
use std::path::Path;

use greenmetric_core::carbon::CarbonInput;
use greenmetric_core::{assess_footprint, AssessOptions};

fn load_fixture() -> CarbonInput {
    let path = Path::new("../../fixtures/acme_manufacturing/carbon_input.json");
    let bytes = fs::read(path).expect("read fixture");
    serde_json::from_slice(&bytes).expect("parse fixture")
}

#[test]
fn fixture_produces_reference_emissions() {
    let input = load_fixture();
    let report = assess_footprint(&input, &AssessOptions::default()).expect("assess ok");

    assert_eq!(report.results.scope1_kg, 4186);
    assert_eq!(report.results.scope2_kg, 2925);
    assert_eq!(report.results.scope3_kg, 55898);
    assert_eq!(report.results.total_kg, 63009);

    assert_eq!(report.results.breakdown.scope1_percent, 7);
    assert_eq!(report.results.breakdown.scope2_percent, 5);
    assert_eq!(report.results.breakdown.scope3_percent, 89);

    insta::assert_json_snapshot!(report.results.breakdown, @r###"
    {
      "scope1_percent": 7,
      "scope2_percent": 5,
      "scope3_percent": 89
    }
    "###);
}

#[test]
fn fixture_gets_industry_benchmark_and_recommendation() {
    let input = load_fixture();
    let report = assess_footprint(&input, &AssessOptions::default()).expect("assess ok");

    let b = report.benchmark.as_ref().expect("benchmark present");
    assert_eq!(b.industry, "Manufacturing");
    assert_eq!(b.intensity_kg_per_employee, Some(630.09));
    assert_eq!(b.industry_avg_intensity, 45.2);

    let ids: Vec<&str> = report
        .recommendations
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(ids, vec!["SCOPE3_DOMINANT"]);
}

#[test]
fn fixture_markdown_is_stable() {
    let input = load_fixture();
    let report = assess_footprint(&input, &AssessOptions::default()).expect("assess ok");

    insta::assert_snapshot!(report.to_markdown(), @r###"
    # greenmetric carbon report

    - report_version: `0.1.0`
    - company: `Acme Manufacturing Sdn Bhd`
    - industry: `Manufacturing`

    ## Emissions (kg CO2e)

    - scope1: `4186`
    - scope2: `2925`
    - scope3: `55898`
    - total: `63009`
    - breakdown: scope1 `7%`, scope2 `5%`, scope3 `89%`

    ## Industry benchmark

    - industry: `Manufacturing`
    - intensity_kg_per_employee: `630.1`
    - industry_avg_intensity: `45.2`

    ## Recommendations

    ### SCOPE3_DOMINANT
    - severity: `Medium`
    - likely_cause: Commuting, business travel or waste dominate the footprint
    - evidence:
      - scope3 accounts for 89% of 63009 kg CO2e
    - suggested_actions:
      - Introduce remote or hybrid working to cut commute emissions
      - Prefer rail or video conferencing over short-haul flights
      - Set supplier engagement targets for value-chain emissions
    "###);
}

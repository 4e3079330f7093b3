use crate::carbon::{CarbonInput, FootprintResult};
use crate::esg::EsgResult;
use crate::types::{Category, Recommendation, Severity};

pub fn carbon_recommendations(
    input: &CarbonInput,
    result: &FootprintResult,
) -> Vec<Recommendation> {
    let mut recs: Vec<Recommendation> = Vec::new();

    if result.total_kg > 0 && result.breakdown.scope3_percent >= 70 {
        recs.push(Recommendation {
            id: "SCOPE3_DOMINANT".to_string(),
            severity: Severity::Medium,
            evidence: vec![format!(
                "scope3 accounts for {}% of {} kg CO2e",
                result.breakdown.scope3_percent, result.total_kg
            )],
            likely_cause: "Commuting, business travel or waste dominate the footprint".to_string(),
            suggested_actions: vec![
                "Introduce remote or hybrid working to cut commute emissions".to_string(),
                "Prefer rail or video conferencing over short-haul flights".to_string(),
                "Set supplier engagement targets for value-chain emissions".to_string(),
            ],
        });
    }

    let s2 = &input.scope2;
    if s2.electricity_kwh >= 10_000.0 && s2.renewable_percent < 25.0 {
        recs.push(Recommendation {
            id: "LOW_RENEWABLE_SHARE".to_string(),
            severity: Severity::Medium,
            evidence: vec![format!(
                "{} kWh purchased with {}% renewable share",
                s2.electricity_kwh, s2.renewable_percent
            )],
            likely_cause: "Grid electricity drawn with little renewable offset".to_string(),
            suggested_actions: vec![
                "Subscribe to a green electricity tariff (e.g. TNB GET)".to_string(),
                "Evaluate rooftop solar under the NEM scheme".to_string(),
            ],
        });
    }

    let s3 = &input.scope3;
    if s3.waste_kg > 0.0 && s3.recycled_kg / s3.waste_kg < 0.3 {
        recs.push(Recommendation {
            id: "LOW_RECYCLING_RATE".to_string(),
            severity: Severity::Low,
            evidence: vec![format!(
                "{} kg recycled against {} kg landfilled",
                s3.recycled_kg, s3.waste_kg
            )],
            likely_cause: "Most waste goes to landfill".to_string(),
            suggested_actions: vec![
                "Introduce separated collection for paper, plastics and e-waste".to_string(),
                "Set a recycling-rate target and track it monthly".to_string(),
            ],
        });
    }

    recs.sort_by(|a, b| a.id.cmp(&b.id));
    recs
}

pub fn esg_recommendations(result: &EsgResult) -> Vec<Recommendation> {
    let mut recs: Vec<Recommendation> = Vec::new();

    for category in Category::ALL {
        let score = result.score(category);
        if score < 40 {
            recs.push(Recommendation {
                id: format!("WEAK_{}", category.label().to_uppercase()),
                severity: Severity::High,
                evidence: vec![format!("{} score {}/100", category.label(), score)],
                likely_cause: format!(
                    "{} practices fall below the fair-performance threshold",
                    category.label()
                ),
                suggested_actions: vec![
                    format!(
                        "Prioritize the unanswered or zero-scoring {} criteria",
                        category.label().to_lowercase()
                    ),
                    "Assign an executive owner and a remediation timeline".to_string(),
                ],
            });
        }
    }

    recs.sort_by(|a, b| a.id.cmp(&b.id));
    recs
}

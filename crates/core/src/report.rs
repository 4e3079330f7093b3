use serde::{Deserialize, Serialize};

use crate::benchmark::{self, CarbonComparison, EsgComparison};
use crate::carbon::{CompanyProfile, FootprintResult};
use crate::esg::EsgResult;
use crate::types::{MarketStanding, Recommendation, ScoreBand};

pub const REPORT_VERSION: &str = "0.1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarbonReport {
    pub report_version: String,
    pub company: CompanyProfile,
    pub results: FootprintResult,
    pub benchmark: Option<CarbonComparison>,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsgReport {
    pub report_version: String,
    pub results: EsgResult,
    pub band: ScoreBand,
    /// Quartile within the Malaysian market at large; present regardless of
    /// whether an industry benchmark matched.
    pub market_standing: MarketStanding,
    pub benchmark: Option<EsgComparison>,
    pub recommendations: Vec<Recommendation>,
}

impl CarbonReport {
    pub fn new(
        company: CompanyProfile,
        results: FootprintResult,
        benchmark: Option<CarbonComparison>,
        recommendations: Vec<Recommendation>,
    ) -> Self {
        Self {
            report_version: REPORT_VERSION.to_string(),
            company,
            results,
            benchmark,
            recommendations,
        }
    }

    pub fn to_markdown(&self) -> String {
        let mut s = String::new();
        s.push_str("# greenmetric carbon report\n\n");
        s.push_str(&format!("- report_version: `{}`\n", self.report_version));
        if !self.company.name.is_empty() {
            s.push_str(&format!("- company: `{}`\n", self.company.name));
        }
        if !self.company.industry.is_empty() {
            s.push_str(&format!("- industry: `{}`\n", self.company.industry));
        }
        s.push('\n');

        s.push_str("## Emissions (kg CO2e)\n\n");
        s.push_str(&format!("- scope1: `{}`\n", self.results.scope1_kg));
        s.push_str(&format!("- scope2: `{}`\n", self.results.scope2_kg));
        s.push_str(&format!("- scope3: `{}`\n", self.results.scope3_kg));
        s.push_str(&format!("- total: `{}`\n", self.results.total_kg));
        s.push_str(&format!(
            "- breakdown: scope1 `{}%`, scope2 `{}%`, scope3 `{}%`\n",
            self.results.breakdown.scope1_percent,
            self.results.breakdown.scope2_percent,
            self.results.breakdown.scope3_percent
        ));
        s.push('\n');

        if let Some(b) = &self.benchmark {
            s.push_str("## Industry benchmark\n\n");
            s.push_str(&format!("- industry: `{}`\n", b.industry));
            match b.intensity_kg_per_employee {
                Some(i) => s.push_str(&format!("- intensity_kg_per_employee: `{i:.1}`\n")),
                None => s.push_str("- intensity_kg_per_employee: `n/a`\n"),
            }
            s.push_str(&format!(
                "- industry_avg_intensity: `{:.1}`\n",
                b.industry_avg_intensity
            ));
            s.push('\n');
        }

        push_recommendations(&mut s, &self.recommendations);
        s
    }
}

impl EsgReport {
    pub fn new(
        results: EsgResult,
        benchmark: Option<EsgComparison>,
        recommendations: Vec<Recommendation>,
    ) -> Self {
        let band = ScoreBand::from_score(results.overall);
        let market_standing = benchmark::market_standing(results.overall);
        Self {
            report_version: REPORT_VERSION.to_string(),
            results,
            band,
            market_standing,
            benchmark,
            recommendations,
        }
    }

    pub fn to_markdown(&self) -> String {
        let mut s = String::new();
        s.push_str("# greenmetric ESG report\n\n");
        s.push_str(&format!("- report_version: `{}`\n", self.report_version));
        s.push('\n');

        s.push_str("## Scores\n\n");
        s.push_str(&format!("- environmental: `{}`\n", self.results.environmental));
        s.push_str(&format!("- social: `{}`\n", self.results.social));
        s.push_str(&format!("- governance: `{}`\n", self.results.governance));
        s.push_str(&format!(
            "- overall: `{}` ({:?})\n",
            self.results.overall, self.band
        ));
        s.push_str(&format!(
            "- completeness: environmental `{}%`, social `{}%`, governance `{}%`\n",
            self.results.completeness.environmental,
            self.results.completeness.social,
            self.results.completeness.governance
        ));
        s.push_str(&format!(
            "- market_standing: `{:?}` (Malaysian market)\n",
            self.market_standing
        ));
        s.push('\n');
        s.push_str(&format!("{}\n\n", self.band.description()));

        if let Some(b) = &self.benchmark {
            s.push_str("## Industry benchmark\n\n");
            s.push_str(&format!("- industry: `{}`\n", b.industry));
            s.push_str(&format!("- industry_avg_score: `{}`\n", b.industry_avg_score));
            s.push_str(&format!("- delta: `{}`\n", b.delta));
            s.push_str(&format!("- performance: `{:?}`\n", b.performance));
            s.push('\n');
        }

        push_recommendations(&mut s, &self.recommendations);
        s
    }
}

fn push_recommendations(s: &mut String, recommendations: &[Recommendation]) {
    s.push_str("## Recommendations\n\n");
    if recommendations.is_empty() {
        s.push_str("- (none)\n");
        return;
    }
    for r in recommendations {
        s.push_str(&format!("### {}\n", r.id));
        s.push_str(&format!("- severity: `{:?}`\n", r.severity));
        s.push_str(&format!("- likely_cause: {}\n", r.likely_cause));
        if !r.evidence.is_empty() {
            s.push_str("- evidence:\n");
            for e in &r.evidence {
                s.push_str(&format!("  - {}\n", e));
            }
        }
        if !r.suggested_actions.is_empty() {
            s.push_str("- suggested_actions:\n");
            for a in &r.suggested_actions {
                s.push_str(&format!("  - {}\n", a));
            }
        }
        s.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carbon::ScopeBreakdown;
    use crate::esg::Completeness;
    use crate::types::{PerformanceLevel, Severity};

    #[test]
    fn carbon_markdown_includes_sections() {
        let report = CarbonReport::new(
            CompanyProfile {
                name: "Acme".to_string(),
                industry: "Technology".to_string(),
                size: String::new(),
                state: String::new(),
            },
            FootprintResult {
                scope1_kg: 10,
                scope2_kg: 20,
                scope3_kg: 70,
                total_kg: 100,
                breakdown: ScopeBreakdown {
                    scope1_percent: 10,
                    scope2_percent: 20,
                    scope3_percent: 70,
                },
            },
            Some(CarbonComparison {
                industry: "Technology".to_string(),
                intensity_kg_per_employee: Some(10.0),
                industry_avg_intensity: 8.3,
            }),
            vec![Recommendation {
                id: "X".to_string(),
                severity: Severity::High,
                evidence: vec!["e".to_string()],
                likely_cause: "c".to_string(),
                suggested_actions: vec!["a".to_string()],
            }],
        );

        let md = report.to_markdown();
        assert!(md.contains("## Emissions (kg CO2e)"));
        assert!(md.contains("## Industry benchmark"));
        assert!(md.contains("### X"));
    }

    #[test]
    fn esg_markdown_omits_missing_benchmark() {
        let report = EsgReport::new(
            EsgResult {
                environmental: 80,
                social: 80,
                governance: 80,
                overall: 80,
                completeness: Completeness {
                    environmental: 80,
                    social: 80,
                    governance: 80,
                },
            },
            None,
            vec![],
        );
        assert_eq!(report.band, ScoreBand::Excellent);
        assert_eq!(report.market_standing, MarketStanding::AboveMedian);
        let md = report.to_markdown();
        assert!(md.contains("## Scores"));
        assert!(md.contains("- market_standing: `AboveMedian` (Malaysian market)"));
        assert!(!md.contains("## Industry benchmark"));
        assert!(md.contains("- (none)"));
    }

    #[test]
    fn esg_report_serializes_benchmark_fields() {
        let report = EsgReport::new(
            EsgResult {
                environmental: 50,
                social: 50,
                governance: 50,
                overall: 50,
                completeness: Completeness {
                    environmental: 50,
                    social: 50,
                    governance: 50,
                },
            },
            Some(EsgComparison {
                industry: "Healthcare".to_string(),
                industry_avg_score: 69,
                delta: -19,
                performance: PerformanceLevel::NeedsImprovement,
            }),
            vec![],
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["band"], "FAIR");
        assert_eq!(json["market_standing"], "BOTTOM_QUARTILE");
        assert_eq!(json["benchmark"]["performance"], "NEEDS_IMPROVEMENT");
    }
}

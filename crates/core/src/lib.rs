pub mod benchmark;
pub mod carbon;
pub mod config;
pub mod criteria;
pub mod esg;
pub mod factors;
pub mod recommendations;
pub mod report;
pub mod store;
pub mod types;

use crate::carbon::CarbonInput;
use crate::esg::EsgResponses;
use crate::factors::EmissionFactors;
use crate::report::{CarbonReport, EsgReport};

#[derive(Debug, Clone, Default)]
pub struct AssessOptions {
    pub factors: EmissionFactors,
    /// Overrides the industry given in the input, if any.
    pub industry: Option<String>,
}

/// Full carbon pipeline: validate, compute, benchmark, recommend.
pub fn assess_footprint(input: &CarbonInput, opts: &AssessOptions) -> anyhow::Result<CarbonReport> {
    let result = carbon::compute_footprint(input, &opts.factors)?;

    let industry = opts
        .industry
        .as_deref()
        .unwrap_or(input.company.industry.as_str());
    let comparison = benchmark::benchmark_for(industry)
        .map(|b| benchmark::compare_carbon(&result, input.scope3.employees, b));

    let recs = recommendations::carbon_recommendations(input, &result);

    Ok(CarbonReport::new(
        input.company.clone(),
        result,
        comparison,
        recs,
    ))
}

/// Full ESG pipeline: score, benchmark, recommend.
pub fn assess_esg(responses: &EsgResponses, opts: &AssessOptions) -> anyhow::Result<EsgReport> {
    let result = esg::score_responses(responses)?;

    let comparison = opts
        .industry
        .as_deref()
        .and_then(benchmark::benchmark_for)
        .map(|b| benchmark::compare_esg(&result, b));

    let recs = recommendations::esg_recommendations(&result);

    Ok(EsgReport::new(result, comparison, recs))
}

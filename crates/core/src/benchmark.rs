//! Static Malaysian industry benchmark data and comparison against it.
//! An unknown industry yields no comparison rather than a fallback industry.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::carbon::FootprintResult;
use crate::esg::EsgResult;
use crate::types::{MarketStanding, PerformanceLevel};

#[derive(Debug, Clone, Serialize)]
pub struct IndustryBenchmark {
    pub industry: &'static str,
    pub avg_esg_score: u32,
    /// kg CO2e per employee per year.
    pub avg_carbon_intensity: f64,
}

/// Market-wide reference points across Bursa-listed companies.
#[derive(Debug, Clone, Serialize)]
pub struct MarketStatistics {
    pub average_esg_score: u32,
    pub top_quartile: u32,
    pub median_score: u32,
    pub bottom_quartile: u32,
    pub carbon_intensity_avg: f64,
}

pub const MARKET: MarketStatistics = MarketStatistics {
    average_esg_score: 71,
    top_quartile: 85,
    median_score: 68,
    bottom_quartile: 52,
    carbon_intensity_avg: 28.4,
};

static BENCHMARKS: Lazy<BTreeMap<&'static str, IndustryBenchmark>> = Lazy::new(|| {
    let entries = [
        IndustryBenchmark {
            industry: "Financial Services",
            avg_esg_score: 78,
            avg_carbon_intensity: 12.5,
        },
        IndustryBenchmark {
            industry: "Manufacturing",
            avg_esg_score: 65,
            avg_carbon_intensity: 45.2,
        },
        IndustryBenchmark {
            industry: "Technology",
            avg_esg_score: 72,
            avg_carbon_intensity: 8.3,
        },
        IndustryBenchmark {
            industry: "Healthcare",
            avg_esg_score: 69,
            avg_carbon_intensity: 18.7,
        },
    ];
    entries.into_iter().map(|b| (b.industry, b)).collect()
});

pub fn benchmark_for(industry: &str) -> Option<&'static IndustryBenchmark> {
    BENCHMARKS.get(industry)
}

pub fn known_industries() -> impl Iterator<Item = &'static str> {
    BENCHMARKS.keys().copied()
}

/// Quartile placement against the market-wide score distribution. The
/// quartile boundaries are exclusive: sitting exactly on one places you in
/// the band below it.
pub fn market_standing(score: u32) -> MarketStanding {
    if score > MARKET.top_quartile {
        MarketStanding::TopQuartile
    } else if score > MARKET.median_score {
        MarketStanding::AboveMedian
    } else if score > MARKET.bottom_quartile {
        MarketStanding::BelowMedian
    } else {
        MarketStanding::BottomQuartile
    }
}

/// ESG score vs the industry average.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsgComparison {
    pub industry: String,
    pub industry_avg_score: u32,
    pub delta: i64,
    pub performance: PerformanceLevel,
}

/// Footprint intensity vs the industry average. Intensity is undefined for
/// a zero-employee input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarbonComparison {
    pub industry: String,
    pub intensity_kg_per_employee: Option<f64>,
    pub industry_avg_intensity: f64,
}

pub fn compare_esg(result: &EsgResult, benchmark: &IndustryBenchmark) -> EsgComparison {
    let delta = i64::from(result.overall) - i64::from(benchmark.avg_esg_score);
    EsgComparison {
        industry: benchmark.industry.to_string(),
        industry_avg_score: benchmark.avg_esg_score,
        delta,
        performance: PerformanceLevel::from_delta(delta),
    }
}

pub fn compare_carbon(
    result: &FootprintResult,
    employees: f64,
    benchmark: &IndustryBenchmark,
) -> CarbonComparison {
    let intensity = if employees > 0.0 {
        Some(result.total_kg as f64 / employees)
    } else {
        None
    };
    CarbonComparison {
        industry: benchmark.industry.to_string(),
        intensity_kg_per_employee: intensity,
        industry_avg_intensity: benchmark.avg_carbon_intensity,
    }
}

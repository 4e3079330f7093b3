use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Environmental,
    Social,
    Governance,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Environmental,
        Category::Social,
        Category::Governance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Environmental => "Environmental",
            Category::Social => "Social",
            Category::Governance => "Governance",
        }
    }
}

/// Qualitative band for an ESG score in [0,100].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => ScoreBand::Excellent,
            60..=79 => ScoreBand::Good,
            40..=59 => ScoreBand::Fair,
            _ => ScoreBand::NeedsImprovement,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent ESG performance with strong compliance readiness",
            ScoreBand::Good => "Good ESG foundation with room for improvement",
            ScoreBand::Fair => "Fair performance; significant gaps remain",
            ScoreBand::NeedsImprovement => "Needs improvement across core ESG practices",
        }
    }
}

/// Standing relative to an industry-average score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PerformanceLevel {
    Excellent,
    AboveAverage,
    BelowAverage,
    NeedsImprovement,
}

impl PerformanceLevel {
    pub fn from_delta(delta: i64) -> Self {
        if delta >= 10 {
            PerformanceLevel::Excellent
        } else if delta >= 0 {
            PerformanceLevel::AboveAverage
        } else if delta >= -10 {
            PerformanceLevel::BelowAverage
        } else {
            PerformanceLevel::NeedsImprovement
        }
    }
}

/// Quartile placement within the Malaysian market at large.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketStanding {
    TopQuartile,
    AboveMedian,
    BelowMedian,
    BottomQuartile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub severity: Severity,
    pub evidence: Vec<String>,
    pub likely_cause: String,
    pub suggested_actions: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

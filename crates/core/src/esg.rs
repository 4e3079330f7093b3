use std::collections::{BTreeMap, BTreeSet};

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use crate::criteria::{self, CriterionKind};
use crate::types::Category;

/// Category weights for the overall score: E 35%, S 30%, G 35%.
const WEIGHTS: [(Category, f64); 3] = [
    (Category::Environmental, 0.35),
    (Category::Social, 0.30),
    (Category::Governance, 0.35),
];

/// A selected answer: one option value for radio criteria, a list of option
/// values for multi-select criteria.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    Multi(Vec<String>),
}

/// Criterion-id to answer, per category. Unanswered criteria are simply
/// absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EsgResponses {
    pub environmental: BTreeMap<String, Answer>,
    pub social: BTreeMap<String, Answer>,
    pub governance: BTreeMap<String, Answer>,
}

impl EsgResponses {
    pub fn for_category(&self, category: Category) -> &BTreeMap<String, Answer> {
        match category {
            Category::Environmental => &self.environmental,
            Category::Social => &self.social,
            Category::Governance => &self.governance,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsgResult {
    pub environmental: u32,
    pub social: u32,
    pub governance: u32,
    pub overall: u32,
    pub completeness: Completeness,
}

impl EsgResult {
    pub fn score(&self, category: Category) -> u32 {
        match category {
            Category::Environmental => self.environmental,
            Category::Social => self.social,
            Category::Governance => self.governance,
        }
    }
}

/// Percentage of catalog criteria answered, per category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completeness {
    pub environmental: u32,
    pub social: u32,
    pub governance: u32,
}

/// Score a full response set against the criteria catalog.
///
/// Category scores sum the per-option point values of the selected answers,
/// capped at 100. Completeness counts answered criteria against the catalog
/// size regardless of the points earned, so an all-zero-point response set
/// can still be 100% complete.
pub fn score_responses(responses: &EsgResponses) -> anyhow::Result<EsgResult> {
    let mut scores = BTreeMap::new();
    let mut completeness = BTreeMap::new();

    for category in Category::ALL {
        let answers = responses.for_category(category);
        let (score, answered) = score_category(category, answers)?;
        let expected = criteria::criteria_for(category).len();
        scores.insert(category, score);
        completeness.insert(category, completeness_percent(answered, expected));
    }

    let overall = weighted_overall(
        scores[&Category::Environmental],
        scores[&Category::Social],
        scores[&Category::Governance],
    );

    Ok(EsgResult {
        environmental: scores[&Category::Environmental],
        social: scores[&Category::Social],
        governance: scores[&Category::Governance],
        overall,
        completeness: Completeness {
            environmental: completeness[&Category::Environmental],
            social: completeness[&Category::Social],
            governance: completeness[&Category::Governance],
        },
    })
}

/// Sum selected option points for one category, capped at 100. Also returns
/// the number of criteria answered.
fn score_category(
    category: Category,
    answers: &BTreeMap<String, Answer>,
) -> anyhow::Result<(u32, usize)> {
    let mut points: u32 = 0;

    for (id, answer) in answers {
        let criterion = criteria::criterion(category, id).with_context(|| {
            format!("unknown {} criterion {id:?}", category.label().to_lowercase())
        })?;

        match (criterion.kind, answer) {
            (CriterionKind::Radio, Answer::Single(value)) => {
                let option = criterion
                    .option(value)
                    .with_context(|| format!("criterion {id:?} has no option {value:?}"))?;
                points += option.points;
            }
            (CriterionKind::Multi, Answer::Multi(values)) => {
                // duplicates contribute once
                let unique: BTreeSet<&str> = values.iter().map(String::as_str).collect();
                for value in unique {
                    let option = criterion
                        .option(value)
                        .with_context(|| format!("criterion {id:?} has no option {value:?}"))?;
                    points += option.points;
                }
            }
            (CriterionKind::Radio, Answer::Multi(_)) => {
                bail!("criterion {id:?} accepts a single option, got a list")
            }
            (CriterionKind::Multi, Answer::Single(_)) => {
                bail!("criterion {id:?} accepts a list of options, got a single value")
            }
        }
    }

    Ok((points.min(100), answers.len()))
}

pub fn weighted_overall(environmental: u32, social: u32, governance: u32) -> u32 {
    let weighted: f64 = WEIGHTS
        .iter()
        .map(|(category, weight)| {
            let score = match category {
                Category::Environmental => environmental,
                Category::Social => social,
                Category::Governance => governance,
            };
            f64::from(score) * weight
        })
        .sum();
    weighted.round() as u32
}

fn completeness_percent(answered: usize, expected: usize) -> u32 {
    if expected == 0 {
        return 0;
    }
    let pct = answered as f64 / expected as f64 * 100.0;
    (pct.round() as u32).min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(id: &str, value: &str) -> (String, Answer) {
        (id.to_string(), Answer::Single(value.to_string()))
    }

    fn multi(id: &str, values: &[&str]) -> (String, Answer) {
        (
            id.to_string(),
            Answer::Multi(values.iter().map(|v| v.to_string()).collect()),
        )
    }

    #[test]
    fn equal_category_scores_give_the_same_overall() {
        assert_eq!(weighted_overall(80, 80, 80), 80);
        assert_eq!(weighted_overall(0, 0, 0), 0);
        assert_eq!(weighted_overall(100, 100, 100), 100);
    }

    #[test]
    fn social_weight_is_lighter() {
        // 0.35*100 + 0.30*0 + 0.35*100 = 70
        assert_eq!(weighted_overall(100, 0, 100), 70);
        // 0.30*100 = 30
        assert_eq!(weighted_overall(0, 100, 0), 30);
    }

    #[test]
    fn radio_answer_scores_option_points() {
        let mut responses = EsgResponses::default();
        responses
            .environmental
            .extend([single("energy_management", "yes_informal")]);
        let r = score_responses(&responses).unwrap();
        assert_eq!(r.environmental, 7);
        assert_eq!(r.completeness.environmental, 10);
        assert_eq!(r.completeness.social, 0);
    }

    #[test]
    fn multi_answer_sums_and_dedupes() {
        let mut responses = EsgResponses::default();
        responses.governance.extend([multi(
            "anti_corruption",
            &["policy", "whistleblowing", "policy"],
        )]);
        let r = score_responses(&responses).unwrap();
        assert_eq!(r.governance, 5);
    }

    #[test]
    fn zero_point_answers_still_count_toward_completeness() {
        let mut responses = EsgResponses::default();
        responses.social.extend([
            single("diversity_inclusion", "none"),
            single("training_development", "minimal"),
        ]);
        let r = score_responses(&responses).unwrap();
        assert_eq!(r.social, 0);
        assert_eq!(r.completeness.social, 20);
    }

    #[test]
    fn unknown_criterion_is_an_error() {
        let mut responses = EsgResponses::default();
        responses
            .environmental
            .extend([single("made_up_criterion", "yes")]);
        let err = score_responses(&responses).unwrap_err();
        assert!(format!("{err:#}").contains("made_up_criterion"));
    }

    #[test]
    fn unknown_option_is_an_error() {
        let mut responses = EsgResponses::default();
        responses
            .environmental
            .extend([single("energy_management", "maybe")]);
        assert!(score_responses(&responses).is_err());
    }

    #[test]
    fn answer_shape_must_match_criterion_kind() {
        let mut responses = EsgResponses::default();
        responses
            .environmental
            .extend([multi("energy_management", &["yes_certified"])]);
        assert!(score_responses(&responses).is_err());

        let mut responses = EsgResponses::default();
        responses
            .environmental
            .extend([single("waste_reduction", "recycling")]);
        assert!(score_responses(&responses).is_err());
    }

    #[test]
    fn untagged_answer_json_round_trips() {
        let a: Answer = serde_json::from_str(r#""yes_certified""#).unwrap();
        assert!(matches!(a, Answer::Single(_)));
        let a: Answer = serde_json::from_str(r#"["policy","training"]"#).unwrap();
        assert!(matches!(a, Answer::Multi(v) if v.len() == 2));
    }
}

//! The ESG readiness criteria catalog: 10 criteria per category, each worth
//! up to 10 points, aligned with Bursa Malaysia sustainability reporting
//! expectations. Option point values are what the scorer sums.

use crate::types::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionKind {
    /// Exactly one option may be selected.
    Radio,
    /// Any subset of options may be selected; points add up.
    Multi,
}

#[derive(Debug, Clone, Copy)]
pub struct AnswerOption {
    pub value: &'static str,
    pub label: &'static str,
    pub points: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct Criterion {
    pub id: &'static str,
    pub category: Category,
    pub question: &'static str,
    pub kind: CriterionKind,
    pub options: &'static [AnswerOption],
}

impl Criterion {
    pub fn option(&self, value: &str) -> Option<&'static AnswerOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

pub fn criteria_for(category: Category) -> &'static [Criterion] {
    match category {
        Category::Environmental => ENVIRONMENTAL,
        Category::Social => SOCIAL,
        Category::Governance => GOVERNANCE,
    }
}

pub fn criterion(category: Category, id: &str) -> Option<&'static Criterion> {
    criteria_for(category).iter().find(|c| c.id == id)
}

macro_rules! opt {
    ($value:expr, $label:expr, $points:expr) => {
        AnswerOption {
            value: $value,
            label: $label,
            points: $points,
        }
    };
}

const ENVIRONMENTAL: &[Criterion] = &[
    Criterion {
        id: "energy_management",
        category: Category::Environmental,
        question: "Does your organization have an energy management system?",
        kind: CriterionKind::Radio,
        options: &[
            opt!("yes_certified", "Yes, ISO 50001 certified", 10),
            opt!("yes_informal", "Yes, informal system", 7),
            opt!("planning", "Planning to implement", 3),
            opt!("no", "No", 0),
        ],
    },
    Criterion {
        id: "renewable_energy",
        category: Category::Environmental,
        question: "What percentage of your energy comes from renewable sources?",
        kind: CriterionKind::Radio,
        options: &[
            opt!("high", "More than 50%", 10),
            opt!("medium", "25-50%", 7),
            opt!("low", "1-25%", 4),
            opt!("none", "0%", 0),
        ],
    },
    Criterion {
        id: "carbon_targets",
        category: Category::Environmental,
        question: "Has your organization set science-based carbon reduction targets?",
        kind: CriterionKind::Radio,
        options: &[
            opt!("sbti_approved", "Yes, SBTi approved", 10),
            opt!("science_based", "Yes, science-based", 8),
            opt!("targets_set", "Yes, general targets", 5),
            opt!("no_targets", "No targets set", 0),
        ],
    },
    Criterion {
        id: "water_management",
        category: Category::Environmental,
        question: "Do you have water conservation and management programs?",
        kind: CriterionKind::Radio,
        options: &[
            opt!("comprehensive", "Comprehensive program", 10),
            opt!("basic", "Basic conservation measures", 6),
            opt!("planning", "Planning implementation", 3),
            opt!("none", "No program", 0),
        ],
    },
    Criterion {
        id: "waste_reduction",
        category: Category::Environmental,
        question: "What waste reduction initiatives do you have?",
        kind: CriterionKind::Multi,
        options: &[
            opt!("zero_waste", "Zero waste to landfill program", 3),
            opt!("recycling", "Comprehensive recycling", 2),
            opt!("reduction", "Waste reduction targets", 2),
            opt!("circular", "Circular economy principles", 3),
        ],
    },
    Criterion {
        id: "emissions_monitoring",
        category: Category::Environmental,
        question: "How do you measure your greenhouse gas emissions?",
        kind: CriterionKind::Radio,
        options: &[
            opt!("verified", "Measured and third-party verified", 10),
            opt!("measured", "Measured across all scopes", 7),
            opt!("partial", "Partial measurement", 4),
            opt!("none", "Not measured", 0),
        ],
    },
    Criterion {
        id: "biodiversity_impact",
        category: Category::Environmental,
        question: "Do you assess and manage biodiversity impacts of your operations?",
        kind: CriterionKind::Radio,
        options: &[
            opt!("assessed_managed", "Assessed with active management plans", 10),
            opt!("assessed", "Impact assessments conducted", 6),
            opt!("aware", "Aware, no formal assessment", 3),
            opt!("none", "Not considered", 0),
        ],
    },
    Criterion {
        id: "environmental_policy",
        category: Category::Environmental,
        question: "Does your organization have a formal environmental policy?",
        kind: CriterionKind::Radio,
        options: &[
            opt!("board_approved", "Board-approved and published", 10),
            opt!("documented", "Documented internally", 7),
            opt!("draft", "In draft", 3),
            opt!("none", "No policy", 0),
        ],
    },
    Criterion {
        id: "supplier_screening",
        category: Category::Environmental,
        question: "Do you screen suppliers for environmental practices?",
        kind: CriterionKind::Radio,
        options: &[
            opt!("all_suppliers", "All suppliers screened", 10),
            opt!("key_suppliers", "Key suppliers screened", 7),
            opt!("ad_hoc", "Ad hoc screening", 4),
            opt!("none", "No screening", 0),
        ],
    },
    Criterion {
        id: "climate_risk",
        category: Category::Environmental,
        question: "How do you manage climate-related risk?",
        kind: CriterionKind::Multi,
        options: &[
            opt!("physical_risk", "Physical risk assessment", 3),
            opt!("transition_risk", "Transition risk assessment", 3),
            opt!("scenario_analysis", "Scenario analysis", 2),
            opt!("disclosure", "TCFD-aligned disclosure", 2),
        ],
    },
];

const SOCIAL: &[Criterion] = &[
    Criterion {
        id: "employee_welfare",
        category: Category::Social,
        question: "What employee welfare programs do you provide?",
        kind: CriterionKind::Multi,
        options: &[
            opt!("health_insurance", "Comprehensive health insurance", 2),
            opt!("mental_health", "Mental health support", 2),
            opt!("flexible_work", "Flexible working arrangements", 2),
            opt!("wellness", "Wellness programs", 2),
            opt!("childcare", "Childcare support", 2),
        ],
    },
    Criterion {
        id: "diversity_inclusion",
        category: Category::Social,
        question: "What is your approach to diversity and inclusion?",
        kind: CriterionKind::Radio,
        options: &[
            opt!("comprehensive", "Comprehensive D&I strategy with targets", 10),
            opt!("policies", "D&I policies in place", 7),
            opt!("basic", "Basic equal opportunity practices", 4),
            opt!("none", "No formal approach", 0),
        ],
    },
    Criterion {
        id: "training_development",
        category: Category::Social,
        question: "How do you approach employee training and development?",
        kind: CriterionKind::Radio,
        options: &[
            opt!("comprehensive", "Comprehensive development programs", 10),
            opt!("regular", "Regular training programs", 7),
            opt!("basic", "Basic skills training", 4),
            opt!("minimal", "Minimal training provided", 0),
        ],
    },
    Criterion {
        id: "health_safety",
        category: Category::Social,
        question: "What is your occupational health and safety performance?",
        kind: CriterionKind::Radio,
        options: &[
            opt!("excellent", "Zero incidents, certified OHSAS 18001/ISO 45001", 10),
            opt!("good", "Low incident rate, safety programs", 7),
            opt!("average", "Basic safety compliance", 4),
            opt!("poor", "Safety incidents reported", 0),
        ],
    },
    Criterion {
        id: "community_engagement",
        category: Category::Social,
        question: "How does your organization engage with local communities?",
        kind: CriterionKind::Multi,
        options: &[
            opt!("investment", "Community investment programs", 3),
            opt!("volunteering", "Employee volunteering", 2),
            opt!("partnerships", "Local partnerships", 2),
            opt!("education", "Education support", 3),
        ],
    },
    Criterion {
        id: "fair_wages",
        category: Category::Social,
        question: "How do your wages compare to the living wage?",
        kind: CriterionKind::Radio,
        options: &[
            opt!("living_wage_certified", "Living wage certified", 10),
            opt!("above_market", "Above market rate", 7),
            opt!("market_rate", "At market rate", 4),
            opt!("below_market", "Below market rate", 0),
        ],
    },
    Criterion {
        id: "supply_chain_labor",
        category: Category::Social,
        question: "How do you manage labor standards in your supply chain?",
        kind: CriterionKind::Radio,
        options: &[
            opt!("audited", "Independent audits of suppliers", 10),
            opt!("code_of_conduct", "Supplier code of conduct", 7),
            opt!("self_assessment", "Supplier self-assessments", 4),
            opt!("none", "No oversight", 0),
        ],
    },
    Criterion {
        id: "customer_wellbeing",
        category: Category::Social,
        question: "How do you safeguard customer health and safety?",
        kind: CriterionKind::Radio,
        options: &[
            opt!("certified", "Certified product safety management", 10),
            opt!("programs", "Formal safety programs", 7),
            opt!("basic", "Basic compliance", 4),
            opt!("none", "No formal measures", 0),
        ],
    },
    Criterion {
        id: "local_hiring",
        category: Category::Social,
        question: "What share of your workforce is hired locally?",
        kind: CriterionKind::Radio,
        options: &[
            opt!("majority_local", "More than 75% local", 10),
            opt!("significant", "50-75% local", 7),
            opt!("some", "25-50% local", 4),
            opt!("minimal", "Less than 25% local", 0),
        ],
    },
    Criterion {
        id: "grievance_mechanism",
        category: Category::Social,
        question: "What grievance mechanisms are available to employees?",
        kind: CriterionKind::Multi,
        options: &[
            opt!("hotline", "Dedicated hotline", 3),
            opt!("anonymous_reporting", "Anonymous reporting channel", 3),
            opt!("non_retaliation", "Non-retaliation policy", 2),
            opt!("tracking", "Case tracking and resolution", 2),
        ],
    },
];

const GOVERNANCE: &[Criterion] = &[
    Criterion {
        id: "board_composition",
        category: Category::Governance,
        question: "What is your board composition and independence?",
        kind: CriterionKind::Radio,
        options: &[
            opt!("majority_independent", "Majority independent directors", 10),
            opt!("one_third_independent", "At least 1/3 independent directors", 7),
            opt!("some_independent", "Some independent directors", 4),
            opt!("no_independent", "No independent directors", 0),
        ],
    },
    Criterion {
        id: "anti_corruption",
        category: Category::Governance,
        question: "What anti-corruption measures do you have in place?",
        kind: CriterionKind::Multi,
        options: &[
            opt!("policy", "Anti-corruption policy", 2),
            opt!("training", "Regular training programs", 2),
            opt!("whistleblowing", "Whistleblowing mechanism", 3),
            opt!("due_diligence", "Third-party due diligence", 3),
        ],
    },
    Criterion {
        id: "risk_management",
        category: Category::Governance,
        question: "How comprehensive is your risk management framework?",
        kind: CriterionKind::Radio,
        options: &[
            opt!("comprehensive", "Comprehensive framework with regular review", 10),
            opt!("established", "Established framework", 7),
            opt!("basic", "Basic risk identification", 4),
            opt!("none", "No formal framework", 0),
        ],
    },
    Criterion {
        id: "transparency",
        category: Category::Governance,
        question: "How do you ensure transparency and disclosure?",
        kind: CriterionKind::Multi,
        options: &[
            opt!("annual_report", "Comprehensive annual reporting", 2),
            opt!("sustainability_report", "Sustainability reporting", 3),
            opt!("stakeholder_engagement", "Regular stakeholder engagement", 2),
            opt!("website_disclosure", "Website transparency", 2),
            opt!("third_party_assurance", "Third-party assurance", 1),
        ],
    },
    Criterion {
        id: "data_privacy",
        category: Category::Governance,
        question: "What data privacy and protection measures do you have?",
        kind: CriterionKind::Radio,
        options: &[
            opt!("comprehensive", "Comprehensive PDPA compliance program", 10),
            opt!("policies", "Data protection policies in place", 7),
            opt!("basic", "Basic data handling procedures", 4),
            opt!("none", "No formal data protection", 0),
        ],
    },
    Criterion {
        id: "esg_oversight",
        category: Category::Governance,
        question: "Who is accountable for ESG within your organization?",
        kind: CriterionKind::Radio,
        options: &[
            opt!("board_committee", "Dedicated board committee", 10),
            opt!("executive_owner", "Named executive owner", 7),
            opt!("informal", "Informal ownership", 4),
            opt!("none", "No accountability", 0),
        ],
    },
    Criterion {
        id: "executive_compensation",
        category: Category::Governance,
        question: "Is executive compensation linked to ESG outcomes?",
        kind: CriterionKind::Radio,
        options: &[
            opt!("esg_linked", "Directly linked to ESG targets", 10),
            opt!("partially_linked", "Partially linked", 6),
            opt!("disclosed", "Disclosed, not linked", 3),
            opt!("none", "Not disclosed", 0),
        ],
    },
    Criterion {
        id: "shareholder_rights",
        category: Category::Governance,
        question: "How are shareholder rights structured?",
        kind: CriterionKind::Radio,
        options: &[
            opt!("one_share_one_vote", "One share, one vote", 10),
            opt!("mostly_equal", "Mostly equal voting rights", 6),
            opt!("limited", "Limited minority protections", 3),
            opt!("none", "No minority protections", 0),
        ],
    },
    Criterion {
        id: "code_of_conduct",
        category: Category::Governance,
        question: "Does your organization maintain a code of conduct?",
        kind: CriterionKind::Radio,
        options: &[
            opt!("enforced_training", "Published, enforced, with training", 10),
            opt!("published", "Published", 7),
            opt!("draft", "In draft", 3),
            opt!("none", "No code", 0),
        ],
    },
    Criterion {
        id: "tax_transparency",
        category: Category::Governance,
        question: "What is your approach to tax transparency?",
        kind: CriterionKind::Radio,
        options: &[
            opt!("country_by_country", "Country-by-country reporting", 10),
            opt!("policy_published", "Tax policy published", 6),
            opt!("compliant", "Compliant, no disclosure", 3),
            opt!("none", "No formal approach", 0),
        ],
    },
];

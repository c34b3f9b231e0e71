use super::domain::{ArrangementRecommendation, MatchingPreferences};
use crate::assessment::{CoreValue, ValueProfile};
use crate::vocations::{VocationOption, WorkArrangement};

const BASE_SUITABILITY: f64 = 70.0;
const DEFAULT_REASONING: &str = "Standard compatibility for this arrangement.";

struct ArrangementRule {
    value: CoreValue,
    arrangements: &'static [WorkArrangement],
    adjustment: f64,
    reason: &'static str,
}

const RULES: &[ArrangementRule] = &[
    ArrangementRule {
        value: CoreValue::Autonomy,
        arrangements: &[
            WorkArrangement::Freelancer,
            WorkArrangement::Entrepreneur,
            WorkArrangement::Solopreneur,
        ],
        adjustment: 20.0,
        reason: "High autonomy match.",
    },
    ArrangementRule {
        value: CoreValue::Balance,
        arrangements: &[
            WorkArrangement::PartTimeMulti,
            WorkArrangement::RemoteEmployee,
            WorkArrangement::SeasonalWork,
        ],
        adjustment: 15.0,
        reason: "Supports work-life balance.",
    },
    ArrangementRule {
        value: CoreValue::Security,
        arrangements: &[
            WorkArrangement::TraditionalEmployee,
            WorkArrangement::HybridEmployee,
        ],
        adjustment: 10.0,
        reason: "Provides more security.",
    },
    ArrangementRule {
        value: CoreValue::Security,
        arrangements: &[WorkArrangement::Entrepreneur, WorkArrangement::Freelancer],
        adjustment: -15.0,
        reason: "Lower security than desired.",
    },
    ArrangementRule {
        value: CoreValue::Variety,
        arrangements: &[
            WorkArrangement::PortfolioCareer,
            WorkArrangement::DigitalNomad,
            WorkArrangement::ProjectBased,
        ],
        adjustment: 15.0,
        reason: "Offers variety and change.",
    },
];

const PREFERENCE_BONUS: f64 = 10.0;
const PREFERENCE_REASON: &str = "Matches stated preference.";

pub(crate) fn rank_arrangements(
    vocation: &VocationOption,
    profile: &ValueProfile,
    preferences: Option<&MatchingPreferences>,
) -> Vec<ArrangementRecommendation> {
    let mut ranked: Vec<ArrangementRecommendation> = vocation
        .arrangements
        .iter()
        .map(|&arrangement| score_arrangement(arrangement, profile, preferences))
        .collect();

    ranked.sort_by(|a, b| b.suitability_score.total_cmp(&a.suitability_score));
    ranked
}

fn score_arrangement(
    arrangement: WorkArrangement,
    profile: &ValueProfile,
    preferences: Option<&MatchingPreferences>,
) -> ArrangementRecommendation {
    let mut score = BASE_SUITABILITY;
    let mut reasons = Vec::new();

    for rule in RULES {
        if profile.is_dominant(rule.value) && rule.arrangements.contains(&arrangement) {
            score += rule.adjustment;
            reasons.push(rule.reason);
        }
    }

    if preferences.is_some_and(|preferences| preferences.prefers(arrangement)) {
        score += PREFERENCE_BONUS;
        reasons.push(PREFERENCE_REASON);
    }

    let reasoning = if reasons.is_empty() {
        DEFAULT_REASONING.to_string()
    } else {
        reasons.join(" ")
    };

    ArrangementRecommendation {
        arrangement,
        suitability_score: score.clamp(0.0, 100.0),
        reasoning,
    }
}

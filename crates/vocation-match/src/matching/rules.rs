use super::domain::{ConflictArea, MatchingPreferences, RiskTolerance, ValueMatch};
use crate::assessment::{CoreValue, ValueProfile, CONFLICT_PERCENTAGE_FLOOR, DOMINANT_VALUE_COUNT};
use crate::vocations::VocationOption;

const PRIMARY_SUPPORT: f64 = 90.0;
const SECONDARY_SUPPORT: f64 = 60.0;
const CONFLICTING_SUPPORT: f64 = 10.0;
const NEUTRAL_SUPPORT: f64 = 40.0;

const IMPORTANCE_WEIGHT: f64 = 0.6;
const SUPPORT_WEIGHT: f64 = 0.4;

const DOMINANT_WEIGHT: f64 = 0.6;
const SECONDARY_WEIGHT: f64 = 0.25;
const LIBERATION_WEIGHT: f64 = 0.1;
const REALITY_WEIGHT: f64 = 0.05;
const SECONDARY_DEFAULT: f64 = 50.0;

const MISSING_ARRANGEMENT_FACTOR: f64 = 0.8;
const LOW_INCOME_FACTOR: f64 = 0.7;
const LOW_RISK_FACTOR: f64 = 0.6;
const HIGH_DIFFICULTY: u8 = 8;

fn vocation_support(vocation: &VocationOption, value: CoreValue) -> f64 {
    if vocation.primary_values.contains(&value) {
        PRIMARY_SUPPORT
    } else if vocation.secondary_values.contains(&value) {
        SECONDARY_SUPPORT
    } else if vocation.conflicting_values.contains(&value) {
        CONFLICTING_SUPPORT
    } else {
        NEUTRAL_SUPPORT
    }
}

/// One entry per profile value, in profile rank order.
pub(crate) fn value_matches(vocation: &VocationOption, profile: &ValueProfile) -> Vec<ValueMatch> {
    profile
        .core_values
        .iter()
        .map(|entry| {
            let importance = entry.percentage;
            let vocation_support = vocation_support(vocation, entry.value);
            ValueMatch {
                value: entry.value,
                importance,
                vocation_support,
                alignment: importance * IMPORTANCE_WEIGHT + vocation_support * SUPPORT_WEIGHT,
            }
        })
        .collect()
}

pub(crate) fn conflict_areas(vocation: &VocationOption, profile: &ValueProfile) -> Vec<ConflictArea> {
    let mut conflicts: Vec<ConflictArea> = profile
        .core_values
        .iter()
        .filter(|entry| {
            entry.percentage >= CONFLICT_PERCENTAGE_FLOOR
                && vocation.conflicting_values.contains(&entry.value)
        })
        .map(|entry| ConflictArea {
            value: entry.value,
            conflict_severity: entry.percentage,
            description: conflict_description(entry.value, vocation.title),
        })
        .collect();

    conflicts.sort_by(|a, b| b.conflict_severity.total_cmp(&a.conflict_severity));
    conflicts
}

fn conflict_description(value: CoreValue, title: &str) -> String {
    match value {
        CoreValue::Autonomy => format!(
            "{title} may involve client dependencies or market constraints that limit complete autonomy"
        ),
        CoreValue::Creativity => {
            format!("{title} might have limited opportunities for creative expression")
        }
        CoreValue::Impact => {
            format!("{title} may not provide the level of social impact you're seeking")
        }
        CoreValue::Growth => {
            format!("{title} could have limited learning and development opportunities")
        }
        CoreValue::Security => {
            format!("{title} involves financial uncertainty and irregular income")
        }
        CoreValue::Balance => format!("{title} may require long hours or high stress periods"),
        CoreValue::Connection => {
            format!("{title} might involve significant solo work with limited collaboration")
        }
        CoreValue::Recognition => {
            format!("{title} may not provide the professional recognition you value")
        }
        CoreValue::Challenge => {
            format!("{title} might not offer sufficient intellectual stimulation")
        }
        CoreValue::Service => format!("{title} may have limited direct service to others"),
        CoreValue::Authenticity => {
            format!("{title} might require compromising on personal values")
        }
        CoreValue::Mastery => {
            format!("{title} may have limited opportunities for deep skill development")
        }
        CoreValue::Variety => format!("{title} could involve repetitive or routine work"),
        CoreValue::Leadership => format!("{title} might not provide leadership opportunities"),
        CoreValue::Adventure => format!("{title} may offer limited excitement or risk"),
        CoreValue::Spirituality => {
            format!("{title} might not connect to higher purpose or meaning")
        }
        CoreValue::Justice => {
            format!("{title} may not contribute to social justice or fairness")
        }
        CoreValue::Beauty => {
            format!("{title} might have limited aesthetic or artistic elements")
        }
        CoreValue::Knowledge => {
            format!("{title} may not involve significant intellectual pursuit")
        }
        CoreValue::Family => format!("{title} could conflict with family time and priorities"),
    }
}

fn conflict_penalty(conflicts: &[ConflictArea]) -> f64 {
    conflicts
        .iter()
        .map(|conflict| {
            if conflict.conflict_severity >= 80.0 {
                15.0
            } else if conflict.conflict_severity >= 60.0 {
                10.0
            } else {
                5.0
            }
        })
        .sum()
}

/// Composite 0-100 score.
///
/// The dominant-value component always divides by five, even when fewer
/// dominant values are present; existing scores depend on that arithmetic.
pub(crate) fn overall_alignment(
    vocation: &VocationOption,
    profile: &ValueProfile,
    matches: &[ValueMatch],
    conflicts: &[ConflictArea],
    preferences: Option<&MatchingPreferences>,
) -> f64 {
    let dominant_total: f64 = matches
        .iter()
        .filter(|entry| profile.is_dominant(entry.value))
        .take(DOMINANT_VALUE_COUNT)
        .map(|entry| entry.alignment)
        .sum();
    let mut score = dominant_total / DOMINANT_VALUE_COUNT as f64 * DOMINANT_WEIGHT;

    let secondary: Vec<f64> = matches
        .iter()
        .filter(|entry| !profile.is_dominant(entry.value))
        .map(|entry| entry.alignment)
        .collect();
    let secondary_score = if secondary.is_empty() {
        SECONDARY_DEFAULT
    } else {
        secondary.iter().sum::<f64>() / secondary.len() as f64
    };
    score += secondary_score * SECONDARY_WEIGHT;

    let potential = &vocation.liberation_potential;
    let liberation_score = f64::from(
        potential.autonomy_level + potential.flexibility_level + potential.growth_ceiling,
    ) / 3.0
        * 10.0;
    score += liberation_score * LIBERATION_WEIGHT;

    let difficulty = vocation.reality_check.difficulty_level;
    let reality_score = (10.0 - f64::from(difficulty)) * 10.0;
    score += reality_score * REALITY_WEIGHT;

    score = (score - conflict_penalty(conflicts)).max(0.0);

    if let Some(preferences) = preferences {
        if let Some(preferred) = &preferences.preferred_arrangements {
            let offers_preferred = vocation
                .arrangements
                .iter()
                .any(|arrangement| preferred.contains(arrangement));
            if !offers_preferred {
                score *= MISSING_ARRANGEMENT_FACTOR;
            }
        }

        if preferences.prioritize_income && vocation.reality_check.income_range.is_low_floor() {
            score *= LOW_INCOME_FACTOR;
        }

        if preferences.risk_tolerance == Some(RiskTolerance::Low) && difficulty >= HIGH_DIFFICULTY
        {
            score *= LOW_RISK_FACTOR;
        }
    }

    score.clamp(0.0, 100.0)
}

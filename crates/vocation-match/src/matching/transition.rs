use super::domain::{RiskLevel, TransitionDifficulty, TransitionStrategy};
use crate::assessment::{CoreValue, ValueProfile};
use crate::vocations::VocationOption;

const EMERGENCY_FUND_STEP: &str = "Build 6-12 month emergency fund before transition";
const CLARIFY_VALUES_STEP: &str = "Clarify values and ensure strong alignment before committing";
const SKILL_GAP_COUNT: usize = 3;

pub(crate) fn plan_transition(
    vocation: &VocationOption,
    profile: &ValueProfile,
    alignment_score: f64,
) -> TransitionStrategy {
    let reality = &vocation.reality_check;

    let difficulty = match reality.difficulty_level {
        level if level <= 4 && alignment_score >= 70.0 => TransitionDifficulty::Easy,
        level if level <= 6 && alignment_score >= 60.0 => TransitionDifficulty::Moderate,
        level if level <= 8 => TransitionDifficulty::Challenging,
        _ => TransitionDifficulty::Difficult,
    };

    let mut key_steps: Vec<String> = Vec::new();
    if profile.authenticity_score < 50.0 {
        key_steps.push(CLARIFY_VALUES_STEP.to_string());
    }
    if profile.is_dominant(CoreValue::Security) {
        key_steps.push(EMERGENCY_FUND_STEP.to_string());
    }
    if let Some(pathway) = vocation.pathways.first() {
        key_steps.extend(pathway.steps.iter().map(|step| step.to_string()));
    }

    // Placeholder until skills are collected from the user.
    let skill_gaps = vocation
        .skills_required
        .iter()
        .take(SKILL_GAP_COUNT)
        .copied()
        .collect();

    let risk_level = match vocation.liberation_potential.income_stability {
        stability if stability >= 7 => RiskLevel::Low,
        stability if stability >= 5 => RiskLevel::Medium,
        _ => RiskLevel::High,
    };

    TransitionStrategy {
        difficulty,
        timeframe: reality.time_to_viability,
        key_steps,
        skill_gaps,
        risk_level,
    }
}

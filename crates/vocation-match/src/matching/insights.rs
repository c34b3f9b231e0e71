use super::domain::{ExplorationSuggestion, MatchingInsights, TransitionDifficulty, VocationMatch};
use crate::assessment::{generate_value_insights, CoreValue, ValueProfile};
use crate::vocations::VocationCategory;

const CATEGORY_SAMPLE: usize = 5;
const HIGH_AUTONOMY_LEVEL: u8 = 8;
const HIGH_DIFFICULTY_LEVEL: u8 = 8;

pub(crate) fn summarize_matches(
    profile: &ValueProfile,
    top_matches: &[VocationMatch],
) -> MatchingInsights {
    let basic = generate_value_insights(profile);

    let mean_alignment = if top_matches.is_empty() {
        0.0
    } else {
        top_matches
            .iter()
            .map(|entry| entry.alignment_score)
            .sum::<f64>()
            / top_matches.len() as f64
    };

    let value_alignment = if mean_alignment >= 75.0 {
        "Excellent values alignment with multiple career paths. Your authentic self has strong market opportunities."
    } else if mean_alignment >= 60.0 {
        "Good values alignment with several options. Some compromise may be needed but authentic paths exist."
    } else if mean_alignment >= 45.0 {
        "Moderate alignment found. Consider values clarification or skill development to improve options."
    } else {
        "Limited alignment with current options. Deep values work or significant skill development may be needed."
    };

    let mut career_themes = basic.career_themes;
    if let Some(category) = dominant_category(top_matches) {
        career_themes.push(format!("Strong fit for {} sector", category.label()));
    }

    let mut strength_areas = basic.top_strengths;
    if top_matches
        .iter()
        .any(|entry| entry.vocation.liberation_potential.autonomy_level >= HIGH_AUTONOMY_LEVEL)
    {
        strength_areas.push("High autonomy potential in top matches".to_string());
    }

    let mut caution_areas = basic.potential_challenges;
    if top_matches
        .iter()
        .any(|entry| entry.vocation.reality_check.difficulty_level >= HIGH_DIFFICULTY_LEVEL)
    {
        caution_areas.push("Some top matches require significant skill development".to_string());
    }

    let mut recommendations = basic.recommendations;
    if let Some(top) = top_matches.first() {
        recommendations.push(format!(
            "Consider exploring: {} ({:.0}% match)",
            top.vocation.title, top.alignment_score
        ));
        if top.transition_strategy.difficulty == TransitionDifficulty::Easy {
            recommendations.push(
                "You have accessible transition options - consider taking action soon".to_string(),
            );
        } else {
            recommendations.push(
                "Top matches require preparation - start building relevant skills now".to_string(),
            );
        }
    }

    MatchingInsights {
        value_alignment: value_alignment.to_string(),
        career_themes,
        strength_areas,
        caution_areas,
        recommendations,
    }
}

/// Most frequent category among the leading matches; ties go to the first seen.
fn dominant_category(top_matches: &[VocationMatch]) -> Option<VocationCategory> {
    let mut counts: Vec<(VocationCategory, usize)> = Vec::new();
    for entry in top_matches.iter().take(CATEGORY_SAMPLE) {
        let category = entry.vocation.category;
        match counts.iter_mut().find(|(seen, _)| *seen == category) {
            Some((_, count)) => *count += 1,
            None => counts.push((category, 1)),
        }
    }

    let mut best: Option<(VocationCategory, usize)> = None;
    for (category, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((category, count));
        }
    }
    best.map(|(category, _)| category)
}

pub(crate) fn suggest_exploration(
    profile: &ValueProfile,
    top_matches: &[VocationMatch],
) -> Vec<ExplorationSuggestion> {
    let mut suggestions = Vec::new();

    if let Some(top) = top_matches.first() {
        suggestions.push(ExplorationSuggestion {
            action: format!("Conduct informational interviews with {}s", top.vocation.title),
            purpose: "Validate assumptions and understand day-to-day reality",
            timeframe: "This month",
        });
        suggestions.push(ExplorationSuggestion {
            action: format!("Start a small experiment in {}", top.vocation.category.label()),
            purpose: "Test your interest and aptitude before full commitment",
            timeframe: "Next 3 months",
        });
        if let Some(gap) = top.transition_strategy.skill_gaps.first() {
            suggestions.push(ExplorationSuggestion {
                action: format!("Begin learning: {gap}"),
                purpose: "Close critical skill gap for your top career match",
                timeframe: "Next 6 months",
            });
        }
    }

    if profile.authenticity_score < 60.0 {
        suggestions.push(ExplorationSuggestion {
            action: "Complete a deeper values clarification exercise".to_string(),
            purpose: "Improve self-understanding before making major career decisions",
            timeframe: "This month",
        });
    }

    if profile.is_dominant(CoreValue::Autonomy) {
        suggestions.push(ExplorationSuggestion {
            action: "Join local entrepreneur or freelancer meetups".to_string(),
            purpose: "Build network and learn from others on similar paths",
            timeframe: "Ongoing",
        });
    }

    suggestions
}

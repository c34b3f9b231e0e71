use super::common::*;
use crate::assessment::{calculate_value_profile, CoreValue};
use crate::matching::{
    match_vocations_to_values, MatchingConfig, MatchingPreferences, RiskLevel, RiskTolerance,
    TransitionDifficulty, VocationMatcher,
};
use crate::vocations::{find_vocation, vocation_catalog, WorkArrangement};

fn vocation(id: &str) -> &'static crate::vocations::VocationOption {
    find_vocation(id).expect("vocation in catalog")
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn independent_builder_ranks_freelance_technology_first() {
    let result = matcher().run(&independent_profile(), None);

    let ids: Vec<&str> = result
        .top_matches
        .iter()
        .map(|entry| entry.vocation.id)
        .collect();
    assert_eq!(
        &ids[..3],
        &[
            "software_developer_freelance",
            "ux_designer_consultant",
            "real_estate_investor"
        ]
    );
    assert_close(result.top_matches[0].alignment_score, 71.96);
    assert_close(result.top_matches[1].alignment_score, 68.593);
    assert_eq!(result.top_matches.len(), 10);
    assert!(!ids.contains(&"life_coach"));
}

#[test]
fn matches_are_sorted_and_above_threshold() {
    let result = matcher().run(&independent_profile(), None);

    for pair in result.top_matches.windows(2) {
        assert!(pair[0].alignment_score >= pair[1].alignment_score);
    }
    assert!(result
        .top_matches
        .iter()
        .all(|entry| entry.alignment_score >= 40.0));
}

#[test]
fn empty_profile_produces_no_matches() {
    let result = matcher().run(&empty_profile(), None);

    assert!(result.top_matches.is_empty());
}

#[test]
fn scores_stay_within_bounds_for_saturated_profile() {
    let levels: Vec<(CoreValue, u8)> = CoreValue::ordered()
        .into_iter()
        .map(|value| (value, 5))
        .collect();
    let profile = calculate_value_profile(&answered(&levels));

    for vocation in vocation_catalog() {
        let scored = matcher().score_vocation(vocation, &profile, None);
        assert!((0.0..=100.0).contains(&scored.alignment_score));
        assert_eq!(scored.value_matches.len(), CoreValue::COUNT);
    }
}

#[test]
fn value_matches_reflect_vocation_support() {
    let profile = independent_profile();
    let scored = matcher().score_vocation(vocation("software_developer_freelance"), &profile, None);

    let support = |value: CoreValue| {
        scored
            .value_matches
            .iter()
            .find(|entry| entry.value == value)
            .map(|entry| entry.vocation_support)
    };
    assert_eq!(support(CoreValue::Autonomy), Some(90.0));
    assert_eq!(support(CoreValue::Growth), Some(60.0));
    assert_eq!(support(CoreValue::Security), Some(10.0));
    assert_eq!(support(CoreValue::Impact), Some(40.0));

    let autonomy = &scored.value_matches[0];
    assert_eq!(autonomy.value, CoreValue::Autonomy);
    assert_close(autonomy.alignment, 100.0 * 0.6 + 90.0 * 0.4);
}

#[test]
fn strong_conflicting_values_are_reported_and_penalized() {
    let profile = security_minded_profile();
    let scored = matcher().score_vocation(vocation("software_developer_freelance"), &profile, None);

    assert_eq!(scored.conflict_areas.len(), 1);
    let conflict = &scored.conflict_areas[0];
    assert_eq!(conflict.value, CoreValue::Security);
    assert_eq!(conflict.conflict_severity, 100.0);
    assert_eq!(
        conflict.description,
        "Freelance Software Developer involves financial uncertainty and irregular income"
    );
}

#[test]
fn low_risk_tolerance_discounts_difficult_vocations() {
    let profile = independent_profile();
    let content_creator = vocation("content_creator");
    let cautious = MatchingPreferences {
        risk_tolerance: Some(RiskTolerance::Low),
        ..MatchingPreferences::default()
    };
    let bold = MatchingPreferences {
        risk_tolerance: Some(RiskTolerance::High),
        ..MatchingPreferences::default()
    };

    let low = matcher().score_vocation(content_creator, &profile, Some(&cautious));
    let high = matcher().score_vocation(content_creator, &profile, Some(&bold));

    assert!((low.alignment_score - high.alignment_score * 0.6).abs() < 1e-9);

    let developer = vocation("software_developer_freelance");
    let unaffected = matcher().score_vocation(developer, &profile, Some(&cautious));
    assert_close(unaffected.alignment_score, 71.96);
}

#[test]
fn prioritizing_income_discounts_low_floor_vocations() {
    let profile = independent_profile();
    let preferences = MatchingPreferences {
        prioritize_income: true,
        ..MatchingPreferences::default()
    };

    let creator = matcher().score_vocation(vocation("content_creator"), &profile, Some(&preferences));
    let developer = matcher().score_vocation(
        vocation("software_developer_freelance"),
        &profile,
        Some(&preferences),
    );

    assert_close(creator.alignment_score, 47.385);
    assert_close(developer.alignment_score, 71.96);
}

#[test]
fn unmet_arrangement_preference_discounts_every_vocation() {
    let profile = independent_profile();
    let preferences = MatchingPreferences {
        preferred_arrangements: Some(vec![WorkArrangement::TraditionalEmployee]),
        ..MatchingPreferences::default()
    };

    for vocation in vocation_catalog() {
        let plain = matcher().score_vocation(vocation, &profile, None);
        let constrained = matcher().score_vocation(vocation, &profile, Some(&preferences));
        assert!((constrained.alignment_score - plain.alignment_score * 0.8).abs() < 1e-9);
    }
}

#[test]
fn avoided_categories_do_not_change_scores() {
    let profile = independent_profile();
    let preferences = MatchingPreferences {
        avoid_categories: Some(vec![crate::vocations::VocationCategory::Technology]),
        ..MatchingPreferences::default()
    };

    let plain = matcher().run(&profile, None);
    let avoided = matcher().run(&profile, Some(&preferences));

    assert_eq!(plain.top_matches.len(), avoided.top_matches.len());
    assert_eq!(
        plain.top_matches[0].alignment_score,
        avoided.top_matches[0].alignment_score
    );
}

#[test]
fn config_thresholds_limit_results() {
    let strict = VocationMatcher::new(MatchingConfig {
        minimum_alignment: 65.0,
        max_matches: 3,
    });

    let result = strict.run(&independent_profile(), None);

    assert_eq!(result.top_matches.len(), 3);
    assert!(result
        .top_matches
        .iter()
        .all(|entry| entry.alignment_score >= 65.0));
}

#[test]
fn free_function_uses_default_thresholds() {
    let profile = independent_profile();

    let first = match_vocations_to_values(&profile, None);
    let second = match_vocations_to_values(&profile, None);

    assert_eq!(first, second);
    assert_eq!(first.user_profile, profile);
}

#[test]
fn transition_plan_follows_first_pathway() {
    let profile = independent_profile();
    let developer = vocation("software_developer_freelance");

    let scored = matcher().score_vocation(developer, &profile, None);
    let plan = &scored.transition_strategy;

    assert_eq!(plan.difficulty, TransitionDifficulty::Moderate);
    assert_eq!(plan.timeframe, "6-18 months");
    assert_eq!(plan.key_steps.len(), developer.pathways[0].steps.len());
    assert_eq!(plan.key_steps[0], developer.pathways[0].steps[0]);
    assert_eq!(
        plan.skill_gaps,
        vec![
            "Programming languages",
            "Software architecture",
            "Problem-solving"
        ]
    );
    assert_eq!(plan.risk_level, RiskLevel::Medium);
}

#[test]
fn transition_difficulty_and_risk_follow_reality_check() {
    let profile = independent_profile();

    let social = matcher().score_vocation(vocation("social_entrepreneur"), &profile, None);
    let creator = matcher().score_vocation(vocation("content_creator"), &profile, None);
    let consultant = matcher().score_vocation(vocation("business_consultant"), &profile, None);

    assert_eq!(
        social.transition_strategy.difficulty,
        TransitionDifficulty::Difficult
    );
    assert_eq!(
        creator.transition_strategy.difficulty,
        TransitionDifficulty::Challenging
    );
    assert_eq!(creator.transition_strategy.risk_level, RiskLevel::High);
    assert_eq!(consultant.transition_strategy.risk_level, RiskLevel::Low);
}

#[test]
fn transition_prepends_preparation_steps() {
    let mut profile = security_minded_profile();
    let developer = vocation("software_developer_freelance");

    let scored = matcher().score_vocation(developer, &profile, None);
    assert_eq!(
        scored.transition_strategy.key_steps[0],
        "Build 6-12 month emergency fund before transition"
    );

    profile.authenticity_score = 40.0;
    let scored = matcher().score_vocation(developer, &profile, None);
    let steps = &scored.transition_strategy.key_steps;
    assert_eq!(
        steps[0],
        "Clarify values and ensure strong alignment before committing"
    );
    assert_eq!(steps[1], "Build 6-12 month emergency fund before transition");
    assert_eq!(steps[2], developer.pathways[0].steps[0]);
}

#[test]
fn dominant_component_divides_by_five_for_short_lists() {
    let mut profile = independent_profile();
    profile.dominant_values.truncate(2);

    let scored = matcher().score_vocation(vocation("software_developer_freelance"), &profile, None);

    let secondary: Vec<f64> = scored
        .value_matches
        .iter()
        .filter(|entry| !profile.is_dominant(entry.value))
        .map(|entry| entry.alignment)
        .collect();
    assert_eq!(secondary.len(), 18);
    let secondary_mean = secondary.iter().sum::<f64>() / secondary.len() as f64;
    let expected =
        (96.0 + 96.0) / 5.0 * 0.6 + secondary_mean * 0.25 + (28.0 / 3.0) + 2.0;

    assert!((scored.alignment_score - expected).abs() < 1e-9);
    assert_close(scored.alignment_score, 41.929);
}

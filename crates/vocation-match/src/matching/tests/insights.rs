use super::common::*;

#[test]
fn summarizes_independent_builder_matches() {
    let result = matcher().run(&independent_profile(), None);
    let insights = &result.insights;

    assert!(insights.value_alignment.starts_with("Good values alignment"));
    assert!(insights
        .career_themes
        .contains(&"Strong fit for technology sector".to_string()));
    assert!(insights
        .strength_areas
        .contains(&"High autonomy potential in top matches".to_string()));
    assert!(insights
        .caution_areas
        .contains(&"Some top matches require significant skill development".to_string()));

    let tail = &insights.recommendations[insights.recommendations.len() - 2..];
    assert_eq!(
        tail,
        &[
            "Consider exploring: Freelance Software Developer (72% match)".to_string(),
            "Top matches require preparation - start building relevant skills now".to_string(),
        ]
    );
}

#[test]
fn exploration_suggestions_target_top_match() {
    let result = matcher().run(&independent_profile(), None);

    let actions: Vec<&str> = result
        .exploration_suggestions
        .iter()
        .map(|suggestion| suggestion.action.as_str())
        .collect();

    assert_eq!(
        actions,
        vec![
            "Conduct informational interviews with Freelance Software Developers",
            "Start a small experiment in technology",
            "Begin learning: Programming languages",
            "Complete a deeper values clarification exercise",
            "Join local entrepreneur or freelancer meetups",
        ]
    );
    assert_eq!(result.exploration_suggestions[2].timeframe, "Next 6 months");
}

#[test]
fn empty_results_still_offer_guidance() {
    let result = matcher().run(&empty_profile(), None);

    assert!(result.top_matches.is_empty());
    assert!(result
        .insights
        .value_alignment
        .starts_with("Limited alignment with current options"));
    assert!(!result
        .insights
        .career_themes
        .iter()
        .any(|theme| theme.starts_with("Strong fit for")));
    assert!(!result
        .insights
        .recommendations
        .iter()
        .any(|line| line.starts_with("Consider exploring")));

    let actions: Vec<&str> = result
        .exploration_suggestions
        .iter()
        .map(|suggestion| suggestion.action.as_str())
        .collect();
    assert_eq!(
        actions,
        vec![
            "Complete a deeper values clarification exercise",
            "Join local entrepreneur or freelancer meetups",
        ]
    );
}

#[test]
fn experiment_suggestion_uses_category_label() {
    let profile = independent_profile();
    let creator = crate::vocations::find_vocation("content_creator").expect("catalog entry");
    let top = matcher().score_vocation(creator, &profile, None);

    let suggestions = crate::matching::insights::suggest_exploration(&profile, &[top]);

    assert_eq!(
        suggestions[1].action,
        "Start a small experiment in creative arts"
    );
}

use super::domain::{
    CoreValue, ImportanceLevel, ValueAssessmentInputs, ValueConflict, ValueProfile, ValueScore,
};
use super::questions::find_question;
use super::tension::{tension_between, SIGNIFICANT_TENSION};
use std::collections::BTreeMap;
use tracing::debug;

pub const DOMINANT_VALUE_COUNT: usize = 5;

/// Both sides of a tension pair must score at least this to count as a conflict.
pub const CONFLICT_PERCENTAGE_FLOOR: f64 = 60.0;

const BASELINE_AUTHENTICITY: f64 = 50.0;
const ROLE_AUTHENTICITY: f64 = 65.0;

pub fn calculate_value_profile(inputs: &ValueAssessmentInputs) -> ValueProfile {
    let mut scores: BTreeMap<CoreValue, f64> = CoreValue::ordered()
        .into_iter()
        .map(|value| (value, 0.0))
        .collect();
    let mut max_scores = scores.clone();

    for response in &inputs.responses {
        let Some(question) = find_question(&response.question_id) else {
            debug!(question_id = %response.question_id, "skipping response for unknown question");
            continue;
        };

        let achieved = f64::from(response.importance) * question.weight;
        let possible = f64::from(ImportanceLevel::MAX_SCORE) * question.weight;
        *scores.entry(question.value).or_insert(0.0) += achieved;
        *max_scores.entry(question.value).or_insert(0.0) += possible;
    }

    let mut core_values: Vec<ValueScore> = CoreValue::ordered()
        .into_iter()
        .map(|value| {
            let score = scores.get(&value).copied().unwrap_or(0.0);
            let max = max_scores.get(&value).copied().unwrap_or(0.0);
            let percentage = if max > 0.0 {
                score / max * 100.0
            } else {
                0.0
            };
            ValueScore {
                value,
                score,
                percentage,
                rank: 0,
            }
        })
        .collect();

    // stable: ties stay in catalog order
    core_values.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    for (index, entry) in core_values.iter_mut().enumerate() {
        entry.rank = index + 1;
    }

    let dominant_values: Vec<CoreValue> = core_values
        .iter()
        .take(DOMINANT_VALUE_COUNT)
        .map(|entry| entry.value)
        .collect();

    let conflicting_values = identify_value_conflicts(&dominant_values, &core_values);
    let authenticity_score = authenticity_score(inputs);

    ValueProfile {
        core_values,
        value_distribution: scores,
        dominant_values,
        conflicting_values,
        authenticity_score,
    }
}

fn identify_value_conflicts(
    dominant_values: &[CoreValue],
    core_values: &[ValueScore],
) -> Vec<ValueConflict> {
    let percentage_of = |value: CoreValue| {
        core_values
            .iter()
            .find(|entry| entry.value == value)
            .map(|entry| entry.percentage)
            .unwrap_or(0.0)
    };

    let mut conflicts = Vec::new();
    for (index, &value1) in dominant_values.iter().enumerate() {
        for &value2 in &dominant_values[index + 1..] {
            let Some(tension_level) = tension_between(value1, value2) else {
                continue;
            };
            if tension_level < SIGNIFICANT_TENSION {
                continue;
            }
            if percentage_of(value1) >= CONFLICT_PERCENTAGE_FLOOR
                && percentage_of(value2) >= CONFLICT_PERCENTAGE_FLOOR
            {
                conflicts.push(ValueConflict {
                    value1,
                    value2,
                    tension_level,
                });
            }
        }
    }

    conflicts.sort_by(|a, b| b.tension_level.cmp(&a.tension_level));
    conflicts
}

/// Placeholder until current-role analysis exists: a known role and industry
/// lift the baseline, nothing else is inspected.
fn authenticity_score(inputs: &ValueAssessmentInputs) -> f64 {
    let provided = |field: &Option<String>| {
        field
            .as_deref()
            .map(|value| !value.is_empty())
            .unwrap_or(false)
    };

    if provided(&inputs.current_role) && provided(&inputs.industry) {
        ROLE_AUTHENTICITY
    } else {
        BASELINE_AUTHENTICITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::ValueResponse;
    use crate::assessment::questions::questions_for_value;

    fn answer_all(value: CoreValue, importance: u8) -> Vec<ValueResponse> {
        questions_for_value(value)
            .into_iter()
            .map(|question| ValueResponse::new(question.id, importance))
            .collect()
    }

    #[test]
    fn weighted_percentage_uses_question_weights() {
        let inputs = ValueAssessmentInputs::from_responses(vec![
            ValueResponse::new("autonomy_1", 5),
            ValueResponse::new("autonomy_2", 1),
        ]);

        let profile = calculate_value_profile(&inputs);
        let autonomy = &profile.core_values[0];

        assert_eq!(autonomy.value, CoreValue::Autonomy);
        assert!((autonomy.score - 7.0).abs() < 1e-9);
        // 7.0 of a possible 11.0
        assert!((autonomy.percentage - 700.0 / 11.0).abs() < 1e-9);
        assert_eq!(profile.value_distribution[&CoreValue::Autonomy], autonomy.score);
    }

    #[test]
    fn unknown_question_ids_are_ignored() {
        let mut responses = answer_all(CoreValue::Justice, 4);
        responses.push(ValueResponse::new("stability_1", 5));

        let profile = calculate_value_profile(&ValueAssessmentInputs::from_responses(responses));

        assert_eq!(profile.core_values[0].value, CoreValue::Justice);
        assert!((profile.core_values[0].percentage - 80.0).abs() < 1e-9);
        assert_eq!(profile.core_values.len(), CoreValue::COUNT);
    }

    #[test]
    fn conflicts_require_both_values_above_floor() {
        let mut responses = answer_all(CoreValue::Family, 5);
        responses.extend(answer_all(CoreValue::Adventure, 5));
        responses.extend(answer_all(CoreValue::Leadership, 4));
        responses.extend(answer_all(CoreValue::Challenge, 2));

        let profile = calculate_value_profile(&ValueAssessmentInputs::from_responses(responses));

        let pairs: Vec<(CoreValue, CoreValue, u8)> = profile
            .conflicting_values
            .iter()
            .map(|conflict| (conflict.value1, conflict.value2, conflict.tension_level))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (CoreValue::Adventure, CoreValue::Family, 9),
                (CoreValue::Family, CoreValue::Leadership, 8),
            ]
        );
    }

    #[test]
    fn authenticity_requires_role_and_industry() {
        let mut inputs = ValueAssessmentInputs {
            current_role: Some("Analyst".to_string()),
            ..ValueAssessmentInputs::default()
        };
        assert_eq!(calculate_value_profile(&inputs).authenticity_score, 50.0);

        inputs.industry = Some("Finance".to_string());
        assert_eq!(calculate_value_profile(&inputs).authenticity_score, 65.0);

        inputs.industry = Some(String::new());
        assert_eq!(calculate_value_profile(&inputs).authenticity_score, 50.0);
    }
}

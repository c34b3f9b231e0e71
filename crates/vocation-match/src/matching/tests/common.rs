use axum::response::Response;
use serde_json::Value;

use crate::assessment::{
    calculate_value_profile, questions_for_value, CoreValue, ValueAssessmentInputs, ValueProfile,
    ValueResponse,
};
use crate::matching::{MatchingConfig, VocationMatcher};

/// Answers every question for each listed value with the given importance.
pub(super) fn answered(levels: &[(CoreValue, u8)]) -> ValueAssessmentInputs {
    let responses = levels
        .iter()
        .flat_map(|&(value, importance)| {
            questions_for_value(value)
                .into_iter()
                .map(move |question| ValueResponse::new(question.id, importance))
        })
        .collect();
    ValueAssessmentInputs::from_responses(responses)
}

/// Independent builder: autonomy, creativity, challenge, growth, mastery high;
/// security, family, balance low.
pub(super) fn independent_profile() -> ValueProfile {
    calculate_value_profile(&answered(&[
        (CoreValue::Autonomy, 5),
        (CoreValue::Creativity, 5),
        (CoreValue::Challenge, 5),
        (CoreValue::Growth, 5),
        (CoreValue::Mastery, 5),
        (CoreValue::Security, 1),
        (CoreValue::Family, 1),
        (CoreValue::Balance, 1),
    ]))
}

pub(super) fn security_minded_profile() -> ValueProfile {
    calculate_value_profile(&answered(&[
        (CoreValue::Security, 5),
        (CoreValue::Autonomy, 5),
        (CoreValue::Balance, 5),
    ]))
}

pub(super) fn empty_profile() -> ValueProfile {
    calculate_value_profile(&ValueAssessmentInputs::default())
}

pub(super) fn matcher() -> VocationMatcher {
    VocationMatcher::new(MatchingConfig::default())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::domain::{MatchingPreferences, VocationMatchingResult};
use super::VocationMatcher;
use crate::assessment::{
    calculate_value_profile, generate_value_insights, get_assessment_questions, ImportanceLevel,
    ValueAssessmentInputs, ValueAssessmentQuestion, ValueInsights, ValueProfile,
};
use crate::error::AppError;
use crate::vocations::{
    filter_vocations, get_all_categories, get_all_work_arrangements, VocationCategory,
    VocationOption, WorkArrangement,
};

/// Body accepted by the match endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub profile: ValueProfile,
    #[serde(default)]
    pub preferences: Option<MatchingPreferences>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VocationFilter {
    pub category: Option<String>,
    pub arrangement: Option<String>,
}

/// Router builder exposing the questionnaire, catalog, and matching endpoints.
pub fn matching_router(matcher: Arc<VocationMatcher>) -> Router {
    Router::new()
        .route("/api/v1/questions", get(questions_handler))
        .route("/api/v1/vocations", get(vocations_handler))
        .route("/api/v1/vocations/categories", get(categories_handler))
        .route("/api/v1/vocations/arrangements", get(arrangements_handler))
        .route("/api/v1/profile", post(profile_handler))
        .route("/api/v1/profile/insights", post(insights_handler))
        .route("/api/v1/match", post(match_handler))
        .with_state(matcher)
}

pub(crate) async fn questions_handler() -> Json<&'static [ValueAssessmentQuestion]> {
    Json(get_assessment_questions())
}

pub(crate) async fn vocations_handler(
    Query(filter): Query<VocationFilter>,
) -> Result<Json<Vec<&'static VocationOption>>, AppError> {
    let category = filter
        .category
        .as_deref()
        .map(|raw| {
            VocationCategory::from_key(raw)
                .ok_or_else(|| AppError::InvalidRequest(format!("unknown category '{raw}'")))
        })
        .transpose()?;
    let arrangement = filter
        .arrangement
        .as_deref()
        .map(|raw| {
            WorkArrangement::from_key(raw)
                .ok_or_else(|| AppError::InvalidRequest(format!("unknown arrangement '{raw}'")))
        })
        .transpose()?;

    Ok(Json(filter_vocations(category, arrangement)))
}

pub(crate) async fn categories_handler() -> Json<Vec<VocationCategory>> {
    Json(get_all_categories())
}

pub(crate) async fn arrangements_handler() -> Json<Vec<WorkArrangement>> {
    Json(get_all_work_arrangements())
}

pub(crate) async fn profile_handler(
    Json(inputs): Json<ValueAssessmentInputs>,
) -> Result<Json<ValueProfile>, AppError> {
    if let Some(response) = inputs
        .responses
        .iter()
        .find(|response| ImportanceLevel::from_score(response.importance).is_none())
    {
        return Err(AppError::InvalidRequest(format!(
            "question {} has importance {}; expected 1-5",
            response.question_id, response.importance
        )));
    }

    Ok(Json(calculate_value_profile(&inputs)))
}

pub(crate) async fn insights_handler(Json(profile): Json<ValueProfile>) -> Json<ValueInsights> {
    Json(generate_value_insights(&profile))
}

pub(crate) async fn match_handler(
    State(matcher): State<Arc<VocationMatcher>>,
    Json(request): Json<MatchRequest>,
) -> Json<VocationMatchingResult> {
    Json(matcher.run(&request.profile, request.preferences.as_ref()))
}

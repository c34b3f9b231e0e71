//! Values questionnaire, weighted profile calculation, and profile-level insights.

pub mod domain;
pub mod import;
mod insights;
mod profile;
mod questions;
mod tension;

pub use domain::{
    CoreValue, ImportanceLevel, ValueAssessmentInputs, ValueAssessmentQuestion, ValueConflict,
    ValueInsights, ValueProfile, ValueResponse, ValueScore,
};
pub use import::{ResponseImportError, ResponseImporter};
pub use insights::generate_value_insights;
pub use profile::{calculate_value_profile, CONFLICT_PERCENTAGE_FLOOR, DOMINANT_VALUE_COUNT};
pub use questions::{
    find_question, get_assessment_questions, questions_for_value, VALUE_ASSESSMENT_QUESTIONS,
};
pub use tension::tension_between;

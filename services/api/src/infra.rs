use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use vocation_match::assessment::{CoreValue, ValueAssessmentInputs, ValueResponse};
use vocation_match::matching::RiskTolerance;
use vocation_match::vocations::{VocationCategory, WorkArrangement};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_arrangement(raw: &str) -> Result<WorkArrangement, String> {
    WorkArrangement::from_key(raw).ok_or_else(|| {
        let known: Vec<&str> = WorkArrangement::ordered()
            .into_iter()
            .map(WorkArrangement::key)
            .collect();
        format!("unknown arrangement '{raw}' (expected one of {})", known.join(", "))
    })
}

pub(crate) fn parse_category(raw: &str) -> Result<VocationCategory, String> {
    VocationCategory::from_key(raw).ok_or_else(|| {
        let known: Vec<&str> = VocationCategory::ordered()
            .into_iter()
            .map(VocationCategory::key)
            .collect();
        format!("unknown category '{raw}' (expected one of {})", known.join(", "))
    })
}

pub(crate) fn parse_risk_tolerance(raw: &str) -> Result<RiskTolerance, String> {
    RiskTolerance::from_key(raw)
        .ok_or_else(|| format!("unknown risk tolerance '{raw}' (expected low, medium, or high)"))
}

/// Sample answers for an independent builder who rates freedom and craft highly.
pub(crate) fn sample_assessment() -> ValueAssessmentInputs {
    let levels = [
        (CoreValue::Autonomy, 5),
        (CoreValue::Creativity, 5),
        (CoreValue::Challenge, 5),
        (CoreValue::Growth, 5),
        (CoreValue::Mastery, 4),
        (CoreValue::Impact, 3),
        (CoreValue::Variety, 3),
        (CoreValue::Security, 2),
        (CoreValue::Balance, 2),
        (CoreValue::Family, 1),
    ];
    let responses = levels
        .into_iter()
        .flat_map(|(value, importance)| {
            vocation_match::assessment::questions_for_value(value)
                .into_iter()
                .map(move |question| ValueResponse::new(question.id, importance))
        })
        .collect();

    ValueAssessmentInputs {
        responses,
        current_role: Some("Senior Software Engineer".to_string()),
        industry: Some("Financial Services".to_string()),
        years_experience: Some(9),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hyphenated_arrangement() {
        assert_eq!(
            parse_arrangement("digital-nomad"),
            Ok(WorkArrangement::DigitalNomad)
        );
        let err = parse_arrangement("astronaut").expect_err("unknown arrangement");
        assert!(err.contains("remote_employee"));
    }

    #[test]
    fn parses_category_and_risk() {
        assert_eq!(parse_category("Real_Estate"), Ok(VocationCategory::RealEstate));
        assert_eq!(parse_risk_tolerance("LOW"), Ok(RiskTolerance::Low));
        assert!(parse_risk_tolerance("reckless").is_err());
    }

    #[test]
    fn sample_assessment_covers_answered_values() {
        let inputs = sample_assessment();

        assert!(inputs.responses.iter().all(|response| (1..=5).contains(&response.importance)));
        assert!(inputs
            .responses
            .iter()
            .any(|response| response.question_id == "family_1"));
    }
}

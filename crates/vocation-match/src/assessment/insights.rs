use super::domain::{CoreValue, ValueInsights, ValueProfile};

/// Conflicts at or above this tension are surfaced as challenges.
const HIGH_TENSION: u8 = 7;

pub fn generate_value_insights(profile: &ValueProfile) -> ValueInsights {
    let dominant = |value: CoreValue| profile.is_dominant(value);
    let authenticity = profile.authenticity_score;

    let mut top_strengths = Vec::new();
    let mut potential_challenges = Vec::new();
    let mut career_themes = Vec::new();
    let mut recommendations = Vec::new();

    if dominant(CoreValue::Autonomy) {
        top_strengths.push("Strong drive for independence and self-direction".to_string());
        career_themes.push("Remote work, freelancing, or entrepreneurship".to_string());
        if dominant(CoreValue::Security) {
            potential_challenges
                .push("Tension between freedom and financial security".to_string());
        }
    }

    if dominant(CoreValue::Impact) {
        top_strengths.push("Mission-driven approach to work and life".to_string());
        career_themes.push("Social impact, non-profit, or purpose-driven companies".to_string());
    }

    if dominant(CoreValue::Creativity) {
        top_strengths.push("Innovative thinking and creative problem-solving".to_string());
        career_themes.push("Creative industries, design, or innovation roles".to_string());
    }

    if dominant(CoreValue::Balance) {
        top_strengths.push("Sustainable approach to work and life integration".to_string());
        if dominant(CoreValue::Challenge) || dominant(CoreValue::Leadership) {
            potential_challenges.push("Balancing ambition with work-life boundaries".to_string());
        }
    }

    if dominant(CoreValue::Authenticity) {
        top_strengths
            .push("Strong sense of personal integrity and values alignment".to_string());
        if authenticity < 60.0 {
            recommendations
                .push("Consider roles that better align with your authentic self".to_string());
        }
    }

    for conflict in &profile.conflicting_values {
        if conflict.tension_level >= HIGH_TENSION {
            potential_challenges.push(format!(
                "High tension between {} and {} may require careful career choices",
                conflict.value1.key(),
                conflict.value2.key()
            ));
        }
    }

    if authenticity < 50.0 {
        recommendations.push(
            "Significant values misalignment detected - consider major career pivot".to_string(),
        );
    } else if authenticity < 70.0 {
        recommendations.push(
            "Moderate alignment - look for ways to incorporate more of your values into current work"
                .to_string(),
        );
    }

    let independent = [CoreValue::Autonomy, CoreValue::Creativity, CoreValue::Impact];
    if profile
        .dominant_values
        .iter()
        .take(3)
        .all(|value| independent.contains(value))
    {
        recommendations
            .push("Your profile strongly suggests entrepreneurial or freelance paths".to_string());
    }

    if dominant(CoreValue::Service) && dominant(CoreValue::Impact) {
        recommendations
            .push("Consider social enterprise or mission-driven organizations".to_string());
    }

    ValueInsights {
        top_strengths,
        potential_challenges,
        career_themes,
        recommendations,
    }
}

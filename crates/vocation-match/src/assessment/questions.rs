use super::domain::{CoreValue, ValueAssessmentQuestion};

const fn question(
    id: &'static str,
    value: CoreValue,
    scenario: &'static str,
    description: &'static str,
    weight: f64,
) -> ValueAssessmentQuestion {
    ValueAssessmentQuestion {
        id,
        value,
        scenario,
        description,
        weight,
    }
}

/// Question bank. Values later in the taxonomy carry fewer questions.
pub static VALUE_ASSESSMENT_QUESTIONS: &[ValueAssessmentQuestion] = &[
    question(
        "autonomy_1",
        CoreValue::Autonomy,
        "Decision-making freedom in your work",
        "How important is it to have control over how, when, and where you work?",
        1.2,
    ),
    question(
        "autonomy_2",
        CoreValue::Autonomy,
        "Freedom from micromanagement",
        "How important is it to work without constant oversight or approval-seeking?",
        1.0,
    ),
    question(
        "autonomy_3",
        CoreValue::Autonomy,
        "Setting your own schedule",
        "How important is it to determine your own work hours and rhythms?",
        1.1,
    ),
    question(
        "creativity_1",
        CoreValue::Creativity,
        "Expressing original ideas",
        "How important is it to generate and implement new ideas in your work?",
        1.0,
    ),
    question(
        "creativity_2",
        CoreValue::Creativity,
        "Artistic or aesthetic expression",
        "How important is it to create something beautiful or aesthetically pleasing?",
        1.1,
    ),
    question(
        "creativity_3",
        CoreValue::Creativity,
        "Innovation and experimentation",
        "How important is it to try new approaches and break conventional thinking?",
        1.0,
    ),
    question(
        "impact_1",
        CoreValue::Impact,
        "Making a meaningful difference",
        "How important is it that your work creates positive change in the world?",
        1.3,
    ),
    question(
        "impact_2",
        CoreValue::Impact,
        "Legacy and lasting contribution",
        "How important is it to create something that outlasts your immediate effort?",
        1.1,
    ),
    question(
        "impact_3",
        CoreValue::Impact,
        "Solving important problems",
        "How important is it to work on challenges that really matter to society?",
        1.2,
    ),
    question(
        "growth_1",
        CoreValue::Growth,
        "Continuous learning",
        "How important is it to constantly develop new skills and knowledge?",
        1.0,
    ),
    question(
        "growth_2",
        CoreValue::Growth,
        "Personal evolution",
        "How important is it that your work challenges you to become a better person?",
        1.1,
    ),
    question(
        "growth_3",
        CoreValue::Growth,
        "Expanding capabilities",
        "How important is it to regularly push beyond your comfort zone?",
        1.0,
    ),
    question(
        "security_1",
        CoreValue::Security,
        "Financial predictability",
        "How important is it to have stable, predictable income?",
        1.2,
    ),
    question(
        "security_2",
        CoreValue::Security,
        "Job stability",
        "How important is it to have long-term employment security?",
        1.0,
    ),
    question(
        "security_3",
        CoreValue::Security,
        "Clear expectations",
        "How important is it to know exactly what is expected of you?",
        0.9,
    ),
    question(
        "balance_1",
        CoreValue::Balance,
        "Time for personal life",
        "How important is it to have adequate time for family, friends, and hobbies?",
        1.3,
    ),
    question(
        "balance_2",
        CoreValue::Balance,
        "Avoiding overwork",
        "How important is it to maintain reasonable working hours?",
        1.1,
    ),
    question(
        "balance_3",
        CoreValue::Balance,
        "Energy preservation",
        "How important is it to avoid work that drains you completely?",
        1.2,
    ),
    question(
        "connection_1",
        CoreValue::Connection,
        "Building relationships",
        "How important is it to form meaningful relationships through your work?",
        1.0,
    ),
    question(
        "connection_2",
        CoreValue::Connection,
        "Collaborative work",
        "How important is it to work closely with others toward shared goals?",
        0.9,
    ),
    question(
        "connection_3",
        CoreValue::Connection,
        "Community building",
        "How important is it to help create or strengthen communities?",
        1.1,
    ),
    question(
        "recognition_1",
        CoreValue::Recognition,
        "Acknowledgment of contributions",
        "How important is it to receive credit and appreciation for your work?",
        0.9,
    ),
    question(
        "recognition_2",
        CoreValue::Recognition,
        "Professional reputation",
        "How important is it to be known and respected in your field?",
        1.0,
    ),
    question(
        "recognition_3",
        CoreValue::Recognition,
        "Status and prestige",
        "How important is it to have a position that others view as successful?",
        0.8,
    ),
    question(
        "challenge_1",
        CoreValue::Challenge,
        "Complex problem-solving",
        "How important is it to work on difficult, intellectually demanding problems?",
        1.0,
    ),
    question(
        "challenge_2",
        CoreValue::Challenge,
        "Mental stimulation",
        "How important is it to be intellectually engaged and stimulated?",
        1.1,
    ),
    question(
        "challenge_3",
        CoreValue::Challenge,
        "Pushing boundaries",
        "How important is it to tackle things others think are impossible?",
        0.9,
    ),
    question(
        "service_1",
        CoreValue::Service,
        "Helping others directly",
        "How important is it to personally help individuals improve their lives?",
        1.2,
    ),
    question(
        "service_2",
        CoreValue::Service,
        "Contributing to society",
        "How important is it that your work serves the broader community?",
        1.1,
    ),
    question(
        "service_3",
        CoreValue::Service,
        "Caring and compassion",
        "How important is it to work in a caring, supportive environment?",
        1.0,
    ),
    question(
        "authenticity_1",
        CoreValue::Authenticity,
        "Being true to yourself",
        "How important is it to express your genuine personality at work?",
        1.4,
    ),
    question(
        "authenticity_2",
        CoreValue::Authenticity,
        "Aligning values and actions",
        "How important is it that your work reflects your personal values?",
        1.3,
    ),
    question(
        "authenticity_3",
        CoreValue::Authenticity,
        "Avoiding compromising situations",
        "How important is it to avoid work that conflicts with your principles?",
        1.2,
    ),
    question(
        "mastery_1",
        CoreValue::Mastery,
        "Developing deep expertise",
        "How important is it to become exceptionally skilled at something?",
        1.0,
    ),
    question(
        "mastery_2",
        CoreValue::Mastery,
        "Craftsmanship and quality",
        "How important is it to create high-quality, excellent work?",
        1.1,
    ),
    question(
        "mastery_3",
        CoreValue::Mastery,
        "Technical excellence",
        "How important is it to be known for your technical or professional skills?",
        0.9,
    ),
    question(
        "variety_1",
        CoreValue::Variety,
        "Diverse experiences",
        "How important is it to have varied, non-repetitive work?",
        1.0,
    ),
    question(
        "variety_2",
        CoreValue::Variety,
        "Avoiding routine",
        "How important is it to avoid predictable, routine tasks?",
        0.9,
    ),
    question(
        "leadership_1",
        CoreValue::Leadership,
        "Guiding and influencing others",
        "How important is it to lead teams or influence decision-making?",
        1.0,
    ),
    question(
        "leadership_2",
        CoreValue::Leadership,
        "Driving change",
        "How important is it to be responsible for creating organizational change?",
        1.1,
    ),
    question(
        "adventure_1",
        CoreValue::Adventure,
        "Excitement and novelty",
        "How important is it to have exciting, unpredictable work experiences?",
        1.0,
    ),
    question(
        "adventure_2",
        CoreValue::Adventure,
        "Risk and uncertainty",
        "How important is it to work in environments with some risk or uncertainty?",
        0.8,
    ),
    question(
        "spirituality_1",
        CoreValue::Spirituality,
        "Higher purpose",
        "How important is it that your work connects to something greater than material success?",
        1.2,
    ),
    question(
        "spirituality_2",
        CoreValue::Spirituality,
        "Meaning and transcendence",
        "How important is it that your work contributes to spiritual or philosophical growth?",
        1.1,
    ),
    question(
        "justice_1",
        CoreValue::Justice,
        "Fighting unfairness",
        "How important is it to work against injustice and inequality?",
        1.2,
    ),
    question(
        "justice_2",
        CoreValue::Justice,
        "Advocating for others",
        "How important is it to stand up for those who cannot advocate for themselves?",
        1.1,
    ),
    question(
        "beauty_1",
        CoreValue::Beauty,
        "Creating beautiful things",
        "How important is it to create or work with aesthetically pleasing things?",
        1.0,
    ),
    question(
        "knowledge_1",
        CoreValue::Knowledge,
        "Understanding and discovery",
        "How important is it to expand human knowledge or understanding?",
        1.0,
    ),
    question(
        "family_1",
        CoreValue::Family,
        "Prioritizing family time",
        "How important is it that your work allows quality time with family?",
        1.3,
    ),
    question(
        "family_2",
        CoreValue::Family,
        "Supporting family needs",
        "How important is it that your work supports your family's wellbeing?",
        1.2,
    ),
];

pub fn get_assessment_questions() -> &'static [ValueAssessmentQuestion] {
    VALUE_ASSESSMENT_QUESTIONS
}

pub fn find_question(id: &str) -> Option<&'static ValueAssessmentQuestion> {
    VALUE_ASSESSMENT_QUESTIONS
        .iter()
        .find(|question| question.id == id)
}

pub fn questions_for_value(value: CoreValue) -> Vec<&'static ValueAssessmentQuestion> {
    VALUE_ASSESSMENT_QUESTIONS
        .iter()
        .filter(|question| question.value == value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_value_has_between_one_and_three_questions() {
        for value in CoreValue::ordered() {
            let count = questions_for_value(value).len();
            assert!(
                (1..=3).contains(&count),
                "{} has {count} questions",
                value.key()
            );
        }
    }

    #[test]
    fn question_ids_are_unique_and_weights_in_range() {
        let mut seen = HashSet::new();
        for question in get_assessment_questions() {
            assert!(seen.insert(question.id), "duplicate id {}", question.id);
            assert!((0.8..=1.4).contains(&question.weight));
            assert!(question.id.starts_with(question.value.key()));
        }
        assert_eq!(seen.len(), 50);
    }

    #[test]
    fn find_question_returns_none_for_unknown_id() {
        assert!(find_question("autonomy_1").is_some());
        assert!(find_question("autonomy_99").is_none());
    }
}

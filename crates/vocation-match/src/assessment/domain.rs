use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Motivational drivers scored by the values assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoreValue {
    Autonomy,
    Creativity,
    Impact,
    Growth,
    Security,
    Balance,
    Connection,
    Recognition,
    Challenge,
    Service,
    Authenticity,
    Mastery,
    Variety,
    Leadership,
    Adventure,
    Spirituality,
    Justice,
    Beauty,
    Knowledge,
    Family,
}

impl CoreValue {
    pub const COUNT: usize = 20;

    /// Catalog order. Profile ties are broken by this ordering.
    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Autonomy,
            Self::Creativity,
            Self::Impact,
            Self::Growth,
            Self::Security,
            Self::Balance,
            Self::Connection,
            Self::Recognition,
            Self::Challenge,
            Self::Service,
            Self::Authenticity,
            Self::Mastery,
            Self::Variety,
            Self::Leadership,
            Self::Adventure,
            Self::Spirituality,
            Self::Justice,
            Self::Beauty,
            Self::Knowledge,
            Self::Family,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Autonomy => "autonomy",
            Self::Creativity => "creativity",
            Self::Impact => "impact",
            Self::Growth => "growth",
            Self::Security => "security",
            Self::Balance => "balance",
            Self::Connection => "connection",
            Self::Recognition => "recognition",
            Self::Challenge => "challenge",
            Self::Service => "service",
            Self::Authenticity => "authenticity",
            Self::Mastery => "mastery",
            Self::Variety => "variety",
            Self::Leadership => "leadership",
            Self::Adventure => "adventure",
            Self::Spirituality => "spirituality",
            Self::Justice => "justice",
            Self::Beauty => "beauty",
            Self::Knowledge => "knowledge",
            Self::Family => "family",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Autonomy => "Autonomy",
            Self::Creativity => "Creativity",
            Self::Impact => "Impact",
            Self::Growth => "Growth",
            Self::Security => "Security",
            Self::Balance => "Balance",
            Self::Connection => "Connection",
            Self::Recognition => "Recognition",
            Self::Challenge => "Challenge",
            Self::Service => "Service",
            Self::Authenticity => "Authenticity",
            Self::Mastery => "Mastery",
            Self::Variety => "Variety",
            Self::Leadership => "Leadership",
            Self::Adventure => "Adventure",
            Self::Spirituality => "Spirituality",
            Self::Justice => "Justice",
            Self::Beauty => "Beauty",
            Self::Knowledge => "Knowledge",
            Self::Family => "Family",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Autonomy => "Freedom to make decisions and control your work",
            Self::Creativity => "Expressing ideas, innovation, artistic pursuits",
            Self::Impact => "Making a meaningful difference in the world",
            Self::Growth => "Learning, developing skills, personal evolution",
            Self::Security => "Stability, predictability, safety",
            Self::Balance => "Work-life harmony, time for personal life",
            Self::Connection => "Building relationships, community, collaboration",
            Self::Recognition => "Acknowledgment, respect, status",
            Self::Challenge => "Problem-solving, pushing limits, intellectual stimulation",
            Self::Service => "Helping others, contributing to society",
            Self::Authenticity => "Being true to yourself, expressing your values",
            Self::Mastery => "Becoming excellent at something, deep expertise",
            Self::Variety => "Diverse experiences, avoiding routine",
            Self::Leadership => "Guiding others, driving change, being in charge",
            Self::Adventure => "Excitement, risk-taking, new experiences",
            Self::Spirituality => "Purpose beyond material, meaning, transcendence",
            Self::Justice => "Fairness, equality, fighting wrongs",
            Self::Beauty => "Aesthetics, design, creating beautiful things",
            Self::Knowledge => "Learning, understanding, intellectual pursuit",
            Self::Family => "Prioritizing family relationships and time",
        }
    }
}

/// Five-point importance scale presented for every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportanceLevel {
    NotImportant,
    Slightly,
    Moderately,
    Very,
    Extremely,
}

impl ImportanceLevel {
    pub const MAX_SCORE: u8 = 5;

    pub const fn ordered() -> [Self; 5] {
        [
            Self::NotImportant,
            Self::Slightly,
            Self::Moderately,
            Self::Very,
            Self::Extremely,
        ]
    }

    pub fn from_score(score: u8) -> Option<Self> {
        match score {
            1 => Some(Self::NotImportant),
            2 => Some(Self::Slightly),
            3 => Some(Self::Moderately),
            4 => Some(Self::Very),
            5 => Some(Self::Extremely),
            _ => None,
        }
    }

    pub const fn score(self) -> u8 {
        match self {
            Self::NotImportant => 1,
            Self::Slightly => 2,
            Self::Moderately => 3,
            Self::Very => 4,
            Self::Extremely => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NotImportant => "Not Important",
            Self::Slightly => "Slightly Important",
            Self::Moderately => "Moderately Important",
            Self::Very => "Very Important",
            Self::Extremely => "Extremely Important",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueAssessmentQuestion {
    pub id: &'static str,
    pub value: CoreValue,
    pub scenario: &'static str,
    pub description: &'static str,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueResponse {
    pub question_id: String,
    pub importance: u8,
}

impl ValueResponse {
    pub fn new(question_id: impl Into<String>, importance: u8) -> Self {
        Self {
            question_id: question_id.into(),
            importance,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueAssessmentInputs {
    #[serde(default)]
    pub responses: Vec<ValueResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<u32>,
}

impl ValueAssessmentInputs {
    pub fn from_responses(responses: Vec<ValueResponse>) -> Self {
        Self {
            responses,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueScore {
    pub value: CoreValue,
    pub score: f64,
    pub percentage: f64,
    pub rank: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueConflict {
    pub value1: CoreValue,
    pub value2: CoreValue,
    pub tension_level: u8,
}

/// Normalized, ranked view of a single assessment submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueProfile {
    pub core_values: Vec<ValueScore>,
    pub value_distribution: BTreeMap<CoreValue, f64>,
    pub dominant_values: Vec<CoreValue>,
    pub conflicting_values: Vec<ValueConflict>,
    pub authenticity_score: f64,
}

impl ValueProfile {
    pub fn is_dominant(&self, value: CoreValue) -> bool {
        self.dominant_values.contains(&value)
    }

    pub fn percentage_of(&self, value: CoreValue) -> f64 {
        self.core_values
            .iter()
            .find(|entry| entry.value == value)
            .map(|entry| entry.percentage)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueInsights {
    pub top_strengths: Vec<String>,
    pub potential_challenges: Vec<String>,
    pub career_themes: Vec<String>,
    pub recommendations: Vec<String>,
}

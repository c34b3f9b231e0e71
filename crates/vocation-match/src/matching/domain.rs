use crate::assessment::{CoreValue, ValueProfile};
use crate::vocations::{VocationCategory, VocationOption, WorkArrangement};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl RiskTolerance {
    pub fn from_key(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Optional caller constraints. Absent fields apply no penalty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchingPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_arrangements: Option<Vec<WorkArrangement>>,
    /// Accepted for compatibility; scoring does not consult it yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avoid_categories: Option<Vec<VocationCategory>>,
    #[serde(default)]
    pub prioritize_income: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_tolerance: Option<RiskTolerance>,
}

impl MatchingPreferences {
    pub(crate) fn prefers(&self, arrangement: WorkArrangement) -> bool {
        self.preferred_arrangements
            .as_ref()
            .map(|preferred| preferred.contains(&arrangement))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueMatch {
    pub value: CoreValue,
    pub importance: f64,
    pub vocation_support: f64,
    pub alignment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConflictArea {
    pub value: CoreValue,
    pub conflict_severity: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrangementRecommendation {
    pub arrangement: WorkArrangement,
    pub suitability_score: f64,
    pub reasoning: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionDifficulty {
    Easy,
    Moderate,
    Challenging,
    Difficult,
}

impl TransitionDifficulty {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Moderate => "Moderate",
            Self::Challenging => "Challenging",
            Self::Difficult => "Difficult",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionStrategy {
    pub difficulty: TransitionDifficulty,
    pub timeframe: &'static str,
    pub key_steps: Vec<String>,
    pub skill_gaps: Vec<&'static str>,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VocationMatch {
    pub vocation: &'static VocationOption,
    pub alignment_score: f64,
    pub value_matches: Vec<ValueMatch>,
    pub conflict_areas: Vec<ConflictArea>,
    pub recommended_arrangements: Vec<ArrangementRecommendation>,
    pub transition_strategy: TransitionStrategy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchingInsights {
    pub value_alignment: String,
    pub career_themes: Vec<String>,
    pub strength_areas: Vec<String>,
    pub caution_areas: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplorationSuggestion {
    pub action: String,
    pub purpose: &'static str,
    pub timeframe: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VocationMatchingResult {
    pub user_profile: ValueProfile,
    pub top_matches: Vec<VocationMatch>,
    pub insights: MatchingInsights,
    pub exploration_suggestions: Vec<ExplorationSuggestion>,
}

//! Scores catalog vocations against a value profile and explains the results.

mod arrangements;
mod config;
pub mod domain;
mod insights;
pub mod router;
mod rules;
mod transition;

#[cfg(test)]
mod tests;

pub use config::MatchingConfig;
pub use domain::{
    ArrangementRecommendation, ConflictArea, ExplorationSuggestion, MatchingInsights,
    MatchingPreferences, RiskLevel, RiskTolerance, TransitionDifficulty, TransitionStrategy,
    ValueMatch, VocationMatch, VocationMatchingResult,
};
pub use router::matching_router;

use crate::assessment::ValueProfile;
use crate::vocations::{vocation_catalog, VocationOption};
use tracing::debug;

/// Stateless matcher that applies the selection thresholds to every catalog entry.
#[derive(Debug, Clone, Default)]
pub struct VocationMatcher {
    config: MatchingConfig,
}

impl VocationMatcher {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    pub fn score_vocation(
        &self,
        vocation: &'static VocationOption,
        profile: &ValueProfile,
        preferences: Option<&MatchingPreferences>,
    ) -> VocationMatch {
        let value_matches = rules::value_matches(vocation, profile);
        let conflict_areas = rules::conflict_areas(vocation, profile);
        let alignment_score = rules::overall_alignment(
            vocation,
            profile,
            &value_matches,
            &conflict_areas,
            preferences,
        );
        let recommended_arrangements =
            arrangements::rank_arrangements(vocation, profile, preferences);
        let transition_strategy = transition::plan_transition(vocation, profile, alignment_score);

        VocationMatch {
            vocation,
            alignment_score,
            value_matches,
            conflict_areas,
            recommended_arrangements,
            transition_strategy,
        }
    }

    pub fn run(
        &self,
        profile: &ValueProfile,
        preferences: Option<&MatchingPreferences>,
    ) -> VocationMatchingResult {
        let mut top_matches: Vec<VocationMatch> = vocation_catalog()
            .iter()
            .map(|vocation| self.score_vocation(vocation, profile, preferences))
            .filter(|entry| entry.alignment_score >= self.config.minimum_alignment)
            .collect();

        top_matches.sort_by(|a, b| b.alignment_score.total_cmp(&a.alignment_score));
        top_matches.truncate(self.config.max_matches);

        debug!(
            matches = top_matches.len(),
            top = top_matches.first().map(|entry| entry.vocation.id),
            "scored vocation catalog"
        );

        let insights = insights::summarize_matches(profile, &top_matches);
        let exploration_suggestions = insights::suggest_exploration(profile, &top_matches);

        VocationMatchingResult {
            user_profile: profile.clone(),
            top_matches,
            insights,
            exploration_suggestions,
        }
    }
}

/// Matches with the default thresholds.
pub fn match_vocations_to_values(
    profile: &ValueProfile,
    preferences: Option<&MatchingPreferences>,
) -> VocationMatchingResult {
    VocationMatcher::default().run(profile, preferences)
}

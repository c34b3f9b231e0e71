use crate::infra::{parse_arrangement, parse_category, parse_risk_tolerance, sample_assessment};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use vocation_match::assessment::{
    calculate_value_profile, generate_value_insights, get_assessment_questions, CoreValue,
    ImportanceLevel, ResponseImporter, ValueAssessmentInputs, ValueProfile,
};
use vocation_match::config::AppConfig;
use vocation_match::error::AppError;
use vocation_match::matching::{
    MatchingPreferences, RiskTolerance, VocationMatch, VocationMatcher, VocationMatchingResult,
};
use vocation_match::vocations::{filter_vocations, VocationCategory, WorkArrangement};

#[derive(Args, Debug, Default)]
pub(crate) struct VocationsArgs {
    /// Only list vocations in this category (e.g. creative_arts)
    #[arg(long, value_parser = parse_category)]
    pub(crate) category: Option<VocationCategory>,
    /// Only list vocations that support this arrangement (e.g. freelancer)
    #[arg(long, value_parser = parse_arrangement)]
    pub(crate) arrangement: Option<WorkArrangement>,
}

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// CSV export with `question_id,importance` rows
    #[arg(long)]
    pub(crate) responses: PathBuf,
    /// Current job title
    #[arg(long)]
    pub(crate) role: Option<String>,
    /// Current industry
    #[arg(long)]
    pub(crate) industry: Option<String>,
    /// Years of professional experience
    #[arg(long)]
    pub(crate) years: Option<u32>,
    /// Preferred work arrangement (repeatable)
    #[arg(long, value_parser = parse_arrangement)]
    pub(crate) prefer: Vec<WorkArrangement>,
    /// Category to steer away from (repeatable; recorded only)
    #[arg(long, value_parser = parse_category)]
    pub(crate) avoid: Vec<VocationCategory>,
    /// Discount vocations whose income floor is at or below $30k
    #[arg(long)]
    pub(crate) prioritize_income: bool,
    /// Risk appetite: low, medium, or high
    #[arg(long, value_parser = parse_risk_tolerance)]
    pub(crate) risk_tolerance: Option<RiskTolerance>,
    /// Emit the full result as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Number of matches to describe in detail
    #[arg(long, default_value_t = 3)]
    pub(crate) top: usize,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self { top: 3 }
    }
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    let questions = get_assessment_questions();
    println!("Values assessment ({} questions)", questions.len());
    println!("Importance scale:");
    for line in importance_scale() {
        println!("  {line}");
    }

    for value in CoreValue::ordered() {
        println!("\n{}: {}", value.label(), value.description());
        for question in questions.iter().filter(|question| question.value == value) {
            println!("- [{}] {}", question.id, question.scenario);
            println!("    {}", question.description);
        }
    }
    Ok(())
}

fn importance_scale() -> Vec<String> {
    ImportanceLevel::ordered()
        .into_iter()
        .map(|level| format!("{} = {}", level.score(), level.label()))
        .collect()
}

pub(crate) fn run_vocations(args: VocationsArgs) -> Result<(), AppError> {
    let VocationsArgs {
        category,
        arrangement,
    } = args;

    if let Some(arrangement) = arrangement {
        println!("{}: {}", arrangement.label(), arrangement.description());
    }

    let vocations = filter_vocations(category, arrangement);
    if vocations.is_empty() {
        println!("No vocations match the requested filters");
        return Ok(());
    }

    for vocation in vocations {
        let arrangements: Vec<&str> = vocation
            .arrangements
            .iter()
            .map(|arrangement| arrangement.label())
            .collect();
        println!(
            "- {} [{}] difficulty {}/10 | {}",
            vocation.title,
            vocation.category.label(),
            vocation.reality_check.difficulty_level,
            vocation.reality_check.average_income
        );
        println!("    {}", arrangements.join(", "));
    }
    Ok(())
}

pub(crate) fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let MatchArgs {
        responses,
        role,
        industry,
        years,
        prefer,
        avoid,
        prioritize_income,
        risk_tolerance,
        json,
    } = args;

    let config = AppConfig::load()?;
    let inputs = ValueAssessmentInputs {
        responses: ResponseImporter::from_path(&responses)?,
        current_role: role,
        industry,
        years_experience: years,
    };
    let preferences = MatchingPreferences {
        preferred_arrangements: (!prefer.is_empty()).then_some(prefer),
        avoid_categories: (!avoid.is_empty()).then_some(avoid),
        prioritize_income,
        risk_tolerance,
    };

    let profile = calculate_value_profile(&inputs);
    let result = VocationMatcher::new(config.matching).run(&profile, Some(&preferences));

    if json {
        print_json(&result);
        return Ok(());
    }

    render_profile(&profile);
    render_result(&result, result.top_matches.len());
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    println!("Values-to-vocation demo");
    let profile = calculate_value_profile(&sample_assessment());
    render_profile(&profile);

    let insights = generate_value_insights(&profile);
    if !insights.top_strengths.is_empty() {
        println!("Strengths:");
        for strength in &insights.top_strengths {
            println!("  - {strength}");
        }
    }

    let preferences = MatchingPreferences {
        preferred_arrangements: Some(vec![
            WorkArrangement::Freelancer,
            WorkArrangement::RemoteEmployee,
        ]),
        ..MatchingPreferences::default()
    };
    let result = VocationMatcher::new(config.matching).run(&profile, Some(&preferences));
    render_result(&result, args.top);
    Ok(())
}

fn render_profile(profile: &ValueProfile) {
    println!("\nValue profile (authenticity {:.0})", profile.authenticity_score);
    for entry in profile.core_values.iter().take(5) {
        println!(
            "  {}. {} {:.0}%",
            entry.rank,
            entry.value.label(),
            entry.percentage
        );
    }
    for conflict in &profile.conflicting_values {
        println!(
            "  ! {} vs {} (tension {}/10)",
            conflict.value1.label(),
            conflict.value2.label(),
            conflict.tension_level
        );
    }
}

fn render_result(result: &VocationMatchingResult, detailed: usize) {
    println!("\n{}", result.insights.value_alignment);

    if result.top_matches.is_empty() {
        println!("No vocations cleared the alignment threshold");
    }
    for entry in result.top_matches.iter().take(detailed) {
        render_match(entry);
    }
    let remaining = result.top_matches.len().saturating_sub(detailed);
    if remaining > 0 {
        println!("  ...and {remaining} more");
    }

    if !result.insights.recommendations.is_empty() {
        println!("\nRecommendations:");
        for recommendation in &result.insights.recommendations {
            println!("  - {recommendation}");
        }
    }

    if !result.exploration_suggestions.is_empty() {
        println!("\nNext experiments:");
        for suggestion in &result.exploration_suggestions {
            println!(
                "  - [{}] {} ({})",
                suggestion.timeframe, suggestion.action, suggestion.purpose
            );
        }
    }
}

fn render_match(entry: &VocationMatch) {
    let strategy = &entry.transition_strategy;
    println!(
        "\n- {} {:.1}% | {} transition over {} | {} risk",
        entry.vocation.title,
        entry.alignment_score,
        strategy.difficulty.label(),
        strategy.timeframe,
        strategy.risk_level.label()
    );
    if let Some(best) = entry.recommended_arrangements.first() {
        println!(
            "    Best arrangement: {} ({:.0}) {}",
            best.arrangement.label(),
            best.suitability_score,
            best.reasoning
        );
    }
    for conflict in &entry.conflict_areas {
        println!("    Watch: {}", conflict.description);
    }
    for step in strategy.key_steps.iter().take(3) {
        println!("    Step: {step}");
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("result payload unavailable: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn importance_scale_runs_from_one_to_five() {
        let scale = importance_scale();
        assert_eq!(scale.len(), 5);
        assert_eq!(scale[0], "1 = Not Important");
        assert_eq!(scale[4], "5 = Extremely Important");
    }

    #[test]
    fn every_value_and_arrangement_has_a_description() {
        for value in CoreValue::ordered() {
            assert!(!value.description().is_empty(), "{value:?}");
        }
        for arrangement in WorkArrangement::ordered() {
            assert!(!arrangement.description().is_empty(), "{arrangement:?}");
        }
    }
}

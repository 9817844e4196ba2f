//! Prompt Registry - central registration of all prompts.
//!
//! This module provides dynamic prompt registration without modifying service.rs.
//! When adding a new prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()`

use super::definitions::{
    AdvancedTrailChallengePrompt, BeginnerTrailRecommendationsPrompt, CompareTrailAreasPrompt,
    FamilyTrailOutingPrompt, FindTrailsNearCityPrompt, MultiActivityTrailPlanningPrompt,
    PlanTrailAdventurePrompt, PromptDefinition, SeasonalTrailPlanningPrompt,
    TrailAccessibilityAnalysisPrompt, TrailSurfaceAnalysisPrompt,
};
use super::templates::PromptTemplate;

/// Build a PromptTemplate from a PromptDefinition.
fn build_template<P: PromptDefinition>() -> PromptTemplate {
    PromptTemplate {
        name: P::NAME.to_string(),
        description: Some(P::DESCRIPTION.to_string()),
        arguments: P::arguments(),
        template: P::template().to_string(),
    }
}

/// Get all registered prompts as PromptTemplates.
///
/// This is the central place where all prompts are registered.
/// When adding a new prompt, add it here.
pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![
        build_template::<FindTrailsNearCityPrompt>(),
        build_template::<CompareTrailAreasPrompt>(),
        build_template::<PlanTrailAdventurePrompt>(),
        build_template::<TrailSurfaceAnalysisPrompt>(),
        build_template::<BeginnerTrailRecommendationsPrompt>(),
        build_template::<AdvancedTrailChallengePrompt>(),
        build_template::<FamilyTrailOutingPrompt>(),
        build_template::<SeasonalTrailPlanningPrompt>(),
        build_template::<TrailAccessibilityAnalysisPrompt>(),
        build_template::<MultiActivityTrailPlanningPrompt>(),
    ]
}

/// Get the list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![
        FindTrailsNearCityPrompt::NAME,
        CompareTrailAreasPrompt::NAME,
        PlanTrailAdventurePrompt::NAME,
        TrailSurfaceAnalysisPrompt::NAME,
        BeginnerTrailRecommendationsPrompt::NAME,
        AdvancedTrailChallengePrompt::NAME,
        FamilyTrailOutingPrompt::NAME,
        SeasonalTrailPlanningPrompt::NAME,
        TrailAccessibilityAnalysisPrompt::NAME,
        MultiActivityTrailPlanningPrompt::NAME,
    ]
}

//! Prompt definitions module.
//!
//! Each prompt is defined in its own file with:
//! - Metadata (name, description, arguments)
//! - Template string
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file (e.g., `my_prompt.rs`)
//! 2. Implement the `PromptDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

use rmcp::model::PromptArgument;

pub mod advanced_trail_challenge;
pub mod beginner_trail_recommendations;
pub mod compare_trail_areas;
pub mod family_trail_outing;
pub mod find_trails_near_city;
pub mod multi_activity_trail_planning;
pub mod plan_trail_adventure;
pub mod seasonal_trail_planning;
pub mod trail_accessibility_analysis;
pub mod trail_surface_analysis;

pub use advanced_trail_challenge::AdvancedTrailChallengePrompt;
pub use beginner_trail_recommendations::BeginnerTrailRecommendationsPrompt;
pub use compare_trail_areas::CompareTrailAreasPrompt;
pub use family_trail_outing::FamilyTrailOutingPrompt;
pub use find_trails_near_city::FindTrailsNearCityPrompt;
pub use multi_activity_trail_planning::MultiActivityTrailPlanningPrompt;
pub use plan_trail_adventure::PlanTrailAdventurePrompt;
pub use seasonal_trail_planning::SeasonalTrailPlanningPrompt;
pub use trail_accessibility_analysis::TrailAccessibilityAnalysisPrompt;
pub use trail_surface_analysis::TrailSurfaceAnalysisPrompt;

/// Trait for prompt definitions.
///
/// Each prompt must implement this trait to provide its metadata and template.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The template string with {{variable}} placeholders.
    fn template() -> &'static str;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument>;
}

/// Helper to build a required prompt argument.
pub(crate) fn required_arg(name: &str, description: &str) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(true),
    }
}

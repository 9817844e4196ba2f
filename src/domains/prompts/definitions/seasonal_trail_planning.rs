//! Seasonal-trail-planning prompt definition.

use super::{PromptDefinition, required_arg};
use rmcp::model::PromptArgument;

/// Prompt that asks for season-aware trail recommendations.
pub struct SeasonalTrailPlanningPrompt;

impl PromptDefinition for SeasonalTrailPlanningPrompt {
    const NAME: &'static str = "seasonal_trail_planning";
    const DESCRIPTION: &'static str = "Plan trail visits around a specific season";

    fn template() -> &'static str {
        "I'm planning a {{season}} visit to {{location}} and want to know which trails are best \
         for this season.\n\
         \n\
         Please help me understand:\n\
         \n\
         1. Which trails are accessible during {{season}}\n\
         2. Seasonal considerations (weather, conditions, closures)\n\
         3. Best trail types for {{season}} activities\n\
         4. Safety considerations for {{season}} hiking\n\
         \n\
         Use the search_trails tool with area_name \"{{location}}\" to get current trail \
         information, and consider seasonal factors like weather and trail conditions."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            required_arg("location", "The area to plan for"),
            required_arg("season", "The season: spring, summer, fall, or winter"),
        ]
    }
}

//! Plan-trail-adventure prompt definition.

use super::{PromptDefinition, required_arg};
use rmcp::model::PromptArgument;

/// Prompt that asks for a full-day trail adventure plan.
pub struct PlanTrailAdventurePrompt;

impl PromptDefinition for PlanTrailAdventurePrompt {
    const NAME: &'static str = "plan_trail_adventure";
    const DESCRIPTION: &'static str = "Plan a trail adventure for a given activity and location";

    fn template() -> &'static str {
        "I want to plan a {{trail_type}} adventure in {{location}}. Please help me by:\n\
         \n\
         1. Finding all {{trail_type}} trails in the area\n\
         2. Providing details about trail surfaces and difficulty\n\
         3. Summarizing the best options for a {{trail_type}} enthusiast\n\
         4. Suggesting trail combinations for a full day of adventure\n\
         \n\
         Use the search_trails tool with area_name \"{{location}}\" and trail_types [\"{{trail_type}}\"]. \
         Also check get_trail_statistics to understand the variety available."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            required_arg("trail_type", "The activity: hiking, biking, or walking"),
            required_arg("location", "The area to plan the adventure in"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata() {
        assert_eq!(PlanTrailAdventurePrompt::NAME, "plan_trail_adventure");
        assert!(PlanTrailAdventurePrompt::template().contains("{{trail_type}}"));
        assert_eq!(PlanTrailAdventurePrompt::arguments().len(), 2);
    }
}

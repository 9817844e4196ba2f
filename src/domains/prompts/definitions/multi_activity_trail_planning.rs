//! Multi-activity-trail-planning prompt definition.

use super::{PromptDefinition, required_arg};
use rmcp::model::PromptArgument;

/// Prompt that asks for a plan mixing different trail activities.
pub struct MultiActivityTrailPlanningPrompt;

impl PromptDefinition for MultiActivityTrailPlanningPrompt {
    const NAME: &'static str = "multi_activity_trail_planning";
    const DESCRIPTION: &'static str =
        "Plan a trip mixing hiking, biking, and walking trails in an area";

    fn template() -> &'static str {
        "I'm planning a trip to {{location}} and want to experience different types \
         of trail activities.\n\
         \n\
         Please help me plan:\n\
         \n\
         1. A mix of hiking, biking, and walking trails\n\
         2. Trails suitable for different skill levels\n\
         3. Trails that showcase the area's diversity\n\
         4. Options for both solo and group activities\n\
         \n\
         Use search_trails with area_name \"{{location}}\" for each trail type, and \
         get_trail_statistics to understand the variety available in the area."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![required_arg("location", "The area to plan the trip in")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata() {
        assert_eq!(
            MultiActivityTrailPlanningPrompt::NAME,
            "multi_activity_trail_planning"
        );
        assert!(MultiActivityTrailPlanningPrompt::template().contains("{{location}}"));
        assert_eq!(MultiActivityTrailPlanningPrompt::arguments().len(), 1);
    }
}

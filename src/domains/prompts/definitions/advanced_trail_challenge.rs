//! Advanced-trail-challenge prompt definition.

use super::{PromptDefinition, required_arg};
use rmcp::model::PromptArgument;

/// Prompt that asks for difficult trails for an experienced user.
pub struct AdvancedTrailChallengePrompt;

impl PromptDefinition for AdvancedTrailChallengePrompt {
    const NAME: &'static str = "advanced_trail_challenge";
    const DESCRIPTION: &'static str =
        "Find challenging trails for an experienced hiker or rider in an area";

    fn template() -> &'static str {
        "I'm an experienced {{activity}} enthusiast looking for challenging trails \
         in {{location}}.\n\
         \n\
         Please help me find:\n\
         \n\
         1. Difficult and technical {{activity}} trails\n\
         2. Trails with significant elevation gain\n\
         3. Less-maintained or backcountry options\n\
         4. Trails with advanced features such as rocky terrain or steep climbs\n\
         \n\
         Use search_trails with area_name \"{{location}}\" filtered to \"{{activity}}\" \
         trails. Look for trails whose difficulty or description suggests \"difficult\", \
         \"challenging\", or \"technical\"."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            required_arg("location", "The area to search for challenging trails"),
            required_arg("activity", "The activity (hiking, biking, walking)"),
        ]
    }
}

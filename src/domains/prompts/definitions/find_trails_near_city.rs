//! Find-trails-near-city prompt definition.

use super::{PromptDefinition, required_arg};
use rmcp::model::PromptArgument;

/// Prompt that asks for an overview of trails near a city.
pub struct FindTrailsNearCityPrompt;

impl PromptDefinition for FindTrailsNearCityPrompt {
    const NAME: &'static str = "find_trails_near_city";
    const DESCRIPTION: &'static str = "Find and summarize trails near a specific city";

    fn template() -> &'static str {
        "Please help me find trails near {{city}}. I'm interested in:\n\
         \n\
         1. What types of trails are available (hiking, biking, walking)\n\
         2. Popular trail names and their difficulty levels\n\
         3. Surface types and trail conditions\n\
         \n\
         Use the search_trails tool with area_name \"{{city}}\" to get this information. \
         If there are no results for \"{{city}}\", try searching with coordinates or nearby areas."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![required_arg("city", "The city to search around")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata() {
        assert_eq!(FindTrailsNearCityPrompt::NAME, "find_trails_near_city");
        assert!(FindTrailsNearCityPrompt::template().contains("{{city}}"));

        let args = FindTrailsNearCityPrompt::arguments();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "city");
        assert_eq!(args[0].required, Some(true));
    }
}

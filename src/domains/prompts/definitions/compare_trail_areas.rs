//! Compare-trail-areas prompt definition.

use super::{PromptDefinition, required_arg};
use rmcp::model::PromptArgument;

/// Prompt that asks for a comparison of trails between two areas.
pub struct CompareTrailAreasPrompt;

impl PromptDefinition for CompareTrailAreasPrompt {
    const NAME: &'static str = "compare_trail_areas";
    const DESCRIPTION: &'static str = "Compare trail options between two areas";

    fn template() -> &'static str {
        "Please compare the trail options between {{area1}} and {{area2}}. For each area, provide:\n\
         \n\
         1. Total number of trails by type (hiking, biking, walking)\n\
         2. Variety of surfaces and difficulty levels\n\
         3. Which area might be better for different activities\n\
         \n\
         Use the get_trail_statistics tool for both \"{{area1}}\" and \"{{area2}}\" and compare the results. \
         Also use search_trails for both areas to get specific trail details."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            required_arg("area1", "The first area to compare"),
            required_arg("area2", "The second area to compare"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata() {
        assert_eq!(CompareTrailAreasPrompt::NAME, "compare_trail_areas");

        let args = CompareTrailAreasPrompt::arguments();
        assert_eq!(args.len(), 2);
        assert!(args.iter().all(|a| a.required == Some(true)));
    }
}

//! Trail-surface-analysis prompt definition.

use super::{PromptDefinition, required_arg};
use rmcp::model::PromptArgument;

/// Prompt that asks for a breakdown of trail surfaces in an area.
pub struct TrailSurfaceAnalysisPrompt;

impl PromptDefinition for TrailSurfaceAnalysisPrompt {
    const NAME: &'static str = "trail_surface_analysis";
    const DESCRIPTION: &'static str = "Analyze the trail surface types found in an area";

    fn template() -> &'static str {
        "I'm planning to visit {{location}} and want to understand what types of \
         trail surfaces I can expect.\n\
         \n\
         Please analyze the trail surfaces in {{location}} by:\n\
         \n\
         1. Getting trail statistics to see the surface type distribution\n\
         2. Finding specific trails and their surface descriptions\n\
         3. Identifying which surfaces are most common\n\
         4. Highlighting any unique or special surface types\n\
         \n\
         Use the get_trail_statistics tool with area_name \"{{location}}\" and focus on \
         the surface breakdown, then use search_trails for specific trail details."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![required_arg("location", "The area whose trail surfaces to analyze")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata() {
        assert_eq!(TrailSurfaceAnalysisPrompt::NAME, "trail_surface_analysis");
        assert!(TrailSurfaceAnalysisPrompt::template().contains("{{location}}"));

        let args = TrailSurfaceAnalysisPrompt::arguments();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "location");
    }
}

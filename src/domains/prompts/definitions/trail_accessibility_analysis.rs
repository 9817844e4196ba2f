//! Trail-accessibility-analysis prompt definition.

use super::{PromptDefinition, required_arg};
use rmcp::model::PromptArgument;

/// Prompt that asks for trails accommodating different mobility needs.
pub struct TrailAccessibilityAnalysisPrompt;

impl PromptDefinition for TrailAccessibilityAnalysisPrompt {
    const NAME: &'static str = "trail_accessibility_analysis";
    const DESCRIPTION: &'static str =
        "Find accessible trails suitable for different mobility needs in an area";

    fn template() -> &'static str {
        "I'm looking for accessible trails in {{location}} that accommodate different \
         mobility needs.\n\
         \n\
         Please help me find:\n\
         \n\
         1. Trails with paved or smooth surfaces\n\
         2. Trails with minimal elevation changes\n\
         3. Trails suitable for wheelchairs or mobility aids\n\
         4. Trails with nearby parking and facilities\n\
         \n\
         Use search_trails with area_name \"{{location}}\" and focus on walking trails. \
         Look for trails whose surface is \"paved\" or \"asphalt\" or whose description \
         mentions accessibility."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![required_arg("location", "The area to find accessible trails in")]
    }
}

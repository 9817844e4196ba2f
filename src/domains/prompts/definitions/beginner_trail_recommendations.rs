//! Beginner-trail-recommendations prompt definition.

use super::{PromptDefinition, required_arg};
use rmcp::model::PromptArgument;

/// Prompt that asks for beginner-friendly trail suggestions.
pub struct BeginnerTrailRecommendationsPrompt;

impl PromptDefinition for BeginnerTrailRecommendationsPrompt {
    const NAME: &'static str = "beginner_trail_recommendations";
    const DESCRIPTION: &'static str = "Recommend beginner-friendly trails in an area";

    fn template() -> &'static str {
        "I'm new to outdoor activities and looking for beginner-friendly trails in \
         {{location}}.\n\
         \n\
         Please help me find:\n\
         \n\
         1. Easy hiking trails suitable for beginners\n\
         2. Well-maintained paths with good signage\n\
         3. Trails with gentle elevation changes\n\
         4. Popular, frequently used trails with good access and parking\n\
         \n\
         Use search_trails with area_name \"{{location}}\" and focus on hiking trails. \
         Look for trails whose difficulty or description suggests \"easy\", \"beginner\", \
         or \"family-friendly\"."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![required_arg("location", "The area to find beginner trails in")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata() {
        assert_eq!(
            BeginnerTrailRecommendationsPrompt::NAME,
            "beginner_trail_recommendations"
        );
        assert!(BeginnerTrailRecommendationsPrompt::template().contains("{{location}}"));
        assert_eq!(BeginnerTrailRecommendationsPrompt::arguments().len(), 1);
    }
}

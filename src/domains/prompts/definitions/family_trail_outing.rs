//! Family-trail-outing prompt definition.

use super::{PromptDefinition, required_arg};
use rmcp::model::PromptArgument;

/// Prompt that asks for family-friendly trail suggestions.
pub struct FamilyTrailOutingPrompt;

impl PromptDefinition for FamilyTrailOutingPrompt {
    const NAME: &'static str = "family_trail_outing";
    const DESCRIPTION: &'static str = "Find trails suitable for a family outing with all ages";

    fn template() -> &'static str {
        "I'm planning a family outing in {{location}} and need trails suitable for all ages.\n\
         \n\
         Please help me find:\n\
         \n\
         1. Family-friendly trails with easy access\n\
         2. Well-maintained paths with good safety features\n\
         3. Options for different family members' abilities\n\
         \n\
         Use the search_trails tool with area_name \"{{location}}\" and focus on walking and easy \
         hiking trails. Look for trails near parks or with family-oriented descriptions."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![required_arg("location", "The area to search for family trails")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata() {
        assert_eq!(FamilyTrailOutingPrompt::NAME, "family_trail_outing");
        assert_eq!(FamilyTrailOutingPrompt::arguments().len(), 1);
    }
}

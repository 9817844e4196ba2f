//! Prompt templates module.
//!
//! This module contains the PromptTemplate struct and related utilities
//! for defining and rendering prompt templates.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with placeholders.
    /// Uses a simple {{variable}} syntax for substitution.
    pub template: String,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
        }
    }

    /// Render the template with the given arguments.
    ///
    /// `{{variable}}` placeholders are replaced with the matching argument
    /// value. Placeholders for absent optional arguments are removed.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut result = self.template.clone();

        for (key, value) in arguments {
            let placeholder = format!("{{{{{}}}}}", key);
            result = result.replace(&placeholder, value);
        }

        Ok(clean_unmatched_placeholders(&result))
    }
}

/// Remove any unmatched placeholder variables.
fn clean_unmatched_placeholders(template: &str) -> String {
    let mut result = template.to_string();
    let mut start = 0;

    while let Some(pos) = result[start..].find("{{") {
        let abs_pos = start + pos;
        if let Some(end_pos) = result[abs_pos..].find("}}") {
            let end_abs = abs_pos + end_pos + 2;
            result = format!("{}{}", &result[..abs_pos], &result[end_abs..]);
            continue;
        }
        start = abs_pos + 2;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_substitution() {
        let template = PromptTemplate::new("test", None, vec![], "Trails near {{city}}, please");

        let mut args = HashMap::new();
        args.insert("city".to_string(), "Portland".to_string());

        let result = template.render(&args).unwrap();
        assert_eq!(result, "Trails near Portland, please");
    }

    #[test]
    fn test_repeated_placeholder() {
        let template = PromptTemplate::new("test", None, vec![], "{{a}} and {{a}} again");

        let mut args = HashMap::new();
        args.insert("a".to_string(), "once".to_string());

        let result = template.render(&args).unwrap();
        assert_eq!(result, "once and once again");
    }

    #[test]
    fn test_unmatched_placeholder_removed() {
        let template = PromptTemplate::new("test", None, vec![], "Hello{{missing}} world");

        let result = template.render(&HashMap::new()).unwrap();
        assert_eq!(result, "Hello world");
    }

    #[test]
    fn test_unterminated_braces_preserved() {
        let template = PromptTemplate::new("test", None, vec![], "Keep {{this");

        let result = template.render(&HashMap::new()).unwrap();
        assert_eq!(result, "Keep {{this");
    }
}

// Prompt constants for the enrichment workflow.

/// Recommendation prompt template. Replace `{tech_stack}` and `{name}`
/// before sending. The wording is fixed: enrichment output for identical
/// profiles starts from an identical prompt.
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str =
    "Based on the profile of the programmer with stack {tech_stack} and name {name}, \
     respond with what study path and recommendations this person should follow.";

/// Fills the recommendation template for one profile.
pub fn build_recommendation_prompt(name: &str, tech_stack: &str) -> String {
    RECOMMENDATION_PROMPT_TEMPLATE
        .replace("{tech_stack}", tech_stack)
        .replace("{name}", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_stack_and_name() {
        let prompt = build_recommendation_prompt("Ana", "Java, Spring");
        assert!(prompt.contains("Java, Spring"));
        assert!(prompt.contains("Ana"));
    }

    #[test]
    fn test_prompt_leaves_no_placeholders() {
        let prompt = build_recommendation_prompt("Ana", "Java, Spring");
        assert!(!prompt.contains("{tech_stack}"));
        assert!(!prompt.contains("{name}"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let a = build_recommendation_prompt("Ana", "Java, Spring");
        let b = build_recommendation_prompt("Ana", "Java, Spring");
        assert_eq!(a, b);
    }

    #[test]
    fn test_prompt_wording_is_the_fixed_template() {
        let prompt = build_recommendation_prompt("Ana", "Java, Spring");
        assert_eq!(
            prompt,
            "Based on the profile of the programmer with stack Java, Spring and name Ana, \
             respond with what study path and recommendations this person should follow."
        );
    }
}

// Prompt text for the description enhancer.

const ENHANCE_DESCRIPTION_TEMPLATE: &str = "Enhance the following job description to be more \
    engaging, professional, and comprehensive. Keep it concise while adding value. \
    Make sure to include a clear call to action. \
    Return only the enhanced description, no conversational text:\n\n\"{description}\"";

pub fn enhance_description_prompt(description: &str) -> String {
    ENHANCE_DESCRIPTION_TEMPLATE.replace("{description}", description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_quotes_the_draft() {
        let prompt = enhance_description_prompt("We build rockets.");
        assert!(prompt.ends_with("\n\n\"We build rockets.\""));
        assert!(prompt.starts_with("Enhance the following job description"));
    }
}

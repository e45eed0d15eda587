//! Text generation through a hosted LLM.

pub mod anthropic;
pub mod fence;

use async_trait::async_trait;

use crate::domain::Result;

pub use anthropic::AnthropicClient;
pub use fence::strip_code_fence;

pub const MERMAID_SYSTEM_PROMPT: &str = "\
You are an expert at creating Mermaid diagram code. The user will describe a diagram they want to create.
Your task is to generate ONLY the Mermaid code that represents this diagram, with no additional explanation or text.
Make sure the syntax is valid and the diagram will render correctly.
Just respond with the mermaid code block, nothing else.";

pub fn mermaid_user_prompt(description: &str) -> String {
    format!("Based on this description, generate Mermaid diagram code: {description}")
}

/// Produces diagram markup from a natural-language description.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, description: &str) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prompt_embeds_description() {
        assert_eq!(
            mermaid_user_prompt("a login flow"),
            "Based on this description, generate Mermaid diagram code: a login flow"
        );
    }
}

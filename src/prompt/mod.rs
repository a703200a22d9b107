//! Prompt assembly for generation requests.

mod templates;

use crate::classify::Mode;

/// System prompt and wrapped user prompt for one generation request.
#[derive(Debug, Clone)]
pub struct PromptBundle {
    pub system_prompt: String,
    pub user_prompt: String,
}

/// Mode-specific rule fragment. New modes are additive here.
pub fn mode_rules(mode: Mode) -> &'static str {
    match mode {
        Mode::LocalBusiness => templates::LOCAL_BUSINESS_RULES,
        Mode::OnlineProduct => templates::ONLINE_PRODUCT_RULES,
        Mode::CreatorProduct => templates::CREATOR_PRODUCT_RULES,
        Mode::General => templates::GENERAL_RULES,
    }
}

/// Builds the prompt pair: base instructions plus the mode's rules as the
/// system prompt, and the raw input wrapped in the structure-reasserting
/// template as the user prompt.
pub fn build(mode: Mode, input: &str) -> PromptBundle {
    PromptBundle {
        system_prompt: format!("{}\n\n{}", templates::BASE_SYSTEM_PROMPT, mode_rules(mode)),
        user_prompt: format!(
            "{}\n{}\n\n{}",
            templates::USER_PROMPT_HEADER,
            input,
            templates::USER_PROMPT_FOOTER
        ),
    }
}

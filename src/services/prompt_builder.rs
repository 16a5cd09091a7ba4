use crate::{
    constants::{
        quiz_prompt::{QUIZ_GENERATION_PROMPT, QUIZ_OPTION_COUNT, QUIZ_QUESTION_COUNT},
        tutor_prompt::TUTOR_PROMPT,
    },
    models::domain::Difficulty,
};

/// Builds the quiz generation instruction for a topic and difficulty.
///
/// The output depends only on its inputs, so identical requests produce
/// byte-identical prompts.
pub fn build_quiz_prompt(topic: &str, difficulty: Difficulty) -> String {
    // topic goes last so its text is never scanned for placeholders
    QUIZ_GENERATION_PROMPT
        .replace("{count}", &QUIZ_QUESTION_COUNT.to_string())
        .replace("{options}", &QUIZ_OPTION_COUNT.to_string())
        .replace("{difficulty}", difficulty.as_str())
        .replace("{topic}", topic.trim())
}

pub fn build_tutor_prompt(message: &str) -> String {
    TUTOR_PROMPT.replace("{message}", message.trim())
}

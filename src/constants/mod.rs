pub mod quiz_prompt;
pub mod tutor_prompt;

use async_graphql::InputObject;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::{Difficulty, Question};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub topic: String,

    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAttemptRequest {
    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub topic: String,

    pub difficulty: Difficulty,

    pub questions: Vec<Question>,

    pub user_answers: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct PredictGapRequest {
    #[serde(alias = "quiz_score")]
    #[validate(range(min = 0))]
    pub score: i32,

    #[serde(alias = "total_questions")]
    #[validate(range(min = 0))]
    pub total: i32,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 4000), custom(function = "not_blank"))]
    pub message: String,
}

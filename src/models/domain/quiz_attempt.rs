use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{Difficulty, Question};

/// A graded quiz submission. Written once and never updated.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct QuizAttempt {
    pub id: String,
    pub user_id: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub questions: Vec<Question>, // snapshot of the quiz as it was answered
    pub user_answers: Vec<String>,
    pub score: i32,
    pub total_questions: i32,
    #[serde(with = "crate::models::domain::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl QuizAttempt {
    pub fn new(
        user_id: &str,
        topic: &str,
        difficulty: Difficulty,
        questions: Vec<Question>,
        user_answers: Vec<String>,
        score: usize,
    ) -> Self {
        let total_questions = questions.len() as i32;
        QuizAttempt {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            topic: topic.to_string(),
            difficulty,
            questions,
            user_answers,
            score: score as i32,
            total_questions,
            created_at: Utc::now(),
        }
    }
}

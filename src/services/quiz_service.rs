use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Difficulty, Quiz, QuizAttempt},
        dto::{
            request::SubmitAttemptRequest,
            response::{GapPrediction, SubmissionResult},
        },
    },
    repositories::QuizAttemptRepository,
    services::{
        gap_predictor_client::GapPredictor, generation_client::GenerationClient, grader,
        prompt_builder, quiz_normalizer,
    },
};

pub const SUBMISSION_MESSAGE: &str = "Quiz submitted successfully";

pub struct QuizService {
    generator: Arc<dyn GenerationClient>,
    attempts: Arc<dyn QuizAttemptRepository>,
    gap_predictor: Arc<dyn GapPredictor>,
    generation_attempts: u32,
}

impl QuizService {
    pub fn new(
        generator: Arc<dyn GenerationClient>,
        attempts: Arc<dyn QuizAttemptRepository>,
        gap_predictor: Arc<dyn GapPredictor>,
        generation_attempts: u32,
    ) -> Self {
        Self {
            generator,
            attempts,
            gap_predictor,
            generation_attempts: generation_attempts.max(1),
        }
    }

    /// Generates a fresh quiz. Nothing is persisted.
    ///
    /// Generation and format failures are retried up to the configured number
    /// of attempts; the last failure is returned.
    pub async fn generate_quiz(&self, topic: &str, difficulty: Difficulty) -> AppResult<Quiz> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(AppError::ValidationError(
                "Topic must not be empty".to_string(),
            ));
        }

        let prompt = prompt_builder::build_quiz_prompt(topic, difficulty);
        let mut last_error = None;

        for attempt in 1..=self.generation_attempts {
            match self.generate_once(&prompt).await {
                Ok(quiz) => {
                    log::info!(
                        "Generated {} questions on '{}' ({})",
                        quiz.len(),
                        topic,
                        difficulty
                    );
                    return Ok(quiz);
                }
                Err(e) if is_regenerable(&e) => {
                    log::warn!(
                        "Quiz generation attempt {}/{} failed: {}",
                        attempt,
                        self.generation_attempts,
                        e
                    );
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| {
            AppError::GenerationFailed("no generation attempt was made".to_string())
        }))
    }

    async fn generate_once(&self, prompt: &str) -> AppResult<Quiz> {
        let raw = self.generator.generate(prompt).await?;
        Ok(quiz_normalizer::normalize(&raw)?)
    }

    /// Grades and stores a submission, then classifies the learner's gap.
    ///
    /// The attempt is written exactly once and only after grading succeeds.
    /// A gap service failure does not fail the submission; `level` is `None`.
    pub async fn submit_attempt(
        &self,
        user_id: &str,
        request: SubmitAttemptRequest,
    ) -> AppResult<SubmissionResult> {
        request.validate()?;
        for (index, question) in request.questions.iter().enumerate() {
            question
                .check()
                .map_err(|reason| AppError::ValidationError(format!("question {}: {}", index, reason)))?;
        }

        let score = grader::grade(&request.questions, request.user_answers.as_slice())?;

        let attempt = QuizAttempt::new(
            user_id,
            request.topic.trim(),
            request.difficulty,
            request.questions,
            request.user_answers,
            score,
        );

        let stored = self.attempts.create(attempt).await.map_err(|e| {
            log::error!("Failed to store quiz attempt for user {}: {}", user_id, e);
            e
        })?;

        log::info!(
            "Stored attempt {} for user {}: {}/{}",
            stored.id,
            user_id,
            stored.score,
            stored.total_questions
        );

        let level = match self
            .gap_predictor
            .predict_gap(stored.score, stored.total_questions)
            .await
        {
            Ok(prediction) => Some(prediction.level),
            Err(e) => {
                log::warn!("Gap prediction skipped for attempt {}: {}", stored.id, e);
                None
            }
        };

        Ok(SubmissionResult {
            score: stored.score,
            total: stored.total_questions,
            message: SUBMISSION_MESSAGE.to_string(),
            result_id: stored.id,
            level,
        })
    }

    pub async fn predict_gap(&self, score: i32, total: i32) -> AppResult<GapPrediction> {
        if score < 0 || total < 0 || score > total {
            return Err(AppError::ValidationError(format!(
                "score {} is not within 0..={}",
                score, total
            )));
        }
        self.gap_predictor.predict_gap(score, total).await
    }

    pub async fn attempt_history(&self, user_id: &str) -> AppResult<Vec<QuizAttempt>> {
        self.attempts.find_by_user(user_id).await
    }
}

fn is_regenerable(error: &AppError) -> bool {
    matches!(
        error,
        AppError::GenerationFailed(_) | AppError::MalformedQuizFormat { .. }
    )
}

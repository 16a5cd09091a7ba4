#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::RwLock;

use learnmate_server::{
    config::{Config, GapServiceConfig, GenerationConfig},
    errors::{AppError, AppResult},
    models::{
        domain::{ChatMessage, Question, QuizAttempt},
        dto::response::GapPrediction,
    },
    repositories::{ChatMessageRepository, QuizAttemptRepository},
    services::{GapPredictor, GenerationClient},
};

pub const JWT_SECRET: &str = "integration_test_secret_that_is_long_enough";

pub fn config() -> Config {
    Config {
        app_env: "test".to_string(),
        mongo_conn_string: "mongodb://localhost:27017".to_string(),
        mongo_db_name: "learnmate-test".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 5000,
        cors_allowed_origin: "http://localhost:5173".to_string(),
        jwt_secret: SecretString::from(JWT_SECRET.to_string()),
        generation: GenerationConfig {
            api_key: SecretString::from("test-api-key".to_string()),
            api_base: "http://127.0.0.1:9/v1".to_string(),
            model: "test-model".to_string(),
            timeout: Duration::from_secs(1),
            quiz_attempts: 1,
        },
        gap_service: GapServiceConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_millis(200),
        },
    }
}

pub fn question(text: &str, options: &[&str], answer: &str) -> Question {
    Question::new(text, options, answer)
}

/// Renders questions the way the model is asked to answer, inside a fence.
pub fn fenced_quiz_json(questions: &[Question]) -> String {
    let body = serde_json::json!({ "quiz": questions });
    format!("```json\n{}\n```", body)
}

#[derive(Default)]
pub struct InMemoryQuizAttemptRepository {
    attempts: Arc<RwLock<HashMap<String, QuizAttempt>>>,
    fail_writes: bool,
}

impl InMemoryQuizAttemptRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub async fn len(&self) -> usize {
        self.attempts.read().await.len()
    }
}

fn oldest_first<T, F>(mut items: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> chrono::DateTime<chrono::Utc>,
{
    items.sort_by_key(|item| key(item));
    items
}

#[async_trait]
impl QuizAttemptRepository for InMemoryQuizAttemptRepository {
    async fn create(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt> {
        if self.fail_writes {
            return Err(AppError::PersistenceFailure(
                "storage is read-only".to_string(),
            ));
        }

        let mut attempts = self.attempts.write().await;
        if attempts.contains_key(&attempt.id) {
            return Err(AppError::PersistenceFailure(format!(
                "Attempt with id '{}' already exists",
                attempt.id
            )));
        }
        attempts.insert(attempt.id.clone(), attempt.clone());
        Ok(attempt)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizAttempt>> {
        let attempts = self.attempts.read().await;
        Ok(attempts.get(id).cloned())
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<QuizAttempt>> {
        let attempts = self.attempts.read().await;
        let items = attempts
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        Ok(oldest_first(items, |a| a.created_at))
    }

    async fn find_by_user_and_topic(
        &self,
        user_id: &str,
        topic: &str,
    ) -> AppResult<Vec<QuizAttempt>> {
        let attempts = self.attempts.read().await;
        let items = attempts
            .values()
            .filter(|a| a.user_id == user_id && a.topic == topic)
            .cloned()
            .collect();
        Ok(oldest_first(items, |a| a.created_at))
    }
}

#[derive(Default)]
pub struct InMemoryChatMessageRepository {
    messages: Arc<RwLock<Vec<ChatMessage>>>,
}

impl InMemoryChatMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatMessageRepository for InMemoryChatMessageRepository {
    async fn create(&self, message: ChatMessage) -> AppResult<ChatMessage> {
        self.messages.write().await.push(message.clone());
        Ok(message)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<ChatMessage>> {
        let messages = self.messages.read().await;
        let items = messages
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();
        Ok(oldest_first(items, |m| m.created_at))
    }
}

/// Generator that answers every prompt with the same text.
pub struct StubGenerator {
    reply: AppResult<String>,
    calls: AtomicUsize,
}

impl StubGenerator {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: Err(AppError::GenerationFailed("model unreachable".to_string())),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationClient for StubGenerator {
    async fn generate(&self, _prompt: &str) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}

pub enum StubGap {
    Level(&'static str),
    Unavailable,
}

#[async_trait]
impl GapPredictor for StubGap {
    async fn predict_gap(&self, _score: i32, _total: i32) -> AppResult<GapPrediction> {
        match self {
            StubGap::Level(level) => Ok(GapPrediction {
                level: level.to_string(),
            }),
            StubGap::Unavailable => Err(AppError::GapServiceUnavailable(
                "timed out".to_string(),
            )),
        }
    }
}

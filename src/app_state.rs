use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        ChatMessageRepository, MongoChatMessageRepository, MongoQuizAttemptRepository,
        QuizAttemptRepository,
    },
    services::{
        ChatService, GapPredictor, GenerationClient, HttpGapPredictorClient,
        OpenAiGenerationClient, QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub chat_service: Arc<ChatService>,
    /// `None` when the services run on non-Mongo repositories.
    pub db: Option<Database>,
}

impl AppState {
    pub async fn new(config: &Config) -> AppResult<Self> {
        let db = Database::connect(config).await?;

        let attempt_repository = Arc::new(MongoQuizAttemptRepository::new(&db));
        attempt_repository.ensure_indexes().await?;

        let chat_repository = Arc::new(MongoChatMessageRepository::new(&db));
        chat_repository.ensure_indexes().await?;

        let generator: Arc<dyn GenerationClient> =
            Arc::new(OpenAiGenerationClient::new(&config.generation));
        let gap_predictor: Arc<dyn GapPredictor> =
            Arc::new(HttpGapPredictorClient::new(&config.gap_service)?);

        let mut state = Self::from_parts(
            config,
            generator,
            attempt_repository,
            chat_repository,
            gap_predictor,
        );
        state.db = Some(db);
        Ok(state)
    }

    /// Wires the services from already constructed collaborators.
    pub fn from_parts(
        config: &Config,
        generator: Arc<dyn GenerationClient>,
        attempts: Arc<dyn QuizAttemptRepository>,
        chat_messages: Arc<dyn ChatMessageRepository>,
        gap_predictor: Arc<dyn GapPredictor>,
    ) -> Self {
        let quiz_service = Arc::new(QuizService::new(
            Arc::clone(&generator),
            attempts,
            gap_predictor,
            config.generation.quiz_attempts,
        ));
        let chat_service = Arc::new(ChatService::new(generator, chat_messages));

        Self {
            quiz_service,
            chat_service,
            db: None,
        }
    }
}

pub mod chat_service;
pub mod gap_predictor_client;
pub mod generation_client;
pub mod grader;
pub mod prompt_builder;
pub mod quiz_normalizer;
pub mod quiz_service;

pub use chat_service::ChatService;
pub use gap_predictor_client::{GapPredictor, HttpGapPredictorClient};
pub use generation_client::{GenerationClient, OpenAiGenerationClient};
pub use quiz_service::QuizService;

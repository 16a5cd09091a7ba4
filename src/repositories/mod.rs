pub mod chat_message_repository;
pub mod quiz_attempt_repository;

pub use chat_message_repository::{ChatMessageRepository, MongoChatMessageRepository};
pub use quiz_attempt_repository::{MongoQuizAttemptRepository, QuizAttemptRepository};

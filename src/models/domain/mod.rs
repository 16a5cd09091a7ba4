pub mod chat_message;
pub mod difficulty;
pub mod quiz;
pub mod quiz_attempt;
pub mod timestamp;

pub use chat_message::{ChatMessage, ChatRole};
pub use difficulty::Difficulty;
pub use quiz::{Question, Quiz};
pub use quiz_attempt::QuizAttempt;

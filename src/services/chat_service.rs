use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{ChatMessage, ChatRole},
        dto::response::ChatReply,
    },
    repositories::ChatMessageRepository,
    services::{generation_client::GenerationClient, prompt_builder},
};

pub struct ChatService {
    generator: Arc<dyn GenerationClient>,
    messages: Arc<dyn ChatMessageRepository>,
}

impl ChatService {
    pub fn new(
        generator: Arc<dyn GenerationClient>,
        messages: Arc<dyn ChatMessageRepository>,
    ) -> Self {
        Self {
            generator,
            messages,
        }
    }

    /// Records the learner's message, asks the tutor model and records its reply.
    pub async fn send_message(&self, user_id: &str, message: &str) -> AppResult<ChatReply> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::ValidationError(
                "Message must not be empty".to_string(),
            ));
        }

        self.messages
            .create(ChatMessage::new(user_id, ChatRole::User, message))
            .await?;

        let prompt = prompt_builder::build_tutor_prompt(message);
        let reply = self.generator.generate(&prompt).await?;

        self.messages
            .create(ChatMessage::new(user_id, ChatRole::Model, &reply))
            .await?;

        Ok(ChatReply { response: reply })
    }

    pub async fn history(&self, user_id: &str) -> AppResult<Vec<ChatMessage>> {
        self.messages.find_by_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        repositories::chat_message_repository::MockChatMessageRepository,
        services::generation_client::MockGenerationClient,
    };

    #[tokio::test]
    async fn send_message_stores_both_sides_of_the_exchange() {
        let mut generator = MockGenerationClient::new();
        generator
            .expect_generate()
            .withf(|prompt| prompt.contains("What is a heap?"))
            .times(1)
            .returning(|_| Ok("A heap is a tree-shaped priority structure.".to_string()));

        let mut messages = MockChatMessageRepository::new();
        let mut seq = mockall::Sequence::new();
        messages
            .expect_create()
            .withf(|m| m.role == ChatRole::User && m.message == "What is a heap?")
            .times(1)
            .in_sequence(&mut seq)
            .returning(Ok);
        messages
            .expect_create()
            .withf(|m| m.role == ChatRole::Model && m.user_id == "user-1")
            .times(1)
            .in_sequence(&mut seq)
            .returning(Ok);

        let svc = ChatService::new(Arc::new(generator), Arc::new(messages));
        let reply = svc
            .send_message("user-1", "  What is a heap?  ")
            .await
            .expect("reply expected");
        assert_eq!(reply.response, "A heap is a tree-shaped priority structure.");
    }

    #[tokio::test]
    async fn send_message_rejects_blank_input() {
        let mut generator = MockGenerationClient::new();
        generator.expect_generate().never();
        let mut messages = MockChatMessageRepository::new();
        messages.expect_create().never();

        let svc = ChatService::new(Arc::new(generator), Arc::new(messages));
        let result = svc.send_message("user-1", "\n ").await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn generation_failure_is_surfaced_and_no_reply_is_stored() {
        let mut generator = MockGenerationClient::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_| Err(AppError::GenerationFailed("unreachable".to_string())));

        let mut messages = MockChatMessageRepository::new();
        messages
            .expect_create()
            .withf(|m| m.role == ChatRole::User)
            .times(1)
            .returning(Ok);

        let svc = ChatService::new(Arc::new(generator), Arc::new(messages));
        let result = svc.send_message("user-1", "Explain recursion").await;
        assert!(matches!(result, Err(AppError::GenerationFailed(_))));
    }
}

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::{Database, CHAT_MESSAGES_COLLECTION},
    errors::AppResult,
    models::domain::ChatMessage,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatMessageRepository: Send + Sync {
    async fn create(&self, message: ChatMessage) -> AppResult<ChatMessage>;
    /// Conversation of one user, oldest message first.
    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<ChatMessage>>;
}

pub struct MongoChatMessageRepository {
    collection: Collection<ChatMessage>,
}

impl MongoChatMessageRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(CHAT_MESSAGES_COLLECTION);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "created_at": 1 })
            .options(
                IndexOptions::builder()
                    .name("user_created".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(user_id_index).await?;
        log::info!("Created indexes for {} collection", CHAT_MESSAGES_COLLECTION);
        Ok(())
    }
}

#[async_trait]
impl ChatMessageRepository for MongoChatMessageRepository {
    async fn create(&self, message: ChatMessage) -> AppResult<ChatMessage> {
        self.collection.insert_one(&message).await?;
        Ok(message)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<ChatMessage>> {
        let messages: Vec<ChatMessage> = self
            .collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "created_at": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(messages)
    }
}

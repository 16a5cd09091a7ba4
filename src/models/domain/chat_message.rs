use async_graphql::{Enum, SimpleObject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct ChatMessage {
    pub id: String,
    pub user_id: String,
    pub role: ChatRole,
    pub message: String,
    #[serde(with = "crate::models::domain::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(user_id: &str, role: ChatRole, message: &str) -> Self {
        ChatMessage {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            role,
            message: message.to_string(),
            created_at: Utc::now(),
        }
    }
}

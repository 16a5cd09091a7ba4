use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::{Database, QUIZ_ATTEMPTS_COLLECTION},
    errors::AppResult,
    models::domain::QuizAttempt,
};

/// Insert-only store of graded attempts.
///
/// Listing methods return attempts oldest first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizAttemptRepository: Send + Sync {
    async fn create(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizAttempt>>;
    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<QuizAttempt>>;
    async fn find_by_user_and_topic(
        &self,
        user_id: &str,
        topic: &str,
    ) -> AppResult<Vec<QuizAttempt>>;
}

pub struct MongoQuizAttemptRepository {
    collection: Collection<QuizAttempt>,
}

impl MongoQuizAttemptRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(QUIZ_ATTEMPTS_COLLECTION);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for {} collection", QUIZ_ATTEMPTS_COLLECTION);

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let user_topic_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "topic": 1, "created_at": 1 })
            .options(
                IndexOptions::builder()
                    .name("user_topic_created".to_string())
                    .build(),
            )
            .build();

        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "created_at": 1 })
            .options(
                IndexOptions::builder()
                    .name("user_created".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(user_topic_index).await?;
        self.collection.create_index(user_id_index).await?;

        log::info!(
            "Successfully created indexes for {} collection",
            QUIZ_ATTEMPTS_COLLECTION
        );
        Ok(())
    }
}

#[async_trait]
impl QuizAttemptRepository for MongoQuizAttemptRepository {
    async fn create(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt> {
        self.collection.insert_one(&attempt).await?;
        Ok(attempt)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizAttempt>> {
        let attempt = self.collection.find_one(doc! { "id": id }).await?;
        Ok(attempt)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<QuizAttempt>> {
        let attempts: Vec<QuizAttempt> = self
            .collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "created_at": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(attempts)
    }

    async fn find_by_user_and_topic(
        &self,
        user_id: &str,
        topic: &str,
    ) -> AppResult<Vec<QuizAttempt>> {
        let attempts: Vec<QuizAttempt> = self
            .collection
            .find(doc! {
                "user_id": user_id,
                "topic": topic
            })
            .sort(doc! { "created_at": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(attempts)
    }
}

use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::{
    app_state::AppState,
    auth::extract_claims_from_context,
    models::domain::{ChatMessage, QuizAttempt},
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Stored attempts of the caller, oldest first.
    async fn attempts(&self, ctx: &Context<'_>) -> Result<Vec<QuizAttempt>> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx).map_err(|e| e.extend())?;

        state
            .quiz_service
            .attempt_history(claims.user_id())
            .await
            .map_err(|e| e.extend())
    }

    async fn chat_history(&self, ctx: &Context<'_>) -> Result<Vec<ChatMessage>> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx).map_err(|e| e.extend())?;

        state
            .chat_service
            .history(claims.user_id())
            .await
            .map_err(|e| e.extend())
    }
}

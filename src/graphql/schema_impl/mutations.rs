use async_graphql::{Context, ErrorExtensions, Object, Result};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::extract_claims_from_context,
    errors::AppError,
    models::{
        domain::Quiz,
        dto::{
            request::{ChatRequest, GenerateQuizRequest, PredictGapRequest, SubmitAttemptRequest},
            response::{ChatReply, GapPrediction, SubmissionResult},
        },
    },
};

fn validated<T: Validate>(input: T) -> Result<T> {
    input.validate().map_err(|e| AppError::from(e).extend())?;
    Ok(input)
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn generate_quiz(&self, ctx: &Context<'_>, input: GenerateQuizRequest) -> Result<Quiz> {
        let state = ctx.data::<AppState>()?;
        extract_claims_from_context(ctx).map_err(|e| e.extend())?;
        let input = validated(input)?;

        state
            .quiz_service
            .generate_quiz(&input.topic, input.difficulty)
            .await
            .map_err(|e| e.extend())
    }

    async fn submit_attempt(
        &self,
        ctx: &Context<'_>,
        input: SubmitAttemptRequest,
    ) -> Result<SubmissionResult> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx).map_err(|e| e.extend())?;

        state
            .quiz_service
            .submit_attempt(claims.user_id(), input)
            .await
            .map_err(|e| e.extend())
    }

    async fn predict_gap(&self, ctx: &Context<'_>, input: PredictGapRequest) -> Result<GapPrediction> {
        let state = ctx.data::<AppState>()?;
        extract_claims_from_context(ctx).map_err(|e| e.extend())?;
        let input = validated(input)?;

        state
            .quiz_service
            .predict_gap(input.score, input.total)
            .await
            .map_err(|e| e.extend())
    }

    async fn send_chat_message(&self, ctx: &Context<'_>, input: ChatRequest) -> Result<ChatReply> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx).map_err(|e| e.extend())?;
        let input = validated(input)?;

        state
            .chat_service
            .send_message(claims.user_id(), &input.message)
            .await
            .map_err(|e| e.extend())
    }
}

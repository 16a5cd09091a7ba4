use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::{GenerateQuizRequest, PredictGapRequest, SubmitAttemptRequest},
};

#[post("/quiz/generate")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let quiz = state
        .quiz_service
        .generate_quiz(&request.topic, request.difficulty)
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/quiz/submit")]
pub async fn submit_attempt(
    state: web::Data<AppState>,
    request: web::Json<SubmitAttemptRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let result = state
        .quiz_service
        .submit_attempt(auth.0.user_id(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

#[post("/quiz/predict-gap")]
pub async fn predict_gap(
    state: web::Data<AppState>,
    request: web::Json<PredictGapRequest>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let prediction = state
        .quiz_service
        .predict_gap(request.score, request.total)
        .await?;
    Ok(HttpResponse::Ok().json(prediction))
}

#[get("/quiz/history")]
pub async fn attempt_history(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let attempts = state.quiz_service.attempt_history(auth.0.user_id()).await?;
    Ok(HttpResponse::Ok().json(attempts))
}

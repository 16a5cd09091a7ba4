use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState, auth::AuthenticatedUser, errors::AppError,
    models::dto::request::ChatRequest,
};

#[post("/chat")]
pub async fn send_message(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let reply = state
        .chat_service
        .send_message(auth.0.user_id(), &request.message)
        .await?;
    Ok(HttpResponse::Ok().json(reply))
}

#[get("/chat/history")]
pub async fn chat_history(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let messages = state.chat_service.history(auth.0.user_id()).await?;
    Ok(HttpResponse::Ok().json(messages))
}

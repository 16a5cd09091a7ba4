pub mod chat_handler;
pub mod graphql_handler;
pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

use crate::{auth::AuthMiddleware, errors::AppError};

pub use health_handler::{health_check, health_check_live, health_check_ready};

/// Mounts every route. `AppState`, `JwtService` and the GraphQL `Schema`
/// must be registered as app data by the caller.
pub fn configure(cfg: &mut web::ServiceConfig, enable_graphiql: bool) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into());

    cfg.app_data(json_config)
        .service(health_check)
        .service(health_check_live)
        .service(health_check_ready)
        .service(
            web::scope("/api")
                .wrap(AuthMiddleware)
                .service(quiz_handler::generate_quiz)
                .service(quiz_handler::submit_attempt)
                .service(quiz_handler::predict_gap)
                .service(quiz_handler::attempt_history)
                .service(chat_handler::send_message)
                .service(chat_handler::chat_history),
        )
        .service(
            web::resource(graphql_handler::GRAPHQL_PATH)
                .wrap(AuthMiddleware)
                .route(web::post().to(graphql_handler::graphql)),
        );

    if enable_graphiql {
        cfg.route("/graphiql", web::get().to(graphql_handler::graphiql));
    }
}

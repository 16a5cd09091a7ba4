use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use learnmate_server::{
    app_state::AppState, auth::JwtService, config::Config, graphql::create_schema, handlers,
    middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    if config.is_production() {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let cors_origin = config.cors_allowed_origin.clone();
    let enable_graphiql = !config.is_production();
    let jwt_service = web::Data::new(JwtService::new(&config.jwt_secret));

    let state = AppState::new(&config).await.map_err(|e| {
        log::error!("Failed to initialise application state: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;
    let schema = web::Data::new(create_schema(state.clone()));
    let state = web::Data::new(state);

    log::info!("Starting HTTP server on http://{}:{}", host, port);
    if enable_graphiql {
        log::info!("GraphiQL playground: http://{}:{}/graphiql", host, port);
    }

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .app_data(schema.clone())
            .app_data(jwt_service.clone())
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .wrap(cors)
            .configure(|cfg| handlers::configure(cfg, enable_graphiql))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}

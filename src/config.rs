use std::{env, time::Duration};
use secrecy::SecretString;

const DEV_JWT_SECRET: &str = "dev_secret_key_change_in_production";
const DEV_GEMINI_API_KEY: &str = "YOUR_API_KEY";

#[derive(Clone, Debug)]
pub struct Config {
    pub app_env: String,
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
    pub jwt_secret: SecretString,
    pub generation: GenerationConfig,
    pub gap_service: GapServiceConfig,
}

/// Settings for the OpenAI-compatible text generation endpoint.
#[derive(Clone, Debug)]
pub struct GenerationConfig {
    pub api_key: SecretString,
    pub api_base: String,
    pub model: String,
    pub timeout: Duration,
    /// Number of generate+normalize rounds the quiz service may run. 1 disables retry.
    pub quiz_attempts: u32,
}

#[derive(Clone, Debug)]
pub struct GapServiceConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "learnmate".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: parse_env("WEB_SERVER_PORT").unwrap_or(5000),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            jwt_secret: SecretString::from(
                env::var("JWT_SECRET").unwrap_or_else(|_| DEV_JWT_SECRET.to_string()),
            ),
            generation: GenerationConfig {
                api_key: SecretString::from(
                    env::var("GEMINI_API_KEY").unwrap_or_else(|_| DEV_GEMINI_API_KEY.to_string()),
                ),
                api_base: env::var("GENERATION_API_BASE").unwrap_or_else(|_| {
                    "https://generativelanguage.googleapis.com/v1beta/openai".to_string()
                }),
                model: env::var("GENERATION_MODEL")
                    .unwrap_or_else(|_| "gemini-flash-latest".to_string()),
                timeout: Duration::from_secs(parse_env("GENERATION_TIMEOUT_SECS").unwrap_or(60)),
                quiz_attempts: parse_env::<u32>("QUIZ_GENERATION_ATTEMPTS")
                    .unwrap_or(1)
                    .max(1),
            },
            gap_service: GapServiceConfig {
                base_url: env::var("ML_SERVICE_URL")
                    .unwrap_or_else(|_| "http://localhost:8000".to_string()),
                timeout: Duration::from_secs(parse_env("GAP_SERVICE_TIMEOUT_SECS").unwrap_or(5)),
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let jwt_secret = self.jwt_secret.expose_secret();
        let api_key = self.generation.api_key.expose_secret();

        if jwt_secret == DEV_JWT_SECRET {
            panic!(
                "FATAL: JWT_SECRET is using default value! Set JWT_SECRET environment variable to a secure random string."
            );
        }

        if jwt_secret.len() < 32 {
            panic!(
                "FATAL: JWT_SECRET is too short ({}). Must be at least 32 characters for security.",
                jwt_secret.len()
            );
        }

        if api_key == DEV_GEMINI_API_KEY {
            panic!(
                "FATAL: GEMINI_API_KEY is using default value! Set GEMINI_API_KEY environment variable."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            app_env: "test".to_string(),
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "learnmate-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
            cors_allowed_origin: "http://localhost:5173".to_string(),
            jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
            generation: GenerationConfig {
                api_key: SecretString::from("test-api-key".to_string()),
                api_base: "http://127.0.0.1:9/v1".to_string(),
                model: "test-model".to_string(),
                timeout: Duration::from_secs(1),
                quiz_attempts: 1,
            },
            gap_service: GapServiceConfig {
                base_url: "http://127.0.0.1:9".to_string(),
                timeout: Duration::from_millis(200),
            },
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

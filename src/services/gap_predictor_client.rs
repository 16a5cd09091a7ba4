use async_trait::async_trait;
use serde::Serialize;

use crate::{
    config::GapServiceConfig,
    errors::{AppError, AppResult},
    models::dto::response::GapPrediction,
};

const PREDICT_GAP_PATH: &str = "/ml/predict-gap";

/// Remote skill-gap classifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GapPredictor: Send + Sync {
    /// Returns the service's classification unmodified.
    async fn predict_gap(&self, score: i32, total: i32) -> AppResult<GapPrediction>;
}

#[derive(Debug, Serialize)]
struct PredictGapBody {
    quiz_score: i32,
    total_questions: i32,
}

pub struct HttpGapPredictorClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGapPredictorClient {
    pub fn new(config: &GapServiceConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", config.base_url.trim_end_matches('/'), PREDICT_GAP_PATH),
        })
    }

    #[cfg(test)]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GapPredictor for HttpGapPredictorClient {
    async fn predict_gap(&self, score: i32, total: i32) -> AppResult<GapPrediction> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&PredictGapBody {
                quiz_score: score,
                total_questions: total,
            })
            .send()
            .await
            .map_err(|e| {
                log::error!("Gap prediction request to {} failed: {}", self.endpoint, e);
                AppError::GapServiceUnavailable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read response body".to_string());
            log::error!("Gap prediction service answered {}: {}", status, body);
            return Err(AppError::GapServiceUnavailable(format!(
                "service answered {}",
                status
            )));
        }

        response.json::<GapPrediction>().await.map_err(|e| {
            log::error!("Gap prediction response was unreadable: {}", e);
            AppError::GapServiceUnavailable(format!("unreadable response: {}", e))
        })
    }
}

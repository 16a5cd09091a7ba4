use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// Outcome of a stored quiz submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub score: i32,
    pub total: i32,
    pub message: String,
    pub result_id: String,
    /// Gap classification; absent when the prediction service could not answer.
    pub level: Option<String>,
}

/// Classification returned by the gap prediction service.
///
/// `level` is relayed as the service wrote it. Any other fields in its
/// answer are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
pub struct GapPrediction {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct ChatReply {
    pub response: String,
}

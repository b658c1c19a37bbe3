use async_trait::async_trait;

mod fetcher;
pub mod models;

pub use fetcher::{build_client, HttpPredictor};
pub use models::{PredictionRequest, PredictionResult};

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("prediction request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("prediction response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait PricePredictor: Send + Sync {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictError>;
}

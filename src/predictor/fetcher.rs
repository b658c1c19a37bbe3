use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::predictor::models::{PredictionRequest, PredictionResult};
use crate::predictor::{PredictError, PricePredictor};

pub fn build_client() -> Result<Client, PredictError> {
    Client::builder()
        .user_agent(concat!("dariprice/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(PredictError::Client)
}

/// Talks to the prediction service over HTTP.
pub struct HttpPredictor {
    client: Client,
    base_url: String,
}

impl HttpPredictor {
    pub fn new(base_url: impl Into<String>) -> Result<Self, PredictError> {
        Ok(Self::with_client(build_client()?, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/predict", self.base_url)
    }
}

#[async_trait]
impl PricePredictor for HttpPredictor {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictError> {
        let url = self.endpoint();
        debug!(%url, "Requesting price prediction");

        let res = self.client.post(&url).json(request).send().await?;

        // the body is decoded whatever the status; only `price` matters
        let status = res.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Prediction service returned non-success status");
        }

        let body = res.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

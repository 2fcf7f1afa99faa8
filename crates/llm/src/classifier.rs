//! HTTP client for the depression classifier sidecar

use std::time::Duration;

use async_trait::async_trait;
use sakina_config::ClassifierSettings;
use sakina_core::{Classifier, ClassifierVerdict, Error, Label, Probabilities, Result};
use serde::{Deserialize, Serialize};

/// Classifier served over HTTP by the model sidecar
///
/// Any transport, status or payload failure collapses into
/// [`Error::ClassifierUnavailable`]; the fusion policy decides whether the
/// lexical overrides can carry the turn.
pub struct HttpClassifier {
    client: reqwest::Client,
    endpoint: String,
    health_endpoint: String,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct PredictResponse {
    prediction: Label,
    probabilities: Probabilities,
}

impl HttpClassifier {
    pub fn new(settings: &ClassifierSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| Error::Configuration(format!("http client: {e}")))?;

        let base = settings.endpoint.trim_end_matches('/');
        Ok(Self {
            client,
            endpoint: format!("{base}/predict"),
            health_endpoint: format!("{base}/health"),
        })
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn predict(&self, text: &str) -> Result<ClassifierVerdict> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&PredictRequest { text })
            .send()
            .await
            .map_err(|e| Error::ClassifierUnavailable(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ClassifierUnavailable(format!(
                "sidecar returned {status}"
            )));
        }

        let parsed: PredictResponse = response
            .json()
            .await
            .map_err(|e| Error::ClassifierUnavailable(format!("malformed response: {e}")))?;

        Ok(ClassifierVerdict::new(parsed.prediction, parsed.probabilities))
    }

    /// Probes the sidecar's health route
    async fn is_available(&self) -> bool {
        self.client
            .get(&self.health_endpoint)
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    fn model_name(&self) -> &str {
        "depression-classifier"
    }
}

//! Azure AI Content Safety gate
//!
//! Calls the `text:analyze` operation and keeps every harm category that
//! scored above zero.

use async_trait::async_trait;
use cb_core::config::ModerationConfig;
use cb_core::error::{BoardError, Result};
use cb_core::moderation::{CategorySeverity, ModerationGate, Verdict};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

#[derive(Debug, Serialize)]
struct AnalyzeTextRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeTextResponse {
    #[serde(default)]
    categories_analysis: Vec<CategoryAnalysis>,
}

#[derive(Debug, Deserialize)]
struct CategoryAnalysis {
    category: String,
    #[serde(default)]
    severity: u32,
}

impl From<AnalyzeTextResponse> for Verdict {
    fn from(resp: AnalyzeTextResponse) -> Self {
        Verdict::from_scores(
            resp.categories_analysis
                .into_iter()
                .map(|c| CategorySeverity::new(c.category, c.severity)),
        )
    }
}

/// Moderation gate backed by Azure AI Content Safety
pub struct ContentSafetyGate {
    client: Client,
    endpoint: String,
    api_key: String,
    api_version: String,
}

impl ContentSafetyGate {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        api_version: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BoardError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            api_version: api_version.into(),
        })
    }

    /// Build from configuration; endpoint and key are required
    pub fn from_config(config: &ModerationConfig) -> Result<Self> {
        let endpoint = config.endpoint.as_deref().ok_or_else(|| {
            BoardError::Config("moderation.endpoint is required for content-safety".to_string())
        })?;
        let api_key = config.api_key.as_deref().ok_or_else(|| {
            BoardError::Config("moderation.api_key is required for content-safety".to_string())
        })?;

        Self::new(endpoint, api_key, &config.api_version, config.timeout())
    }

    fn analyze_url(&self) -> String {
        format!(
            "{}/contentsafety/text:analyze?api-version={}",
            self.endpoint, self.api_version
        )
    }
}

#[async_trait]
impl ModerationGate for ContentSafetyGate {
    async fn analyze(&self, text: &str) -> Result<Verdict> {
        let resp = self
            .client
            .post(self.analyze_url())
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .json(&AnalyzeTextRequest { text })
            .send()
            .await
            .map_err(|e| {
                warn!("Content Safety request failed: {}", e);
                BoardError::ModerationUnavailable(e.to_string())
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            warn!("Content Safety returned {}: {}", status, body);
            return Err(BoardError::ModerationUnavailable(format!(
                "Content Safety returned {}",
                status
            )));
        }

        let parsed: AnalyzeTextResponse = resp
            .json()
            .await
            .map_err(|e| BoardError::ModerationUnavailable(format!("Invalid response: {}", e)))?;

        let verdict = Verdict::from(parsed);
        debug!("Content Safety verdict: safe={}", verdict.is_safe());
        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_analyze_url() {
        let gate = ContentSafetyGate::new(
            "https://example.cognitiveservices.azure.com/",
            "key",
            "2023-10-01",
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(
            gate.analyze_url(),
            "https://example.cognitiveservices.azure.com/contentsafety/text:analyze?api-version=2023-10-01"
        );
    }

    #[test]
    fn test_response_to_verdict() {
        let resp: AnalyzeTextResponse = serde_json::from_str(
            r#"{
                "blocklistsMatch": [],
                "categoriesAnalysis": [
                    {"category": "Hate", "severity": 2},
                    {"category": "SelfHarm", "severity": 0},
                    {"category": "Sexual", "severity": 0},
                    {"category": "Violence", "severity": 4}
                ]
            }"#,
        )
        .unwrap();

        let verdict = Verdict::from(resp);
        assert_eq!(
            verdict.unsafe_categories(),
            &[
                CategorySeverity::new("Hate", 2),
                CategorySeverity::new("Violence", 4)
            ]
        );
    }

    #[test]
    fn test_all_zero_response_is_safe() {
        let resp: AnalyzeTextResponse = serde_json::from_str(
            r#"{"categoriesAnalysis": [{"category": "Hate", "severity": 0}]}"#,
        )
        .unwrap();
        assert!(Verdict::from(resp).is_safe());
    }

    #[test]
    fn test_from_config_missing_key() {
        let config = ModerationConfig {
            endpoint: Some("https://example.com".into()),
            ..ModerationConfig::default()
        };
        let err = ContentSafetyGate::from_config(&config).err().unwrap();
        assert!(err.to_string().contains("api_key"));
    }
}

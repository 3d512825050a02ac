//! HTTP client for a remote analysis service.
//!
//! Each analysis is a `POST` with a JSON body to `<base>/<analysis>/text`
//! asking for the `SERIALIZED` representation, which decodes straight into the
//! outcome types of [`crate::model`]. The version record lives at `<base>/version`.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{AnalysisEngine, EngineError, VersionInfo};
use crate::model::{CoreferenceOutcome, SimplificationOutcome};

/// Default analysis service endpoint.
pub const DEFAULT_ENGINE_URL: &str = "http://localhost:8080";

/// Connection settings for [`RemoteEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub base_url: String,
    /// Per-request timeout; `None` waits for the engine indefinitely
    pub timeout: Option<Duration>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ENGINE_URL.to_string(),
            timeout: None,
        }
    }
}

impl EngineConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisRequest<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    do_coreference: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    isolate_sentences: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    do_complex_categories: Option<bool>,
    format: &'static str,
}

impl<'a> AnalysisRequest<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            do_coreference: None,
            isolate_sentences: None,
            do_complex_categories: None,
            format: "SERIALIZED",
        }
    }
}

pub struct RemoteEngine {
    client: Client,
    config: EngineConfig,
}

impl RemoteEngine {
    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        if config.base_url.trim().is_empty() {
            return Err(EngineError::Config("engine URL is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| EngineError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn post<T: DeserializeOwned>(&self, path: &str, body: &AnalysisRequest<'_>) -> Result<T, EngineError> {
        let url = self.config.endpoint(path);
        debug!("POST {} ({} chars)", url, body.text.len());
        let response = self.client.post(&url).json(body).send()?;
        decode(response)
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T, EngineError> {
    let status = response.status();
    let body = response.text()?;
    if !status.is_success() {
        return Err(EngineError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(serde_json::from_str(&body)?)
}

impl AnalysisEngine for RemoteEngine {
    fn coreference(&self, text: &str) -> Result<CoreferenceOutcome, EngineError> {
        self.post("coreference/text", &AnalysisRequest::new(text))
    }

    fn simplify(
        &self,
        text: &str,
        run_coref_first: bool,
        isolate_sentences: bool,
    ) -> Result<SimplificationOutcome, EngineError> {
        let body = AnalysisRequest {
            do_coreference: Some(run_coref_first),
            isolate_sentences: Some(isolate_sentences),
            ..AnalysisRequest::new(text)
        };
        self.post("discourseSimplification/text", &body)
    }

    fn extract_relations(
        &self,
        text: &str,
        run_coref_first: bool,
        isolate_sentences: bool,
        extract_complex_categories: bool,
    ) -> Result<SimplificationOutcome, EngineError> {
        let body = AnalysisRequest {
            do_coreference: Some(run_coref_first),
            isolate_sentences: Some(isolate_sentences),
            do_complex_categories: Some(extract_complex_categories),
            ..AnalysisRequest::new(text)
        };
        self.post("relationExtraction/text", &body)
    }

    fn version_info(&self) -> Result<VersionInfo, EngineError> {
        let url = self.config.endpoint("version");
        debug!("GET {}", url);
        let response = self.client.get(&url).send()?;
        decode(response)
    }
}

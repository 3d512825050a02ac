//! Seam to the analysis engine that performs the actual NLP work.
//!
//! The CLI only orchestrates: every analysis goes through [`AnalysisEngine`].
//! [`RemoteEngine`] talks to an analysis service over HTTP; [`MockEngine`] is a
//! deterministic offline stand-in for tests.
pub mod mock;
pub mod remote;

pub use mock::{MockCall, MockEngine};
pub use remote::{EngineConfig, RemoteEngine};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{CoreferenceOutcome, SimplificationOutcome};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("engine responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode engine response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("engine configuration error: {0}")]
    Config(String),

    #[error("engine rejected input: {0}")]
    Rejected(String),
}

/// Version record reported by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    /// Anything else the engine reports (build time, component versions, ...)
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

/// External analyses consumed by the batch pipeline.
///
/// Implementations must be shareable across worker threads; every call is a
/// pure function of its arguments from the pipeline's point of view.
pub trait AnalysisEngine: Send + Sync {
    fn coreference(&self, text: &str) -> Result<CoreferenceOutcome, EngineError>;

    fn simplify(
        &self,
        text: &str,
        run_coref_first: bool,
        isolate_sentences: bool,
    ) -> Result<SimplificationOutcome, EngineError>;

    fn extract_relations(
        &self,
        text: &str,
        run_coref_first: bool,
        isolate_sentences: bool,
        extract_complex_categories: bool,
    ) -> Result<SimplificationOutcome, EngineError>;

    fn version_info(&self) -> Result<VersionInfo, EngineError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_info_keeps_extra_fields() {
        let json = r#"{"name":"graphene","version":"3.0.0","buildTime":"today"}"#;
        let info: VersionInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.name, "graphene");
        assert_eq!(info.details["buildTime"], "today");

        let pretty = serde_json::to_string_pretty(&info).unwrap();
        assert!(pretty.contains("\"buildTime\": \"today\""));
    }

    #[test]
    fn engines_are_usable_as_trait_objects() {
        let engine: Box<dyn AnalysisEngine> = Box::new(MockEngine::new());
        assert_eq!(engine.version_info().unwrap().name, "mock");
    }
}

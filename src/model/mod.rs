//! Analysis outcomes as produced by an [`AnalysisEngine`](crate::engine::AnalysisEngine)
//! and their structured (pretty-printed JSON) serialization.
pub mod coreference;
pub mod simplification;

pub use coreference::{CoreferenceChain, CoreferenceOutcome, Mention};
pub use simplification::{
    Element, ElementIndex, LinkedContext, OutSentence, Relation, SimpleContext,
    SimplificationOutcome,
};

use serde::Serialize;

/// Outcome of analyzing one input text. Relation extraction reuses the
/// simplification shape with relation-annotated elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisResult {
    Coreference(CoreferenceOutcome),
    Simplification(SimplificationOutcome),
}

impl AnalysisResult {
    /// Structured serialization of the wrapped outcome (without any variant tag).
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        match self {
            AnalysisResult::Coreference(c) => pretty_json(c),
            AnalysisResult::Simplification(s) => pretty_json(s),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisResult::Coreference(_) => "coreference",
            AnalysisResult::Simplification(_) => "simplification",
        }
    }
}

impl From<CoreferenceOutcome> for AnalysisResult {
    fn from(outcome: CoreferenceOutcome) -> Self {
        AnalysisResult::Coreference(outcome)
    }
}

impl From<SimplificationOutcome> for AnalysisResult {
    fn from(outcome: SimplificationOutcome) -> Self {
        AnalysisResult::Simplification(outcome)
    }
}

pub fn pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

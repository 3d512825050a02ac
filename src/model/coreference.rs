use serde::{Deserialize, Serialize};

/// A single mention of an entity, located by token offsets within a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mention {
    pub text: String,
    pub sentence_idx: usize,
    pub start: usize,
    pub end: usize,
}

/// Mentions that refer to the same entity, headed by the most descriptive one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreferenceChain {
    pub representative: Mention,
    #[serde(default)]
    pub mentions: Vec<Mention>,
}

/// Result of a coreference resolution run over one input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreferenceOutcome {
    /// Input text as it was analyzed
    pub text: String,
    /// Input text with every mention replaced by its chain representative
    pub substituted_text: String,
    #[serde(default)]
    pub chains: Vec<CoreferenceChain>,
}

impl CoreferenceOutcome {
    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

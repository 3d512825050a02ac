//! Named rendering strategies for relation-annotated sentences.
//!
//! Each strategy takes the sentences of a [`SimplificationOutcome`](crate::model::SimplificationOutcome)
//! plus a `resolve` toggle and returns the rendered text:
//! - `default`: sentence-grouped, one line per extraction with indented contexts
//! - `flat`: one tab-separated line per extraction
//! - `rdf`: N-Triples
pub mod default;
pub mod flat;
pub mod rdf;

use std::str::FromStr;

use crate::error::Error;
use crate::model::OutSentence;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RenderStrategy {
    Default,
    Flat,
    Rdf,
}

impl RenderStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            RenderStrategy::Default => "default",
            RenderStrategy::Flat => "flat",
            RenderStrategy::Rdf => "rdf",
        }
    }

    pub fn render(&self, sentences: &[OutSentence], resolve: bool) -> String {
        match self {
            RenderStrategy::Default => default::render(sentences, resolve),
            RenderStrategy::Flat => flat::render(sentences, resolve),
            RenderStrategy::Rdf => rdf::render(sentences, resolve),
        }
    }
}

impl FromStr for RenderStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(RenderStrategy::Default),
            "flat" => Ok(RenderStrategy::Flat),
            "rdf" => Ok(RenderStrategy::Rdf),
            other => Err(Error::Configuration(format!(
                "unknown rendering strategy '{}'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for RenderStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

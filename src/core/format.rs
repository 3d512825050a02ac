//! Selection of the textual representation for each analysis result.
//!
//! The choice is a two-level table: operation, then that operation's format
//! enum, yields a [`Rendering`]. [`format_result`] then applies the rendering to
//! the concrete outcome; any combination the table cannot produce for an
//! outcome kind falls back to the structured serialization.
use crate::core::request::InvocationRequest;
use crate::error::Result;
use crate::model::AnalysisResult;
use crate::render::RenderStrategy;
use crate::types::{CorefFormat, Operation, ReFormat, SimFormat};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Rendering {
    /// Coreference text with every mention substituted
    SubstitutedText,
    /// Pretty-printed JSON of the whole outcome
    Serialized,
    /// The simplification outcome's own sentence-grouped layout
    OutcomeDefault { resolve: bool },
    /// The simplification outcome's own one-line-per-element layout
    OutcomeFlat { resolve: bool },
    /// A named strategy over relation-annotated sentences
    Strategy { strategy: RenderStrategy, resolve: bool },
}

pub fn coreference_rendering(format: CorefFormat) -> Rendering {
    match format {
        CorefFormat::Default => Rendering::SubstitutedText,
        CorefFormat::Serialized => Rendering::Serialized,
    }
}

pub fn simplification_rendering(format: SimFormat) -> Rendering {
    match format {
        SimFormat::Default => Rendering::OutcomeDefault { resolve: false },
        SimFormat::DefaultResolved => Rendering::OutcomeDefault { resolve: true },
        SimFormat::Flat => Rendering::OutcomeFlat { resolve: false },
        SimFormat::FlatResolved => Rendering::OutcomeFlat { resolve: true },
        SimFormat::Serialized => Rendering::Serialized,
    }
}

pub fn relation_rendering(format: ReFormat) -> Rendering {
    let strategy = |strategy, resolve| Rendering::Strategy { strategy, resolve };
    match format {
        ReFormat::Default => strategy(RenderStrategy::Default, false),
        ReFormat::DefaultResolved => strategy(RenderStrategy::Default, true),
        ReFormat::Flat => strategy(RenderStrategy::Flat, false),
        ReFormat::FlatResolved => strategy(RenderStrategy::Flat, true),
        ReFormat::Rdf => strategy(RenderStrategy::Rdf, true),
        ReFormat::Serialized => Rendering::Serialized,
    }
}

/// Rendering selected for `result` under `request`.
///
/// Coreference outcomes always follow the coreference format; simplification
/// outcomes follow the format of the operation that produced them.
pub fn rendering_for(result: &AnalysisResult, request: &InvocationRequest) -> Rendering {
    match (result, request.operation) {
        (AnalysisResult::Coreference(_), _) => coreference_rendering(request.formats.coref),
        (AnalysisResult::Simplification(_), Operation::Re) => relation_rendering(request.formats.re),
        (AnalysisResult::Simplification(_), Operation::Sim) => {
            simplification_rendering(request.formats.sim)
        }
        (AnalysisResult::Simplification(_), Operation::Coref) => Rendering::Serialized,
    }
}

/// Render one result to the text that is printed or written.
pub fn format_result(result: &AnalysisResult, request: &InvocationRequest) -> Result<String> {
    let text = match (rendering_for(result, request), result) {
        (Rendering::SubstitutedText, AnalysisResult::Coreference(c)) => c.substituted_text.clone(),
        (Rendering::OutcomeDefault { resolve }, AnalysisResult::Simplification(s)) => {
            s.default_format(resolve)
        }
        (Rendering::OutcomeFlat { resolve }, AnalysisResult::Simplification(s)) => {
            s.flat_format(resolve)
        }
        (Rendering::Strategy { strategy, resolve }, AnalysisResult::Simplification(s)) => {
            strategy.render(&s.sentences, resolve)
        }
        _ => result.to_pretty_json()?,
    };
    Ok(text)
}

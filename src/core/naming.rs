use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::error;

use crate::core::request::InvocationRequest;
use crate::model::AnalysisResult;
use crate::types::{InputSource, Operation};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// An analysis result paired with the name it is printed or saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedResult {
    /// Position of the item in the batch
    pub index: usize,
    pub name: String,
    pub result: AnalysisResult,
}

/// Shared part of every name in a batch, e.g. `output_sim_coref_`.
pub fn name_prefix(request: &InvocationRequest) -> String {
    let mut prefix = format!("output_{}_", request.operation.tag());
    if matches!(request.operation, Operation::Sim | Operation::Re) && request.options.run_coref_first {
        prefix.push_str("coref_");
    }
    prefix
}

/// Name of item `index`: the batch prefix followed by an item suffix chosen by
/// the input source.
pub fn result_name(index: usize, request: &InvocationRequest) -> String {
    format!("{}{}", name_prefix(request), item_suffix(index, request))
}

fn item_suffix(index: usize, request: &InvocationRequest) -> String {
    let token = request.inputs.get(index);
    match (request.input_source, token) {
        (InputSource::Text, _) => padded_index(index, request.batch_size()),
        (InputSource::File, Some(path)) => {
            let base = Path::new(path)
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| path.clone());
            dash_whitespace(&base)
        }
        (InputSource::Wiki, Some(article)) => dash_whitespace(article),
        (_, None) => {
            error!(
                "No input token for result #{} (batch of {})",
                index,
                request.batch_size()
            );
            padded_index(index, request.batch_size())
        }
    }
}

/// 1-based index, zero-padded to the digit count of the batch size (at least 2).
pub fn padded_index(index: usize, batch_size: usize) -> String {
    let width = batch_size.max(1).to_string().len().max(2);
    format!("{:0width$}", index + 1, width = width)
}

fn dash_whitespace(s: &str) -> String {
    WHITESPACE_RUN.replace_all(s, "-").into_owned()
}

/// Pair every result with its name. `index` is the item's position in the batch.
pub fn name_results(
    results: impl IntoIterator<Item = (usize, AnalysisResult)>,
    request: &InvocationRequest,
) -> Vec<NamedResult> {
    results
        .into_iter()
        .map(|(index, result)| NamedResult {
            index,
            name: result_name(index, request),
            result,
        })
        .collect()
}

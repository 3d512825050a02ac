//! High-level, ergonomic library API: run a whole batch from an
//! [`InvocationRequest`] to printed or written output. Prefer this entrypoint over
//! the individual `core` stages when embedding the pipeline.
use std::io::Write;
use std::path::Path;

use tracing::{error, info};

use crate::core::input::resolve_inputs;
use crate::core::naming::name_results;
use crate::core::request::InvocationRequest;
use crate::core::router::{analyze_batch, analyze_isolated};
use crate::core::sink::emit;
use crate::engine::AnalysisEngine;
use crate::error::{Error, Result};
use crate::model::AnalysisResult;
use crate::types::FailurePolicy;

/// Summary of one batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub inputs: usize,
    pub analyzed: usize,
    pub failed_analyses: usize,
    pub emitted: usize,
    pub failed_outputs: usize,
}

/// `Err(BatchLengthMismatch)` when the number of results differs from the number
/// of inputs. Callers log it and carry on.
pub fn check_batch_length(results: usize, inputs: usize) -> Result<()> {
    if results != inputs {
        return Err(Error::BatchLengthMismatch { results, inputs });
    }
    Ok(())
}

/// Resolve, analyze, name and emit a whole batch.
///
/// Console output goes to `console`; file output goes to `output_dir`. Fatal
/// errors (unsupported input source, analysis failure under
/// [`FailurePolicy::FailFast`]) return before anything is emitted. Per-item
/// rendering and write failures are logged and counted in the report.
pub fn process_batch(
    engine: &dyn AnalysisEngine,
    request: &InvocationRequest,
    console: &mut dyn Write,
    output_dir: &Path,
) -> Result<BatchReport> {
    let texts = resolve_inputs(&request.inputs, request.input_source)?;
    info!(
        "Running {} over {} {} input(s)",
        request.operation,
        texts.len(),
        request.input_source
    );

    let mut report = BatchReport {
        inputs: request.inputs.len(),
        ..BatchReport::default()
    };

    let indexed: Vec<(usize, AnalysisResult)> = match request.policy {
        FailurePolicy::FailFast => {
            let results = analyze_batch(engine, &texts, request).inspect_err(|e| error!("{}", e))?;
            return Ok(emit_batch(results, request, console, output_dir));
        }
        FailurePolicy::Isolate => analyze_isolated(engine, &texts, request)
            .into_iter()
            .enumerate()
            .filter_map(|(i, result)| match result {
                Ok(r) => Some((i, r)),
                Err(_) => {
                    report.failed_analyses += 1;
                    None
                }
            })
            .collect(),
    };

    emit_indexed(indexed, request, console, output_dir, &mut report);
    Ok(report)
}

/// Name and emit the results of a fail-fast batch, one per input in order.
///
/// A result count that differs from the number of inputs is logged as an error;
/// whatever results there are still get emitted.
pub fn emit_batch(
    results: Vec<AnalysisResult>,
    request: &InvocationRequest,
    console: &mut dyn Write,
    output_dir: &Path,
) -> BatchReport {
    let mut report = BatchReport {
        inputs: request.inputs.len(),
        ..BatchReport::default()
    };
    if let Err(e) = check_batch_length(results.len(), request.inputs.len()) {
        error!("{}", e);
    }
    let indexed = results.into_iter().enumerate().collect();
    emit_indexed(indexed, request, console, output_dir, &mut report);
    report
}

fn emit_indexed(
    indexed: Vec<(usize, AnalysisResult)>,
    request: &InvocationRequest,
    console: &mut dyn Write,
    output_dir: &Path,
    report: &mut BatchReport,
) {
    report.analyzed = indexed.len();
    let named = name_results(indexed, request);
    let emitted = emit(&named, request, console, output_dir);
    report.emitted = emitted.emitted;
    report.failed_outputs = emitted.failed;
}

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::core::format::format_result;
use crate::core::naming::NamedResult;
use crate::core::request::InvocationRequest;
use crate::error::{Error, Result};
use crate::types::OutputTarget;

/// Line printed before every console block.
pub const BANNER: &str = "############";

/// Per-item outcome counts of one emit pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmitReport {
    pub emitted: usize,
    pub failed: usize,
}

/// Print or write every named result according to the request's output target.
/// Failures are logged and counted per item; they never stop the remaining items.
pub fn emit(
    items: &[NamedResult],
    request: &InvocationRequest,
    console: &mut dyn Write,
    output_dir: &Path,
) -> EmitReport {
    match request.output_target {
        OutputTarget::Cmdline => emit_console(console, items, request),
        OutputTarget::File => emit_files(output_dir, items, request),
    }
}

pub fn emit_console<W: Write + ?Sized>(
    out: &mut W,
    items: &[NamedResult],
    request: &InvocationRequest,
) -> EmitReport {
    let mut report = EmitReport::default();

    for item in items {
        let text = match format_result(&item.result, request) {
            Ok(text) => text,
            Err(e) => {
                error!("Could not render the result of '{}': {}", item.name, e);
                report.failed += 1;
                continue;
            }
        };

        let block = format!("{}\nName: {} →\n{}\n", BANNER, item.name, text);
        match out.write_all(block.as_bytes()) {
            Ok(()) => report.emitted += 1,
            Err(e) => {
                error!("Could not print the result of '{}': {}", item.name, e);
                report.failed += 1;
            }
        }
    }

    if let Err(e) = out.flush() {
        error!("Could not flush console output: {}", e);
    }

    report
}

pub fn emit_files(dir: &Path, items: &[NamedResult], request: &InvocationRequest) -> EmitReport {
    let mut report = EmitReport::default();

    for item in items {
        match write_result(dir, item, request) {
            Ok(path) => {
                debug!("Wrote {:?}", path);
                report.emitted += 1;
            }
            Err(e) => {
                error!("{}", e);
                report.failed += 1;
            }
        }
    }

    report
}

/// `<dir>/<name>.txt`
pub fn output_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.txt", name))
}

/// Render one item and write it, replacing any existing file of the same name.
/// Nothing is written when rendering fails.
pub fn write_result(dir: &Path, item: &NamedResult, request: &InvocationRequest) -> Result<PathBuf> {
    let text = format_result(&item.result, request)?;
    let path = output_path(dir, &item.name);
    fs::write(&path, text).map_err(|source| Error::OutputWrite {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::InputSource;

/// Turn raw positional tokens into the texts to analyze, one per token.
///
/// `Text` passes tokens through untouched. `File` reads each token as a path;
/// unreadable files yield an empty text and a warning instead of failing the
/// batch. `Wiki` fails the whole invocation.
pub fn resolve_inputs(raw: &[String], source: InputSource) -> Result<Vec<String>> {
    match source {
        InputSource::Text => Ok(raw.to_vec()),
        InputSource::File => Ok(raw.iter().map(|path| read_or_empty(Path::new(path))).collect()),
        InputSource::Wiki => Err(Error::UnsupportedInputMode {
            source_name: source.to_string(),
        }),
    }
}

fn read_or_empty(path: &Path) -> String {
    match read_joined(path) {
        Ok(text) => {
            debug!("Read {} chars from {:?}", text.len(), path);
            text
        }
        Err(e) => {
            warn!("{}", e);
            String::new()
        }
    }
}

/// Whole file with every line followed by a single space.
pub fn read_joined(path: &Path) -> Result<String> {
    let to_err = |source| Error::InputRead {
        path: path.to_path_buf(),
        source,
    };
    let reader = BufReader::new(File::open(path).map_err(to_err)?);

    let mut text = String::new();
    for line in reader.lines() {
        text.push_str(&line.map_err(to_err)?);
        text.push(' ');
    }
    Ok(text)
}

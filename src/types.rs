//! Shared types and enums used across the crate.
//! Includes `Operation`, `InputSource`, `OutputTarget`, the per-operation output
//! formats (`CorefFormat`, `SimFormat`, `ReFormat`) and `FailurePolicy`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    /// Coreference resolution
    #[value(name = "COREF")]
    Coref,
    /// Discourse simplification
    #[value(name = "SIM")]
    Sim,
    /// Relation extraction
    #[value(name = "RE")]
    Re,
}

impl Operation {
    /// Tag used in derived output names.
    pub fn tag(&self) -> &'static str {
        match self {
            Operation::Coref => "coref",
            Operation::Sim => "sim",
            Operation::Re => "re",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Operation::Coref => "COREF",
            Operation::Sim => "SIM",
            Operation::Re => "RE",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputSource {
    /// Positional arguments are the texts themselves
    #[value(name = "TEXT")]
    Text,
    /// Positional arguments are paths to text files
    #[value(name = "FILE")]
    File,
    /// Positional arguments are article identifiers (not supported)
    #[value(name = "WIKI")]
    Wiki,
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::Text => write!(f, "TEXT"),
            InputSource::File => write!(f, "FILE"),
            InputSource::Wiki => write!(f, "WIKI"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutputTarget {
    /// Print every result to standard output
    #[value(name = "CMDLINE")]
    Cmdline,
    /// Write one `<name>.txt` file per result
    #[value(name = "FILE")]
    File,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CorefFormat {
    #[default]
    #[value(name = "DEFAULT")]
    Default,
    #[value(name = "SERIALIZED")]
    Serialized,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SimFormat {
    #[default]
    #[value(name = "DEFAULT")]
    Default,
    #[value(name = "DEFAULT_RESOLVED")]
    DefaultResolved,
    #[value(name = "FLAT")]
    Flat,
    #[value(name = "FLAT_RESOLVED")]
    FlatResolved,
    #[value(name = "SERIALIZED")]
    Serialized,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReFormat {
    #[default]
    #[value(name = "DEFAULT")]
    Default,
    #[value(name = "DEFAULT_RESOLVED")]
    DefaultResolved,
    #[value(name = "FLAT")]
    Flat,
    #[value(name = "FLAT_RESOLVED")]
    FlatResolved,
    #[value(name = "RDF")]
    Rdf,
    #[value(name = "SERIALIZED")]
    Serialized,
}

/// What happens to the rest of the batch when one item's analysis fails.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Abort the whole batch on the first failure.
    #[default]
    FailFast,
    /// Log the failure, leave a gap for that item and keep going.
    Isolate,
}

#![doc = r#"
graphene-cli — batch runner for coreference resolution, discourse simplification
and relation extraction.

The crate does not perform any NLP itself. It takes a list of inputs (raw texts or
files), sends each one through exactly one analysis of an [`AnalysisEngine`],
renders every outcome in the requested textual format and prints the results or
writes one `.txt` file per input. It powers the `graphene` binary and can be
embedded in your own Rust applications.

Quick start: relation extraction to the console
-----------------------------------------------
```rust,no_run
use std::path::Path;
use graphene_cli::{
    process_batch, EngineConfig, InputSource, InvocationRequest, Operation, OutputTarget,
    RemoteEngine,
};

fn main() -> graphene_cli::Result<()> {
    let engine = RemoteEngine::with_config(EngineConfig::new("http://localhost:8080"))?;
    let request = InvocationRequest::new(
        Operation::Re,
        InputSource::Text,
        OutputTarget::Cmdline,
        vec!["The funding will be delayed if Congress fails to act.".to_string()],
    )?;

    let report = process_batch(&engine, &request, &mut std::io::stdout(), Path::new("."))?;
    println!("emitted={} failed={}", report.emitted, report.failed_outputs);
    Ok(())
}
```

Rendering a single outcome
--------------------------
```rust
use graphene_cli::engine::{AnalysisEngine, MockEngine};
use graphene_cli::{
    format_result, InputSource, InvocationRequest, Operation, OutputFormats, OutputTarget,
    ReFormat,
};

let engine = MockEngine::new();
let outcome = engine.extract_relations("Bob eats apples on Monday.", false, false, false).unwrap();
let request = InvocationRequest::new(
    Operation::Re,
    InputSource::Text,
    OutputTarget::Cmdline,
    vec!["Bob eats apples on Monday.".to_string()],
)
.unwrap()
.with_formats(OutputFormats { re: ReFormat::Flat, ..OutputFormats::default() });

let text = format_result(&outcome.into(), &request).unwrap();
assert!(text.contains("Bob\teats\tapples"));
```

Error handling
--------------
All public functions return `graphene_cli::Result<T>`; match on `graphene_cli::Error`
to tell configuration problems apart from engine failures.

Useful modules
--------------
- [`api`] — whole-batch entry point and `BatchReport`.
- [`core`] — request, input resolution, routing, naming, formatting, sinks.
- [`engine`] — the `AnalysisEngine` seam, HTTP and mock engines.
- [`model`] — analysis outcomes and their JSON serialization.
- [`render`] — `default`, `flat` and `rdf` rendering strategies.
- [`types`] — operation, input/output and format enums.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod engine;
pub mod error;
pub mod model;
pub mod render;
pub mod types;

// Curated public API surface
pub use api::{BatchReport, check_batch_length, emit_batch, process_batch};
pub use crate::core::format::{Rendering, format_result, rendering_for};
pub use crate::core::input::resolve_inputs;
pub use crate::core::naming::{NamedResult, name_results, result_name};
pub use crate::core::request::{AnalysisOptions, InvocationRequest, OutputFormats};
pub use crate::core::sink::{EmitReport, emit};
pub use engine::{AnalysisEngine, EngineConfig, EngineError, RemoteEngine, VersionInfo};
pub use error::{Error, Result};
pub use model::{AnalysisResult, CoreferenceOutcome, SimplificationOutcome};
pub use render::RenderStrategy;
pub use types::{
    CorefFormat, FailurePolicy, InputSource, Operation, OutputTarget, ReFormat, SimFormat,
};

//! Command Line Interface (CLI) layer.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that turns the parsed flags into one
//! `InvocationRequest` and hands it to `graphene_cli::process_batch`.
//!
//! If you are embedding the pipeline into another application, prefer the
//! library API (`graphene_cli::api`) over the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::{report_error, run};

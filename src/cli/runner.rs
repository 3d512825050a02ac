use std::io;
use std::path::Path;
use std::time::Duration;

use clap::CommandFactory;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use graphene_cli::{
    AnalysisEngine, AnalysisOptions, EngineConfig, FailurePolicy, InvocationRequest,
    OutputFormats, RemoteEngine, process_batch,
};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn build_engine(args: &CliArgs) -> Result<RemoteEngine, AppError> {
    let config = EngineConfig::new(args.engine_url.clone())
        .with_timeout(args.engine_timeout.map(Duration::from_secs));
    debug!("Using analysis engine at {}", config.base_url);
    RemoteEngine::with_config(config).map_err(|e| AppError::Library(e.into()))
}

/// Validate the parsed arguments and freeze them into one request.
pub fn build_request(args: &CliArgs) -> Result<InvocationRequest, AppError> {
    let operation = args.operation.ok_or(AppError::MissingArgument {
        arg: "--operation".to_string(),
    })?;
    let input = args.input.ok_or(AppError::MissingArgument {
        arg: "--input".to_string(),
    })?;
    let output = args.output.ok_or(AppError::MissingArgument {
        arg: "--output".to_string(),
    })?;
    if args.inputs.is_empty() {
        return Err(AppError::NoInput);
    }

    let policy = if args.continue_on_error {
        FailurePolicy::Isolate
    } else {
        FailurePolicy::FailFast
    };

    let request = InvocationRequest::new(operation, input, output, args.inputs.clone())?
        .with_options(AnalysisOptions {
            run_coref_first: args.do_coreference,
            isolate_sentences: args.isolate_sentences,
            extract_complex_categories: args.do_complex_categories,
        })
        .with_formats(OutputFormats {
            coref: args.coref_format,
            sim: args.sim_format,
            re: args.re_format,
        })
        .with_policy(policy)
        .with_jobs(usize::from(args.jobs));

    Ok(request)
}

fn print_version(engine: &dyn AnalysisEngine) -> Result<(), AppError> {
    let info = engine
        .version_info()
        .map_err(|e| AppError::Library(e.into()))?;
    let json = serde_json::to_string_pretty(&info).map_err(|e| AppError::Version(e.to_string()))?;
    println!("Graphene VersionInfo: {}", json);
    Ok(())
}

/// Print a fatal error to standard error, followed by the usage line for
/// configuration problems.
pub fn report_error(error: &AppError) {
    eprintln!("{}", error);
    if error.shows_usage() {
        eprintln!("{}", CliArgs::command().render_usage());
        eprintln!();
    }
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    init_logging(args.log);

    if args.version {
        let engine = build_engine(&args)?;
        return print_version(&engine);
    }

    let request = build_request(&args)?;
    let engine = build_engine(&args)?;

    let stdout = io::stdout();
    let mut console = stdout.lock();
    let report = process_batch(&engine, &request, &mut console, Path::new("."))?;

    info!("Batch processing complete!");
    info!("Inputs: {}", report.inputs);
    info!("Analyzed: {}", report.analyzed);
    info!("Failed analyses: {}", report.failed_analyses);
    info!("Emitted: {}", report.emitted);
    info!("Failed outputs: {}", report.failed_outputs);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use graphene_cli::{CorefFormat, InputSource, Operation, OutputTarget, ReFormat, SimFormat};

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("graphene").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn full_request_from_flags() {
        let args = parse(&[
            "--operation", "RE",
            "--input", "FILE",
            "--output", "CMDLINE",
            "--reformat", "FLAT_RESOLVED",
            "--doCoreference",
            "--doComplexCategories",
            "--isolateSentences",
            "--jobs", "3",
            "--continue-on-error",
            "a.txt", "b.txt",
        ]);
        let request = build_request(&args).unwrap();
        assert_eq!(request.operation, Operation::Re);
        assert_eq!(request.input_source, InputSource::File);
        assert_eq!(request.output_target, OutputTarget::Cmdline);
        assert_eq!(request.formats.re, ReFormat::FlatResolved);
        assert_eq!(request.formats.sim, SimFormat::Default);
        assert_eq!(request.formats.coref, CorefFormat::Default);
        assert!(request.options.run_coref_first);
        assert!(request.options.extract_complex_categories);
        assert!(request.options.isolate_sentences);
        assert_eq!(request.jobs, 3);
        assert_eq!(request.policy, FailurePolicy::Isolate);
        assert_eq!(request.inputs, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn missing_operation_is_reported() {
        let args = parse(&["--input", "TEXT", "--output", "CMDLINE", "text"]);
        let err = build_request(&args).unwrap_err();
        assert!(matches!(err, AppError::MissingArgument { ref arg } if arg == "--operation"));
        assert!(err.shows_usage());
    }

    #[test]
    fn no_input_tokens_is_reported() {
        let args = parse(&["--operation", "SIM", "--input", "TEXT", "--output", "FILE"]);
        let err = build_request(&args).unwrap_err();
        assert!(matches!(err, AppError::NoInput));
        assert_eq!(err.to_string(), "Input must be at least one entry.");
    }

    #[test]
    fn unknown_values_are_rejected_by_the_parser() {
        let result = CliArgs::try_parse_from(["graphene", "--operation", "PARSE"]);
        assert!(result.is_err());
        let result = CliArgs::try_parse_from(["graphene", "--simformat", "RDF"]);
        assert!(result.is_err());
        let result = CliArgs::try_parse_from(["graphene", "--jobs", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn version_flag_has_a_short_form() {
        assert!(parse(&["-v"]).version);
        assert!(parse(&["--version"]).version);
    }

    #[test]
    fn engine_url_has_a_default() {
        let args = parse(&[]);
        assert!(!args.engine_url.is_empty());
        assert_eq!(args.engine_timeout, None);
    }
}

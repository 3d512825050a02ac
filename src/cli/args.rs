use clap::Parser;

use graphene_cli::engine::remote::DEFAULT_ENGINE_URL;
use graphene_cli::{CorefFormat, InputSource, Operation, OutputTarget, ReFormat, SimFormat};

#[derive(Parser, Debug)]
#[command(
    name = "graphene",
    about = "Run coreference resolution, discourse simplification or relation extraction over texts and files",
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Print the version of the analysis engine
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Choose whether to run Coreference-Resolution [COREF], Discourse-Simplification [SIM], or Relation-Extraction [RE]
    #[arg(long, value_enum)]
    pub operation: Option<Operation>,

    /// Choose the input format [TEXT/FILE/WIKI]
    #[arg(long, value_enum)]
    pub input: Option<InputSource>,

    /// Choose whether to create files [FILE] or print result to commandline [CMDLINE]
    #[arg(long, value_enum)]
    pub output: Option<OutputTarget>,

    /// Textual representation for Coreference-Resolution
    #[arg(long = "corefformat", value_enum, default_value_t = CorefFormat::Default)]
    pub coref_format: CorefFormat,

    /// Textual representation for Discourse-Simplification
    #[arg(long = "simformat", value_enum, default_value_t = SimFormat::Default)]
    pub sim_format: SimFormat,

    /// Textual representation for Relation-Extraction
    #[arg(long = "reformat", value_enum, default_value_t = ReFormat::Default)]
    pub re_format: ReFormat,

    /// Run coreference resolution before Discourse-Simplification or Relation-Extraction
    #[arg(long = "doCoreference", default_value_t = false)]
    pub do_coreference: bool,

    /// Extract complex categories
    #[arg(long = "doComplexCategories", default_value_t = false)]
    pub do_complex_categories: bool,

    /// Process the sentences of each input individually (no relations between neighbouring
    /// sentences). Use it for collections of independent sentences, not for coherent texts.
    #[arg(long = "isolateSentences", default_value_t = false)]
    pub isolate_sentences: bool,

    /// Base URL of the analysis service
    #[arg(long, env = "GRAPHENE_URL", default_value = DEFAULT_ENGINE_URL)]
    pub engine_url: String,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub engine_timeout: Option<u64>,

    /// Number of inputs analyzed concurrently
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: u16,

    /// Keep processing the remaining inputs when one analysis fails
    #[arg(long, default_value_t = false)]
    pub continue_on_error: bool,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Input texts/files/articles
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,
}

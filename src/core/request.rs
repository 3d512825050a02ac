use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{
    CorefFormat, FailurePolicy, InputSource, Operation, OutputTarget, ReFormat, SimFormat,
};

/// Switches forwarded to the engine for simplification and relation extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Run coreference resolution before simplification / extraction
    pub run_coref_first: bool,
    /// Process sentences independently of their neighbours
    pub isolate_sentences: bool,
    /// Extract relations inside simple contexts as well
    pub extract_complex_categories: bool,
}

/// Requested textual representation, one per operation kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFormats {
    pub coref: CorefFormat,
    pub sim: SimFormat,
    pub re: ReFormat,
}

/// Everything one invocation needs, built once from the command line and then
/// only ever passed by shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationRequest {
    pub operation: Operation,
    pub input_source: InputSource,
    pub output_target: OutputTarget,
    pub options: AnalysisOptions,
    pub formats: OutputFormats,
    /// Raw positional tokens: texts, paths or article ids depending on `input_source`
    pub inputs: Vec<String>,
    pub policy: FailurePolicy,
    /// Worker threads for the analysis phase; 1 means sequential
    pub jobs: usize,
}

impl InvocationRequest {
    /// Fails when no input token is given.
    pub fn new(
        operation: Operation,
        input_source: InputSource,
        output_target: OutputTarget,
        inputs: Vec<String>,
    ) -> Result<Self> {
        if inputs.is_empty() {
            return Err(Error::Configuration(
                "Input must be at least one entry.".to_string(),
            ));
        }

        Ok(Self {
            operation,
            input_source,
            output_target,
            options: AnalysisOptions::default(),
            formats: OutputFormats::default(),
            inputs,
            policy: FailurePolicy::default(),
            jobs: 1,
        })
    }

    pub fn with_options(mut self, options: AnalysisOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_formats(mut self, formats: OutputFormats) -> Self {
        self.formats = formats;
        self
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    pub fn batch_size(&self) -> usize {
        self.inputs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_are_a_configuration_error() {
        let err = InvocationRequest::new(Operation::Re, InputSource::Text, OutputTarget::Cmdline, vec![])
            .unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("at least one entry"));
    }

    #[test]
    fn defaults_match_the_command_line_defaults() {
        let request = InvocationRequest::new(
            Operation::Sim,
            InputSource::Text,
            OutputTarget::File,
            vec!["a".to_string()],
        )
        .unwrap();
        assert_eq!(request.formats.coref, CorefFormat::Default);
        assert_eq!(request.formats.sim, SimFormat::Default);
        assert_eq!(request.formats.re, ReFormat::Default);
        assert_eq!(request.options, AnalysisOptions::default());
        assert_eq!(request.policy, FailurePolicy::FailFast);
        assert_eq!(request.jobs, 1);
    }

    #[test]
    fn zero_jobs_means_sequential() {
        let request = InvocationRequest::new(
            Operation::Coref,
            InputSource::Text,
            OutputTarget::Cmdline,
            vec!["a".to_string()],
        )
        .unwrap()
        .with_jobs(0);
        assert_eq!(request.jobs, 1);
    }
}

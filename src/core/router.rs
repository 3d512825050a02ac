use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;

use tracing::{debug, error};

use crate::core::request::InvocationRequest;
use crate::engine::AnalysisEngine;
use crate::error::{Error, Result};
use crate::model::AnalysisResult;
use crate::types::Operation;

/// Run the requested analysis once per text, fail-fast.
///
/// Results come back in input order. The first engine failure aborts the batch;
/// with `jobs > 1` no new item starts once a failure has been observed, and the
/// failure with the lowest index is reported.
pub fn analyze_batch(
    engine: &dyn AnalysisEngine,
    texts: &[String],
    request: &InvocationRequest,
) -> Result<Vec<AnalysisResult>> {
    if request.jobs <= 1 || texts.len() <= 1 {
        return texts
            .iter()
            .enumerate()
            .map(|(i, text)| analyze_one(engine, i, text, request))
            .collect();
    }

    let workers = request.jobs.min(texts.len());
    debug!("Analyzing {} texts on {} workers", texts.len(), workers);

    let cancelled = AtomicBool::new(false);
    let next = AtomicUsize::new(0);
    let slots: Mutex<Vec<Option<AnalysisResult>>> = Mutex::new((0..texts.len()).map(|_| None).collect());
    let failure: Mutex<Option<Error>> = Mutex::new(None);

    thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| {
                loop {
                    if cancelled.load(Ordering::Acquire) {
                        break;
                    }
                    let i = next.fetch_add(1, Ordering::AcqRel);
                    if i >= texts.len() {
                        break;
                    }
                    match analyze_one(engine, i, &texts[i], request) {
                        Ok(result) => {
                            slots.lock().unwrap_or_else(PoisonError::into_inner)[i] = Some(result);
                        }
                        Err(e) => {
                            cancelled.store(true, Ordering::Release);
                            let mut first = failure.lock().unwrap_or_else(PoisonError::into_inner);
                            if first.as_ref().is_none_or(|f| failed_index(&e) < failed_index(f)) {
                                *first = Some(e);
                            }
                            break;
                        }
                    }
                }
            });
        }
    });

    if let Some(e) = failure.into_inner().unwrap_or_else(PoisonError::into_inner) {
        return Err(e);
    }

    slots
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner)
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| Error::Configuration("worker pool finished with unanalyzed items".to_string()))
}

/// Run the requested analysis once per text, isolating failures.
///
/// Every item gets its own result; failures are logged and returned in place.
pub fn analyze_isolated(
    engine: &dyn AnalysisEngine,
    texts: &[String],
    request: &InvocationRequest,
) -> Vec<Result<AnalysisResult>> {
    let run = |(i, text): (usize, &String)| {
        let result = analyze_one(engine, i, text, request);
        if let Err(e) = &result {
            error!("{}", e);
        }
        result
    };

    if request.jobs <= 1 || texts.len() <= 1 {
        return texts.iter().enumerate().map(run).collect();
    }

    let workers = request.jobs.min(texts.len());
    let next = AtomicUsize::new(0);
    let slots: Mutex<Vec<Option<Result<AnalysisResult>>>> =
        Mutex::new((0..texts.len()).map(|_| None).collect());

    thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| {
                loop {
                    let i = next.fetch_add(1, Ordering::AcqRel);
                    if i >= texts.len() {
                        break;
                    }
                    let result = run((i, &texts[i]));
                    slots.lock().unwrap_or_else(PoisonError::into_inner)[i] = Some(result);
                }
            });
        }
    });

    slots
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner)
        .into_iter()
        .enumerate()
        .map(|(i, slot)| {
            slot.unwrap_or_else(|| {
                Err(Error::Configuration(format!("input #{} was never analyzed", i)))
            })
        })
        .collect()
}

/// Exactly one engine call, selected by the requested operation.
pub fn analyze_one(
    engine: &dyn AnalysisEngine,
    index: usize,
    text: &str,
    request: &InvocationRequest,
) -> Result<AnalysisResult> {
    let options = &request.options;
    let outcome = match request.operation {
        Operation::Coref => engine.coreference(text).map(AnalysisResult::from),
        Operation::Sim => engine
            .simplify(text, options.run_coref_first, options.isolate_sentences)
            .map(AnalysisResult::from),
        Operation::Re => engine
            .extract_relations(
                text,
                options.run_coref_first,
                options.isolate_sentences,
                options.extract_complex_categories,
            )
            .map(AnalysisResult::from),
    };
    outcome.map_err(|source| Error::Analysis { index, source })
}

fn failed_index(e: &Error) -> usize {
    match e {
        Error::Analysis { index, .. } => *index,
        _ => usize::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::request::AnalysisOptions;
    use crate::engine::MockEngine;
    use crate::types::{InputSource, OutputTarget};

    fn request(operation: Operation, texts: &[&str]) -> InvocationRequest {
        InvocationRequest::new(
            operation,
            InputSource::Text,
            OutputTarget::Cmdline,
            texts.iter().map(|t| t.to_string()).collect(),
        )
        .unwrap()
    }

    fn texts(request: &InvocationRequest) -> Vec<String> {
        request.inputs.clone()
    }

    #[test]
    fn one_result_per_text_in_order() {
        let engine = MockEngine::new();
        let request = request(Operation::Coref, &["A b.", "C d.", "E f."]);
        let results = analyze_batch(&engine, &texts(&request), &request).unwrap();
        assert_eq!(results.len(), 3);
        let seen: Vec<String> = engine.calls().into_iter().map(|c| c.text).collect();
        assert_eq!(seen, vec!["A b.", "C d.", "E f."]);
        match &results[1] {
            AnalysisResult::Coreference(c) => assert_eq!(c.text, "C d."),
            other => panic!("unexpected {}", other.kind()),
        }
    }

    #[test]
    fn switches_are_forwarded() {
        let engine = MockEngine::new();
        let request = request(Operation::Re, &["Bob eats apples."]).with_options(AnalysisOptions {
            run_coref_first: true,
            isolate_sentences: true,
            extract_complex_categories: true,
        });
        analyze_batch(&engine, &texts(&request), &request).unwrap();
        let call = &engine.calls()[0];
        assert_eq!(call.operation, Operation::Re);
        assert!(call.run_coref_first && call.isolate_sentences && call.extract_complex_categories);
    }

    #[test]
    fn simplification_ignores_complex_categories() {
        let engine = MockEngine::new();
        let request = request(Operation::Sim, &["Bob eats."]).with_options(AnalysisOptions {
            run_coref_first: false,
            isolate_sentences: true,
            extract_complex_categories: true,
        });
        let results = analyze_batch(&engine, &texts(&request), &request).unwrap();
        assert!(matches!(results[0], AnalysisResult::Simplification(_)));
        let call = &engine.calls()[0];
        assert_eq!(call.operation, Operation::Sim);
        assert!(call.isolate_sentences);
        assert!(!call.extract_complex_categories);
    }

    #[test]
    fn first_failure_aborts_the_batch() {
        let engine = MockEngine::failing_on("BOOM");
        let request = request(Operation::Sim, &["ok.", "BOOM.", "never."]);
        let err = analyze_batch(&engine, &texts(&request), &request).unwrap_err();
        assert!(matches!(err, Error::Analysis { index: 1, .. }));
        assert_eq!(engine.calls().len(), 2);
    }

    #[test]
    fn parallel_run_preserves_order() {
        let engine = MockEngine::new();
        let inputs: Vec<String> = (0..20).map(|i| format!("Item {} here.", i)).collect();
        let refs: Vec<&str> = inputs.iter().map(String::as_str).collect();
        let request = request(Operation::Coref, &refs).with_jobs(4);
        let results = analyze_batch(&engine, &texts(&request), &request).unwrap();
        assert_eq!(results.len(), 20);
        for (i, result) in results.iter().enumerate() {
            match result {
                AnalysisResult::Coreference(c) => assert_eq!(c.text, inputs[i]),
                other => panic!("unexpected {}", other.kind()),
            }
        }
    }

    #[test]
    fn parallel_failure_reports_lowest_index() {
        let engine = MockEngine::failing_on("BOOM");
        let request = request(Operation::Re, &["BOOM a.", "b.", "BOOM c.", "d."]).with_jobs(4);
        let err = analyze_batch(&engine, &texts(&request), &request).unwrap_err();
        assert!(matches!(err, Error::Analysis { index: 0, .. }));
    }

    #[test]
    fn isolated_run_keeps_going() {
        let engine = MockEngine::failing_on("BOOM");
        let request = request(Operation::Sim, &["ok.", "BOOM.", "fine."]);
        let results = analyze_isolated(&engine, &texts(&request), &request);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(Error::Analysis { index: 1, .. })));
        assert!(results[2].is_ok());
        assert_eq!(engine.calls().len(), 3);
    }

    #[test]
    fn isolated_parallel_run_keeps_order() {
        let engine = MockEngine::failing_on("BOOM");
        let request = request(Operation::Coref, &["a.", "BOOM.", "c.", "d."]).with_jobs(3);
        let results = analyze_isolated(&engine, &texts(&request), &request);
        assert_eq!(results.len(), 4);
        assert!(results[1].is_err());
        assert!(results.iter().enumerate().all(|(i, r)| (i == 1) != r.is_ok()));
    }
}

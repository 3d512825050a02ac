//! Mock analysis engine that returns predictable outcomes for testing.
//!
//! The "analyses" are deliberately naive: sentences end at `.`, `!` or `?`,
//! clauses are separated by commas, the last clause of a sentence is its core and
//! earlier clauses are linked to it as `BACKGROUND`. A trailing `on <Weekday>`
//! becomes a `TEMPORAL` simple context. Relations split a proposition into its
//! first word, second word and the rest. Pronouns are resolved to the first
//! capitalised token that does not start a sentence.

use std::sync::{Mutex, PoisonError};

use super::{AnalysisEngine, EngineError, VersionInfo};
use crate::model::{
    CoreferenceChain, CoreferenceOutcome, Element, LinkedContext, Mention, OutSentence, Relation,
    SimpleContext, SimplificationOutcome,
};
use crate::types::Operation;

const PRONOUNS: &[&str] = &["he", "she", "it", "they", "him", "her", "them"];
const WEEKDAYS: &[&str] = &[
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

/// One recorded engine call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    pub operation: Operation,
    pub text: String,
    pub run_coref_first: bool,
    pub isolate_sentences: bool,
    pub extract_complex_categories: bool,
}

#[derive(Default)]
pub struct MockEngine {
    fail_marker: Option<String>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every text containing `marker`.
    pub fn failing_on(marker: impl Into<String>) -> Self {
        Self {
            fail_marker: Some(marker.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls received so far, in arrival order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: MockCall) -> Result<(), EngineError> {
        let rejected = self
            .fail_marker
            .as_deref()
            .is_some_and(|marker| call.text.contains(marker));
        let text = call.text.clone();
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
        if rejected {
            return Err(EngineError::Rejected(text));
        }
        Ok(())
    }
}

impl AnalysisEngine for MockEngine {
    fn coreference(&self, text: &str) -> Result<CoreferenceOutcome, EngineError> {
        self.record(MockCall {
            operation: Operation::Coref,
            text: text.to_string(),
            run_coref_first: false,
            isolate_sentences: false,
            extract_complex_categories: false,
        })?;
        Ok(resolve_pronouns(text))
    }

    fn simplify(
        &self,
        text: &str,
        run_coref_first: bool,
        isolate_sentences: bool,
    ) -> Result<SimplificationOutcome, EngineError> {
        self.record(MockCall {
            operation: Operation::Sim,
            text: text.to_string(),
            run_coref_first,
            isolate_sentences,
            extract_complex_categories: false,
        })?;
        Ok(simplify_text(text, run_coref_first, isolate_sentences))
    }

    fn extract_relations(
        &self,
        text: &str,
        run_coref_first: bool,
        isolate_sentences: bool,
        extract_complex_categories: bool,
    ) -> Result<SimplificationOutcome, EngineError> {
        self.record(MockCall {
            operation: Operation::Re,
            text: text.to_string(),
            run_coref_first,
            isolate_sentences,
            extract_complex_categories,
        })?;

        let mut outcome = simplify_text(text, run_coref_first, isolate_sentences);
        for element in outcome.sentences.iter_mut().flat_map(|s| s.elements.iter_mut()) {
            element.relation = Some(split_relation(&element.text));
            if extract_complex_categories {
                for context in &mut element.simple_contexts {
                    context.relation = Some(split_relation(&context.text));
                }
            }
        }
        Ok(outcome)
    }

    fn version_info(&self) -> Result<VersionInfo, EngineError> {
        Ok(VersionInfo {
            name: "mock".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            details: serde_json::Map::new(),
        })
    }
}

fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }
    let rest = current.trim();
    if !rest.is_empty() {
        sentences.push(rest.to_string());
    }
    sentences
}

fn bare(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

fn resolve_pronouns(text: &str) -> CoreferenceOutcome {
    let sentences: Vec<Vec<String>> = split_sentences(text)
        .iter()
        .map(|s| s.split_whitespace().map(str::to_string).collect())
        .collect();

    let antecedent = sentences.iter().enumerate().find_map(|(si, tokens)| {
        tokens.iter().enumerate().skip(1).find_map(|(ti, token)| {
            let word = bare(token);
            let capitalised = word.chars().next().is_some_and(char::is_uppercase);
            let pronoun = PRONOUNS.contains(&word.to_lowercase().as_str());
            (capitalised && !pronoun).then(|| Mention {
                text: word.to_string(),
                sentence_idx: si,
                start: ti,
                end: ti + 1,
            })
        })
    });

    let mut mentions = Vec::new();
    let mut substituted = Vec::new();
    for (si, tokens) in sentences.iter().enumerate() {
        let mut out = Vec::with_capacity(tokens.len());
        for (ti, token) in tokens.iter().enumerate() {
            let word = bare(token);
            match &antecedent {
                Some(head) if PRONOUNS.contains(&word.to_lowercase().as_str()) => {
                    mentions.push(Mention {
                        text: word.to_string(),
                        sentence_idx: si,
                        start: ti,
                        end: ti + 1,
                    });
                    out.push(token.replacen(word, &head.text, 1));
                }
                _ => out.push(token.clone()),
            }
        }
        substituted.push(out.join(" "));
    }

    let chains = match antecedent {
        Some(representative) if !mentions.is_empty() => vec![CoreferenceChain {
            representative,
            mentions,
        }],
        _ => Vec::new(),
    };

    CoreferenceOutcome {
        text: text.to_string(),
        substituted_text: substituted.join(" "),
        chains,
    }
}

fn simplify_text(text: &str, run_coref_first: bool, isolate_sentences: bool) -> SimplificationOutcome {
    let source = if run_coref_first {
        resolve_pronouns(text).substituted_text
    } else {
        text.to_string()
    };

    let mut sentences = Vec::new();
    let mut previous_core: Option<String> = None;

    for (si, sentence) in split_sentences(&source).into_iter().enumerate() {
        let body = sentence.trim_end_matches(['.', '!', '?']);
        let clauses: Vec<&str> = body
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();
        let core_pos = clauses.len().saturating_sub(1);

        let mut elements: Vec<Element> = clauses
            .iter()
            .enumerate()
            .map(|(ci, clause)| {
                let (text, simple_contexts) = split_temporal(clause);
                Element {
                    id: format!("{}.{}", si, ci),
                    sentence_idx: si,
                    text,
                    context_layer: if ci == core_pos { 0 } else { 1 },
                    relation: None,
                    simple_contexts,
                    linked_contexts: Vec::new(),
                }
            })
            .collect();

        if let Some(core) = elements.get(core_pos).map(|e| e.id.clone()) {
            let background: Vec<String> = elements[..core_pos].iter().map(|e| e.id.clone()).collect();
            let core_element = &mut elements[core_pos];
            for target_id in background {
                core_element.linked_contexts.push(LinkedContext {
                    classification: "BACKGROUND".to_string(),
                    target_id,
                });
            }
            if !isolate_sentences {
                if let Some(prev) = previous_core.take() {
                    core_element.linked_contexts.push(LinkedContext {
                        classification: "ELABORATION".to_string(),
                        target_id: prev,
                    });
                }
            }
            previous_core = Some(core);
        }

        sentences.push(OutSentence {
            sentence_idx: si,
            original_sentence: sentence,
            elements,
        });
    }

    SimplificationOutcome {
        coreferenced: run_coref_first,
        sentences,
    }
}

fn split_temporal(clause: &str) -> (String, Vec<SimpleContext>) {
    let words: Vec<&str> = clause.split_whitespace().collect();
    if words.len() > 2 {
        let (head, tail) = words.split_at(words.len() - 2);
        if tail[0] == "on" && WEEKDAYS.contains(&tail[1]) {
            return (
                head.join(" "),
                vec![SimpleContext {
                    classification: "TEMPORAL".to_string(),
                    text: tail.join(" "),
                    relation: None,
                }],
            );
        }
    }
    (words.join(" "), Vec::new())
}

fn split_relation(text: &str) -> Relation {
    let mut words = text.split_whitespace();
    let arg1 = words.next().unwrap_or_default().to_string();
    let predicate = words.next().unwrap_or_default().to_string();
    let arg2 = words.collect::<Vec<_>>().join(" ");
    Relation {
        arg1,
        predicate,
        arg2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TREASURY: &str = "Although the Treasury will announce details of the November refunding on Monday, the funding will be delayed if Congress and President Bush fail to increase the Treasury's borrowing capacity.";

    #[test]
    fn splits_sentences_on_terminators() {
        assert_eq!(
            split_sentences("One. Two! Three? four"),
            vec!["One.", "Two!", "Three?", "four"]
        );
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn relation_extraction_links_clauses() {
        let engine = MockEngine::new();
        let outcome = engine.extract_relations(TREASURY, false, false, false).unwrap();
        assert_eq!(outcome.sentence_count(), 1);
        assert_eq!(outcome.element_count(), 2);
        assert_eq!(outcome.relation_count(), 2);

        let sentence = &outcome.sentences[0];
        let background = &sentence.elements[0];
        assert_eq!(background.context_layer, 1);
        assert_eq!(background.simple_contexts[0].text, "on Monday");
        assert!(background.simple_contexts[0].relation.is_none());

        let core = &sentence.elements[1];
        assert_eq!(core.context_layer, 0);
        assert_eq!(core.linked_contexts[0].target_id, "0.0");
    }

    #[test]
    fn complex_categories_annotate_simple_contexts() {
        let engine = MockEngine::new();
        let outcome = engine.extract_relations(TREASURY, false, false, true).unwrap();
        let context = &outcome.sentences[0].elements[0].simple_contexts[0];
        assert_eq!(
            context.relation,
            Some(Relation {
                arg1: "on".to_string(),
                predicate: "Monday".to_string(),
                arg2: String::new(),
            })
        );
    }

    #[test]
    fn isolated_sentences_are_not_cross_linked() {
        let engine = MockEngine::new();
        let text = "Alice sings. Bob dances.";
        let joined = engine.simplify(text, false, false).unwrap();
        assert_eq!(joined.sentences[1].elements[0].linked_contexts.len(), 1);
        let isolated = engine.simplify(text, false, true).unwrap();
        assert!(isolated.sentences[1].elements[0].linked_contexts.is_empty());
    }

    #[test]
    fn pronouns_resolve_to_first_inner_capitalised_token() {
        let outcome = resolve_pronouns("Yesterday Alice left. She was tired.");
        assert_eq!(outcome.substituted_text, "Yesterday Alice left. Alice was tired.");
        assert_eq!(outcome.chain_count(), 1);
        assert_eq!(outcome.chains[0].representative.text, "Alice");
        assert_eq!(outcome.chains[0].mentions[0].sentence_idx, 1);
    }

    #[test]
    fn no_pronouns_means_no_chains() {
        let outcome = resolve_pronouns("The Treasury announced details.");
        assert!(outcome.chains.is_empty());
    }

    #[test]
    fn records_calls_and_rejects_marked_texts() {
        let engine = MockEngine::failing_on("BOOM");
        assert!(engine.simplify("fine.", true, false).is_ok());
        assert!(matches!(
            engine.coreference("this goes BOOM"),
            Err(EngineError::Rejected(_))
        ));
        let calls = engine.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].operation, Operation::Sim);
        assert!(calls[0].run_coref_first);
        assert_eq!(calls[1].operation, Operation::Coref);
    }
}

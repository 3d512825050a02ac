use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Subject/predicate/object annotation attached by relation extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub arg1: String,
    pub predicate: String,
    pub arg2: String,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.arg1, self.predicate, self.arg2)
    }
}

/// Context attached directly to an element as plain text (e.g. a temporal phrase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleContext {
    pub classification: String,
    pub text: String,
    /// Only present when complex categories were extracted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<Relation>,
}

impl SimpleContext {
    pub fn content(&self) -> String {
        match &self.relation {
            Some(relation) => relation.to_string(),
            None => self.text.clone(),
        }
    }
}

/// Rhetorical link from one element to another element by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedContext {
    pub classification: String,
    pub target_id: String,
}

/// One simplified proposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: String,
    pub sentence_idx: usize,
    pub text: String,
    /// 0 for core propositions, higher for contextual ones
    pub context_layer: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<Relation>,
    #[serde(default)]
    pub simple_contexts: Vec<SimpleContext>,
    #[serde(default)]
    pub linked_contexts: Vec<LinkedContext>,
}

impl Element {
    /// Text shown for this element when something links to it.
    pub fn content(&self) -> String {
        match &self.relation {
            Some(relation) => relation.to_string(),
            None => self.text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutSentence {
    pub sentence_idx: usize,
    pub original_sentence: String,
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// Result of discourse simplification, or of relation extraction when the
/// elements carry `relation` annotations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplificationOutcome {
    /// Whether coreference resolution ran before simplification
    #[serde(default)]
    pub coreferenced: bool,
    #[serde(default)]
    pub sentences: Vec<OutSentence>,
}

impl SimplificationOutcome {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    pub fn element_count(&self) -> usize {
        self.sentences.iter().map(|s| s.elements.len()).sum()
    }

    pub fn relation_count(&self) -> usize {
        self.sentences
            .iter()
            .flat_map(|s| &s.elements)
            .filter(|e| e.relation.is_some())
            .count()
    }

    /// Sentence-grouped layout: a `#` header per sentence, one line per element
    /// and one indented line per context.
    pub fn default_format(&self, resolve: bool) -> String {
        let index = ElementIndex::new(&self.sentences);
        let mut out = String::new();

        for sentence in &self.sentences {
            out.push_str(&format!("# {}\n\n", sentence.original_sentence));
            for element in &sentence.elements {
                out.push_str(&format!(
                    "{}\t{}\t{}\n",
                    element.id, element.context_layer, element.text
                ));
                for line in index.context_lines(element, resolve, false) {
                    out.push_str(&format!("\t{}\n", line));
                }
            }
            out.push('\n');
        }

        out
    }

    /// One tab-separated line per element.
    pub fn flat_format(&self, resolve: bool) -> String {
        let index = ElementIndex::new(&self.sentences);
        let mut out = String::new();

        for sentence in &self.sentences {
            for element in &sentence.elements {
                let mut fields = vec![
                    sentence.original_sentence.clone(),
                    element.id.clone(),
                    element.context_layer.to_string(),
                    element.text.clone(),
                ];
                fields.extend(index.flat_context_fields(element, resolve, false));
                out.push_str(&fields.join("\t"));
                out.push('\n');
            }
        }

        out
    }
}

/// Id lookup over every element of an outcome, used to resolve linked contexts.
pub struct ElementIndex<'a> {
    by_id: HashMap<&'a str, &'a Element>,
}

impl<'a> ElementIndex<'a> {
    pub fn new(sentences: &'a [OutSentence]) -> Self {
        let by_id = sentences
            .iter()
            .flat_map(|s| &s.elements)
            .map(|e| (e.id.as_str(), e))
            .collect();
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a Element> {
        self.by_id.get(id).copied()
    }

    /// Referenced element's content when resolving, otherwise the bare id.
    /// Dangling ids are always printed as-is.
    pub fn link_target(&self, link: &LinkedContext, resolve: bool) -> String {
        if resolve {
            if let Some(element) = self.get(&link.target_id) {
                return element.content();
            }
        }
        link.target_id.clone()
    }

    /// `S:<CLASS>\t<text>` and `L:<CLASS>\t<target>` lines for one element.
    pub fn context_lines(&self, element: &Element, resolve: bool, with_relations: bool) -> Vec<String> {
        let simple = element.simple_contexts.iter().map(|c| {
            format!("S:{}\t{}", c.classification, simple_text(c, with_relations))
        });
        let linked = element
            .linked_contexts
            .iter()
            .map(|l| format!("L:{}\t{}", l.classification, self.link_target(l, resolve)));
        simple.chain(linked).collect()
    }

    /// `S:<CLASS>(<text>)` and `L:<CLASS>(<target>)` fields for one element.
    pub fn flat_context_fields(&self, element: &Element, resolve: bool, with_relations: bool) -> Vec<String> {
        let simple = element.simple_contexts.iter().map(|c| {
            format!("S:{}({})", c.classification, simple_text(c, with_relations))
        });
        let linked = element
            .linked_contexts
            .iter()
            .map(|l| format!("L:{}({})", l.classification, self.link_target(l, resolve)));
        simple.chain(linked).collect()
    }
}

fn simple_text(context: &SimpleContext, with_relations: bool) -> String {
    if with_relations {
        context.content()
    } else {
        context.text.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(id: &str, text: &str, layer: u32) -> Element {
        Element {
            id: id.to_string(),
            sentence_idx: 0,
            text: text.to_string(),
            context_layer: layer,
            relation: None,
            simple_contexts: Vec::new(),
            linked_contexts: Vec::new(),
        }
    }

    fn sample() -> SimplificationOutcome {
        let mut core = element("e1", "The funding will be delayed .", 0);
        core.simple_contexts.push(SimpleContext {
            classification: "TEMPORAL".to_string(),
            text: "on Monday".to_string(),
            relation: None,
        });
        core.linked_contexts.push(LinkedContext {
            classification: "CONDITION".to_string(),
            target_id: "e2".to_string(),
        });
        let cond = element("e2", "Congress fails to increase the capacity .", 1);

        SimplificationOutcome {
            coreferenced: false,
            sentences: vec![OutSentence {
                sentence_idx: 0,
                original_sentence: "The funding will be delayed if Congress fails.".to_string(),
                elements: vec![core, cond],
            }],
        }
    }

    #[test]
    fn default_format_groups_by_sentence() {
        let text = sample().default_format(false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "# The funding will be delayed if Congress fails.");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "e1\t0\tThe funding will be delayed .");
        assert_eq!(lines[3], "\tS:TEMPORAL\ton Monday");
        assert_eq!(lines[4], "\tL:CONDITION\te2");
        assert_eq!(lines[5], "e2\t1\tCongress fails to increase the capacity .");
    }

    #[test]
    fn resolved_format_substitutes_linked_text() {
        let text = sample().default_format(true);
        assert!(text.contains("\tL:CONDITION\tCongress fails to increase the capacity ."));
        assert!(!text.contains("\tL:CONDITION\te2"));
    }

    #[test]
    fn flat_format_is_one_line_per_element() {
        let text = sample().flat_format(false);
        assert_eq!(text.lines().count(), 2);
        let first = text.lines().next().unwrap_or_default();
        assert!(first.starts_with("The funding will be delayed if Congress fails.\te1\t0\t"));
        assert!(first.ends_with("S:TEMPORAL(on Monday)\tL:CONDITION(e2)"));
    }

    #[test]
    fn dangling_link_keeps_id_when_resolving() {
        let mut outcome = sample();
        outcome.sentences[0].elements[0].linked_contexts[0].target_id = "missing".to_string();
        assert!(outcome.default_format(true).contains("L:CONDITION\tmissing"));
    }

    #[test]
    fn counts() {
        let mut outcome = sample();
        assert_eq!(outcome.sentence_count(), 1);
        assert_eq!(outcome.element_count(), 2);
        assert_eq!(outcome.relation_count(), 0);
        outcome.sentences[0].elements[0].relation = Some(Relation {
            arg1: "The funding".to_string(),
            predicate: "will be delayed".to_string(),
            arg2: String::new(),
        });
        assert_eq!(outcome.relation_count(), 1);
    }

    #[test]
    fn json_uses_camel_case_and_reloads() {
        let outcome = sample();
        let json = serde_json::to_string_pretty(&outcome).unwrap();
        assert!(json.contains("\"originalSentence\""));
        assert!(json.contains("\"linkedContexts\""));
        assert!(!json.contains("\"relation\""));
        let loaded = SimplificationOutcome::from_json(&json).unwrap();
        assert_eq!(loaded, outcome);
    }
}

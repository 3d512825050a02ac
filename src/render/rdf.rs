//! N-Triples rendering of relation extractions.
//!
//! Every sentence becomes a resource with its text as label, every extraction a
//! resource carrying subject/predicate/object literals, its context layer and a
//! link back to its sentence. Simple contexts are emitted as one literal property
//! named after their classification; linked contexts point at the target
//! extraction when resolving and carry the raw target id otherwise.
use crate::model::{ElementIndex, OutSentence};

const NAMESPACE: &str = "urn:graphene:";
const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

pub fn render(sentences: &[OutSentence], resolve: bool) -> String {
    let index = ElementIndex::new(sentences);
    let mut out = String::new();

    for sentence in sentences {
        let sentence_iri = iri(&format!("sentence:{}", sentence.sentence_idx));
        out.push_str(&format!("# {}\n", single_line(&sentence.original_sentence)));
        push_triple(
            &mut out,
            &sentence_iri,
            &format!("<{}>", RDFS_LABEL),
            &literal(&sentence.original_sentence),
        );

        for element in &sentence.elements {
            let subject = iri(&format!("extraction:{}", element.id));
            match &element.relation {
                Some(r) => {
                    push_triple(&mut out, &subject, &property("subject"), &literal(&r.arg1));
                    push_triple(&mut out, &subject, &property("predicate"), &literal(&r.predicate));
                    push_triple(&mut out, &subject, &property("object"), &literal(&r.arg2));
                }
                None => {
                    push_triple(&mut out, &subject, &property("text"), &literal(&element.text));
                }
            }
            push_triple(
                &mut out,
                &subject,
                &property("contextLayer"),
                &literal(&element.context_layer.to_string()),
            );
            push_triple(&mut out, &subject, &property("sentence"), &sentence_iri);

            for context in &element.simple_contexts {
                push_triple(
                    &mut out,
                    &subject,
                    &property(&context.classification.to_ascii_lowercase()),
                    &literal(&context.content()),
                );
            }
            for link in &element.linked_contexts {
                let object = if resolve && index.get(&link.target_id).is_some() {
                    iri(&format!("extraction:{}", link.target_id))
                } else {
                    literal(&link.target_id)
                };
                push_triple(
                    &mut out,
                    &subject,
                    &property(&link.classification.to_ascii_lowercase()),
                    &object,
                );
            }
        }
        out.push('\n');
    }

    out
}

fn push_triple(out: &mut String, subject: &str, predicate: &str, object: &str) {
    out.push_str(&format!("{} {} {} .\n", subject, predicate, object));
}

// Whitespace becomes `_`; characters N-Triples forbids inside an IRI are
// percent-encoded.
fn iri(local: &str) -> String {
    let mut encoded = String::with_capacity(local.len());
    for c in local.chars() {
        match c {
            c if c.is_whitespace() => encoded.push('_'),
            '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' | '%' => {
                encoded.push_str(&format!("%{:02X}", c as u32));
            }
            c if c.is_control() => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    encoded.push_str(&format!("%{:02X}", byte));
                }
            }
            c => encoded.push(c),
        }
    }
    format!("<{}{}>", NAMESPACE, encoded)
}

fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

fn property(name: &str) -> String {
    iri(&format!("property:{}", name))
}

/// Quoted literal with `"`, `\`, newline, carriage return and tab escaped.
fn literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('"');
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped.push('"');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures::relation_sentences;

    #[test]
    fn emits_spo_triples() {
        let text = render(&relation_sentences(), true);
        assert!(text.contains(
            "<urn:graphene:extraction:a1> <urn:graphene:property:subject> \"the funding\" .\n"
        ));
        assert!(text.contains(
            "<urn:graphene:extraction:a1> <urn:graphene:property:temporal> \"on Monday\" .\n"
        ));
        assert!(text.contains(
            "<urn:graphene:extraction:a1> <urn:graphene:property:sentence> <urn:graphene:sentence:0> .\n"
        ));
    }

    #[test]
    fn resolved_links_are_resources() {
        let text = render(&relation_sentences(), true);
        assert!(text.contains(
            "<urn:graphene:extraction:a1> <urn:graphene:property:condition> <urn:graphene:extraction:a2> .\n"
        ));
        let unresolved = render(&relation_sentences(), false);
        assert!(unresolved.contains(
            "<urn:graphene:extraction:a1> <urn:graphene:property:condition> \"a2\" .\n"
        ));
    }

    #[test]
    fn literals_are_escaped() {
        let text = render(&relation_sentences(), true);
        assert!(text.contains("\"to increase the \\\"capacity\\\"\""));
        assert_eq!(literal("a\\b\nc"), "\"a\\\\b\\nc\"");
        assert_eq!(literal("a\tb\r"), "\"a\\tb\\r\"");
    }

    #[test]
    fn odd_ids_and_multi_line_sentences_stay_valid() {
        let mut sentences = relation_sentences();
        sentences[0].original_sentence = "First line\nsecond line.".to_string();
        sentences[0].elements[1].id = "x>1".to_string();
        sentences[0].elements[0].linked_contexts[0].target_id = "x>1".to_string();

        let text = render(&sentences, true);
        assert!(text.contains("# First line second line.\n"));
        assert!(text.contains("<urn:graphene:extraction:x%3E1> <urn:graphene:property:subject> \"Congress\" .\n"));
        assert!(text.contains(
            "<urn:graphene:property:condition> <urn:graphene:extraction:x%3E1> .\n"
        ));
        for line in text.lines().filter(|l| !l.is_empty()) {
            assert!(
                line.starts_with("# ") || (line.starts_with('<') && line.ends_with(" .")),
                "not a triple or comment: {}",
                line
            );
        }
    }

    #[test]
    fn iri_encoding() {
        assert_eq!(iri("a b"), "<urn:graphene:a_b>");
        assert_eq!(iri("p|q{r}"), "<urn:graphene:p%7Cq%7Br%7D>");
        assert_eq!(iri("50%"), "<urn:graphene:50%25>");
    }

    #[test]
    fn every_triple_line_is_terminated() {
        let text = render(&relation_sentences(), true);
        for line in text.lines().filter(|l| l.starts_with('<')) {
            assert!(line.ends_with(" ."), "unterminated: {}", line);
        }
    }
}

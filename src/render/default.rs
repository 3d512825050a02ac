use crate::model::{Element, ElementIndex, OutSentence};

pub fn render(sentences: &[OutSentence], resolve: bool) -> String {
    let index = ElementIndex::new(sentences);
    let mut out = String::new();

    for sentence in sentences {
        out.push_str(&format!("# {}\n\n", sentence.original_sentence));
        for element in &sentence.elements {
            out.push_str(&format!(
                "{}\t{}\t{}\n",
                element.id,
                element.context_layer,
                proposition(element)
            ));
            for line in index.context_lines(element, resolve, true) {
                out.push_str(&format!("\t{}\n", line));
            }
        }
        out.push('\n');
    }

    out
}

// Elements without a relation annotation fall back to their plain text.
fn proposition(element: &Element) -> String {
    match &element.relation {
        Some(r) => format!("{}\t{}\t{}", r.arg1, r.predicate, r.arg2),
        None => element.text.clone(),
    }
}

use crate::model::{ElementIndex, OutSentence};

pub fn render(sentences: &[OutSentence], resolve: bool) -> String {
    let index = ElementIndex::new(sentences);
    let mut out = String::new();

    for sentence in sentences {
        for element in &sentence.elements {
            let mut fields = vec![
                sentence.original_sentence.clone(),
                element.id.clone(),
                element.context_layer.to_string(),
            ];
            match &element.relation {
                Some(r) => {
                    fields.push(r.arg1.clone());
                    fields.push(r.predicate.clone());
                    fields.push(r.arg2.clone());
                }
                None => fields.push(element.text.clone()),
            }
            fields.extend(index.flat_context_fields(element, resolve, true));
            out.push_str(&fields.join("\t"));
            out.push('\n');
        }
    }

    out
}

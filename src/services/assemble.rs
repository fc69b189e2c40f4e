use crate::model::entry::{EntryId, EntryRecord};
use crate::parsers::djvu_text::ParsedEntry;

/// Turns parsed lines into rows, numbering them from 1 in input order.
pub fn assemble<I>(parsed: I) -> Vec<EntryRecord>
where
    I: IntoIterator<Item = ParsedEntry>,
{
    let empty_examples = serde_json::Value::Array(Vec::new()).to_string();

    parsed
        .into_iter()
        .enumerate()
        .map(|(i, p)| EntryRecord {
            id: EntryId(i + 1),
            head_deva: String::new(),
            head_roman: p.headword,
            pos: p.pos,
            gloss_en: p.gloss,
            gloss_hi: String::new(),
            examples_json: empty_examples.clone(),
            notes: String::new(),
            ocr_confidence: None,
        })
        .collect()
}

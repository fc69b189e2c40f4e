//! Cheap pre-filter deciding whether a line could hold a `headword: gloss` entry.

pub const SEPARATOR: char = ':';
pub const MAX_LINE_CHARS: usize = 150;
pub const MIN_ALPHABETIC: usize = 3;

/// Rules run in order and stop at the first failure. Expects an already trimmed line.
pub fn is_candidate(line: &str) -> bool {
    if line.is_empty() {
        return false;
    }

    // Long runs are OCR paragraphs, not entries.
    if line.chars().count() > MAX_LINE_CHARS {
        return false;
    }

    if !line.contains(SEPARATOR) {
        return false;
    }

    // Page numbers, rules, stray punctuation.
    let letters = line.chars().filter(|c| c.is_alphabetic()).take(MIN_ALPHABETIC).count();
    letters >= MIN_ALPHABETIC
}

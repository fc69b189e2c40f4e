//! Entry parser for the line-oriented text layer ABBYY exports next to a DjVu scan.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::model::entry::PartOfSpeech;
use crate::parsers::classifier::{self, SEPARATOR};

// HEAD[, POS]: GLOSS
static HEAD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?P<head>[A-Za-zÀ-ž\-'()\[\]{}·.]+)\s*(?:,\s*(?P<pos>n|v|adj|adv|pron|prep|post))?\s*:\s*(?P<gloss>.*)$",
    )
    .expect("headword pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Pattern,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEntry {
    pub headword: String,
    pub pos: Option<PartOfSpeech>,
    pub gloss: String,
    pub kind: MatchKind,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    pub lines: usize,
    pub candidates: usize,
    pub pattern_matches: usize,
    pub fallback_matches: usize,
    pub rejected: usize,
}

// Python `str.splitlines` boundaries; `\r\n` is one break and form feeds split pages.
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0b\x0c\x1c-\x1e\x{85}\x{2028}\x{2029}]")
        .expect("line break pattern is valid")
});

/// No trailing empty line after a final break, and nothing at all for empty text.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = LINE_BREAK.split(text).collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// `char::is_whitespace` plus the ASCII separators `\x1c`..`\x1f`, which ABBYY dumps carry.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\x1c'..='\x1f')
}

fn trim_blank(s: &str) -> &str {
    s.trim_matches(is_blank)
}

/// Parses a line that already passed the classifier.
pub fn parse_line(line: &str) -> Option<ParsedEntry> {
    if let Some(caps) = HEAD_RE.captures(line) {
        let pos = caps.name("pos").and_then(|m| m.as_str().parse().ok());

        return Some(ParsedEntry {
            headword: caps["head"].to_string(),
            pos,
            gloss: caps["gloss"].to_string(),
            kind: MatchKind::Pattern,
        });
    }

    let (head, rest) = line.split_once(SEPARATOR)?;
    let head = trim_blank(head);
    if head.is_empty() {
        return None;
    }

    Some(ParsedEntry {
        headword: head.to_string(),
        pos: None,
        gloss: trim_blank(rest).to_string(),
        kind: MatchKind::Fallback,
    })
}

pub fn parse(text: &str) -> (Vec<ParsedEntry>, ParseStats) {
    let mut entries = Vec::new();
    let mut stats = ParseStats::default();

    for raw in split_lines(text) {
        stats.lines += 1;

        let line = trim_blank(raw);
        if !classifier::is_candidate(line) {
            continue;
        }
        stats.candidates += 1;

        match parse_line(line) {
            Some(entry) => {
                match entry.kind {
                    MatchKind::Pattern => stats.pattern_matches += 1,
                    MatchKind::Fallback => stats.fallback_matches += 1,
                }
                entries.push(entry);
            }
            None => {
                tracing::trace!(line = stats.lines, "unparseable candidate line skipped");
                stats.rejected += 1;
            }
        }
    }

    (entries, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headword_with_pos() {
        let e = parse_line("Ama, n: mother").unwrap();
        assert_eq!(e.headword, "Ama");
        assert_eq!(e.pos, Some(PartOfSpeech::Noun));
        assert_eq!(e.gloss, "mother");
        assert_eq!(e.kind, MatchKind::Pattern);
    }

    #[test]
    fn headword_without_pos() {
        let e = parse_line("odd-token: some gloss text.").unwrap();
        assert_eq!(e.headword, "odd-token");
        assert_eq!(e.pos, None);
        assert_eq!(e.gloss, "some gloss text.");
    }

    #[test]
    fn diacritics_and_brackets_in_headword() {
        let e = parse_line("bā(h)ū, adj: big").unwrap();
        assert_eq!(e.headword, "bā(h)ū");
        assert_eq!(e.pos, Some(PartOfSpeech::Adjective));
        assert_eq!(e.kind, MatchKind::Pattern);
    }

    #[test]
    fn unknown_tag_falls_back_to_split() {
        let e = parse_line("Ama, noun: mother").unwrap();
        assert_eq!(e.kind, MatchKind::Fallback);
        assert_eq!(e.headword, "Ama, noun");
        assert_eq!(e.pos, None);
        assert_eq!(e.gloss, "mother");
    }

    #[test]
    fn fallback_splits_on_first_separator() {
        let e = parse_line("two words: see: other").unwrap();
        assert_eq!(e.kind, MatchKind::Fallback);
        assert_eq!(e.headword, "two words");
        assert_eq!(e.gloss, "see: other");
    }

    #[test]
    fn gloss_may_be_empty() {
        let e = parse_line("Baba:").unwrap();
        assert_eq!(e.headword, "Baba");
        assert_eq!(e.gloss, "");
    }

    #[test]
    fn empty_headword_is_unparseable() {
        assert_eq!(parse_line(": some text"), None);
        assert_eq!(parse_line("no separator here"), None);
    }

    #[test]
    fn parse_skips_non_candidates_and_counts() {
        let text = "A DICTIONARY\n\nAma, n: mother\r\n12\x0cBaba, n: father\n: orphan gloss\nLong phrase without any colon here\n";
        let (entries, stats) = parse(text);

        let heads: Vec<_> = entries.iter().map(|e| e.headword.as_str()).collect();
        assert_eq!(heads, ["Ama", "Baba"]);
        assert_eq!(stats.lines, 7);
        assert_eq!(stats.candidates, 3);
        assert_eq!(stats.pattern_matches, 2);
        assert_eq!(stats.fallback_matches, 0);
        assert_eq!(stats.rejected, 1);
    }

    #[test]
    fn split_lines_handles_page_breaks() {
        assert_eq!(split_lines("a\x0cb\nc\n"), ["a", "b", "c"]);
    }

    #[test]
    fn crlf_is_a_single_break() {
        assert_eq!(split_lines("a\r\nb\r\n"), ["a", "b"]);
        assert_eq!(split_lines("a\r\rb"), ["a", "", "b"]);

        let (entries, stats) = parse("Ama, n: mother\r\nBaba, n: father\r\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(stats.lines, 2);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n\n"), ["", ""]);

        let (entries, stats) = parse("");
        assert!(entries.is_empty());
        assert_eq!(stats.lines, 0);
    }

    #[test]
    fn unit_separators_are_trimmed() {
        let (entries, stats) = parse("\x1fAma: mother\x1f\n");
        assert_eq!(entries[0].headword, "Ama");
        assert_eq!(entries[0].gloss, "mother");
        assert_eq!(stats.pattern_matches, 1);
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

pub const ID_PREFIX: &str = "raw";
pub const ID_WIDTH: usize = 5;

pub const RAW_COLUMNS: [&str; 9] = [
    "id",
    "head_deva",
    "head_roman",
    "pos",
    "gloss_en",
    "gloss_hi",
    "examples_json",
    "notes",
    "ocr_confidence",
];

pub const REVIEW_COLUMNS: [&str; 6] = [
    "suggest_head_deva",
    "suggest_head_roman",
    "suggest_pos",
    "suggest_gloss_en",
    "suggest_gloss_hi",
    "decision",
];

/// Sequential row identifier, rendered as `raw-00001`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub usize);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:0width$}", ID_PREFIX, self.0, width = ID_WIDTH)
    }
}

impl Serialize for EntryId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    #[serde(rename = "n")]
    Noun,
    #[serde(rename = "v")]
    Verb,
    #[serde(rename = "adj")]
    Adjective,
    #[serde(rename = "adv")]
    Adverb,
    #[serde(rename = "pron")]
    Pronoun,
    #[serde(rename = "prep")]
    Preposition,
    #[serde(rename = "post")]
    Postposition,
}

impl FromStr for PartOfSpeech {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" => Ok(PartOfSpeech::Noun),
            "v" => Ok(PartOfSpeech::Verb),
            "adj" => Ok(PartOfSpeech::Adjective),
            "adv" => Ok(PartOfSpeech::Adverb),
            "pron" => Ok(PartOfSpeech::Pronoun),
            "prep" => Ok(PartOfSpeech::Preposition),
            "post" => Ok(PartOfSpeech::Postposition),
            other => Err(format!("unknown part of speech: {other}")),
        }
    }
}

/// One extracted dictionary row. Field order is the column order of the raw sheet.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct EntryRecord {
    pub id: EntryId,

    /// Native-script headword, filled in during review.
    pub head_deva: String,

    pub head_roman: String,

    pub pos: Option<PartOfSpeech>,

    pub gloss_en: String,

    pub gloss_hi: String,

    pub examples_json: String,

    pub notes: String,

    pub ocr_confidence: Option<f32>,
}

/// Row of the review sheet: the raw columns followed by the reviewer's columns.
#[derive(Debug, Serialize)]
pub struct ReviewRecord<'a> {
    pub id: EntryId,
    pub head_deva: &'a str,
    pub head_roman: &'a str,
    pub pos: Option<PartOfSpeech>,
    pub gloss_en: &'a str,
    pub gloss_hi: &'a str,
    pub examples_json: &'a str,
    pub notes: &'a str,
    pub ocr_confidence: Option<f32>,

    pub suggest_head_deva: &'a str,
    pub suggest_head_roman: &'a str,
    pub suggest_pos: &'a str,
    pub suggest_gloss_en: &'a str,
    pub suggest_gloss_hi: &'a str,
    pub decision: &'a str,
}

impl<'a> From<&'a EntryRecord> for ReviewRecord<'a> {
    fn from(e: &'a EntryRecord) -> Self {
        ReviewRecord {
            id: e.id,
            head_deva: &e.head_deva,
            head_roman: &e.head_roman,
            pos: e.pos,
            gloss_en: &e.gloss_en,
            gloss_hi: &e.gloss_hi,
            examples_json: &e.examples_json,
            notes: &e.notes,
            ocr_confidence: e.ocr_confidence,

            suggest_head_deva: "",
            suggest_head_roman: "",
            suggest_pos: "",
            suggest_gloss_en: "",
            suggest_gloss_hi: "",
            decision: "",
        }
    }
}

pub fn review_columns() -> impl Iterator<Item = &'static str> {
    RAW_COLUMNS.iter().chain(REVIEW_COLUMNS.iter()).copied()
}

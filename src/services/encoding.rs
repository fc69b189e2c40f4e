use std::borrow::Cow;
use std::fs;
use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::UTF_8;

use crate::error::PipelineError;

#[derive(Debug)]
pub struct DecodedText {
    pub text: String,
    pub had_errors: bool,
}

/// Reads a text dump as UTF-8, dropping malformed sequences instead of failing.
pub fn read_lossy(path: &Path) -> Result<DecodedText, PipelineError> {
    let bytes = fs::read(path).map_err(|source| PipelineError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let decoded = decode_lossy(&bytes);

    if decoded.had_errors {
        tracing::warn!(
            path = %path.display(),
            likely_encoding = guess_encoding(&bytes),
            "input is not valid UTF-8; malformed bytes were dropped"
        );
    }

    Ok(decoded)
}

pub fn decode_lossy(bytes: &[u8]) -> DecodedText {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);

    let text = match (text, had_errors) {
        (Cow::Owned(s), true) => s.replace('\u{FFFD}', ""),
        (text, _) => text.into_owned(),
    };

    DecodedText { text, had_errors }
}

/// Best guess at what the file really is, for the warning only.
fn guess_encoding(bytes: &[u8]) -> String {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true).name().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_utf8_passes_through() {
        let d = decode_lossy("Āmā, n: mother".as_bytes());
        assert!(!d.had_errors);
        assert_eq!(d.text, "Āmā, n: mother");
    }

    #[test]
    fn bom_is_removed() {
        let d = decode_lossy(b"\xEF\xBB\xBFAma: mother");
        assert!(!d.had_errors);
        assert_eq!(d.text, "Ama: mother");
    }

    #[test]
    fn malformed_bytes_are_dropped() {
        let d = decode_lossy(b"Am\xFFa, n: mo\xC3ther");
        assert!(d.had_errors);
        assert_eq!(d.text, "Ama, n: mother");
    }

    #[test]
    fn guess_reports_a_name() {
        assert!(!guess_encoding(b"caf\xE9 cr\xE8me").is_empty());
    }
}

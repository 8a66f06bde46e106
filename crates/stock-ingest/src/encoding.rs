//! Byte-level text encoding detection for delimited files.
//!
//! Detection order: byte order mark, strict UTF-8 validation, then
//! Windows-1252 as the fallback for legacy spreadsheet exports.

use std::borrow::Cow;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

use crate::error::{IngestError, Result};

/// Detects the most likely encoding of `bytes`.
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    if std::str::from_utf8(bytes).is_ok() {
        return UTF_8;
    }
    WINDOWS_1252
}

/// Decodes `bytes` with `encoding`, stripping a matching byte order mark.
///
/// Malformed sequences are an error rather than replacement characters.
pub fn decode_bytes<'a>(
    bytes: &'a [u8],
    encoding: &'static Encoding,
    path: &Path,
) -> Result<Cow<'a, str>> {
    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(IngestError::Encoding {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        });
    }
    Ok(text)
}

/// Detects the encoding of `bytes` and decodes them.
pub fn decode_detected<'a>(
    bytes: &'a [u8],
    path: &Path,
) -> Result<(&'static Encoding, Cow<'a, str>)> {
    let encoding = detect_encoding(bytes);
    tracing::debug!(
        path = %path.display(),
        encoding = encoding.name(),
        "detected text encoding"
    );
    let text = decode_bytes(bytes, encoding, path)?;
    Ok((encoding, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_utf8() {
        assert_eq!(detect_encoding("Category,Item\nTea,Chai\n".as_bytes()), UTF_8);
        assert_eq!(detect_encoding("Caf\u{e9}".as_bytes()), UTF_8);
    }

    #[test]
    fn test_detect_bom() {
        assert_eq!(detect_encoding(b"\xEF\xBB\xBFItem"), UTF_8);
        assert_eq!(detect_encoding(b"\xFF\xFEI\x00"), encoding_rs::UTF_16LE);
        assert_eq!(detect_encoding(b"\xFE\xFF\x00I"), encoding_rs::UTF_16BE);
    }

    #[test]
    fn test_detect_legacy_fallback() {
        // "Café" in Windows-1252
        assert_eq!(detect_encoding(b"Caf\xE9"), WINDOWS_1252);
    }

    #[test]
    fn test_decode_strips_bom() {
        let path = Path::new("stock.csv");
        let text = decode_bytes(b"\xEF\xBB\xBFItem", UTF_8, path).unwrap();
        assert_eq!(text, "Item");
    }

    #[test]
    fn test_decode_legacy() {
        let path = Path::new("stock.csv");
        let (encoding, text) = decode_detected(b"Caf\xE9", path).unwrap();
        assert_eq!(encoding, WINDOWS_1252);
        assert_eq!(text, "Caf\u{e9}");
    }

    #[test]
    fn test_decode_failure_is_reported() {
        let path = Path::new("stock.csv");
        // Odd trailing byte after a UTF-16LE BOM.
        let result = decode_detected(b"\xFF\xFEI\x00\x00\xD8", path);
        assert!(matches!(result, Err(IngestError::Encoding { .. })));
    }
}

//! Document loading: file bytes → decoded text → typed JSON documents.

use std::fs;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use log::{debug, info};
use serde::de::DeserializeOwned;

use super::types::error::{QuranError, Result};
use super::types::models::{DetailDocument, IndexDocument};

/// Read and parse a JSON document from `path`.
///
/// # Errors
/// - `Io` if the file cannot be opened or read
/// - `Encoding` if the bytes are not valid text
/// - `Parse` if the text is not JSON of the shape `T` expects
pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    info!("Opening document: {}", path.display());
    let bytes = fs::read(path).map_err(|source| QuranError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode_text(&bytes, path)?;
    parse_str(&text, path)
}

/// Load the surah index (`ListQuran.json`).
pub fn load_index(path: impl AsRef<Path>) -> Result<IndexDocument> {
    let index: IndexDocument = load(path)?;
    info!("Index loaded: {} surahs", index.quran.len());
    Ok(index)
}

/// Load the detail document of one surah (`Alquran_<n>.json`).
pub fn load_detail(path: impl AsRef<Path>) -> Result<DetailDocument> {
    let detail: DetailDocument = load(path)?;
    info!(
        "Detail loaded: surah {:?}, {} ayahs",
        detail.number,
        detail.ayahs.len()
    );
    Ok(detail)
}

/// Parse already-read JSON text. `origin` is only used in error messages.
pub fn parse_str<T: DeserializeOwned>(text: &str, origin: impl AsRef<Path>) -> Result<T> {
    serde_json::from_str(text).map_err(|source| QuranError::Parse {
        path: origin.as_ref().to_path_buf(),
        source,
    })
}

/// Decode file bytes to text.
///
/// A BOM selects the encoding (UTF-8, UTF-16LE or UTF-16BE) and is stripped.
/// Without one the bytes must be strict UTF-8.
pub fn decode_text(bytes: &[u8], origin: &Path) -> Result<String> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => {
            debug!("{}: {} BOM detected", origin.display(), encoding.name());
            (encoding, &bytes[bom_len..])
        }
        None => (UTF_8, bytes),
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(|text| text.into_owned())
        .ok_or_else(|| QuranError::Encoding {
            path: origin.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plain_utf8() {
        let text = decode_text("{\"a\":\"عَصْرِ\"}".as_bytes(), Path::new("t.json")).unwrap();
        assert_eq!(text, "{\"a\":\"عَصْرِ\"}");
    }

    #[test]
    fn strips_utf8_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"{\"quran\":[]}");
        let text = decode_text(&bytes, Path::new("t.json")).unwrap();
        assert_eq!(text, "{\"quran\":[]}");
        let index: IndexDocument = parse_str(&text, "t.json").unwrap();
        assert!(index.quran.is_empty());
    }

    #[test]
    fn decodes_utf16le_with_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "{\"quran\":[]}".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let text = decode_text(&bytes, Path::new("t.json")).unwrap();
        assert_eq!(text, "{\"quran\":[]}");
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = decode_text(&[b'{', 0xC3, 0x28, b'}'], Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, QuranError::Encoding { .. }));
        assert!(err.is_document_error());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_str::<IndexDocument>("{\"quran\": [", "broken.json").unwrap_err();
        assert!(matches!(err, QuranError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn wrong_shape_is_a_parse_error() {
        let err = parse_str::<DetailDocument>("{\"verses\": []}", "d.json").unwrap_err();
        assert!(matches!(err, QuranError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_index("/definitely/not/here/ListQuran.json").unwrap_err();
        assert!(matches!(err, QuranError::Io { .. }));
    }
}

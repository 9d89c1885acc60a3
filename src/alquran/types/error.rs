//! Custom error types for the alquran-reader crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum QuranError {
    /// A corpus file is missing or could not be read.
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A corpus file is not valid UTF-8 (or the encoding its BOM declares).
    #[error("Invalid text encoding in {}", .path.display())]
    Encoding { path: PathBuf },

    /// A corpus file is not well-formed JSON, or does not have the expected shape.
    #[error("Malformed document {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The requested surah number is absent from the index document.
    #[error("Surah {0} not found in the index")]
    SurahNotFound(u32),

    /// The detail document holds no ayahs, so not even the first one can be returned.
    #[error(
        "Detail document{} contains no ayahs",
        .surah.map(|n| format!(" for surah {}", n)).unwrap_or_default()
    )]
    EmptyCorpus { surah: Option<u32> },

    /// No surah name is similar enough to the query.
    #[error("No surah name matches '{query}' (best rating {rating:.3})")]
    SurahNameNotMatched { query: String, rating: f64 },

    #[error("Invalid ayah range: {0}")]
    InvalidRange(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// A resolved value could not be serialized for output.
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Settings could not be loaded or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl QuranError {
    /// Whether this error stems from reading or decoding a corpus file.
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            QuranError::Io { .. } | QuranError::Encoding { .. } | QuranError::Parse { .. }
        )
    }
}

/// A convenience `Result` type alias using the crate's `QuranError` type.
pub type Result<T> = std::result::Result<T, QuranError>;

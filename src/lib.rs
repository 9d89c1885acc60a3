//! # alquran-reader
//!
//! A reader for Al-Qur'an JSON corpora: a surah index (`ListQuran.json`) and
//! one detail document per surah (`alquran/Alquran_<n>.json`) carrying the
//! ayahs, their translation and tafsir.
//!
//! Documents are decoded into typed records at load time; lookups are pure
//! functions over them.
pub mod alquran;

// Re-export the main types for convenience
pub use alquran::{
    input::{QueryTarget, SurahRef},
    layout::CorpusLayout,
    loader::{load_detail, load_index},
    query::{find_ayah, find_surah_by_number, locate_ayah, resolve_tafsir},
    range::AyahRange,
    settings::{Settings, SettingsLoader},
    types::models::{Ayah, AyahMatch, DetailDocument, IndexDocument, SurahMeta},
    Passage, PassageAyah, QuranError, QuranReader, Result,
};

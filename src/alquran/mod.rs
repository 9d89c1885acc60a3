//! Core Al-Qur'an corpus reader module
//!
//! # Module Organization
//!
//! - [`loader`]: reads and decodes JSON documents into [`types::models`]
//! - [`query`]: lookups over loaded documents (surah by number, ayah by index, tafsir)
//! - [`matcher`]: fuzzy surah name resolution
//! - [`range`] / [`input`]: user-facing range and query grammar
//! - [`layout`] / [`settings`]: where the corpus lives and how lookups behave
//! - [`reader`]: [`QuranReader`], tying the above together

pub mod input;
pub mod layout;
pub mod loader;
pub mod matcher;
pub mod query;
pub mod range;
pub mod reader;
pub mod settings;
pub mod types;

pub use reader::{Passage, PassageAyah, QuranReader};
pub use types::error::{QuranError, Result};

//! Data structures representing the corpus documents

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The top-level surah index (`ListQuran.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexDocument {
    pub quran: Vec<SurahMeta>,
}

/// Metadata for one surah, as listed in the index.
///
/// Only `number` is required. Fields not modelled here are kept in `extra`
/// so the record serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahMeta {
    pub number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_name: Option<String>,
    #[serde(default, alias = "ayat", skip_serializing_if = "Option::is_none")]
    pub number_of_ayahs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revelation_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SurahMeta {
    /// Best available display name: `name`, then `englishName`, then the number.
    pub fn display_name(&self) -> String {
        self.name
            .as_deref()
            .or(self.english_name.as_deref())
            .map(str::to_owned)
            .unwrap_or_else(|| format!("Surah {}", self.number))
    }
}

/// The detail record of a single surah (`Alquran_<n>.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_name: Option<String>,
    pub ayahs: Vec<Ayah>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single verse.
///
/// `index` is meant to be the 1-based position within the surah, but the
/// source format does not guarantee it is present or unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ayah {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    /// Arabic text.
    pub arb: String,
    /// Indonesian translation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ind: Option<String>,
    /// Commentary keyed by source; a source may be listed with a `null` body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tafsir: Option<BTreeMap<String, Option<String>>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The outcome of a positional ayah lookup.
///
/// `Fallback` means no ayah carried the requested index and the first ayah
/// of the surah was returned instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AyahMatch<'a> {
    Exact(&'a Ayah),
    Fallback(&'a Ayah),
}

impl<'a> AyahMatch<'a> {
    pub fn ayah(&self) -> &'a Ayah {
        match self {
            AyahMatch::Exact(ayah) | AyahMatch::Fallback(ayah) => ayah,
        }
    }

    pub fn into_ayah(self) -> &'a Ayah {
        self.ayah()
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, AyahMatch::Fallback(_))
    }
}

/// Ayahs selected for a range, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct AyahSelection<'a> {
    pub ayahs: Vec<&'a Ayah>,
    /// Set when no ayah fell inside the range and the first ayah was used.
    pub fallback: bool,
}

/// A scored surah name candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameCandidate {
    pub number: u32,
    pub name: String,
    pub rating: f64,
}

/// Result of resolving a free-form surah name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameMatch {
    /// The normalized form of the query that was compared.
    pub input: String,
    pub best: NameCandidate,
    /// Up to five best candidates, highest rating first.
    pub top: Vec<NameCandidate>,
}

use log::{info, warn};
use serde::Serialize;

use super::input::SurahRef;
use super::layout::CorpusLayout;
use super::loader;
use super::matcher;
use super::query::{self, KNOWN_TAFSIR_SOURCES};
use super::range::AyahRange;
use super::settings::{AudioSettings, LookupSettings, Settings};
use super::types::error::{QuranError, Result};
use super::types::models::{Ayah, DetailDocument, IndexDocument, NameMatch, SurahMeta};

/// The main reader for a corpus directory.
///
/// Holds the surah index in memory; detail documents are loaded on demand
/// for each lookup and dropped afterwards.
#[derive(Debug)]
pub struct QuranReader {
    layout: CorpusLayout,
    index: IndexDocument,
    lookup: LookupSettings,
    audio: AudioSettings,
}

/// One resolved ayah, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassageAyah {
    pub index: Option<u32>,
    pub arb: String,
    pub translation: Option<String>,
    pub tafsir: Option<String>,
    pub audio_number: Option<u32>,
    pub audio_url: Option<String>,
}

/// The answer to a surah/ayah lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Passage {
    pub surah: SurahMeta,
    pub range: String,
    pub tafsir_source: String,
    /// No ayah matched the requested range; the first ayah was used instead.
    pub fallback: bool,
    /// Present when the surah was given by name.
    pub name_match: Option<NameMatch>,
    pub ayahs: Vec<PassageAyah>,
}

impl QuranReader {
    /// Open the corpus described by `settings` and load its index.
    ///
    /// # Errors
    /// Any document error from reading the index file.
    pub fn open(settings: &Settings) -> Result<Self> {
        let layout = CorpusLayout::from_settings(&settings.corpus);
        info!("Opening corpus at {}", layout.base_dir().display());
        let index = loader::load_index(layout.index_path())?;

        Ok(Self {
            layout,
            index,
            lookup: settings.lookup.clone(),
            audio: settings.audio.clone(),
        })
    }

    pub fn index(&self) -> &IndexDocument {
        &self.index
    }

    pub fn surahs(&self) -> &[SurahMeta] {
        &self.index.quran
    }

    pub fn surah(&self, number: u32) -> Result<&SurahMeta> {
        query::find_surah_by_number(&self.index, number)
    }

    /// Load the detail document of surah `number`.
    pub fn detail(&self, number: u32) -> Result<DetailDocument> {
        loader::load_detail(self.layout.detail_path(number))
    }

    /// Resolve a number or a free-form name to an index entry.
    pub fn resolve_surah(&self, surah: &SurahRef) -> Result<(&SurahMeta, Option<NameMatch>)> {
        match surah {
            SurahRef::Number(number) => Ok((self.surah(*number)?, None)),
            SurahRef::Name(name) => {
                let found = matcher::find_surah_by_name(&self.index, name, self.lookup.name_threshold)?;
                let meta = self.surah(found.best.number)?;
                Ok((meta, Some(found)))
            }
        }
    }

    /// Look up a surah and an optional ayah range expression.
    ///
    /// Without `ayahs` the first ayah is returned. `tafsir` defaults to the
    /// configured source.
    pub fn passage(&self, surah: &SurahRef, ayahs: Option<&str>, tafsir: Option<&str>) -> Result<Passage> {
        let (meta, name_match) = self.resolve_surah(surah)?;
        let tafsir_source = tafsir.unwrap_or(self.lookup.default_tafsir.as_str()).to_string();
        if !KNOWN_TAFSIR_SOURCES.contains(&tafsir_source.as_str()) {
            warn!("Unknown tafsir source '{}'", tafsir_source);
        }

        let detail = self.detail(meta.number)?;
        if detail.ayahs.is_empty() {
            return Err(QuranError::EmptyCorpus {
                surah: Some(meta.number),
            });
        }

        // An absent or zero count in the index defers to the detail document.
        let max_ayah = meta
            .number_of_ayahs
            .filter(|&n| n > 0)
            .unwrap_or(detail.ayahs.len() as u32);
        let range = match ayahs {
            Some(expr) => AyahRange::parse(expr, max_ayah, self.lookup.max_ayahs)?,
            None => AyahRange::single(1)?,
        };

        let selection = query::ayahs_in_range(&detail, range)?;
        let ayahs = selection
            .ayahs
            .iter()
            .map(|ayah| self.passage_ayah(meta.number, ayah, &tafsir_source))
            .collect();

        Ok(Passage {
            surah: meta.clone(),
            range: range.to_string(),
            tafsir_source,
            fallback: selection.fallback,
            name_match,
            ayahs,
        })
    }

    fn passage_ayah(&self, surah: u32, ayah: &Ayah, tafsir_source: &str) -> PassageAyah {
        let audio_number = ayah
            .index
            .and_then(|index| query::audio_number(&self.index, surah, index));

        PassageAyah {
            index: ayah.index,
            arb: ayah.arb.clone(),
            translation: ayah.ind.clone(),
            tafsir: query::resolve_tafsir(ayah, tafsir_source).map(str::to_owned),
            audio_number,
            audio_url: audio_number.map(|n| self.audio.url_for(n)),
        }
    }
}

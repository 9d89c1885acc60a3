//! Lookups over loaded corpus documents.
//!
//! Every function here is pure: it borrows an already-loaded document and
//! returns references into it.

use log::{debug, warn};

use super::range::AyahRange;
use super::types::error::{QuranError, Result};
use super::types::models::{Ayah, AyahMatch, AyahSelection, DetailDocument, IndexDocument, SurahMeta};

/// Tafsir sources shipped with the standard dataset.
pub const KNOWN_TAFSIR_SOURCES: &[&str] = &[
    "kemenag_ringkas",
    "kemenag",
    "ibnu_katsir",
    "jalalain",
    "quraish_shihab",
];

/// Find the first surah in the index whose `number` equals `number`.
///
/// # Errors
/// `SurahNotFound` when no entry carries that number.
pub fn find_surah_by_number(index: &IndexDocument, number: u32) -> Result<&SurahMeta> {
    index
        .quran
        .iter()
        .find(|surah| surah.number == number)
        .ok_or(QuranError::SurahNotFound(number))
}

/// Locate an ayah by its `index` field, falling back to the first ayah.
///
/// # Errors
/// `EmptyCorpus` when the document has no ayahs at all.
pub fn locate_ayah(detail: &DetailDocument, index: u32) -> Result<AyahMatch<'_>> {
    if let Some(ayah) = detail.ayahs.iter().find(|a| a.index == Some(index)) {
        debug!("Ayah {} found by index", index);
        return Ok(AyahMatch::Exact(ayah));
    }

    match detail.ayahs.first() {
        Some(first) => {
            warn!(
                "Ayah {} not present in surah {:?}, falling back to first ayah",
                index, detail.number
            );
            Ok(AyahMatch::Fallback(first))
        }
        None => Err(QuranError::EmptyCorpus {
            surah: detail.number,
        }),
    }
}

/// Find an ayah by index, or the first ayah if none matches.
pub fn find_ayah(detail: &DetailDocument, index: u32) -> Result<&Ayah> {
    locate_ayah(detail, index).map(AyahMatch::into_ayah)
}

/// Commentary text of `source` for this ayah, if the dataset has it.
pub fn resolve_tafsir<'a>(ayah: &'a Ayah, source: &str) -> Option<&'a str> {
    ayah.tafsir.as_ref()?.get(source)?.as_deref()
}

/// All ayahs whose index lies in `range`, in document order.
///
/// When none does, the same fallback as [`locate_ayah`] applies to the start
/// of the range and a single ayah is returned.
pub fn ayahs_in_range(detail: &DetailDocument, range: AyahRange) -> Result<AyahSelection<'_>> {
    let ayahs: Vec<&Ayah> = detail
        .ayahs
        .iter()
        .filter(|a| a.index.is_some_and(|i| range.contains(i)))
        .collect();

    if !ayahs.is_empty() {
        return Ok(AyahSelection {
            ayahs,
            fallback: false,
        });
    }

    let found = locate_ayah(detail, range.start())?;
    Ok(AyahSelection {
        fallback: found.is_fallback(),
        ayahs: vec![found.into_ayah()],
    })
}

/// Global verse number across the whole corpus, as used by audio recitations.
///
/// The sum of `numberOfAyahs` over every surah numbered below `surah`, plus
/// `ayah`. `None` when one of those counts is missing from the index, or the
/// total does not fit in a `u32`.
pub fn audio_number(index: &IndexDocument, surah: u32, ayah: u32) -> Option<u32> {
    index
        .quran
        .iter()
        .filter(|s| s.number < surah)
        .try_fold(0u32, |offset, s| offset.checked_add(s.number_of_ayahs?))?
        .checked_add(ayah)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alquran::loader::parse_str;

    fn index() -> IndexDocument {
        parse_str(
            r#"{"quran":[
                {"number":1,"name":"Al-Fatihah","numberOfAyahs":7},
                {"number":2,"name":"Al-Baqarah","numberOfAyahs":286},
                {"number":103,"name":"Al-Asr","numberOfAyahs":3},
                {"number":2,"name":"Duplicate"}
            ]}"#,
            "index.json",
        )
        .unwrap()
    }

    fn detail() -> DetailDocument {
        parse_str(
            r#"{"number":103,"ayahs":[
                {"index":1,"arb":"وَالْعَصْرِ","tafsir":{"ibnu_katsir":"Demi masa.","jalalain":null}},
                {"index":2,"arb":"إِنَّ الْإِنْسَانَ لَفِي خُسْرٍ"},
                {"index":3,"arb":"إِلَّا الَّذِينَ آمَنُوا","tafsir":{}}
            ]}"#,
            "detail.json",
        )
        .unwrap()
    }

    #[test]
    fn surah_lookup_returns_first_match() {
        let index = index();
        let surah = find_surah_by_number(&index, 2).unwrap();
        assert_eq!(surah.name.as_deref(), Some("Al-Baqarah"));
    }

    #[test]
    fn surah_lookup_fails_when_absent() {
        let err = find_surah_by_number(&index(), 114).unwrap_err();
        assert!(matches!(err, QuranError::SurahNotFound(114)));
    }

    #[test]
    fn ayah_lookup_exact_and_fallback() {
        let detail = detail();
        let exact = locate_ayah(&detail, 2).unwrap();
        assert!(!exact.is_fallback());
        assert_eq!(exact.ayah().index, Some(2));

        let fallback = locate_ayah(&detail, 99).unwrap();
        assert!(fallback.is_fallback());
        assert_eq!(fallback.ayah(), &detail.ayahs[0]);
    }

    #[test]
    fn fallback_ignores_index_of_first_ayah() {
        let detail: DetailDocument = parse_str(
            r#"{"ayahs":[{"index":5,"arb":"a"},{"arb":"b"}]}"#,
            "odd.json",
        )
        .unwrap();
        assert_eq!(find_ayah(&detail, 1).unwrap().arb, "a");
    }

    #[test]
    fn empty_detail_is_an_error() {
        let detail: DetailDocument = parse_str(r#"{"number":7,"ayahs":[]}"#, "e.json").unwrap();
        let err = find_ayah(&detail, 1).unwrap_err();
        assert!(matches!(err, QuranError::EmptyCorpus { surah: Some(7) }));
    }

    #[test]
    fn tafsir_absence_cases() {
        let detail = detail();
        assert_eq!(resolve_tafsir(&detail.ayahs[0], "ibnu_katsir"), Some("Demi masa."));
        assert_eq!(resolve_tafsir(&detail.ayahs[0], "jalalain"), None);
        assert_eq!(resolve_tafsir(&detail.ayahs[0], "kemenag"), None);
        assert_eq!(resolve_tafsir(&detail.ayahs[1], "ibnu_katsir"), None);
        assert_eq!(resolve_tafsir(&detail.ayahs[2], "ibnu_katsir"), None);
    }

    #[test]
    fn range_selection() {
        let detail = detail();
        let range = AyahRange::new(2, 3).unwrap();
        let selection = ayahs_in_range(&detail, range).unwrap();
        assert!(!selection.fallback);
        let indices: Vec<_> = selection.ayahs.iter().map(|a| a.index).collect();
        assert_eq!(indices, vec![Some(2), Some(3)]);

        let outside = AyahRange::new(10, 12).unwrap();
        let selection = ayahs_in_range(&detail, outside).unwrap();
        assert!(selection.fallback);
        assert_eq!(selection.ayahs, vec![&detail.ayahs[0]]);
    }

    #[test]
    fn audio_numbers_are_global() {
        let index = index();
        assert_eq!(audio_number(&index, 1, 1), Some(1));
        assert_eq!(audio_number(&index, 2, 255), Some(262));
        // Surah 2's duplicate entry has no count.
        assert_eq!(audio_number(&index, 103, 1), None);
    }

    #[test]
    fn audio_number_overflow_is_none() {
        let index: IndexDocument = parse_str(
            r#"{"quran":[{"number":1,"numberOfAyahs":4294967295},{"number":2,"numberOfAyahs":1}]}"#,
            "huge.json",
        )
        .unwrap();
        assert_eq!(audio_number(&index, 2, 1), None);
        assert_eq!(audio_number(&index, 1, u32::MAX), Some(u32::MAX));
        assert_eq!(audio_number(&index, 3, 1), None);
    }
}

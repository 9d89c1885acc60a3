//! Fuzzy surah name resolution.
//!
//! Names are compared with the Sørensen–Dice coefficient over character
//! bigrams after normalization, so "baqa", "Al Baqarah" and "al-baqarah"
//! all land on the same surah.

use std::collections::HashMap;
use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use super::types::error::{QuranError, Result};
use super::types::models::{IndexDocument, NameCandidate, NameMatch};

const TOP_CANDIDATES: usize = 5;

static ARTICLE_PATTERN: OnceLock<Regex> = OnceLock::new();
static NON_LETTER_PATTERN: OnceLock<Regex> = OnceLock::new();

fn article_regex() -> &'static Regex {
    ARTICLE_PATTERN.get_or_init(|| Regex::new(r"(?i)^al\s+").expect("Invalid article regex pattern"))
}

fn non_letter_regex() -> &'static Regex {
    NON_LETTER_PATTERN.get_or_init(|| Regex::new(r"[^a-z]").expect("Invalid letter regex pattern"))
}

/// Lowercase, drop a leading `al ` and every character outside `a-z`.
pub fn normalize_surah_name(name: &str) -> String {
    let lower = name.to_lowercase();
    let without_article = article_regex().replace(&lower, "");
    non_letter_regex().replace_all(&without_article, "").into_owned()
}

/// Dice similarity of two strings over character bigrams, in `0.0..=1.0`.
pub fn compare_two_strings(first: &str, second: &str) -> f64 {
    let first: Vec<char> = first.chars().filter(|c| !c.is_whitespace()).collect();
    let second: Vec<char> = second.chars().filter(|c| !c.is_whitespace()).collect();

    if first == second {
        return 1.0;
    }
    if first.len() < 2 || second.len() < 2 {
        return 0.0;
    }

    let mut bigrams: HashMap<(char, char), usize> = HashMap::new();
    for pair in first.windows(2) {
        *bigrams.entry((pair[0], pair[1])).or_insert(0) += 1;
    }

    let mut intersection = 0usize;
    for pair in second.windows(2) {
        if let Some(count) = bigrams.get_mut(&(pair[0], pair[1])) {
            if *count > 0 {
                *count -= 1;
                intersection += 1;
            }
        }
    }

    (2 * intersection) as f64 / (first.len() + second.len() - 2) as f64
}

/// Resolve a free-form surah name against the index.
///
/// # Errors
/// `SurahNameNotMatched` when the best rating is below `threshold`, or the
/// index is empty.
pub fn find_surah_by_name(index: &IndexDocument, query: &str, threshold: f64) -> Result<NameMatch> {
    let input = normalize_surah_name(query);

    let mut candidates: Vec<NameCandidate> = index
        .quran
        .iter()
        .map(|surah| {
            let name = surah.display_name();
            NameCandidate {
                number: surah.number,
                rating: compare_two_strings(&input, &normalize_surah_name(&name)),
                name,
            }
        })
        .collect();

    // Stable sort keeps index order among equal ratings.
    candidates.sort_by(|a, b| b.rating.total_cmp(&a.rating));

    let best = match candidates.first() {
        Some(best) if best.rating >= threshold => best.clone(),
        best => {
            return Err(QuranError::SurahNameNotMatched {
                query: query.to_string(),
                rating: best.map_or(0.0, |b| b.rating),
            })
        }
    };
    debug!(
        "Name '{}' resolved to surah {} ({}, rating {:.3})",
        query, best.number, best.name, best.rating
    );

    candidates.truncate(TOP_CANDIDATES);
    Ok(NameMatch {
        input,
        best,
        top: candidates,
    })
}

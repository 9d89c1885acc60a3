//! Parsing of human-typed lookups: `2:255`, `2 1-10`, `baqa 1-5`, `yasin`, `list`.

use super::types::error::{QuranError, Result};

/// How the user referred to a surah.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurahRef {
    Number(u32),
    Name(String),
}

/// A parsed lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryTarget {
    /// List every surah in the index.
    List,
    /// One surah, optionally narrowed to an ayah range expression.
    Surah {
        surah: SurahRef,
        ayahs: Option<String>,
    },
}

impl QueryTarget {
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().replace(':', " ");
        let parts: Vec<&str> = normalized.split_whitespace().collect();

        let Some((first, rest)) = parts.split_first() else {
            return Err(QuranError::InvalidQuery("empty query".to_string()));
        };

        if let Ok(number) = first.parse::<u32>() {
            return Ok(QueryTarget::Surah {
                surah: SurahRef::Number(number),
                ayahs: rest.first().map(|s| s.to_string()),
            });
        }

        if first.eq_ignore_ascii_case("list") {
            return Ok(QueryTarget::List);
        }

        let last = parts[parts.len() - 1];
        let last_is_range = parts.len() > 1 && (last.parse::<u32>().is_ok() || last.contains('-'));
        let (name_parts, ayahs) = if last_is_range {
            (&parts[..parts.len() - 1], Some(last.to_string()))
        } else {
            (&parts[..], None)
        };

        Ok(QueryTarget::Surah {
            surah: SurahRef::Name(name_parts.join(" ")),
            ayahs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surah(surah: SurahRef, ayahs: Option<&str>) -> QueryTarget {
        QueryTarget::Surah {
            surah,
            ayahs: ayahs.map(str::to_string),
        }
    }

    #[test]
    fn numeric_forms() {
        assert_eq!(
            QueryTarget::parse("2:255").unwrap(),
            surah(SurahRef::Number(2), Some("255"))
        );
        assert_eq!(
            QueryTarget::parse(" 2 1-10 ").unwrap(),
            surah(SurahRef::Number(2), Some("1-10"))
        );
        assert_eq!(QueryTarget::parse("103").unwrap(), surah(SurahRef::Number(103), None));
    }

    #[test]
    fn named_forms() {
        assert_eq!(
            QueryTarget::parse("baqa 1-5").unwrap(),
            surah(SurahRef::Name("baqa".into()), Some("1-5"))
        );
        assert_eq!(
            QueryTarget::parse("al kahfi 10").unwrap(),
            surah(SurahRef::Name("al kahfi".into()), Some("10"))
        );
        assert_eq!(
            QueryTarget::parse("yasin").unwrap(),
            surah(SurahRef::Name("yasin".into()), None)
        );
    }

    #[test]
    fn hyphenated_single_word_is_a_name() {
        assert_eq!(
            QueryTarget::parse("al-asr").unwrap(),
            surah(SurahRef::Name("al-asr".into()), None)
        );
    }

    #[test]
    fn list_and_empty() {
        assert_eq!(QueryTarget::parse("LIST").unwrap(), QueryTarget::List);
        assert!(matches!(QueryTarget::parse("  "), Err(QuranError::InvalidQuery(_))));
    }
}

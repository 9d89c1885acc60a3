//! On-disk layout of a corpus directory.
//!
//! ```text
//! <base_dir>/
//! ├── ListQuran.json          ← index_path()
//! └── alquran/
//!     ├── Alquran_1.json      ← detail_path(1)
//!     ├── ...
//!     └── Alquran_114.json
//! ```

use std::path::{Path, PathBuf};

use super::settings::CorpusSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusLayout {
    base_dir: PathBuf,
    index_file: String,
    detail_dir: String,
    detail_prefix: String,
}

impl CorpusLayout {
    /// Layout with the standard file names under `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            index_file: "ListQuran.json".to_string(),
            detail_dir: "alquran".to_string(),
            detail_prefix: "Alquran_".to_string(),
        }
    }

    pub fn from_settings(settings: &CorpusSettings) -> Self {
        Self {
            base_dir: settings.base_dir.clone(),
            index_file: settings.index_file.clone(),
            detail_dir: settings.detail_dir.clone(),
            detail_prefix: settings.detail_prefix.clone(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn index_path(&self) -> PathBuf {
        self.base_dir.join(&self.index_file)
    }

    pub fn detail_path(&self, surah: u32) -> PathBuf {
        self.base_dir
            .join(&self.detail_dir)
            .join(format!("{}{}.json", self.detail_prefix, surah))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_paths() {
        let layout = CorpusLayout::new("/srv/quran");
        assert_eq!(layout.index_path(), PathBuf::from("/srv/quran/ListQuran.json"));
        assert_eq!(
            layout.detail_path(103),
            PathBuf::from("/srv/quran/alquran/Alquran_103.json")
        );
    }

    #[test]
    fn settings_layout_matches_standard_one() {
        let settings = crate::alquran::settings::load_defaults().unwrap();
        assert_eq!(CorpusLayout::from_settings(&settings.corpus), CorpusLayout::new("."));
    }
}

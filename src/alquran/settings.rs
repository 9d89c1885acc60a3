//! Layered settings.
//!
//! `defaults/alquran.default.toml` is embedded into the binary; a user TOML
//! file and individual overrides (from CLI flags) are layered on top through
//! [`SettingsLoader`] before deserializing into [`Settings`].

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;

use super::types::error::Result;

const DEFAULT_TOML: &str = include_str!("../../defaults/alquran.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub corpus: CorpusSettings,
    pub lookup: LookupSettings,
    pub audio: AudioSettings,
}

/// Where the corpus files live and how they are named.
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusSettings {
    pub base_dir: PathBuf,
    pub index_file: String,
    pub detail_dir: String,
    pub detail_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LookupSettings {
    pub default_tafsir: String,
    /// Longest ayah range returned for a single query.
    pub max_ayahs: u32,
    /// Minimum similarity for a surah name to be accepted.
    pub name_threshold: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioSettings {
    pub base_url: String,
}

impl AudioSettings {
    pub fn url_for(&self, audio_number: u32) -> String {
        format!("{}/{}.mp3", self.base_url.trim_end_matches('/'), audio_number)
    }
}

/// Builds [`Settings`] from the embedded defaults plus user layers.
///
/// Later layers win: defaults, then files in the order they were added, then
/// overrides.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    builder: ConfigBuilder<DefaultState>,
}

impl SettingsLoader {
    /// Start a loader seeded with `defaults/alquran.default.toml`.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML settings file. A missing file is an error at `build` time.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Layer a TOML settings file that may be absent.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Point the corpus at `dir`, overriding `corpus.base_dir` from every file layer.
    pub fn with_base_dir(self, dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_string_lossy().into_owned();
        self.set_override("corpus.base_dir", dir)
    }

    /// Override a single dotted key, e.g. `lookup.default_tafsir`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge every layer and deserialize.
    ///
    /// # Errors
    /// `Config` when a required file is missing, a value has the wrong type,
    /// or a lookup limit is out of range (`max_ayahs` must be at least 1 and
    /// `name_threshold` within `0.0..=1.0`).
    pub fn build(self) -> Result<Settings> {
        let settings: Settings = self.builder.build()?.try_deserialize()?;
        settings.lookup.validate()?;
        Ok(settings)
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupSettings {
    fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.max_ayahs == 0 {
            return Err(ConfigError::Message(
                "lookup.max_ayahs must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.name_threshold) {
            return Err(ConfigError::Message(format!(
                "lookup.name_threshold must be within 0.0..=1.0, got {}",
                self.name_threshold
            )));
        }
        Ok(())
    }
}

/// Settings from the embedded defaults alone.
pub fn load_defaults() -> Result<Settings> {
    SettingsLoader::new().build()
}

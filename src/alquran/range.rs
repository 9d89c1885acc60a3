//! Ayah range expressions such as `7`, `1-10` or `3-`.

use std::fmt;

use serde::Serialize;

use super::types::error::{QuranError, Result};

/// An inclusive, non-empty range of ayah indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AyahRange {
    start: u32,
    end: u32,
}

impl AyahRange {
    /// Build a range from explicit bounds. Fails if `start` is 0 or `end < start`.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start == 0 || end < start {
            return Err(QuranError::InvalidRange(format!("{}-{}", start, end)));
        }
        Ok(Self { start, end })
    }

    pub fn single(index: u32) -> Result<Self> {
        Self::new(index, index)
    }

    /// Parse a user range against a surah with `max_ayah` verses.
    ///
    /// Bounds are clamped into `1..=max_ayah`; an open or zero end means "to
    /// the last ayah"; ranges longer than `max_len` are shortened from the end.
    pub fn parse(input: &str, max_ayah: u32, max_len: u32) -> Result<Self> {
        let input = input.trim();
        let invalid = || QuranError::InvalidRange(input.to_string());
        if max_ayah == 0 || max_len == 0 {
            return Err(invalid());
        }

        let Some((start, end)) = input.split_once('-') else {
            let index: u32 = input.parse().map_err(|_| invalid())?;
            return Self::single(index.clamp(1, max_ayah));
        };

        let start: u32 = start.trim().parse().map_err(|_| invalid())?;
        let start = start.clamp(1, max_ayah);
        let end = match end.trim() {
            "" => max_ayah,
            text => match text.parse::<u32>().map_err(|_| invalid())? {
                0 => max_ayah,
                n => n.min(max_ayah),
            },
        };

        if end < start {
            return Err(invalid());
        }
        let end = end.min(start.saturating_add(max_len - 1));
        Self::new(start, end)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn contains(&self, index: u32) -> bool {
        (self.start..=self.end).contains(&index)
    }
}

impl fmt::Display for AyahRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

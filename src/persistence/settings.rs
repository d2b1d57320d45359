use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};

use super::get_data_file_path;

pub const SETTINGS_FILE: &str = "settings.json";
pub const SNAPSHOT_FILE: &str = "kanji.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// JSON array of kanji entries served to the app. Defaults to
    /// `kanji.json` in the data directory.
    pub snapshot_path: Option<PathBuf>,
    /// Permute the practice pool once when a session starts.
    pub shuffle: bool,
    /// Compare kun'yomi answers exactly, surrounding whitespace included.
    pub strict_kunyomi: bool,
    /// Convert romaji typed into the kun'yomi field to hiragana.
    pub transliterate_kunyomi: bool,
    pub dark_mode: bool,
    /// Font with CJK coverage. System locations are tried when unset.
    pub font_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            shuffle: false,
            strict_kunyomi: true,
            transliterate_kunyomi: true,
            dark_mode: true,
            font_path: None,
        }
    }
}

impl Settings {
    pub fn snapshot_path(&self) -> PathBuf {
        self.snapshot_path.clone().unwrap_or_else(|| get_data_file_path(SNAPSHOT_FILE))
    }
}

use std::{
    path::Path,
    time::Duration,
};

use serde::{
    Deserialize,
    Serialize,
};

use super::{
    get_data_file_path,
    load_json_or_default,
};

pub const SETTINGS_FILE: &str = "settings.json";

/// Tunable constants of the segmenters and the pipelines. Every field falls back
/// to its default when absent from the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub min_substring_len: usize,
    pub max_morphs: usize,
    pub short_word_len: usize,
    pub fallback_word_len: usize,
    pub min_ending_start: usize,
    pub min_prefix_stem: usize,
    pub max_synonyms: usize,
    pub lookup_timeout_ms: u64,
    pub strict_vocabulary: bool,
    pub threads: usize, // 0 = rayon default
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_substring_len: 2,
            max_morphs: 20,
            short_word_len: 3,
            fallback_word_len: 5,
            min_ending_start: 4,
            min_prefix_stem: 4,
            max_synonyms: 30,
            lookup_timeout_ms: 2000,
            strict_vocabulary: false,
            threads: 0,
        }
    }
}

impl Settings {
    /// Reads `path` when given, otherwise the settings file in the app data dir.
    pub fn load(path: Option<&Path>) -> Self {
        match path {
            Some(path) => load_json_or_default(path),
            None => load_json_or_default(&get_data_file_path(SETTINGS_FILE)),
        }
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }
}

use super::affix_tables::{
    AffixTable,
    AffixTables,
};
use crate::{
    core::{
        utils::{
            split_at_char,
            CharIndexed,
        },
        Segmentation,
    },
    dictionary::paradigm::{
        lookup_or_fallback,
        ParadigmProvider,
    },
    persistence::settings::Settings,
};

/**
 * Strips an inflectional ending, then a suffix, then a prefix from a lemma using
 * the affix tables. Each cut either finds a valid table entry or leaves the text
 * untouched, so the four resulting parts always concatenate back to the lemma.
 */
#[derive(Debug, Clone)]
pub struct RuleSegmenter<'a> {
    tables: AffixTables<'a>,
    /// Minimum char position at which an ending or suffix may start.
    pub min_affix_start: usize,
    /// Minimum chars that must remain after a prefix is removed.
    pub min_prefix_stem: usize,
}

impl Default for RuleSegmenter<'static> {
    fn default() -> Self {
        Self::from_settings(AffixTables::builtin(), &Settings::default())
    }
}

impl<'a> RuleSegmenter<'a> {
    pub fn new(tables: AffixTables<'a>) -> Self {
        let defaults = Settings::default();
        Self::from_settings(tables, &defaults)
    }

    pub fn from_settings(tables: AffixTables<'a>, settings: &Settings) -> Self {
        Self {
            tables,
            min_affix_start: settings.min_ending_start,
            min_prefix_stem: settings.min_prefix_stem,
        }
    }

    /// Earliest start among table entries that end exactly at the end of `text`
    /// and begin at or after `min_affix_start`.
    fn earliest_tail_match(&self, text: &str, table: &AffixTable) -> Option<usize> {
        let text_len = text.char_len();
        table
            .iter()
            .filter(|affix| text.ends_with(affix))
            .map(|affix| text_len - affix.char_len())
            .filter(|start| *start >= self.min_affix_start)
            .min()
    }

    /// Returns `(remainder, ending)`. The char just before the matched ending is
    /// removed together with it.
    pub fn cut_ending(&self, text: &str) -> (String, String) {
        match self.earliest_tail_match(text, self.tables.endings) {
            Some(start) => {
                let (head, tail) = split_at_char(text, start.saturating_sub(1));
                (head.to_string(), tail.to_string())
            }
            None => (text.to_string(), String::new()),
        }
    }

    /// Returns `(remainder, suffix)`, split exactly where the suffix starts.
    pub fn cut_suffix(&self, text: &str) -> (String, String) {
        match self.earliest_tail_match(text, self.tables.suffixes) {
            Some(start) => {
                let (head, tail) = split_at_char(text, start);
                (head.to_string(), tail.to_string())
            }
            None => (text.to_string(), String::new()),
        }
    }

    /// Returns `(stem, prefix)` for the longest table prefix that leaves at least
    /// `min_prefix_stem` chars behind.
    pub fn cut_prefix(&self, text: &str) -> (String, String) {
        let text_len = text.char_len();
        let longest = self
            .tables
            .prefixes
            .iter()
            .filter(|prefix| text.starts_with(prefix))
            .map(|prefix| prefix.char_len())
            .filter(|len| text_len - len >= self.min_prefix_stem)
            .max();

        match longest {
            Some(len) => {
                let (prefix, stem) = split_at_char(text, len);
                (stem.to_string(), prefix.to_string())
            }
            None => (text.to_string(), String::new()),
        }
    }

    pub fn segment_lemma(&self, lemma: &str) -> Segmentation {
        let (without_ending, ending) = self.cut_ending(lemma);
        let (without_suffix, suffix) = self.cut_suffix(&without_ending);
        let (stem, prefix) = self.cut_prefix(&without_suffix);
        Segmentation { prefix, stem, suffix, ending }
    }

    /// Segments the lemma the provider reports for `word`.
    pub fn get_segmentation(&self, word: &str, provider: &dyn ParadigmProvider) -> Segmentation {
        let paradigm = lookup_or_fallback(provider, word);
        self.segment_lemma(&paradigm.lemma)
    }
}

/// Non-empty parts of a segmentation, or `None` when fewer than two remain.
pub fn informative_parts(segmentation: &Segmentation) -> Option<Vec<String>> {
    let parts = segmentation.non_empty_parts();
    (parts.len() >= 2).then_some(parts)
}

pub fn cut_ending(text: &str) -> (String, String) {
    RuleSegmenter::default().cut_ending(text)
}

pub fn cut_suffix(text: &str) -> (String, String) {
    RuleSegmenter::default().cut_suffix(text)
}

pub fn cut_prefix(text: &str) -> (String, String) {
    RuleSegmenter::default().cut_prefix(text)
}

pub fn get_segmentation(word: &str, provider: &dyn ParadigmProvider) -> Segmentation {
    RuleSegmenter::default().get_segmentation(word, provider)
}

//! Statistical segmentation: mines substrings shared across the inflected forms
//! of a word and keeps the best supported ones.

use std::collections::{
    HashMap,
    HashSet,
};

use crate::{
    core::{
        utils::{
            substrings,
            CharIndexed,
        },
        Paradigm,
    },
    persistence::settings::Settings,
};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CandidateRecord {
    pub support: usize,
    pub score: f64,
}

/// Candidate substrings in first-seen order with their accumulated records.
#[derive(Debug, Default)]
pub struct CandidateTable<'a> {
    order: Vec<&'a str>,
    records: HashMap<&'a str, CandidateRecord>,
}

impl<'a> CandidateTable<'a> {
    fn bump(&mut self, candidate: &'a str, score: f64) {
        let record = self.records.entry(candidate).or_insert_with(|| {
            self.order.push(candidate);
            CandidateRecord::default()
        });
        record.support += 1;
        record.score += score;
    }

    pub fn get(&self, candidate: &str) -> Option<CandidateRecord> {
        self.records.get(candidate).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Materialized `(candidate, record)` pairs in first-seen order.
    pub fn entries(&self) -> Vec<(&'a str, CandidateRecord)> {
        self.order.iter().map(|candidate| (*candidate, self.records[candidate])).collect()
    }
}

#[derive(Debug, Clone)]
pub struct StatisticalSegmenter {
    pub min_substring_len: usize,
    pub max_morphs: usize,
    pub short_word_len: usize,
    pub fallback_word_len: usize,
}

impl Default for StatisticalSegmenter {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl StatisticalSegmenter {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            min_substring_len: settings.min_substring_len,
            max_morphs: settings.max_morphs,
            short_word_len: settings.short_word_len,
            fallback_word_len: settings.fallback_word_len,
        }
    }

    /// Support = number of forms containing the substring, each form counted once.
    /// Score = sum of the substring length over those forms.
    pub fn root_candidates<'a>(&self, paradigm: &'a Paradigm) -> CandidateTable<'a> {
        let mut table = CandidateTable::default();
        for lexeme in &paradigm.forms {
            let mut seen = HashSet::new();
            for candidate in substrings(lexeme, self.min_substring_len) {
                if seen.insert(candidate) {
                    table.bump(candidate, candidate.char_len() as f64);
                }
            }
        }
        table
    }

    /// Support = raw occurrence count over all forms.
    /// Score = sum of sqrt(length) over every occurrence.
    pub fn morph_candidates<'a>(&self, paradigm: &'a Paradigm) -> CandidateTable<'a> {
        let mut table = CandidateTable::default();
        for lexeme in &paradigm.forms {
            for candidate in substrings(lexeme, self.min_substring_len) {
                table.bump(candidate, (candidate.char_len() as f64).sqrt());
            }
        }
        table
    }

    /// The longest substring present in every form of the paradigm. Equal lengths
    /// go to the candidate seen first.
    pub fn get_root(&self, word: &str, paradigm: &Paradigm) -> Option<String> {
        if paradigm.is_empty() {
            return None;
        }

        let form_count = paradigm.len();
        let table = self.root_candidates(paradigm);

        let mut root: Option<&str> = None;
        for (candidate, record) in table.entries() {
            if record.support != form_count {
                continue;
            }
            if root.map_or(true, |best| candidate.char_len() > best.char_len()) {
                root = Some(candidate);
            }
        }

        tracing::trace!(word, forms = form_count, root = ?root, "root selection");
        root.map(str::to_string)
    }

    /// Ranked morph candidates for a word.
    ///
    /// Words shorter than `short_word_len` are returned whole. Words shorter than
    /// `fallback_word_len` get the first `max_morphs` candidates in first-seen
    /// order, unscored. Longer words keep candidates occurring in more than half
    /// the forms, ranked by score, and return at most half of them.
    pub fn get_morphs(&self, word: &str, paradigm: &Paradigm) -> Vec<String> {
        let word_len = word.char_len();
        if word_len < self.short_word_len {
            return vec![word.to_string()];
        }

        let table = self.morph_candidates(paradigm);

        if word_len < self.fallback_word_len {
            return table
                .entries()
                .into_iter()
                .take(self.max_morphs)
                .map(|(candidate, _)| candidate.to_string())
                .collect();
        }

        let lexeme_count = paradigm.len();
        let mut ranked: Vec<(&str, CandidateRecord)> = table
            .entries()
            .into_iter()
            .filter(|(_, record)| record.support * 2 > lexeme_count)
            .collect();

        // Stable sort keeps first-seen order among equal scores.
        ranked.sort_by(|a, b| b.1.score.total_cmp(&a.1.score));

        let last = self.max_morphs.min(ranked.len() / 2);
        ranked.into_iter().take(last).map(|(candidate, _)| candidate.to_string()).collect()
    }
}

pub fn get_root(word: &str, paradigm: &Paradigm) -> Option<String> {
    StatisticalSegmenter::default().get_root(word, paradigm)
}

pub fn get_morphs(word: &str, paradigm: &Paradigm) -> Vec<String> {
    StatisticalSegmenter::default().get_morphs(word, paradigm)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paradigm(lemma: &str, forms: &[&str]) -> Paradigm {
        Paradigm::new(lemma, forms.iter().map(|f| f.to_string()).collect())
    }

    #[test]
    fn test_root_of_verb_paradigm() {
        let p = paradigm("читать", &["читаю", "читаешь", "читает"]);
        assert_eq!(get_root("читаю", &p), Some("чита".to_string()));
    }

    #[test]
    fn test_root_support_never_exceeds_form_count() {
        // "аа" occurs twice inside "ааа" but counts once for that form.
        let p = paradigm("ааа", &["ааа", "ааб"]);
        let segmenter = StatisticalSegmenter::default();
        let table = segmenter.root_candidates(&p);
        for (_, record) in table.entries() {
            assert!(record.support <= p.len());
        }
        assert_eq!(table.get("аа").map(|r| r.support), Some(2));
        assert_eq!(table.get("аа").map(|r| r.score), Some(4.0));
        assert_eq!(get_root("ааа", &p), Some("аа".to_string()));
    }

    #[test]
    fn test_root_absent_without_full_support() {
        let p = paradigm("кот", &["кот", "пёс"]);
        assert_eq!(get_root("кот", &p), None);
        assert_eq!(get_root("кот", &paradigm("кот", &[])), None);
    }

    #[test]
    fn test_root_of_single_form_is_whole_form() {
        let p = Paradigm::identity("слово");
        assert_eq!(get_root("слово", &p), Some("слово".to_string()));
    }

    #[test]
    fn test_root_tie_goes_to_first_seen() {
        // "аб" and "вг" both have full support and equal length.
        let p = paradigm("абвг", &["абxвг", "вгxаб"]);
        assert_eq!(get_root("абвг", &p), Some("аб".to_string()));
    }

    #[test]
    fn test_morphs_of_short_word_is_word() {
        let p = paradigm("ёж", &["ёж", "ежа", "ежу"]);
        assert_eq!(get_morphs("ёж", &p), vec!["ёж".to_string()]);
        assert_eq!(get_morphs("я", &Paradigm::identity("я")), vec!["я".to_string()]);
    }

    #[test]
    fn test_morph_occurrences_accumulate() {
        let p = paradigm("ааа", &["ааа"]);
        let table = StatisticalSegmenter::default().morph_candidates(&p);
        let record = table.get("аа").unwrap();
        assert_eq!(record.support, 2);
        assert!((record.score - 2.0 * 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_morphs_fallback_is_first_seen_order() {
        let p = paradigm("кота", &["кота", "коту"]);
        let morphs = get_morphs("кота", &p);
        assert_eq!(morphs, vec!["ко", "кот", "кота", "от", "ота", "та", "коту", "оту", "ту"]);
    }

    #[test]
    fn test_morphs_fallback_capped() {
        let segmenter = StatisticalSegmenter { max_morphs: 3, ..StatisticalSegmenter::default() };
        let p = paradigm("кота", &["кота"]);
        assert_eq!(segmenter.get_morphs("кота", &p), vec!["ко", "кот", "кота"]);
    }

    #[test]
    fn test_morphs_ranked_by_score_with_majority_support() {
        let p = paradigm("читать", &["читаю", "читаешь", "читает"]);
        let morphs = get_morphs("читаешь", &p);

        // Only the 10 spans of "читае" occur in at least two of the three forms,
        // so half of them are returned.
        assert_eq!(morphs, vec!["чита", "чит", "ита", "читае", "чи"]);
    }

    #[test]
    fn test_morphs_capped_at_max_morphs() {
        // Both forms share the 55 spans of their first 11 chars, so half of the
        // majority candidates would be 27.
        let p = paradigm("абвгдежзийкл", &["абвгдежзийкл", "абвгдежзийкм"]);
        let morphs = get_morphs("абвгдежзийкл", &p);

        assert_eq!(morphs.len(), 20);
        assert_eq!(morphs[..3], ["абвгдежзийк", "абвгдежзий", "бвгдежзийк"]);
        assert!(morphs.iter().all(|m| m.char_len() >= 6 && !m.ends_with('л')));
    }

    #[test]
    fn test_morphs_empty_when_nothing_has_majority() {
        let p = paradigm("слово", &["слово", "текст", "фраза"]);
        assert!(get_morphs("слово", &p).is_empty());
    }
}

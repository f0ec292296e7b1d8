use std::{
    collections::HashMap,
    io::Write,
};

use crate::core::{
    MorphError,
    MorphInfo,
    WordMorphs,
};

/// Corpus-level morph statistics: for every morph, how many words produced it
/// and the sum of those words' frequencies. Also keeps the per-word records in
/// the order they were added.
#[derive(Debug, Clone, Default)]
pub struct MorphAggregator {
    info: HashMap<String, MorphInfo>,
    records: Vec<WordMorphs>,
}

impl MorphAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, word: &str, frequency: u64, morphs: Vec<String>) {
        let morphs: Vec<String> = morphs.into_iter().filter(|morph| !morph.is_empty()).collect();

        for morph in &morphs {
            let entry = self.info.entry(morph.clone()).or_default();
            entry.document_count += 1;
            entry.weighted_sum += frequency;
        }

        self.records.push(WordMorphs { word: word.to_string(), morphs });
    }

    /// Folds `other` into `self`. Records of `other` are appended after ours.
    pub fn merge(&mut self, other: MorphAggregator) {
        for (morph, info) in other.info {
            let entry = self.info.entry(morph).or_default();
            entry.document_count += info.document_count;
            entry.weighted_sum += info.weighted_sum;
        }
        self.records.extend(other.records);
    }

    pub fn get(&self, morph: &str) -> Option<MorphInfo> {
        self.info.get(morph).copied()
    }

    pub fn records(&self) -> &[WordMorphs] {
        &self.records
    }

    /// Morph table sorted by morph text.
    pub fn morph_info(&self) -> Vec<(&str, MorphInfo)> {
        let mut entries: Vec<(&str, MorphInfo)> =
            self.info.iter().map(|(morph, info)| (morph.as_str(), *info)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn morph_count(&self) -> usize {
        self.info.len()
    }

    pub fn word_count(&self) -> usize {
        self.records.len()
    }

    /// `word<TAB>morph morph ...`, one line per word.
    pub fn write_word_morphs<W: Write>(&self, writer: &mut W) -> Result<(), MorphError> {
        for record in &self.records {
            writeln!(writer, "{}\t{}", record.word, record.morphs.join(" "))?;
        }
        Ok(())
    }

    /// `morph<TAB>document_count<TAB>weighted_sum`, one line per morph.
    pub fn write_morph_info<W: Write>(&self, writer: &mut W) -> Result<(), MorphError> {
        for (morph, info) in self.morph_info() {
            writeln!(writer, "{}\t{}\t{}", morph, info.document_count, info.weighted_sum)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn morphs(items: &[&str]) -> Vec<String> {
        items.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_single_word_aggregation() {
        let mut aggregator = MorphAggregator::new();
        aggregator.add("читаю", 100, morphs(&["чита"]));
        assert_eq!(aggregator.get("чита"), Some(MorphInfo { document_count: 1, weighted_sum: 100 }));
    }

    #[test]
    fn test_weighted_sum_counts_words_containing_morph() {
        let triples = [
            ("читаю", 10, morphs(&["чита", "ю"])),
            ("читает", 5, morphs(&["чита", "ет"])),
            ("дом", 7, morphs(&["дом"])),
            ("бегает", 2, morphs(&["бега", "ет"])),
        ];

        let mut aggregator = MorphAggregator::new();
        for (word, frequency, list) in triples.iter().cloned() {
            aggregator.add(word, frequency, list);
        }

        for (morph, info) in aggregator.morph_info() {
            let containing: Vec<u64> = triples
                .iter()
                .filter(|(_, _, list)| list.iter().any(|m| m == morph))
                .map(|(_, frequency, _)| *frequency)
                .collect();
            assert_eq!(info.document_count, containing.len() as u64);
            assert_eq!(info.weighted_sum, containing.iter().sum::<u64>());
        }
        assert_eq!(aggregator.get("ет"), Some(MorphInfo { document_count: 2, weighted_sum: 7 }));
        assert_eq!(aggregator.word_count(), 4);
        assert_eq!(aggregator.morph_count(), 5);
    }

    #[test]
    fn test_empty_morphs_are_ignored() {
        let mut aggregator = MorphAggregator::new();
        aggregator.add("дом", 3, morphs(&["", "дом", ""]));
        assert_eq!(aggregator.morph_count(), 1);
        assert_eq!(aggregator.records()[0].morphs, vec!["дом"]);
    }

    #[test]
    fn test_merge_matches_sequential_adds() {
        let mut sequential = MorphAggregator::new();
        sequential.add("а", 1, morphs(&["x", "y"]));
        sequential.add("б", 2, morphs(&["y"]));
        sequential.add("в", 4, morphs(&["x"]));

        let mut left = MorphAggregator::new();
        left.add("а", 1, morphs(&["x", "y"]));
        let mut right = MorphAggregator::new();
        right.add("б", 2, morphs(&["y"]));
        right.add("в", 4, morphs(&["x"]));
        left.merge(right);

        assert_eq!(left.morph_info(), sequential.morph_info());
        assert_eq!(left.records(), sequential.records());
    }

    #[test]
    fn test_output_formats() {
        let mut aggregator = MorphAggregator::new();
        aggregator.add("подоконник", 3, morphs(&["подо", "конн", "ик"]));
        aggregator.add("слово", 2, Vec::new());
        aggregator.add("ключик", 5, morphs(&["ключ", "ик"]));

        let mut words = Vec::new();
        aggregator.write_word_morphs(&mut words).unwrap();
        assert_eq!(
            String::from_utf8(words).unwrap(),
            "подоконник\tподо конн ик\nслово\t\nключик\tключ ик\n"
        );

        let mut info = Vec::new();
        aggregator.write_morph_info(&mut info).unwrap();
        assert_eq!(
            String::from_utf8(info).unwrap(),
            "ик\t2\t8\nключ\t1\t5\nконн\t1\t3\nподо\t1\t3\n"
        );
    }
}

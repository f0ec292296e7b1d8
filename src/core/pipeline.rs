use std::{
    collections::HashSet,
    fs::File,
    io::{
        BufWriter,
        Write,
    },
    path::Path,
    time::Instant,
};

use rayon::prelude::*;

use super::{
    MorphError,
    VocabEntry,
};
use crate::{
    dictionary::{
        paradigm::{
            lookup_or_fallback,
            ParadigmProvider,
        },
        synonyms::load_synonyms,
    },
    persistence::settings::Settings,
    segmentation::{
        affix_tables::AffixTables,
        rule_segmenter::{
            informative_parts,
            RuleSegmenter,
        },
        statistical::StatisticalSegmenter,
    },
    tools::analysis::{
        rank_synonyms,
        MorphAggregator,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmenterKind {
    /// Ranked substrings shared across the paradigm.
    Statistical,
    /// The single substring common to every form.
    Root,
    /// Prefix, stem, suffix and ending cut from the lemma.
    RuleBased,
}

pub struct SegmentationPipeline<'a> {
    provider: &'a dyn ParadigmProvider,
    statistical: StatisticalSegmenter,
    rules: RuleSegmenter<'static>,
    threads: usize,
}

impl<'a> SegmentationPipeline<'a> {
    pub fn new(provider: &'a dyn ParadigmProvider, settings: &Settings) -> Self {
        Self {
            provider,
            statistical: StatisticalSegmenter::from_settings(settings),
            rules: RuleSegmenter::from_settings(AffixTables::builtin(), settings),
            threads: settings.threads,
        }
    }

    /// Morphs for one word, or `None` when the word produces no record.
    pub fn segment_word(&self, kind: SegmenterKind, word: &str) -> Option<Vec<String>> {
        if word.is_empty() {
            return None;
        }

        match kind {
            SegmenterKind::Statistical => {
                let paradigm = lookup_or_fallback(self.provider, word);
                Some(self.statistical.get_morphs(word, &paradigm))
            }
            SegmenterKind::Root => {
                let paradigm = lookup_or_fallback(self.provider, word);
                self.statistical.get_root(word, &paradigm).map(|root| vec![root])
            }
            SegmenterKind::RuleBased => {
                let segmentation = self.rules.get_segmentation(word, self.provider);
                informative_parts(&segmentation)
            }
        }
    }

    /// Segments the whole vocabulary in parallel and reduces the per-word results
    /// into one aggregator. Word records keep vocabulary order.
    pub fn run(&self, kind: SegmenterKind, vocabulary: &[VocabEntry]) -> Result<MorphAggregator, MorphError> {
        let started = Instant::now();
        let aggregate = || {
            vocabulary
                .par_iter()
                .fold(MorphAggregator::new, |mut aggregator, entry| {
                    if let Some(morphs) = self.segment_word(kind, &entry.word) {
                        aggregator.add(&entry.word, entry.frequency, morphs);
                    }
                    aggregator
                })
                .reduce(MorphAggregator::new, |mut left, right| {
                    left.merge(right);
                    left
                })
        };

        let aggregator = if self.threads > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.threads)
                .build()
                .map_err(|e| MorphError::Custom(format!("Failed to build thread pool: {}", e)))?;
            pool.install(aggregate)
        } else {
            aggregate()
        };

        tracing::info!(
            segmenter = ?kind,
            words = vocabulary.len(),
            records = aggregator.word_count(),
            morphs = aggregator.morph_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "segmentation finished"
        );
        Ok(aggregator)
    }
}

/// Ranks the synonyms of every vocabulary word and aggregates them like morphs.
pub fn run_synonyms(
    vocabulary: &[VocabEntry],
    synonyms_path: &Path,
    provider: &dyn ParadigmProvider,
    settings: &Settings,
) -> Result<MorphAggregator, MorphError> {
    let known: HashSet<String> = vocabulary.iter().map(|entry| entry.word.clone()).collect();
    let synonyms = load_synonyms(synonyms_path, provider, &known)?;

    let mut aggregator = MorphAggregator::new();
    for entry in vocabulary {
        if let Some(candidates) = synonyms.get(&entry.word) {
            let ranked = rank_synonyms(candidates, settings.max_synonyms);
            aggregator.add(&entry.word, entry.frequency, ranked);
        }
    }

    tracing::info!(
        words = aggregator.word_count(),
        synonyms = aggregator.morph_count(),
        "synonym aggregation finished"
    );
    Ok(aggregator)
}

/// Writes both output tables of an aggregation.
pub fn write_outputs(
    aggregator: &MorphAggregator,
    word_morphs_path: &Path,
    morph_info_path: &Path,
) -> Result<(), MorphError> {
    let mut words = BufWriter::new(File::create(word_morphs_path)?);
    aggregator.write_word_morphs(&mut words)?;
    words.flush()?;

    let mut info = BufWriter::new(File::create(morph_info_path)?);
    aggregator.write_morph_info(&mut info)?;
    info.flush()?;

    tracing::info!(
        word_morphs = %word_morphs_path.display(),
        morph_info = %morph_info_path.display(),
        "outputs written"
    );
    Ok(())
}

pub mod aggregator;
pub mod synonym_ranker;

pub use aggregator::MorphAggregator;
pub use synonym_ranker::rank_synonyms;

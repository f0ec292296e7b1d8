pub mod core;
pub mod dictionary;
pub mod persistence;
pub mod segmentation;
pub mod tools;

pub use crate::core::{
    pipeline::{
        SegmentationPipeline,
        SegmenterKind,
    },
    MorphError,
    MorphInfo,
    Paradigm,
    Segmentation,
    VocabEntry,
};
pub use crate::dictionary::ParadigmProvider;
pub use crate::persistence::settings::Settings;
pub use crate::tools::analysis::MorphAggregator;

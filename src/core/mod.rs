pub mod errors;
pub mod models;
pub mod pipeline;
pub mod stopwords;
pub mod utils;

pub use errors::MorphError;
pub use models::{
    MorphInfo,
    Paradigm,
    Segmentation,
    SynonymCandidate,
    VocabEntry,
    WordMorphs,
};
pub use stopwords::StopwordFilter;

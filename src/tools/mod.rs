pub mod analysis;
pub mod lemmatizer;

pub use lemmatizer::Lemmatizer;

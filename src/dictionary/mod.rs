pub mod paradigm;
pub mod synonyms;
pub mod vocabulary;

pub use paradigm::{
    lookup_or_fallback,
    GuardedParadigms,
    IdentityParadigms,
    ParadigmDictionary,
    ParadigmProvider,
};
pub use vocabulary::{
    load_vocabulary,
    read_vocabulary,
};

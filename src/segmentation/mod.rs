pub mod affix_tables;

pub mod rule_segmenter;

pub mod statistical;


pub use affix_tables::{
    AffixRole,
    AffixTable,
    AffixTables,
};
pub use rule_segmenter::RuleSegmenter;
pub use statistical::StatisticalSegmenter;

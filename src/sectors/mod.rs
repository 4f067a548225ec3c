// Sector extraction — pattern rules, counting, synonym merging and curation.

pub mod counts;
pub mod curate;
pub mod extractor;
pub mod normalize;
pub mod rank;
pub mod report;
pub mod tables;
pub mod traits;

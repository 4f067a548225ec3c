// Sector Miner: a sector/theme taxonomy mined from fund display names.
//
// This is the library root. Each module corresponds to one part of the
// mining run: reading the corpus, extracting and curating sectors, and
// presenting the result.

pub mod config;
pub mod corpus;
pub mod output;
pub mod pipeline;
pub mod sectors;

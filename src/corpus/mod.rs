// Corpus input — turning the published fund list into display names.

pub mod loader;

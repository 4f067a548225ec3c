// Token extractor trait — swap-ready abstraction.
//
// The counting, normalization and curation stages only care about the raw
// tokens a name yields, so the pattern battery can be replaced (or stubbed in
// tests) without touching the rest of the pipeline.

use super::extractor::TokenHit;

/// Trait for pulling candidate sector tokens out of a single display name.
pub trait TokenExtractor {
    /// Extract every validated token hit from `name`, in rule order.
    ///
    /// The same text may appear more than once when several rules match it;
    /// callers count each hit. Never fails: invalid captures are dropped.
    fn extract(&self, name: &str) -> Vec<TokenHit>;
}

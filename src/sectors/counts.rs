// Raw token frequency accumulation.
//
// Counts are pure sums, so the order names are fed in never changes a count.
// Alongside each count we keep the position at which the token was first
// recorded during the scan; every later tie-break (representative choice,
// ranking) uses that position so identical input always gives identical
// output regardless of hash-map iteration order.

use std::collections::HashMap;

use super::extractor::{RawToken, TokenHit};

/// Occurrence count and first-seen position of one raw token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenStat {
    /// Number of rule hits across the whole corpus
    pub count: u64,
    /// 0-based order in which this token was first recorded
    pub first_seen: usize,
}

/// Running map of raw token text to its [`TokenStat`].
#[derive(Debug, Clone, Default)]
pub struct TokenCounts {
    stats: HashMap<String, TokenStat>,
    total_hits: u64,
}

impl TokenCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `token`.
    pub fn record(&mut self, token: &RawToken) {
        let next_position = self.stats.len();
        self.stats
            .entry(token.as_str().to_string())
            .or_insert(TokenStat {
                count: 0,
                first_seen: next_position,
            })
            .count += 1;
        self.total_hits += 1;
    }

    /// Count every hit produced for one name, in rule order.
    pub fn record_hits(&mut self, hits: &[TokenHit]) {
        for hit in hits {
            self.record(&hit.token);
        }
    }

    pub fn get(&self, raw: &str) -> Option<TokenStat> {
        self.stats.get(raw).copied()
    }

    /// Occurrence count for `raw` (0 when never seen).
    pub fn count(&self, raw: &str) -> u64 {
        self.get(raw).map_or(0, |s| s.count)
    }

    /// Number of distinct raw tokens.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Sum of all counts, i.e. every rule hit recorded.
    pub fn total_hits(&self) -> u64 {
        self.total_hits
    }

    /// All tokens ordered by first occurrence.
    pub fn in_scan_order(&self) -> Vec<(&str, TokenStat)> {
        let mut entries: Vec<(&str, TokenStat)> = self
            .stats
            .iter()
            .map(|(raw, stat)| (raw.as_str(), *stat))
            .collect();
        entries.sort_by_key(|(_, stat)| stat.first_seen);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str) -> RawToken {
        RawToken::new(text).unwrap()
    }

    #[test]
    fn repeated_records_accumulate() {
        let mut counts = TokenCounts::new();
        counts.record(&token("医药"));
        counts.record(&token("医药"));
        counts.record(&token("消费"));

        assert_eq!(counts.count("医药"), 2);
        assert_eq!(counts.count("消费"), 1);
        assert_eq!(counts.count("军工"), 0);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.total_hits(), 3);
    }

    #[test]
    fn first_seen_is_stable_across_repeats() {
        let mut counts = TokenCounts::new();
        counts.record(&token("消费"));
        counts.record(&token("医药"));
        counts.record(&token("消费"));

        let order: Vec<&str> = counts.in_scan_order().iter().map(|(r, _)| *r).collect();
        assert_eq!(order, vec!["消费", "医药"]);
        assert_eq!(counts.get("医药").unwrap().first_seen, 1);
    }

    #[test]
    fn empty_counts() {
        let counts = TokenCounts::new();
        assert!(counts.is_empty());
        assert!(counts.in_scan_order().is_empty());
    }
}

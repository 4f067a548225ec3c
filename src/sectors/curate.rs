// Curation — turn the ranked candidate list into bounded sector lists.
//
// The full list keeps every candidate that clears the count threshold. The
// curated list additionally drops fund-manager names, product-structure words
// and overly long labels, and stops at a fixed size. Both end with 其他.

use tracing::debug;

use super::rank::Candidate;
use super::tables::{
    has_excluded_prefix, is_excluded, LONG_LABEL_WHITELIST, OTHER_SECTOR, STRUCTURAL_MARKERS,
};

/// Knobs for threshold and list sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurationPolicy {
    /// Candidates below this count are treated as noise
    pub min_count: u64,
    /// Maximum curated labels before the sentinel is appended
    pub max_curated: usize,
    /// Labels longer than this (in chars) need to be whitelisted
    pub max_label_chars: usize,
    /// How many ranked candidates go into the report detail
    pub detail_limit: usize,
}

impl Default for CurationPolicy {
    fn default() -> Self {
        Self {
            min_count: 2,
            max_curated: 100,
            max_label_chars: 8,
            detail_limit: 80,
        }
    }
}

impl CurationPolicy {
    /// Default policy with a custom count threshold.
    pub fn with_min_count(min_count: u64) -> Self {
        Self {
            min_count,
            ..Self::default()
        }
    }

    /// Whether `label` is a usable taxonomy entry.
    pub fn is_curatable(&self, label: &str) -> bool {
        if label == OTHER_SECTOR || is_excluded(label) || has_excluded_prefix(label) {
            return false;
        }
        if STRUCTURAL_MARKERS.iter().any(|marker| label.contains(marker)) {
            return false;
        }
        if label.chars().count() > self.max_label_chars && !LONG_LABEL_WHITELIST.contains(&label)
        {
            return false;
        }
        true
    }

    /// Every candidate label at or above the threshold, sentinel last.
    pub fn full_list(&self, candidates: &[Candidate]) -> Vec<String> {
        let mut sectors: Vec<String> = candidates
            .iter()
            .filter(|c| c.count >= self.min_count && c.sector != OTHER_SECTOR)
            .map(|c| c.sector.clone())
            .collect();
        sectors.push(OTHER_SECTOR.to_string());
        sectors
    }

    /// The bounded, filtered list, sentinel last.
    pub fn curated_list(&self, candidates: &[Candidate]) -> Vec<String> {
        let mut curated = Vec::with_capacity(self.max_curated + 1);
        let mut rejected = 0usize;

        for candidate in candidates.iter().filter(|c| c.count >= self.min_count) {
            if curated.len() >= self.max_curated {
                break;
            }
            if self.is_curatable(&candidate.sector) {
                curated.push(candidate.sector.clone());
            } else {
                rejected += 1;
            }
        }

        debug!(accepted = curated.len(), rejected, "Curated candidate list");

        curated.push(OTHER_SECTOR.to_string());
        curated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(sector: &str, count: u64) -> Candidate {
        Candidate {
            sector: sector.to_string(),
            normalized: sector.to_string(),
            count,
        }
    }

    #[test]
    fn manager_names_and_prefixes_are_rejected() {
        let policy = CurationPolicy::default();
        assert!(!policy.is_curatable("华夏"));
        assert!(!policy.is_curatable("易方达黄金"));
        assert!(!policy.is_curatable("南方中证新能源"));
        assert!(policy.is_curatable("黄金"));
    }

    #[test]
    fn structural_markers_are_rejected() {
        let policy = CurationPolicy::default();
        assert!(!policy.is_curatable("医药指数增强"));
        assert!(!policy.is_curatable("科技发起"));
        assert!(!policy.is_curatable("医药全指"));
        assert!(!policy.is_curatable("国新央企科技"));
    }

    #[test]
    fn long_labels_need_whitelist() {
        let policy = CurationPolicy::default();
        assert!(!policy.is_curatable("新能源智能汽车产业链"));
        assert!(policy.is_curatable("信息技术应用创新产业"));
        assert!(policy.is_curatable("上海环交所碳中和"));
    }

    #[test]
    fn full_list_moves_existing_sentinel_to_end() {
        let policy = CurationPolicy::default();
        let candidates = vec![
            candidate("医药", 9),
            candidate("其他", 5),
            candidate("消费", 3),
            candidate("养老", 1),
        ];
        assert_eq!(policy.full_list(&candidates), vec!["医药", "消费", "其他"]);
    }

    #[test]
    fn curated_list_is_capped() {
        let policy = CurationPolicy {
            max_curated: 2,
            ..CurationPolicy::default()
        };
        let candidates = vec![
            candidate("医药", 9),
            candidate("华夏", 8),
            candidate("消费", 7),
            candidate("军工", 6),
        ];
        assert_eq!(policy.curated_list(&candidates), vec!["医药", "消费", "其他"]);
    }

    #[test]
    fn threshold_applies_to_both_lists() {
        let policy = CurationPolicy::with_min_count(5);
        let candidates = vec![candidate("医药", 9), candidate("消费", 4)];
        assert_eq!(policy.full_list(&candidates), vec!["医药", "其他"]);
        assert_eq!(policy.curated_list(&candidates), vec!["医药", "其他"]);
    }
}

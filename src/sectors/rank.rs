// Candidate ranking — order canonical groups by total strength.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use super::normalize::CanonicalGroup;

/// A ranked sector candidate, as written to the `detail` section of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Representative (most frequent) raw spelling
    pub sector: String,
    /// Canonical key of the group
    pub normalized: String,
    /// Summed count of every spelling in the group
    pub count: u64,
}

/// Sort groups by descending total, breaking ties by the representative's
/// first occurrence in the scan.
pub fn rank_candidates(mut groups: Vec<CanonicalGroup>) -> Vec<Candidate> {
    groups.sort_by_key(|g| (Reverse(g.total), g.representative_first_seen));

    groups
        .into_iter()
        .map(|g| Candidate {
            sector: g.representative,
            normalized: g.key,
            count: g.total,
        })
        .collect()
}

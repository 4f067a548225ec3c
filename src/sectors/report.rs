// Report assembly — the structured record handed to downstream consumers.

use serde::{Deserialize, Serialize};

use super::curate::CurationPolicy;
use super::rank::Candidate;

/// Final output of a mining run.
///
/// Field names match the JSON document consumers already read
/// (`sectorsCurated`, `curatedCount`, `minCount`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorReport {
    /// Every candidate at or above the threshold, ranked, sentinel last
    pub sectors: Vec<String>,
    /// Bounded, filtered list, sentinel last
    pub sectors_curated: Vec<String>,
    /// Provenance label of the corpus
    pub source: String,
    /// Always `sectors.len()`
    pub count: usize,
    /// Always `sectors_curated.len()`
    pub curated_count: usize,
    /// Threshold the lists were built with
    pub min_count: u64,
    /// Top ranked candidates regardless of threshold
    pub detail: Vec<Candidate>,
}

impl SectorReport {
    /// Build the report from ranked candidates. The counts are derived from
    /// the lists here so they can never drift apart.
    pub fn assemble(candidates: &[Candidate], policy: &CurationPolicy, source: &str) -> Self {
        let sectors = policy.full_list(candidates);
        let sectors_curated = policy.curated_list(candidates);

        Self {
            count: sectors.len(),
            curated_count: sectors_curated.len(),
            sectors,
            sectors_curated,
            source: source.to_string(),
            min_count: policy.min_count,
            detail: candidates
                .iter()
                .take(policy.detail_limit)
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_fields() {
        let candidates = vec![Candidate {
            sector: "医药".to_string(),
            normalized: "医药".to_string(),
            count: 3,
        }];
        let report =
            SectorReport::assemble(&candidates, &CurationPolicy::default(), "fundcode_search.js");
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["sectorsCurated"][0], "医药");
        assert_eq!(json["curatedCount"], 2);
        assert_eq!(json["minCount"], 2);
        assert_eq!(json["count"], 2);
        assert_eq!(json["detail"][0]["normalized"], "医药");
        assert_eq!(json["source"], "fundcode_search.js");
    }

    #[test]
    fn detail_is_truncated_to_limit() {
        let candidates: Vec<Candidate> = (0..5)
            .map(|i| Candidate {
                sector: format!("板块{i}"),
                normalized: format!("板块{i}"),
                count: 10 - i,
            })
            .collect();
        let policy = CurationPolicy {
            detail_limit: 3,
            ..CurationPolicy::default()
        };
        let report = SectorReport::assemble(&candidates, &policy, "test");
        assert_eq!(report.detail.len(), 3);
        assert_eq!(report.detail[0].sector, "板块0");
    }
}

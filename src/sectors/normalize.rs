// Synonym normalization — collapse raw spellings into canonical sector groups.
//
// 医疗, 创新药 and 中药 all describe the same investable sector as 医药, so
// they share one group. The group keeps its most frequent raw spelling as the
// display label and sums the counts of every member.

use std::collections::HashMap;

use tracing::debug;

use super::counts::TokenCounts;
use super::tables::synonym_for;

/// Canonical key for a raw sector string; unmapped strings are their own key.
pub fn canonical_key(raw: &str) -> &str {
    synonym_for(raw).unwrap_or(raw)
}

/// One raw spelling inside a canonical group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMember {
    pub raw: String,
    pub count: u64,
    pub first_seen: usize,
}

/// All raw tokens that share a canonical key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalGroup {
    /// The canonical key every member maps to
    pub key: String,
    /// Display label: the member with the highest count
    pub representative: String,
    /// First-seen position of the representative
    pub representative_first_seen: usize,
    /// Sum of all member counts
    pub total: u64,
    /// Members in scan order
    pub members: Vec<GroupMember>,
}

/// Group every counted raw token under its canonical key.
///
/// Groups come back in order of their earliest member. Within a group the
/// representative is the member with the highest count; equal counts go to
/// the member recorded first.
pub fn group_synonyms(counts: &TokenCounts) -> Vec<CanonicalGroup> {
    let mut index_by_key: HashMap<&str, usize> = HashMap::new();
    let mut members_by_group: Vec<(&str, Vec<GroupMember>)> = Vec::new();

    for (raw, stat) in counts.in_scan_order() {
        let key = canonical_key(raw);
        let idx = *index_by_key.entry(key).or_insert_with(|| {
            members_by_group.push((key, Vec::new()));
            members_by_group.len() - 1
        });
        members_by_group[idx].1.push(GroupMember {
            raw: raw.to_string(),
            count: stat.count,
            first_seen: stat.first_seen,
        });
    }

    let groups: Vec<CanonicalGroup> = members_by_group
        .into_iter()
        .filter_map(|(key, members)| build_group(key, members))
        .collect();

    debug!(
        raw_tokens = counts.len(),
        groups = groups.len(),
        "Grouped raw tokens by canonical key"
    );

    groups
}

fn build_group(key: &str, members: Vec<GroupMember>) -> Option<CanonicalGroup> {
    // Members are in scan order, so a strict comparison keeps the earliest on ties
    let mut best: Option<&GroupMember> = None;
    for member in &members {
        if best.map_or(true, |b| member.count > b.count) {
            best = Some(member);
        }
    }
    let best = best?;
    let representative = best.raw.clone();
    let representative_first_seen = best.first_seen;
    let total = members.iter().map(|m| m.count).sum();

    Some(CanonicalGroup {
        key: key.to_string(),
        representative,
        representative_first_seen,
        total,
        members,
    })
}

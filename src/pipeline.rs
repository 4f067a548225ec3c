// Mining pipeline — extraction → counting → normalization → ranking → curation.
//
// Every stage takes the previous stage's value and returns a new one; nothing
// is shared between runs, so mining the same names twice gives the same
// report.

use tracing::info;

use crate::sectors::counts::TokenCounts;
use crate::sectors::curate::CurationPolicy;
use crate::sectors::normalize::group_synonyms;
use crate::sectors::rank::{rank_candidates, Candidate};
use crate::sectors::report::SectorReport;
use crate::sectors::traits::TokenExtractor;

/// Diagnostic counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Names fed to the extractor
    pub names_scanned: usize,
    /// Rule hits recorded (sum of all raw counts)
    pub token_hits: u64,
    /// Distinct raw tokens
    pub distinct_tokens: usize,
    /// Canonical groups after synonym merging
    pub groups: usize,
}

/// Everything a run produces.
#[derive(Debug, Clone)]
pub struct MiningRun {
    pub report: SectorReport,
    /// Full ranked candidate list (the report only carries the top slice)
    pub candidates: Vec<Candidate>,
    pub stats: ScanStats,
}

/// Run every name through the extractor and count the hits.
///
/// Returns the counts and the number of names consumed.
pub fn scan_names<E, I, S>(extractor: &E, names: I) -> (TokenCounts, usize)
where
    E: TokenExtractor + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = TokenCounts::new();
    let mut scanned = 0usize;

    for name in names {
        let hits = extractor.extract(name.as_ref());
        counts.record_hits(&hits);
        scanned += 1;
    }

    (counts, scanned)
}

/// Mine a sequence of display names into a sector report.
pub fn mine<E, I, S>(extractor: &E, names: I, policy: &CurationPolicy, source: &str) -> MiningRun
where
    E: TokenExtractor + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (counts, names_scanned) = scan_names(extractor, names);

    info!(
        names = names_scanned,
        hits = counts.total_hits(),
        distinct = counts.len(),
        "Extracted raw sector tokens"
    );

    let groups = group_synonyms(&counts);
    let group_count = groups.len();
    let candidates = rank_candidates(groups);
    let report = SectorReport::assemble(&candidates, policy, source);

    info!(
        candidates = candidates.len(),
        sectors = report.count,
        curated = report.curated_count,
        min_count = policy.min_count,
        "Built sector lists"
    );

    MiningRun {
        report,
        candidates,
        stats: ScanStats {
            names_scanned,
            token_hits: counts.total_hits(),
            distinct_tokens: counts.len(),
            groups: group_count,
        },
    }
}

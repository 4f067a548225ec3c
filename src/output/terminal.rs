// Colored terminal output for run summaries and single-name explanations.

use std::path::Path;

use colored::Colorize;

use crate::pipeline::ScanStats;
use crate::sectors::extractor::TokenHit;
use crate::sectors::normalize::canonical_key;
use crate::sectors::report::SectorReport;

/// Print the curated list and list sizes after a run.
pub fn display_summary(report: &SectorReport, stats: &ScanStats, skipped: usize, written_to: &Path) {
    println!("Report written to: {}", written_to.display());
    println!();
    println!(
        "  Names scanned: {}  (skipped {} malformed)",
        stats.names_scanned, skipped
    );
    println!(
        "  Raw tokens: {} distinct, {} hits  →  {} canonical groups",
        stats.distinct_tokens, stats.token_hits, stats.groups
    );
    println!();
    println!(
        "  Full candidate sectors: {}",
        report.count.to_string().bold()
    );
    println!(
        "  Curated sectors: {}  (min count {})",
        report.curated_count.to_string().bold(),
        report.min_count
    );

    println!(
        "\n{}",
        format!("=== Curated Sectors ({}) ===", report.curated_count).bold()
    );
    println!("  {}", report.sectors_curated.join(", "));
    println!();
}

/// Print the ranked detail table.
pub fn display_detail(report: &SectorReport) {
    if report.detail.is_empty() {
        println!("No sector candidates found.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Top {} Candidates ===", report.detail.len()).bold()
    );
    println!();
    println!(
        "  {:>4}  {:<14} {:<14} {:>6}",
        "Rank".dimmed(),
        "Sector".dimmed(),
        "Canonical".dimmed(),
        "Count".dimmed(),
    );
    println!("  {}", "-".repeat(44).dimmed());

    for (i, candidate) in report.detail.iter().enumerate() {
        let count = if candidate.count >= report.min_count {
            candidate.count.to_string().normal()
        } else {
            candidate.count.to_string().dimmed()
        };
        println!(
            "  {:>4}. {:<14} {:<14} {:>6}",
            i + 1,
            candidate.sector,
            candidate.normalized.dimmed(),
            count,
        );
    }
    println!();
}

/// Show which rules fired for one name and where each token lands.
pub fn display_explain(name: &str, hits: &[TokenHit]) {
    println!("\n{}", format!("=== {name} ===").bold());

    if hits.is_empty() {
        println!("  {}", "No sector tokens extracted.".dimmed());
        return;
    }

    for hit in hits {
        let raw = hit.token.as_str();
        let key = canonical_key(raw);
        let mapping = if key == raw {
            String::new()
        } else {
            format!(" → {key}")
        };
        println!(
            "  {:<16} {}{}",
            hit.rule.as_str().dimmed(),
            raw.green(),
            mapping
        );
    }
}

// JSON report writer.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::sectors::report::SectorReport;

/// Render the report as pretty-printed JSON (two-space indent, non-ASCII kept
/// as-is, trailing newline).
pub fn render_report(report: &SectorReport) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    json.push('\n');
    Ok(json)
}

/// Write the report to `path`, creating parent directories as needed.
/// Returns the path written.
pub fn write_report(report: &SectorReport, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }

    let json = render_report(report)?;
    fs::write(path, json).with_context(|| format!("Failed to write report to {}", path.display()))?;

    info!(
        path = %path.display(),
        sectors = report.count,
        curated = report.curated_count,
        "Wrote sector report"
    );

    Ok(path.to_path_buf())
}

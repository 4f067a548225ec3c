use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Default location of the published fund list.
pub const DEFAULT_INPUT_PATH: &str = "./fundcode_search.js";
/// Default destination for the sector report.
pub const DEFAULT_OUTPUT_PATH: &str = "./sector-candidates.json";
/// Default count threshold for the full and curated lists.
pub const DEFAULT_MIN_COUNT: u64 = 2;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// override whatever is set here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fund list script to mine (SECTOR_MINER_INPUT)
    pub input_path: PathBuf,
    /// Where the JSON report is written (SECTOR_MINER_OUTPUT)
    pub output_path: PathBuf,
    /// Minimum candidate count (SECTOR_MINER_MIN_COUNT)
    pub min_count: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            min_count: DEFAULT_MIN_COUNT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables. Every value has a
    /// default; only an unparseable min count is an error.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let min_count = match lookup("SECTOR_MINER_MIN_COUNT") {
            Some(raw) => parse_min_count(&raw)?,
            None => defaults.min_count,
        };

        Ok(Self {
            input_path: lookup("SECTOR_MINER_INPUT")
                .map(PathBuf::from)
                .unwrap_or(defaults.input_path),
            output_path: lookup("SECTOR_MINER_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
            min_count,
        })
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        min_count: Option<u64>,
    ) -> Result<Self> {
        if let Some(input) = input {
            self.input_path = input;
        }
        if let Some(output) = output {
            self.output_path = output;
        }
        if let Some(min_count) = min_count {
            if min_count == 0 {
                anyhow::bail!("--min-count must be at least 1");
            }
            self.min_count = min_count;
        }
        Ok(self)
    }

    /// Provenance label for the report: the input's file name.
    pub fn source_label(&self) -> String {
        source_label(&self.input_path)
    }
}

fn parse_min_count(raw: &str) -> Result<u64> {
    let value: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("SECTOR_MINER_MIN_COUNT must be a positive integer, got {raw:?}"))?;
    if value == 0 {
        anyhow::bail!("SECTOR_MINER_MIN_COUNT must be at least 1");
    }
    Ok(value)
}

fn source_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// Fund list loader.
//
// The fund list is published as a JavaScript file of the form
//
//   var r = [["000001","HXCZHH","华夏成长混合","混合型-偏股","HUAXIACHENGZHANGHUNHE"], ...];
//
// The array literal is valid JSON, so we cut it out of the assignment and hand
// it to serde_json. Anything that isn't that shape aborts the run. Individual
// records that lack a usable name are kept but yield no name.

use std::path::Path;

use anyhow::{Context, Result};
use regex_lite::Regex;
use serde_json::Value;
use tracing::{debug, info};

/// Position of the display name inside each record array.
const NAME_FIELD: usize = 2;

/// `var r = [...];` with the array literal captured.
const ASSIGNMENT_PATTERN: &str = r"var\s+r\s*=\s*(\[[\s\S]*\])\s*;?\s*$";

/// One corpus entry. Only the name feeds extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRecord {
    /// Fund code, when the record carries one
    pub code: Option<String>,
    /// Display name; `None` when the record is malformed or the name is empty
    pub name: Option<String>,
}

impl NameRecord {
    fn from_value(value: &Value) -> Self {
        let fields = value.as_array();
        let field = |idx: usize| {
            fields
                .and_then(|f| f.get(idx))
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Self {
            code: field(0),
            name: field(NAME_FIELD),
        }
    }
}

/// All records parsed from one fund list.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub records: Vec<NameRecord>,
}

impl Corpus {
    /// Usable display names, in file order. Malformed records are skipped.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().filter_map(|r| r.name.as_deref())
    }

    /// Number of records that contribute no name.
    pub fn skipped(&self) -> usize {
        self.records.iter().filter(|r| r.name.is_none()).count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse the text of a fund list script.
pub fn parse_corpus(raw: &str) -> Result<Corpus> {
    let pattern = Regex::new(ASSIGNMENT_PATTERN).context("Invalid fund list pattern")?;

    let Some(caps) = pattern.captures(raw) else {
        anyhow::bail!("Unrecognized fund list format: expected `var r = [...];`");
    };
    let array_text = caps.get(1).map_or("", |m| m.as_str());

    let values: Vec<Value> = serde_json::from_str(array_text)
        .context("Unrecognized fund list format: record array is not valid JSON")?;

    let records: Vec<NameRecord> = values.iter().map(NameRecord::from_value).collect();
    let corpus = Corpus { records };

    debug!(
        records = corpus.len(),
        skipped = corpus.skipped(),
        "Parsed fund list"
    );

    Ok(corpus)
}

/// Read and parse a fund list file.
pub fn load_corpus(path: &Path) -> Result<Corpus> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fund list at {}", path.display()))?;
    let corpus = parse_corpus(&raw)
        .with_context(|| format!("Failed to parse fund list at {}", path.display()))?;

    info!(
        path = %path.display(),
        records = corpus.len(),
        skipped = corpus.skipped(),
        "Loaded fund list"
    );

    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_assignment_with_trailing_semicolon() {
        let raw = r#"var r = [["000001","HXCZHH","华夏成长混合","混合型-偏股","HUAXIACHENGZHANGHUNHE"],["000002","HXCZHH","中证医药ETF","指数型","X"]];"#;
        let corpus = parse_corpus(raw).unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.records[0].code.as_deref(), Some("000001"));
        let names: Vec<&str> = corpus.names().collect();
        assert_eq!(names, vec!["华夏成长混合", "中证医药ETF"]);
    }

    #[test]
    fn malformed_records_are_skipped_not_fatal() {
        let raw = r#"var r = [["1","A"],["2","B",null],["3","C",42],{"name":"x"},["4","D","军工ETF"]]"#;
        let corpus = parse_corpus(raw).unwrap();

        assert_eq!(corpus.len(), 5);
        assert_eq!(corpus.skipped(), 4);
        assert_eq!(corpus.names().collect::<Vec<_>>(), vec!["军工ETF"]);
    }

    #[test]
    fn missing_assignment_is_fatal() {
        let err = parse_corpus(r#"{"funds": []}"#).unwrap_err();
        assert!(err.to_string().contains("Unrecognized fund list format"));
    }

    #[test]
    fn broken_array_is_fatal() {
        assert!(parse_corpus("var r = [[\"1\",\"A\",\"医药\"];").is_err());
    }

    #[test]
    fn empty_array_is_valid() {
        let corpus = parse_corpus("var r = [];\n").unwrap();
        assert!(corpus.is_empty());
    }
}

// Pattern-based token extraction.
//
// A fund name like "华夏中证医药100ETF联接A" carries its sector in a handful of
// recurring shapes: an index theme after 中证, a word before 主题/行业/板块, a
// known sector glued to ETF/联接, a target after 跟踪, or simply a known
// keyword somewhere in the name. Each shape is one rule; all rules run on
// every name and every valid capture is reported.

use std::fmt;

use anyhow::{Context, Result};
use regex_lite::Regex;

use super::tables::{ETF_SECTORS, INDEX_PREFIX, KEYWORDS};
use super::traits::TokenExtractor;

/// Shortest raw token that is ever recorded, in chars.
pub const MIN_TOKEN_CHARS: usize = 2;
/// Longest raw token that is ever recorded, in chars.
pub const MAX_TOKEN_CHARS: usize = 12;

/// CJK unified ideographs (U+4E00..=U+9FA5) plus ASCII letters.
const WORD_CLASS: &str = r"[\x{4E00}-\x{9FA5}A-Za-z]";

/// The extraction rule that produced a token, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// 中证<theme>[指数|ETF|联接|size] followed by a share class or end of name
    IndexTheme,
    /// <text>主题
    ThemeSuffix,
    /// <text>行业
    IndustrySuffix,
    /// <text>板块
    SectorSuffix,
    /// <known sector>ETF / <known sector>联接
    SectorFund,
    /// 跟踪<text>
    Tracking,
    /// Keyword substring anywhere in the name
    Keyword,
}

impl Rule {
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::IndexTheme => "index-theme",
            Rule::ThemeSuffix => "theme-suffix",
            Rule::IndustrySuffix => "industry-suffix",
            Rule::SectorSuffix => "sector-suffix",
            Rule::SectorFund => "sector-fund",
            Rule::Tracking => "tracking",
            Rule::Keyword => "keyword",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate sector string that passed validation: 2..=12 chars, made only
/// of CJK ideographs, ASCII letters and ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawToken(String);

impl RawToken {
    /// Validate `text`, returning `None` if it can never be a token.
    pub fn new(text: &str) -> Option<Self> {
        is_valid_token(text).then(|| Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RawToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One successful rule capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenHit {
    pub rule: Rule,
    pub token: RawToken,
}

/// Length and character-class check applied to every capture.
pub fn is_valid_token(text: &str) -> bool {
    let len = text.chars().count();
    (MIN_TOKEN_CHARS..=MAX_TOKEN_CHARS).contains(&len) && text.chars().all(is_token_char)
}

fn is_token_char(c: char) -> bool {
    ('\u{4E00}'..='\u{9FA5}').contains(&c) || c.is_ascii_alphanumeric()
}

/// The production extractor: six capture rules plus the keyword scan.
///
/// Patterns are compiled once in [`PatternExtractor::new`] and reused for
/// every name.
pub struct PatternExtractor {
    capture_rules: Vec<(Rule, Regex)>,
}

impl PatternExtractor {
    pub fn new() -> Result<Self> {
        let sector_alternation = ETF_SECTORS.join("|");
        let sources = [
            (
                Rule::IndexTheme,
                format!(
                    "{INDEX_PREFIX}({WORD_CLASS}+?)(?:指数|ETF|联接|100|200|300|500|800|1000|等)?(?:[A-Z]|$)"
                ),
            ),
            (Rule::ThemeSuffix, format!("({WORD_CLASS}{{2,10}})主题")),
            (Rule::IndustrySuffix, format!("({WORD_CLASS}{{2,10}})行业")),
            (Rule::SectorSuffix, format!("({WORD_CLASS}{{2,10}})板块")),
            (Rule::SectorFund, format!("({sector_alternation})(?:ETF|联接)")),
            (Rule::Tracking, format!("跟踪({WORD_CLASS}{{2,8}})")),
        ];

        let mut capture_rules = Vec::with_capacity(sources.len());
        for (rule, pattern) in sources {
            let regex = Regex::new(&pattern)
                .with_context(|| format!("Invalid pattern for rule {rule}: {pattern}"))?;
            capture_rules.push((rule, regex));
        }

        Ok(Self { capture_rules })
    }
}

impl TokenExtractor for PatternExtractor {
    fn extract(&self, name: &str) -> Vec<TokenHit> {
        let mut hits = Vec::new();

        for (rule, regex) in &self.capture_rules {
            for caps in regex.captures_iter(name) {
                let Some(group) = caps.get(1) else { continue };
                if let Some(token) = RawToken::new(group.as_str()) {
                    hits.push(TokenHit { rule: *rule, token });
                }
            }
        }

        for keyword in KEYWORDS {
            if name.contains(keyword) {
                if let Some(token) = RawToken::new(keyword) {
                    hits.push(TokenHit {
                        rule: Rule::Keyword,
                        token,
                    });
                }
            }
        }

        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(hits: &[TokenHit]) -> Vec<(Rule, &str)> {
        hits.iter().map(|h| (h.rule, h.token.as_str())).collect()
    }

    #[test]
    fn index_theme_with_size_marker() {
        let extractor = PatternExtractor::new().unwrap();
        let hits = extractor.extract("中证医药100ETF");
        assert_eq!(
            texts(&hits),
            vec![(Rule::IndexTheme, "医药"), (Rule::Keyword, "医药")]
        );
    }

    #[test]
    fn index_theme_at_end_of_name() {
        let extractor = PatternExtractor::new().unwrap();
        let hits = extractor.extract("中证军工");
        assert_eq!(
            texts(&hits),
            vec![(Rule::IndexTheme, "军工"), (Rule::Keyword, "军工")]
        );
    }

    #[test]
    fn theme_suffix_captures_preceding_text() {
        let extractor = PatternExtractor::new().unwrap();
        let hits = extractor.extract("养老主题混合");
        assert_eq!(
            texts(&hits),
            vec![(Rule::ThemeSuffix, "养老"), (Rule::Keyword, "养老")]
        );
    }

    #[test]
    fn sector_fund_requires_adjacent_marker() {
        let extractor = PatternExtractor::new().unwrap();
        let hits = extractor.extract("黄金ETF联接C");
        assert!(hits
            .iter()
            .any(|h| h.rule == Rule::SectorFund && h.token.as_str() == "黄金"));

        let hits = extractor.extract("黄金产业股票");
        assert!(hits.iter().all(|h| h.rule != Rule::SectorFund));
    }

    #[test]
    fn tracking_capture_is_capped_at_eight_chars() {
        let extractor = PatternExtractor::new().unwrap();
        let hits = extractor.extract("跟踪甲乙丙丁戊己庚辛壬癸");
        assert_eq!(texts(&hits), vec![(Rule::Tracking, "甲乙丙丁戊己庚辛")]);
    }

    #[test]
    fn manager_name_alone_yields_nothing() {
        let extractor = PatternExtractor::new().unwrap();
        assert!(extractor.extract("华夏").is_empty());
    }

    #[test]
    fn validator_bounds() {
        assert!(!is_valid_token("医"));
        assert!(is_valid_token("医药"));
        assert!(is_valid_token("5G"));
        assert!(is_valid_token("一二三四五六七八九十一二"));
        assert!(!is_valid_token("一二三四五六七八九十一二三"));
        assert!(!is_valid_token("医药-ETF"));
        assert!(!is_valid_token("ＥＴＦ"));
    }
}

//! Delimiter scanner for style and behavior blocks
//!
//! A block is an opening tag (`<style ...>` / `<script ...>`, from the tag name
//! to the first following `>`), a non-greedy body, and the next closing tag.
//! Tag names match case-insensitively and attributes are ignored, except that a
//! behavior opening tag with an external-reference attribute (`src=`) is
//! skipped entirely.
//!
//! The `regex` crate has no lookahead, so the exclusion is checked on the
//! captured attribute text. When an opening tag is skipped the scan resumes one
//! character after its `<`, which keeps the results identical to a single
//! pattern with a negative lookahead.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

// Tag names fold ASCII case only (no `ſ` for `s`).
static STYLE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u:<style)([^>]*)>").unwrap());
static STYLE_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u:</style>)").unwrap());
static SCRIPT_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u:<script)([^>]*)>").unwrap());
static SCRIPT_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u:</script>)").unwrap());

/// Whitespace as browsers' script engines define it: includes U+FEFF, not U+0085
const SCRIPT_SPACE: &str =
    r"[\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

/// External-reference attribute, checked against the opening tag's attribute text
static EXTERNAL_SOURCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{SCRIPT_SPACE}(?i-u:src){SCRIPT_SPACE}*=")).unwrap()
});

/// Matching rule for one block kind
pub(crate) struct TagRule {
    opener: &'static Lazy<Regex>,
    closer: &'static Lazy<Regex>,
    exclude: Option<&'static Lazy<Regex>>,
}

pub(crate) static STYLE_RULE: TagRule = TagRule {
    opener: &STYLE_OPEN,
    closer: &STYLE_CLOSE,
    exclude: None,
};

pub(crate) static BEHAVIOR_RULE: TagRule = TagRule {
    opener: &SCRIPT_OPEN,
    closer: &SCRIPT_CLOSE,
    exclude: Some(&EXTERNAL_SOURCE),
};

/// Byte ranges of one matched region
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawMatch {
    /// Opening tag through closing tag
    pub outer: Range<usize>,
    /// Body between the tags
    pub inner: Range<usize>,
}

impl TagRule {
    /// Whether an opening tag's attribute text disqualifies it
    fn is_excluded(&self, attributes: &str) -> bool {
        self.exclude
            .map(|pattern| pattern.is_match(attributes))
            .unwrap_or(false)
    }

    /// All non-overlapping matches, left to right
    pub(crate) fn scan(&self, source: &str) -> Vec<RawMatch> {
        let mut matches = Vec::new();
        let mut pos = 0;

        while pos <= source.len() {
            let Some(caps) = self.opener.captures_at(source, pos) else {
                break;
            };
            let Some(open) = caps.get(0) else {
                break;
            };
            let attributes = caps.get(1).map(|m| m.as_str()).unwrap_or("");

            if self.is_excluded(attributes) {
                // '<' is one byte, so this stays on a char boundary
                pos = open.start() + 1;
                continue;
            }

            // Any later opener ends at or after this one, so without a closer
            // here nothing further can match either.
            let Some(close) = self.closer.find_at(source, open.end()) else {
                break;
            };

            matches.push(RawMatch {
                outer: open.start()..close.end(),
                inner: open.end()..close.start(),
            });
            pos = close.end();
        }

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inner_texts<'a>(rule: &TagRule, source: &'a str) -> Vec<&'a str> {
        rule.scan(source)
            .into_iter()
            .map(|m| &source[m.inner])
            .collect()
    }

    #[test]
    fn test_style_ranges() {
        let source = "x<style>a{}</style>y";
        let matches = STYLE_RULE.scan(source);
        assert_eq!(matches.len(), 1);
        assert_eq!(&source[matches[0].outer.clone()], "<style>a{}</style>");
        assert_eq!(&source[matches[0].inner.clone()], "a{}");
    }

    #[test]
    fn test_case_insensitive_with_attributes() {
        let source = "<STYLE media=\"print\">p{}</Style>";
        assert_eq!(inner_texts(&STYLE_RULE, source), vec!["p{}"]);
    }

    #[test]
    fn test_body_is_non_greedy() {
        let source = "<style>a</style><style>b</style>";
        assert_eq!(inner_texts(&STYLE_RULE, source), vec!["a", "b"]);
    }

    #[test]
    fn test_external_script_is_skipped() {
        let source = "<script src=\"a.js\"></script><script>go()</script>";
        assert_eq!(inner_texts(&BEHAVIOR_RULE, source), vec!["go()"]);
    }

    #[test]
    fn test_src_requires_leading_whitespace() {
        // `data-src=` has no whitespace directly before `src`
        let source = "<script data-src=\"a.js\">go()</script>";
        assert_eq!(inner_texts(&BEHAVIOR_RULE, source), vec!["go()"]);
    }

    #[test]
    fn test_src_matches_case_insensitively_and_across_spacing() {
        let source = "<script type=\"module\"\n  SRC = \"a.js\"></script>";
        assert!(BEHAVIOR_RULE.scan(source).is_empty());
    }

    #[test]
    fn test_tag_names_fold_ascii_case_only() {
        assert!(STYLE_RULE.scan("<\u{17f}tyle>a{}</\u{17f}tyle>").is_empty());
        assert!(STYLE_RULE.scan("<style>a{}</\u{17f}tyle>").is_empty());
        assert!(BEHAVIOR_RULE.scan("<\u{17f}cript>go()</script>").is_empty());
    }

    #[test]
    fn test_long_s_is_not_an_external_source() {
        let source = "<script \u{17f}rc=\"a\">go()</script>";
        assert_eq!(inner_texts(&BEHAVIOR_RULE, source), vec!["go()"]);
    }

    #[test]
    fn test_src_spacing_uses_script_whitespace() {
        // U+0085 does not separate attributes, U+FEFF does
        let next_line = "<script\u{85}src=a>go()</script>";
        assert_eq!(inner_texts(&BEHAVIOR_RULE, next_line), vec!["go()"]);

        let byte_order_mark = "<script\u{feff}src=a>go()</script>";
        assert!(BEHAVIOR_RULE.scan(byte_order_mark).is_empty());

        let before_equals = "<script src\u{feff}=a>go()</script>";
        assert!(BEHAVIOR_RULE.scan(before_equals).is_empty());

        let ideographic = "<script\u{3000}src=a>go()</script>";
        assert!(BEHAVIOR_RULE.scan(ideographic).is_empty());
    }

    #[test]
    fn test_skipped_opener_resumes_inside_it() {
        // the opening tag text of the external script contains another opener
        let source = "<script src=\"x\"<script>go()</script>";
        let matches = BEHAVIOR_RULE.scan(source);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].outer.start, 15);
        assert_eq!(&source[matches[0].inner.clone()], "go()");
    }

    #[test]
    fn test_unterminated_block_stops_scan() {
        let source = "<style>a{}<style>b{}";
        assert!(STYLE_RULE.scan(source).is_empty());
    }

    #[test]
    fn test_opening_tag_without_close_bracket() {
        assert!(STYLE_RULE.scan("<style").is_empty());
        assert!(STYLE_RULE.scan("").is_empty());
    }
}

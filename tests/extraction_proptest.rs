//! Property-based tests for extraction
//!
//! Documents are generated as a sequence of segments (plain text, style blocks,
//! inline scripts, external scripts) so the expected artifacts can be computed
//! independently of the extractor.

use codesplit::split::extraction::{BEHAVIOR_PLACEHOLDER, STYLE_PLACEHOLDER};
use codesplit::{extract, find_blocks, BlockKind};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Segment {
    Text(String),
    Style { open: String, body: String, close: String },
    Script { open: String, body: String, close: String },
    External(String),
}

impl Segment {
    fn source(&self) -> String {
        match self {
            Segment::Text(text) => text.clone(),
            Segment::Style { open, body, close } | Segment::Script { open, body, close } => {
                format!("{}{}{}", open, body, close)
            }
            Segment::External(tag) => tag.clone(),
        }
    }

    fn residual(&self) -> String {
        match self {
            Segment::Text(text) => text.clone(),
            Segment::Style { .. } => STYLE_PLACEHOLDER.to_string(),
            Segment::Script { .. } => BEHAVIOR_PLACEHOLDER.to_string(),
            Segment::External(tag) => tag.clone(),
        }
    }
}

/// Plain text never contains '<', so it cannot open a tag
fn text_strategy() -> impl Strategy<Value = Segment> {
    "[a-zA-Z0-9 .,\n]{0,20}".prop_map(Segment::Text)
}

fn style_strategy() -> impl Strategy<Value = Segment> {
    (
        prop_oneof!["style", "STYLE", "Style"],
        prop_oneof!["", " media=\"screen\"", " type=\"text/css\""],
        "[a-z{}:; \n]{0,20}",
        prop_oneof!["style", "STYLE", "sTyLe"],
    )
        .prop_map(|(name, attrs, body, close)| Segment::Style {
            open: format!("<{}{}>", name, attrs),
            body,
            close: format!("</{}>", close),
        })
}

fn script_strategy() -> impl Strategy<Value = Segment> {
    (
        prop_oneof!["script", "SCRIPT", "Script"],
        prop_oneof!["", " type=\"module\"", " defer", " data-src=\"y\""],
        "[a-z()=; \n]{0,20}",
        prop_oneof!["script", "SCRIPT"],
    )
        .prop_map(|(name, attrs, body, close)| Segment::Script {
            open: format!("<{}{}>", name, attrs),
            body,
            close: format!("</{}>", close),
        })
}

fn external_strategy() -> impl Strategy<Value = Segment> {
    prop_oneof![
        Just("<script src=\"x.js\"></script>".to_string()),
        Just("<SCRIPT defer SRC = 'y.js'></SCRIPT>".to_string()),
        Just("<script type=\"module\"\n src=\"z.js\"></script>".to_string()),
    ]
    .prop_map(Segment::External)
}

fn document_strategy() -> impl Strategy<Value = Vec<Segment>> {
    prop::collection::vec(
        prop_oneof![
            3 => text_strategy(),
            2 => style_strategy(),
            2 => script_strategy(),
            1 => external_strategy(),
        ],
        0..10,
    )
}

fn render(segments: &[Segment]) -> String {
    segments.iter().map(Segment::source).collect()
}

fn expected_joined(segments: &[Segment], want_style: bool) -> String {
    segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::Style { body, .. } if want_style => Some(body.trim().to_string()),
            Segment::Script { body, .. } if !want_style => Some(body.trim().to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

proptest! {
    #[test]
    fn style_blocks_are_trimmed_and_joined_in_order(segments in document_strategy()) {
        let set = extract(&render(&segments));
        prop_assert_eq!(set.style, expected_joined(&segments, true));
    }

    #[test]
    fn inline_scripts_are_trimmed_and_joined_in_order(segments in document_strategy()) {
        let set = extract(&render(&segments));
        prop_assert_eq!(set.behavior, expected_joined(&segments, false));
    }

    #[test]
    fn block_counts_match(segments in document_strategy()) {
        let source = render(&segments);
        let styles = segments.iter().filter(|s| matches!(s, Segment::Style { .. })).count();
        let scripts = segments.iter().filter(|s| matches!(s, Segment::Script { .. })).count();
        prop_assert_eq!(find_blocks(&source, BlockKind::Style).len(), styles);
        prop_assert_eq!(find_blocks(&source, BlockKind::Behavior).len(), scripts);
    }

    #[test]
    fn residual_keeps_everything_outside_blocks(segments in document_strategy()) {
        let set = extract(&render(&segments));
        let expected: String = segments.iter().map(Segment::residual).collect();
        prop_assert_eq!(set.markup, expected.trim().to_string());
    }

    #[test]
    fn residual_extracts_to_nothing(segments in document_strategy()) {
        let first = extract(&render(&segments));
        let second = extract(&first.markup);
        prop_assert_eq!(second.style, "");
        prop_assert_eq!(second.behavior, "");
        prop_assert_eq!(second.markup, first.markup);
    }

    #[test]
    fn external_scripts_stay_verbatim(segments in document_strategy()) {
        let set = extract(&render(&segments));
        for segment in &segments {
            if let Segment::External(tag) = segment {
                prop_assert!(set.markup.contains(tag.as_str()), "missing {}", tag);
            }
        }
    }

    #[test]
    fn extraction_is_deterministic(segments in document_strategy()) {
        let source = render(&segments);
        prop_assert_eq!(extract(&source), extract(&source));
    }
}

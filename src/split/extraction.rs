//! Extraction of style and behavior blocks from combined markup
//!
//! [`extract`] is a pure, total function from source text to an
//! [`ArtifactSet`]:
//!
//! - `style`: the body of every `<style>` block, each trimmed, joined by one
//!   blank line, in source order
//! - `behavior`: the same for every inline `<script>` block; scripts carrying a
//!   `src` attribute stay where they are
//! - `markup`: the source with each style region and then each inline script
//!   region replaced by a placeholder comment, trimmed
//!
//! Matching is pattern based, not a markup parser. Overlapping or malformed
//! delimiters are not detected; the result is whatever the matching rule in
//! [`scanner`] yields.

mod scanner;

use crate::split::artifacts::{ArtifactKind, ArtifactSet};
use scanner::{RawMatch, TagRule, BEHAVIOR_RULE, STYLE_RULE};
use serde::Serialize;
use std::ops::Range;

/// Comment left in the markup where a style block was
pub const STYLE_PLACEHOLDER: &str = "<!-- Styles Extracted -->";

/// Comment left in the markup where an inline script block was
pub const BEHAVIOR_PLACEHOLDER: &str = "<!-- Scripts Extracted -->";

/// Separator between concatenated blocks of one kind
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// The two kinds of embedded block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Style,
    Behavior,
}

impl BlockKind {
    /// The artifact this block kind feeds
    pub fn artifact(&self) -> ArtifactKind {
        match self {
            BlockKind::Style => ArtifactKind::Style,
            BlockKind::Behavior => ArtifactKind::Behavior,
        }
    }

    /// Placeholder comment that replaces a block of this kind in the markup
    pub fn placeholder(&self) -> &'static str {
        match self {
            BlockKind::Style => STYLE_PLACEHOLDER,
            BlockKind::Behavior => BEHAVIOR_PLACEHOLDER,
        }
    }

    fn rule(&self) -> &'static TagRule {
        match self {
            BlockKind::Style => &STYLE_RULE,
            BlockKind::Behavior => &BEHAVIOR_RULE,
        }
    }
}

/// One matched region of the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    /// Byte range from the opening tag through the closing tag
    pub outer: Range<usize>,
    /// Byte range of the body between the tags
    pub inner: Range<usize>,
}

impl Block {
    fn from_raw(kind: BlockKind, raw: RawMatch) -> Self {
        Block {
            kind,
            outer: raw.outer,
            inner: raw.inner,
        }
    }

    /// The block body, untrimmed
    pub fn inner_text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.inner.clone()]
    }

    /// The whole region including both tags
    pub fn outer_text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.outer.clone()]
    }

    /// 1-based first and last line of the whole region
    pub fn line_span(&self, source: &str) -> (usize, usize) {
        let start = line_of(source, self.outer.start);
        let end = line_of(source, self.outer.end.saturating_sub(1).max(self.outer.start));
        (start, end)
    }
}

/// 1-based line number of a byte offset
fn line_of(source: &str, offset: usize) -> usize {
    source[..offset].matches('\n').count() + 1
}

/// Result of [`extract_blocks`]: the artifacts plus the blocks they came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub artifacts: ArtifactSet,
    /// Style blocks found in the source
    pub style_blocks: Vec<Block>,
    /// Inline behavior blocks found in the source
    pub behavior_blocks: Vec<Block>,
}

impl Extraction {
    /// Style and behavior blocks together, ordered by position in the source
    pub fn blocks(&self) -> Vec<&Block> {
        let mut all: Vec<&Block> = self
            .style_blocks
            .iter()
            .chain(self.behavior_blocks.iter())
            .collect();
        all.sort_by_key(|block| block.outer.start);
        all
    }
}

/// Find every block of one kind in the source, left to right
pub fn find_blocks(source: &str, kind: BlockKind) -> Vec<Block> {
    kind.rule()
        .scan(source)
        .into_iter()
        .map(|raw| Block::from_raw(kind, raw))
        .collect()
}

/// Split combined markup into its three artifacts
pub fn extract(source: &str) -> ArtifactSet {
    extract_blocks(source).artifacts
}

/// Like [`extract`], also returning the matched blocks
pub fn extract_blocks(source: &str) -> Extraction {
    let style_blocks = find_blocks(source, BlockKind::Style);
    let behavior_blocks = find_blocks(source, BlockKind::Behavior);

    let style = join_blocks(source, &style_blocks);
    let behavior = join_blocks(source, &behavior_blocks);

    // Style regions go first; scripts are then matched on what is left, so a
    // script tag inside a style block disappears with it.
    let without_style = replace_blocks(source, &style_blocks, STYLE_PLACEHOLDER);
    let residual_scripts = find_blocks(&without_style, BlockKind::Behavior);
    let residual = replace_blocks(&without_style, &residual_scripts, BEHAVIOR_PLACEHOLDER);
    let markup = trim_text(&residual).to_string();

    tracing::debug!(
        style_blocks = style_blocks.len(),
        behavior_blocks = behavior_blocks.len(),
        markup_bytes = markup.len(),
        "extracted artifacts"
    );

    Extraction {
        artifacts: ArtifactSet {
            markup,
            style,
            behavior,
        },
        style_blocks,
        behavior_blocks,
    }
}

/// Trimmed block bodies joined by one blank line
fn join_blocks(source: &str, blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| trim_text(block.inner_text(source)))
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

/// Copy of `text` with each block's outer region swapped for `placeholder`
fn replace_blocks(text: &str, blocks: &[Block], placeholder: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for block in blocks {
        out.push_str(&text[last..block.outer.start]);
        out.push_str(placeholder);
        last = block.outer.end;
    }
    out.push_str(&text[last..]);
    out
}

/// Trim with the whitespace set of JavaScript's `String.prototype.trim`
///
/// That is Unicode `White_Space` minus U+0085, plus U+FEFF.
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(is_trim_whitespace)
}

fn is_trim_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

//! Artifact kinds and the artifact set produced by extraction
//!
//! An [`ArtifactSet`] always carries all three fields. An empty field means
//! "nothing of that kind was found", which front-ends render through
//! [`ArtifactView`] as an explicit placeholder instead of a blank area.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three extracted content kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Structural markup (HTML)
    Markup,
    /// Style rules (CSS)
    Style,
    /// Behavior code (JavaScript)
    Behavior,
}

impl ArtifactKind {
    /// All kinds, in display and export order
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Markup,
        ArtifactKind::Style,
        ArtifactKind::Behavior,
    ];

    /// File extension used when the artifact is written to disk
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactKind::Markup => "html",
            ArtifactKind::Style => "css",
            ArtifactKind::Behavior => "js",
        }
    }

    /// Short upper-case label ("HTML", "CSS", "JS")
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::Markup => "HTML",
            ArtifactKind::Style => "CSS",
            ArtifactKind::Behavior => "JS",
        }
    }

    /// Human-readable language name
    pub fn display_name(&self) -> &'static str {
        match self {
            ArtifactKind::Markup => "HTML",
            ArtifactKind::Style => "CSS",
            ArtifactKind::Behavior => "JavaScript",
        }
    }

    /// Text shown in place of an empty artifact
    pub fn not_found_placeholder(&self) -> String {
        format!("No {} found", self.display_name())
    }

    /// File name for this kind given a stem, e.g. `index.css`
    pub fn file_name(&self, stem: &str) -> String {
        format!("{}.{}", stem, self.extension())
    }

    /// Parse a kind from its extension, label or kind name (case-insensitive)
    pub fn from_name(name: &str) -> Option<ArtifactKind> {
        match name.to_ascii_lowercase().as_str() {
            "html" | "markup" => Some(ArtifactKind::Markup),
            "css" | "style" => Some(ArtifactKind::Style),
            "js" | "javascript" | "behavior" => Some(ArtifactKind::Behavior),
            _ => None,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three artifacts of one extraction
///
/// Each field holds zero or more concatenated blocks. A set produced by one
/// extraction fully replaces any previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSet {
    pub markup: String,
    pub style: String,
    pub behavior: String,
}

impl ArtifactSet {
    pub fn new(
        markup: impl Into<String>,
        style: impl Into<String>,
        behavior: impl Into<String>,
    ) -> Self {
        ArtifactSet {
            markup: markup.into(),
            style: style.into(),
            behavior: behavior.into(),
        }
    }

    /// Text of the given kind
    pub fn get(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::Markup => &self.markup,
            ArtifactKind::Style => &self.style,
            ArtifactKind::Behavior => &self.behavior,
        }
    }

    /// Whether the given kind came out empty
    pub fn is_empty(&self, kind: ArtifactKind) -> bool {
        self.get(kind).is_empty()
    }

    /// Kinds with content, in [`ArtifactKind::ALL`] order
    pub fn present_kinds(&self) -> Vec<ArtifactKind> {
        ArtifactKind::ALL
            .into_iter()
            .filter(|kind| !self.is_empty(*kind))
            .collect()
    }

    /// Display view of one artifact
    pub fn view(&self, kind: ArtifactKind) -> ArtifactView<'_> {
        ArtifactView::new(kind, self.get(kind))
    }
}

/// What a front-end shows for one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactView<'a> {
    pub kind: ArtifactKind,
    /// The artifact text, borrowed from the set
    pub content: &'a str,
    /// Line count of `content` (see [`line_count`])
    pub lines: usize,
}

impl<'a> ArtifactView<'a> {
    pub fn new(kind: ArtifactKind, content: &'a str) -> Self {
        ArtifactView {
            kind,
            content,
            lines: line_count(content),
        }
    }

    pub fn is_found(&self) -> bool {
        !self.content.is_empty()
    }

    /// The content, or the "not found" placeholder when empty
    pub fn display_text(&self) -> String {
        if self.is_found() {
            self.content.to_string()
        } else {
            self.kind.not_found_placeholder()
        }
    }

    /// Line-count summary, e.g. `12 lines`
    pub fn summary(&self) -> String {
        format!("{} lines", self.lines)
    }
}

/// Number of newline-separated segments
///
/// An empty string is one (empty) segment, so it counts as one line.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

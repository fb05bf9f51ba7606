//! Data model for codesplitv
//!
//! The Model struct holds the pure application state:
//! - The workspace (input text and the current artifact set)
//! - Where the input came from
//! - Which tab is showing
//! - The current notice and when it was raised
//!
//! Rendering and key handling live elsewhere; the model is plain data and can
//! be tested without a terminal.

use codesplit::{line_count, ArtifactKind, Notice, Workspace};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Shown in every tab before anything has been extracted
pub const EMPTY_WORKSPACE_TEXT: &str =
    "Nothing extracted yet. Press r to reload the file or e to load the sample.";

/// The four panes of the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Markup,
    Style,
    Behavior,
    Preview,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Markup, Tab::Style, Tab::Behavior, Tab::Preview];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Markup => "HTML",
            Tab::Style => "CSS",
            Tab::Behavior => "JS",
            Tab::Preview => "Preview",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Markup => 0,
            Tab::Style => 1,
            Tab::Behavior => 2,
            Tab::Preview => 3,
        }
    }

    /// The artifact shown in this tab; `None` for the preview
    pub fn artifact(&self) -> Option<ArtifactKind> {
        match self {
            Tab::Markup => Some(ArtifactKind::Markup),
            Tab::Style => Some(ArtifactKind::Style),
            Tab::Behavior => Some(ArtifactKind::Behavior),
            Tab::Preview => None,
        }
    }

    /// Tab for the digit keys `1`-`4`
    pub fn from_digit(c: char) -> Option<Tab> {
        let index = c.to_digit(10)?.checked_sub(1)?;
        Tab::ALL.get(index as usize).copied()
    }

    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Where the workspace input was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Sample,
}

impl Source {
    /// Short name for the title bar
    pub fn display_name(&self) -> String {
        match self {
            Source::File(path) => path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("unknown")
                .to_string(),
            Source::Sample => "sample".to_string(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Source::File(path) => Some(path),
            Source::Sample => None,
        }
    }
}

#[derive(Debug, Clone)]
struct ActiveNotice {
    notice: Notice,
    raised_at: Instant,
}

pub struct Model {
    pub workspace: Workspace,
    source: Source,
    tab: Tab,
    notice: Option<ActiveNotice>,
    notice_duration: Duration,
}

impl Model {
    pub fn new(workspace: Workspace, source: Source, notice_duration: Duration) -> Self {
        Model {
            workspace,
            source,
            tab: Tab::default(),
            notice: None,
            notice_duration,
        }
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Raise a notice now
    pub fn show(&mut self, notice: Notice) {
        self.show_at(notice, Instant::now());
    }

    pub fn show_at(&mut self, notice: Notice, now: Instant) {
        tracing::debug!(severity = ?notice.severity, message = %notice.message, "notice");
        self.notice = Some(ActiveNotice {
            notice,
            raised_at: now,
        });
    }

    /// The notice still visible at `now`
    pub fn notice_at(&self, now: Instant) -> Option<&Notice> {
        self.notice
            .as_ref()
            .filter(|active| now.duration_since(active.raised_at) < self.notice_duration)
            .map(|active| &active.notice)
    }

    pub fn current_notice(&self) -> Option<&Notice> {
        self.notice_at(Instant::now())
    }

    /// Drop the notice once it has expired; returns whether it was dropped
    pub fn expire_notice(&mut self, now: Instant) -> bool {
        if self.notice.is_some() && self.notice_at(now).is_none() {
            self.notice = None;
            return true;
        }
        false
    }

    /// Text of the current tab
    pub fn current_text(&self) -> String {
        let Some(artifacts) = self.workspace.artifacts() else {
            return EMPTY_WORKSPACE_TEXT.to_string();
        };
        match self.tab.artifact() {
            Some(kind) => artifacts.view(kind).display_text(),
            None => codesplit::compose(artifacts).into_string(),
        }
    }

    /// Line count of the current tab's content, if anything has been extracted
    pub fn current_line_count(&self) -> Option<usize> {
        let artifacts = self.workspace.artifacts()?;
        Some(match self.tab.artifact() {
            Some(kind) => artifacts.view(kind).lines,
            None => line_count(codesplit::compose(artifacts).as_str()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codesplit::Severity;

    fn model_with(input: &str) -> Model {
        let mut workspace = Workspace::with_input(input);
        let _ = workspace.process();
        Model::new(
            workspace,
            Source::File(PathBuf::from("/tmp/page.html")),
            Duration::from_secs(3),
        )
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Markup.next(), Tab::Style);
        assert_eq!(Tab::Preview.next(), Tab::Markup);
        assert_eq!(Tab::Markup.previous(), Tab::Preview);
    }

    #[test]
    fn test_tab_from_digit() {
        assert_eq!(Tab::from_digit('1'), Some(Tab::Markup));
        assert_eq!(Tab::from_digit('4'), Some(Tab::Preview));
        assert_eq!(Tab::from_digit('0'), None);
        assert_eq!(Tab::from_digit('5'), None);
        assert_eq!(Tab::from_digit('x'), None);
    }

    #[test]
    fn test_source_display_name() {
        assert_eq!(
            Source::File(PathBuf::from("/a/b/index.html")).display_name(),
            "index.html"
        );
        assert_eq!(Source::Sample.display_name(), "sample");
    }

    #[test]
    fn test_notice_expires() {
        let mut model = model_with("<p>x</p>");
        let start = Instant::now();
        model.show_at(Notice::success("done"), start);

        assert!(model.notice_at(start + Duration::from_secs(1)).is_some());
        assert!(!model.expire_notice(start + Duration::from_secs(1)));
        assert!(model.notice_at(start + Duration::from_secs(3)).is_none());
        assert!(model.expire_notice(start + Duration::from_secs(3)));
    }

    #[test]
    fn test_newer_notice_replaces_older() {
        let mut model = model_with("<p>x</p>");
        model.show(Notice::success("first"));
        model.show(Notice::error("second"));
        let notice = model.current_notice().unwrap();
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.message, "second");
    }

    #[test]
    fn test_current_text_per_tab() {
        let mut model = model_with("<style>a{}</style><p>x</p>");
        assert_eq!(model.current_text(), "<!-- Styles Extracted --><p>x</p>");
        model.select_tab(Tab::Style);
        assert_eq!(model.current_text(), "a{}");
        model.select_tab(Tab::Behavior);
        assert_eq!(model.current_text(), "No JavaScript found");
        assert_eq!(model.current_line_count(), Some(1));
        model.select_tab(Tab::Preview);
        assert!(model.current_text().starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_empty_workspace_text() {
        let model = model_with("   ");
        assert_eq!(model.current_text(), EMPTY_WORKSPACE_TEXT);
        assert_eq!(model.current_line_count(), None);
    }
}

//! Copying artifacts to a clipboard
//!
//! The clipboard itself is a collaborator behind the [`Clipboard`] trait; the
//! viewer plugs in the system clipboard, tests and headless callers use
//! [`MemoryClipboard`].

use crate::split::artifacts::{ArtifactKind, ArtifactSet};
use crate::split::error::SplitError;
use crate::split::notice::Notice;

/// A plain-text clipboard
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), SplitError>;
}

/// In-process clipboard that remembers the last text
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), SplitError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Copy one artifact to the clipboard
///
/// An empty artifact is a silent no-op and returns `Ok(None)`.
pub fn copy_artifact<C: Clipboard + ?Sized>(
    artifacts: &ArtifactSet,
    kind: ArtifactKind,
    clipboard: &mut C,
) -> Result<Option<Notice>, SplitError> {
    let text = artifacts.get(kind);
    if text.is_empty() {
        return Ok(None);
    }
    clipboard.set_text(text)?;
    tracing::debug!(kind = kind.label(), bytes = text.len(), "copied artifact");
    Ok(Some(Notice::success(format!(
        "{} copied to clipboard!",
        kind.label()
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn set_text(&mut self, _text: &str) -> Result<(), SplitError> {
            Err(SplitError::Clipboard("no display".into()))
        }
    }

    #[test]
    fn test_copy_sets_text_and_notifies() {
        let set = ArtifactSet::new("<p>x</p>", "a{}", "");
        let mut clipboard = MemoryClipboard::new();
        let notice = copy_artifact(&set, ArtifactKind::Style, &mut clipboard)
            .unwrap()
            .unwrap();
        assert_eq!(clipboard.contents(), Some("a{}"));
        assert_eq!(notice.message, "CSS copied to clipboard!");
    }

    #[test]
    fn test_copy_empty_is_noop() {
        let set = ArtifactSet::new("<p>x</p>", "", "");
        let mut clipboard = MemoryClipboard::new();
        let notice = copy_artifact(&set, ArtifactKind::Behavior, &mut clipboard).unwrap();
        assert!(notice.is_none());
        assert_eq!(clipboard.contents(), None);
    }

    #[test]
    fn test_copy_propagates_clipboard_errors() {
        let set = ArtifactSet::new("<p>x</p>", "", "");
        let result = copy_artifact(&set, ArtifactKind::Markup, &mut BrokenClipboard);
        assert!(matches!(result, Err(SplitError::Clipboard(_))));
    }
}

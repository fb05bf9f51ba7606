//! Preview composition
//!
//! Reassembles an [`ArtifactSet`] into one self-contained document for an
//! isolated rendering surface. Nothing is escaped or sanitized: the preview runs
//! the user's own behavior code as-is. Isolation from the host is the rendering
//! surface's job.

use crate::split::artifacts::ArtifactSet;
use std::fmt;

/// A composed, render-only document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewDocument(String);

impl PreviewDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PreviewDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PreviewDocument {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Compose the preview document
///
/// Style goes in a single `<style>` element in the head, markup is the body
/// content, and behavior goes in a single inline `<script>` after the markup so
/// it runs once the elements it references exist. The skeleton is emitted even
/// when every artifact is empty.
pub fn compose(artifacts: &ArtifactSet) -> PreviewDocument {
    let mut doc = String::with_capacity(
        artifacts.markup.len() + artifacts.style.len() + artifacts.behavior.len() + 96,
    );
    doc.push_str("<!DOCTYPE html>\n");
    doc.push_str("<html>\n");
    doc.push_str("<head><style>");
    doc.push_str(&artifacts.style);
    doc.push_str("</style></head>\n");
    doc.push_str("<body>\n");
    doc.push_str(&artifacts.markup);
    doc.push('\n');
    doc.push_str("<script>");
    doc.push_str(&artifacts.behavior);
    doc.push_str("</script>\n");
    doc.push_str("</body>\n");
    doc.push_str("</html>\n");
    PreviewDocument(doc)
}

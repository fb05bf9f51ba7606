//! The caller-side session
//!
//! A [`Workspace`] owns the input text and the current [`ArtifactSet`]. It is
//! an ordinary value: front-ends create one, pass it around explicitly, and
//! hand `&ArtifactSet` to downstream operations (copy, export, preview).
//!
//! Validation happens here, before extraction runs. A rejected extraction
//! leaves the previous artifact set untouched.

use crate::split::artifacts::{ArtifactKind, ArtifactSet, ArtifactView};
use crate::split::error::SplitError;
use crate::split::extraction::{extract, trim_text};
use crate::split::notice::Notice;
use crate::split::preview::{compose, PreviewDocument};
use crate::split::samples;

#[derive(Debug, Clone, Default)]
pub struct Workspace {
    input: String,
    artifacts: Option<ArtifactSet>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// A workspace with the given input, not yet extracted
    pub fn with_input(input: impl Into<String>) -> Self {
        Workspace {
            input: input.into(),
            artifacts: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Length of the input in UTF-16 code units, as an editor widget reports it
    pub fn character_count(&self) -> usize {
        self.input.encode_utf16().count()
    }

    /// Extract the current input, replacing the artifact set
    ///
    /// Blank input is rejected with [`SplitError::EmptyInput`] and the previous
    /// set (if any) is kept.
    pub fn extract(&mut self) -> Result<Notice, SplitError> {
        let raw = trim_text(&self.input);
        if raw.is_empty() {
            tracing::debug!("rejected blank input");
            return Err(SplitError::EmptyInput);
        }
        self.artifacts = Some(extract(raw));
        Ok(Notice::separated())
    }

    /// Run [`Workspace::extract`] and fold the outcome into a notice
    pub fn process(&mut self) -> Notice {
        self.extract().unwrap_or_else(|err| Notice::from(&err))
    }

    /// Load the built-in sample and extract it
    pub fn load_sample(&mut self) -> Notice {
        self.input = samples::ANIMATED_CARD.to_string();
        self.process()
    }

    /// Empty the input and discard the artifact set
    pub fn clear(&mut self) -> Notice {
        self.input.clear();
        self.artifacts = None;
        Notice::cleared()
    }

    /// The current artifact set, if an extraction has succeeded
    pub fn artifacts(&self) -> Option<&ArtifactSet> {
        self.artifacts.as_ref()
    }

    pub fn has_artifacts(&self) -> bool {
        self.artifacts.is_some()
    }

    /// Display view of one artifact of the current set
    pub fn view(&self, kind: ArtifactKind) -> Option<ArtifactView<'_>> {
        self.artifacts.as_ref().map(|set| set.view(kind))
    }

    /// Preview of the current set
    pub fn preview(&self) -> Option<PreviewDocument> {
        self.artifacts.as_ref().map(compose)
    }
}

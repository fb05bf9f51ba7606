//! Output format registry
//!
//! A pluggable registry of serializers for an [`ArtifactSet`]. Each format
//! implements [`ArtifactFormatter`] and is looked up by name.

use crate::split::artifacts::{ArtifactKind, ArtifactSet};
use crate::split::preview::compose;
use std::collections::HashMap;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for artifact set formatters
pub trait ArtifactFormatter: Send + Sync {
    /// The name of this format (e.g., "text", "json")
    fn name(&self) -> &str;

    /// Serialize an artifact set to this format
    fn serialize(&self, artifacts: &ArtifactSet) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Human-readable sections with line counts and "not found" placeholders
pub struct TextFormatter;

impl ArtifactFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "All three artifacts as labelled sections"
    }

    fn serialize(&self, artifacts: &ArtifactSet) -> Result<String, FormatError> {
        let sections: Vec<String> = ArtifactKind::ALL
            .iter()
            .map(|kind| {
                let view = artifacts.view(*kind);
                format!(
                    "== {} ({}) ==\n{}\n",
                    kind.file_name("index"),
                    view.summary(),
                    view.display_text()
                )
            })
            .collect();
        Ok(sections.join("\n"))
    }
}

pub struct JsonFormatter;

impl ArtifactFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON object with markup, style and behavior"
    }

    fn serialize(&self, artifacts: &ArtifactSet) -> Result<String, FormatError> {
        serde_json::to_string_pretty(artifacts)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

pub struct YamlFormatter;

impl ArtifactFormatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn description(&self) -> &str {
        "YAML mapping with markup, style and behavior"
    }

    fn serialize(&self, artifacts: &ArtifactSet) -> Result<String, FormatError> {
        serde_yaml::to_string(artifacts).map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

/// The composed preview document
pub struct PreviewFormatter;

impl ArtifactFormatter for PreviewFormatter {
    fn name(&self) -> &str {
        "preview"
    }

    fn description(&self) -> &str {
        "Self-contained preview document"
    }

    fn serialize(&self, artifacts: &ArtifactSet) -> Result<String, FormatError> {
        Ok(compose(artifacts).into_string())
    }
}

/// A single raw artifact, named by its extension
pub struct SingleArtifactFormatter {
    kind: ArtifactKind,
    description: String,
}

impl SingleArtifactFormatter {
    pub fn new(kind: ArtifactKind) -> Self {
        SingleArtifactFormatter {
            kind,
            description: format!("Only the {} artifact", kind.display_name()),
        }
    }
}

impl ArtifactFormatter for SingleArtifactFormatter {
    fn name(&self) -> &str {
        self.kind.extension()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn serialize(&self, artifacts: &ArtifactSet) -> Result<String, FormatError> {
        Ok(artifacts.get(self.kind).to_string())
    }
}

/// Registry of artifact set formatters
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn ArtifactFormatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: ArtifactFormatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn ArtifactFormatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize an artifact set using the named format
    pub fn serialize(&self, artifacts: &ArtifactSet, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(artifacts)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(TextFormatter);
        registry.register(JsonFormatter);
        registry.register(YamlFormatter);
        registry.register(PreviewFormatter);
        for kind in ArtifactKind::ALL {
            registry.register(SingleArtifactFormatter::new(kind));
        }

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

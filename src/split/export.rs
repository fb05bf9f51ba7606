//! Writing artifacts to disk
//!
//! Each artifact is written as `<stem>.<ext>` (`index.html`, `index.css`,
//! `index.js` by default). The batch export writes every non-empty artifact as
//! an independent tokio task; tasks are staggered by `index * stagger`, where
//! `index` is the artifact's position in [`ArtifactKind::ALL`]. The stagger is
//! only a scheduling courtesy and one failing task never affects the others.

use crate::split::artifacts::{ArtifactKind, ArtifactSet};
use crate::split::error::SplitError;
use crate::split::preview::PreviewDocument;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default file stem for exported artifacts
pub const DEFAULT_FILE_STEM: &str = "index";

/// Default delay step between batch exports
pub const DEFAULT_STAGGER: Duration = Duration::from_millis(500);

/// One entry of a batch export plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledExport {
    pub kind: ArtifactKind,
    /// Delay before this artifact is written, from the start of the batch
    pub delay: Duration,
}

/// Result of one batch export task
#[derive(Debug)]
pub struct ExportOutcome {
    pub kind: ArtifactKind,
    pub result: Result<PathBuf, SplitError>,
}

/// Writes artifacts into one directory
#[derive(Debug, Clone)]
pub struct Exporter {
    directory: PathBuf,
    file_stem: String,
}

impl Exporter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Exporter {
            directory: directory.into(),
            file_stem: DEFAULT_FILE_STEM.to_string(),
        }
    }

    pub fn with_file_stem(mut self, stem: impl Into<String>) -> Self {
        self.file_stem = stem.into();
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Target path for one artifact kind
    pub fn path_for(&self, kind: ArtifactKind) -> PathBuf {
        self.directory.join(kind.file_name(&self.file_stem))
    }

    /// Write one artifact, even if it is empty
    pub fn write_artifact(
        &self,
        artifacts: &ArtifactSet,
        kind: ArtifactKind,
    ) -> Result<PathBuf, SplitError> {
        let path = self.path_for(kind);
        self.write_file(&path, artifacts.get(kind))?;
        tracing::info!(path = %path.display(), kind = kind.label(), "wrote artifact");
        Ok(path)
    }

    /// Write a composed preview document under `file_name`
    pub fn write_preview(
        &self,
        preview: &PreviewDocument,
        file_name: &str,
    ) -> Result<PathBuf, SplitError> {
        let path = self.directory.join(file_name);
        self.write_file(&path, preview.as_str())?;
        tracing::info!(path = %path.display(), "wrote preview");
        Ok(path)
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<(), SplitError> {
        fs::create_dir_all(&self.directory)
            .map_err(|e| SplitError::write(self.directory.clone(), e))?;
        fs::write(path, contents).map_err(|e| SplitError::write(path, e))
    }

    /// Export every non-empty artifact as an independent, staggered task
    ///
    /// Returns one outcome per planned artifact, in plan order. Must be called
    /// from within a tokio runtime.
    pub async fn export_all(
        &self,
        artifacts: &ArtifactSet,
        stagger: Duration,
    ) -> Vec<ExportOutcome> {
        let plan = plan_all(artifacts, stagger);
        let mut handles = Vec::with_capacity(plan.len());

        for job in plan {
            let directory = self.directory.clone();
            let path = self.path_for(job.kind);
            let contents = artifacts.get(job.kind).to_string();
            let handle = tokio::spawn(async move {
                tokio::time::sleep(job.delay).await;
                if let Err(source) = tokio::fs::create_dir_all(&directory).await {
                    return Err(SplitError::write(directory, source));
                }
                match tokio::fs::write(&path, contents).await {
                    Ok(()) => Ok(path),
                    Err(source) => Err(SplitError::write(path, source)),
                }
            });
            handles.push((job.kind, handle));
        }

        let mut outcomes = Vec::with_capacity(handles.len());
        for (kind, handle) in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(join_error) => Err(SplitError::Task(join_error.to_string())),
            };
            match &result {
                Ok(path) => {
                    tracing::info!(path = %path.display(), kind = kind.label(), "wrote artifact")
                }
                Err(err) => tracing::warn!(kind = kind.label(), error = %err, "export failed"),
            }
            outcomes.push(ExportOutcome { kind, result });
        }
        outcomes
    }
}

/// The batch plan: non-empty artifacts in fixed order with their delays
pub fn plan_all(artifacts: &ArtifactSet, stagger: Duration) -> Vec<ScheduledExport> {
    ArtifactKind::ALL
        .iter()
        .enumerate()
        .filter(|(_, kind)| !artifacts.is_empty(**kind))
        .map(|(index, kind)| ScheduledExport {
            kind: *kind,
            delay: stagger * index as u32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_plan_skips_empty_but_keeps_slot_delay() {
        let set = ArtifactSet::new("<p>x</p>", "", "go()");
        let plan = plan_all(&set, Duration::from_millis(500));
        assert_eq!(
            plan,
            vec![
                ScheduledExport {
                    kind: ArtifactKind::Markup,
                    delay: Duration::ZERO,
                },
                ScheduledExport {
                    kind: ArtifactKind::Behavior,
                    delay: Duration::from_millis(1000),
                },
            ]
        );
    }

    #[test]
    fn test_plan_empty_set() {
        assert!(plan_all(&ArtifactSet::default(), DEFAULT_STAGGER).is_empty());
    }

    #[test]
    fn test_write_artifact_names() {
        let dir = tempdir().unwrap();
        let exporter = Exporter::new(dir.path());
        let set = ArtifactSet::new("<p>x</p>", "a{}", "");

        let path = exporter.write_artifact(&set, ArtifactKind::Style).unwrap();
        assert_eq!(path, dir.path().join("index.css"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "a{}");

        // single writes go through even when the artifact is empty
        let path = exporter.write_artifact(&set, ArtifactKind::Behavior).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "");
    }

    #[test]
    fn test_custom_stem_and_missing_directory() {
        let dir = tempdir().unwrap();
        let exporter = Exporter::new(dir.path().join("out")).with_file_stem("page");
        let set = ArtifactSet::new("<p>x</p>", "", "");
        let path = exporter.write_artifact(&set, ArtifactKind::Markup).unwrap();
        assert_eq!(path, dir.path().join("out").join("page.html"));
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_export_all_writes_present_artifacts() {
        let dir = tempdir().unwrap();
        let exporter = Exporter::new(dir.path());
        let set = ArtifactSet::new("<p>x</p>", "a{}", "");

        let outcomes = exporter.export_all(&set, Duration::ZERO).await;
        let kinds: Vec<ArtifactKind> = outcomes.iter().map(|o| o.kind).collect();
        assert_eq!(kinds, vec![ArtifactKind::Markup, ArtifactKind::Style]);
        assert!(outcomes.iter().all(|o| o.result.is_ok()));
        assert!(dir.path().join("index.html").exists());
        assert!(dir.path().join("index.css").exists());
        assert!(!dir.path().join("index.js").exists());
    }

    #[tokio::test]
    async fn test_export_all_failures_are_independent() {
        let dir = tempdir().unwrap();
        // a directory where the stylesheet should go makes that write fail
        fs::create_dir(dir.path().join("index.css")).unwrap();
        let exporter = Exporter::new(dir.path());
        let set = ArtifactSet::new("<p>x</p>", "a{}", "go()");

        let outcomes = exporter.export_all(&set, Duration::ZERO).await;
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].result.is_ok());
        assert!(matches!(outcomes[1].result, Err(SplitError::Write { .. })));
        assert!(outcomes[2].result.is_ok());
        assert_eq!(
            fs::read_to_string(dir.path().join("index.js")).unwrap(),
            "go()"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_export_all_is_staggered() {
        let dir = tempdir().unwrap();
        let exporter = Exporter::new(dir.path());
        let set = ArtifactSet::new("<p>x</p>", "a{}", "go()");

        let start = tokio::time::Instant::now();
        let outcomes = exporter.export_all(&set, DEFAULT_STAGGER).await;
        assert_eq!(outcomes.len(), 3);
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }
}

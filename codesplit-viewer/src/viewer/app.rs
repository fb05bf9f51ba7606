//! Main application state and event handling
//!
//! The App struct brings together:
//! - Model (the application state)
//! - TabBar and ContentViewer (the UI components)
//! - The clipboard and exporter collaborators
//! - Global key handling (quit, actions, delegating to viewers)

use super::contentviewer::ContentViewer;
use super::model::{Model, Tab};
use super::tabbar::TabBar;
use super::viewer::{Viewer, ViewerEvent};
use codesplit::split::clipboard::{copy_artifact, Clipboard};
use codesplit::split::export::{ExportOutcome, Exporter};
use codesplit::Notice;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fs;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Where and how files are written
pub struct ExportSettings {
    pub exporter: Exporter,
    pub preview_file: String,
    pub stagger: Duration,
}

/// The main application
pub struct App {
    /// The model holding workspace, tab and notice state
    pub model: Model,

    pub tab_bar: TabBar,

    pub content_viewer: ContentViewer,

    clipboard: Box<dyn Clipboard>,

    export: ExportSettings,

    /// Runtime the batch exports are spawned on
    runtime: Handle,

    finished_tx: UnboundedSender<Vec<ExportOutcome>>,
    finished_rx: UnboundedReceiver<Vec<ExportOutcome>>,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(
        model: Model,
        clipboard: Box<dyn Clipboard>,
        export: ExportSettings,
        runtime: Handle,
    ) -> Self {
        let (finished_tx, finished_rx) = unbounded_channel();
        App {
            model,
            tab_bar: TabBar::new(),
            content_viewer: ContentViewer::new(),
            clipboard,
            export,
            runtime,
            finished_tx,
            finished_rx,
            should_quit: false,
        }
    }

    /// Handle a keyboard event
    ///
    /// Returns whether the state changed (needed for re-rendering)
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') if key.modifiers.is_empty() => {
                self.should_quit = true;
                return true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return true;
            }
            KeyCode::Char('c') => return self.copy_current(),
            KeyCode::Char('s') => return self.save_current(),
            KeyCode::Char('a') => return self.save_all(),
            KeyCode::Char('p') => return self.save_preview(),
            KeyCode::Char('r') => return self.reload(),
            KeyCode::Char('e') => {
                let notice = self.model.workspace.load_sample();
                return self.after_extraction(notice);
            }
            KeyCode::Char('x') => {
                let notice = self.model.workspace.clear();
                return self.after_extraction(notice);
            }
            _ => {}
        }

        if let Some(event) = self.tab_bar.handle_key(key, &self.model) {
            return self.process_viewer_event(event);
        }
        match self.content_viewer.handle_key(key, &self.model) {
            Some(event) => self.process_viewer_event(event),
            None => false,
        }
    }

    /// File name the current tab would be saved as
    pub fn pane_title(&self) -> String {
        match self.model.tab().artifact() {
            Some(kind) => self
                .export
                .exporter
                .path_for(kind)
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string)
                .unwrap_or_else(|| kind.file_name("index")),
            None => self.export.preview_file.clone(),
        }
    }

    fn process_viewer_event(&mut self, event: ViewerEvent) -> bool {
        match event {
            ViewerEvent::SelectTab(tab) => {
                self.model.select_tab(tab);
                self.content_viewer.reset();
                true
            }
            ViewerEvent::Scrolled => true,
            ViewerEvent::NoChange => false,
        }
    }

    /// Expire notices and collect finished batch exports
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Ok(outcomes) = self.finished_rx.try_recv() {
            let notice = batch_notice(&outcomes);
            self.model.show_at(notice, now);
            changed = true;
        }
        self.model.expire_notice(now) || changed
    }

    fn after_extraction(&mut self, notice: Notice) -> bool {
        self.content_viewer.reset();
        self.model.show(notice);
        true
    }

    fn reload(&mut self) -> bool {
        let Some(path) = self.model.source().path().map(|p| p.to_path_buf()) else {
            let notice = self.model.workspace.load_sample();
            return self.after_extraction(notice);
        };
        match fs::read_to_string(&path) {
            Ok(content) => {
                self.model.workspace.set_input(content);
                let notice = self.model.workspace.process();
                self.after_extraction(notice)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "reload failed");
                self.model
                    .show(Notice::error(format!("Could not read {}: {}", path.display(), e)));
                true
            }
        }
    }

    fn copy_current(&mut self) -> bool {
        let Some(kind) = self.model.tab().artifact() else {
            return false;
        };
        let Some(artifacts) = self.model.workspace.artifacts() else {
            return false;
        };
        match copy_artifact(artifacts, kind, self.clipboard.as_mut()) {
            Ok(Some(notice)) => self.model.show(notice),
            Ok(None) => return false,
            Err(e) => self.model.show(Notice::from(&e)),
        }
        true
    }

    fn save_current(&mut self) -> bool {
        if self.model.tab() == Tab::Preview {
            return self.save_preview();
        }
        let (Some(kind), Some(artifacts)) =
            (self.model.tab().artifact(), self.model.workspace.artifacts())
        else {
            return false;
        };
        let notice = match self.export.exporter.write_artifact(artifacts, kind) {
            Ok(path) => Notice::success(format!("Saved {}", path.display())),
            Err(e) => Notice::from(&e),
        };
        self.model.show(notice);
        true
    }

    fn save_preview(&mut self) -> bool {
        let Some(preview) = self.model.workspace.preview() else {
            return false;
        };
        let notice = match self
            .export
            .exporter
            .write_preview(&preview, &self.export.preview_file)
        {
            Ok(path) => Notice::success(format!("Saved {}", path.display())),
            Err(e) => Notice::from(&e),
        };
        self.model.show(notice);
        true
    }

    fn save_all(&mut self) -> bool {
        let Some(artifacts) = self.model.workspace.artifacts().cloned() else {
            return false;
        };
        let exporter = self.export.exporter.clone();
        let stagger = self.export.stagger;
        let finished = self.finished_tx.clone();
        self.runtime.spawn(async move {
            let outcomes = exporter.export_all(&artifacts, stagger).await;
            // the receiver only goes away when the app is shutting down
            let _ = finished.send(outcomes);
        });
        self.model.show(Notice::downloading_all());
        true
    }
}

/// Summarize one finished batch export
fn batch_notice(outcomes: &[ExportOutcome]) -> Notice {
    match outcomes
        .iter()
        .find_map(|outcome| outcome.result.as_ref().err())
    {
        Some(err) => Notice::error(err.to_string()),
        None => Notice::success(format!("Saved {} files", outcomes.len())),
    }
}

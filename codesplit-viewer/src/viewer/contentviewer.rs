//! Content viewer - displays the text of the current tab
//!
//! Scrolls with Up/Down, PageUp/PageDown, Home and End. The scroll offset is
//! reset whenever the tab or the artifact set changes.

use super::model::Model;
use super::viewer::{Viewer, ViewerEvent};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Lines moved by PageUp/PageDown
const PAGE: usize = 10;

#[derive(Debug, Default)]
pub struct ContentViewer {
    /// How many lines are scrolled off the top of the viewport
    scroll_offset: usize,
}

impl ContentViewer {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn reset(&mut self) {
        self.scroll_offset = 0;
    }

    fn scroll_to(&mut self, offset: usize, model: &Model) -> ViewerEvent {
        let max = model.current_line_count().unwrap_or(1).saturating_sub(1);
        let offset = offset.min(max);
        if offset == self.scroll_offset {
            return ViewerEvent::NoChange;
        }
        self.scroll_offset = offset;
        ViewerEvent::Scrolled
    }
}

impl Viewer for ContentViewer {
    fn render(&self, frame: &mut Frame, area: Rect, model: &Model) {
        let offset = u16::try_from(self.scroll_offset).unwrap_or(u16::MAX);
        let paragraph = Paragraph::new(model.current_text()).scroll((offset, 0));
        frame.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, key: KeyEvent, model: &Model) -> Option<ViewerEvent> {
        let current = self.scroll_offset;
        let event = match key.code {
            KeyCode::Up => self.scroll_to(current.saturating_sub(1), model),
            KeyCode::Down => self.scroll_to(current + 1, model),
            KeyCode::PageUp => self.scroll_to(current.saturating_sub(PAGE), model),
            KeyCode::PageDown => self.scroll_to(current + PAGE, model),
            KeyCode::Home => self.scroll_to(0, model),
            KeyCode::End => self.scroll_to(usize::MAX, model),
            _ => return None,
        };
        Some(event)
    }
}

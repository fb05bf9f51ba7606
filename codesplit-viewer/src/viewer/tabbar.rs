//! Tab bar - shows the four panes and switches between them

use super::model::{Model, Tab};
use super::viewer::{Viewer, ViewerEvent};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Tabs;
use ratatui::Frame;

#[derive(Debug, Default)]
pub struct TabBar;

impl TabBar {
    pub fn new() -> Self {
        TabBar
    }
}

impl Viewer for TabBar {
    fn render(&self, frame: &mut Frame, area: Rect, model: &Model) {
        let titles: Vec<String> = Tab::ALL
            .iter()
            .map(|tab| format!("{} {}", tab.index() + 1, tab.title()))
            .collect();
        let tabs = Tabs::new(titles)
            .select(model.tab().index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }

    fn handle_key(&mut self, key: KeyEvent, model: &Model) -> Option<ViewerEvent> {
        let target = match key.code {
            KeyCode::Char(c) => Tab::from_digit(c)?,
            KeyCode::Left => model.tab().previous(),
            KeyCode::Right => model.tab().next(),
            _ => return None,
        };
        if target == model.tab() {
            Some(ViewerEvent::NoChange)
        } else {
            Some(ViewerEvent::SelectTab(target))
        }
    }
}

//! UI rendering logic
//!
//! Handles layout and rendering of the application using Ratatui.
//! Layout structure:
//! - Title bar (1 line, fixed)
//! - Tab bar (1 line, fixed)
//! - Content (responsive height, bordered)
//! - Status line (1 line, fixed)

use super::app::App;
use super::viewer::Viewer;
use codesplit::Severity;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Minimum terminal width required for the UI
const MIN_TERMINAL_WIDTH: u16 = 50;
/// Height of the status line
const STATUS_LINE_HEIGHT: u16 = 1;

const KEY_HELP: &str = "c copy s save a all p preview r reload e sample x clear q quit";

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    if size.width < MIN_TERMINAL_WIDTH {
        render_error_too_narrow(frame, size);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                  // Title bar
            Constraint::Length(1),                  // Tabs
            Constraint::Min(1),                     // Content
            Constraint::Length(STATUS_LINE_HEIGHT), // Status line
        ])
        .split(size);

    render_title_bar(frame, chunks[0], app);
    app.tab_bar.render(frame, chunks[1], &app.model);
    render_content(frame, chunks[2], app);
    render_status_line(frame, chunks[3], app);
}

fn render_error_too_narrow(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too narrow: {} < {} chars",
        area.width, MIN_TERMINAL_WIDTH
    );
    let paragraph =
        Paragraph::new(msg).style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, area);
}

fn render_title_bar(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!(
        "codesplit:: {} ({} chars)",
        app.model.source().display_name(),
        app.model.workspace.character_count()
    );
    let paragraph = Paragraph::new(title).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}

fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title(app.pane_title());
    let inner_area = block.inner(area);
    frame.render_widget(block, area);
    app.content_viewer.render(frame, inner_area, &app.model);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();

    match app.model.current_notice() {
        Some(notice) => {
            let color = match notice.severity {
                Severity::Success => Color::Green,
                Severity::Info => Color::Cyan,
                Severity::Error => Color::Red,
            };
            spans.push(Span::styled(
                notice.message.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
        }
        None => spans.push(Span::raw(KEY_HELP)),
    }

    if let Some(lines) = app.model.current_line_count() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{} lines", lines),
            Style::default().fg(Color::Yellow),
        ));
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(paragraph, area);
}

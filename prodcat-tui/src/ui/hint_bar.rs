use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::mode::AppMode;

/// Render the hint bar (bottom bar)
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.mode {
        AppMode::Search => Line::from(Span::styled(
            "type to search | Backspace: delete | Esc/Enter: done",
            Style::default().fg(Color::DarkGray),
        )),

        AppMode::Normal => {
            // Show status message or keybind hints
            if let Some(ref msg) = app.status_message {
                Line::from(msg.as_str())
            } else {
                // The clear hint is only offered while a query is active
                let hints = if app.filter.is_query_active() {
                    "/: search | c: clear search | ←/→ 0-9: owner | r: reset all | q: quit"
                } else {
                    "/: search | ←/→ 0-9: owner | r: reset all | q: quit"
                };

                Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
            }
        }
    };

    let paragraph = Paragraph::new(content);
    f.render_widget(paragraph, area);
}

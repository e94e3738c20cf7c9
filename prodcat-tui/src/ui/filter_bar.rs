use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::mode::AppMode;

/// Render the filter panel: one tab per user plus All, and the search
/// input line. Exactly one tab is highlighted at a time.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let border_color = if app.mode == AppMode::Search {
        app.mode.color()
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Filters ")
        .border_style(Style::default().fg(border_color));

    let paragraph = Paragraph::new(vec![owner_tabs_line(app), search_line(app)]).block(block);

    f.render_widget(paragraph, area);
}

fn owner_tabs_line(app: &App) -> Line<'_> {
    let active = app.selected_tab();
    let mut spans = vec![tab_span("All", active == 0)];

    for (idx, user) in app.catalog.users.iter().enumerate() {
        spans.push(Span::raw("  "));
        spans.push(tab_span(&user.name, active == idx + 1));
    }

    Line::from(spans)
}

fn tab_span(label: &str, is_active: bool) -> Span<'_> {
    let style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::Gray)
    };
    Span::styled(label, style)
}

fn search_line(app: &App) -> Line<'_> {
    let mut spans = vec![Span::styled("Search: ", Style::default().fg(Color::DarkGray))];

    if app.filter.query().is_empty() && app.mode != AppMode::Search {
        spans.push(Span::styled(
            "(press / to search)",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::raw(app.filter.query()));
    }

    if app.mode == AppMode::Search {
        spans.push(Span::styled("_", Style::default().fg(Color::Green))); // Cursor
    }

    // Clear affordance only while a query is active
    if app.filter.is_query_active() {
        spans.push(Span::styled(
            "  [c: clear]",
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use prodcat_core::{ProductRow, Sex};

use crate::app::App;

/// Render the results area: the product table, or the empty-state
/// message when nothing passes the filters.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let rows = app.visible_rows();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Products ({}) ", rows.len()))
        .border_style(Style::default().fg(Color::DarkGray));

    if rows.is_empty() {
        let empty_msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No products matching selected criteria",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .block(block)
        .alignment(Alignment::Center);

        f.render_widget(empty_msg, area);
    } else {
        let header = Row::new(["ID", "Product", "Category", "User"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let rows: Vec<Row> = rows.iter().map(render_row).collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Percentage(30),
                Constraint::Percentage(40),
                Constraint::Percentage(30),
            ],
        )
        .header(header)
        .block(block);

        f.render_widget(table, area);
    }
}

/// Render a single product as a table row
fn render_row<'a>(row: &ProductRow<'a>) -> Row<'a> {
    // Blue for male owners, red for female, unstyled when unresolved
    let owner_style = match row.owner_sex() {
        Some(Sex::Male) => Style::default().fg(Color::Blue),
        Some(Sex::Female) => Style::default().fg(Color::Red),
        None => Style::default(),
    };

    Row::new(vec![
        Cell::from(Span::styled(
            row.product.id.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Cell::from(row.product.name.as_str()),
        Cell::from(row.category_label()),
        Cell::from(Span::styled(row.owner_name(), owner_style)),
    ])
}

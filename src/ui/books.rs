use crate::actions::{Mode, Response};
use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", Mode::View.heading()))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(Response::Table(table)) = &app.response else {
        let empty = Paragraph::new("No data loaded").style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, inner);
        return;
    };

    let header = Row::new(table.columns.iter().map(|c| {
        Cell::from(c.as_str()).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    }));

    let visible_height = inner.height.saturating_sub(1) as usize;
    let rows: Vec<Row> = table
        .display_rows()
        .into_iter()
        .skip(app.table_scroll)
        .take(visible_height)
        .map(Row::new)
        .collect();

    let widths: Vec<Constraint> = table
        .column_widths()
        .into_iter()
        .map(|w| {
            let w = u16::try_from(w).unwrap_or(u16::MAX).saturating_add(2);
            Constraint::Length(w.min(inner.width))
        })
        .collect();

    let widget = Table::new(rows, widths).header(header);
    f.render_widget(widget, inner);
}

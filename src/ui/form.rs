use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let labels = app.mode.field_labels();

    let outer = Block::default()
        .title(format!(" {} ", app.mode.heading()))
        .borders(Borders::ALL);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let mut constraints: Vec<Constraint> = labels.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, label) in labels.iter().enumerate() {
        let active = app.focus == Focus::Form && i == app.selected_field;
        let style = if active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let value = app.fields.get(i).map(String::as_str).unwrap_or("");
        let text = if active {
            format!("{}_", value)
        } else {
            value.to_string()
        };

        let input = Paragraph::new(text).block(
            Block::default()
                .title(format!(" {} ", label))
                .borders(Borders::ALL)
                .border_style(style),
        );
        f.render_widget(input, chunks[i]);
    }

    let button = Paragraph::new(format!("[ {} ]", app.mode.label())).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    if let Some(rest) = chunks.last() {
        f.render_widget(button, *rest);
    }
}

use crate::actions::Mode;
use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(area);

    let border_style = if app.focus == Focus::Sidebar {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let selected = app.mode_index();
    let items: Vec<ListItem> = Mode::ALL
        .iter()
        .enumerate()
        .map(|(i, mode)| {
            if i == selected {
                ListItem::new(format!(">> {}", mode.label())).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(format!("   {}", mode.label()))
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Select Operation ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(list, chunks[0]);

    let info = Paragraph::new("LibraryDB Terminal App")
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Blue))
        .wrap(Wrap { trim: true });
    f.render_widget(info, chunks[1]);
}

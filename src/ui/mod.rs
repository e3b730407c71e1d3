pub mod books;
pub mod form;
pub mod sidebar;

use crate::actions::{Mode, Response};
use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(f: &mut Frame, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(0)])
        .split(f.area());

    sidebar::render(f, app, columns[0]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(columns[1]);

    let title = Paragraph::new(" Library Management System ")
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(title, chunks[0]);

    match app.mode {
        Mode::View => books::render(f, app, chunks[1]),
        _ => form::render(f, app, chunks[1]),
    }

    render_status(f, app, chunks[2]);

    let help = Paragraph::new(help_line(app));
    f.render_widget(help, chunks[3]);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let status = if let Some(err) = &app.error {
        Paragraph::new(err.as_str()).style(Style::default().fg(Color::Red))
    } else if let Some(Response::Success(msg)) = &app.response {
        Paragraph::new(*msg).style(Style::default().fg(Color::Green))
    } else {
        Paragraph::new("")
    };
    let status = status
        .block(Block::default().borders(Borders::ALL).title(" Status "))
        .wrap(Wrap { trim: true });
    f.render_widget(status, area);
}

fn help_line(app: &App) -> &'static str {
    match (app.focus, app.mode) {
        (Focus::Sidebar, Mode::View) => {
            " [j/k] Select | [r] Refresh | [PgUp/PgDn] Scroll | [q] Quit "
        }
        (Focus::Sidebar, _) => " [j/k] Select | [Tab/Enter] Edit Form | [q] Quit ",
        (Focus::Form, _) => " [Tab] Next Field | [Enter] Submit | [Esc] Back ",
    }
}

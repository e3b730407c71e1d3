use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use librarydb::actions::{self, Mode, Request, Response};
use librarydb::app::{App, Focus};
use librarydb::config::AppConfig;
use librarydb::db::Db;
use librarydb::{logging, ui};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::path::{Path, PathBuf};
use std::{io, time::Duration};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = AppConfig::load()?;
    logging::init_logging(&config.log_level, Path::new(&config.log_dir))?;
    let db = Db::new(&config.database_path);

    if let Some(output) = run_command(&db, &config, &args)? {
        println!("{}", output);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, App::new(db));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}

/// Runs a headless subcommand and returns what it prints. `None` means no
/// subcommand was given and the interactive UI should start.
fn run_command(db: &Db, config: &AppConfig, args: &[String]) -> Result<Option<String>> {
    if args.len() < 2 {
        return Ok(None);
    }

    let mode = match args[1].as_str() {
        "config" => {
            let path = match args.get(2) {
                Some(path) => {
                    let path = PathBuf::from(path);
                    config.save_to(&path)?;
                    path
                }
                None => config.save()?,
            };
            return Ok(Some(format!("Wrote {}", path.display())));
        }
        "list" => {
            let mut lines = Vec::new();
            if let Response::Table(table) = actions::handle(db, &Request::View)? {
                lines.push(table.columns.join(" | "));
                for row in table.display_rows() {
                    lines.push(row.join(" | "));
                }
            }
            return Ok(Some(lines.join("\n")));
        }
        "add" => Mode::Add,
        "update" => Mode::Update,
        "delete" => Mode::Delete,
        other => anyhow::bail!("unknown command `{}`; expected list|add|update|delete|config", other),
    };

    let labels = mode.field_labels();
    if args.len() - 2 != labels.len() {
        anyhow::bail!(
            "usage: librarydb {} {}",
            args[1],
            labels
                .iter()
                .map(|l| format!("<{}>", l))
                .collect::<Vec<_>>()
                .join(" ")
        );
    }
    let request = Request::from_fields(mode, &args[2..]);
    match actions::handle(db, &request)? {
        Response::Success(msg) => Ok(Some(msg.to_string())),
        Response::Table(_) => Ok(None),
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::render(f, &app))
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.focus {
        Focus::Sidebar => match key.code {
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => app.next_mode(),
            KeyCode::Up | KeyCode::Char('k') => app.prev_mode(),
            KeyCode::PageDown => app.scroll_down(),
            KeyCode::PageUp => app.scroll_up(),
            KeyCode::Char('r') if app.mode == Mode::View => app.submit(),
            KeyCode::Enter if app.mode == Mode::View => app.submit(),
            KeyCode::Tab | KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
                app.focus_form()
            }
            _ => {}
        },
        Focus::Form => match key.code {
            KeyCode::Esc => app.focus_sidebar(),
            KeyCode::Enter => app.submit(),
            KeyCode::Tab | KeyCode::Down => app.next_field(),
            KeyCode::BackTab | KeyCode::Up => app.prev_field(),
            KeyCode::Backspace => app.pop_char(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                app.push_char(c)
            }
            _ => {}
        },
    }
}

use crate::actions::{self, Mode, Request, Response};
use crate::db::Db;
use log::{debug, warn};

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Focus {
    Sidebar,
    Form,
}

pub struct App {
    pub db: Db,
    pub mode: Mode,
    pub focus: Focus,
    pub should_quit: bool,
    // Form State
    pub fields: Vec<String>,
    pub selected_field: usize,
    // Last round trip
    pub response: Option<Response>,
    pub error: Option<String>,
    pub table_scroll: usize,
}

impl App {
    pub fn new(db: Db) -> Self {
        let mut app = Self {
            db,
            mode: Mode::View,
            focus: Focus::Sidebar,
            should_quit: false,
            fields: Vec::new(),
            selected_field: 0,
            response: None,
            error: None,
            table_scroll: 0,
        };
        app.enter_mode(Mode::View);
        app
    }

    pub fn mode_index(&self) -> usize {
        Mode::ALL.iter().position(|m| *m == self.mode).unwrap_or(0)
    }

    /// Switches mode, dropping whatever was typed or shown before.
    /// Entering View fetches the table right away.
    pub fn enter_mode(&mut self, mode: Mode) {
        debug!("event=mode_switch module=app mode={:?}", mode);
        self.mode = mode;
        self.fields = vec![String::new(); mode.field_labels().len()];
        self.selected_field = 0;
        self.response = None;
        self.error = None;
        self.table_scroll = 0;
        if mode == Mode::View {
            self.focus = Focus::Sidebar;
            self.submit();
        }
    }

    pub fn next_mode(&mut self) {
        let idx = (self.mode_index() + 1) % Mode::ALL.len();
        self.enter_mode(Mode::ALL[idx]);
    }

    pub fn prev_mode(&mut self) {
        let idx = self.mode_index();
        let idx = if idx > 0 { idx - 1 } else { Mode::ALL.len() - 1 };
        self.enter_mode(Mode::ALL[idx]);
    }

    pub fn focus_form(&mut self) {
        if !self.fields.is_empty() {
            self.focus = Focus::Form;
        }
    }

    pub fn focus_sidebar(&mut self) {
        self.focus = Focus::Sidebar;
    }

    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.selected_field = (self.selected_field + 1) % self.fields.len();
        }
    }

    pub fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            if self.selected_field > 0 {
                self.selected_field -= 1;
            } else {
                self.selected_field = self.fields.len() - 1;
            }
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.selected_field) {
            field.push(c);
            self.clear_outcome();
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.selected_field) {
            field.pop();
            self.clear_outcome();
        }
    }

    /// A success or error message belongs to the submit that produced it.
    fn clear_outcome(&mut self) {
        self.response = None;
        self.error = None;
    }

    /// Runs the current mode's action with the typed field values.
    pub fn submit(&mut self) {
        let request = Request::from_fields(self.mode, &self.fields);
        match actions::handle(&self.db, &request) {
            Ok(response) => {
                self.response = Some(response);
                self.error = None;
                self.table_scroll = 0;
            }
            Err(e) => {
                warn!(
                    "event=submit module=app status=error mode={:?} error={}",
                    self.mode, e
                );
                self.response = None;
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn scroll_down(&mut self) {
        if let Some(Response::Table(table)) = &self.response {
            if self.table_scroll + 1 < table.row_count() {
                self.table_scroll += 1;
            }
        }
    }

    pub fn scroll_up(&mut self) {
        self.table_scroll = self.table_scroll.saturating_sub(1);
    }
}
